mod app;
mod args;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::args::{Arguments, Cli};
use crate::config::Config;
use crate::game::Palette;
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Cli::from_parser(lexopt::Parser::from_env()) {
        Ok(Cli::Run(args)) => exit_code(run(args)),
        Ok(Cli::Help) => {
            print!("{}", args::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}");
            eprintln!("Run `wrapsnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let Config {
        tick_rate,
        log_file,
        styles,
    } = Config::discover(args.config.as_deref()).context("failed to load configuration")?;
    let log_file = args.log_file.or(log_file);
    logging::init(log_file.as_deref()).context("failed to set up logging")?;
    log::info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let app = App::new(tick_rate, Palette::from(styles));
    // `try_init()` also installs a panic hook that restores the terminal
    let terminal = ratatui::try_init().context("failed to set up terminal")?;
    let r = app.run(terminal);
    ratatui::restore();
    r.map_err(Into::into)
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("wrapsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
