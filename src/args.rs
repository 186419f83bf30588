use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) const USAGE: &str = concat!(
    "Usage: wrapsnake [<options>]\n",
    "\n",
    "Play snake on a board whose edges wrap around.\n",
    "\n",
    "Move with the arrow keys, wasd, or hjkl.  Quit with q, Esc, or Ctrl-C.\n",
    "\n",
    "Options:\n",
    "  -c, --config <path>     Read configuration from the given file\n",
    "  -l, --log-file <path>   Write log messages to the given file\n",
    "  -h, --help              Show this help and exit\n",
    "  -V, --version           Show the program version and exit\n",
);

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Cli::Run(Arguments::default()));
    }

    #[rstest]
    #[case(&["--config", "snake.toml"])]
    #[case(&["-c", "snake.toml"])]
    #[case(&["--config=snake.toml"])]
    fn config_path(#[case] args: &[&str]) {
        assert_eq!(
            parse(args).unwrap(),
            Cli::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: None,
            })
        );
    }

    #[test]
    fn both_paths() {
        assert_eq!(
            parse(&["-l", "snake.log", "--config", "snake.toml"]).unwrap(),
            Cli::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
            })
        );
    }

    #[rstest]
    #[case(&["--help"], Cli::Help)]
    #[case(&["-h", "--bogus"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    #[case(&["--config", "x.toml", "--version"], Cli::Version)]
    fn info_flags(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).unwrap(), cli);
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
