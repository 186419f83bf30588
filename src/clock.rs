use crate::consts;
use crate::game::Pacer;
use serde::Deserialize;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How many times per second the game advances
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "u32")]
pub(crate) struct TickRate(u32);

impl TickRate {
    /// Time between consecutive ticks
    pub(crate) fn period(self) -> Duration {
        Duration::from_secs(1) / self.0
    }
}

impl Default for TickRate {
    fn default() -> TickRate {
        TickRate(consts::DEFAULT_TICK_RATE)
    }
}

impl TryFrom<u32> for TickRate {
    type Error = TickRateError;

    fn try_from(value: u32) -> Result<TickRate, TickRateError> {
        if (1..=consts::MAX_TICK_RATE).contains(&value) {
            Ok(TickRate(value))
        } else {
            Err(TickRateError(value))
        }
    }
}

impl fmt::Display for TickRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("tick rate must be between 1 and {max}, got {0}", max = consts::MAX_TICK_RATE)]
pub(crate) struct TickRateError(u32);

/// Paces the game loop by sleeping until each tick is due
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Clock {
    next_tick: Option<Instant>,
}

impl Pacer for Clock {
    fn tick(&mut self, rate: TickRate) {
        let now = Instant::now();
        let when = self.next_tick.unwrap_or(now);
        let wait = when.saturating_duration_since(now);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        // After falling behind, count from now instead of firing a burst of
        // catch-up ticks.
        self.next_tick = Some(when.max(now) + rate.period());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Duration::from_secs(1))]
    #[case(20, Duration::from_millis(50))]
    #[case(50, Duration::from_millis(20))]
    fn test_period(#[case] rate: u32, #[case] period: Duration) {
        let rate = TickRate::try_from(rate).unwrap();
        assert_eq!(rate.period(), period);
    }

    #[rstest]
    #[case(0)]
    #[case(61)]
    #[case(1000)]
    fn invalid_rate(#[case] rate: u32) {
        assert_eq!(TickRate::try_from(rate), Err(TickRateError(rate)));
    }

    #[test]
    fn default_rate() {
        assert_eq!(TickRate::default(), TickRate::try_from(20).unwrap());
        assert_eq!(TickRate::default().to_string(), "20/s");
    }

    #[test]
    fn error_message() {
        assert_eq!(
            TickRateError(0).to_string(),
            "tick rate must be between 1 and 60, got 0"
        );
    }

    #[test]
    fn clock_waits_between_ticks() {
        let rate = TickRate::try_from(50).unwrap();
        let mut clock = Clock::default();
        let start = Instant::now();
        clock.tick(rate);
        assert!(
            start.elapsed() < rate.period(),
            "first tick should not wait"
        );
        clock.tick(rate);
        clock.tick(rate);
        assert!(
            start.elapsed() >= 2 * rate.period(),
            "three ticks took only {:?}",
            start.elapsed()
        );
    }
}
