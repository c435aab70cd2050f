use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How a [`Dispatcher`](crate::Dispatcher) treats calls made while a callback is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Policy {
    /// Every call restarts the timer, the callback runs after the last call of a burst
    Debounce,
    /// Calls are dropped while a timer is pending, the callback runs after the first call of a burst
    Throttle,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Debounce
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_parse() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Policy::from_str("debounce")?, Policy::Debounce);
        assert_eq!(Policy::from_str("throttle")?, Policy::Throttle);
        assert!(Policy::from_str("immediate").is_err());
        assert_eq!(Policy::Throttle.to_string(), "throttle");
        Ok(())
    }
}
