//! Severity definitions and registry level mapping

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric registry level meaning "no severity assigned"; sorts below
/// everything a permissive threshold would filter on.
pub const LEVEL_UNSET: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Single-letter code used in local log file lines
    pub fn code(&self) -> char {
        match self {
            Severity::Info => 'I',
            Severity::Error => 'E',
            Severity::Debug => 'D',
            Severity::Warning => 'W',
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
            Severity::Debug => "DEBUG",
            Severity::Warning => "WARNING",
        }
    }

    /// Numeric level used by the sink registry threshold
    pub fn level(&self) -> u8 {
        match self {
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
        }
    }

    /// Map a registry level back to a severity; unrecognized values are
    /// the unset fallback (`None`). Total, never fails.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            10 => Some(Severity::Debug),
            20 => Some(Severity::Info),
            30 => Some(Severity::Warning),
            40 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "I" | "INFO" => Ok(Severity::Info),
            "E" | "ERROR" => Ok(Severity::Error),
            "D" | "DEBUG" => Ok(Severity::Debug),
            "W" | "WARN" | "WARNING" => Ok(Severity::Warning),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Severity::Info.code(), 'I');
        assert_eq!(Severity::Error.code(), 'E');
        assert_eq!(Severity::Debug.code(), 'D');
        assert_eq!(Severity::Warning.code(), 'W');
    }

    #[test]
    fn test_level_mapping_round_trips() {
        for severity in [
            Severity::Info,
            Severity::Error,
            Severity::Debug,
            Severity::Warning,
        ] {
            assert_eq!(Severity::from_level(severity.level()), Some(severity));
        }
    }

    #[test]
    fn test_unrecognized_level_is_unset() {
        assert_eq!(Severity::from_level(0), None);
        assert_eq!(Severity::from_level(25), None);
        assert_eq!(Severity::from_level(255), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("E".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warning));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }
}
