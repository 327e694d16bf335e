use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    Day,
    Night,
}

impl ShiftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Day => "Day",
            ShiftType::Night => "Night",
        }
    }

    pub fn variants() -> [(ShiftType, &'static str); 2] {
        [
            (ShiftType::Day, "daytime shift, sleep overnight"),
            (ShiftType::Night, "overnight shift, sleep during the day"),
        ]
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShiftTypeError(String);

impl fmt::Display for ParseShiftTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shift type '{}' (expected day or night)", self.0)
    }
}

impl std::error::Error for ParseShiftTypeError {}

impl FromStr for ShiftType {
    type Err = ParseShiftTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "d" => Ok(ShiftType::Day),
            "night" | "n" => Ok(ShiftType::Night),
            _ => Err(ParseShiftTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Night".parse::<ShiftType>().unwrap(), ShiftType::Night);
        assert_eq!(" d ".parse::<ShiftType>().unwrap(), ShiftType::Day);
        let err = "evening".parse::<ShiftType>().unwrap_err();
        assert!(err.to_string().contains("evening"));
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&ShiftType::Night).unwrap();
        assert_eq!(json, "\"night\"");
    }
}
