use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Right,     // R
    Left,      // L
    Eye,       // E
    RightSide, // RS
    LeftSide,  // LS
}

impl Location {
    pub fn code(&self) -> &str {
        match self {
            Location::Right => "R",
            Location::Left => "L",
            Location::Eye => "E",
            Location::RightSide => "RS",
            Location::LeftSide => "LS",
        }
    }

    /// Label used in reports and charts.
    pub fn label(&self) -> &'static str {
        match self {
            Location::Right => "Right",
            Location::Left => "Left",
            Location::Eye => "Eye",
            Location::RightSide => "Right Side",
            Location::LeftSide => "Left Side",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "R" => Some(Location::Right),
            "L" => Some(Location::Left),
            "E" => Some(Location::Eye),
            "RS" => Some(Location::RightSide),
            "LS" => Some(Location::LeftSide),
            _ => None,
        }
    }
}
