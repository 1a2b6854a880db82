use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBucket {
    Morning,
    Noon,
    Evening,
}

impl TimeBucket {
    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::Morning => "Morning",
            TimeBucket::Noon => "Noon",
            TimeBucket::Evening => "Evening",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "m" | "morning" => Some(TimeBucket::Morning),
            "n" | "noon" => Some(TimeBucket::Noon),
            "e" | "evening" => Some(TimeBucket::Evening),
            _ => None,
        }
    }
}
