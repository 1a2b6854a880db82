use serde::{Deserialize, Serialize};

/// A trigger is either one of the fixed tags or a free-text entry.
/// Free text replaces any tag selection, so `Other` is always the sole
/// trigger of a record when present.
///
/// Stored as a plain string: unknown labels read back as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Trigger {
    Sleeplessness,
    Fatigue,
    Unknown,
    Dehydration,
    Hunger,
    Heat,
    Stress,
    Other(String),
}

impl Trigger {
    pub fn label(&self) -> &str {
        match self {
            Trigger::Sleeplessness => "Sleeplessness",
            Trigger::Fatigue => "Fatigue",
            Trigger::Unknown => "Unknown",
            Trigger::Dehydration => "Dehydration",
            Trigger::Hunger => "Hunger",
            Trigger::Heat => "Heat",
            Trigger::Stress => "Stress",
            Trigger::Other(text) => text,
        }
    }

    /// Helper: convert input code from CLI (tags only; free text goes
    /// through `Trigger::Other` directly)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "sleeplessness" => Some(Trigger::Sleeplessness),
            "fatigue" => Some(Trigger::Fatigue),
            "unknown" => Some(Trigger::Unknown),
            "dehydration" => Some(Trigger::Dehydration),
            "hunger" => Some(Trigger::Hunger),
            "heat" => Some(Trigger::Heat),
            "stress" => Some(Trigger::Stress),
            _ => None,
        }
    }
}

impl From<String> for Trigger {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Sleeplessness" => Trigger::Sleeplessness,
            "Fatigue" => Trigger::Fatigue,
            "Unknown" => Trigger::Unknown,
            "Dehydration" => Trigger::Dehydration,
            "Hunger" => Trigger::Hunger,
            "Heat" => Trigger::Heat,
            "Stress" => Trigger::Stress,
            _ => Trigger::Other(s),
        }
    }
}

impl From<Trigger> for String {
    fn from(t: Trigger) -> Self {
        t.label().to_string()
    }
}
