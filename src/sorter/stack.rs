//! Handling stack labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three mutually exclusive stacks a package can be dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stack {
    /// Neither bulky nor heavy
    Standard,
    /// Bulky or heavy, but not both
    Special,
    /// Both bulky and heavy
    Rejected,
}

impl Stack {
    /// Wire name of the stack, matching the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Special => "SPECIAL",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Stack::Standard.to_string(), "STANDARD");
        assert_eq!(Stack::Special.to_string(), "SPECIAL");
        assert_eq!(Stack::Rejected.to_string(), "REJECTED");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Stack::Special).unwrap();
        assert_eq!(json, r#""SPECIAL""#);

        let parsed: Stack = serde_json::from_str(r#""REJECTED""#).unwrap();
        assert_eq!(parsed, Stack::Rejected);
    }
}
