//! Stack - The three-way handling classification

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The dispatch stack a package is routed to.
///
/// Constructed only as a classification output; the canonical string
/// labels are produced in one place, [`Stack::as_str`].
///
/// # Examples
///
/// ```
/// use packsort::Stack;
///
/// assert_eq!(Stack::Special.as_str(), "SPECIAL");
/// assert_eq!("REJECTED".parse::<Stack>(), Ok(Stack::Rejected));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stack {
    /// Neither bulky nor heavy - normal handling.
    Standard,
    /// Bulky or heavy, but not both - special handling.
    Special,
    /// Bulky and heavy - cannot be handled.
    Rejected,
}

impl Stack {
    /// Returns the canonical uppercase label for this stack.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Stack::Standard => "STANDARD",
            Stack::Special => "SPECIAL",
            Stack::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Stack`] from a non-canonical label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid stack label '{input}'")]
pub struct ParseStackError {
    /// The rejected input text.
    pub input: String,
}

impl FromStr for Stack {
    type Err = ParseStackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Stack::Standard),
            "SPECIAL" => Ok(Stack::Special),
            "REJECTED" => Ok(Stack::Rejected),
            other => Err(ParseStackError {
                input: other.to_string(),
            }),
        }
    }
}
