//! Serialization layouts for prompt text.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Layout used when turning a list of atoms back into prompt text.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Split` - One atom per line (default)
/// - `Zip` - All atoms on a single line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SerializeMode {
    /// One atom per line, suited for reading and diffing (default)
    #[default]
    Split,
    /// Compact single-line output
    Zip,
}

impl SerializeMode {
    /// Returns the separator placed between two rendered atoms.
    pub fn separator(self) -> &'static str {
        match self {
            SerializeMode::Split => ",\n",
            SerializeMode::Zip => ", ",
        }
    }
}

impl FromStr for SerializeMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "split" => Ok(Self::Split),
            "zip" => Ok(Self::Zip),
            _ => Err("Unsupported serialize mode"),
        }
    }
}

impl From<SerializeMode> for &'static str {
    fn from(val: SerializeMode) -> Self {
        match val {
            SerializeMode::Split => "split",
            SerializeMode::Zip => "zip",
        }
    }
}

impl Display for SerializeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
