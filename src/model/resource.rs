//! Resource classification carried by the RES_CLASS column.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceClass {
    /// Labour ("L") and anything unrecognised
    Work,
    Material,
    Cost,
}

impl ResourceClass {
    /// Dispatch on the first character; an empty code has no class.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.chars().next()? {
            'N' => Some(Self::Material),
            'C' => Some(Self::Cost),
            _ => Some(Self::Work),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Material => "MATERIAL",
            Self::Cost => "COST",
        }
    }
}
