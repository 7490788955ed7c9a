//! Cell alignment policy

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Where a selected cell should sit inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellAlign {
    /// Leading edges line up.
    Start,
    /// Midpoints line up.
    #[default]
    Center,
    /// Trailing edges line up.
    End,
}

impl CellAlign {
    /// Reference point of a span `[offset, offset + extent)` under this policy.
    ///
    /// The same rule applies to cells and to the viewport window, which is
    /// what lets the resolver compare them directly.
    #[inline]
    pub fn anchor(self, offset: f32, extent: f32) -> f32 {
        match self {
            CellAlign::Start => offset,
            CellAlign::Center => offset + extent / 2.0,
            CellAlign::End => offset + extent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellAlign::Start => "start",
            CellAlign::Center => "center",
            CellAlign::End => "end",
        }
    }
}

impl fmt::Display for CellAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellAlign {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" => Ok(CellAlign::Start),
            "center" | "centre" => Ok(CellAlign::Center),
            "end" | "right" => Ok(CellAlign::End),
            _ => Err(ModelError::UnknownAlignment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_follows_policy() {
        assert_eq!(CellAlign::Start.anchor(100.0, 40.0), 100.0);
        assert_eq!(CellAlign::Center.anchor(100.0, 40.0), 120.0);
        assert_eq!(CellAlign::End.anchor(100.0, 40.0), 140.0);
    }

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("Center".parse::<CellAlign>(), Ok(CellAlign::Center));
        assert_eq!(" left ".parse::<CellAlign>(), Ok(CellAlign::Start));
        assert_eq!("END".parse::<CellAlign>(), Ok(CellAlign::End));
        assert!("middle".parse::<CellAlign>().is_err());
    }
}
