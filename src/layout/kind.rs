use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{MorphError, MorphResult};

/// Closed set of chart placements. Each kind maps to exactly one algorithm in
/// [`crate::LayoutCalculator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LayoutKind {
    Grid,
    Scatter,
    Bar,
    Radial,
    Histogram,
    DotPlot,
    Beeswarm,
    Violin,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 8] = [
        LayoutKind::Grid,
        LayoutKind::Scatter,
        LayoutKind::Bar,
        LayoutKind::Radial,
        LayoutKind::Histogram,
        LayoutKind::DotPlot,
        LayoutKind::Beeswarm,
        LayoutKind::Violin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Radial => "radial",
            Self::Histogram => "histogram",
            Self::DotPlot => "dotplot",
            Self::Beeswarm => "beeswarm",
            Self::Violin => "violin",
        }
    }

    /// RADIAL and BAR may place points slightly outside the inner canvas.
    pub fn allows_overflow(self) -> bool {
        matches!(self, Self::Radial | Self::Bar)
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            Self::Grid => 0,
            Self::Scatter => 1,
            Self::Bar => 2,
            Self::Radial => 3,
            Self::Histogram => 4,
            Self::DotPlot => 5,
            Self::Beeswarm => 6,
            Self::Violin => 7,
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = MorphError;

    fn from_str(s: &str) -> MorphResult<Self> {
        let kind = s.trim().to_ascii_lowercase();
        if kind.is_empty() {
            return Err(MorphError::config("layout kind must be non-empty"));
        }
        match kind.as_str() {
            "grid" => Ok(Self::Grid),
            "scatter" => Ok(Self::Scatter),
            "bar" => Ok(Self::Bar),
            "radial" => Ok(Self::Radial),
            "histogram" => Ok(Self::Histogram),
            "dotplot" | "dot_plot" | "dot-plot" => Ok(Self::DotPlot),
            "beeswarm" => Ok(Self::Beeswarm),
            "violin" => Ok(Self::Violin),
            _ => Err(MorphError::config(format!("unknown layout kind '{kind}'"))),
        }
    }
}

impl TryFrom<String> for LayoutKind {
    type Error = MorphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LayoutKind> for String {
    fn from(value: LayoutKind) -> Self {
        value.as_str().to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/kind.rs"]
mod tests;
