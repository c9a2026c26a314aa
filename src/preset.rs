//! Scale choices offered in the control panel.

use crate::layout::Scale;
use std::fmt;

/// Fallback used by [`ScalePreset::Auto`] until screen-fit sizing exists.
const AUTO_SCALE_PERCENT: u32 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalePreset {
    Percent(u32),
    Auto,
}

impl ScalePreset {
    pub const ALL: [ScalePreset; 7] = [
        ScalePreset::Percent(50),
        ScalePreset::Percent(60),
        ScalePreset::Percent(75),
        ScalePreset::Percent(80),
        ScalePreset::Percent(90),
        ScalePreset::Percent(100),
        ScalePreset::Auto,
    ];

    pub fn percent(self) -> u32 {
        match self {
            ScalePreset::Percent(p) => p,
            ScalePreset::Auto => AUTO_SCALE_PERCENT,
        }
    }

    pub fn scale(self) -> Scale {
        // Every preset lies within (0, 1.2]
        Scale::new(f64::from(self.percent()) / 100.0).unwrap_or_default()
    }

    /// The preset shown for a persisted scale; `None` if it matches none of them.
    pub fn from_scale(value: f64) -> Option<Self> {
        let percent = (value * 100.0).round();
        Self::ALL
            .into_iter()
            .filter(|p| matches!(p, ScalePreset::Percent(_)))
            .find(|p| f64::from(p.percent()) == percent)
    }
}

impl fmt::Display for ScalePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalePreset::Percent(p) => write!(f, "{p}%"),
            ScalePreset::Auto => f.write_str("Auto"),
        }
    }
}
