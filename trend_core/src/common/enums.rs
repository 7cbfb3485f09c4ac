use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Trend direction as stored in the history table.
///
/// `Display`/`FromStr` use the table glyphs, serde uses the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendLabel {
    #[strum(serialize = "🟩")]
    Growth,
    #[strum(serialize = "🟥")]
    Decline,
    #[strum(serialize = "🟨")]
    Sideways,
    #[strum(serialize = "🟪")]
    InsufficientData,
}

impl TrendLabel {
    /// Tie-break order of the vote: earlier labels win ties.
    pub const VOTE_PRIORITY: [TrendLabel; 4] = [
        TrendLabel::Decline,
        TrendLabel::Growth,
        TrendLabel::Sideways,
        TrendLabel::InsufficientData,
    ];

    pub fn is_trending(&self) -> bool {
        matches!(self, TrendLabel::Growth | TrendLabel::Decline)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrendLabel::Growth => "growth",
            TrendLabel::Decline => "decline",
            TrendLabel::Sideways => "sideways",
            TrendLabel::InsufficientData => "insufficient data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMethod {
    #[strum(serialize = "simple comparison")]
    SimpleComparison,
    #[strum(serialize = "moving averages")]
    MovingAverages,
    #[strum(serialize = "linear regression")]
    LinearRegression,
    #[strum(serialize = "momentum")]
    Momentum,
}

impl TrendMethod {
    pub const ALL: [TrendMethod; 4] = [
        TrendMethod::SimpleComparison,
        TrendMethod::MovingAverages,
        TrendMethod::LinearRegression,
        TrendMethod::Momentum,
    ];
}
