use serde::{Deserialize, Serialize};

/// One contributing reason behind a priority score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInsight {
    pub label: String,
    pub points: u8,
}

/// Priority score with its ordered breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Capped at 100.
    pub total: u8,
    pub insights: Vec<ScoreInsight>,
}

impl ScoreResult {
    /// Sum of insight points before the cap.
    pub fn raw_points(&self) -> u32 {
        self.insights
            .iter()
            .map(|insight| u32::from(insight.points))
            .sum()
    }
}
