use crate::query::TierTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score the bureaus report.
pub const SCORE_FLOOR: u16 = 300;
/// Highest score the bureaus report.
pub const SCORE_CEILING: u16 = 850;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub String);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    /// Wire value, matching the serde rename. Filter descriptors use this.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Standard score bands, declared worst to best so the derived ordering
/// follows tier quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl ScoreTier {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Poor,
            Self::Fair,
            Self::Good,
            Self::VeryGood,
            Self::Excellent,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }

    /// The standard band table: 800+ Excellent, 740+ Very Good, 670+ Good,
    /// 580+ Fair, everything below Poor.
    pub fn table() -> TierTable<Self> {
        TierTable::new(
            vec![
                (800.0, Self::Excellent),
                (740.0, Self::VeryGood),
                (670.0, Self::Good),
                (580.0, Self::Fair),
            ],
            Self::Poor,
        )
    }

    pub fn for_score(score: u16) -> Self {
        Self::table().classify(f64::from(score))
    }
}

/// One point on a person's score history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub date: NaiveDate,
    pub score: u16,
}

/// Direction of the most recent score movement, read off the newest two
/// history points. Fewer than two points reads as steady.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Steady,
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Declining => "Declining",
            Self::Steady => "Steady",
        }
    }

    pub fn from_history(history: &[ScorePoint]) -> Self {
        match history {
            [.., previous, latest] => {
                if latest.score > previous.score {
                    Self::Improving
                } else if latest.score < previous.score {
                    Self::Declining
                } else {
                    Self::Steady
                }
            }
            _ => Self::Steady,
        }
    }
}

/// Signed change between the two newest history points.
pub fn latest_delta(history: &[ScorePoint]) -> i32 {
    match history {
        [.., previous, latest] => i32::from(latest.score) - i32::from(previous.score),
        _ => 0,
    }
}

/// Position of a score along the reportable range, 0 to 100.
pub fn gauge_percent(score: u16) -> f64 {
    let clamped = score.clamp(SCORE_FLOOR, SCORE_CEILING);
    f64::from(clamped - SCORE_FLOOR) / f64::from(SCORE_CEILING - SCORE_FLOOR) * 100.0
}

/// High and low water marks over a history, for the history panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub highest: u16,
    pub lowest: u16,
    pub improvement: u16,
}

impl HistoryStats {
    pub fn from_history(history: &[ScorePoint]) -> Option<Self> {
        let first = history.first()?;
        let mut highest = first.score;
        let mut lowest = first.score;
        for point in &history[1..] {
            highest = highest.max(point.score);
            lowest = lowest.min(point.score);
        }
        Some(Self {
            highest,
            lowest,
            improvement: highest - lowest,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub status: String,
    pub company: String,
    pub position: String,
    pub years_at_job: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: u8,
    pub gender: String,
    pub marital_status: String,
    pub dependents: u8,
}

/// A tracked credit profile. History points are kept oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub address: Address,
    pub credit_score: u16,
    pub credit_history: Vec<ScorePoint>,
    pub income: u32,
    pub employment: Employment,
    pub demographics: Demographics,
    pub last_updated: NaiveDate,
    pub risk_level: RiskLevel,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.credit_score)
    }

    pub fn trend(&self) -> Trend {
        Trend::from_history(&self.credit_history)
    }
}
