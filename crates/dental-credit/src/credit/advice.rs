use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Impact",
            Self::Medium => "Medium Impact",
            Self::Low => "Low Impact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    Payment,
    Utilization,
    History,
    Accounts,
    Inquiries,
}

impl TipCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Payment => "Payment History",
            Self::Utilization => "Credit Utilization",
            Self::History => "Credit Age",
            Self::Accounts => "Account Mix",
            Self::Inquiries => "Hard Inquiries",
        }
    }
}

/// One entry in the score improvement guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub timeframe: String,
    pub category: TipCategory,
}
