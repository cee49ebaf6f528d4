use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Emergency,
    Urgent,
    Elective,
}

impl Urgency {
    pub const fn ordered() -> [Self; 3] {
        [Self::Emergency, Self::Urgent, Self::Elective]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Urgent => "Urgent",
            Self::Elective => "Elective",
        }
    }
}

/// A financing product offered by a partner lender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub id: String,
    pub lender: String,
    pub min_credit_score: u16,
    pub max_loan_amount: u32,
    pub interest_rate_range: String,
    pub terms: Vec<String>,
    pub special_features: Vec<String>,
    pub processing_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DentalProcedure {
    pub id: String,
    pub name: String,
    pub avg_cost: u32,
    pub urgency: Urgency,
}

/// Offers the person can finance the procedure with: the score clears the
/// lender's floor and the average cost fits under the lending cap. Offer
/// order is preserved.
pub fn qualified_offers(
    offers: &[LoanOffer],
    credit_score: u16,
    procedure: &DentalProcedure,
) -> Vec<LoanOffer> {
    offers
        .iter()
        .filter(|offer| {
            credit_score >= offer.min_credit_score && procedure.avg_cost <= offer.max_loan_amount
        })
        .cloned()
        .collect()
}

/// Financing panel for one person/procedure pair.
#[derive(Debug, Clone, Serialize)]
pub struct QualificationView {
    pub procedure: DentalProcedure,
    pub credit_score: u16,
    pub qualified: Vec<LoanOffer>,
    pub declined: usize,
}

pub fn qualification(
    offers: &[LoanOffer],
    credit_score: u16,
    procedure: &DentalProcedure,
) -> QualificationView {
    let qualified = qualified_offers(offers, credit_score, procedure);
    QualificationView {
        procedure: procedure.clone(),
        credit_score,
        declined: offers.len() - qualified.len(),
        qualified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str, lender: &str, min_score: u16, max_amount: u32) -> LoanOffer {
        LoanOffer {
            id: id.to_string(),
            lender: lender.to_string(),
            min_credit_score: min_score,
            max_loan_amount: max_amount,
            interest_rate_range: "5.99% - 31.99%".to_string(),
            terms: vec!["24 months".to_string()],
            special_features: Vec::new(),
            processing_time: "Same day".to_string(),
        }
    }

    fn implant() -> DentalProcedure {
        DentalProcedure {
            id: "4".to_string(),
            name: "Dental Implant".to_string(),
            avg_cost: 3500,
            urgency: Urgency::Elective,
        }
    }

    #[test]
    fn both_bounds_must_clear() {
        let offers = vec![
            offer("1", "CareCredit", 580, 25_000),
            offer("2", "Picky Lender", 700, 25_000),
            offer("3", "Small Cap", 550, 3_000),
        ];

        let qualified = qualified_offers(&offers, 650, &implant());
        let lenders: Vec<&str> = qualified.iter().map(|o| o.lender.as_str()).collect();
        assert_eq!(lenders, vec!["CareCredit"]);
    }

    #[test]
    fn boundary_scores_and_costs_qualify() {
        let offers = vec![offer("1", "Exact Fit", 650, 3_500)];
        assert_eq!(qualified_offers(&offers, 650, &implant()).len(), 1);
        assert_eq!(qualified_offers(&offers, 649, &implant()).len(), 0);
    }

    #[test]
    fn empty_offer_list_yields_empty_result() {
        let view = qualification(&[], 800, &implant());
        assert!(view.qualified.is_empty());
        assert_eq!(view.declined, 0);
    }
}
