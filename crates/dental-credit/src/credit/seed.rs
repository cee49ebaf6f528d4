//! Seed dataset for the demo service and the CLI walkthrough. Eight
//! tracked profiles, a month of payment activity, a statement's worth of
//! card transactions, and the static financing catalog.

use chrono::NaiveDate;

use super::advice::{Impact, ImprovementTip, TipCategory};
use super::cards::{CardTransaction, SpendCategory, TransactionKind};
use super::domain::{
    Address, Demographics, Employment, Person, PersonId, RiskLevel, ScorePoint,
};
use super::offers::{DentalProcedure, LoanOffer, Urgency};
use super::payments::{AccountKind, PaymentRecord, PaymentStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn point(year: i32, month: u32, day: u32, score: u16) -> ScorePoint {
    ScorePoint {
        date: date(year, month, day),
        score,
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person {
            id: PersonId("1".to_string()),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            date_of_birth: date(1985, 3, 15),
            address: Address {
                street: "123 Oak Street".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                zip_code: "78701".to_string(),
            },
            credit_score: 750,
            credit_history: vec![point(2024, 11, 15, 745), point(2024, 12, 15, 750)],
            income: 75_000,
            employment: Employment {
                status: "employed".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                position: "Software Engineer".to_string(),
                years_at_job: 3,
            },
            demographics: Demographics {
                age: 39,
                gender: "female".to_string(),
                marital_status: "married".to_string(),
                dependents: 2,
            },
            last_updated: date(2024, 12, 15),
            risk_level: RiskLevel::Low,
        },
        Person {
            id: PersonId("2".to_string()),
            first_name: "Michael".to_string(),
            last_name: "Chen".to_string(),
            email: "michael.chen@email.com".to_string(),
            phone: "(555) 234-5678".to_string(),
            date_of_birth: date(1992, 7, 22),
            address: Address {
                street: "456 Pine Avenue".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip_code: "94102".to_string(),
            },
            credit_score: 680,
            credit_history: vec![
                point(2024, 10, 15, 670),
                point(2024, 11, 15, 675),
                point(2024, 12, 15, 680),
            ],
            income: 95_000,
            employment: Employment {
                status: "employed".to_string(),
                company: "Design Studio".to_string(),
                position: "UX Designer".to_string(),
                years_at_job: 2,
            },
            demographics: Demographics {
                age: 32,
                gender: "male".to_string(),
                marital_status: "single".to_string(),
                dependents: 0,
            },
            last_updated: date(2024, 12, 15),
            risk_level: RiskLevel::Medium,
        },
        Person {
            id: PersonId("3".to_string()),
            first_name: "Emily".to_string(),
            last_name: "Rodriguez".to_string(),
            email: "emily.rodriguez@email.com".to_string(),
            phone: "(555) 345-6789".to_string(),
            date_of_birth: date(1978, 11, 8),
            address: Address {
                street: "789 Maple Drive".to_string(),
                city: "Denver".to_string(),
                state: "CO".to_string(),
                zip_code: "80202".to_string(),
            },
            credit_score: 820,
            credit_history: vec![
                point(2024, 9, 15, 810),
                point(2024, 10, 15, 815),
                point(2024, 11, 15, 818),
                point(2024, 12, 15, 820),
            ],
            income: 120_000,
            employment: Employment {
                status: "employed".to_string(),
                company: "Healthcare Partners".to_string(),
                position: "Nurse Practitioner".to_string(),
                years_at_job: 8,
            },
            demographics: Demographics {
                age: 46,
                gender: "female".to_string(),
                marital_status: "divorced".to_string(),
                dependents: 1,
            },
            last_updated: date(2024, 12, 15),
            risk_level: RiskLevel::Low,
        },
        Person {
            id: PersonId("4".to_string()),
            first_name: "David".to_string(),
            last_name: "Thompson".to_string(),
            email: "david.thompson@email.com".to_string(),
            phone: "(555) 456-7890".to_string(),
            date_of_birth: date(1995, 1, 30),
            address: Address {
                street: "321 Cedar Lane".to_string(),
                city: "Miami".to_string(),
                state: "FL".to_string(),
                zip_code: "33101".to_string(),
            },
            credit_score: 580,
            credit_history: vec![
                point(2024, 9, 15, 560),
                point(2024, 10, 15, 565),
                point(2024, 11, 15, 575),
                point(2024, 12, 15, 580),
            ],
            income: 45_000,
            employment: Employment {
                status: "employed".to_string(),
                company: "Local Restaurant".to_string(),
                position: "Manager".to_string(),
                years_at_job: 1,
            },
            demographics: Demographics {
                age: 29,
                gender: "male".to_string(),
                marital_status: "single".to_string(),
                dependents: 0,
            },
            last_updated: date(2024, 12, 15),
            risk_level: RiskLevel::High,
        },
        Person {
            id: PersonId("5".to_string()),
            first_name: "Lisa".to_string(),
            last_name: "Williams".to_string(),
            email: "lisa.williams@email.com".to_string(),
            phone: "(555) 567-8901".to_string(),
            date_of_birth: date(1988, 9, 12),
            address: Address {
                street: "654 Birch Street".to_string(),
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                zip_code: "98101".to_string(),
            },
            credit_score: 720,
            credit_history: vec![
                point(2024, 8, 15, 700),
                point(2024, 9, 15, 705),
                point(2024, 10, 15, 710),
                point(2024, 11, 15, 715),
                point(2024, 12, 15, 720),
            ],
            income: 85_000,
            employment: Employment {
                status: "self-employed".to_string(),
                company: "Freelance Consulting".to_string(),
                position: "Business Consultant".to_string(),
                years_at_job: 4,
            },
            demographics: Demographics {
                age: 36,
                gender: "female".to_string(),
                marital_status: "married".to_string(),
                dependents: 3,
            },
            last_updated: date(2024, 12, 15),
            risk_level: RiskLevel::Low,
        },
        Person {
            id: PersonId("6".to_string()),
            first_name: "Robert".to_string(),
            last_name: "Davis".to_string(),
            email: "robert.davis@email.com".to_string(),
            phone: "(555) 678-9012".to_string(),
            date_of_birth: date(1965, 5, 18),
            address: Address {
                street: "987 Elm Court".to_string(),
                city: "Phoenix".to_string(),
                state: "AZ".to_string(),
                zip_code: "85001".to_string(),
            },
            credit_score: 780,
            credit_history: vec![
                point(2024, 10, 15, 775),
                point(2024, 11, 15, 778),
                point(2024, 12, 15, 780),
            ],
            income: 110_000,
            employment: Employment {
                status: "employed".to_string(),
                company: "Financial Services Corp".to_string(),
                position: "Senior Analyst".to_string(),
                years_at_job: 12,
            },
            demographics: Demographics {
                age: 59,
                gender: "male".to_string(),
                marital_status: "married".to_string(),
                dependents: 0,
            },
            last_updated: date(2024, 12, 15),
            risk_level: RiskLevel::Low,
        },
        Person {
            id: PersonId("7".to_string()),
            first_name: "Amanda".to_string(),
            last_name: "Garcia".to_string(),
            email: "amanda.garcia@email.com".to_string(),
            phone: "(555) 789-0123".to_string(),
            date_of_birth: date(1990, 12, 3),
            address: Address {
                street: "147 Willow Way".to_string(),
                city: "Atlanta".to_string(),
                state: "GA".to_string(),
                zip_code: "30301".to_string(),
            },
            credit_score: 650,
            credit_history: vec![
                point(2024, 9, 15, 630),
                point(2024, 10, 15, 640),
                point(2024, 11, 15, 645),
                point(2024, 12, 15, 650),
            ],
            income: 62_000,
            employment: Employment {
                status: "employed".to_string(),
                company: "Marketing Agency".to_string(),
                position: "Marketing Coordinator".to_string(),
                years_at_job: 2,
            },
            demographics: Demographics {
                age: 34,
                gender: "female".to_string(),
                marital_status: "single".to_string(),
                dependents: 1,
            },
            last_updated: date(2024, 12, 15),
            risk_level: RiskLevel::Medium,
        },
        Person {
            id: PersonId("8".to_string()),
            first_name: "James".to_string(),
            last_name: "Wilson".to_string(),
            email: "james.wilson@email.com".to_string(),
            phone: "(555) 890-1234".to_string(),
            date_of_birth: date(1982, 4, 25),
            address: Address {
                street: "258 Spruce Avenue".to_string(),
                city: "Boston".to_string(),
                state: "MA".to_string(),
                zip_code: "02101".to_string(),
            },
            credit_score: 710,
            credit_history: vec![
                point(2024, 8, 15, 690),
                point(2024, 9, 15, 695),
                point(2024, 10, 15, 700),
                point(2024, 11, 15, 705),
                point(2024, 12, 15, 710),
            ],
            income: 78_000,
            employment: Employment {
                status: "employed".to_string(),
                company: "Education Department".to_string(),
                position: "High School Teacher".to_string(),
                years_at_job: 6,
            },
            demographics: Demographics {
                age: 42,
                gender: "male".to_string(),
                marital_status: "married".to_string(),
                dependents: 2,
            },
            last_updated: date(2024, 12, 15),
            risk_level: RiskLevel::Low,
        },
    ]
}

pub fn payment_history() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord {
            id: "1".to_string(),
            payment_date: date(2024, 12, 1),
            creditor_name: "Chase Sapphire Card".to_string(),
            account_kind: AccountKind::CreditCard,
            payment_amount: 450.00,
            minimum_due: 125.00,
            account_balance: 2850.00,
            status: PaymentStatus::OnTime,
            days_late: None,
            account_number: "****4521".to_string(),
        },
        PaymentRecord {
            id: "2".to_string(),
            payment_date: date(2024, 11, 28),
            creditor_name: "Wells Fargo Mortgage".to_string(),
            account_kind: AccountKind::Mortgage,
            payment_amount: 2100.00,
            minimum_due: 2100.00,
            account_balance: 285_000.00,
            status: PaymentStatus::OnTime,
            days_late: None,
            account_number: "****8934".to_string(),
        },
        PaymentRecord {
            id: "3".to_string(),
            payment_date: date(2024, 11, 25),
            creditor_name: "Capital One Venture".to_string(),
            account_kind: AccountKind::CreditCard,
            payment_amount: 75.00,
            minimum_due: 85.00,
            account_balance: 1250.00,
            status: PaymentStatus::Late,
            days_late: Some(3),
            account_number: "****7892".to_string(),
        },
        PaymentRecord {
            id: "4".to_string(),
            payment_date: date(2024, 11, 20),
            creditor_name: "Toyota Financial".to_string(),
            account_kind: AccountKind::AutoLoan,
            payment_amount: 385.00,
            minimum_due: 385.00,
            account_balance: 18_500.00,
            status: PaymentStatus::OnTime,
            days_late: None,
            account_number: "****3456".to_string(),
        },
        PaymentRecord {
            id: "5".to_string(),
            payment_date: date(2024, 11, 15),
            creditor_name: "Discover Card".to_string(),
            account_kind: AccountKind::CreditCard,
            payment_amount: 200.00,
            minimum_due: 65.00,
            account_balance: 980.00,
            status: PaymentStatus::OnTime,
            days_late: None,
            account_number: "****9876".to_string(),
        },
        PaymentRecord {
            id: "6".to_string(),
            payment_date: date(2024, 11, 10),
            creditor_name: "Federal Student Aid".to_string(),
            account_kind: AccountKind::StudentLoan,
            payment_amount: 275.00,
            minimum_due: 275.00,
            account_balance: 24_500.00,
            status: PaymentStatus::OnTime,
            days_late: None,
            account_number: "****5432".to_string(),
        },
        PaymentRecord {
            id: "7".to_string(),
            payment_date: date(2024, 11, 5),
            creditor_name: "American Express Gold".to_string(),
            account_kind: AccountKind::CreditCard,
            payment_amount: 0.00,
            minimum_due: 95.00,
            account_balance: 1850.00,
            status: PaymentStatus::Missed,
            days_late: Some(10),
            account_number: "****1234".to_string(),
        },
        PaymentRecord {
            id: "8".to_string(),
            payment_date: date(2024, 10, 28),
            creditor_name: "LendingClub Personal".to_string(),
            account_kind: AccountKind::PersonalLoan,
            payment_amount: 320.00,
            minimum_due: 320.00,
            account_balance: 8500.00,
            status: PaymentStatus::OnTime,
            days_late: None,
            account_number: "****6789".to_string(),
        },
    ]
}

pub fn card_transactions() -> Vec<CardTransaction> {
    vec![
        CardTransaction {
            id: "1".to_string(),
            transaction_date: date(2024, 12, 14),
            merchant_name: "Whole Foods Market".to_string(),
            category: SpendCategory::Groceries,
            amount: 127.45,
            card_name: "Chase Sapphire Preferred".to_string(),
            card_last_four: "4521".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Weekly grocery shopping".to_string()),
        },
        CardTransaction {
            id: "2".to_string(),
            transaction_date: date(2024, 12, 13),
            merchant_name: "Shell Gas Station".to_string(),
            category: SpendCategory::Gas,
            amount: 52.30,
            card_name: "Capital One Venture".to_string(),
            card_last_four: "7892".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Fuel purchase".to_string()),
        },
        CardTransaction {
            id: "3".to_string(),
            transaction_date: date(2024, 12, 12),
            merchant_name: "Amazon.com".to_string(),
            category: SpendCategory::Shopping,
            amount: 89.99,
            card_name: "Discover It".to_string(),
            card_last_four: "9876".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Electronics accessories".to_string()),
        },
        CardTransaction {
            id: "4".to_string(),
            transaction_date: date(2024, 12, 11),
            merchant_name: "Dr. Smith Dental Office".to_string(),
            category: SpendCategory::Healthcare,
            amount: 350.00,
            card_name: "Chase Sapphire Preferred".to_string(),
            card_last_four: "4521".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Dental cleaning and checkup".to_string()),
        },
        CardTransaction {
            id: "5".to_string(),
            transaction_date: date(2024, 12, 10),
            merchant_name: "Starbucks".to_string(),
            category: SpendCategory::Dining,
            amount: 15.75,
            card_name: "American Express Gold".to_string(),
            card_last_four: "1234".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Coffee and pastry".to_string()),
        },
        CardTransaction {
            id: "6".to_string(),
            transaction_date: date(2024, 12, 9),
            merchant_name: "Netflix".to_string(),
            category: SpendCategory::Entertainment,
            amount: 15.49,
            card_name: "Capital One Venture".to_string(),
            card_last_four: "7892".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Monthly subscription".to_string()),
        },
        CardTransaction {
            id: "7".to_string(),
            transaction_date: date(2024, 12, 8),
            merchant_name: "Uber".to_string(),
            category: SpendCategory::Travel,
            amount: 28.50,
            card_name: "Chase Sapphire Preferred".to_string(),
            card_last_four: "4521".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Ride to airport".to_string()),
        },
        CardTransaction {
            id: "8".to_string(),
            transaction_date: date(2024, 12, 7),
            merchant_name: "Target".to_string(),
            category: SpendCategory::Shopping,
            amount: 156.78,
            card_name: "Discover It".to_string(),
            card_last_four: "9876".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Household items and clothing".to_string()),
        },
        CardTransaction {
            id: "9".to_string(),
            transaction_date: date(2024, 12, 6),
            merchant_name: "Electric Company".to_string(),
            category: SpendCategory::Utilities,
            amount: 145.20,
            card_name: "American Express Gold".to_string(),
            card_last_four: "1234".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Monthly electricity bill".to_string()),
        },
        CardTransaction {
            id: "10".to_string(),
            transaction_date: date(2024, 12, 5),
            merchant_name: "Olive Garden".to_string(),
            category: SpendCategory::Dining,
            amount: 67.85,
            card_name: "Capital One Venture".to_string(),
            card_last_four: "7892".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Dinner with family".to_string()),
        },
        CardTransaction {
            id: "11".to_string(),
            transaction_date: date(2024, 12, 4),
            merchant_name: "Chase Bank".to_string(),
            category: SpendCategory::Other,
            amount: 450.00,
            card_name: "Chase Sapphire Preferred".to_string(),
            card_last_four: "4521".to_string(),
            kind: TransactionKind::Payment,
            description: Some("Credit card payment".to_string()),
        },
        CardTransaction {
            id: "12".to_string(),
            transaction_date: date(2024, 12, 3),
            merchant_name: "Late Fee".to_string(),
            category: SpendCategory::Other,
            amount: 25.00,
            card_name: "American Express Gold".to_string(),
            card_last_four: "1234".to_string(),
            kind: TransactionKind::Fee,
            description: Some("Late payment fee".to_string()),
        },
        CardTransaction {
            id: "13".to_string(),
            transaction_date: date(2024, 12, 2),
            merchant_name: "CVS Pharmacy".to_string(),
            category: SpendCategory::Healthcare,
            amount: 42.30,
            card_name: "Discover It".to_string(),
            card_last_four: "9876".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Prescription medication".to_string()),
        },
        CardTransaction {
            id: "14".to_string(),
            transaction_date: date(2024, 12, 1),
            merchant_name: "Interest Charge".to_string(),
            category: SpendCategory::Other,
            amount: 18.75,
            card_name: "Capital One Venture".to_string(),
            card_last_four: "7892".to_string(),
            kind: TransactionKind::Interest,
            description: Some("Monthly interest charge".to_string()),
        },
        CardTransaction {
            id: "15".to_string(),
            transaction_date: date(2024, 11, 30),
            merchant_name: "Home Depot".to_string(),
            category: SpendCategory::Shopping,
            amount: 234.56,
            card_name: "Chase Sapphire Preferred".to_string(),
            card_last_four: "4521".to_string(),
            kind: TransactionKind::Purchase,
            description: Some("Home improvement supplies".to_string()),
        },
    ]
}

pub fn loan_offers() -> Vec<LoanOffer> {
    vec![
        LoanOffer {
            id: "1".to_string(),
            lender: "CareCredit".to_string(),
            min_credit_score: 580,
            max_loan_amount: 25_000,
            interest_rate_range: "0% - 29.99%".to_string(),
            terms: vec![
                "6 months".to_string(),
                "12 months".to_string(),
                "18 months".to_string(),
                "24 months".to_string(),
            ],
            special_features: vec![
                "No interest if paid in full within promotional period".to_string(),
                "Instant approval".to_string(),
                "Wide network of dental providers".to_string(),
            ],
            processing_time: "Instant".to_string(),
        },
        LoanOffer {
            id: "2".to_string(),
            lender: "Lending Club".to_string(),
            min_credit_score: 600,
            max_loan_amount: 40_000,
            interest_rate_range: "6.95% - 35.89%".to_string(),
            terms: vec!["36 months".to_string(), "60 months".to_string()],
            special_features: vec![
                "Fixed monthly payments".to_string(),
                "No prepayment penalties".to_string(),
                "Direct payment to provider".to_string(),
            ],
            processing_time: "2-7 business days".to_string(),
        },
        LoanOffer {
            id: "3".to_string(),
            lender: "Prosper Healthcare".to_string(),
            min_credit_score: 640,
            max_loan_amount: 35_000,
            interest_rate_range: "5.99% - 31.99%".to_string(),
            terms: vec![
                "24 months".to_string(),
                "36 months".to_string(),
                "48 months".to_string(),
                "60 months".to_string(),
            ],
            special_features: vec![
                "Healthcare-focused lending".to_string(),
                "Competitive rates".to_string(),
                "Flexible payment options".to_string(),
            ],
            processing_time: "1-3 business days".to_string(),
        },
        LoanOffer {
            id: "4".to_string(),
            lender: "Dentist Direct".to_string(),
            min_credit_score: 550,
            max_loan_amount: 15_000,
            interest_rate_range: "9.99% - 35.99%".to_string(),
            terms: vec![
                "12 months".to_string(),
                "24 months".to_string(),
                "36 months".to_string(),
            ],
            special_features: vec![
                "Dental-specific financing".to_string(),
                "Quick approval".to_string(),
                "No hidden fees".to_string(),
            ],
            processing_time: "Same day".to_string(),
        },
    ]
}

pub fn procedures() -> Vec<DentalProcedure> {
    vec![
        DentalProcedure {
            id: "1".to_string(),
            name: "Emergency Root Canal".to_string(),
            avg_cost: 1200,
            urgency: Urgency::Emergency,
        },
        DentalProcedure {
            id: "2".to_string(),
            name: "Dental Crown".to_string(),
            avg_cost: 1100,
            urgency: Urgency::Urgent,
        },
        DentalProcedure {
            id: "3".to_string(),
            name: "Tooth Extraction".to_string(),
            avg_cost: 300,
            urgency: Urgency::Urgent,
        },
        DentalProcedure {
            id: "4".to_string(),
            name: "Dental Implant".to_string(),
            avg_cost: 3500,
            urgency: Urgency::Elective,
        },
        DentalProcedure {
            id: "5".to_string(),
            name: "Teeth Whitening".to_string(),
            avg_cost: 500,
            urgency: Urgency::Elective,
        },
        DentalProcedure {
            id: "6".to_string(),
            name: "Orthodontic Treatment".to_string(),
            avg_cost: 5000,
            urgency: Urgency::Elective,
        },
        DentalProcedure {
            id: "7".to_string(),
            name: "Periodontal Treatment".to_string(),
            avg_cost: 800,
            urgency: Urgency::Urgent,
        },
        DentalProcedure {
            id: "8".to_string(),
            name: "Dental Bridge".to_string(),
            avg_cost: 2500,
            urgency: Urgency::Urgent,
        },
    ]
}

pub fn improvement_tips() -> Vec<ImprovementTip> {
    vec![
        ImprovementTip {
            id: "1".to_string(),
            title: "Pay Bills on Time".to_string(),
            description: "Payment history is the most important factor affecting your credit \
                          score. Set up automatic payments or reminders."
                .to_string(),
            impact: Impact::High,
            timeframe: "1-2 months".to_string(),
            category: TipCategory::Payment,
        },
        ImprovementTip {
            id: "2".to_string(),
            title: "Reduce Credit Card Balances".to_string(),
            description: "Keep credit utilization below 30%, ideally under 10%. Pay down \
                          existing balances before making new purchases."
                .to_string(),
            impact: Impact::High,
            timeframe: "1-3 months".to_string(),
            category: TipCategory::Utilization,
        },
        ImprovementTip {
            id: "3".to_string(),
            title: "Avoid New Credit Inquiries".to_string(),
            description: "Each hard inquiry can temporarily lower your score. Avoid applying \
                          for new credit unless necessary."
                .to_string(),
            impact: Impact::Medium,
            timeframe: "3-6 months".to_string(),
            category: TipCategory::Inquiries,
        },
        ImprovementTip {
            id: "4".to_string(),
            title: "Keep Old Credit Accounts Open".to_string(),
            description: "Length of credit history matters. Keep older accounts open even if \
                          you don't use them regularly."
                .to_string(),
            impact: Impact::Medium,
            timeframe: "6-12 months".to_string(),
            category: TipCategory::History,
        },
        ImprovementTip {
            id: "5".to_string(),
            title: "Consider a Secured Credit Card".to_string(),
            description: "If you have limited credit history, a secured card can help build \
                          your credit responsibly."
                .to_string(),
            impact: Impact::Medium,
            timeframe: "3-6 months".to_string(),
            category: TipCategory::Accounts,
        },
    ]
}
