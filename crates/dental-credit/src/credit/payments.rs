use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::{
    filter_and_sort, percent_of, summarize, AggregationSpec, FieldSpec, FieldValue,
    QueryDescriptor, QueryError, Schema, SortDirection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    CreditCard,
    Mortgage,
    AutoLoan,
    StudentLoan,
    PersonalLoan,
}

impl AccountKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CreditCard,
            Self::Mortgage,
            Self::AutoLoan,
            Self::StudentLoan,
            Self::PersonalLoan,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Mortgage => "Mortgage",
            Self::AutoLoan => "Auto Loan",
            Self::StudentLoan => "Student Loan",
            Self::PersonalLoan => "Personal Loan",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Mortgage => "mortgage",
            Self::AutoLoan => "auto_loan",
            Self::StudentLoan => "student_loan",
            Self::PersonalLoan => "personal_loan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    OnTime,
    Late,
    Missed,
}

impl PaymentStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::OnTime, Self::Late, Self::Missed]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OnTime => "On Time",
            Self::Late => "Late",
            Self::Missed => "Missed",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::OnTime => "on_time",
            Self::Late => "late",
            Self::Missed => "missed",
        }
    }
}

/// One reported payment against a credit account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub payment_date: NaiveDate,
    pub creditor_name: String,
    pub account_kind: AccountKind,
    pub payment_amount: f64,
    pub minimum_due: f64,
    pub account_balance: f64,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_late: Option<u16>,
    /// Masked, e.g. `****4521`.
    pub account_number: String,
}

impl PaymentRecord {
    /// A payment that cleared but did not cover the minimum due. Missed
    /// payments (amount zero) are tracked separately.
    pub fn below_minimum(&self) -> bool {
        self.payment_amount > 0.0 && self.payment_amount < self.minimum_due
    }
}

/// Field table for payment records: creditor and account number feed the
/// search box, the two selectors filter, the table orders by date.
pub fn schema() -> Schema<PaymentRecord> {
    Schema::new(vec![
        FieldSpec::new("creditor_name", |payment: &PaymentRecord| {
            FieldValue::text(payment.creditor_name.clone())
        })
        .searchable(),
        FieldSpec::new("account_number", |payment: &PaymentRecord| {
            FieldValue::text(payment.account_number.clone())
        })
        .searchable(),
        FieldSpec::new("status", |payment: &PaymentRecord| {
            FieldValue::category(payment.status.key())
        })
        .filterable(),
        FieldSpec::new("account_kind", |payment: &PaymentRecord| {
            FieldValue::category(payment.account_kind.key())
        })
        .filterable(),
        FieldSpec::new("payment_date", |payment: &PaymentRecord| {
            FieldValue::Date(payment.payment_date)
        })
        .sortable(),
    ])
}

/// Query payload for the payment history table. Defaults to everything,
/// newest first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    #[serde(default)]
    pub account_kind: Option<AccountKind>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl PaymentsQuery {
    pub fn descriptor(&self) -> QueryDescriptor {
        let direction = self.direction.unwrap_or(SortDirection::Descending);
        let mut descriptor =
            QueryDescriptor::sorted_by("payment_date", direction).with_search(self.search.clone());
        if let Some(status) = self.status {
            descriptor = descriptor.with_filter("status", status.key());
        }
        if let Some(kind) = self.account_kind {
            descriptor = descriptor.with_filter("account_kind", kind.key());
        }
        descriptor
    }
}

/// Header stats above the payment table, computed over the matching set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentOverview {
    pub total_payments: usize,
    pub on_time_rate: u8,
    pub total_paid: f64,
    pub late_or_missed: usize,
    pub below_minimum: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentRow {
    pub id: String,
    pub payment_date: NaiveDate,
    pub creditor_name: String,
    pub account_kind: AccountKind,
    pub account_label: &'static str,
    pub account_number: String,
    pub payment_amount: f64,
    pub minimum_due: f64,
    pub account_balance: f64,
    pub status: PaymentStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_late: Option<u16>,
    pub below_minimum: bool,
}

impl PaymentRow {
    fn for_record(payment: &PaymentRecord) -> Self {
        Self {
            id: payment.id.clone(),
            payment_date: payment.payment_date,
            creditor_name: payment.creditor_name.clone(),
            account_kind: payment.account_kind,
            account_label: payment.account_kind.label(),
            account_number: payment.account_number.clone(),
            payment_amount: payment.payment_amount,
            minimum_due: payment.minimum_due,
            account_balance: payment.account_balance,
            status: payment.status,
            status_label: payment.status.label(),
            days_late: payment.days_late,
            below_minimum: payment.below_minimum(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentHistoryView {
    pub overview: PaymentOverview,
    pub payments: Vec<PaymentRow>,
}

/// Builds the payment history table and its header stats.
pub fn review(
    payments: &[PaymentRecord],
    query: &PaymentsQuery,
) -> Result<PaymentHistoryView, QueryError> {
    let view = filter_and_sort(payments, &query.descriptor(), &schema())?;

    let summary = summarize(
        &view,
        &AggregationSpec {
            sum: Some(amount_of),
            ..AggregationSpec::default()
        },
    );
    let on_time_rate = percent_of(&view, |payment| payment.status == PaymentStatus::OnTime);
    let late_or_missed = view
        .iter()
        .filter(|payment| payment.status != PaymentStatus::OnTime)
        .count();
    let below_minimum = view.iter().filter(|payment| payment.below_minimum()).count();

    Ok(PaymentHistoryView {
        overview: PaymentOverview {
            total_payments: summary.count,
            on_time_rate,
            total_paid: summary.sum,
            late_or_missed,
            below_minimum,
        },
        payments: view.iter().map(PaymentRow::for_record).collect(),
    })
}

fn amount_of(payment: &PaymentRecord) -> f64 {
    payment.payment_amount
}
