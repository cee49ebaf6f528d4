use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::{
    filter_and_sort, summarize, AggregationSpec, BreakdownSpec, BreakdownWeight, FieldSpec,
    FieldValue, QueryDescriptor, QueryError, Schema, SortDirection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendCategory {
    Dining,
    Groceries,
    Gas,
    Shopping,
    Healthcare,
    Utilities,
    Entertainment,
    Travel,
    Other,
}

impl SpendCategory {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Dining,
            Self::Groceries,
            Self::Gas,
            Self::Shopping,
            Self::Healthcare,
            Self::Utilities,
            Self::Entertainment,
            Self::Travel,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dining => "Dining",
            Self::Groceries => "Groceries",
            Self::Gas => "Gas",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Dining => "dining",
            Self::Groceries => "groceries",
            Self::Gas => "gas",
            Self::Shopping => "shopping",
            Self::Healthcare => "healthcare",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Travel => "travel",
            Self::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Purchase,
    Payment,
    Fee,
    Interest,
}

impl TransactionKind {
    pub const fn ordered() -> [Self; 4] {
        [Self::Purchase, Self::Payment, Self::Fee, Self::Interest]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Payment => "Payment",
            Self::Fee => "Fee",
            Self::Interest => "Interest",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Payment => "payment",
            Self::Fee => "fee",
            Self::Interest => "interest",
        }
    }
}

/// One line on a card statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTransaction {
    pub id: String,
    pub transaction_date: NaiveDate,
    pub merchant_name: String,
    pub category: SpendCategory,
    pub amount: f64,
    pub card_name: String,
    pub card_last_four: String,
    pub kind: TransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Field table for card transactions: merchant, description, and last-four
/// feed the search box; category, kind, and card filter; date orders.
pub fn schema() -> Schema<CardTransaction> {
    Schema::new(vec![
        FieldSpec::new("merchant_name", |transaction: &CardTransaction| {
            FieldValue::text(transaction.merchant_name.clone())
        })
        .searchable(),
        FieldSpec::new("description", |transaction: &CardTransaction| {
            FieldValue::text(transaction.description.clone().unwrap_or_default())
        })
        .searchable(),
        FieldSpec::new("card_last_four", |transaction: &CardTransaction| {
            FieldValue::text(transaction.card_last_four.clone())
        })
        .searchable()
        .filterable(),
        FieldSpec::new("category", |transaction: &CardTransaction| {
            FieldValue::category(transaction.category.key())
        })
        .filterable(),
        FieldSpec::new("kind", |transaction: &CardTransaction| {
            FieldValue::category(transaction.kind.key())
        })
        .filterable(),
        FieldSpec::new("transaction_date", |transaction: &CardTransaction| {
            FieldValue::Date(transaction.transaction_date)
        })
        .sortable(),
    ])
}

/// Query payload for the card activity table. Defaults to everything,
/// newest first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<SpendCategory>,
    #[serde(default)]
    pub kind: Option<TransactionKind>,
    /// Card selector, by last four digits.
    #[serde(default)]
    pub card: Option<String>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl CardsQuery {
    pub fn descriptor(&self) -> QueryDescriptor {
        let direction = self.direction.unwrap_or(SortDirection::Descending);
        let mut descriptor = QueryDescriptor::sorted_by("transaction_date", direction)
            .with_search(self.search.clone());
        if let Some(category) = self.category {
            descriptor = descriptor.with_filter("category", category.key());
        }
        if let Some(kind) = self.kind {
            descriptor = descriptor.with_filter("kind", kind.key());
        }
        if let Some(card) = &self.card {
            descriptor = descriptor.with_filter("card_last_four", card.clone());
        }
        descriptor
    }
}

/// Header stats above the activity table, computed over the matching set.
/// Spending figures only count purchases; payments and carrying costs are
/// reported on their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardOverview {
    pub total_transactions: usize,
    pub total_spent: f64,
    pub total_payments: f64,
    pub fees_and_interest: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_category: Option<SpendCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_category_label: Option<&'static str>,
}

/// Purchase spending for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: SpendCategory,
    pub label: &'static str,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardRow {
    pub id: String,
    pub transaction_date: NaiveDate,
    pub merchant_name: String,
    pub category: SpendCategory,
    pub category_label: &'static str,
    pub amount: f64,
    pub card_name: String,
    pub card_last_four: String,
    pub kind: TransactionKind,
    pub kind_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CardRow {
    fn for_transaction(transaction: &CardTransaction) -> Self {
        Self {
            id: transaction.id.clone(),
            transaction_date: transaction.transaction_date,
            merchant_name: transaction.merchant_name.clone(),
            category: transaction.category,
            category_label: transaction.category.label(),
            amount: transaction.amount,
            card_name: transaction.card_name.clone(),
            card_last_four: transaction.card_last_four.clone(),
            kind: transaction.kind,
            kind_label: transaction.kind.label(),
            description: transaction.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardActivityView {
    pub overview: CardOverview,
    /// Purchase spending per category, largest first.
    pub category_spending: Vec<CategorySpend>,
    pub transactions: Vec<CardRow>,
}

/// Builds the card activity table, spending breakdown, and header stats.
pub fn activity(
    transactions: &[CardTransaction],
    query: &CardsQuery,
) -> Result<CardActivityView, QueryError> {
    let view = filter_and_sort(transactions, &query.descriptor(), &schema())?;

    let mut total_spent = 0.0;
    let mut total_payments = 0.0;
    let mut fees_and_interest = 0.0;
    for transaction in &view {
        match transaction.kind {
            TransactionKind::Purchase => total_spent += transaction.amount,
            TransactionKind::Payment => total_payments += transaction.amount,
            TransactionKind::Fee | TransactionKind::Interest => {
                fees_and_interest += transaction.amount
            }
        }
    }

    let purchases: Vec<CardTransaction> = view
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Purchase)
        .cloned()
        .collect();
    let summary = summarize(
        &purchases,
        &AggregationSpec {
            breakdown: Some(BreakdownSpec {
                category: category_of,
                weight: BreakdownWeight::Sum(amount_of),
            }),
            ..AggregationSpec::default()
        },
    );

    let top_category = summary
        .top_category
        .as_deref()
        .and_then(SpendCategory::from_key);

    let mut category_spending: Vec<CategorySpend> = summary
        .breakdown
        .iter()
        .filter_map(|bucket| {
            SpendCategory::from_key(&bucket.category).map(|category| CategorySpend {
                category,
                label: category.label(),
                total: bucket.weight,
            })
        })
        .collect();
    category_spending.sort_by(|a, b| b.total.total_cmp(&a.total));

    Ok(CardActivityView {
        overview: CardOverview {
            total_transactions: view.len(),
            total_spent,
            total_payments,
            fees_and_interest,
            top_category,
            top_category_label: top_category.map(SpendCategory::label),
        },
        category_spending,
        transactions: view.iter().map(CardRow::for_transaction).collect(),
    })
}

fn category_of(transaction: &CardTransaction) -> String {
    transaction.category.key().to_string()
}

fn amount_of(transaction: &CardTransaction) -> f64 {
    transaction.amount
}
