use std::collections::HashMap;
use std::sync::OnceLock;

use super::super::cards::{SpendCategory, TransactionKind};

static CATEGORY_ALIASES: OnceLock<HashMap<String, SpendCategory>> = OnceLock::new();
static KIND_ALIASES: OnceLock<HashMap<String, TransactionKind>> = OnceLock::new();

pub(crate) fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Unrecognized categories land in `Other` rather than failing the row.
pub(crate) fn category_for(raw: &str) -> SpendCategory {
    category_alias_map()
        .get(&normalize_token(raw))
        .copied()
        .unwrap_or(SpendCategory::Other)
}

/// Unrecognized kinds are treated as purchases.
pub(crate) fn kind_for(raw: &str) -> TransactionKind {
    kind_alias_map()
        .get(&normalize_token(raw))
        .copied()
        .unwrap_or(TransactionKind::Purchase)
}

/// Display name for a card, keyed by the last four digits printed on the
/// statement.
pub(crate) fn card_name_for(last_four: &str) -> &'static str {
    match last_four.trim() {
        "4521" => "Chase Sapphire Preferred",
        "7892" => "Capital One Venture",
        "9876" => "Discover It",
        "1234" => "American Express Gold",
        _ => "Unknown Card",
    }
}

fn category_alias_map() -> &'static HashMap<String, SpendCategory> {
    CATEGORY_ALIASES.get_or_init(|| {
        const ALIASES: &[(&str, SpendCategory)] = &[
            ("dining", SpendCategory::Dining),
            ("restaurants", SpendCategory::Dining),
            ("restaurant", SpendCategory::Dining),
            ("food & drink", SpendCategory::Dining),
            ("food and drink", SpendCategory::Dining),
            ("fast food", SpendCategory::Dining),
            ("coffee shops", SpendCategory::Dining),
            ("groceries", SpendCategory::Groceries),
            ("grocery", SpendCategory::Groceries),
            ("grocery stores", SpendCategory::Groceries),
            ("supermarkets", SpendCategory::Groceries),
            ("wholesale clubs", SpendCategory::Groceries),
            ("gas", SpendCategory::Gas),
            ("fuel", SpendCategory::Gas),
            ("gas station", SpendCategory::Gas),
            ("gas stations", SpendCategory::Gas),
            ("service stations", SpendCategory::Gas),
            ("shopping", SpendCategory::Shopping),
            ("merchandise", SpendCategory::Shopping),
            ("general merchandise", SpendCategory::Shopping),
            ("department stores", SpendCategory::Shopping),
            ("online shopping", SpendCategory::Shopping),
            ("retail", SpendCategory::Shopping),
            ("healthcare", SpendCategory::Healthcare),
            ("health care", SpendCategory::Healthcare),
            ("health & wellness", SpendCategory::Healthcare),
            ("medical", SpendCategory::Healthcare),
            ("dental", SpendCategory::Healthcare),
            ("pharmacy", SpendCategory::Healthcare),
            ("pharmacies", SpendCategory::Healthcare),
            ("utilities", SpendCategory::Utilities),
            ("utility", SpendCategory::Utilities),
            ("bills & utilities", SpendCategory::Utilities),
            ("bills and utilities", SpendCategory::Utilities),
            ("internet", SpendCategory::Utilities),
            ("phone", SpendCategory::Utilities),
            ("entertainment", SpendCategory::Entertainment),
            ("streaming", SpendCategory::Entertainment),
            ("movies", SpendCategory::Entertainment),
            ("music", SpendCategory::Entertainment),
            ("subscriptions", SpendCategory::Entertainment),
            ("travel", SpendCategory::Travel),
            ("airlines", SpendCategory::Travel),
            ("hotels", SpendCategory::Travel),
            ("hotel", SpendCategory::Travel),
            ("rideshare", SpendCategory::Travel),
            ("transit", SpendCategory::Travel),
            ("transportation", SpendCategory::Travel),
            ("other", SpendCategory::Other),
            ("misc", SpendCategory::Other),
            ("miscellaneous", SpendCategory::Other),
            ("uncategorized", SpendCategory::Other),
        ];

        let mut map = HashMap::with_capacity(ALIASES.len());
        for (alias, category) in ALIASES {
            map.insert(normalize_token(alias), *category);
        }
        map
    })
}

fn kind_alias_map() -> &'static HashMap<String, TransactionKind> {
    KIND_ALIASES.get_or_init(|| {
        const ALIASES: &[(&str, TransactionKind)] = &[
            ("purchase", TransactionKind::Purchase),
            ("charge", TransactionKind::Purchase),
            ("sale", TransactionKind::Purchase),
            ("debit", TransactionKind::Purchase),
            ("payment", TransactionKind::Payment),
            ("credit", TransactionKind::Payment),
            ("autopay", TransactionKind::Payment),
            ("online payment", TransactionKind::Payment),
            ("fee", TransactionKind::Fee),
            ("late fee", TransactionKind::Fee),
            ("annual fee", TransactionKind::Fee),
            ("service fee", TransactionKind::Fee),
            ("interest", TransactionKind::Interest),
            ("interest charge", TransactionKind::Interest),
            ("interest charged", TransactionKind::Interest),
            ("finance charge", TransactionKind::Interest),
        ];

        let mut map = HashMap::with_capacity(ALIASES.len());
        for (alias, kind) in ALIASES {
            map.insert(normalize_token(alias), *kind);
        }
        map
    })
}
