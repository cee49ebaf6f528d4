//! Card-statement CSV import.
//!
//! Banks export card activity as CSV with a `Date, Merchant, Category,
//! Amount, Card, Type, Description` header. The importer reads such an
//! export into [`CardTransaction`]s, normalizing the free-form category and
//! type columns through alias tables and skipping rows whose date or amount
//! does not parse.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use super::cards::CardTransaction;

#[derive(Debug)]
pub enum StatementImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for StatementImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementImportError::Io(err) => write!(f, "failed to read card statement: {}", err),
            StatementImportError::Csv(err) => write!(f, "invalid statement CSV data: {}", err),
        }
    }
}

impl std::error::Error for StatementImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatementImportError::Io(err) => Some(err),
            StatementImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StatementImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StatementImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct StatementImporter;

impl StatementImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<CardTransaction>, StatementImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CardTransaction>, StatementImportError> {
        let mut transactions = Vec::new();

        for record in parser::parse_records(reader)? {
            if let (Some(transaction_date), Some(amount)) = (record.posted_on, record.amount) {
                let card_last_four = record.card_last_four;
                transactions.push(CardTransaction {
                    id: format!("stmt-{}", transactions.len() + 1),
                    transaction_date,
                    merchant_name: record.merchant,
                    category: normalizer::category_for(&record.category),
                    amount,
                    card_name: normalizer::card_name_for(&card_last_four).to_string(),
                    card_last_four,
                    kind: normalizer::kind_for(&record.kind),
                    description: record.description,
                });
            }
        }

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::super::cards::{SpendCategory, TransactionKind};
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    const HEADER: &str = "Date,Merchant,Category,Amount,Card,Type,Description\n";

    #[test]
    fn parse_date_supports_rfc3339_plain_and_us_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 12, 14).unwrap();
        assert_eq!(
            parser::parse_date_for_tests("2024-12-14T10:00:00Z"),
            Some(expected)
        );
        assert_eq!(parser::parse_date_for_tests("2024-12-14"), Some(expected));
        assert_eq!(parser::parse_date_for_tests("12/14/2024"), Some(expected));
        assert_eq!(parser::parse_date_for_tests("  "), None);
        assert_eq!(parser::parse_date_for_tests("not-a-date"), None);
    }

    #[test]
    fn parse_amount_strips_currency_punctuation() {
        assert_eq!(parser::parse_amount_for_tests("127.45"), Some(127.45));
        assert_eq!(parser::parse_amount_for_tests("$1,234.56"), Some(1234.56));
        assert_eq!(parser::parse_amount_for_tests(""), None);
        assert_eq!(parser::parse_amount_for_tests("twelve"), None);
    }

    #[test]
    fn importer_builds_transactions_with_normalized_fields() {
        let csv = format!(
            "{HEADER}2024-12-14,Whole Foods Market,Grocery Stores,127.45,4521,Charge,Weekly groceries\n\
             2024-12-13,Shell,Fuel,$52.30,7892,Purchase,\n"
        );
        let transactions =
            StatementImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(transactions.len(), 2);

        let first = &transactions[0];
        assert_eq!(first.id, "stmt-1");
        assert_eq!(first.merchant_name, "Whole Foods Market");
        assert_eq!(first.category, SpendCategory::Groceries);
        assert_eq!(first.kind, TransactionKind::Purchase);
        assert_eq!(first.card_name, "Chase Sapphire Preferred");
        assert_eq!(first.card_last_four, "4521");
        assert_eq!(first.description.as_deref(), Some("Weekly groceries"));

        let second = &transactions[1];
        assert_eq!(second.category, SpendCategory::Gas);
        assert_eq!(second.amount, 52.30);
        assert_eq!(second.card_name, "Capital One Venture");
        assert!(second.description.is_none());
    }

    #[test]
    fn importer_skips_rows_missing_date_or_amount() {
        let csv = format!(
            "{HEADER}bad-date,Target,Shopping,156.78,9876,Purchase,\n\
             2024-12-07,Target,Shopping,n/a,9876,Purchase,\n\
             2024-12-07,Target,Shopping,156.78,9876,Purchase,\n"
        );
        let transactions =
            StatementImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].merchant_name, "Target");
        assert_eq!(transactions[0].id, "stmt-1");
    }

    #[test]
    fn importer_defaults_unknown_category_kind_and_card() {
        let csv = format!("{HEADER}2024-12-01,Mystery Shop,Gadgets,10.00,0000,Refund,\n");
        let transactions =
            StatementImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        let row = &transactions[0];
        assert_eq!(row.category, SpendCategory::Other);
        assert_eq!(row.kind, TransactionKind::Purchase);
        assert_eq!(row.card_name, "Unknown Card");
    }

    #[test]
    fn importer_tolerates_blank_category_and_type_columns() {
        let csv = format!("{HEADER}2024-12-05,Olive Garden,,67.85,7892,,Dinner\n");
        let transactions =
            StatementImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        let row = &transactions[0];
        assert_eq!(row.category, SpendCategory::Other);
        assert_eq!(row.kind, TransactionKind::Purchase);
        assert_eq!(row.description.as_deref(), Some("Dinner"));
    }

    #[test]
    fn normalizer_recognizes_alias_spellings() {
        assert_eq!(
            normalizer::category_for("  Restaurants "),
            SpendCategory::Dining
        );
        assert_eq!(
            normalizer::category_for("FOOD & DRINK"),
            SpendCategory::Dining
        );
        assert_eq!(
            normalizer::kind_for("Interest Charged"),
            TransactionKind::Interest
        );
        assert_eq!(normalizer::kind_for("Late Fee"), TransactionKind::Fee);
        assert_eq!(
            normalizer::normalize_token("\u{feff}Gas  Stations"),
            "gas stations"
        );
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = StatementImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            StatementImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
