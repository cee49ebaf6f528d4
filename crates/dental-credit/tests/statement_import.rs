use chrono::NaiveDate;
use dental_credit::credit::{
    cards, CardsQuery, SpendCategory, StatementImporter, TransactionKind,
};

const HEADER: &str = "Date,Merchant,Category,Amount,Card,Type,Description\n";

fn import(rows: &str) -> Vec<dental_credit::credit::CardTransaction> {
    let csv = format!("{HEADER}{rows}");
    StatementImporter::from_reader(csv.as_bytes()).expect("statement imports")
}

#[test]
fn importer_normalizes_bank_spellings_into_dashboard_transactions() {
    let transactions = import(
        "2024-12-14,Whole Foods Market,Grocery Stores,127.45,4521,Charge,Weekly groceries\n\
12/12/2024,Amazon.com,Online Shopping,$89.99,9876,Sale,\n\
2024-12-04,Chase Bank,,450.00,4521,Online Payment,Autopay\n",
    );

    assert_eq!(transactions.len(), 3);

    let groceries = &transactions[0];
    assert_eq!(groceries.id, "stmt-1");
    assert_eq!(
        groceries.transaction_date,
        NaiveDate::from_ymd_opt(2024, 12, 14).expect("valid date")
    );
    assert_eq!(groceries.category, SpendCategory::Groceries);
    assert_eq!(groceries.kind, TransactionKind::Purchase);
    assert_eq!(groceries.card_name, "Chase Sapphire Preferred");
    assert_eq!(groceries.description.as_deref(), Some("Weekly groceries"));

    let shopping = &transactions[1];
    assert_eq!(
        shopping.transaction_date,
        NaiveDate::from_ymd_opt(2024, 12, 12).expect("valid date")
    );
    assert_eq!(shopping.category, SpendCategory::Shopping);
    assert!((shopping.amount - 89.99).abs() < 0.001);
    assert!(shopping.description.is_none());

    let payment = &transactions[2];
    assert_eq!(payment.category, SpendCategory::Other);
    assert_eq!(payment.kind, TransactionKind::Payment);
}

#[test]
fn rows_without_a_usable_date_or_amount_are_skipped() {
    let transactions = import(
        "2024-12-14,Whole Foods Market,Grocery Stores,127.45,4521,Charge,\n\
pending,Home Depot,Retail,n/a,4521,Charge,Pending authorization\n\
2024-12-13,Shell,Fuel,,7892,Charge,\n\
2024-12-01,Target,Department Stores,156.78,9876,Charge,\n",
    );

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].merchant_name, "Whole Foods Market");
    assert_eq!(transactions[1].merchant_name, "Target");
    // Ids number the kept rows, not the source rows.
    assert_eq!(transactions[1].id, "stmt-2");
}

#[test]
fn importer_handles_full_statement_export() {
    let data = include_bytes!("../Card_Statement.csv");

    let transactions =
        StatementImporter::from_reader(&data[..]).expect("statement export imports");

    // The export carries 13 rows; the pending authorization has no date or
    // amount and is dropped.
    assert_eq!(transactions.len(), 12);
    assert_eq!(transactions[0].id, "stmt-1");
    assert_eq!(transactions[11].id, "stmt-12");

    let fee = transactions
        .iter()
        .find(|transaction| transaction.merchant_name == "Late Fee")
        .expect("late fee row present");
    assert_eq!(fee.kind, TransactionKind::Fee);
    assert_eq!(fee.category, SpendCategory::Other);

    let interest = transactions
        .iter()
        .find(|transaction| transaction.merchant_name == "Interest Charge")
        .expect("interest row present");
    assert_eq!(interest.kind, TransactionKind::Interest);

    let us_dated = transactions
        .iter()
        .find(|transaction| transaction.merchant_name == "Amazon.com")
        .expect("amazon row present");
    assert_eq!(
        us_dated.transaction_date,
        NaiveDate::from_ymd_opt(2024, 12, 12).expect("valid date")
    );
}

#[test]
fn imported_statement_feeds_the_card_activity_view() {
    let data = include_bytes!("../Card_Statement.csv");
    let transactions =
        StatementImporter::from_reader(&data[..]).expect("statement export imports");

    let view = cards::activity(&transactions, &CardsQuery::default()).expect("activity builds");

    assert_eq!(view.overview.total_transactions, 12);
    assert!((view.overview.total_spent - 1070.82).abs() < 0.001);
    assert!((view.overview.total_payments - 450.00).abs() < 0.001);
    assert!((view.overview.fees_and_interest - 43.75).abs() < 0.001);
    assert_eq!(view.overview.top_category, Some(SpendCategory::Shopping));

    let shopping = &view.category_spending[0];
    assert_eq!(shopping.category, SpendCategory::Shopping);
    assert!((shopping.total - 481.33).abs() < 0.001);

    // Newest first by default; the export is already in that order.
    assert_eq!(view.transactions[0].merchant_name, "Whole Foods Market");
    assert_eq!(view.transactions[11].merchant_name, "Home Depot");
}

#[test]
fn card_filter_narrows_to_one_card() {
    let data = include_bytes!("../Card_Statement.csv");
    let transactions =
        StatementImporter::from_reader(&data[..]).expect("statement export imports");

    let query = CardsQuery {
        card: Some("4521".to_string()),
        ..CardsQuery::default()
    };
    let view = cards::activity(&transactions, &query).expect("activity builds");

    assert_eq!(view.overview.total_transactions, 5);
    assert!((view.overview.total_spent - 740.51).abs() < 0.001);
    assert!((view.overview.total_payments - 450.00).abs() < 0.001);
    assert!(view
        .transactions
        .iter()
        .all(|row| row.card_name == "Chase Sapphire Preferred"));
}
