use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct StatementRecord {
    pub(crate) posted_on: Option<NaiveDate>,
    pub(crate) merchant: String,
    pub(crate) category: String,
    pub(crate) amount: Option<f64>,
    pub(crate) card_last_four: String,
    pub(crate) kind: String,
    pub(crate) description: Option<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<StatementRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<StatementRow>() {
        let row = record?;
        let posted_on = row.posted_date();
        let amount = row.amount_value();

        records.push(StatementRecord {
            posted_on,
            merchant: row.merchant,
            category: row.category.unwrap_or_default(),
            amount,
            card_last_four: row.card,
            kind: row.kind.unwrap_or_default(),
            description: row.description,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct StatementRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Merchant")]
    merchant: String,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Card")]
    card: String,
    #[serde(rename = "Type", default, deserialize_with = "empty_string_as_none")]
    kind: Option<String>,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    description: Option<String>,
}

impl StatementRow {
    fn posted_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    fn amount_value(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    // US bank exports write 12/14/2024.
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return Some(date);
    }

    None
}

fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Statement exports write amounts like $1,234.56.
    let cleaned = trimmed.trim_start_matches('$').replace(',', "");
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}

#[cfg(test)]
pub(crate) fn parse_amount_for_tests(value: &str) -> Option<f64> {
    parse_amount(value)
}
