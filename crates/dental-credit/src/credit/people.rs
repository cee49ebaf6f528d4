use super::domain::{Person, PersonId, RiskLevel, ScoreTier, Trend};
use crate::query::{
    filter_and_sort, summarize, AggregateSummary, AggregationSpec, BreakdownSpec, BreakdownWeight,
    FieldSpec, FieldValue, QueryDescriptor, QueryError, Schema, SortDirection,
};
use serde::{Deserialize, Serialize};

/// Sortable columns of the people browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeopleSortKey {
    Name,
    CreditScore,
    Age,
    Income,
}

impl PeopleSortKey {
    pub const fn field(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreditScore => "credit_score",
            Self::Age => "age",
            Self::Income => "income",
        }
    }
}

/// Query payload for the people browser. Everything defaults to the view's
/// opening state: no search, all risk levels, best scores first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeopleQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub risk: Option<RiskLevel>,
    #[serde(default)]
    pub sort_by: Option<PeopleSortKey>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl PeopleQuery {
    pub fn descriptor(&self) -> QueryDescriptor {
        let sort_by = self.sort_by.unwrap_or(PeopleSortKey::CreditScore);
        let direction = self.direction.unwrap_or(SortDirection::Descending);

        let mut descriptor =
            QueryDescriptor::sorted_by(sort_by.field(), direction).with_search(self.search.clone());
        if let Some(risk) = self.risk {
            descriptor = descriptor.with_filter("risk_level", risk.key());
        }
        descriptor
    }
}

/// Field table for [`Person`] records. Name, email, and location feed the
/// search box; the risk selector filters; the grid sorts on the rest.
pub fn schema() -> Schema<Person> {
    Schema::new(vec![
        FieldSpec::new("name", |person: &Person| FieldValue::text(person.full_name()))
            .searchable()
            .sortable(),
        FieldSpec::new("email", |person: &Person| {
            FieldValue::text(person.email.clone())
        })
        .searchable(),
        FieldSpec::new("city", |person: &Person| {
            FieldValue::text(person.address.city.clone())
        })
        .searchable(),
        FieldSpec::new("state", |person: &Person| {
            FieldValue::text(person.address.state.clone())
        })
        .searchable(),
        FieldSpec::new("credit_score", |person: &Person| {
            FieldValue::number(f64::from(person.credit_score))
        })
        .sortable(),
        FieldSpec::new("age", |person: &Person| {
            FieldValue::number(f64::from(person.demographics.age))
        })
        .sortable(),
        FieldSpec::new("income", |person: &Person| {
            FieldValue::number(f64::from(person.income))
        })
        .sortable(),
        FieldSpec::new("risk_level", |person: &Person| {
            FieldValue::category(person.risk_level.key())
        })
        .filterable(),
    ])
}

/// Stats strip above the grid, computed over the matching set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeopleOverview {
    pub total: usize,
    pub average_score: u16,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
}

/// One card in the people grid.
#[derive(Debug, Clone, Serialize)]
pub struct PersonCard {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub age: u8,
    pub credit_score: u16,
    pub tier: ScoreTier,
    pub tier_label: &'static str,
    pub trend: Trend,
    pub risk_level: RiskLevel,
    pub risk_label: &'static str,
    pub income: u32,
    pub position: String,
    pub company: String,
}

impl PersonCard {
    fn for_person(person: &Person) -> Self {
        let tier = person.tier();
        Self {
            id: person.id.clone(),
            name: person.full_name(),
            email: person.email.clone(),
            city: person.address.city.clone(),
            state: person.address.state.clone(),
            age: person.demographics.age,
            credit_score: person.credit_score,
            tier,
            tier_label: tier.label(),
            trend: person.trend(),
            risk_level: person.risk_level,
            risk_label: person.risk_level.label(),
            income: person.income,
            position: person.employment.position.clone(),
            company: person.employment.company.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeopleView {
    pub overview: PeopleOverview,
    pub people: Vec<PersonCard>,
}

/// Builds the people browser: filtered + sorted cards plus the overview.
pub fn browse(people: &[Person], query: &PeopleQuery) -> Result<PeopleView, QueryError> {
    let view = filter_and_sort(people, &query.descriptor(), &schema())?;

    let summary = summarize(
        &view,
        &AggregationSpec {
            sum: Some(score_of),
            breakdown: Some(BreakdownSpec {
                category: risk_of,
                weight: BreakdownWeight::Count,
            }),
            ..AggregationSpec::default()
        },
    );

    let overview = PeopleOverview {
        total: summary.count,
        average_score: summary.average.round() as u16,
        low_risk: risk_count(&summary, RiskLevel::Low),
        medium_risk: risk_count(&summary, RiskLevel::Medium),
        high_risk: risk_count(&summary, RiskLevel::High),
    };

    Ok(PeopleView {
        overview,
        people: view.iter().map(PersonCard::for_person).collect(),
    })
}

fn score_of(person: &Person) -> f64 {
    f64::from(person.credit_score)
}

fn risk_of(person: &Person) -> String {
    person.risk_level.key().to_string()
}

fn risk_count(summary: &AggregateSummary, risk: RiskLevel) -> usize {
    summary
        .breakdown
        .iter()
        .find(|bucket| bucket.category == risk.key())
        .map_or(0, |bucket| bucket.weight as usize)
}
