use crate::infra::InMemoryRosterStore;
use chrono::{Local, NaiveDate};
use clap::Args;
use dental_credit::credit::{
    cards, offers, payments, seed, CardActivityView, CardTransaction, CardsQuery, HistoryStats,
    ImprovementTip, PaymentOverview, PaymentsQuery, PeopleQuery, Person, PersonId, ProfileService,
    QualificationView, Roster, ScoreCard, StatementImporter,
};
use dental_credit::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Effective date for the demo score edit (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional card statement CSV export to hydrate card activity.
    #[arg(long)]
    pub(crate) statement_csv: Option<PathBuf>,
    /// Skip the score edit portion of the demo.
    #[arg(long)]
    pub(crate) skip_edit: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Person id to report on
    #[arg(long)]
    pub(crate) person: String,
    /// Optional procedure id to qualify financing offers against
    #[arg(long)]
    pub(crate) procedure: Option<String>,
    /// Optional card statement CSV export to hydrate card activity
    #[arg(long)]
    pub(crate) statement_csv: Option<PathBuf>,
    /// Include the full transaction listing in the output
    #[arg(long)]
    pub(crate) list_transactions: bool,
}

pub(crate) fn run_dashboard_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        person,
        procedure,
        statement_csv,
        list_transactions,
    } = args;

    let roster = Roster::new(seed::people());
    let id = PersonId(person);
    let Some(person) = roster.person(&id) else {
        println!("No person with id {id}. Known people:");
        for person in roster.people() {
            println!("  {} - {}", person.id, person.full_name());
        }
        return Ok(());
    };

    render_score_profile(person);

    let payments_view = payments::review(&seed::payment_history(), &PaymentsQuery::default())?;
    println!();
    render_payment_summary(&payments_view.overview);

    let (transactions, imported) = load_card_transactions_from_path(statement_csv)?;
    let activity = cards::activity(&transactions, &CardsQuery::default())?;
    println!();
    render_card_activity(&activity, imported, list_transactions);

    if let Some(procedure_id) = procedure {
        let Some(procedure) = seed::procedures()
            .into_iter()
            .find(|procedure| procedure.id == procedure_id)
        else {
            println!("\nNo procedure with id {procedure_id}. Known procedures:");
            for procedure in seed::procedures() {
                println!(
                    "  {} - {} (avg ${})",
                    procedure.id, procedure.name, procedure.avg_cost
                );
            }
            return Ok(());
        };

        let financing =
            offers::qualification(&seed::loan_offers(), person.credit_score, &procedure);
        println!();
        render_financing(&financing);
    }

    println!();
    render_tips(&seed::improvement_tips());

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        statement_csv,
        skip_edit,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("DentalCredit dashboard demo");

    let store = Arc::new(InMemoryRosterStore::seeded());
    let service = ProfileService::new(store);

    let browse_view = match service.browse(&PeopleQuery::default()) {
        Ok(view) => view,
        Err(err) => {
            println!("People browser unavailable: {}", err);
            return Ok(());
        }
    };
    println!(
        "\nRoster: {} people | average score {} | {} low / {} medium / {} high risk",
        browse_view.overview.total,
        browse_view.overview.average_score,
        browse_view.overview.low_risk,
        browse_view.overview.medium_risk,
        browse_view.overview.high_risk
    );
    for card in &browse_view.people {
        println!(
            "- {} | score {} ({}) | {} | ${} income",
            card.name, card.credit_score, card.tier_label, card.risk_label, card.income
        );
    }

    let spotlight_id = PersonId("1".to_string());
    let profile = match service.profile(&spotlight_id) {
        Ok(person) => person,
        Err(err) => {
            println!("Profile unavailable: {}", err);
            return Ok(());
        }
    };
    println!("\nProfile spotlight");
    render_score_profile(&profile);

    let mut current_score = profile.credit_score;
    if !skip_edit {
        let new_score = profile.credit_score.saturating_add(15);
        println!("\nScore edit (effective {})", today);
        match service.update_score(&spotlight_id, new_score, today) {
            Ok(change) => {
                current_score = change.new_score;
                println!(
                    "- {} -> {} ({:+}), tier {}",
                    change.previous_score, change.new_score, change.delta, change.tier_label
                );
            }
            Err(err) => println!("- Edit rejected: {}", err),
        }

        let refreshed = match service.score_card(&spotlight_id) {
            Ok(card) => card,
            Err(err) => {
                println!("- Refreshed score card unavailable: {}", err);
                return Ok(());
            }
        };
        println!(
            "- Gauge now {:.1}% | trend {}",
            refreshed.gauge_percent, refreshed.trend_label
        );
    }

    let payments_view = payments::review(&seed::payment_history(), &PaymentsQuery::default())?;
    println!();
    render_payment_summary(&payments_view.overview);

    let (transactions, imported) = load_card_transactions_from_path(statement_csv)?;
    let activity = cards::activity(&transactions, &CardsQuery::default())?;
    println!();
    render_card_activity(&activity, imported, false);

    if let Some(procedure) = seed::procedures()
        .into_iter()
        .find(|procedure| procedure.name == "Dental Implant")
    {
        let financing = offers::qualification(&seed::loan_offers(), current_score, &procedure);
        println!();
        render_financing(&financing);
    }

    println!();
    render_tips(&seed::improvement_tips());

    Ok(())
}

pub(crate) fn load_card_transactions_from_path(
    statement_csv: Option<PathBuf>,
) -> Result<(Vec<CardTransaction>, bool), AppError> {
    match statement_csv {
        Some(path) => StatementImporter::from_path(path)
            .map(|transactions| (transactions, true))
            .map_err(AppError::from),
        None => Ok((seed::card_transactions(), false)),
    }
}

fn render_score_profile(person: &Person) {
    let card = ScoreCard::for_person(person);
    println!("Credit profile: {}", card.name);
    println!(
        "Score {} ({}) | gauge {:.1}% | trend {} ({:+})",
        card.credit_score, card.tier_label, card.gauge_percent, card.trend_label, card.delta
    );
    println!("Last updated {}", card.last_updated);

    println!("\nScore history (newest first)");
    for point in person.credit_history.iter().rev() {
        println!("- {}: {}", point.date, point.score);
    }
    if let Some(stats) = HistoryStats::from_history(&person.credit_history) {
        println!(
            "High {} | low {} | improvement {}",
            stats.highest, stats.lowest, stats.improvement
        );
    }
}

fn render_payment_summary(overview: &PaymentOverview) {
    println!("Payment history");
    println!(
        "- {} payments | {}% on time | ${:.2} total paid",
        overview.total_payments, overview.on_time_rate, overview.total_paid
    );
    println!(
        "- {} late or missed | {} below minimum due",
        overview.late_or_missed, overview.below_minimum
    );
}

fn render_card_activity(view: &CardActivityView, imported: bool, list_transactions: bool) {
    println!("Card activity");
    if imported {
        println!("Data source: statement CSV import");
    } else {
        println!("Data source: seeded transactions");
    }
    println!(
        "- {} transactions | ${:.2} spent | ${:.2} payments | ${:.2} fees and interest",
        view.overview.total_transactions,
        view.overview.total_spent,
        view.overview.total_payments,
        view.overview.fees_and_interest
    );
    if let Some(label) = view.overview.top_category_label {
        println!("- Top spending category: {}", label);
    }

    println!("Spending by category:");
    for spend in &view.category_spending {
        println!("  - {}: ${:.2}", spend.label, spend.total);
    }

    if list_transactions {
        println!("\nTransaction listing (newest first)");
        for row in &view.transactions {
            let note = match &row.description {
                Some(description) => format!(" ({description})"),
                None => String::new(),
            };
            println!(
                "- {} | {} | {} | ${:.2} | {} | {}{}",
                row.transaction_date,
                row.merchant_name,
                row.category_label,
                row.amount,
                row.card_name,
                row.kind_label,
                note
            );
        }
    }
}

fn render_financing(view: &QualificationView) {
    println!(
        "Financing options for {} (avg ${}, score {})",
        view.procedure.name, view.procedure.avg_cost, view.credit_score
    );
    if view.qualified.is_empty() {
        println!("- No lenders qualify this score");
    }
    for offer in &view.qualified {
        println!(
            "- {} | up to ${} | {} | {}",
            offer.lender, offer.max_loan_amount, offer.interest_rate_range, offer.processing_time
        );
    }
    println!("- {} offers declined", view.declined);
}

fn render_tips(tips: &[ImprovementTip]) {
    println!("Score improvement tips");
    for tip in tips {
        println!(
            "- [{}] {} ({}, {})",
            tip.impact.label(),
            tip.title,
            tip.category.label(),
            tip.timeframe
        );
    }
}
