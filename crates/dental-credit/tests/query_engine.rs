use dental_credit::credit::ScoreTier;
use dental_credit::query::{
    filter_and_sort, percent_of, summarize, AggregationSpec, BreakdownSpec, BreakdownWeight,
    FieldSpec, FieldValue, QueryDescriptor, QueryError, Schema, SortDirection, TierTable,
};

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    name: &'static str,
    score: f64,
    bucket: &'static str,
}

fn profile(name: &'static str, score: f64, bucket: &'static str) -> Profile {
    Profile { name, score, bucket }
}

fn profiles() -> Vec<Profile> {
    vec![
        profile("Avery", 750.0, "steady"),
        profile("Blair", 680.0, "steady"),
        profile("Casey", 820.0, "rising"),
        profile("Devon", 680.0, "rising"),
    ]
}

fn schema() -> Schema<Profile> {
    Schema::new(vec![
        FieldSpec::new("name", |p: &Profile| FieldValue::text(p.name)).searchable(),
        FieldSpec::new("score", |p: &Profile| FieldValue::number(p.score)).sortable(),
        FieldSpec::new("bucket", |p: &Profile| FieldValue::category(p.bucket)).filterable(),
    ])
}

#[test]
fn empty_search_matches_everything_in_input_order() {
    let records = profiles();
    let view = filter_and_sort(&records, &QueryDescriptor::default(), &schema())
        .expect("query succeeds");
    assert_eq!(view, records);

    let whitespace = QueryDescriptor::default().with_search("   ");
    let view = filter_and_sort(&records, &whitespace, &schema()).expect("query succeeds");
    assert_eq!(view, records);
}

#[test]
fn rerunning_a_descriptor_over_its_output_is_a_fixed_point() {
    let records = profiles();
    let descriptor = QueryDescriptor::sorted_by("score", SortDirection::Descending)
        .with_filter("bucket", "steady");

    let once = filter_and_sort(&records, &descriptor, &schema()).expect("first run");
    let twice = filter_and_sort(&once, &descriptor, &schema()).expect("second run");
    assert_eq!(once, twice);
}

#[test]
fn each_added_filter_can_only_shrink_the_view() {
    let records = profiles();

    let unfiltered = filter_and_sort(&records, &QueryDescriptor::default(), &schema())
        .expect("query succeeds");
    let one = QueryDescriptor::default().with_filter("bucket", "rising");
    let one_view = filter_and_sort(&records, &one, &schema()).expect("query succeeds");
    assert!(one_view.len() <= unfiltered.len());

    // An unknown filter key changes nothing rather than erroring.
    let stacked = one.with_filter("region", "west");
    let stacked_view = filter_and_sort(&records, &stacked, &schema()).expect("query succeeds");
    assert!(stacked_view.len() <= one_view.len());
    assert_eq!(stacked_view, one_view);
}

#[test]
fn sorting_is_stable_in_both_directions() {
    let records = profiles();

    let ascending = filter_and_sort(
        &records,
        &QueryDescriptor::sorted_by("score", SortDirection::Ascending),
        &schema(),
    )
    .expect("query succeeds");
    let names: Vec<&str> = ascending.iter().map(|p| p.name).collect();
    // Blair and Devon tie on 680 and keep their input order.
    assert_eq!(names, vec!["Blair", "Devon", "Avery", "Casey"]);

    let descending = filter_and_sort(
        &records,
        &QueryDescriptor::sorted_by("score", SortDirection::Descending),
        &schema(),
    )
    .expect("query succeeds");
    let names: Vec<&str> = descending.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Casey", "Avery", "Blair", "Devon"]);
}

#[test]
fn sorting_scores_descending_orders_them_highest_first() {
    let records = vec![
        profile("A", 750.0, "steady"),
        profile("B", 680.0, "steady"),
        profile("C", 820.0, "steady"),
    ];
    let view = filter_and_sort(
        &records,
        &QueryDescriptor::sorted_by("score", SortDirection::Descending),
        &schema(),
    )
    .expect("query succeeds");

    let scores: Vec<f64> = view.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![820.0, 750.0, 680.0]);
}

#[test]
fn unknown_sort_keys_fail_fast() {
    let records = profiles();
    let descriptor = QueryDescriptor::sorted_by("shoe_size", SortDirection::Ascending);

    let error = filter_and_sort(&records, &descriptor, &schema()).expect_err("bad sort key");
    assert_eq!(error, QueryError::UnknownSortField("shoe_size".to_string()));
}

#[test]
fn empty_view_summary_is_all_zeroes_and_never_nan() {
    let empty: Vec<Profile> = Vec::new();
    let summary = summarize(
        &empty,
        &AggregationSpec {
            sum: Some(|p: &Profile| p.score),
            ..AggregationSpec::default()
        },
    );

    assert_eq!(summary.count, 0);
    assert_eq!(summary.sum, 0.0);
    assert_eq!(summary.average, 0.0);
    assert!(!summary.average.is_nan());
    assert!(summary.min.is_none());
    assert!(summary.max.is_none());

    assert_eq!(percent_of(&empty, |_| true), 0);
}

#[test]
fn on_time_rate_of_a_half_on_time_set_is_fifty() {
    let statuses = ["on_time", "late", "missed", "on_time"];
    assert_eq!(percent_of(&statuses, |status| *status == "on_time"), 50);
}

#[test]
fn breakdown_sums_per_category_and_picks_the_heaviest() {
    struct Spend {
        category: &'static str,
        amount: f64,
    }
    let spends = [
        Spend { category: "dining", amount: 10.0 },
        Spend { category: "gas", amount: 20.0 },
        Spend { category: "dining", amount: 5.0 },
    ];

    let summary = summarize(
        &spends,
        &AggregationSpec {
            breakdown: Some(BreakdownSpec {
                category: |s: &Spend| s.category.to_string(),
                weight: BreakdownWeight::Sum(|s: &Spend| s.amount),
            }),
            ..AggregationSpec::default()
        },
    );

    assert_eq!(summary.breakdown.len(), 2);
    assert_eq!(summary.breakdown[0].category, "dining");
    assert_eq!(summary.breakdown[0].weight, 15.0);
    assert_eq!(summary.breakdown[1].category, "gas");
    assert_eq!(summary.breakdown[1].weight, 20.0);
    assert_eq!(summary.top_category.as_deref(), Some("gas"));
}

#[test]
fn credit_score_tiers_flip_exactly_at_their_published_bounds() {
    let pairs = [
        (579, ScoreTier::Poor, 580, ScoreTier::Fair),
        (669, ScoreTier::Fair, 670, ScoreTier::Good),
        (739, ScoreTier::Good, 740, ScoreTier::VeryGood),
        (799, ScoreTier::VeryGood, 800, ScoreTier::Excellent),
    ];
    for (below, below_tier, at, at_tier) in pairs {
        assert_eq!(ScoreTier::for_score(below), below_tier);
        assert_eq!(ScoreTier::for_score(at), at_tier);
    }

    let table = ScoreTier::table();
    assert_eq!(table.classify(300.0), ScoreTier::Poor);
    assert_eq!(table.classify(850.0), ScoreTier::Excellent);
}

#[test]
fn tier_tables_are_total_and_monotonic_over_all_reals() {
    let table = TierTable::new(
        vec![(800.0, "excellent"), (670.0, "good"), (580.0, "fair")],
        "poor",
    );

    assert_eq!(table.classify(-1_000_000.0), "poor");
    assert_eq!(table.classify(579.999), "poor");
    assert_eq!(table.classify(580.0), "fair");
    assert_eq!(table.classify(800.0), "excellent");
    assert_eq!(table.classify(f64::MAX), "excellent");

    // Walking scores upward never moves to a lower tier.
    let rank = |tier: &str| match tier {
        "poor" => 0,
        "fair" => 1,
        "good" => 2,
        _ => 3,
    };
    let mut previous = rank(table.classify(-500.0));
    let mut score = -500.0;
    while score <= 1_000.0 {
        let current = rank(table.classify(score));
        assert!(current >= previous, "tier dropped at score {score}");
        previous = current;
        score += 7.0;
    }
}
