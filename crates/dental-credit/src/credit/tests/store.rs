use super::common::*;
use crate::credit::domain::{ScorePoint, SCORE_CEILING, SCORE_FLOOR};
use crate::credit::store::StoreError;
use chrono::NaiveDate;

#[test]
fn with_score_derives_a_new_snapshot_and_leaves_the_original_alone() {
    let roster = seeded_roster();
    let id = person_id("1");
    let before = roster.person(&id).expect("seed person").clone();

    let updated = roster
        .with_score(&id, 760, edit_day())
        .expect("edit succeeds");

    let edited = updated.person(&id).expect("person survives");
    assert_eq!(edited.credit_score, 760);
    assert_eq!(edited.last_updated, edit_day());
    assert_eq!(
        edited.credit_history.last(),
        Some(&ScorePoint {
            date: edit_day(),
            score: 760
        })
    );

    // The source snapshot is untouched.
    assert_eq!(roster.person(&id), Some(&before));
    assert_eq!(before.credit_score, 750);
    assert_eq!(before.credit_history.len(), 2);
}

#[test]
fn with_score_appends_history_on_a_new_day() {
    let roster = seeded_roster();
    let id = person_id("1");

    let updated = roster
        .with_score(&id, 755, edit_day())
        .expect("edit succeeds");

    let history = &updated.person(&id).expect("person").credit_history;
    assert_eq!(history.len(), 3);
    assert_eq!(history[history.len() - 2].score, 750);
}

#[test]
fn with_score_rewrites_a_same_day_history_point() {
    let roster = seeded_roster();
    let id = person_id("1");
    let same_day = NaiveDate::from_ymd_opt(2024, 12, 15).expect("valid date");

    let updated = roster
        .with_score(&id, 762, same_day)
        .expect("edit succeeds");

    let history = &updated.person(&id).expect("person").credit_history;
    assert_eq!(history.len(), 2);
    assert_eq!(
        history.last(),
        Some(&ScorePoint {
            date: same_day,
            score: 762
        })
    );
}

#[test]
fn with_score_accepts_the_score_bounds() {
    let roster = seeded_roster();
    let id = person_id("1");

    let floor = roster
        .with_score(&id, SCORE_FLOOR, edit_day())
        .expect("floor accepted");
    assert_eq!(floor.person(&id).expect("person").credit_score, 300);

    let ceiling = roster
        .with_score(&id, SCORE_CEILING, edit_day())
        .expect("ceiling accepted");
    assert_eq!(ceiling.person(&id).expect("person").credit_score, 850);
}

#[test]
fn with_score_rejects_out_of_range_scores() {
    let roster = seeded_roster();
    let id = person_id("1");

    let low = roster.with_score(&id, 299, edit_day());
    assert_eq!(low, Err(StoreError::ScoreOutOfRange(299)));

    let high = roster.with_score(&id, 851, edit_day());
    assert_eq!(high, Err(StoreError::ScoreOutOfRange(851)));
}

#[test]
fn with_score_rejects_unknown_people() {
    let roster = seeded_roster();
    let id = person_id("404");

    let result = roster.with_score(&id, 700, edit_day());
    assert_eq!(result, Err(StoreError::UnknownPerson(id)));
}

#[test]
fn roster_lookup_finds_seeded_people() {
    let roster = seeded_roster();
    assert_eq!(roster.len(), 8);
    assert!(!roster.is_empty());

    let person = roster.person(&person_id("3")).expect("seed person");
    assert_eq!(person.full_name(), "Emily Rodriguez");
    assert!(roster.person(&person_id("missing")).is_none());
}
