//! Classification of the built-in calendar across a whole year.

use calendari_calendar::{MonthDay, YearMonth};
use calendari_classify::{AnnotationTables, Classification, classify, classify_date, compose_label};

fn md(s: &str) -> MonthDay {
    s.parse().unwrap()
}

fn year_2025() -> Vec<calendari_classify::DayInfo> {
    let tables = AnnotationTables::builtin();
    (0..12)
        .flat_map(|i| YearMonth::from_index(2025, i).unwrap().dates())
        .map(|date| classify_date(tables, date))
        .collect()
}

#[test]
fn counts_per_classification_2025() {
    let days = year_2025();
    assert_eq!(days.len(), 365);

    let count = |c: Classification| days.iter().filter(|d| d.classification == c).count();
    assert_eq!(count(Classification::Falla), 6);
    // 02-14, 03-08 and 12-31; 01-19 is a falla day.
    assert_eq!(count(Classification::Event), 3);
    // 15 holidays minus 03-19, which is a falla day.
    assert_eq!(count(Classification::Holiday), 14);
}

#[test]
fn labels_present_exactly_for_annotated_days() {
    for day in year_2025() {
        assert_eq!(
            day.label.is_some(),
            day.classification.is_annotated(),
            "{}",
            day.key
        );
    }
}

#[test]
fn saturday_not_in_any_table_is_weekend() {
    let tables = AnnotationTables::builtin();
    // 2025-03-01 is a Saturday.
    let verdict = classify(tables, md("03-01"), 5);
    assert_eq!(verdict.classification, Classification::Weekend);
    assert_eq!(compose_label(tables, md("03-01")), None);
}

#[test]
fn christmas_is_a_holiday() {
    let tables = AnnotationTables::builtin();
    let verdict = classify(tables, md("12-25"), 3);
    assert_eq!(verdict.classification, Classification::Holiday);
    assert_eq!(compose_label(tables, md("12-25")).as_deref(), Some("Navidad"));
}

#[test]
fn classification_is_stable_across_calls() {
    let first = year_2025();
    let second = year_2025();
    assert_eq!(first, second);
}

#[test]
fn tables_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.toml");
    std::fs::write(
        &path,
        "falla_days = [\"03-15\"]\n\n[events]\n\"03-15\" = \"Plantà\"\n",
    )
    .unwrap();

    let tables = AnnotationTables::from_path(&path).unwrap();
    assert_eq!(
        compose_label(&tables, md("03-15")).as_deref(),
        Some("Falla – Plantà")
    );
}
