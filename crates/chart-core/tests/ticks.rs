// File: crates/chart-core/tests/ticks.rs
// Purpose: Tick placement and label formatting for numeric, categorical and date axes.

use chart_core::{day_number, Axis, TickFormat, Ticks};
use chrono::NaiveDate;

#[test]
fn auto_ticks_use_nice_steps() {
    let axis = Axis::new("", 0.0, 110.0);
    let labels: Vec<String> = axis.tick_marks(8).into_iter().map(|(_, l)| l).collect();
    assert_eq!(labels, ["0", "20", "40", "60", "80", "100"]);
}

#[test]
fn fractional_steps_get_decimals() {
    let axis = Axis::new("", 0.0, 1.0);
    let marks = axis.tick_marks(5);
    assert_eq!(marks[1].1, "0.2");
}

#[test]
fn categories_put_one_tick_per_row() {
    let axis = Axis::categories("", &["a", "b", "c"]);
    assert_eq!((axis.min, axis.max), (-0.5, 2.5));
    let marks = axis.tick_marks(10);
    assert_eq!(marks, vec![(0.0, "a".to_string()), (1.0, "b".to_string()), (2.0, "c".to_string())]);
}

#[test]
fn labeled_ticks_outside_range_are_dropped() {
    let axis = Axis::new("", 0.0, 24.0).with_ticks(Ticks::Labeled(vec![(0.0, "00:00".into()), (30.0, "30:00".into())]));
    assert_eq!(axis.tick_marks(5).len(), 1);
}

#[test]
fn date_ticks_format_day_numbers() {
    let start = NaiveDate::from_ymd_opt(2019, 11, 16).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let end = NaiveDate::from_ymd_opt(2019, 11, 23).unwrap().and_hms_opt(10, 50, 0).unwrap();
    let axis = Axis::new("", day_number(start), day_number(end)).with_format(TickFormat::Date("%b %d\n%H:%M".into()));

    let marks = axis.tick_marks(10);
    assert_eq!(marks.first().map(|(_, l)| l.as_str()), Some("Nov 17\n00:00"));
    assert_eq!(marks.last().map(|(_, l)| l.as_str()), Some("Nov 23\n00:00"));
    assert_eq!(marks.len(), 7);
}

#[test]
fn day_number_counts_from_epoch() {
    let t = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap().and_hms_opt(12, 0, 0).unwrap();
    assert_eq!(day_number(t), 1.5);
}
