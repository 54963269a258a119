//! Tests for clash descriptions and summaries.

use clash_engine::{describe_clash, detect_clashes, summarize, Slot};

fn named(id: i64, code: &str, name: &str) -> Slot {
    Slot::new(id).course(code, name)
}

#[test]
fn describes_a_room_clash() {
    let mut a = named(1, "CS101", "Algorithms").room(5).day(0).times("08:00", "09:00");
    a.room_name = Some("R101".to_string());
    let b = named(2, "MA201", "Calculus").room(5).day(0).times("08:30", "09:30");

    let slots = vec![a, b];
    let clashes = detect_clashes(&slots);

    assert_eq!(
        describe_clash(&clashes[0]),
        "Room clash in R101 on Monday: CS101 Algorithms (08:00 - 09:00) vs MA201 Calculus (08:30 - 09:30)"
    );
}

#[test]
fn describes_a_teacher_clash_on_an_unnamed_day() {
    let slots = vec![
        Slot::new(1).teacher(3).day(9).times("10:00", "11:00"),
        Slot::new(2).teacher(3).day(9).times("10:30", "11:30"),
    ];
    let clashes = detect_clashes(&slots);

    assert_eq!(clashes[0].day, "");
    assert_eq!(
        describe_clash(&clashes[0]),
        "Teacher clash in Unknown Teacher on day 9: N/A Unknown Course (10:00 - 11:00) vs N/A Unknown Course (10:30 - 11:30)"
    );
}

#[test]
fn summary_counts_axes_days_and_slots() {
    let slots = vec![
        Slot::new(1).room(1).teacher(1).day(0).times("08:00", "09:00"),
        Slot::new(2).room(1).teacher(1).day(0).times("08:30", "09:30"),
        Slot::new(3).room(2).day(4).times("14:00", "15:00"),
        Slot::new(4).room(2).day(4).times("14:30", "15:30"),
        Slot::new(5).room(2).day(4).times("16:00", "17:00"),
    ];
    let clashes = detect_clashes(&slots);

    let summary = summarize(&clashes);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.room, 2);
    assert_eq!(summary.teacher, 1);
    assert_eq!(summary.on_day("Monday"), 2);
    assert_eq!(summary.on_day("Friday"), 1);
    assert_eq!(summary.on_day("Tuesday"), 0);
    assert_eq!(summary.affected_slots, 4, "slot 5 is clash-free");
    assert!(!summary.is_empty());
}

#[test]
fn summary_of_nothing_is_empty() {
    let summary = summarize(&[]);
    assert!(summary.is_empty());
    assert_eq!(summary.affected_slots, 0);
}

#[test]
fn summary_serializes_days_by_name() {
    let slots = vec![
        Slot::new(1).room(1).day(6).times("08:00", "09:00"),
        Slot::new(2).room(1).day(6).times("08:30", "09:30"),
    ];
    let clashes = detect_clashes(&slots);

    let value = serde_json::to_value(summarize(&clashes)).unwrap();

    assert_eq!(value["total"], 1);
    assert_eq!(value["by_day"]["Sunday"], 1);
}
