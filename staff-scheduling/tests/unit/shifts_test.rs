use super::*;

parameterized_test! {can_get_working_minutes, (kind, expected), {
    assert_eq!(ShiftCatalog::default().working_minutes(kind), expected);
}}

can_get_working_minutes! {
    case01_a: (ShiftKind::A, 390),
    case02_b: (ShiftKind::B, 420),
    case03_c: (ShiftKind::C, 390),
    case04_d: (ShiftKind::D, 390),
    case05_off: (ShiftKind::Off, 0),
}

parameterized_test! {can_get_rest_minutes, (first, next, expected), {
    assert_eq!(ShiftCatalog::default().rest_minutes(first, next), expected);
}}

can_get_rest_minutes! {
    case01_a_a: (ShiftKind::A, ShiftKind::A, Some(990)),
    case02_b_a: (ShiftKind::B, ShiftKind::A, Some(660)),
    case03_c_a: (ShiftKind::C, ShiftKind::A, Some(600)),
    case04_d_a: (ShiftKind::D, ShiftKind::A, Some(510)),
    case05_a_d: (ShiftKind::A, ShiftKind::D, Some(1470)),
    case06_off_a: (ShiftKind::Off, ShiftKind::A, None),
    case07_d_off: (ShiftKind::D, ShiftKind::Off, None),
}

#[test]
fn can_get_rest_conflicts() {
    let catalog = ShiftCatalog::default();

    assert_eq!(catalog.rest_conflicts(11 * 60), vec![(ShiftKind::C, ShiftKind::A), (ShiftKind::D, ShiftKind::A)]);
    assert_eq!(catalog.rest_conflicts(12 * 60), vec![
        (ShiftKind::B, ShiftKind::A),
        (ShiftKind::C, ShiftKind::A),
        (ShiftKind::D, ShiftKind::A)
    ]);
    assert!(catalog.rest_conflicts(0).is_empty());
}

#[test]
fn can_list_kinds_with_day_off_last() {
    let catalog = ShiftCatalog::default();

    assert_eq!(catalog.kinds().collect::<Vec<_>>(), ShiftKind::ALL.to_vec());
    assert_eq!(catalog.working_kinds().count(), 4);
    assert_eq!(catalog.night_shifts(), &[ShiftKind::C, ShiftKind::D]);
    assert_eq!(catalog.desired_staff(ShiftKind::A), Some(10));
    assert_eq!(catalog.desired_staff(ShiftKind::Off), None);
}

#[test]
fn can_format_shift_time() {
    let catalog = ShiftCatalog::default();

    assert_eq!(format_time(8, 5), "08:05");
    assert_eq!(catalog.time(ShiftKind::C).map(|time| time.to_string()), Some("14:30-22:00".to_string()));
    assert_eq!(ShiftKind::Off.to_string(), "OFF");
}

#[test]
fn can_handle_shift_ending_next_day() {
    let time = ShiftTime::new((22, 0), (6, 30));

    assert_eq!(time.end_minutes(), 30 * 60 + 30);
    assert_eq!(time.duration(), 8 * 60 + 30);
}
