use summercal_calendar::Date;
use summercal_highlight::{Event, expand};

fn d(y: i32, m: u8, day: u8) -> Date {
    Date::new(y, m, day).unwrap()
}

fn highlighted(events: &[Event]) -> Vec<Date> {
    expand(events).iter().map(|(date, _)| date).collect()
}

#[test]
fn day_count_matches_range_length() {
    let ranges = [
        (d(2025, 7, 4), d(2025, 7, 4)),
        (d(2025, 6, 1), d(2025, 8, 31)),
        (d(2024, 12, 20), d(2025, 1, 10)),
        (d(2024, 1, 1), d(2024, 12, 31)),
    ];
    for (start, end) in ranges {
        let event = Event::new(start, end, "Span").unwrap();
        let map = expand(std::slice::from_ref(&event));
        assert_eq!(map.len(), event.n_days(), "{event}");
        assert_eq!(
            map.len() as i64,
            start.days_until(end) + 1,
            "{start}..={end}"
        );
    }
}

#[test]
fn month_boundary() {
    let events = [Event::new(d(2025, 6, 29), d(2025, 7, 2), "Trip").unwrap()];
    assert_eq!(
        highlighted(&events),
        vec![d(2025, 6, 29), d(2025, 6, 30), d(2025, 7, 1), d(2025, 7, 2)]
    );
}

#[test]
fn leap_year_february() {
    let leap = [Event::new(d(2024, 2, 28), d(2024, 3, 1), "Leap").unwrap()];
    assert_eq!(
        highlighted(&leap),
        vec![d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1)]
    );

    let common = [Event::new(d(2025, 2, 28), d(2025, 3, 1), "Common").unwrap()];
    assert_eq!(highlighted(&common), vec![d(2025, 2, 28), d(2025, 3, 1)]);
}

#[test]
fn year_boundary() {
    let events = [Event::new(d(2025, 12, 31), d(2026, 1, 1), "New Year").unwrap()];
    assert_eq!(highlighted(&events), vec![d(2025, 12, 31), d(2026, 1, 1)]);
}

#[test]
fn later_event_wins_on_overlap() {
    let events = [
        Event::new(d(2025, 6, 1), d(2025, 6, 10), "X").unwrap(),
        Event::new(d(2025, 6, 5), d(2025, 6, 15), "Y").unwrap(),
    ];
    let map = expand(&events);
    assert_eq!(map.get(d(2025, 6, 7)), Some("Y"));
    assert_eq!(map.get(d(2025, 6, 3)), Some("X"));
    assert_eq!(map.get(d(2025, 6, 15)), Some("Y"));
}

#[test]
fn every_key_inside_some_event() {
    let events = [
        Event::new(d(2025, 6, 1), d(2025, 6, 3), "A").unwrap(),
        Event::new(d(2025, 7, 30), d(2025, 8, 2), "B").unwrap(),
    ];
    let map = expand(&events);
    for (date, label) in map.iter() {
        assert!(
            events
                .iter()
                .any(|e| e.start() <= date && date <= e.end() && e.label() == label),
            "{date} -> {label} not backed by an event"
        );
    }
}
