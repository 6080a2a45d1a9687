use summercal_calendar::{Date, MonthSpec};
use summercal_highlight::{Event, Palette, assign_colors, expand};
use summercal_render::{DocumentOptions, compose, render_month};

fn d(y: i32, m: u8, day: u8) -> Date {
    Date::new(y, m, day).unwrap()
}

fn pipeline(events: &[Event], months: &[MonthSpec]) -> String {
    let highlights = expand(events);
    let colors = assign_colors(events, &Palette::default());
    compose(months, &highlights, &colors, &DocumentOptions::default()).unwrap()
}

#[test]
fn single_holiday_in_july() {
    let events = [Event::new(d(2025, 7, 4), d(2025, 7, 4), "Holiday").unwrap()];
    let html = render_month(
        MonthSpec::new(2025, 7).unwrap(),
        &expand(&events),
        &assign_colors(&events, &Palette::default()),
    )
    .unwrap();

    assert_eq!(html.matches("background-color").count(), 1);
    assert!(html.contains(
        "<td style=\"background-color:#ffd966\" title=\"Holiday\"><strong>4</strong><br><small>Holiday</small></td>"
    ));
    for day in (1..=31).filter(|&d| d != 4) {
        assert!(
            html.contains(&format!("<td>{day}</td>")),
            "day {day} should be a plain cell"
        );
    }
}

#[test]
fn summer_document() {
    let events = [
        Event::new(d(2025, 6, 16), d(2025, 6, 27), "Camp").unwrap(),
        Event::new(d(2025, 7, 28), d(2025, 8, 8), "Beach").unwrap(),
        Event::new(d(2025, 7, 4), d(2025, 7, 4), "Holiday").unwrap(),
    ];
    let months: Vec<MonthSpec> = (6..=8).map(|m| MonthSpec::new(2025, m).unwrap()).collect();
    let html = pipeline(&events, &months);

    assert_eq!(html.matches("<table class=\"calendar\">").count(), 3);
    // 12 camp days, 12 beach days, 1 holiday.
    assert_eq!(html.matches("<strong>").count(), 25);
    assert_eq!(html.matches("<small>Beach</small>").count(), 12);
    // Beach < Camp < Holiday in sorted order.
    assert!(html.contains("background-color:#ffd966\" title=\"Beach\""));
    assert!(html.contains("background-color:#a4c2f4\" title=\"Camp\""));
    assert!(html.contains("background-color:#d9ead3\" title=\"Holiday\""));
}

#[test]
fn cross_year_months_in_given_order() {
    let events = [Event::new(d(2025, 12, 30), d(2026, 1, 2), "Break").unwrap()];
    let months = [
        MonthSpec::new(2025, 12).unwrap(),
        MonthSpec::new(2026, 1).unwrap(),
    ];
    let html = pipeline(&events, &months);
    let dec = html.find("December 2025").unwrap();
    let jan = html.find("January 2026").unwrap();
    assert!(dec < jan);
    assert_eq!(html.matches("<small>Break</small>").count(), 4);
}

#[test]
fn idempotent_output() {
    let events = [
        Event::new(d(2025, 6, 1), d(2025, 6, 10), "X").unwrap(),
        Event::new(d(2025, 6, 5), d(2025, 6, 15), "Y").unwrap(),
    ];
    let months = [MonthSpec::new(2025, 6).unwrap()];
    let first = pipeline(&events, &months);
    let second = pipeline(&events, &months);
    assert_eq!(first, second);
}

#[test]
fn output_independent_of_label_arrival_order_when_disjoint() {
    let a = Event::new(d(2025, 6, 2), d(2025, 6, 3), "Alpha").unwrap();
    let b = Event::new(d(2025, 6, 9), d(2025, 6, 10), "Bravo").unwrap();
    let months = [MonthSpec::new(2025, 6).unwrap()];
    assert_eq!(
        pipeline(&[a.clone(), b.clone()], &months),
        pipeline(&[b, a], &months)
    );
}
