use chrono::{Datelike, Duration, Months, NaiveDate};
use crate::core::models::CalendarEvent;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let start = month_start(date);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        start.checked_add_months(months)
    } else {
        start.checked_sub_months(months)
    };
    shifted.unwrap_or(start)
}

/// Sunday-to-Saturday rows covering every day of the month holding `date`.
pub fn month_weeks(date: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first = month_start(date);
    let last = shift_month(first, 1) - Duration::days(1);
    let grid_start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let grid_end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));

    let mut weeks = Vec::new();
    let mut day = grid_start;
    while day <= grid_end {
        let mut week = [day; 7];
        for (offset, slot) in week.iter_mut().enumerate() {
            *slot = day + Duration::days(offset as i64);
        }
        weeks.push(week);
        day += Duration::days(7);
    }
    weeks
}

pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.start.date() == day)
        .cloned()
        .collect()
}

/// Title and hover text for each event starting on `day`.
pub fn event_chips(events: &[CalendarEvent], day: NaiveDate) -> Vec<(String, String)> {
    events_on(events, day)
        .into_iter()
        .map(|event| {
            let range = time_range(&event);
            (event.title, range)
        })
        .collect()
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn time_range(event: &CalendarEvent) -> String {
    format!("{} – {}", event.start.format("%-I:%M %p"), event.end.format("%-I:%M %p"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sample;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn june_2023_spans_five_weeks() {
        let weeks = month_weeks(date(2023, 6, 15));
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], date(2023, 5, 28));
        assert_eq!(weeks[0][4], date(2023, 6, 1));
        assert_eq!(weeks[4][6], date(2023, 7, 1));
    }

    #[test]
    fn month_aligned_to_sunday_has_no_padding() {
        let weeks = month_weeks(date(2015, 2, 10));
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], date(2015, 2, 1));
        assert_eq!(weeks[3][6], date(2015, 2, 28));
    }

    #[test]
    fn shift_month_crosses_years() {
        assert_eq!(shift_month(date(2023, 12, 31), 1), date(2024, 1, 1));
        assert_eq!(shift_month(date(2023, 1, 15), -1), date(2022, 12, 1));
        assert_eq!(shift_month(date(2023, 3, 31), 0), date(2023, 3, 1));
    }

    #[test]
    fn events_bucket_by_start_day() {
        let events = sample::events();
        let on_20th = events_on(&events, date(2023, 6, 20));
        assert_eq!(on_20th.len(), 1);
        assert_eq!(on_20th[0].title, "Board meeting");
        assert!(events_on(&events, date(2023, 6, 22)).is_empty());
        assert_eq!(time_range(&on_20th[0]), "10:00 AM – 12:00 PM");
    }

    #[test]
    fn chips_pair_titles_with_time_ranges() {
        let chips = event_chips(&sample::events(), date(2023, 6, 21));
        assert_eq!(chips, [("Team lunch".to_string(), "12:00 PM – 1:00 PM".to_string())]);
        assert!(event_chips(&sample::events(), date(2023, 6, 1)).is_empty());
    }

    #[test]
    fn label_names_month_and_year() {
        assert_eq!(month_label(date(2023, 6, 1)), "June 2023");
    }
}
