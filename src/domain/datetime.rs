use chrono::{NaiveDate, NaiveDateTime};

pub const EMPTY_PLACEHOLDER: &str = "—";

/// Parses the dashboard display format `DD.MM.YY / HH:MM`. The time part is
/// optional and defaults to midnight; a missing date part or the `—`
/// placeholder means the row has no date. Two-digit years expand by adding
/// 2000. Invalid calendar dates are treated as unparseable.
pub fn parse_display_date_time(value: &str) -> Option<NaiveDateTime> {
    let mut parts = value.splitn(2, '/');
    let date_part = parts.next().map(str::trim).unwrap_or_default();
    let time_part = parts.next().map(str::trim).unwrap_or_default();

    if date_part.is_empty() || date_part == EMPTY_PLACEHOLDER {
        return None;
    }

    let mut fields = date_part.split('.');
    let day: u32 = fields.next()?.trim().parse().ok()?;
    let month: u32 = fields.next()?.trim().parse().ok()?;
    let year_short: i32 = fields.next()?.trim().parse().ok()?;
    let year = if year_short < 100 {
        2000 + year_short
    } else {
        year_short
    };

    let mut clock = time_part.split(':');
    let hour = parse_clock_component(clock.next().unwrap_or_default())?;
    let minute = parse_clock_component(clock.next().unwrap_or_default())?;

    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(hour, minute, 0))
}

pub fn same_calendar_day(instant: NaiveDateTime, date: NaiveDate) -> bool {
    instant.date() == date
}

/// Epoch seconds used as the sort key for datetime columns; unparseable
/// values rank as 0 and end up at one extreme of the order.
pub fn date_sort_key(value: &str) -> i64 {
    parse_display_date_time(value)
        .map(|instant| instant.and_utc().timestamp())
        .unwrap_or(0)
}

fn parse_clock_component(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}
