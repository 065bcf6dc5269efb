// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Presentation helpers exposed to templates next to the data functions.

use chrono::{DateTime, Duration, NaiveTime, Utc};

const DAY_SECONDS: i64 = 24 * 60 * 60;
const WEEK_SECONDS: i64 = 7 * DAY_SECONDS;
const MONTH_SECONDS: i64 = 30 * DAY_SECONDS;
const YEAR_SECONDS: i64 = 12 * MONTH_SECONDS;
const LONG_TIME_SECONDS: i64 = 37 * YEAR_SECONDS;

/// How a relative distance is phrased once it falls below a bound.
#[derive(Debug, Clone, Copy,)]
enum Phrase
{
    Now,
    Fixed(&'static str,),
    Scaled(&'static str, i64,),
}

/// Upper bounds in seconds, checked in order; the first bound above the
/// distance picks the phrase.
const MAGNITUDES: [(i64, Phrase,); 16] = [
    (1, Phrase::Now,),
    (2, Phrase::Fixed("1 second",),),
    (60, Phrase::Scaled("seconds", 1,),),
    (2 * 60, Phrase::Fixed("1 minute",),),
    (60 * 60, Phrase::Scaled("minutes", 60,),),
    (2 * 60 * 60, Phrase::Fixed("1 hour",),),
    (DAY_SECONDS, Phrase::Scaled("hours", 60 * 60,),),
    (2 * DAY_SECONDS, Phrase::Fixed("1 day",),),
    (WEEK_SECONDS, Phrase::Scaled("days", DAY_SECONDS,),),
    (2 * WEEK_SECONDS, Phrase::Fixed("1 week",),),
    (MONTH_SECONDS, Phrase::Scaled("weeks", WEEK_SECONDS,),),
    (2 * MONTH_SECONDS, Phrase::Fixed("1 month",),),
    (YEAR_SECONDS, Phrase::Scaled("months", MONTH_SECONDS,),),
    (18 * MONTH_SECONDS, Phrase::Fixed("1 year",),),
    (2 * YEAR_SECONDS, Phrase::Fixed("2 years",),),
    (LONG_TIME_SECONDS, Phrase::Scaled("years", YEAR_SECONDS,),),
];

/// Renders `timestamp` relative to the current time.
///
/// See [`humanize_at`].
pub fn humanize(timestamp: DateTime<Utc,>,) -> String
{
    humanize_at(timestamp, Utc::now(),)
}

/// Renders `timestamp` relative to `now` at calendar-day precision.
///
/// The timestamp is first truncated to the start of its UTC day, so the text
/// only changes once per day. A day start at most 24 hours before `now`, or
/// after it, renders as `today`; older values use coarse buckets such as `3 days ago`,
/// `1 month ago` or `a long while ago`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use markscribe::humanize_at;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0,).unwrap();
/// let earlier_today = Utc.with_ymd_and_hms(2024, 6, 15, 1, 0, 0,).unwrap();
/// let last_week = Utc.with_ymd_and_hms(2024, 6, 5, 9, 0, 0,).unwrap();
///
/// assert_eq!(humanize_at(earlier_today, now,), "today");
/// assert_eq!(humanize_at(last_week, now,), "1 week ago");
/// ```
pub fn humanize_at(timestamp: DateTime<Utc,>, now: DateTime<Utc,>,) -> String
{
    let day = timestamp.date_naive().and_time(NaiveTime::MIN,).and_utc();
    let elapsed = now.signed_duration_since(day,);
    if elapsed <= Duration::days(1,) {
        return "today".to_owned();
    }

    relative(elapsed.num_seconds(),)
}

fn relative(seconds: i64,) -> String
{
    let phrase = MAGNITUDES
        .iter()
        .find(|(bound, _,)| seconds < *bound,)
        .map(|(_, phrase,)| *phrase,);

    match phrase {
        Some(Phrase::Now,) => "now".to_owned(),
        Some(Phrase::Fixed(text,),) => format!("{text} ago"),
        Some(Phrase::Scaled(unit, divisor,),) => format!("{} {unit} ago", seconds / divisor),
        None => "a long while ago".to_owned(),
    }
}

/// Reverses `items` in place and hands the same slice back.
///
/// ```
/// let mut items = vec![1, 2, 3];
/// assert_eq!(markscribe::reverse(&mut items), &[3, 2, 1]);
/// ```
pub fn reverse<T,>(items: &mut [T],) -> &mut [T]
{
    items.reverse();
    items
}
