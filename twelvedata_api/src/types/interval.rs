//! Sampling intervals and the datetime formats the API uses for each of them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crate::Error;

/// Sampling granularity of a requested series.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interval {
    OneHour,
    FourHour,
    OneDay,
    OneWeek,
    OneMonth,
}

impl Interval {
    /// Every interval accepted by the public surface.
    pub const ALL: [Interval; 5] = [
        Interval::OneHour,
        Interval::FourHour,
        Interval::OneDay,
        Interval::OneWeek,
        Interval::OneMonth,
    ];

    /// The value sent as the `interval` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneHour => "1h",
            Interval::FourHour => "4h",
            Interval::OneDay => "1day",
            Interval::OneWeek => "1week",
            Interval::OneMonth => "1month",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| Error::UnknownInterval(s.to_string()))
    }
}

/// Datetime layout of a value's `datetime` field and of date-range parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `2023-08-24 11:09:00`, used by intraday intervals.
    DateTime,
    /// `2023-08-24`, used by daily and coarser intervals.
    Date,
}

impl TimeFormat {
    /// The chrono format pattern for this layout.
    pub fn pattern(&self) -> &'static str {
        match self {
            TimeFormat::DateTime => "%Y-%m-%d %H:%M:%S",
            TimeFormat::Date => "%Y-%m-%d",
        }
    }

    /// Guesses the layout of a datetime string of unknown origin.
    ///
    /// A string without a `:` has no time-of-day component and is read as a
    /// plain date; anything else is read as date plus time. This cannot tell
    /// apart intervals that share a layout, which parsing does not need.
    pub fn infer(raw: &str) -> TimeFormat {
        if raw.contains(':') {
            TimeFormat::DateTime
        } else {
            TimeFormat::Date
        }
    }

    /// Parses `raw` with this layout. Plain dates land on midnight.
    pub fn parse(&self, raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        match self {
            TimeFormat::DateTime => NaiveDateTime::parse_from_str(raw, self.pattern()),
            TimeFormat::Date => {
                NaiveDate::parse_from_str(raw, self.pattern()).map(|d| d.and_time(NaiveTime::MIN))
            }
        }
    }

    /// Formats `datetime` with this layout.
    pub fn render(&self, datetime: &NaiveDateTime) -> String {
        datetime.format(self.pattern()).to_string()
    }
}

/// Immutable table mapping each [`Interval`] to its [`TimeFormat`].
#[derive(Clone, Debug)]
pub struct TimeFormats {
    formats: HashMap<Interval, TimeFormat>,
}

impl TimeFormats {
    /// Builds a table from explicit entries. Intervals left out fail at lookup.
    pub fn new(entries: impl IntoIterator<Item = (Interval, TimeFormat)>) -> Self {
        Self {
            formats: entries.into_iter().collect(),
        }
    }

    /// The table matching the API's documented formats, built once per process.
    pub fn standard() -> &'static TimeFormats {
        static STANDARD: OnceLock<TimeFormats> = OnceLock::new();
        STANDARD.get_or_init(|| {
            TimeFormats::new([
                (Interval::OneHour, TimeFormat::DateTime),
                (Interval::FourHour, TimeFormat::DateTime),
                (Interval::OneDay, TimeFormat::Date),
                (Interval::OneWeek, TimeFormat::Date),
                (Interval::OneMonth, TimeFormat::Date),
            ])
        })
    }

    /// Returns the format registered for `interval`.
    pub fn format_for(&self, interval: Interval) -> Result<TimeFormat, Error> {
        self.formats
            .get(&interval)
            .copied()
            .ok_or(Error::UnmappedInterval(interval))
    }
}

impl Default for TimeFormats {
    fn default() -> Self {
        TimeFormats::standard().clone()
    }
}
