use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::fmt::{self, Display};
use std::str::FromStr;

/// ISO-8601 year and week, rendered as the provider's `AAAASS` query value
/// ("202540").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearWeek {
    pub year: i32,
    pub week: u32,
}

impl YearWeek {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// `None` for weeks the ISO calendar does not contain, like week 53 of a
    /// 52-week year.
    pub fn monday(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
    }

    pub fn next(&self) -> Option<YearWeek> {
        self.monday()?
            .checked_add_days(Days::new(7))
            .map(Self::from_date)
    }

    pub fn previous(&self) -> Option<YearWeek> {
        self.monday()?
            .checked_sub_days(Days::new(7))
            .map(Self::from_date)
    }

    /// The seven dates of the week, Monday first; empty for invalid weeks.
    pub fn week_dates(&self) -> Vec<NaiveDate> {
        match self.monday() {
            Some(monday) => (0..7)
                .filter_map(|offset| monday.checked_add_days(Days::new(offset)))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Display for YearWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.week)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseYearWeekError {
    InvalidFormat,
    WeekOutOfRange,
}

impl FromStr for YearWeek {
    type Err = ParseYearWeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseYearWeekError::InvalidFormat);
        }

        let year = s[..4].parse().map_err(|_| ParseYearWeekError::InvalidFormat)?;
        let week = s[4..].parse().map_err(|_| ParseYearWeekError::InvalidFormat)?;

        if !(1..=53).contains(&week) {
            return Err(ParseYearWeekError::WeekOutOfRange);
        }

        Ok(Self { year, week })
    }
}
