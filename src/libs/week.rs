//! Business week calendar arithmetic.
//!
//! A business week runs from Monday 00:00:00 through Sunday 23:59:59 in
//! local time. All Todoist task aggregation and Claude summarization is
//! keyed by these windows.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// A Monday-to-Sunday week window in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusinessWeek {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BusinessWeek {
    /// Returns the business week containing the given date.
    ///
    /// The week starts on Monday at 00:00:00 and ends on the following
    /// Sunday at 23:59:59.
    pub fn for_date(date: NaiveDate) -> Self {
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        let sunday = monday + Duration::days(6);

        Self {
            start: monday.and_time(NaiveTime::MIN),
            end: sunday.and_hms_opt(23, 59, 59).unwrap(),
        }
    }

    /// Returns the business week containing today.
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Returns the current business week clamped to now.
    ///
    /// The window never extends into the future, so completed-task queries
    /// for the running week stop at the current moment.
    pub fn current_to_date() -> Self {
        let now = Local::now().naive_local();
        let mut week = Self::for_date(now.date());
        if now < week.end {
            week.end = now;
        }
        week
    }

    /// Returns the business week prior to the one containing the given date.
    pub fn previous(date: NaiveDate) -> Self {
        Self::for_date(date - Duration::days(7))
    }

    /// Returns the n most recent completed business weeks.
    ///
    /// The current week is excluded. Weeks come back in chronological order
    /// (oldest first), each exactly seven days after its predecessor.
    pub fn weeks_back(n: usize) -> Vec<Self> {
        let today = Local::now().date_naive();
        (1..=n).rev().map(|back| Self::for_date(today - Duration::days(7 * back as i64))).collect()
    }

    /// Checks whether a timestamp falls within this week, bounds inclusive.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Returns the Monday date of this business week.
    pub fn week_of(&self) -> NaiveDate {
        self.start.date()
    }
}

impl fmt::Display for BusinessWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start.format("%b %-d"), self.end.format("%b %-d, %Y"))
    }
}
