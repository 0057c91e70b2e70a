use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{CalendarEvent, EventType, MonthData};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDataset {
    pub months: Vec<MonthData>,
}

/// Read-only view over the event dataset, flattened once at load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCatalog {
    months: Vec<MonthData>,
    events: Vec<CalendarEvent>,
}

impl EventCatalog {
    pub fn new(dataset: CalendarDataset) -> Self {
        let events: Vec<CalendarEvent> = dataset
            .months
            .iter()
            .flat_map(|m| m.events.iter().cloned())
            .collect();
        debug!(
            months = dataset.months.len(),
            events = events.len(),
            "loaded event catalog"
        );
        Self {
            months: dataset.months,
            events,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: CalendarDataset = serde_json::from_str(json)?;
        Ok(Self::new(dataset))
    }

    pub fn all_events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Events whose date formats exactly to `date_iso` (`YYYY-MM-DD`).
    pub fn events_for_date(&self, date_iso: &str) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.iso_date() == date_iso)
            .collect()
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.gregorian_date == date)
            .collect()
    }

    pub fn events_for_month(&self, month: u32, year: i32) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.gregorian_date.month() == month && e.gregorian_date.year() == year)
            .collect()
    }

    pub fn events_by_type(&self, event_type: EventType) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// The first `count` events on or after `today`, earliest first. Events
    /// sharing a date keep their dataset order.
    pub fn upcoming_events(&self, today: NaiveDate, count: usize) -> Vec<&CalendarEvent> {
        let mut upcoming: Vec<&CalendarEvent> = self
            .events
            .iter()
            .filter(|e| e.gregorian_date >= today)
            .collect();
        upcoming.sort_by_key(|e| e.gregorian_date);
        upcoming.truncate(count);
        upcoming
    }

    /// [`upcoming_events`](Self::upcoming_events) with "today" taken as the
    /// local calendar date of `now`.
    pub fn upcoming_events_at<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        count: usize,
    ) -> Vec<&CalendarEvent> {
        self.upcoming_events(now.date_naive(), count)
    }

    pub fn month_data(&self, month: u32, year: i32) -> Option<&MonthData> {
        self.months
            .iter()
            .find(|m| m.gregorian_month == month && m.gregorian_year == year)
    }
}

/// Whole days from `today` to the event; negative once it has passed.
pub fn days_until(event: &CalendarEvent, today: NaiveDate) -> i64 {
    (event.gregorian_date - today).num_days()
}
