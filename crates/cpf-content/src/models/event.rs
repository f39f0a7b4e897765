//! Event model.
//!
//! Events are the primary listing on the site: hackathons, workshops, talks
//! and coding challenges, each carrying a curated upcoming flag.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A club event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier within the events listing.
    pub id: u32,

    pub title: String,

    /// URL-safe key used by the detail view.
    pub slug: String,

    pub date: NaiveDate,

    /// Free-form time range, e.g. "09:00 - 20:00".
    pub time: String,

    pub location: String,

    pub description: String,

    /// The event category.
    #[serde(rename = "type")]
    pub kind: EventKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,

    /// Curated upcoming/past flag.
    #[serde(default)]
    pub is_upcoming: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organizers: Vec<String>,

    /// Registered attendees so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<u32>,

    /// Maximum number of attendees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agenda: Vec<AgendaSlot>,
}

/// One entry in an event's agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaSlot {
    /// Day of the event, starting at 1.
    pub day: u8,
    pub time: String,
    pub activity: String,
}

/// Category of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Hackathon,
    Workshop,
    Meetup,
    Challenge,
}

impl EventKind {
    /// All kinds, in display order.
    pub const ALL: [EventKind; 4] = [
        EventKind::Hackathon,
        EventKind::Workshop,
        EventKind::Meetup,
        EventKind::Challenge,
    ];

    /// Returns the wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Hackathon => "hackathon",
            EventKind::Workshop => "workshop",
            EventKind::Meetup => "meetup",
            EventKind::Challenge => "challenge",
        }
    }

    /// Returns the label shown on event cards.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Hackathon => "Hackathon",
            EventKind::Workshop => "Workshop",
            EventKind::Meetup => "Charla",
            EventKind::Challenge => "Desafío",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown event type: {}", s))
    }
}

impl Event {
    /// Returns true if the event happens on or after `today`.
    pub fn is_on_or_after(&self, today: NaiveDate) -> bool {
        self.date >= today
    }

    /// Remaining seats, if a capacity is known.
    pub fn seats_left(&self) -> Option<u32> {
        let capacity = self.capacity?;
        Some(capacity.saturating_sub(self.attendees.unwrap_or(0)))
    }

    /// Agenda slots for a single day, in order.
    pub fn agenda_for_day(&self, day: u8) -> impl Iterator<Item = &AgendaSlot> {
        self.agenda.iter().filter(move |slot| slot.day == day)
    }

    /// Number of distinct days covered by the agenda.
    pub fn agenda_days(&self) -> u8 {
        self.agenda.iter().map(|slot| slot.day).max().unwrap_or(0)
    }
}
