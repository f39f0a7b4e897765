//! Event output formatting.

use chrono::NaiveDate;
use cpf_catalog::Selection;
use cpf_content::models::Event;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{count_line, empty_state, header_line, label, pad, DateDisplay};

/// JSON output structure for the events command.
#[derive(Serialize)]
pub struct EventsListOutput<'a> {
    pub events: Vec<EventOutput<'a>>,
    pub selection: &'a Selection,
    pub total: usize,
    pub empty: bool,
}

/// JSON output structure for one event row.
#[derive(Serialize)]
pub struct EventOutput<'a> {
    pub id: u32,
    pub slug: &'a str,
    pub title: &'a str,
    pub date: NaiveDate,
    pub time: &'a str,
    pub location: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub is_upcoming: bool,
    pub tags: &'a [String],
}

impl<'a> From<&'a Event> for EventOutput<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            id: event.id,
            slug: &event.slug,
            title: &event.title,
            date: event.date,
            time: &event.time,
            location: &event.location,
            kind: event.kind.as_str(),
            is_upcoming: event.is_upcoming,
            tags: &event.tags,
        }
    }
}

/// Formats filtered events as JSON.
pub fn format_events_json(
    events: &[&Event],
    selection: &Selection,
    total: usize,
) -> Result<String, serde_json::Error> {
    let output = EventsListOutput {
        events: events.iter().map(|e| EventOutput::from(*e)).collect(),
        selection,
        total,
        empty: events.is_empty(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats filtered events as a table, or the empty-state message.
pub fn format_events_table(
    events: &[&Event],
    total: usize,
    dates: &DateDisplay,
    use_colors: bool,
) -> String {
    if events.is_empty() {
        return empty_state("events");
    }

    let mut output = header_line(
        &format!(
            "{:<4} {:<13} {:<10} {:<9} {}",
            "ID", "Date", "Type", "Status", "Title"
        ),
        use_colors,
    );

    for event in events {
        let status = if event.is_upcoming { "upcoming" } else { "past" };
        let status = if use_colors && event.is_upcoming {
            pad(status, 9).green().to_string()
        } else {
            pad(status, 9)
        };
        output.push_str(&format!(
            "{:<4} {} {} {} {}\n",
            event.id,
            dates.cell(event.date, 13, use_colors),
            pad(event.kind.as_str(), 10),
            status,
            event.title
        ));
    }

    output.push_str(&count_line(events.len(), total, "events", use_colors));
    output
}

/// Formats one event as JSON.
pub fn format_event_details_json(event: &Event) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(event)
}

/// Formats one event for the detail view.
pub fn format_event_details_table(event: &Event, dates: &DateDisplay, use_colors: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", label("Event:", use_colors), event.title));
    output.push_str(&format!("ID: {} ({})\n", event.id, event.slug));
    output.push_str(&format!("Type: {}\n", event.kind.label()));
    output.push_str(&format!(
        "Date: {} ({})\n",
        event.date.format("%Y-%m-%d"),
        dates.render(event.date)
    ));
    output.push_str(&format!("Time: {}\n", event.time));
    output.push_str(&format!("Location: {}\n", event.location));
    output.push_str(&format!(
        "Status: {}\n",
        if event.is_upcoming { "upcoming" } else { "past" }
    ));

    if let Some(capacity) = event.capacity {
        let attendees = event.attendees.unwrap_or(0);
        let seats = event.seats_left().unwrap_or(0);
        output.push_str(&format!(
            "Attendance: {}/{} ({} seats left)\n",
            attendees, capacity, seats
        ));
    }

    if let Some(ref link) = event.registration_link {
        if event.is_upcoming {
            output.push_str(&format!("Registration: {}\n", link));
        }
    }

    if !event.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", event.tags.join(", ")));
    }

    if !event.organizers.is_empty() {
        output.push_str(&format!("Organizers: {}\n", event.organizers.join(", ")));
    }

    output.push_str("Description:\n");
    for line in event.description.lines() {
        output.push_str(&format!("  {}\n", line));
    }

    if !event.agenda.is_empty() {
        output.push_str("\nAgenda:\n");
        for day in 1..=event.agenda_days() {
            output.push_str(&format!("  Day {}\n", day));
            for slot in event.agenda_for_day(day) {
                output.push_str(&format!("    {:<8} {}\n", slot.time, slot.activity));
            }
        }
    }

    output
}
