//! Common helper functions for output formatting.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Events closer than this many days are shown relative to today.
const RELATIVE_WINDOW_DAYS: i64 = 30;

/// Date rendering style for tables (`output.date_format`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// "Today", "in 3 days", "12 days ago", falling back to a full date.
    #[default]
    Relative,
    /// `2024-03-15`
    Iso,
    /// `15/03/2024`
    Short,
}

impl DateFormat {
    pub const VALID: [&'static str; 3] = ["relative", "iso", "short"];

    pub fn as_str(self) -> &'static str {
        match self {
            DateFormat::Relative => "relative",
            DateFormat::Iso => "iso",
            DateFormat::Short => "short",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relative" => Ok(DateFormat::Relative),
            "iso" => Ok(DateFormat::Iso),
            "short" => Ok(DateFormat::Short),
            _ => Err(format!(
                "invalid date format '{}'. Valid values: {}",
                s,
                Self::VALID.join(", ")
            )),
        }
    }
}

/// A date format bound to a reference "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateDisplay {
    format: DateFormat,
    today: NaiveDate,
}

impl DateDisplay {
    pub fn new(format: DateFormat, today: NaiveDate) -> Self {
        Self { format, today }
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Renders `date` as plain text.
    pub fn render(&self, date: NaiveDate) -> String {
        match self.format {
            DateFormat::Iso => date.format("%Y-%m-%d").to_string(),
            DateFormat::Short => date.format("%d/%m/%Y").to_string(),
            DateFormat::Relative => {
                let days = (date - self.today).num_days();
                match days {
                    0 => "Today".to_string(),
                    1 => "Tomorrow".to_string(),
                    -1 => "Yesterday".to_string(),
                    2..=RELATIVE_WINDOW_DAYS => format!("in {} days", days),
                    d if (-RELATIVE_WINDOW_DAYS..=-2).contains(&d) => {
                        format!("{} days ago", -d)
                    }
                    _ => date.format("%b %d, %Y").to_string(),
                }
            }
        }
    }

    /// Renders `date` padded to `width`, dimming past dates when colored.
    pub fn cell(&self, date: NaiveDate, width: usize, use_colors: bool) -> String {
        let text = pad(&self.render(date), width);
        if use_colors && date < self.today {
            text.dimmed().to_string()
        } else {
            text
        }
    }
}

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}

/// Left-aligns `s` in a column of `width` characters, truncating if needed.
pub fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate_str(s, width), width = width)
}

/// Formats tags for display.
pub fn format_tags(tags: &[String], max_len: usize) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let formatted: Vec<String> = tags.iter().map(|t| format!("#{t}")).collect();
    truncate_str(&formatted.join(" "), max_len)
}

/// Renders a table header line.
pub fn header_line(header: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", header.dimmed())
    } else {
        format!("{}\n", header)
    }
}

/// Renders a bold label such as `"Event:"`.
pub fn label(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Renders a section heading such as a team group name.
pub fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.green().bold().to_string()
    } else {
        text.to_string()
    }
}

/// The message shown when a filtered listing has nothing to show.
pub fn empty_state(plural: &str) -> String {
    format!("No {} match the current filters.\n", plural)
}

/// Summary line below a filtered table, e.g. `"2 of 6 events"`.
pub fn count_line(shown: usize, total: usize, plural: &str, use_colors: bool) -> String {
    let line = format!("{} of {} {}", shown, total, plural);
    if use_colors {
        format!("\n{}\n", line.dimmed())
    } else {
        format!("\n{}\n", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("this is long", 10), "this is...");
    }

    #[test]
    fn test_truncate_str_counts_characters() {
        // Multi-byte characters must not be split.
        assert_eq!(truncate_str("Introducción", 12), "Introducción");
        assert_eq!(truncate_str("Introducción a Python", 10), "Introdu...");
        assert_eq!(truncate_str("ñandutí", 5), "ña...");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("web", 6), "web   ");
        assert_eq!(pad("Gestión", 8), "Gestión ");
        assert_eq!(pad("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_format_tags() {
        assert_eq!(format_tags(&[], 15), "");
        assert_eq!(format_tags(&["React".to_string()], 15), "#React");
        assert_eq!(
            format_tags(&["a".to_string(), "b".to_string()], 15),
            "#a #b"
        );
    }

    #[test]
    fn test_date_format_parse() {
        assert_eq!("iso".parse::<DateFormat>(), Ok(DateFormat::Iso));
        assert_eq!("short".parse::<DateFormat>(), Ok(DateFormat::Short));
        assert_eq!("relative".parse::<DateFormat>(), Ok(DateFormat::Relative));
        assert!("ISO".parse::<DateFormat>().is_err());
    }

    #[test]
    fn test_render_fixed_formats() {
        let today = day(2024, 6, 1);
        let date = day(2024, 3, 15);
        assert_eq!(DateDisplay::new(DateFormat::Iso, today).render(date), "2024-03-15");
        assert_eq!(DateDisplay::new(DateFormat::Short, today).render(date), "15/03/2024");
    }

    #[test]
    fn test_render_relative() {
        let dates = DateDisplay::new(DateFormat::Relative, day(2024, 6, 1));
        assert_eq!(dates.render(day(2024, 6, 1)), "Today");
        assert_eq!(dates.render(day(2024, 6, 2)), "Tomorrow");
        assert_eq!(dates.render(day(2024, 5, 31)), "Yesterday");
        assert_eq!(dates.render(day(2024, 6, 11)), "in 10 days");
        assert_eq!(dates.render(day(2024, 5, 20)), "12 days ago");
        assert_eq!(dates.render(day(2024, 3, 15)), "Mar 15, 2024");
        assert_eq!(dates.render(day(2024, 9, 1)), "Sep 01, 2024");
    }

    #[test]
    fn test_cell_without_colors_is_padded() {
        let dates = DateDisplay::new(DateFormat::Iso, day(2024, 6, 1));
        assert_eq!(dates.cell(day(2024, 3, 15), 12, false), "2024-03-15  ");
    }

    #[test]
    fn test_empty_state_and_count() {
        assert_eq!(empty_state("events"), "No events match the current filters.\n");
        assert_eq!(count_line(2, 6, "events", false), "\n2 of 6 events\n");
    }
}
