//! How the upcoming flag of an event is decided.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use cpf_content::models::Event;
use serde::{Deserialize, Serialize};

/// Source of truth for [`Event::is_upcoming`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpcomingPolicy {
    /// Keep the curated flag from the dataset.
    #[default]
    Stored,
    /// Recompute the flag as `date >= today`.
    #[serde(rename = "date")]
    FromDate,
}

impl UpcomingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            UpcomingPolicy::Stored => "stored",
            UpcomingPolicy::FromDate => "date",
        }
    }

    /// Applies the policy to `events`, returning how many flags changed.
    pub fn apply(self, events: &mut [Event], today: NaiveDate) -> usize {
        match self {
            UpcomingPolicy::Stored => 0,
            UpcomingPolicy::FromDate => {
                let mut changed = 0;
                for event in events.iter_mut() {
                    let upcoming = event.is_on_or_after(today);
                    if event.is_upcoming != upcoming {
                        event.is_upcoming = upcoming;
                        changed += 1;
                    }
                }
                changed
            }
        }
    }
}

impl fmt::Display for UpcomingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpcomingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stored" => Ok(UpcomingPolicy::Stored),
            "date" | "from-date" => Ok(UpcomingPolicy::FromDate),
            _ => Err(format!(
                "invalid upcoming policy '{}': expected 'stored' or 'date'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpf_content::Content;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stored_policy_keeps_flags() {
        let mut events = Content::bundled().unwrap().events;
        let before: Vec<_> = events.iter().map(|e| e.is_upcoming).collect();
        let changed = UpcomingPolicy::Stored.apply(&mut events, day(2030, 1, 1));
        assert_eq!(changed, 0);
        let after: Vec<_> = events.iter().map(|e| e.is_upcoming).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_date_policy_recomputes_flags() {
        let mut events = Content::bundled().unwrap().events;
        // Bundled events run from 2024-04-10 to 2024-07-15.
        UpcomingPolicy::FromDate.apply(&mut events, day(2024, 6, 10));
        let upcoming: Vec<_> = events
            .iter()
            .filter(|e| e.is_upcoming)
            .map(|e| e.id)
            .collect();
        assert_eq!(upcoming, vec![1, 2, 3]);

        UpcomingPolicy::FromDate.apply(&mut events, day(2030, 1, 1));
        assert!(events.iter().all(|e| !e.is_upcoming));
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("stored".parse(), Ok(UpcomingPolicy::Stored));
        assert_eq!("DATE".parse(), Ok(UpcomingPolicy::FromDate));
        assert!("never".parse::<UpcomingPolicy>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&UpcomingPolicy::FromDate).unwrap();
        assert_eq!(json, r#""date""#);
        let policy: UpcomingPolicy = serde_json::from_str(r#""stored""#).unwrap();
        assert_eq!(policy, UpcomingPolicy::Stored);
    }
}
