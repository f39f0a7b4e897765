//! Output for the static club pages: team, instructors, history and news.

use cpf_content::models::{Instructor, NewsItem, TeamGroup, TeamMember, TimelineEntry};
use serde::Serialize;

use super::helpers::{header_line, heading, pad, truncate_str, DateDisplay};

/// JSON output structure for the team command.
#[derive(Serialize)]
pub struct TeamOutput<'a> {
    pub team: Vec<&'a TeamMember>,
}

/// JSON output structure for one instructor with the courses they teach.
#[derive(Serialize)]
pub struct InstructorOutput<'a> {
    #[serde(flatten)]
    pub instructor: &'a Instructor,
    pub courses: Vec<&'a str>,
}

#[derive(Serialize)]
pub struct InstructorsOutput<'a> {
    pub instructors: Vec<InstructorOutput<'a>>,
}

#[derive(Serialize)]
pub struct TimelineOutput<'a> {
    pub timeline: &'a [TimelineEntry],
}

#[derive(Serialize)]
pub struct NewsOutput<'a> {
    pub news: &'a [NewsItem],
}

pub fn format_team_json(members: &[&TeamMember]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TeamOutput {
        team: members.to_vec(),
    })
}

/// Formats team members grouped under their group heading.
pub fn format_team_table(members: &[&TeamMember], use_colors: bool) -> String {
    if members.is_empty() {
        return "No team members found.\n".to_string();
    }

    let mut output = String::new();
    for group in [TeamGroup::Board, TeamGroup::Secretariat] {
        let in_group: Vec<&&TeamMember> = members.iter().filter(|m| m.group == group).collect();
        if in_group.is_empty() {
            continue;
        }
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", heading(group.label(), use_colors)));
        for member in in_group {
            if member.name == member.role {
                output.push_str(&format!("  {}\n", member.name));
            } else {
                output.push_str(&format!("  {} {}\n", pad(&member.name, 20), member.role));
            }
            let links: Vec<String> = member
                .social
                .iter()
                .map(|(kind, url)| format!("{}: {}", kind, url))
                .collect();
            if !links.is_empty() {
                output.push_str(&format!("    {}\n", links.join("  ")));
            }
        }
    }
    output
}

pub fn format_instructors_json(
    instructors: Vec<InstructorOutput<'_>>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&InstructorsOutput { instructors })
}

/// Formats instructors with experience, expertise and courses.
pub fn format_instructors_table(instructors: &[InstructorOutput<'_>], use_colors: bool) -> String {
    if instructors.is_empty() {
        return "No instructors found.\n".to_string();
    }

    let mut output = String::new();
    for (i, entry) in instructors.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let instructor = entry.instructor;
        output.push_str(&format!(
            "{} ({})\n",
            heading(&instructor.name, use_colors),
            instructor.experience
        ));
        if !instructor.expertise.is_empty() {
            output.push_str(&format!("  Expertise: {}\n", instructor.expertise.join(", ")));
        }
        if !entry.courses.is_empty() {
            output.push_str(&format!("  Courses: {}\n", entry.courses.join(", ")));
        }
    }
    output
}

pub fn format_timeline_json(entries: &[TimelineEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TimelineOutput { timeline: entries })
}

/// Formats the club history, one milestone per year.
pub fn format_timeline_table(entries: &[TimelineEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No history entries found.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}\n",
            heading(&entry.year.to_string(), use_colors),
            entry.title
        ));
        output.push_str(&format!("      {}\n", entry.description));
    }
    output
}

pub fn format_news_json(items: &[NewsItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&NewsOutput { news: items })
}

/// Formats news headlines as a table.
pub fn format_news_table(items: &[NewsItem], dates: &DateDisplay, use_colors: bool) -> String {
    if items.is_empty() {
        return "No news found.\n".to_string();
    }

    let mut output = header_line(
        &format!("{:<4} {:<13} {:<10} {}", "ID", "Date", "Category", "Title"),
        use_colors,
    );
    for item in items {
        output.push_str(&format!(
            "{:<4} {} {} {}\n",
            item.id,
            dates.cell(item.date, 13, use_colors),
            pad(&item.category, 10),
            truncate_str(&item.title, 60)
        ));
    }
    output
}
