//! Course output formatting.

use cpf_catalog::Selection;
use cpf_content::models::{Course, Instructor};
use serde::Serialize;

use super::helpers::{count_line, empty_state, header_line, label, pad};

/// JSON output structure for the courses command.
#[derive(Serialize)]
pub struct CoursesListOutput<'a> {
    pub courses: Vec<CourseOutput<'a>>,
    pub selection: &'a Selection,
    pub total: usize,
    pub empty: bool,
}

/// JSON output structure for one course row.
#[derive(Serialize)]
pub struct CourseOutput<'a> {
    pub id: u32,
    pub slug: &'a str,
    pub title: &'a str,
    pub level: &'static str,
    pub duration: &'a str,
    pub instructor: &'a str,
    pub tags: &'a [String],
}

impl<'a> From<&'a Course> for CourseOutput<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            id: course.id,
            slug: &course.slug,
            title: &course.title,
            level: course.level.as_str(),
            duration: &course.duration,
            instructor: &course.instructor,
            tags: &course.tags,
        }
    }
}

/// JSON output structure for course details, with the instructor profile
/// when one is on record.
#[derive(Serialize)]
pub struct CourseDetailsOutput<'a> {
    #[serde(flatten)]
    pub course: &'a Course,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_profile: Option<&'a Instructor>,
}

/// Formats filtered courses as JSON.
pub fn format_courses_json(
    courses: &[&Course],
    selection: &Selection,
    total: usize,
) -> Result<String, serde_json::Error> {
    let output = CoursesListOutput {
        courses: courses.iter().map(|c| CourseOutput::from(*c)).collect(),
        selection,
        total,
        empty: courses.is_empty(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats filtered courses as a table, or the empty-state message.
pub fn format_courses_table(courses: &[&Course], total: usize, use_colors: bool) -> String {
    if courses.is_empty() {
        return empty_state("courses");
    }

    let mut output = header_line(
        &format!(
            "{:<4} {:<12} {:<10} {:<22} {}",
            "ID", "Level", "Duration", "Instructor", "Title"
        ),
        use_colors,
    );

    for course in courses {
        output.push_str(&format!(
            "{:<4} {} {} {} {}\n",
            course.id,
            pad(course.level.as_str(), 12),
            pad(&course.duration, 10),
            pad(&course.instructor, 22),
            course.title
        ));
    }

    output.push_str(&count_line(courses.len(), total, "courses", use_colors));
    output
}

/// Formats one course as JSON.
pub fn format_course_details_json(
    course: &Course,
    instructor: Option<&Instructor>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CourseDetailsOutput {
        course,
        instructor_profile: instructor,
    })
}

/// Formats one course for the detail view.
pub fn format_course_details_table(
    course: &Course,
    instructor: Option<&Instructor>,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", label("Course:", use_colors), course.title));
    output.push_str(&format!("ID: {} ({})\n", course.id, course.slug));
    output.push_str(&format!("Level: {}\n", course.level.label()));
    output.push_str(&format!("Duration: {}\n", course.duration));
    output.push_str(&format!("Instructor: {}", course.instructor));
    if let Some(instructor) = instructor {
        output.push_str(&format!(" ({})", instructor.experience));
    }
    output.push('\n');
    if let Some(ref schedule) = course.schedule {
        output.push_str(&format!("Schedule: {}\n", schedule));
    }
    if let Some(ref location) = course.location {
        output.push_str(&format!("Location: {}\n", location));
    }
    if let Some(ref price) = course.price {
        output.push_str(&format!("Price: {}\n", price));
    }
    if !course.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", course.tags.join(", ")));
    }

    output.push_str("Description:\n");
    for line in course.description.lines() {
        output.push_str(&format!("  {}\n", line));
    }

    if !course.prerequisites.is_empty() {
        output.push_str("\nPrerequisites:\n");
        for prerequisite in &course.prerequisites {
            output.push_str(&format!("  - {}\n", prerequisite));
        }
    }

    if !course.syllabus.is_empty() {
        output.push_str(&format!(
            "\nSyllabus ({} weeks, {} topics):\n",
            course.syllabus.len(),
            course.topic_count()
        ));
        for (i, week) in course.syllabus.iter().enumerate() {
            output.push_str(&format!("  Week {}: {}\n", i + 1, week.title));
            for topic in &week.topics {
                output.push_str(&format!("    - {}\n", topic));
            }
        }
    }

    output
}
