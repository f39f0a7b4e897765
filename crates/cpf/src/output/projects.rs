//! Project output formatting.

use cpf_catalog::Selection;
use cpf_content::models::Project;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{count_line, empty_state, format_tags, header_line, label, pad};

/// JSON output structure for the projects command.
#[derive(Serialize)]
pub struct ProjectsListOutput<'a> {
    pub projects: Vec<ProjectOutput<'a>>,
    pub selection: &'a Selection,
    pub total: usize,
    pub empty: bool,
}

/// JSON output structure for one project row.
#[derive(Serialize)]
pub struct ProjectOutput<'a> {
    pub id: u32,
    pub slug: &'a str,
    pub title: &'a str,
    pub category: &'static str,
    pub status: &'static str,
    pub featured: bool,
    pub stars: u32,
    pub tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<&'a str>,
}

impl<'a> From<&'a Project> for ProjectOutput<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            id: project.id,
            slug: &project.slug,
            title: &project.title,
            category: project.category.as_str(),
            status: project.status.as_str(),
            featured: project.featured,
            stars: project.stars,
            tags: &project.tags,
            repo_url: project.repo_url.as_deref(),
        }
    }
}

/// Formats filtered projects as JSON.
pub fn format_projects_json(
    projects: &[&Project],
    selection: &Selection,
    total: usize,
) -> Result<String, serde_json::Error> {
    let output = ProjectsListOutput {
        projects: projects.iter().map(|p| ProjectOutput::from(*p)).collect(),
        selection,
        total,
        empty: projects.is_empty(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats filtered projects as a table, or the empty-state message.
pub fn format_projects_table(projects: &[&Project], total: usize, use_colors: bool) -> String {
    if projects.is_empty() {
        return empty_state("projects");
    }

    let mut output = header_line(
        &format!(
            "{:<4} {:<7} {:<12} {:<5} {:<20} {}",
            "ID", "Cat", "Status", "Stars", "Tags", "Title"
        ),
        use_colors,
    );

    for project in projects {
        let title = if project.featured {
            let marked = format!("{} *", project.title);
            if use_colors {
                marked.yellow().to_string()
            } else {
                marked
            }
        } else {
            project.title.clone()
        };
        output.push_str(&format!(
            "{:<4} {} {} {:<5} {} {}\n",
            project.id,
            pad(project.category.as_str(), 7),
            pad(project.status.as_str(), 12),
            project.stars,
            pad(&format_tags(&project.tags, 20), 20),
            title
        ));
    }

    output.push_str(&count_line(projects.len(), total, "projects", use_colors));
    output
}

/// Formats one project as JSON.
pub fn format_project_details_json(project: &Project) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(project)
}

/// Formats one project for the detail view.
pub fn format_project_details_table(project: &Project, use_colors: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", label("Project:", use_colors), project.title));
    output.push_str(&format!("ID: {} ({})\n", project.id, project.slug));
    output.push_str(&format!("Category: {}\n", project.category.label()));
    output.push_str(&format!("Status: {}\n", project.status.label()));
    if project.featured {
        output.push_str("Featured: yes\n");
    }
    output.push_str(&format!(
        "Stats: {} stars, {} forks, {} open issues\n",
        project.stars, project.forks, project.open_issues
    ));
    if !project.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", project.tags.join(", ")));
    }
    if let Some(ref url) = project.repo_url {
        output.push_str(&format!("Repository: {}\n", url));
    }
    if let Some(ref url) = project.demo_url {
        output.push_str(&format!("Demo: {}\n", url));
    }

    output.push_str("Description:\n");
    for line in project.description.lines() {
        output.push_str(&format!("  {}\n", line));
    }

    if !project.contributors.is_empty() {
        output.push_str(&format!("\nContributors ({}):\n", project.contributors.len()));
        for contributor in &project.contributors {
            output.push_str(&format!("  {} - {}", contributor.name, contributor.role));
            if let Some(ref url) = contributor.github_url {
                output.push_str(&format!(" ({})", url));
            }
            output.push('\n');
        }
    }

    output
}
