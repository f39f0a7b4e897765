//! Static club pages: team, instructors, history, news, community, media kit
//! and privacy policy.

use cpf_catalog::{find_similar_name, Catalog, LookupError};
use cpf_content::models::{PolicySection, PrivacyPolicy, TeamGroup, TeamMember};

use super::{CommandContext, Result};
use crate::output::{
    format_community_json, format_community_table, format_instructors_json,
    format_instructors_table, format_media_kit_json, format_media_kit_table, format_news_json,
    format_news_table, format_privacy_json, format_privacy_table, format_team_json,
    format_team_table, format_timeline_json, format_timeline_table, InstructorOutput,
};

/// Executes the team command, optionally limited to one group.
pub async fn execute_team(
    ctx: &CommandContext,
    group: Option<TeamGroup>,
    catalog: &Catalog,
) -> Result<()> {
    let members = team_members(catalog, group);

    if ctx.json_output {
        println!("{}", format_team_json(&members)?);
    } else if !ctx.quiet {
        print!("{}", format_team_table(&members, ctx.use_colors));
    }
    Ok(())
}

fn team_members(catalog: &Catalog, group: Option<TeamGroup>) -> Vec<&TeamMember> {
    match group {
        Some(group) => catalog.team_group(group).collect(),
        None => catalog.team().iter().collect(),
    }
}

/// Executes the instructors command, listing each instructor's courses.
pub async fn execute_instructors(ctx: &CommandContext, catalog: &Catalog) -> Result<()> {
    let entries = instructor_entries(catalog);

    if ctx.json_output {
        println!("{}", format_instructors_json(entries)?);
    } else if !ctx.quiet {
        print!("{}", format_instructors_table(&entries, ctx.use_colors));
    }
    Ok(())
}

fn instructor_entries(catalog: &Catalog) -> Vec<InstructorOutput<'_>> {
    catalog
        .instructors()
        .iter()
        .map(|instructor| InstructorOutput {
            instructor,
            courses: catalog
                .courses_by_instructor(&instructor.name)
                .map(|c| c.title.as_str())
                .collect(),
        })
        .collect()
}

/// Executes the timeline command.
pub async fn execute_timeline(ctx: &CommandContext, catalog: &Catalog) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_timeline_json(catalog.timeline())?);
    } else if !ctx.quiet {
        print!("{}", format_timeline_table(catalog.timeline(), ctx.use_colors));
    }
    Ok(())
}

/// Executes the news command.
pub async fn execute_news(ctx: &CommandContext, catalog: &Catalog) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_news_json(catalog.news())?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_news_table(catalog.news(), &ctx.dates, ctx.use_colors)
        );
    }
    Ok(())
}

/// Executes the community command.
pub async fn execute_community(ctx: &CommandContext, catalog: &Catalog) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_community_json(catalog.community())?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_community_table(catalog.community(), ctx.use_colors)
        );
    }
    Ok(())
}

/// Executes the media-kit command. The attribution year follows the
/// configured "today".
pub async fn execute_media_kit(ctx: &CommandContext, catalog: &Catalog) -> Result<()> {
    let today = ctx.dates.today();
    if ctx.json_output {
        println!("{}", format_media_kit_json(catalog.media_kit(), today)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_media_kit_table(catalog.media_kit(), today, ctx.use_colors)
        );
    }
    Ok(())
}

/// Executes the privacy command, optionally narrowed to one section.
///
/// # Errors
///
/// Returns a lookup error when no section heading contains `section`.
pub async fn execute_privacy(
    ctx: &CommandContext,
    section: Option<&str>,
    catalog: &Catalog,
) -> Result<()> {
    let policy = catalog.privacy();
    let sections = policy_sections(policy, section)?;

    if ctx.json_output {
        println!("{}", format_privacy_json(policy, &sections)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_privacy_table(policy, &sections, &ctx.dates, ctx.use_colors)
        );
    }
    Ok(())
}

fn policy_sections<'a>(
    policy: &'a PrivacyPolicy,
    term: Option<&str>,
) -> std::result::Result<Vec<&'a PolicySection>, LookupError> {
    let Some(term) = term else {
        return Ok(policy.sections.iter().collect());
    };
    policy
        .find_section(term)
        .map(|s| vec![s])
        .ok_or_else(|| LookupError::NotFound {
            resource_type: "privacy section",
            identifier: term.to_string(),
            suggestion: find_similar_name(
                term,
                policy.sections.iter().map(|s| s.heading.as_str()),
            ),
        })
}
