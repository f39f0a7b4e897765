//! Output for the community, media kit and privacy pages.

use chrono::{Datelike, NaiveDate};
use cpf_content::models::{CommunityChannel, MediaKit, PolicySection, PrivacyPolicy};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{header_line, heading, label, pad, DateDisplay};

#[derive(Serialize)]
pub struct CommunityOutput<'a> {
    pub community: &'a [CommunityChannel],
}

/// JSON output structure for the media kit, with the attribution resolved
/// for the current year.
#[derive(Serialize)]
pub struct MediaKitOutput<'a> {
    pub media_kit: &'a MediaKit,
    pub attribution_text: String,
}

/// JSON output structure for the privacy policy or a single section of it.
#[derive(Serialize)]
pub struct PrivacyOutput<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub updated: NaiveDate,
    pub contact_email: &'a str,
    pub address: &'a str,
    pub sections: &'a [&'a PolicySection],
}

pub fn format_community_json(channels: &[CommunityChannel]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CommunityOutput {
        community: channels,
    })
}

/// Formats community channels as a table.
pub fn format_community_table(channels: &[CommunityChannel], use_colors: bool) -> String {
    if channels.is_empty() {
        return "No community channels listed.\n".to_string();
    }

    let mut output = header_line(
        &format!("{:<10} {:<32} {}", "Channel", "Description", "Link"),
        use_colors,
    );
    for channel in channels {
        output.push_str(&format!(
            "{} {} {}\n",
            pad(&channel.name, 10),
            pad(&channel.description, 32),
            channel.url
        ));
    }
    output
}

pub fn format_media_kit_json(kit: &MediaKit, today: NaiveDate) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&MediaKitOutput {
        media_kit: kit,
        attribution_text: kit.attribution_for(today.year()),
    })
}

/// Formats the media kit: logo downloads, palette, typography and usage rules.
pub fn format_media_kit_table(kit: &MediaKit, today: NaiveDate, use_colors: bool) -> String {
    let mut output = format!("{}\n", kit.summary);

    output.push_str(&format!("\n{}\n", heading("Logo", use_colors)));
    output.push_str(&format!("  {}\n", kit.logo.guidance));
    for format in &kit.logo.formats {
        output.push_str(&format!(
            "  {} {}\n",
            pad(&format.to_uppercase(), 4),
            kit.logo.download_path(format)
        ));
    }

    output.push_str(&format!("\n{}\n", heading("Colors", use_colors)));
    for color in &kit.colors {
        let swatch = match color.rgb() {
            Some((r, g, b)) if use_colors => format!("{} ", "██".truecolor(r, g, b)),
            _ => String::new(),
        };
        output.push_str(&format!("  {}{} {}\n", swatch, pad(&color.name, 12), color.hex));
    }

    output.push_str(&format!("\n{}\n", heading("Typography", use_colors)));
    for typeface in &kit.typography {
        output.push_str(&format!(
            "  {} {}\n",
            label(&pad(&typeface.role, 16), use_colors),
            typeface.family
        ));
        output.push_str(&format!("    {}\n", typeface.guidance));
    }

    output.push_str(&format!("\n{}\n", heading("Do", use_colors)));
    for rule in &kit.dos {
        output.push_str(&format!("  + {}\n", rule));
    }
    output.push_str(&format!("\n{}\n", heading("Don't", use_colors)));
    for rule in &kit.donts {
        output.push_str(&format!("  - {}\n", rule));
    }

    output.push_str(&format!(
        "\n{} {}\n",
        label("Attribution:", use_colors),
        kit.attribution_for(today.year())
    ));
    output.push_str(&format!("{} {}\n", label("Package:", use_colors), kit.package));
    output
}

pub fn format_privacy_json(
    policy: &PrivacyPolicy,
    sections: &[&PolicySection],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PrivacyOutput {
        title: &policy.title,
        summary: &policy.summary,
        updated: policy.updated,
        contact_email: &policy.contact_email,
        address: &policy.address,
        sections,
    })
}

/// Formats the privacy policy, or only the given sections of it.
pub fn format_privacy_table(
    policy: &PrivacyPolicy,
    sections: &[&PolicySection],
    dates: &DateDisplay,
    use_colors: bool,
) -> String {
    let mut output = format!("{}\n{}\n", heading(&policy.title, use_colors), policy.summary);
    output.push_str(&format!(
        "{} {}\n",
        label("Last updated:", use_colors),
        dates.render(policy.updated)
    ));

    for section in sections {
        output.push_str(&format!("\n{}\n", heading(&section.heading, use_colors)));
        if !section.body.is_empty() {
            output.push_str(&format!("  {}\n", section.body));
        }
        for item in &section.items {
            match &item.title {
                Some(title) => output.push_str(&format!(
                    "  - {} {}\n",
                    label(&format!("{}:", title), use_colors),
                    item.text
                )),
                None => output.push_str(&format!("  - {}\n", item.text)),
            }
        }
    }

    output.push_str(&format!(
        "\n{} {}\n{} {}\n",
        label("Contact:", use_colors),
        policy.contact_email,
        label("Address:", use_colors),
        policy.address
    ));
    output
}
