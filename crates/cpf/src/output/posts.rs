//! Blog post output formatting.

use chrono::NaiveDate;
use cpf_catalog::Selection;
use cpf_content::models::Post;
use serde::Serialize;

use super::helpers::{count_line, empty_state, header_line, label, pad, DateDisplay};

/// JSON output structure for the blog command.
#[derive(Serialize)]
pub struct PostsListOutput<'a> {
    pub posts: Vec<PostOutput<'a>>,
    pub selection: &'a Selection,
    pub total: usize,
    pub empty: bool,
}

/// JSON output structure for one post row.
#[derive(Serialize)]
pub struct PostOutput<'a> {
    pub id: u32,
    pub slug: &'a str,
    pub title: &'a str,
    pub excerpt: &'a str,
    pub date: NaiveDate,
    pub author: &'a str,
    pub read_time_minutes: u32,
    pub tags: &'a [String],
}

impl<'a> From<&'a Post> for PostOutput<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: post.id,
            slug: &post.slug,
            title: &post.title,
            excerpt: &post.excerpt,
            date: post.date,
            author: &post.author,
            read_time_minutes: post.read_time_minutes,
            tags: &post.tags,
        }
    }
}

/// JSON output structure for `blog --tags`.
#[derive(Serialize)]
pub struct TagsOutput<'a> {
    pub tags: Vec<TagCount<'a>>,
}

#[derive(Serialize)]
pub struct TagCount<'a> {
    pub tag: &'a str,
    pub posts: usize,
}

/// Formats filtered posts as JSON.
pub fn format_posts_json(
    posts: &[&Post],
    selection: &Selection,
    total: usize,
) -> Result<String, serde_json::Error> {
    let output = PostsListOutput {
        posts: posts.iter().map(|p| PostOutput::from(*p)).collect(),
        selection,
        total,
        empty: posts.is_empty(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats filtered posts as a table, or the empty-state message.
pub fn format_posts_table(
    posts: &[&Post],
    total: usize,
    dates: &DateDisplay,
    use_colors: bool,
) -> String {
    if posts.is_empty() {
        return empty_state("posts");
    }

    let mut output = header_line(
        &format!(
            "{:<4} {:<13} {:<8} {:<18} {}",
            "ID", "Date", "Read", "Author", "Title"
        ),
        use_colors,
    );

    for post in posts {
        output.push_str(&format!(
            "{:<4} {} {} {} {}\n",
            post.id,
            dates.cell(post.date, 13, use_colors),
            pad(&format!("{} min", post.read_time_minutes), 8),
            pad(&post.author, 18),
            post.title
        ));
    }

    output.push_str(&count_line(posts.len(), total, "posts", use_colors));
    output
}

/// Counts posts per tag, in order of first appearance.
pub fn tag_counts<'a>(tags: &[&'a str], posts: &[Post]) -> Vec<TagCount<'a>> {
    tags.iter()
        .map(|&tag| TagCount {
            tag,
            posts: posts.iter().filter(|p| p.has_tag(tag)).count(),
        })
        .collect()
}

/// Formats the tag list as JSON.
pub fn format_tags_json(counts: Vec<TagCount<'_>>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TagsOutput { tags: counts })
}

/// Formats the tag list as a table.
pub fn format_tags_table(counts: &[TagCount<'_>], use_colors: bool) -> String {
    if counts.is_empty() {
        return "No tags found.\n".to_string();
    }

    let mut output = header_line(&format!("{:<28} {}", "Tag", "Posts"), use_colors);
    for count in counts {
        output.push_str(&format!("{} {}\n", pad(count.tag, 28), count.posts));
    }
    output
}

/// Formats one post as JSON.
pub fn format_post_details_json(post: &Post) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(post)
}

/// Formats one post for the detail view.
pub fn format_post_details_table(post: &Post, use_colors: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", label("Post:", use_colors), post.title));
    output.push_str(&format!("ID: {} ({})\n", post.id, post.slug));
    output.push_str(&format!("Author: {}\n", post.author));
    output.push_str(&format!("Date: {}\n", post.date.format("%Y-%m-%d")));
    output.push_str(&format!("Reading time: {} min\n", post.read_time_minutes));
    if !post.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", post.tags.join(", ")));
    }

    output.push('\n');
    output.push_str(&format!("{}\n", post.excerpt));

    for paragraph in post.paragraphs() {
        output.push('\n');
        output.push_str(paragraph);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::helpers::DateFormat;
    use cpf_content::Content;

    #[test]
    fn test_empty_table_shows_empty_state() {
        let dates = DateDisplay::new(DateFormat::Iso, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(
            format_posts_table(&[], 6, &dates, false),
            "No posts match the current filters.\n"
        );
    }

    #[test]
    fn test_table_columns_line_up_with_header() {
        let content = Content::bundled().unwrap();
        let mut long = content.posts[1].clone();
        long.read_time_minutes = 120;
        let posts = vec![&content.posts[0], &content.posts[1], &long];
        let dates = DateDisplay::new(DateFormat::Iso, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let output = format_posts_table(&posts, 6, &dates, false);
        let lines: Vec<&str> = output.lines().collect();
        let author_col = lines[0].find("Author").unwrap();
        assert_eq!(lines[1].find("María García"), Some(author_col));
        assert_eq!(lines[2].find("Carlos Rodríguez"), Some(author_col));
        assert_eq!(lines[3].find("Carlos Rodríguez"), Some(author_col));
        assert!(lines[2].contains(" 12 min   Carlos"));
        assert!(lines[3].contains(" 120 min  Carlos"));
    }

    #[test]
    fn test_tag_counts() {
        let content = Content::bundled().unwrap();
        let tags = content.post_tags();
        let counts = tag_counts(&tags, &content.posts);

        let tutoriales = counts.iter().find(|c| c.tag == "Tutoriales").unwrap();
        assert_eq!(tutoriales.posts, 3);
        let react = counts.iter().find(|c| c.tag == "React").unwrap();
        assert_eq!(react.posts, 1);
        assert_eq!(counts[0].tag, "Algoritmos");
    }

    #[test]
    fn test_tags_table() {
        let counts = vec![
            TagCount { tag: "React", posts: 1 },
            TagCount { tag: "Tutoriales", posts: 3 },
        ];
        let output = format_tags_table(&counts, false);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Tag"));
        assert!(lines[1].starts_with("React "));
        assert!(lines[1].ends_with(" 1"));
        assert!(lines[2].ends_with(" 3"));
    }

    #[test]
    fn test_details_start_with_title() {
        let content = Content::bundled().unwrap();
        let output = format_post_details_table(&content.posts[1], false);
        assert!(output.starts_with("Post: Desarrollando con React y TypeScript en 2024\n"));
        assert!(output.contains("Author: Carlos Rodríguez"));
        assert!(output.contains("Reading time: 12 min"));
    }
}
