// Rust guideline compliant 2026-10-18

//! Output formatting module for the Folio CLI.
//!
//! Projects, project lists and category documents can be rendered as
//! JSON, human-readable tables or plain text.

use crate::terminal::wrap_text;
use folio_core::{gallery_images, image_count, is_video, CategorySet, Mode, Project};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use std::io::Write;

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a single project for the detail view.
    fn format_project(&self, project: &Project) -> String;

    /// Formats the gallery list.
    fn format_list(&self, projects: &[Project]) -> String;

    /// Formats the category document.
    fn format_categories(&self, categories: &CategorySet) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn created_label(project: &Project) -> Option<String> {
    project
        .created_at
        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_project(&self, project: &Project) -> String {
        let output = json!({
            "project": project,
            "images": gallery_images(project),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize project" }).to_string())
    }

    fn format_list(&self, projects: &[Project]) -> String {
        let output = json!({
            "projects": projects,
            "total": projects.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize project list" }).to_string())
    }

    fn format_categories(&self, categories: &CategorySet) -> String {
        serde_json::to_string_pretty(categories)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize categories" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_project(&self, project: &Project) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", project.id));
        output.push_str(&format!("Title:       {}\n", project.title));
        if let Some(subtitle) = &project.subtitle {
            output.push_str(&format!("Subtitle:    {}\n", subtitle));
        }
        output.push_str(&format!("Mode:        {}\n", project.mode));
        output.push_str(&format!("Category:    {}\n", project.category));
        output.push_str(&format!("Date:        {}\n", project.date.as_deref().unwrap_or("-")));
        output.push_str(&format!("Role:        {}\n", project.role.as_deref().unwrap_or("-")));
        output.push_str(&format!("Client:      {}\n", project.client.as_deref().unwrap_or("-")));
        if let Some(created) = created_label(project) {
            output.push_str(&format!("Created:     {}\n", created));
        }

        if let Some(description) = &project.description {
            output.push_str(&format!("Description: {}\n", wrap_text(description, 13)));
        }

        let images = gallery_images(project);
        if images.is_empty() {
            output.push_str("Media:       (none)\n");
        } else {
            output.push_str("Media:\n");
            for (idx, url) in images.iter().enumerate() {
                let kind = if is_video(url) { "video" } else { "image" };
                output.push_str(&format!("  {:>2}. [{}] {}\n", idx + 1, kind, url));
            }
        }

        output
    }

    fn format_list(&self, projects: &[Project]) -> String {
        if projects.is_empty() {
            return "No projects found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Mode", "Category", "Title", "Date", "Media"]);

        for project in projects {
            builder.push_record(vec![
                project.id.clone(),
                project.mode.to_string(),
                project.category.clone(),
                project.title.clone(),
                project.date_key().to_string(),
                image_count(project).to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_categories(&self, categories: &CategorySet) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Mode", "Categories"]);
        for mode in Mode::ALL {
            builder.push_record(vec![mode.to_string(), categories.list(mode).join(", ")]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if !self.use_color {
            return format!("Error: {}", error);
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error: ");
        let _ = buffer.reset();
        let _ = write!(buffer, "{}", error);
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_project(&self, project: &Project) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", project.id));
        output.push_str(&format!("{}\n", project.title));
        output.push_str(&format!("{} / {}\n", project.mode, project.category));

        for url in gallery_images(project) {
            output.push_str(&format!("{}\n", url));
        }

        output
    }

    fn format_list(&self, projects: &[Project]) -> String {
        if projects.is_empty() {
            return "No projects found.".to_string();
        }

        let mut output = String::new();
        for project in projects {
            output.push_str(&format!(
                "{} {} {} {}\n",
                project.id,
                project.mode.list_key(),
                project.date_key(),
                project.title
            ));
        }
        output
    }

    fn format_categories(&self, categories: &CategorySet) -> String {
        let mut output = String::new();
        for mode in Mode::ALL {
            output.push_str(&format!(
                "{}: {}\n",
                mode.list_key(),
                categories.list(mode).join(", ")
            ));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
