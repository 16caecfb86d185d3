// Markdown report generation for drift analysis.
//
// Produces a report file a maintainer can drop into a PR or changelog:
// one section per version with added/deleted terms broken out by
// category. Terminal display is for interactive use; this is the
// shareable artifact.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::vocabulary::model::{Version, VersionHistory, Vocabulary};

/// Render a version history to markdown and write it to `path`.
/// Returns the path written, for display. Parent directories are created
/// as needed.
pub fn generate_report(history: &VersionHistory, path: &str) -> Result<String> {
    let report = render_history(history);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
        }
    }
    fs::write(path, report).with_context(|| format!("Failed to write report to {path}"))?;

    Ok(path.to_string())
}

/// Render a version history as a markdown document.
pub fn render_history(history: &VersionHistory) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Vocabulary drift: {}\n\n", history.name));

    if history.versions.is_empty() {
        out.push_str("No versions recorded.\n");
        return out;
    }

    let total_added: u64 = history.versions.iter().map(|v| v.new_term_count).sum();
    let total_deleted: u64 = history.versions.iter().map(|v| v.deleted_term_count).sum();
    out.push_str(&format!(
        "{} versions, total churn {}.\n\n",
        history.versions.len(),
        super::delta_summary(total_added, total_deleted)
    ));

    out.push_str("| # | Version | Added | Deleted |\n");
    out.push_str("|---|---------|-------|--------|\n");
    for (i, version) in history.versions.iter().enumerate() {
        out.push_str(&format!(
            "| {} | {} | +{} | -{} |\n",
            i + 1,
            version.name,
            version.new_term_count,
            version.deleted_term_count
        ));
    }
    out.push('\n');

    for version in &history.versions {
        out.push_str(&render_version(version));
    }

    out
}

fn render_version(version: &Version) -> String {
    let mut out = String::new();
    out.push_str(&format!("## {}\n\n", version.name));

    if version.is_unchanged() {
        out.push_str("No vocabulary changes.\n\n");
        return out;
    }

    render_delta_table(&mut out, "Added", &version.new_terms);
    render_delta_table(&mut out, "Deleted", &version.deleted_terms);
    out
}

fn render_delta_table(out: &mut String, heading: &str, terms: &Vocabulary) {
    if terms.is_empty() {
        return;
    }
    out.push_str(&format!("### {heading}\n\n"));
    for (label, table) in terms.categories() {
        if table.is_empty() {
            continue;
        }
        out.push_str(&format!("**{label}**\n\n"));
        for (word, count) in table {
            out.push_str(&format!("- `{word}` ({count})\n"));
        }
        out.push('\n');
    }
}
