// Colored terminal output for vocabularies and version histories.
//
// This module handles all terminal-specific formatting: colors, tables,
// per-category breakdowns. Callers driving a scan delegate here.

use colored::Colorize;

use crate::vocabulary::model::{Version, VersionHistory, Vocabulary};

/// Display a vocabulary snapshot as a per-category breakdown.
pub fn display_vocabulary(vocabulary: &Vocabulary) {
    let title = if vocabulary.name.is_empty() {
        "=== Vocabulary ===".to_string()
    } else {
        format!("=== Vocabulary: {} ===", vocabulary.name)
    };
    println!("\n{}", title.bold());
    println!(
        "  {} distinct terms, {} total occurrences",
        vocabulary.term_count(),
        vocabulary.total_count()
    );

    for (label, table) in vocabulary.categories() {
        if table.is_empty() {
            continue;
        }
        println!("\n  {} ({}):", label.bold(), table.len());
        for (word, count) in table {
            println!("    {:<40} {:>6}", word, count.to_string().dimmed());
        }
    }
    println!();
}

/// Display a single version delta.
pub fn display_version(version: &Version) {
    println!(
        "\n{}",
        format!("=== Version: {} ===", version.name).bold()
    );

    if version.is_unchanged() {
        println!("  {}", "No vocabulary changes".dimmed());
        return;
    }

    println!(
        "  {}  {}",
        format!("+{}", version.new_term_count).green().bold(),
        format!("-{}", version.deleted_term_count).red().bold(),
    );

    display_delta_table("Added", &version.new_terms, true);
    display_delta_table("Deleted", &version.deleted_terms, false);
}

/// Display the full chronological history with a per-version summary line.
pub fn display_history(history: &VersionHistory) {
    println!(
        "\n{}",
        format!(
            "=== Version History: {} ({} versions) ===",
            history.name,
            history.versions.len()
        )
        .bold()
    );

    if history.versions.is_empty() {
        println!("  {}", "No versions recorded.".dimmed());
        return;
    }

    println!();
    println!(
        "  {:>4}  {:<32} {:>8}  {:>8}",
        "#".dimmed(),
        "Version".dimmed(),
        "Added".dimmed(),
        "Deleted".dimmed(),
    );
    println!("  {}", "-".repeat(58).dimmed());

    for (i, version) in history.versions.iter().enumerate() {
        let added = format!("+{}", version.new_term_count);
        let deleted = format!("-{}", version.deleted_term_count);
        println!(
            "  {:>4}. {:<32} {:>8}  {:>8}",
            i + 1,
            version.name,
            if version.new_term_count > 0 {
                added.green().to_string()
            } else {
                added.dimmed().to_string()
            },
            if version.deleted_term_count > 0 {
                deleted.red().to_string()
            } else {
                deleted.dimmed().to_string()
            },
        );
    }

    // Summary: total churn across the whole history. u64 per-version
    // counts keep the sums from wrapping on huge corpora.
    let total_added: u64 = history.versions.iter().map(|v| v.new_term_count).sum();
    let total_deleted: u64 = history.versions.iter().map(|v| v.deleted_term_count).sum();
    println!();
    println!(
        "  Total churn: {}",
        super::delta_summary(total_added, total_deleted).bold()
    );
}

fn display_delta_table(heading: &str, terms: &Vocabulary, added: bool) {
    if terms.is_empty() {
        return;
    }
    println!("\n  {}:", heading.bold());
    for (label, table) in terms.categories() {
        for (word, count) in table {
            let line = format!("    {label:<12} {word:<32} ({count})");
            if added {
                println!("{}", line.green());
            } else {
                println!("{}", line.red());
            }
        }
    }
}
