// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for search results and the `inspect` report.
//!
//! Colors are plain 16-color ANSI codes, used only when stdout is a TTY and
//! `NO_COLOR` is unset, so `bibrank search ... | grep` sees plain text.

use std::fmt::Display;

use bibrank::SearchHit;

/// Printed when a query has no hits.
pub const NO_RESULTS: &str = "Sorry. We have no results for your query. Please try again.";

/// Width of the label column in `inspect` output.
const LABEL_WIDTH: usize = 20;

/// Text roles the CLI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Heading,
    Label,
    Prompt,
    /// Scores at or above 0.5.
    Strong,
    /// Scores at or above 0.2.
    Good,
    /// Scores at or above 0.05.
    Fair,
    Faint,
}

impl Style {
    /// SGR parameters for this role.
    fn sgr(self) -> &'static str {
        match self {
            Style::Heading => "1;36",
            Style::Label => "2",
            Style::Prompt => "1;96",
            Style::Strong => "1;92",
            Style::Good => "32",
            Style::Fair => "33",
            Style::Faint => "90",
        }
    }

    fn for_score(score: f64) -> Style {
        if score >= 0.5 {
            Style::Strong
        } else if score >= 0.2 {
            Style::Good
        } else if score >= 0.05 {
            Style::Fair
        } else {
            Style::Faint
        }
    }
}

/// Whether stdout should get escape codes.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint_if(color: bool, style: Style, text: &str) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", style.sgr(), text)
    } else {
        text.to_string()
    }
}

pub fn paint(style: Style, text: &str) -> String {
    paint_if(use_colors(), style, text)
}

/// Cut to `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ============================================================================
// INSPECT REPORT
// ============================================================================

/// Start a report section.
pub fn heading(title: &str) {
    println!();
    println!("{}", paint(Style::Heading, title));
}

/// One aligned `label value` line under the current heading.
pub fn field(label: &str, value: impl Display) {
    let label = format!("{:<width$}", truncate(label, LABEL_WIDTH), width = LABEL_WIDTH);
    println!("  {} {}", paint(Style::Label, &label), value);
}

// ============================================================================
// SEARCH RESULTS
// ============================================================================

fn render_hit(hit: &SearchHit<'_>, color: bool) -> String {
    format!(
        "{} {} {}",
        hit.record,
        paint_if(color, Style::Label, "Similarity Score:"),
        paint_if(color, Style::for_score(hit.score), &format!("{:.4}", hit.score))
    )
}

/// One hit: `<display form> Similarity Score: 0.1234`
pub fn hit_line(hit: &SearchHit<'_>) -> String {
    render_hit(hit, use_colors())
}

/// Print a query and its hits, or the no-results message.
pub fn print_results(query: &str, hits: &[SearchHit<'_>]) {
    println!();
    println!("{} {}", paint(Style::Prompt, "Query:"), query);

    if hits.is_empty() {
        println!("{}", NO_RESULTS);
        return;
    }

    for hit in hits {
        println!();
        println!("{}", hit_line(hit));
    }
}
