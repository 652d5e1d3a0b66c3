//! Plain-text rendering of retrieval results. Answers and sources are
//! printed verbatim.

use std::fmt::Write;

use atlas_core::constants::{NO_MATCH_MESSAGE, NO_SOURCES_MESSAGE};
use atlas_core::models::{Entry, RetrievalHit};

/// Full answer page: matched prompt, answer, sources, and other matches.
pub fn render_hits(hits: &[RetrievalHit]) -> String {
    let Some(best) = hits.first() else {
        return format!("{NO_MATCH_MESSAGE}\n");
    };

    let mut out = String::new();
    let _ = writeln!(out, "### Matched prompt");
    let _ = writeln!(out, "{}", best.question);
    if best.category.is_empty() {
        let _ = writeln!(out, "Similarity score: {:.3}", best.score);
    } else {
        let _ = writeln!(
            out,
            "Category: {} · similarity score: {:.3}",
            best.category, best.score
        );
    }

    let _ = writeln!(out, "\n### Answer");
    let _ = writeln!(out, "{}", best.answer);

    let _ = writeln!(out, "\n### Sources");
    if best.sources.is_empty() {
        let _ = writeln!(out, "{NO_SOURCES_MESSAGE}");
    } else {
        for url in &best.sources {
            let _ = writeln!(out, "- {url}");
        }
    }

    if hits.len() > 1 {
        let _ = writeln!(out, "\n### Other close matches");
        out.push_str(&render_table(hits));
    }
    out
}

/// Rank / Question / Category / Score table.
pub fn render_table(hits: &[RetrievalHit]) -> String {
    let rows: Vec<[String; 4]> = hits
        .iter()
        .map(|h| {
            [
                h.rank.to_string(),
                h.question.clone(),
                h.category.clone(),
                format!("{:.3}", h.score),
            ]
        })
        .collect();
    table(["Rank", "Question", "Category", "Score"], &rows)
}

/// Id / Category / Question listing of the corpus.
pub fn render_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
    let rows: Vec<[String; 3]> = entries
        .into_iter()
        .map(|e| [e.id.clone(), e.category.clone(), e.question.clone()])
        .collect();
    table(["Id", "Category", "Question"], &rows)
}

fn table<const N: usize>(header: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths: [usize; N] = header.map(|h| h.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, header.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell}{}", " ".repeat(w - cell.chars().count())))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}
