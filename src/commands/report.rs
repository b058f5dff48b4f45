//! Report command
//!
//! Renders the best patterns of a compatibility cache as an HTML report.

use crate::analysis::top_patterns;
use crate::error::Result;
use crate::output::report::{page_count, render_report};
use crate::storage::read_cache;
use std::path::Path;

/// Rendered report and what went into it
#[derive(Debug)]
pub struct ReportResult {
    pub html: String,
    pub patterns: usize,
    pub pages: usize,
}

/// Render the `top` best cached patterns
///
/// # Errors
///
/// Returns an error if the cache is missing or malformed.
pub fn render_cached_report(cache_path: &Path, top: usize) -> Result<ReportResult> {
    let set = read_cache(cache_path)?;
    let best = top_patterns(&set, top);

    Ok(ReportResult {
        html: render_report(&best),
        patterns: best.len(),
        pages: page_count(best.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::CompatibilitySet;
    use crate::core::{Pattern, Word};
    use crate::storage::write_cache;

    #[test]
    fn report_pages_follow_top_count() {
        let words: Vec<Word> = ["crane", "slate", "trace", "react", "caret"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let set = CompatibilitySet::build(&words, &Pattern::all());
        let path = std::env::temp_dir().join(format!(
            "wordle_patterns_report_{}.json",
            std::process::id()
        ));
        write_cache(&set, &path).unwrap();

        let report = render_cached_report(&path, 10).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(report.patterns, 10);
        assert_eq!(report.pages, 2);
        assert_eq!(report.html.matches("<td>").count(), 40);
    }
}
