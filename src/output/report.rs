//! Printable HTML report of ranked patterns
//!
//! Patterns are laid out as glyph grids, four patterns (twenty cells) per
//! page. A trailing page with fewer than twenty cells is not emitted.

use crate::core::{OUTCOME_COUNT, Outcome, Pattern, WORD_LENGTH};

/// Glyph per outcome, indexed by outcome code: check, cross, arrow
pub const GLYPHS: [&str; OUTCOME_COUNT] = [r"&#10003;", r"&#215;", r"&#129112;"];

/// Patterns rendered on one page
pub const PATTERNS_PER_PAGE: usize = 4;

/// Cells per page
pub const CELLS_PER_PAGE: usize = PATTERNS_PER_PAGE * WORD_LENGTH;

const HTML_FRONT: &str = r"<html>
    <head>
<style>
td:first-child {
    border: 2px solid black;
}
table, th, td {
      border: 1px solid black;
}
td {
    width: 20%;
    text-align: center;
    font-size: 10em;
}
table {
    width: 100%;
    height: 25%;
}
</style>
    </head>
    <body>";

const HTML_BACK: &str = r"    </body>
</html>";

const FIRST_TABLE_STYLE: &str = "page-break-before: always;";
const MIDDLE_TABLE_STYLE: &str = "width: 100%; height: 25%;";
const LAST_TABLE_STYLE: &str = "width: 100%; height: 25%; page-break-after: always;";

/// The glyph for one outcome
#[must_use]
pub const fn glyph(outcome: Outcome) -> &'static str {
    GLYPHS[outcome.index()]
}

/// Render `patterns` (best first) as an HTML document
///
/// # Examples
/// ```
/// use wordle_patterns::core::Pattern;
/// use wordle_patterns::output::report::render_report;
///
/// let html = render_report(&Pattern::all()[..4]);
/// assert!(html.starts_with("<html>"));
/// assert_eq!(html.matches("<td>").count(), 20);
/// ```
#[must_use]
pub fn render_report(patterns: &[Pattern]) -> String {
    let mut html = String::from(HTML_FRONT);
    html.push('\n');

    for page in patterns.chunks_exact(PATTERNS_PER_PAGE) {
        html.push_str(&render_page(page));
        html.push('\n');
    }

    html.push_str(HTML_BACK);
    html.push('\n');
    html
}

/// Number of full pages `count` patterns fill
#[must_use]
pub const fn page_count(count: usize) -> usize {
    count / PATTERNS_PER_PAGE
}

fn render_page(page: &[Pattern]) -> String {
    let mut out = String::from("\n");
    for (i, pattern) in page.iter().enumerate() {
        let style = match i {
            0 => FIRST_TABLE_STYLE,
            i if i + 1 == page.len() => LAST_TABLE_STYLE,
            _ => MIDDLE_TABLE_STYLE,
        };
        out.push_str(&render_table(style, pattern));
    }
    out
}

fn render_table(style: &str, pattern: &Pattern) -> String {
    let mut out = format!("<table style=\"{style}\">\n    <tr>\n");
    for &outcome in pattern.outcomes() {
        out.push_str(&format!("    <td>{}</td>\n", glyph(outcome)));
    }
    out.push_str("    </tr>\n</table>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(id: &str) -> Pattern {
        Pattern::from_id(id).unwrap()
    }

    #[test]
    fn glyph_table_order_is_match_absent_elsewhere() {
        assert_eq!(glyph(Outcome::Match), "&#10003;");
        assert_eq!(glyph(Outcome::Absent), "&#215;");
        assert_eq!(glyph(Outcome::Elsewhere), "&#129112;");
    }

    #[test]
    fn one_page_has_twenty_cells_in_order() {
        let patterns = [
            pattern("00011"),
            pattern("11220"),
            pattern("22011"),
            pattern("01201"),
        ];
        let html = render_report(&patterns);

        assert_eq!(html.matches("<td>").count(), CELLS_PER_PAGE);
        assert_eq!(html.matches("<table").count(), 4);

        let cells: Vec<&str> = html
            .split("<td>")
            .skip(1)
            .map(|rest| &rest[..rest.find("</td>").unwrap()])
            .collect();
        let expected: Vec<&str> = patterns
            .iter()
            .flat_map(|p| p.outcomes().iter().map(|&o| glyph(o)))
            .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn page_breaks_wrap_each_page() {
        let patterns = Pattern::all();
        let html = render_report(&patterns[..8]);

        assert_eq!(html.matches("page-break-before: always;").count(), 2);
        assert_eq!(html.matches("page-break-after: always;").count(), 2);
        assert_eq!(
            html.matches("<table style=\"width: 100%; height: 25%;\">").count(),
            4
        );
    }

    #[test]
    fn partial_page_is_dropped() {
        let patterns = Pattern::all();
        let html = render_report(&patterns[..7]);

        assert_eq!(html.matches("<td>").count(), CELLS_PER_PAGE);
        assert_eq!(page_count(7), 1);
    }

    #[test]
    fn empty_report_is_just_the_frame() {
        let html = render_report(&[]);

        assert_eq!(html, format!("{HTML_FRONT}\n{HTML_BACK}\n"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn table_layout() {
        let table = render_table(FIRST_TABLE_STYLE, &pattern("01210"));
        assert_eq!(
            table,
            "<table style=\"page-break-before: always;\">\n    <tr>\n    <td>&#10003;</td>\n    <td>&#215;</td>\n    <td>&#129112;</td>\n    <td>&#215;</td>\n    <td>&#10003;</td>\n    </tr>\n</table>\n"
        );
    }
}
