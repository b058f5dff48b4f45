//! Output: terminal display and the HTML report

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{
    print_build_result, print_estimates, print_pattern_ranking, print_report_summary,
    print_word_ranking,
};
pub use report::render_report;
