//! External files: word lists, ranked word files and the compatibility cache

pub mod cache;
pub mod loader;

pub use cache::{read_cache, write_cache};
pub use loader::{load_word_list, load_word_ranks};
