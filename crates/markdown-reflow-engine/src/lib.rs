pub mod reflow;

// Re-export the entry point for easier usage
pub use reflow::{DEFAULT_MAX_WIDTH, process};
