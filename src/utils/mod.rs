pub mod file;
pub mod string;
pub mod yaml;

// Re-export common utilities
pub use file::{file_exists, read_text_lossy, write_file};
pub use string::sanitize_path;
pub use yaml::relax_tags;
