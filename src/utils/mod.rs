pub mod paths;
pub mod terminal;
pub mod text;
pub mod timestamps;

pub use paths::{format_path_with_tilde, read_export_file, safe_open_file, validate_file_size};
pub use terminal::sanitize_for_terminal;
pub use text::wrap_text;
pub use timestamps::{compact_timestamp, parse_export_timestamp};
