mod formatter;

pub use formatter::{format_error_line, format_result, should_use_colors};
