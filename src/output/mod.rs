pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_result, get_terminal_width, should_use_colors,
};
