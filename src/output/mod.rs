pub mod formatter;

pub use formatter::{
    format_compile_summary, format_formations, format_match_list, format_rating, format_scoreline,
    should_use_colors,
};
