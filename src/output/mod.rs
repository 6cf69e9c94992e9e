pub mod formatter;

pub use formatter::{
    format_age, format_breakdown, format_item_detail, format_ranked_table, format_tsv,
    should_use_colors, ScoredItem,
};
