pub mod storage;

pub use storage::{backfill_scores, load_items, save_items};
