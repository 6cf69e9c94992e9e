pub mod types;

pub use types::{Enchantment, ItemStats, Rarity, Slot};
