pub mod gallery;
pub mod item;
pub mod output;
pub mod scoring;
