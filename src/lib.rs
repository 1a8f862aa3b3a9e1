pub mod cli;
pub mod config;
pub mod controller;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use controller::{Category, EntryId, ListEntry, SerializedField, TagListController};
pub use utils::Profile;
