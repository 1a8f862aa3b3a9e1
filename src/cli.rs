use clap::{Parser, Subcommand};

use crate::controller::{TagListController, split_labels};

#[derive(Parser)]
#[command(name = "tagfield")]
#[command(about = "Compose a comma-separated category field in the terminal")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use development mode (uses separate dev config)
    #[arg(long)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive widget (default if no subcommand)
    Tui {
        /// Pre-seed the list from an existing comma-separated value
        #[arg(long)]
        seed: Option<String>,
    },
    /// Join labels into a serialized field value without the TUI
    Join {
        /// Labels, one argument each
        labels: Vec<String>,
    },
    /// Split a serialized field value back into labels, one per line
    Split {
        /// The comma-separated value
        value: String,
    },
}

/// Build the serialized value for a set of labels.
/// Blank labels are dropped the same way the interactive widget drops them.
pub fn join_labels<I, S>(field_name: &str, labels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TagListController::from_labels(field_name, labels)
        .serialized_value()
        .to_string()
}

/// Handle the join command
pub fn handle_join(field_name: &str, labels: Vec<String>) {
    println!("{}", join_labels(field_name, labels));
}

/// Handle the split command
pub fn handle_split(value: &str) {
    for label in split_labels(value) {
        println!("{}", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_drops_blank_labels() {
        let joined = join_labels("categoriesString", ["Food", "", "  ", "Rent", "Utilities"]);
        assert_eq!(joined, "Food,Rent,Utilities");
    }

    #[test]
    fn join_of_nothing_is_empty() {
        let joined = join_labels("categoriesString", Vec::<String>::new());
        assert_eq!(joined, "");
    }
}
