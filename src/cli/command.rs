use clap::{ArgAction, Parser};

use crate::storage::file::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice (file, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("file"))]
    pub storage_choice: String,

    /// Path of the file backing the key-value storage
    #[arg(long, env = "STORAGE_PATH", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub storage_path: String,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
