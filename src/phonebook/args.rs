use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(about = "Console phone directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backing file (defaults to phonebook.json in the data directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact (missing fields are prompted for)
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        middle_name: Option<String>,

        #[arg(long)]
        organization: Option<String>,

        /// Work phone, exactly 11 digits
        #[arg(long)]
        work_phone: Option<String>,

        /// Personal phone, exactly 11 digits
        #[arg(long)]
        personal_phone: Option<String>,
    },

    /// List one page of contacts
    #[command(alias = "ls")]
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Contacts per page (overrides the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Edit a contact by its number
    #[command(alias = "e")]
    Edit {
        /// 1-based contact number, as shown by list and search
        index: usize,
    },

    /// Search contacts (case-insensitive, matches any field)
    Search { term: String },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., per-page)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
