use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quizdb", version)]
#[command(about = "Timed quizzes over a local question bank", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding questions, results and config
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ExportKind {
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a question
    #[command(alias = "n")]
    Add {
        /// Question text
        question: String,

        /// An answer option (repeat for each option, in order)
        #[arg(short, long = "option", required = true, num_args = 1)]
        options: Vec<String>,

        /// Number of the correct option (1-based)
        #[arg(short, long, default_value_t = 1)]
        answer: usize,

        /// Category label
        #[arg(short, long)]
        category: String,

        /// Difficulty (Basic, Intermediate, Advanced)
        #[arg(short, long, default_value = "Basic")]
        difficulty: String,
    },

    /// List questions
    #[command(alias = "ls")]
    List {
        /// Only questions in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only questions with this difficulty
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Show one or more questions with their options
    #[command(alias = "v")]
    View {
        /// Question ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Change fields of a question
    #[command(alias = "e")]
    Edit {
        /// Question id
        id: u64,

        /// New question text
        #[arg(short, long)]
        question: Option<String>,

        /// Replacement options (repeat for each option; replaces all of them)
        #[arg(short, long = "option", num_args = 1)]
        options: Vec<String>,

        /// New correct option number (1-based)
        #[arg(short, long)]
        answer: Option<usize>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New difficulty
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Delete one or more questions
    #[command(alias = "rm")]
    Delete {
        /// Question ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// List categories in use
    Categories,

    /// List difficulties in use
    Difficulties,

    /// Print the number of questions
    Count,

    /// Take the quiz; the timer is checked when an answer is submitted, not while waiting for input
    Play {
        /// Player alias
        #[arg(short, long)]
        name: Option<String>,

        /// Student id
        #[arg(short, long)]
        student_id: Option<String>,
    },

    /// Show ranked results
    #[command(alias = "lb")]
    Leaderboard,

    /// Write all results to a CSV or JSON file
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportKind,

        /// Directory to write into (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Write an SVG certificate for a player's best run
    Certificate {
        /// Player alias as recorded
        player: String,

        /// Directory to write into (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (time-limit, export-prefix)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Clear the question database (seed questions return on next start)
    Reset {
        /// Also clear recorded results
        #[arg(long)]
        results: bool,
    },
}
