//! CLI commands and argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// termctx - coordinate tokens and pagination for terminology services
#[derive(Parser, Debug)]
#[command(name = "termctx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// System defaults file (YAML)
    #[arg(short, long, global = true)]
    pub defaults: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a coordinate token from request-parameter values
    ///
    /// Flags take the same spellings as the request parameters they mirror;
    /// unset fields come from the base token when given, otherwise from the
    /// system defaults.
    Mint {
        /// Base token to overlay the other flags onto
        #[arg(long)]
        token: Option<String>,

        /// Time position: "latest" or epoch millis
        #[arg(long, allow_hyphen_values = true)]
        time: Option<String>,

        /// Versioning path concept id
        #[arg(long)]
        path: Option<String>,

        /// Tie-break order: "path" or "time"
        #[arg(long)]
        precedence: Option<String>,

        /// Comma-separated module ids; empty means unrestricted
        #[arg(long)]
        modules: Option<String>,

        /// Comma-separated lifecycle state names
        #[arg(long)]
        allowed_states: Option<String>,

        /// Language concept id
        #[arg(long)]
        language: Option<String>,

        /// Comma-separated dialect ids in preference order
        #[arg(long)]
        dialect_prefs: Option<String>,

        /// Comma-separated description-type ids in preference order
        #[arg(long)]
        description_type_prefs: Option<String>,

        /// Stated logical-definition assemblage id
        #[arg(long)]
        logic_stated_assemblage: Option<String>,

        /// Inferred logical-definition assemblage id
        #[arg(long)]
        logic_inferred_assemblage: Option<String>,

        /// Description-logic profile concept id
        #[arg(long)]
        description_logic_profile: Option<String>,

        /// Classifier concept id
        #[arg(long)]
        classifier: Option<String>,

        /// Taxonomy premise selector: true = stated, false = inferred
        #[arg(long)]
        stated: Option<String>,
    },

    /// Decode and display a coordinate token
    Inspect {
        /// Serialized token
        token: String,
    },

    /// Compare two coordinate tokens component by component
    Diff {
        /// First token
        left: String,
        /// Second token
        right: String,
    },

    /// Compute previous/next page links
    Paginate {
        /// Page number, starting at 1
        #[arg(long)]
        page_num: u32,

        /// Maximum results per page
        #[arg(long)]
        max_page_size: u32,

        /// Estimated total result count; negative means unknown
        #[arg(long, default_value = "-1", allow_hyphen_values = true)]
        approximate_total: i64,

        /// Results actually returned for the current page
        #[arg(long)]
        result_count: usize,

        /// Base URL the page parameters are appended to
        #[arg(long)]
        base_url: String,
    },
}
