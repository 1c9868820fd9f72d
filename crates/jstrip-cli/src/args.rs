use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the jstrip binary.
#[derive(Parser, Debug)]
#[command(
    name = "jstrip",
    version,
    about = "Remove comments from Java files while preserving functionality"
)]
pub struct CliArgs {
    /// Path to a Java file or a directory containing Java files.
    pub path: PathBuf,

    // ==================== Output ====================
    /// Don't create backup files.
    #[arg(long = "no-backup")]
    pub no_backup: bool,

    /// Modify files in place instead of creating new files.
    #[arg(long = "in-place")]
    pub in_place: bool,

    /// Suffix appended to the file stem of new output files.
    #[arg(long)]
    pub suffix: Option<String>,

    /// Print the stripped text of a single file to stdout instead of writing files.
    #[arg(long, conflicts_with = "in_place")]
    pub stdout: bool,

    // ==================== Discovery ====================
    /// Don't process subdirectories recursively.
    #[arg(long = "no-recursive")]
    pub no_recursive: bool,

    /// Glob patterns for files to skip (e.g. '**/generated/**').
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    // ==================== Stripping ====================
    /// Keep the line breaks of block comments so line numbers are unchanged.
    #[arg(long = "preserve-line-breaks")]
    pub preserve_line_breaks: bool,

    // ==================== Execution ====================
    /// Number of files to process in parallel (defaults to the number of CPUs).
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Path to a jstrip.json config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    // ==================== Reporting ====================
    /// Enable color and formatting in output.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Only print the summary, not one line per file.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Print the per-file results and summary as JSON.
    #[arg(long)]
    pub json: bool,
}
