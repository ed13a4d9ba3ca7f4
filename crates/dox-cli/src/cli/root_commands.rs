use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate the comment body for a `/**` opener in a source file.
    Generate(GenerateArgs),
    /// Show how the declaration starting at a line is recognized.
    Classify(ClassifyArgs),
    /// Extract parameter or template parameter names from a list.
    Args(ExtractArgs),
    /// List Doxygen command completions for the character before the cursor.
    Complete(CompleteArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Source file; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
    /// 1-based line holding the opener (defaults to the first `/**`).
    #[arg(short = 'l', long, conflicts_with = "offset")]
    pub line: Option<usize>,
    /// Byte offset of the cursor.
    #[arg(short = 'o', long)]
    pub offset: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Source file; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
    /// 1-based line where the declaration starts.
    #[arg(short = 'l', long, default_value_t = 1)]
    pub line: usize,
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Raw list, e.g. "const std::string& name, int n".
    pub text: String,
    /// Treat the text as the inside of `template<...>`.
    #[arg(short = 't', long)]
    pub template: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CompleteArgs {
    /// Character immediately before the cursor.
    #[arg(long)]
    pub prev_char: char,
    /// The cursor is inside a comment.
    #[arg(long)]
    pub in_comment: bool,
}
