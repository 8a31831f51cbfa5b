use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "verilens",
    version,
    about = "Verilens - Analyze content authenticity with a multimodal model",
    long_about = "Verilens sends text and image content to a hosted multimodal model, \
parses the free-text response into a structured verdict (REAL / FAKE / PARTIALLY \
MANIPULATED), and renders the supporting evidence."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a parser configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable web-search grounding for the model request
    #[arg(long, global = true)]
    pub no_grounding: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full analysis record as JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text content
    #[command(about = "Analyze text content for authenticity")]
    Text(TextArgs),

    /// Analyze an image
    #[command(about = "Analyze an image for manipulation and recycled context")]
    Image(ImageArgs),

    /// Analyze text and image together
    #[command(about = "Analyze text and an image together with cross-modal checks")]
    Multimodal(MultimodalArgs),

    /// Analyze a batch of items
    #[command(about = "Analyze a batch of items described in a JSON file")]
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
pub struct TextArgs {
    /// Content to analyze; omit to read from --file
    #[arg(help = "Text content to analyze")]
    pub content: Option<String>,

    /// Read the content from a file instead
    #[arg(short, long, help = "Read the content to analyze from a file")]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ImageArgs {
    /// Path to the image file
    #[arg(help = "Path to the image to analyze")]
    pub path: PathBuf,

    /// Claimed context for the image (headline, caption, ...)
    #[arg(long, default_value = "", help = "Claimed context for the image")]
    pub context: String,
}

#[derive(Parser, Debug)]
pub struct MultimodalArgs {
    /// Text content accompanying the image
    #[arg(help = "Text content to analyze")]
    pub content: String,

    /// Path to the image file
    #[arg(help = "Path to the accompanying image")]
    pub image: PathBuf,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// JSON file describing the items to analyze
    #[arg(help = "Path to a JSON file with the batch items")]
    pub path: PathBuf,
}
