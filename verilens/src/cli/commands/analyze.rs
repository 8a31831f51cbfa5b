//! Analyze commands - run content through the model and render the verdict

use crate::cli::app::{BatchArgs, ImageArgs, MultimodalArgs, OutputFormat, TextArgs};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use verilens_core::analysis::{
    AnalysisResult, ParserConfig, ResponseParser, confidence_label, risk_label,
};
use verilens_core::analyzer::{BatchItem, ContentAnalyzer, ImageInput};
use verilens_core::llm::GeminiProvider;

/// Options shared by every analyze command.
pub struct AnalyzeOptions {
    pub config: Option<PathBuf>,
    pub use_grounding: bool,
    pub format: OutputFormat,
}

fn build_analyzer(config: &Option<PathBuf>) -> Result<ContentAnalyzer> {
    let provider = Arc::new(GeminiProvider::from_env()?);
    let parser = match config {
        Some(path) => ResponseParser::with_config(ParserConfig::from_file(path)?),
        None => ResponseParser::new(),
    };
    Ok(ContentAnalyzer::with_parser(provider, parser))
}

/// Analyze text content
pub async fn execute_text(args: TextArgs, options: AnalyzeOptions) -> Result<()> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => bail!("Provide text content inline or via --file"),
    };

    let analyzer = build_analyzer(&options.config)?;
    let result = analyzer.analyze_text(&content, options.use_grounding).await;
    render(&result, options.format)
}

/// Analyze an image
pub async fn execute_image(args: ImageArgs, options: AnalyzeOptions) -> Result<()> {
    let image = load_image(&args.path).await?;
    let analyzer = build_analyzer(&options.config)?;
    let result = analyzer.analyze_image(&image, &args.context).await;
    render(&result, options.format)
}

/// Analyze text and image together
pub async fn execute_multimodal(args: MultimodalArgs, options: AnalyzeOptions) -> Result<()> {
    let image = load_image(&args.image).await?;
    let analyzer = build_analyzer(&options.config)?;
    let result = analyzer.analyze_multimodal(&args.content, &image, options.use_grounding).await;
    render(&result, options.format)
}

/// Analyze a batch of items described in a JSON file
pub async fn execute_batch(args: BatchArgs, options: AnalyzeOptions) -> Result<()> {
    let raw = fs::read_to_string(&args.path)
        .await
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let entries: Vec<BatchFileEntry> =
        serde_json::from_str(&raw).context("Failed to parse batch file")?;

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        items.push(entry.into_item().await?);
    }

    let analyzer = build_analyzer(&options.config)?;
    let results = analyzer.batch_analyze(items, options.use_grounding).await;

    for (index, result) in results.iter().enumerate() {
        if options.format == OutputFormat::Text {
            println!("--- Item {} ---", index + 1);
        }
        render(result, options.format)?;
    }
    Ok(())
}

/// One entry of the batch JSON file. Image entries name a path on disk;
/// the bytes are loaded before the batch runs.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum BatchFileEntry {
    Text { content: String },
    Image { path: PathBuf, #[serde(default)] context: String },
    Multimodal { content: String, path: PathBuf },
}

impl BatchFileEntry {
    async fn into_item(self) -> Result<BatchItem> {
        Ok(match self {
            Self::Text { content } => BatchItem::Text { content },
            Self::Image { path, context } => {
                BatchItem::Image { image: load_image(&path).await?, context }
            }
            Self::Multimodal { content, path } => {
                BatchItem::Multimodal { content, image: load_image(&path).await? }
            }
        })
    }
}

async fn load_image(path: &Path) -> Result<ImageInput> {
    let mime_type = match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        other => bail!("Unsupported image extension: {:?}", other),
    };

    let data = fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(ImageInput::new(mime_type, data))
}

fn render(result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => render_text(result),
    }
    Ok(())
}

fn render_text(result: &AnalysisResult) {
    println!("Verdict:    {}", result.clear_category);
    println!(
        "Score:      {}/100 ({})",
        result.score,
        confidence_label(result.score)
    );
    println!("Class:      {}", result.classification);
    println!("Confidence: {}", result.confidence_level);
    println!("Risk:       {}", risk_label(result.classification, result.score));
    if result.cross_modal_consistency
        != verilens_core::analysis::CrossModalConsistency::NotAssessed
    {
        println!("Cross-modal: {}", result.cross_modal_consistency);
    }

    print_section("Key findings", &result.key_findings);
    print_section("Evidence", &result.evidence);
    print_section("Red flags", &result.red_flags);

    println!("\nRecommendation: {}", result.recommendation);
    println!("Reasoning: {}", result.reasoning_chain);
}

fn print_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}:");
    for item in items {
        println!("  - {item}");
    }
}
