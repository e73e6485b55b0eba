//! MoodLens - Sentiment Analysis with Translation and Spoken Results
//!
//! One-shot CLI front end for the analysis workflow.

use anyhow::{bail, Result};
use clap::Parser;
use moodlens::analysis::{AnalysisRequest, Workflow};
use moodlens::config::Config;
use moodlens::history;
use moodlens::language::Language;
use moodlens::{sentiment, translate, tts};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to analyze
    text: String,

    /// Source language (name or ISO code, e.g. "persian" or "fa")
    #[arg(short, long, default_value = "english")]
    source: String,

    /// Target language shown alongside the result
    #[arg(short, long, default_value = "english")]
    target: String,

    /// Speak the result aloud
    #[arg(long)]
    speak: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let Some(source) = Language::parse(&args.source) else {
        bail!("Unknown source language: {}", args.source);
    };
    let Some(target) = Language::parse(&args.target) else {
        bail!("Unknown target language: {}", args.target);
    };

    let request = match AnalysisRequest::new(&args.text, source, target) {
        Ok(request) => request,
        Err(e) => {
            // Validation message, no downstream calls
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let config = Config::load().unwrap_or_default();

    let mut workflow = Workflow::new();
    if let Some(scorer) = sentiment::create_scorer(&config) {
        workflow.set_scorer(scorer);
    }
    if let Some(translator) = translate::create_translator(&config) {
        workflow.set_translator(translator);
    }

    // Optionally attach a spoken readout
    if args.speak {
        match tts::create_engine(config.clone()).await {
            Ok(engine) => workflow.set_tts(engine),
            Err(e) => warn!("🔇 TTS unavailable: {}", e),
        }
    }

    info!("📊 MoodLens v{} analyzing...", env!("CARGO_PKG_VERSION"));

    let result = workflow.run(&request).await;

    if config.history_enabled {
        history::log(&request, &result).ok();
    }

    println!(
        "{} ({:.0}%)  [{} -> {}]",
        result.sentiment,
        result.confidence * 100.0,
        request.source,
        request.target
    );

    Ok(())
}
