use std::fmt::Write as _;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mood_lens::analyzer::{AnalysisOptions, AnalysisReport, TextAnalyzer};
use mood_lens::config::Settings;
use mood_lens::motivation::DailyMotivation;
use mood_lens::registry::ModelRegistry;
use mood_lens::summarizer::SummaryMode;

const RULE: &str = "============================================================";

/// Summarize text, detect its mood and get matching motivation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text to analyze. Read from stdin when neither this nor --file is given.
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Save the JSON report (default name: analysis_<timestamp>.json)
    #[arg(short, long, num_args = 0..=1)]
    save: Option<Option<PathBuf>>,

    /// Print daily motivation and exit
    #[arg(short, long)]
    daily: bool,

    #[arg(long)]
    no_summary: bool,

    #[arg(long)]
    no_mood: bool,

    #[arg(long)]
    no_motivation: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Summarization strategy: auto, extractive or abstractive
    #[arg(long, default_value = "auto")]
    mode: SummaryMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let settings = Settings::from_env();
    let registry = ModelRegistry::connect(&settings).await;
    let analyzer = TextAnalyzer::from_registry(&registry, &settings);

    if args.daily {
        let daily = analyzer.library().daily(&mut rand::thread_rng());
        println!("{}", daily_report(&daily));
        return Ok(());
    }

    let text = read_input(&args)?;
    if text.is_empty() {
        bail!("no text provided for analysis");
    }
    debug!(chars = text.chars().count(), "input read");

    let options = AnalysisOptions {
        include_summary: !args.no_summary,
        include_mood: !args.no_mood,
        include_motivation: !args.no_motivation,
        summary_type: args.mode,
    };
    let report = analyzer.analyze(&text, options).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", quick_report(&report)?);
    }

    if let Some(target) = args.save {
        let path = target.unwrap_or_else(default_save_path);
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("\n💾 Results saved to: {}", path.display());
    }

    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        return Ok(text.trim().to_string());
    }
    if let Some(text) = &args.text {
        return Ok(text.trim().to_string());
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("📝 Enter your text (Ctrl-D to finish):");
    }
    let mut text = String::new();
    stdin.lock().read_to_string(&mut text).context("reading stdin")?;
    Ok(text.trim().to_string())
}

fn default_save_path() -> PathBuf {
    PathBuf::from(format!("analysis_{}.json", Local::now().format("%Y-%m-%d_%H-%M-%S")))
}

fn quick_report(report: &AnalysisReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}\n📊 QUICK ANALYSIS\n{}", RULE, RULE)?;

    if let Some(summary) = &report.summary {
        writeln!(out, "\n📝 SUMMARY:\n   {}", summary.summary)?;
        writeln!(out, "   Method: {}", summary.method)?;
        writeln!(out, "   Compression: {}%", summary.compression_ratio)?;
        if !summary.key_phrases.is_empty() {
            let phrases: Vec<&str> = summary.key_phrases.iter().take(3).map(String::as_str).collect();
            writeln!(out, "   Key phrases: {}", phrases.join(", "))?;
        }
    }

    if let Some(mood) = &report.mood {
        let verdict = &mood.verdict;
        writeln!(out, "\n🎭 MOOD ANALYSIS:")?;
        writeln!(
            out,
            "   Mood: {} ({})",
            verdict.overall_mood,
            verdict.mood_category.as_str()
        )?;
        writeln!(out, "   Confidence: {:.2}", verdict.confidence)?;
        writeln!(out, "   {}", verdict.description)?;
        if !verdict.suggestions.is_empty() {
            writeln!(out, "\n💡 SUGGESTIONS:")?;
            for (i, suggestion) in verdict.suggestions.iter().take(2).enumerate() {
                writeln!(out, "   {}. {}", i + 1, suggestion)?;
            }
        }
    }

    if let Some(motivation) = &report.motivation {
        writeln!(out, "\n💪 MOTIVATION:\n   Quote: {}", motivation.quote)?;
        let encouragement: String = motivation.encouragement.chars().take(200).collect();
        writeln!(out, "\n✨ ENCOURAGEMENT:\n   {}...", encouragement)?;
        if let Some(strategy) = motivation.coping_strategies.first() {
            writeln!(out, "\n🛠️  COPING STRATEGY:\n   {}", strategy)?;
        }
    }

    out.push('\n');
    out.push_str(RULE);
    Ok(out)
}

fn daily_report(daily: &DailyMotivation) -> String {
    let rule = &RULE[..40];
    format!(
        "🌅 DAILY MOTIVATION\n{rule}\n\n💫 Quote of the Day:\n   {}\n\n✨ Daily Affirmation:\n   {}\n\n🎯 Success Tip:\n   {}\n\n{rule}",
        daily.daily_quote, daily.daily_affirmation, daily.success_tip
    )
}
