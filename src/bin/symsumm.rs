use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use symmetric_summarizer::{Summarizer, SummarizerConfig, SummaryOutcome};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "symsumm")]
#[command(about = "Extractive summarization by symmetric sentence linking", long_about = None)]
struct Cli {
    /// Input text file
    #[arg(long)]
    input: PathBuf,
    /// Output file (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// JSON config file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Percent of eligible sentences to keep (1-100)
    #[arg(long)]
    percentage: Option<u32>,
    /// Disable rhetorical-indicator reweighting
    #[arg(long, default_value_t = false)]
    no_indicators: bool,
    /// Use the alternate indicator template collection
    #[arg(long, default_value_t = false)]
    template_variant: bool,
    /// Directory holding the indicator template collections
    #[arg(long)]
    template_dir: Option<PathBuf>,
    /// Tagging lexicon for the templates: word<TAB>OpenCorpora tag<TAB>normal form
    #[arg(long)]
    lexicon: Option<PathBuf>,
    /// Language code for stopwords and stemming
    #[arg(long)]
    language: Option<String>,
    /// Run the link passes on the thread pool
    #[arg(long, default_value_t = false)]
    parallel: bool,
    /// Print the full summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn summarizer_config(&self) -> Result<SummarizerConfig> {
        let mut config = match &self.config {
            Some(path) => SummarizerConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SummarizerConfig::default(),
        };
        if let Some(percentage) = self.percentage {
            config = config.with_percentage(percentage);
        }
        if let Some(language) = &self.language {
            config = config.with_language(language.as_str());
        }
        if let Some(dir) = &self.template_dir {
            config = config.with_template_dir(dir.clone());
        }
        if let Some(lexicon) = &self.lexicon {
            config = config.with_lexicon(lexicon.clone());
        }
        if self.no_indicators {
            config = config.with_indicators(false);
        }
        if self.template_variant {
            config = config.with_template_set_variant(true);
        }
        if self.parallel {
            config = config.with_parallel(true);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = cli.summarizer_config()?;
    let summarizer = Summarizer::new(config).context("configuring summarizer")?;
    let summary = summarizer
        .summarize_file(&cli.input)
        .with_context(|| format!("summarizing {}", cli.input.display()))?;

    if summary.outcome != SummaryOutcome::Complete {
        tracing::warn!(outcome = ?summary.outcome, "{}", summary.outcome.message());
    }
    tracing::info!(
        total = summary.total_sentences,
        eligible = summary.eligible_sentences,
        selected = summary.sentences.len(),
        "done"
    );

    let rendered = if cli.json {
        serde_json::to_string_pretty(&summary)?
    } else {
        summary.to_text()
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", rendered),
    }
    Ok(())
}
