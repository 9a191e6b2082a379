use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use hardslice::{
    build_challenge_set, label_balance, ChallengeConfig, ExampleSource, JsonlFileSource,
};

#[derive(Debug, Parser)]
#[command(
    name = "hardslice",
    disable_help_subcommand = true,
    about = "Build a hard NLI challenge set as line-delimited JSON",
    long_about = "Filter an SNLI-style train split down to hard examples (negation-free \
hypothesis, more than ten hypothesis tokens, premise/hypothesis overlap below 0.2), \
sample up to a per-label cap, shuffle, and write JSONL.",
    after_help = "Without --input the SNLI train split is fetched from the Hugging Face hub \
(requires the `huggingface` build feature)."
)]
struct HardsliceCli {
    #[arg(long, value_name = "PATH", help = "Output JSONL path for the challenge set")]
    output: PathBuf,
    #[arg(
        long = "max_per_label",
        default_value_t = 5000,
        help = "Maximum number of examples per gold label to include"
    )]
    max_per_label: usize,
    #[arg(
        long,
        default_value_t = 42,
        help = "Deterministic seed used for per-label and global shuffles"
    )]
    seed: u64,
    #[arg(
        long,
        value_name = "PATH",
        help = "Optional local JSONL train split to read instead of the hub"
    )]
    input: Option<PathBuf>,
    #[arg(long = "source-id", help = "Optional source id override used in logs")]
    source_id: Option<String>,
}

fn build_source(cli: &HardsliceCli) -> Result<Box<dyn ExampleSource>, Box<dyn Error>> {
    if let Some(input) = &cli.input {
        let mut source = JsonlFileSource::new(input);
        if let Some(id) = &cli.source_id {
            source = source.with_id(id);
        }
        return Ok(Box::new(source));
    }

    #[cfg(feature = "huggingface")]
    {
        let mut config = hardslice::SnliHubConfig::default();
        if let Some(id) = &cli.source_id {
            config.source_id = id.clone();
        }
        Ok(Box::new(hardslice::SnliHubSource::new(config)))
    }

    #[cfg(not(feature = "huggingface"))]
    {
        Err(
            "no --input given and this build has no `huggingface` feature; \
pass --input <PATH> to read a local JSONL train split"
                .into(),
        )
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = HardsliceCli::parse();
    let source = build_source(&cli)?;

    let config = ChallengeConfig::new(&cli.output)
        .with_max_per_label(cli.max_per_label)
        .with_seed(cli.seed);

    println!("Loading train split from '{}'...", source.id());
    let report = build_challenge_set(&config, source.as_ref())?;

    println!(
        "Train size after removing unlabeled examples: {}",
        report.labeled_examples
    );
    for (label, count) in &report.found_per_label {
        println!("Label {}: found {count} hard examples", label.as_index());
    }
    for (label, count) in &report.kept_per_label {
        println!("Using {count} examples for label {}", label.as_index());
    }
    println!("Total challenge examples: {}", report.written);
    if let Some(balance) = label_balance(&report.kept_per_label) {
        for entry in &balance.per_label {
            println!(
                "  label {}: {} ({:.1}% of selection)",
                entry.label.as_index(),
                entry.count,
                entry.share * 100.0
            );
        }
    }
    println!("Wrote challenge set to {}", config.output.display());

    Ok(())
}
