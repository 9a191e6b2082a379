//! End-to-end orchestration: load, screen, evaluate, sample, write.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::ChallengeConfig;
use crate::data::Label;
use crate::errors::ChallengeError;
use crate::sampler::{select_challenge_set, LabelGroups};
use crate::source::ExampleSource;
use crate::writer::write_jsonl;

/// Summary of one pipeline run, for console reporting and tests.
#[derive(Clone, Debug)]
pub struct ChallengeReport {
    /// Train-split size after dropping unlabeled records.
    pub labeled_examples: usize,
    /// Hard examples found per label, in canonical label order.
    pub found_per_label: Vec<(Label, usize)>,
    /// Examples kept per label after the cap, in canonical label order.
    pub kept_per_label: Vec<(Label, usize)>,
    /// Total lines written to the output file.
    pub written: usize,
}

/// Run the full pipeline against `source` and write the challenge set.
///
/// The whole filtered corpus is held in memory between the load and write
/// phases; the write starts only once the selection is complete. Load and
/// write failures propagate unchanged.
pub fn build_challenge_set(
    config: &ChallengeConfig,
    source: &dyn ExampleSource,
) -> Result<ChallengeReport, ChallengeError> {
    info!(source = source.id(), "loading train split");
    let raw = source.load_train()?;
    let total = raw.len();

    let mut groups = LabelGroups::new();
    let mut labeled_examples = 0usize;
    for record in raw {
        // Unlabeled records are screened out before any heuristic runs.
        let Some(example) = record.into_labeled() else {
            continue;
        };
        labeled_examples += 1;
        if config.criteria.is_hard(&example) {
            groups.push(example);
        }
    }
    debug!(
        total,
        labeled = labeled_examples,
        hard = groups.len(),
        "heuristic pass complete"
    );

    let found_per_label = groups.counts();
    let kept_per_label: Vec<(Label, usize)> = found_per_label
        .iter()
        .map(|(label, count)| (*label, (*count).min(config.max_per_label)))
        .collect();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let selection = select_challenge_set(groups, config.max_per_label, &mut rng);

    write_jsonl(&config.output, &selection)?;

    Ok(ChallengeReport {
        labeled_examples,
        found_per_label,
        kept_per_label,
        written: selection.len(),
    })
}
