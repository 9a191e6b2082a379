//! Label-keyed grouping and stratified selection of hard examples.

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::{Example, Label};

/// Accepted examples grouped by gold label, in canonical label order.
///
/// Each example is pushed into exactly the group matching its own label, so
/// group membership is exclusive by construction.
#[derive(Clone, Debug, Default)]
pub struct LabelGroups {
    groups: IndexMap<Label, Vec<Example>>,
}

impl LabelGroups {
    /// Empty groups with all three labels present in canonical order.
    pub fn new() -> Self {
        let mut groups = IndexMap::with_capacity(Label::ALL.len());
        for label in Label::ALL {
            groups.insert(label, Vec::new());
        }
        Self { groups }
    }

    /// Append an example to the group keyed by its own label.
    pub fn push(&mut self, example: Example) {
        self.groups.entry(example.label).or_default().push(example);
    }

    /// Per-label group sizes in canonical label order.
    pub fn counts(&self) -> Vec<(Label, usize)> {
        Label::ALL
            .iter()
            .map(|label| (*label, self.groups.get(label).map_or(0, Vec::len)))
            .collect()
    }

    /// Total examples across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when every group is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_groups(self) -> IndexMap<Label, Vec<Example>> {
        self.groups
    }
}

/// Shuffle each label group, truncate it to `max_per_label`, concatenate, and
/// globally shuffle the result.
///
/// Both shuffle phases draw from the single `rng` handle, so for a fixed seed
/// and fixed input ordering the selection is reproducible.
pub fn select_challenge_set(
    groups: LabelGroups,
    max_per_label: usize,
    rng: &mut StdRng,
) -> Vec<Example> {
    let mut selected = Vec::new();
    for (_, mut examples) in groups.into_groups() {
        examples.shuffle(rng);
        examples.truncate(max_per_label);
        selected.extend(examples);
    }
    selected.shuffle(rng);
    selected
}

/// Seeded convenience wrapper: selection as a pure function of
/// (groups, max_per_label, seed).
pub fn select_challenge_set_seeded(
    groups: LabelGroups,
    max_per_label: usize,
    seed: u64,
) -> Vec<Example> {
    let mut rng = StdRng::seed_from_u64(seed);
    select_challenge_set(groups, max_per_label, &mut rng)
}
