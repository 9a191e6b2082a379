//! Hard-example heuristics: negation detection, lexical overlap, and the
//! combined accept/reject decision.

use crate::constants::heuristics::{MAX_LEXICAL_OVERLAP, MIN_HYPOTHESIS_TOKENS, NEGATION_WORDS};
use crate::data::Example;
use crate::utils::{token_set, tokenize};

/// True iff the text's token sequence contains a negation-vocabulary word.
pub fn has_negation(text: &str) -> bool {
    tokenize(text)
        .iter()
        .any(|token| NEGATION_WORDS.contains(&token.as_str()))
}

/// Jaccard similarity of the unique-token sets of two texts, in [0, 1].
///
/// Returns 0.0 when either side tokenizes to an empty set. Symmetric and pure.
pub fn lexical_overlap(premise: &str, hypothesis: &str) -> f64 {
    let premise_tokens = token_set(premise);
    let hypothesis_tokens = token_set(hypothesis);
    if premise_tokens.is_empty() || hypothesis_tokens.is_empty() {
        return 0.0;
    }
    let intersection = premise_tokens.intersection(&hypothesis_tokens).count();
    let union = premise_tokens.union(&hypothesis_tokens).count();
    intersection as f64 / union as f64
}

/// Thresholds for the hard-example decision.
#[derive(Clone, Copy, Debug)]
pub struct HardCriteria {
    /// Hypothesis token count must be strictly greater than this.
    pub min_hypothesis_tokens: usize,
    /// Premise/hypothesis overlap must be strictly below this.
    pub max_overlap: f64,
}

impl Default for HardCriteria {
    fn default() -> Self {
        Self {
            min_hypothesis_tokens: MIN_HYPOTHESIS_TOKENS,
            max_overlap: MAX_LEXICAL_OVERLAP,
        }
    }
}

impl HardCriteria {
    /// Decide whether an example qualifies as hard.
    ///
    /// All three predicates must hold: no negation token in the hypothesis,
    /// hypothesis longer than `min_hypothesis_tokens` tokens, and lexical
    /// overlap below `max_overlap`. Predicates are pure, so the short-circuit
    /// order affects cost only, never the result.
    pub fn is_hard(&self, example: &Example) -> bool {
        if has_negation(&example.hypothesis) {
            return false;
        }
        if tokenize(&example.hypothesis).len() <= self.min_hypothesis_tokens {
            return false;
        }
        lexical_overlap(&example.premise, &example.hypothesis) < self.max_overlap
    }
}
