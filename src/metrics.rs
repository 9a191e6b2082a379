//! Label-balance metrics for console reporting.

use crate::data::Label;

/// Aggregate balance metrics over per-label example counts.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelBalance {
    pub total: usize,
    pub min: usize,
    pub max: usize,
    pub ratio: f64,
    pub per_label: Vec<LabelShare>,
}

/// Per-label share of the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelShare {
    pub label: Label,
    pub count: usize,
    pub share: f64,
}

/// Compute balance metrics from per-label counts, in the given label order.
///
/// Returns `None` for an empty slice. `ratio` is max/min and is infinite when
/// any label ended up with zero examples.
pub fn label_balance(counts: &[(Label, usize)]) -> Option<LabelBalance> {
    if counts.is_empty() {
        return None;
    }
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let min = counts.iter().map(|(_, n)| *n).min()?;
    let max = counts.iter().map(|(_, n)| *n).max()?;
    let ratio = if min == 0 {
        f64::INFINITY
    } else {
        max as f64 / min as f64
    };
    let per_label = counts
        .iter()
        .map(|(label, count)| LabelShare {
            label: *label,
            count: *count,
            share: if total == 0 {
                0.0
            } else {
                *count as f64 / total as f64
            },
        })
        .collect();
    Some(LabelBalance {
        total,
        min,
        max,
        ratio,
        per_label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_reports_even_split() {
        let counts = [
            (Label::Entailment, 4),
            (Label::Neutral, 4),
            (Label::Contradiction, 4),
        ];
        let balance = label_balance(&counts).expect("balance");
        assert_eq!(balance.total, 12);
        assert!((balance.ratio - 1.0).abs() < 1e-9);
        assert!(
            balance
                .per_label
                .iter()
                .all(|entry| (entry.share - 1.0 / 3.0).abs() < 1e-9)
        );
    }

    #[test]
    fn balance_reports_skew_and_zero_groups() {
        let counts = [
            (Label::Entailment, 6),
            (Label::Neutral, 3),
            (Label::Contradiction, 0),
        ];
        let balance = label_balance(&counts).expect("balance");
        assert_eq!(balance.total, 9);
        assert_eq!(balance.max, 6);
        assert_eq!(balance.min, 0);
        assert!(balance.ratio.is_infinite());
        assert!(label_balance(&[]).is_none());
    }
}
