use std::fs;

use hardslice::{build_challenge_set, ChallengeConfig, InMemorySource, Label, RawExample};

fn raw(premise: &str, hypothesis: &str, label: i64) -> RawExample {
    RawExample {
        premise: premise.to_string(),
        hypothesis: hypothesis.to_string(),
        label,
    }
}

fn synthetic_trio() -> Vec<RawExample> {
    vec![
        // Rejected: negation in the hypothesis.
        raw(
            "a man runs",
            "a man is not running very quickly today outside",
            1,
        ),
        // Accepted: negation-free, 11 tokens, low overlap.
        raw(
            "a dog sleeps",
            "a completely unrelated group of people are celebrating a festival downtown",
            0,
        ),
        // Rejected: overlap 1.0 and only 4 tokens.
        raw("a cat eats food", "a cat eats food", 2),
    ]
}

#[test]
fn synthetic_trio_yields_exactly_the_accepted_example() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("challenge.jsonl");
    let source = InMemorySource::new("trio", synthetic_trio());
    let config = ChallengeConfig::new(&output)
        .with_max_per_label(10)
        .with_seed(1);

    let report = build_challenge_set(&config, &source).expect("pipeline");
    assert_eq!(report.labeled_examples, 3);
    assert_eq!(report.written, 1);

    let contents = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(lines[0]).expect("parse");
    assert_eq!(value["label"], 0);
    assert_eq!(value["premise"], "a dog sleeps");
    assert_eq!(
        value["hypothesis"],
        "a completely unrelated group of people are celebrating a festival downtown"
    );
}

#[test]
fn unlabeled_records_never_reach_the_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("challenge.jsonl");
    let hard_hypothesis =
        "a completely unrelated group of people are celebrating a festival downtown";
    // The unlabeled record would pass every heuristic; it must still be dropped.
    let records = vec![
        raw("a dog sleeps", hard_hypothesis, -1),
        raw("a bird flies", hard_hypothesis, 2),
    ];
    let source = InMemorySource::new("mixed", records);
    let config = ChallengeConfig::new(&output).with_seed(3);

    let report = build_challenge_set(&config, &source).expect("pipeline");
    assert_eq!(report.labeled_examples, 1);
    assert_eq!(report.written, 1);
    assert_eq!(
        report.found_per_label,
        vec![
            (Label::Entailment, 0),
            (Label::Neutral, 0),
            (Label::Contradiction, 1),
        ]
    );

    let contents = fs::read_to_string(&output).expect("read output");
    assert!(!contents.contains("a dog sleeps"));
}

#[test]
fn identical_seed_and_input_reproduce_identical_output_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first_path = dir.path().join("first.jsonl");
    let second_path = dir.path().join("second.jsonl");

    let hypotheses = [
        "a completely unrelated group of people are celebrating a festival downtown",
        "several strangers gather around an enormous bonfire under the evening sky",
        "many children play complicated board games inside the quiet library hall",
    ];
    let mut records = Vec::new();
    for (label, hypothesis) in [(0i64, hypotheses[0]), (1, hypotheses[1]), (2, hypotheses[2])] {
        for idx in 0..8 {
            records.push(raw(&format!("premise text {label} {idx}"), hypothesis, label));
        }
    }

    for path in [&first_path, &second_path] {
        let source = InMemorySource::new("repeat", records.clone());
        let config = ChallengeConfig::new(path).with_max_per_label(5).with_seed(42);
        build_challenge_set(&config, &source).expect("pipeline");
    }

    let first = fs::read(&first_path).expect("read first");
    let second = fs::read(&second_path).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn load_failure_produces_no_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("challenge.jsonl");
    let source = hardslice::JsonlFileSource::new(dir.path().join("missing.jsonl"));
    let config = ChallengeConfig::new(&output);

    build_challenge_set(&config, &source).expect_err("load must fail");
    assert!(!output.exists());
}
