/// Constants used by the hard-example heuristics.
pub mod heuristics {
    /// Negation vocabulary checked against hypothesis tokens (post-tokenization,
    /// so membership is effectively case-insensitive).
    ///
    /// The apostrophe-bearing entries (`n't`, `can't`, `don't`) can never be
    /// produced by the tokenizer, which maps `'` to a token boundary. They are
    /// kept verbatim to match the published vocabulary rather than silently
    /// dropped; `cant` and `dont` cover the stripped contraction forms.
    pub const NEGATION_WORDS: [&str; 14] = [
        "not", "no", "never", "none", "nobody", "nothing", "nowhere", "neither", "nor", "n't",
        "cant", "can't", "dont", "don't",
    ];

    /// Hypothesis token count must be strictly greater than this.
    pub const MIN_HYPOTHESIS_TOKENS: usize = 10;
    /// Premise/hypothesis Jaccard overlap must be strictly below this.
    pub const MAX_LEXICAL_OVERLAP: f64 = 0.2;
}

/// Constants used by stratified sampling defaults.
pub mod sampler {
    /// Default cap on retained examples per gold label.
    pub const DEFAULT_MAX_PER_LABEL: usize = 5000;
    /// Default RNG seed controlling both shuffle phases.
    pub const DEFAULT_SEED: u64 = 42;
}

/// Constants used by source implementations.
pub mod source {
    /// Sentinel label value marking an example as unlabeled.
    pub const UNLABELED_SENTINEL: i64 = -1;
    /// Canonical split name consumed by the pipeline.
    pub const TRAIN_SPLIT: &str = "train";
}

/// Constants used by the Hugging Face hub source.
#[cfg(feature = "huggingface")]
pub mod huggingface {
    /// Dataset repository holding the SNLI parquet export.
    pub const SNLI_DATASET_ID: &str = "stanfordnlp/snli";
    /// Train-split parquet shards within the dataset repository.
    pub const SNLI_TRAIN_SHARDS: [&str; 1] = ["plain_text/train-00000-of-00001.parquet"];
    /// Column names expected in each shard.
    pub const COLUMN_PREMISE: &str = "premise";
    /// Hypothesis column name.
    pub const COLUMN_HYPOTHESIS: &str = "hypothesis";
    /// Gold label column name.
    pub const COLUMN_LABEL: &str = "label";
}
