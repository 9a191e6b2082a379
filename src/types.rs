/// Lowercase alphanumeric token produced by the tokenizer.
/// Examples: `dog`, `n95`, `downtown`
pub type Token = String;
/// Identifier for the source that produced a record.
/// Examples: `snli`, `snli_train.jsonl`, `memory`
pub type SourceId = String;
/// Premise/hypothesis sentence text as read from a source.
/// Example: `A man inspects the uniform of a figure in some East Asian country.`
pub type Sentence = String;
