//! Text normalization helpers shared by the heuristics.

use std::collections::HashSet;

use crate::types::Token;

/// Tokenize free text into lowercase alphanumeric words.
///
/// Lowercases the input and treats every maximal run of characters outside
/// `[a-z0-9]` as a single boundary, so punctuation never survives into a
/// token and no token is empty. Pure; empty input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Unique-token view of a text, used by the overlap scorer.
pub fn token_set(text: &str) -> HashSet<Token> {
    tokenize(text).into_iter().collect()
}
