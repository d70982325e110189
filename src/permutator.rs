//! Word permutation generation.
//!
//! Builds the set of distinct character permutations of a single word,
//! capped at [`MAX_PERMUTATIONS`] entries to bound memory use.

use std::sync::Arc;

use ahash::AHashSet;
use regex::Regex;

use crate::error::{Result, WordpermError};

/// Default cap on the number of generated permutations (10!).
///
/// Bounds memory for inputs whose raw factorial would be intractable: a word
/// of 11 distinct characters has 39,916,800 permutations, truncated to 10!.
pub const MAX_PERMUTATIONS: usize = 3_628_800;

/// The set of distinct permutations of a word.
///
/// Unordered and deduplicated; equality is by character-sequence content.
pub type PermutationSet = AHashSet<String>;

/// Configuration for permutation generation.
#[derive(Debug, Clone)]
pub struct PermutationConfig {
    /// Maximum number of permutations to generate.
    pub max_permutations: usize,
}

impl Default for PermutationConfig {
    fn default() -> Self {
        PermutationConfig {
            max_permutations: MAX_PERMUTATIONS,
        }
    }
}

/// Engine that generates the distinct character permutations of a word.
///
/// The input must be a single word. Any whitespace character anywhere in the
/// input is rejected with [`WordpermError::MultiWordInput`] before any
/// permutation work begins.
#[derive(Clone, Debug)]
pub struct PermutationEngine {
    /// Matches any whitespace character, marking multi-word input
    whitespace: Arc<Regex>,
    config: PermutationConfig,
}

impl PermutationEngine {
    /// Create a new engine with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(PermutationConfig::default())
    }

    /// Create a new engine with a custom configuration.
    pub fn with_config(config: PermutationConfig) -> Result<Self> {
        if config.max_permutations == 0 {
            return Err(WordpermError::invalid_config(
                "max_permutations must be greater than zero",
            ));
        }

        let whitespace = Regex::new(r"\s")
            .map_err(|e| WordpermError::invalid_config(format!("Invalid regex pattern: {e}")))?;

        Ok(PermutationEngine {
            whitespace: Arc::new(whitespace),
            config,
        })
    }

    /// Get the configuration used by this engine.
    pub fn config(&self) -> &PermutationConfig {
        &self.config
    }

    /// Generate the set of distinct permutations of `word`.
    ///
    /// `None` and the empty string both permute to the empty set. A word of
    /// `n` distinct characters yields `n!` permutations; repeated characters
    /// collapse to the multinomial count. The result is truncated once it
    /// reaches the configured cap, in which case only the cardinality is
    /// meaningful, not which permutations survive.
    pub fn permute(&self, word: Option<&str>) -> Result<PermutationSet> {
        let word = match word {
            Some(word) if !word.is_empty() => word,
            _ => return Ok(PermutationSet::new()),
        };

        if self.whitespace.is_match(word) {
            return Err(WordpermError::multi_word(word));
        }

        let chars: Vec<char> = word.chars().collect();
        Ok(self.permutations_of(&chars))
    }

    /// Recursively build the permutation set of `chars`.
    ///
    /// Permutes everything before the last character, then reinserts that
    /// character at every position of every sub-permutation. Set semantics
    /// deduplicate the candidates, which is what collapses repeated-character
    /// words to their multinomial count.
    fn permutations_of(&self, chars: &[char]) -> PermutationSet {
        let mut permutations = PermutationSet::new();

        let Some((&last, prefix)) = chars.split_last() else {
            return permutations;
        };

        if prefix.is_empty() {
            permutations.insert(last.to_string());
            return permutations;
        }

        for permutation in self.permutations_of(prefix) {
            let perm_chars: Vec<char> = permutation.chars().collect();

            for position in 0..=perm_chars.len() {
                // Candidates past the cap are dropped; the ones already in
                // the set are retained.
                if permutations.len() < self.config.max_permutations {
                    let mut candidate = perm_chars.clone();
                    candidate.insert(position, last);
                    permutations.insert(candidate.into_iter().collect());
                }
            }
        }

        permutations
    }
}

impl Default for PermutationEngine {
    fn default() -> Self {
        Self::new().expect("Default configuration should be valid")
    }
}

/// Generate the distinct permutations of `word` with a default engine.
///
/// Convenience wrapper around [`PermutationEngine::permute`].
pub fn permute(word: Option<&str>) -> Result<PermutationSet> {
    PermutationEngine::new()?.permute(word)
}
