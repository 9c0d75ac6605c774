//! Completion indexes for the dev console.
//!
//! Two complementary structures back command-name autocomplete: a compressed
//! radix trie for exact-prefix completion and a BK-tree for edit-distance
//! fallback when nothing matches the typed prefix. Both are rebuilt from the
//! command registry whenever a command is registered; the registry is small
//! (tens of entries), so full rebuilds are cheap.

mod fuzzy;
mod prefix;

/// BK-tree fuzzy index over Levenshtein distance.
pub use fuzzy::FuzzyIndex;
/// Levenshtein edit distance between two strings.
pub use fuzzy::levenshtein;
/// Compressed radix trie for exact-prefix completion.
pub use prefix::PrefixIndex;
