//! BK-tree fuzzy index over Levenshtein edit distance.
//!
//! Each node stores a word and buckets its children by their edit distance
//! to that word. Search exploits the triangle inequality: if the query is
//! at distance `d` from a node, any word within `max` of the query lies in
//! a child bucket keyed between `d - max` and `d + max`, so all other
//! buckets are skipped. With a registry of tens of names a query touches a
//! handful of nodes.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Levenshtein edit distance: minimum number of single-character
/// insertions, deletions, and substitutions (unit cost each) transforming
/// `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            let delete = prev[j + 1] + 1;
            let insert = curr[j] + 1;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[derive(Debug)]
struct BkNode {
    word: String,
    children: BTreeMap<usize, BkNode>,
}

impl BkNode {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            children: BTreeMap::new(),
        }
    }
}

/// Approximate-match index over registered command names.
///
/// Results carry no ordering guarantee; the consumer sorts and caps them.
#[derive(Debug, Default)]
pub struct FuzzyIndex {
    root: Option<BkNode>,
    len: usize,
}

impl FuzzyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a word. The first word becomes the root; duplicates and
    /// empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let Some(root) = self.root.as_mut() else {
            self.root = Some(BkNode::new(word));
            self.len = 1;
            return;
        };
        let mut node = root;
        loop {
            let d = levenshtein(word, &node.word);
            if d == 0 {
                return;
            }
            match node.children.entry(d) {
                Entry::Occupied(slot) => node = slot.into_mut(),
                Entry::Vacant(slot) => {
                    slot.insert(BkNode::new(word));
                    self.len += 1;
                    return;
                },
            }
        }
    }

    /// All indexed words within `max_distance` edits of `target`.
    pub fn search(&self, target: &str, max_distance: usize) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            search_node(root, target, max_distance, &mut out);
        }
        out
    }
}

fn search_node(node: &BkNode, target: &str, max: usize, out: &mut Vec<String>) {
    let d = levenshtein(target, &node.word);
    if d <= max {
        out.push(node.word.clone());
    }
    // Triangle inequality: a bucket keyed outside [d - max, d + max]
    // cannot contain a word within `max` of the target.
    let lo = d.saturating_sub(max);
    let hi = d + max;
    for child in node.children.range(lo..=hi).map(|(_, c)| c) {
        search_node(child, target, max, out);
    }
}
