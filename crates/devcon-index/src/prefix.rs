//! Compressed radix trie for exact-prefix completion.
//!
//! Edges carry multi-character labels and are split lazily on insert, so a
//! registry of camelCase command names ("damageMultiplier", "deathScreen")
//! stays shallow. Children are keyed by the first character of their edge
//! label in a `BTreeMap`, which makes an in-order walk emit words in
//! lexicographic order and lets `suggest_top_k` stop as soon as it has
//! enough results.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<char, Edge>,
    terminal: bool,
}

#[derive(Debug)]
struct Edge {
    label: String,
    node: Node,
}

/// Prefix-completion index over registered command names.
///
/// Matching is case-sensitive: `suggestTopK` is a literal
/// substring-from-start test, not a case-folded one.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: Node,
    len: usize,
}

impl PrefixIndex {
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

    /// Insert a word. Duplicates are ignored; empty words are rejected.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        if insert_into(&mut self.root, word) {
            self.len += 1;
        }
    }

    /// Whether `word` was inserted exactly (not merely as a prefix).
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        let mut rest = word;
        while let Some(first) = rest.chars().next() {
            let Some(edge) = node.children.get(&first) else {
                return false;
            };
            let Some(tail) = rest.strip_prefix(edge.label.as_str()) else {
                return false;
            };
            node = &edge.node;
            rest = tail;
        }
        node.terminal
    }

    /// All indexed words starting with `prefix`, lexicographically
    /// ascending, truncated to the first `k`.
    ///
    /// An empty or all-whitespace prefix matches nothing.
    pub fn suggest_top_k(&self, prefix: &str, k: usize) -> Vec<String> {
        let mut out = Vec::new();
        if k == 0 || prefix.trim().is_empty() {
            return out;
        }

        // Descend to the subtree covering the prefix.
        let mut node = &self.root;
        let mut matched = String::new();
        let mut rest = prefix;
        while let Some(first) = rest.chars().next() {
            let Some(edge) = node.children.get(&first) else {
                return out;
            };
            let shared = common_prefix_len(&edge.label, rest);
            if shared == rest.len() {
                // Prefix ends at or inside this edge; the whole subtree
                // below it matches.
                matched.push_str(&edge.label);
                node = &edge.node;
                rest = "";
                break;
            }
            if shared < edge.label.len() {
                // Diverged mid-edge: nothing matches.
                return out;
            }
            matched.push_str(&edge.label);
            node = &edge.node;
            rest = &rest[shared..];
        }
        debug_assert!(rest.is_empty());

        collect(node, &mut matched, &mut out, k);
        out
    }
}

/// Insert `rest` below `node`, returning true if a new word was added.
fn insert_into(node: &mut Node, rest: &str) -> bool {
    let Some(first) = rest.chars().next() else {
        return false;
    };
    let Some(edge) = node.children.get_mut(&first) else {
        node.children.insert(
            first,
            Edge {
                label: rest.to_string(),
                node: Node {
                    terminal: true,
                    ..Node::default()
                },
            },
        );
        return true;
    };

    let shared = common_prefix_len(&edge.label, rest);
    if shared == edge.label.len() {
        if shared == rest.len() {
            let was_terminal = edge.node.terminal;
            edge.node.terminal = true;
            return !was_terminal;
        }
        return insert_into(&mut edge.node, &rest[shared..]);
    }

    // Diverged inside the edge label: split the edge at the fork point.
    let tail = edge.label.split_off(shared);
    let tail_first = tail.chars().next().expect("split point is interior");
    let old_child = std::mem::take(&mut edge.node);
    edge.node.children.insert(
        tail_first,
        Edge {
            label: tail,
            node: old_child,
        },
    );
    if shared == rest.len() {
        edge.node.terminal = true;
    } else {
        let rest_tail = &rest[shared..];
        let rest_first = rest_tail
            .chars()
            .next()
            .expect("rest extends past fork point");
        edge.node.children.insert(
            rest_first,
            Edge {
                label: rest_tail.to_string(),
                node: Node {
                    terminal: true,
                    ..Node::default()
                },
            },
        );
    }
    true
}

/// Byte length of the common prefix of `a` and `b`, on char boundaries.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, ca), cb)| ca == cb)
        .last()
        .map(|((i, ca), _)| i + ca.len_utf8())
        .unwrap_or(0)
}

/// In-order walk below `node`; returns true once `out` holds `k` words.
fn collect(node: &Node, path: &mut String, out: &mut Vec<String>, k: usize) -> bool {
    if node.terminal {
        out.push(path.clone());
        if out.len() == k {
            return true;
        }
    }
    // A node's own word is a prefix of every word below it, so it sorts
    // first; children keyed by first char come out in ascending order.
    for edge in node.children.values() {
        path.push_str(&edge.label);
        let done = collect(&edge.node, path, out, k);
        path.truncate(path.len() - edge.label.len());
        if done {
            return true;
        }
    }
    false
}
