//! Debounced memo of the last computed suggestion list.

use std::rc::Rc;

/// Cache of the most recent autocomplete result.
///
/// The result is held behind an `Rc` and handed out by clone, so a cache
/// hit returns the same list identity as the previous call; callers detect
/// "nothing changed" with `Rc::ptr_eq` instead of comparing contents.
///
/// The dirty flag is set whenever a command is registered and cleared only
/// by `store`, so a registration between two otherwise-identical queries
/// always forces a recomputation.
pub struct SuggestionCache {
    last_prefix: String,
    last_computed_at_nanos: u64,
    last_result: Rc<Vec<String>>,
    dirty: bool,
}

impl SuggestionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            last_prefix: String::new(),
            last_computed_at_nanos: 0,
            last_result: Rc::new(Vec::new()),
            dirty: false,
        }
    }

    /// Mark the cached result stale. The next `fresh` call misses.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether a recomputation is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// When the cached result was computed.
    pub fn last_computed_at_nanos(&self) -> u64 {
        self.last_computed_at_nanos
    }

    /// The cached result for `prefix`, if it is still valid.
    pub fn fresh(&self, prefix: &str) -> Option<Rc<Vec<String>>> {
        if !self.dirty && prefix == self.last_prefix {
            Some(Rc::clone(&self.last_result))
        } else {
            None
        }
    }

    /// Replace the cached result and clear the dirty flag.
    pub fn store(&mut self, prefix: String, result: Vec<String>, now_nanos: u64) -> Rc<Vec<String>> {
        self.last_prefix = prefix;
        self.last_result = Rc::new(result);
        self.last_computed_at_nanos = now_nanos;
        self.dirty = false;
        Rc::clone(&self.last_result)
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new()
    }
}
