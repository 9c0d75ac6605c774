//! Console facade: entered-text state, autocomplete, and dispatch.

use std::rc::Rc;

use devcon_index::{FuzzyIndex, PrefixIndex};
use devcon_types::clock::{Clock, MonotonicClock};

use crate::command::ConsoleCommand;
use crate::config::ConsoleConfig;
use crate::registry::CommandRegistry;
use crate::suggest::SuggestionCache;

/// The dev-console engine exposed to the host UI/input layer.
///
/// Created once at startup. All calls are synchronous; the engine is
/// driven from the host's keystroke/update loop and holds no locks. The
/// clock is injected so tests can drive the debounce window explicitly.
pub struct Terminal {
    config: ConsoleConfig,
    clock: Box<dyn Clock>,
    registry: CommandRegistry,
    prefix_index: PrefixIndex,
    fuzzy_index: FuzzyIndex,
    cache: SuggestionCache,
    is_open: bool,
    entered_message: String,
    last_keystroke_nanos: u64,
}

impl Terminal {
    /// Create a closed terminal on the real monotonic clock.
    pub fn new(config: ConsoleConfig) -> Self {
        Self::with_clock(config, Box::new(MonotonicClock::new()))
    }

    /// Create a closed terminal with an injected clock.
    pub fn with_clock(config: ConsoleConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            registry: CommandRegistry::new(),
            prefix_index: PrefixIndex::new(),
            fuzzy_index: FuzzyIndex::new(),
            cache: SuggestionCache::new(),
            is_open: false,
            entered_message: String::new(),
            last_keystroke_nanos: 0,
        }
    }

    // -- Open/closed state --

    /// Whether the terminal overlay is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open the terminal.
    pub fn set_open(&mut self) {
        self.is_open = true;
    }

    /// Close the terminal and clear the entered message.
    pub fn set_closed(&mut self) {
        self.is_open = false;
        self.entered_message.clear();
    }

    /// Toggle between open and closed.
    pub fn toggle_is_open(&mut self) {
        if self.is_open {
            self.set_closed();
        } else {
            self.set_open();
        }
    }

    // -- Entered-message editing --

    /// The current entered message. Never null; empty when cleared.
    pub fn entered_message(&self) -> &str {
        &self.entered_message
    }

    /// Replace the entered message. `None` normalizes to the empty string.
    pub fn set_entered_message(&mut self, message: Option<&str>) {
        self.entered_message = message.unwrap_or("").to_string();
        self.touch();
    }

    /// Append one character to the entered message.
    pub fn append_to_message(&mut self, ch: char) {
        self.entered_message.push(ch);
        self.touch();
    }

    /// Remove the last character, if any.
    pub fn handle_backspace(&mut self) {
        self.entered_message.pop();
        self.touch();
    }

    fn touch(&mut self) {
        self.last_keystroke_nanos = self.clock.now_nanos();
    }

    // -- Command registration --

    /// Register a command. Replaces any existing binding for the same
    /// name, rebuilds both completion indexes, and marks the suggestion
    /// cache dirty so the name shows up on the very next query.
    pub fn add_command(&mut self, name: &str, command: Box<dyn ConsoleCommand>) {
        self.registry.add(name, command);
        self.rebuild_indexes();
        self.cache.mark_dirty();
    }

    /// The owned command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Sorted (name, description) pairs for a host help listing.
    pub fn commands(&self) -> Vec<(&str, &str)> {
        self.registry.list()
    }

    // The registry is tens of entries; a full rebuild is cheaper than
    // incremental maintenance of a splittable trie. Sorted insertion
    // keeps the BK-tree shape deterministic across runs.
    fn rebuild_indexes(&mut self) {
        let mut prefix_index = PrefixIndex::new();
        let mut fuzzy_index = FuzzyIndex::new();
        for name in self.registry.names() {
            prefix_index.insert(&name);
            fuzzy_index.insert(&name);
        }
        log::debug!(
            "rebuilt completion indexes over {} commands",
            self.registry.len()
        );
        self.prefix_index = prefix_index;
        self.fuzzy_index = fuzzy_index;
    }

    // -- Autocomplete --

    /// Suggestions for the first token of the entered message.
    ///
    /// Prefix matches win; when there are none, names within the fuzzy
    /// radius are offered instead. Either tier comes back sorted
    /// ascending and capped at `max_suggestions`. Rapid repeated calls
    /// inside the debounce window with an unchanged prefix and a clean
    /// cache return the identical list (`Rc::ptr_eq` holds).
    pub fn autocomplete_suggestions(&mut self) -> Rc<Vec<String>> {
        let Some(prefix) = self.entered_message.split_whitespace().next() else {
            // Nothing typed yet; the cache is deliberately not consulted.
            return Rc::new(Vec::new());
        };
        let prefix = prefix.to_string();

        let now = self.clock.now_nanos();
        let elapsed = now.saturating_sub(self.last_keystroke_nanos);
        if elapsed < self.config.debounce_window_nanos()
            && let Some(cached) = self.cache.fresh(&prefix)
        {
            return cached;
        }

        let mut hits = self
            .prefix_index
            .suggest_top_k(&prefix, self.config.max_suggestions);
        if hits.is_empty() {
            hits = self.fuzzy_index.search(&prefix, self.config.fuzzy_radius);
            hits.sort();
            hits.truncate(self.config.max_suggestions);
        }
        self.cache.store(prefix, hits, now)
    }

    /// Replace the first token of the entered message with the top
    /// suggestion. Everything from the token's original end onward is
    /// left untouched, including runs of spaces. No-op when there are no
    /// suggestions.
    pub fn accept_top_suggestion(&mut self) {
        let suggestions = self.autocomplete_suggestions();
        let Some(top) = suggestions.first() else {
            return;
        };
        let Some(start) = self.entered_message.find(|c: char| !c.is_whitespace()) else {
            return;
        };
        let end = self.entered_message[start..]
            .find(char::is_whitespace)
            .map_or(self.entered_message.len(), |i| start + i);
        self.entered_message.replace_range(start..end, top);
    }

    // -- Dispatch --

    /// Parse and dispatch the entered message.
    ///
    /// The first whitespace-delimited token is the command name; the
    /// rest are its arguments. Returns `false` for an empty message, an
    /// unknown command (the message is kept so the user can fix the
    /// typo), or a recognized command whose action rejected its input.
    /// A recognized command always consumes the input line, even when
    /// its action reports failure.
    pub fn process_message(&mut self) -> bool {
        let line = self.entered_message.trim().to_string();
        if line.is_empty() {
            return false;
        }
        let mut tokens = line.split_whitespace();
        let name = tokens.next().expect("trimmed line is non-empty");
        let args: Vec<&str> = tokens.collect();

        let Some(command) = self.registry.lookup(name) else {
            log::debug!("unknown command: {name}");
            return false;
        };
        let accepted = command.run(&args);
        log::debug!("dispatched {name} ({} args) -> {accepted}", args.len());
        self.entered_message.clear();
        accepted
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use devcon_types::clock::ManualClock;

    use super::*;

    /// Terminal on a hand-advanced clock, plus a handle to the clock.
    fn test_terminal() -> (Terminal, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::new());
        let terminal = Terminal::with_clock(
            ConsoleConfig::default(),
            Box::new(Rc::clone(&clock)),
        );
        (terminal, clock)
    }

    fn accept(_args: &[&str]) -> bool {
        true
    }

    fn register_cheats(terminal: &mut Terminal) {
        for name in [
            "damageMultiplier",
            "deathScreen",
            "debug",
            "disableDamage",
            "doorOverride",
            "kill",
            "teleport",
        ] {
            terminal.add_command(name, Box::new(accept));
        }
    }

    // -- Open/closed state --

    #[test]
    fn starts_closed_and_empty() {
        let (terminal, _) = test_terminal();
        assert!(!terminal.is_open());
        assert_eq!(terminal.entered_message(), "");
    }

    #[test]
    fn toggle_open_and_closed() {
        let (mut terminal, _) = test_terminal();
        terminal.toggle_is_open();
        assert!(terminal.is_open());
        terminal.toggle_is_open();
        assert!(!terminal.is_open());
    }

    #[test]
    fn closing_clears_entered_message() {
        let (mut terminal, _) = test_terminal();
        terminal.set_open();
        terminal.set_entered_message(Some("kill"));
        terminal.set_closed();
        assert_eq!(terminal.entered_message(), "");
    }

    // -- Editing primitives --

    #[test]
    fn append_and_backspace() {
        let (mut terminal, _) = test_terminal();
        terminal.append_to_message('k');
        terminal.append_to_message('i');
        assert_eq!(terminal.entered_message(), "ki");
        terminal.handle_backspace();
        assert_eq!(terminal.entered_message(), "k");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let (mut terminal, _) = test_terminal();
        terminal.handle_backspace();
        assert_eq!(terminal.entered_message(), "");
    }

    #[test]
    fn none_message_normalizes_to_empty() {
        let (mut terminal, _) = test_terminal();
        terminal.set_entered_message(Some("kill"));
        terminal.set_entered_message(None);
        assert_eq!(terminal.entered_message(), "");
    }

    // -- Suggestions: prefix tier --

    #[test]
    fn prefix_suggestions_sorted_and_capped() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("d"));
        assert_eq!(
            *terminal.autocomplete_suggestions(),
            vec![
                "damageMultiplier",
                "deathScreen",
                "debug",
                "disableDamage",
                "doorOverride",
            ]
        );
    }

    #[test]
    fn narrower_prefix() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("dis"));
        assert_eq!(*terminal.autocomplete_suggestions(), vec!["disableDamage"]);
    }

    #[test]
    fn empty_message_suggests_nothing() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("   "));
        assert!(terminal.autocomplete_suggestions().is_empty());
    }

    #[test]
    fn only_first_token_is_the_prefix() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("  dis 10 20"));
        assert_eq!(*terminal.autocomplete_suggestions(), vec!["disableDamage"]);
    }

    // -- Suggestions: fuzzy fallback --

    #[test]
    fn fuzzy_fallback_when_no_prefix_match() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("koll"));
        assert_eq!(*terminal.autocomplete_suggestions(), vec!["kill"]);
    }

    #[test]
    fn fuzzy_fallback_sorted_and_capped() {
        let (mut terminal, _) = test_terminal();
        for name in ["bill", "hill", "kill", "mill", "pill", "till", "will"] {
            terminal.add_command(name, Box::new(accept));
        }
        terminal.set_entered_message(Some("fill"));
        assert_eq!(
            *terminal.autocomplete_suggestions(),
            vec!["bill", "hill", "kill", "mill", "pill"]
        );
    }

    #[test]
    fn no_match_in_either_tier() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("xyzzy"));
        assert!(terminal.autocomplete_suggestions().is_empty());
    }

    // -- Debounce and cache identity --

    #[test]
    fn rapid_repeat_returns_same_list_identity() {
        let (mut terminal, clock) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("d"));
        let first = terminal.autocomplete_suggestions();
        clock.advance_ms(5);
        let second = terminal.autocomplete_suggestions();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn elapsed_window_recomputes() {
        let (mut terminal, clock) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("d"));
        let first = terminal.autocomplete_suggestions();
        clock.advance_ms(25);
        let second = terminal.autocomplete_suggestions();
        assert_eq!(*first, *second);
    }

    #[test]
    fn registration_invalidates_within_window() {
        let (mut terminal, clock) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("d"));
        let first = terminal.autocomplete_suggestions();
        clock.advance_ms(5);
        terminal.add_command("dash", Box::new(accept));
        let second = terminal.autocomplete_suggestions();
        assert!(!Rc::ptr_eq(&first, &second));
        assert!(second.contains(&"dash".to_string()));
    }

    #[test]
    fn registration_visible_after_window() {
        let (mut terminal, clock) = test_terminal();
        terminal.add_command("kill", Box::new(accept));
        terminal.set_entered_message(Some("ki"));
        let first = terminal.autocomplete_suggestions();
        assert_eq!(*first, vec!["kill"]);
        clock.advance_ms(25);
        terminal.add_command("kick", Box::new(accept));
        let second = terminal.autocomplete_suggestions();
        assert_eq!(*second, vec!["kick", "kill"]);
    }

    #[test]
    fn prefix_change_recomputes() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("d"));
        let first = terminal.autocomplete_suggestions();
        terminal.append_to_message('e');
        let second = terminal.autocomplete_suggestions();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(*second, vec!["deathScreen", "debug"]);
    }

    // -- accept_top_suggestion --

    #[test]
    fn accept_replaces_only_first_token() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("koll   1  2"));
        terminal.accept_top_suggestion();
        assert_eq!(terminal.entered_message(), "kill   1  2");
    }

    #[test]
    fn accept_preserves_leading_whitespace() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("  koll x"));
        terminal.accept_top_suggestion();
        assert_eq!(terminal.entered_message(), "  kill x");
    }

    #[test]
    fn accept_with_single_token() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("dis"));
        terminal.accept_top_suggestion();
        assert_eq!(terminal.entered_message(), "disableDamage");
    }

    #[test]
    fn accept_without_suggestions_is_noop() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("xyzzy 1"));
        terminal.accept_top_suggestion();
        assert_eq!(terminal.entered_message(), "xyzzy 1");
    }

    // -- Dispatch --

    #[test]
    fn dispatch_passes_ordered_args_and_clears() {
        let (mut terminal, _) = test_terminal();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);
        terminal.add_command(
            "give",
            Box::new(move |args: &[&str]| {
                seen.borrow_mut().push(args.join(","));
                true
            }),
        );
        terminal.set_entered_message(Some("give sword 3"));
        assert!(terminal.process_message());
        assert_eq!(*calls.borrow(), vec!["sword,3"]);
        assert_eq!(terminal.entered_message(), "");
    }

    #[test]
    fn dispatch_collapses_whitespace_runs() {
        let (mut terminal, _) = test_terminal();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);
        terminal.add_command(
            "teleport",
            Box::new(move |args: &[&str]| {
                seen.borrow_mut().push(args.join(","));
                true
            }),
        );
        terminal.set_entered_message(Some("  teleport   1   2  3 "));
        assert!(terminal.process_message());
        assert_eq!(*calls.borrow(), vec!["1,2,3"]);
    }

    #[test]
    fn empty_message_returns_false_unchanged() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("   "));
        assert!(!terminal.process_message());
        assert_eq!(terminal.entered_message(), "   ");
    }

    #[test]
    fn unknown_command_keeps_message() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        terminal.set_entered_message(Some("unknown thing"));
        assert!(!terminal.process_message());
        assert_eq!(terminal.entered_message(), "unknown thing");
    }

    #[test]
    fn rejected_action_still_consumes_line() {
        let (mut terminal, _) = test_terminal();
        terminal.add_command("kill", Box::new(|_: &[&str]| false));
        terminal.set_entered_message(Some("kill everyone"));
        assert!(!terminal.process_message());
        assert_eq!(terminal.entered_message(), "");
    }

    #[test]
    fn reregistration_dispatches_latest_binding() {
        let (mut terminal, _) = test_terminal();
        terminal.add_command("debug", Box::new(|_: &[&str]| false));
        terminal.add_command("debug", Box::new(|_: &[&str]| true));
        assert_eq!(terminal.registry().len(), 1);
        terminal.set_entered_message(Some("debug"));
        assert!(terminal.process_message());
    }

    #[test]
    fn commands_listing_is_sorted() {
        let (mut terminal, _) = test_terminal();
        register_cheats(&mut terminal);
        let names: Vec<&str> = terminal.commands().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "damageMultiplier",
                "deathScreen",
                "debug",
                "disableDamage",
                "doorOverride",
                "kill",
                "teleport",
            ]
        );
    }
}
