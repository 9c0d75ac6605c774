//! Dev-console command autocomplete and dispatch engine.
//!
//! The console is a registry-based dispatch system with hybrid completion.
//! Commands implement the `ConsoleCommand` trait and are registered by
//! name; the `Terminal` facade owns the entered-text state, answers
//! autocomplete queries from a prefix trie with a BK-tree fuzzy fallback,
//! and dispatches entered lines against the registry. The host UI layer
//! (overlay rendering, key capture) and the business logic of individual
//! commands live outside this crate.

mod command;
mod config;
mod registry;
mod suggest;
mod terminal;

/// A single console command action.
pub use command::ConsoleCommand;
/// Tunables for suggestion count, fuzzy radius, and debounce window.
pub use config::ConsoleConfig;
/// Name -> command bindings with replace-on-add semantics.
pub use registry::CommandRegistry;
/// Debounced memo of the last computed suggestion list.
pub use suggest::SuggestionCache;
/// Console facade: entered-text state, autocomplete, and dispatch.
pub use terminal::Terminal;
