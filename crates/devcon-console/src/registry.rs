//! Name -> command bindings.

use std::collections::HashMap;

use crate::command::ConsoleCommand;

/// Registry of available commands.
///
/// Names are case-sensitive unique keys. The registry is the source of
/// truth for (re)indexing: the `Terminal` rebuilds both completion indexes
/// from `names()` whenever a binding is added.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn ConsoleCommand>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Bind `name` to `command`. Replaces any existing binding for the
    /// same name without growing the registry.
    pub fn add(&mut self, name: &str, command: Box<dyn ConsoleCommand>) {
        if self.commands.insert(name.to_string(), command).is_some() {
            log::debug!("replaced command binding: {name}");
        }
    }

    /// Look up a command by exact name.
    pub fn lookup(&self, name: &str) -> Option<&dyn ConsoleCommand> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All registered names, sorted ascending.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted (name, description) pairs for a host help listing.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .iter()
            .map(|(name, cmd)| (name.as_str(), cmd.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
