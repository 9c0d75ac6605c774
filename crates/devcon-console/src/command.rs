//! The command capability registered with the console.

/// A single console command action.
///
/// `run` receives the whitespace-split arguments (everything after the
/// command name, in order) and reports whether the action was accepted.
/// A `false` return means the action rejected its input (bad argument
/// count, unparsable number); it is not an error condition for the
/// dispatcher. Argument validation is entirely the command's concern.
pub trait ConsoleCommand {
    /// One-line description for help listings.
    fn description(&self) -> &str {
        ""
    }

    /// Execute the command with the given arguments.
    fn run(&self, args: &[&str]) -> bool;
}

// Plain closures work as commands, which keeps simple host bindings and
// tests free of one-off structs.
impl<F> ConsoleCommand for F
where
    F: Fn(&[&str]) -> bool,
{
    fn run(&self, args: &[&str]) -> bool {
        self(args)
    }
}
