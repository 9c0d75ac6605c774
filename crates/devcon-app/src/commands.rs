//! Sample cheat commands for the demo harness.
//!
//! These are the host-side collaborators the engine treats as opaque:
//! each command owns its argument parsing and mutates a shared
//! `GameState`. Malformed arguments are a `false` return, never a panic.

use std::cell::RefCell;
use std::rc::Rc;

use devcon_console::{ConsoleCommand, Terminal};

/// Mutable world state the cheat commands act on.
#[derive(Debug)]
pub struct GameState {
    pub player_pos: [f32; 3],
    pub player_alive: bool,
    pub debug_overlay: bool,
    pub doors_unlocked: bool,
    pub damage_multiplier: f32,
    pub damage_disabled: bool,
    pub death_screen_visible: bool,
    pub spawned: Vec<String>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player_pos: [0.0, 0.0, 0.0],
            player_alive: true,
            debug_overlay: false,
            doors_unlocked: false,
            damage_multiplier: 1.0,
            damage_disabled: false,
            death_screen_visible: false,
            spawned: Vec::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

type Shared = Rc<RefCell<GameState>>;

// ---------------------------------------------------------------------------
// teleport
// ---------------------------------------------------------------------------

struct TeleportCmd(Shared);
impl ConsoleCommand for TeleportCmd {
    fn description(&self) -> &str {
        "Move the player to x y z"
    }
    fn run(&self, args: &[&str]) -> bool {
        let [x, y, z] = args else {
            return false;
        };
        let (Ok(x), Ok(y), Ok(z)) = (x.parse(), y.parse(), z.parse()) else {
            return false;
        };
        self.0.borrow_mut().player_pos = [x, y, z];
        log::info!("teleported player to ({x}, {y}, {z})");
        true
    }
}

// ---------------------------------------------------------------------------
// kill
// ---------------------------------------------------------------------------

struct KillCmd(Shared);
impl ConsoleCommand for KillCmd {
    fn description(&self) -> &str {
        "Kill the player"
    }
    fn run(&self, _args: &[&str]) -> bool {
        let mut state = self.0.borrow_mut();
        state.player_alive = false;
        state.death_screen_visible = true;
        log::info!("player killed");
        true
    }
}

// ---------------------------------------------------------------------------
// spawn
// ---------------------------------------------------------------------------

struct SpawnCmd(Shared);
impl ConsoleCommand for SpawnCmd {
    fn description(&self) -> &str {
        "Spawn entities: spawn <name> [count]"
    }
    fn run(&self, args: &[&str]) -> bool {
        let (name, count) = match args {
            [name] => (*name, 1usize),
            [name, count] => match count.parse() {
                Ok(n) => (*name, n),
                Err(_) => return false,
            },
            _ => return false,
        };
        let mut state = self.0.borrow_mut();
        for _ in 0..count {
            state.spawned.push(name.to_string());
        }
        log::info!("spawned {count} x {name}");
        true
    }
}

// ---------------------------------------------------------------------------
// toggles
// ---------------------------------------------------------------------------

struct DebugCmd(Shared);
impl ConsoleCommand for DebugCmd {
    fn description(&self) -> &str {
        "Toggle the debug overlay"
    }
    fn run(&self, _args: &[&str]) -> bool {
        let mut state = self.0.borrow_mut();
        state.debug_overlay = !state.debug_overlay;
        log::info!("debug overlay: {}", state.debug_overlay);
        true
    }
}

struct DoorOverrideCmd(Shared);
impl ConsoleCommand for DoorOverrideCmd {
    fn description(&self) -> &str {
        "Toggle the lock override on all doors"
    }
    fn run(&self, _args: &[&str]) -> bool {
        let mut state = self.0.borrow_mut();
        state.doors_unlocked = !state.doors_unlocked;
        log::info!("door override: {}", state.doors_unlocked);
        true
    }
}

struct DisableDamageCmd(Shared);
impl ConsoleCommand for DisableDamageCmd {
    fn description(&self) -> &str {
        "Toggle incoming damage"
    }
    fn run(&self, _args: &[&str]) -> bool {
        let mut state = self.0.borrow_mut();
        state.damage_disabled = !state.damage_disabled;
        log::info!("damage disabled: {}", state.damage_disabled);
        true
    }
}

struct DeathScreenCmd(Shared);
impl ConsoleCommand for DeathScreenCmd {
    fn description(&self) -> &str {
        "Toggle the death screen"
    }
    fn run(&self, _args: &[&str]) -> bool {
        let mut state = self.0.borrow_mut();
        state.death_screen_visible = !state.death_screen_visible;
        log::info!("death screen: {}", state.death_screen_visible);
        true
    }
}

// ---------------------------------------------------------------------------
// damageMultiplier
// ---------------------------------------------------------------------------

struct DamageMultiplierCmd(Shared);
impl ConsoleCommand for DamageMultiplierCmd {
    fn description(&self) -> &str {
        "Set the outgoing damage multiplier"
    }
    fn run(&self, args: &[&str]) -> bool {
        let [factor] = args else {
            return false;
        };
        let Ok(factor) = factor.parse::<f32>() else {
            return false;
        };
        if !factor.is_finite() || factor < 0.0 {
            return false;
        }
        self.0.borrow_mut().damage_multiplier = factor;
        log::info!("damage multiplier: {factor}");
        true
    }
}

/// Register the full cheat command set against `state`.
pub fn register_cheat_commands(terminal: &mut Terminal, state: &Shared) {
    terminal.add_command("teleport", Box::new(TeleportCmd(Rc::clone(state))));
    terminal.add_command("kill", Box::new(KillCmd(Rc::clone(state))));
    terminal.add_command("spawn", Box::new(SpawnCmd(Rc::clone(state))));
    terminal.add_command("debug", Box::new(DebugCmd(Rc::clone(state))));
    terminal.add_command("doorOverride", Box::new(DoorOverrideCmd(Rc::clone(state))));
    terminal.add_command("disableDamage", Box::new(DisableDamageCmd(Rc::clone(state))));
    terminal.add_command("deathScreen", Box::new(DeathScreenCmd(Rc::clone(state))));
    terminal.add_command(
        "damageMultiplier",
        Box::new(DamageMultiplierCmd(Rc::clone(state))),
    );
}
