use super::EffectCore;

/// Host commands, queued by key events and applied at the start of a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Clear,
    ToggleView,
    TogglePause,
}

impl Command {
    /// Key binding table. Letter keys are case-insensitive.
    pub fn from_key(key: &str) -> Option<Command> {
        match key {
            "Escape" | "Esc" => return Some(Command::Quit),
            " " | "Space" | "Spacebar" => return Some(Command::TogglePause),
            _ => {}
        }
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match c.to_ascii_lowercase() {
            'q' => Some(Command::Quit),
            'c' => Some(Command::Clear),
            'v' => Some(Command::ToggleView),
            _ => None,
        }
    }
}

pub(super) fn queue_command(effect: &mut EffectCore, command: Command) {
    effect.pending_commands.push(command);
}

pub(super) fn handle_key(effect: &mut EffectCore, key: &str) -> bool {
    match Command::from_key(key) {
        Some(command) => {
            queue_command(effect, command);
            true
        }
        None => false,
    }
}

/// Apply queued commands in arrival order. Commands after a Quit are dropped.
pub(super) fn apply_commands(effect: &mut EffectCore) {
    let mut pending = std::mem::take(&mut effect.pending_commands);
    for command in pending.drain(..) {
        if !effect.running {
            break;
        }
        apply(effect, command);
    }
    // Hand the allocation back
    effect.pending_commands = pending;
}

fn apply(effect: &mut EffectCore, command: Command) {
    match command {
        Command::Quit => {
            effect.running = false;
            log::info!("quit at frame {}", effect.frame);
        }
        Command::Clear => clear(effect),
        Command::ToggleView => {
            effect.view = effect.view.toggled();
            log::debug!("view -> {:?}", effect.view);
        }
        Command::TogglePause => {
            effect.paused = !effect.paused;
            log::debug!("paused = {}", effect.paused);
        }
    }
}

/// Remove every particle. Hue and rate limits are kept.
fn clear(effect: &mut EffectCore) {
    let removed = effect.grid.occupied_count();
    effect.grid.reset();
    log::info!("cleared {} particles", removed);
}
