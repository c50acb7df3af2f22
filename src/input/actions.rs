//! Game action definitions

/// All actions the keyboard can trigger
///
/// Keyboard mapping:
/// - W/A/S/D = Move up/left/down/right
/// - Space = Fire (held fire repeats on the shoot cooldown)
/// - E = Toggle pause
/// - Escape = Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (4-way, axis independent)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Combat
    Fire,

    // Shell
    TogglePause,
    Quit,
}
