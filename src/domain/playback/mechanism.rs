//! Playback and fallback mechanism tables

use crate::domain::platform::PlatformKind;

use super::command::PlayerCommand;

/// One step of a platform's playback preference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    /// Blocking OS sound API (Windows `PlaySound`)
    NativePlay,
    /// Run the first of these players found on `PATH`; its exit status decides
    FirstAvailable(&'static [PlayerCommand]),
    /// Run this command without probing `PATH` first
    Launch(PlayerCommand),
}

impl Mechanism {
    /// Short name used in progress output
    pub fn label(&self) -> &'static str {
        match self {
            Self::NativePlay => "native playback",
            Self::FirstAvailable(_) => "command-line player",
            Self::Launch(command) => command.program,
        }
    }
}

/// One step of a platform's fallback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Windows `MessageBeep`
    MessageBeep,
    /// Speech synthesizer, only if present on `PATH`
    Speech(PlayerCommand),
    /// ASCII BEL on stdout
    TerminalBell,
}

impl Fallback {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MessageBeep => "message beep",
            Self::Speech(command) => command.program,
            Self::TerminalBell => "terminal bell",
        }
    }
}

const MACOS_PLAYERS: &[PlayerCommand] = &[
    PlayerCommand::new("afplay", &[]),
    // opens the default app, which may show a window
    PlayerCommand::new("open", &[]),
];

const LINUX_PLAYERS: &[PlayerCommand] = &[
    PlayerCommand::new("paplay", &[]),
    PlayerCommand::new("aplay", &[]),
    PlayerCommand::new("ffplay", &["-autoexit", "-nodisp"]),
    PlayerCommand::new("play", &["-q"]),
];

const WINDOWS_PLAYBACK: &[Mechanism] = &[
    Mechanism::NativePlay,
    // `start` hands the file to whatever is registered for its extension
    Mechanism::Launch(PlayerCommand::new("cmd", &["/C", "start", ""])),
];

const MACOS_PLAYBACK: &[Mechanism] = &[Mechanism::FirstAvailable(MACOS_PLAYERS)];

const LINUX_PLAYBACK: &[Mechanism] = &[Mechanism::FirstAvailable(LINUX_PLAYERS)];

const WINDOWS_FALLBACK: &[Fallback] = &[Fallback::MessageBeep];

const MACOS_FALLBACK: &[Fallback] = &[
    Fallback::Speech(PlayerCommand::new("say", &["ding"])),
    Fallback::Speech(PlayerCommand::new("say", &["-v", "Boing", "boop"])),
];

// a sound the user named that could not be played only gets the chirp
const MACOS_REQUESTED_FALLBACK: &[Fallback] = &[Fallback::Speech(PlayerCommand::new(
    "say",
    &["-v", "Boing", "boop"],
))];

const LINUX_FALLBACK: &[Fallback] = &[Fallback::TerminalBell];

/// Ordered playback mechanisms for a platform
pub const fn playback_mechanisms(platform: PlatformKind) -> &'static [Mechanism] {
    match platform {
        PlatformKind::Windows => WINDOWS_PLAYBACK,
        PlatformKind::MacOs => MACOS_PLAYBACK,
        PlatformKind::Linux => LINUX_PLAYBACK,
    }
}

/// Ordered fallback mechanisms for a platform.
///
/// `requested` is true when the sound came from the command line rather than
/// the platform defaults; macOS then skips `say ding`.
pub const fn fallback_mechanisms(platform: PlatformKind, requested: bool) -> &'static [Fallback] {
    match platform {
        PlatformKind::Windows => WINDOWS_FALLBACK,
        PlatformKind::MacOs if requested => MACOS_REQUESTED_FALLBACK,
        PlatformKind::MacOs => MACOS_FALLBACK,
        PlatformKind::Linux => LINUX_FALLBACK,
    }
}
