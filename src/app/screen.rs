//! Screen state machine
//!
//! `next_screen` is the whole transition table. The `App` applies side
//! effects (sessions, persistence) once a transition is accepted.

use crate::difficulty::Difficulty;
use crate::sim::GameSession;

/// Screen tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Menu,
    Playing,
    NameEntry,
    Leaderboard,
    Settings,
}

/// The active screen and the data it owns
#[derive(Debug, Clone)]
pub enum Screen {
    Menu,
    Playing(Box<GameSession>),
    NameEntry {
        score: u32,
        difficulty: Difficulty,
        name: String,
    },
    Leaderboard {
        tier: Difficulty,
        /// 1-indexed rank of the entry just submitted
        highlight: Option<usize>,
    },
    Settings,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Menu => ScreenKind::Menu,
            Screen::Playing(_) => ScreenKind::Playing,
            Screen::NameEntry { .. } => ScreenKind::NameEntry,
            Screen::Leaderboard { .. } => ScreenKind::Leaderboard,
            Screen::Settings => ScreenKind::Settings,
        }
    }
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play,
    OpenLeaderboard,
    OpenSettings,
    Back,
    Cancel,
    Quit,
    SessionAborted,
    SessionFinished(u32),
    SubmitName,
    SkipName,
    ShowTier(Difficulty),
    SelectDifficulty(Difficulty),
    ClearScores,
    ToggleGradualSpeed,
}

/// Get next screen for a given action (None if the action does nothing here).
///
/// `Quit` is handled before the table: it leaves the application from
/// any screen.
pub fn next_screen(from: ScreenKind, action: Action) -> Option<ScreenKind> {
    use Action::*;
    use ScreenKind as S;

    match (from, action) {
        // From Menu
        (S::Menu, Play) => Some(S::Playing),
        (S::Menu, OpenLeaderboard) => Some(S::Leaderboard),
        (S::Menu, OpenSettings) => Some(S::Settings),

        // From Playing
        (S::Playing, SessionAborted) => Some(S::Menu),
        (S::Playing, SessionFinished(_)) => Some(S::NameEntry),

        // From NameEntry (cancel skips saving but still shows the boards)
        (S::NameEntry, SubmitName) => Some(S::Leaderboard),
        (S::NameEntry, SkipName | Cancel) => Some(S::Leaderboard),

        // From Leaderboard
        (S::Leaderboard, Play) => Some(S::Playing),
        (S::Leaderboard, ShowTier(_)) => Some(S::Leaderboard),
        (S::Leaderboard, Back | Cancel) => Some(S::Menu),

        // From Settings
        (S::Settings, SelectDifficulty(_) | ClearScores | ToggleGradualSpeed) => {
            Some(S::Settings)
        }
        (S::Settings, Back | Cancel) => Some(S::Menu),

        // Invalid transition
        _ => None,
    }
}
