//! Application context
//!
//! Owns the loaded save document, the active screen and its buttons. The
//! driver calls `update` once per tick with that tick's events, then draws
//! `frame()`.

pub mod menu;
pub mod screen;
pub mod secret;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::MAX_NAME_LEN;
use crate::frontend::{ButtonView, Frame, InputEvent, tick_input};
use crate::persistence::{SaveDocument, SaveStore};
use crate::settings::Settings;
use crate::sim::{GameSession, SessionConfig, TickOutcome, tick};

pub use menu::{Button, hit_test, layout};
pub use screen::{Action, Screen, ScreenKind, next_screen};
pub use secret::SecretCode;

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

pub struct App {
    config: SessionConfig,
    store: SaveStore,
    doc: SaveDocument,
    screen: Screen,
    buttons: Vec<Button>,
    focus: usize,
    secret: SecretCode,
    /// Gradual speed toggle shown on the settings screen
    gradual_revealed: bool,
    /// Ticks since startup
    ticks: u64,
    /// Seeds each new session
    seeds: Pcg32,
}

impl App {
    /// Load the save document and start on the menu
    pub fn new(store: SaveStore, config: SessionConfig, seed: u64) -> Self {
        let doc = store.load();
        let mut app = Self {
            config,
            store,
            doc,
            screen: Screen::Menu,
            buttons: Vec::new(),
            focus: 0,
            secret: SecretCode::default(),
            gradual_revealed: false,
            ticks: 0,
            seeds: Pcg32::seed_from_u64(seed),
        };
        app.relayout();
        app
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.doc.settings
    }

    pub fn document(&self) -> &SaveDocument {
        &self.doc
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Advance one tick with the events polled for it
    pub fn update(&mut self, events: &[InputEvent]) -> AppControl {
        self.ticks += 1;

        if events.contains(&InputEvent::Quit) {
            if let Screen::Playing(session) = &self.screen {
                log::info!("Quit during session, score {} discarded", session.score);
            }
            log::info!("Quit requested");
            return AppControl::Exit;
        }

        if let Screen::Playing(session) = &mut self.screen {
            let outcome = tick(session, &tick_input(events));
            return match outcome {
                TickOutcome::Running => AppControl::Continue,
                TickOutcome::Aborted => self.apply(Action::SessionAborted),
                TickOutcome::Finished(score) => self.apply(Action::SessionFinished(score)),
            };
        }

        for event in events {
            let before = self.screen.kind();
            let control = self.handle_event(*event);
            if control == AppControl::Exit {
                return control;
            }
            // Later events belong to the old screen; drop them
            if self.screen.kind() != before {
                break;
            }
        }
        AppControl::Continue
    }

    fn handle_event(&mut self, event: InputEvent) -> AppControl {
        match event {
            InputEvent::Cancel => self.apply(Action::Cancel),
            InputEvent::Confirm => match self.buttons.get(self.focus).map(|b| b.action) {
                Some(action) => self.apply(action),
                None => AppControl::Continue,
            },
            InputEvent::Click(point) => match hit_test(&self.buttons, point) {
                Some(action) => self.apply(action),
                None => AppControl::Continue,
            },
            InputEvent::FocusNext => {
                if !self.buttons.is_empty() {
                    self.focus = (self.focus + 1) % self.buttons.len();
                }
                AppControl::Continue
            }
            InputEvent::FocusPrev => {
                if !self.buttons.is_empty() {
                    self.focus = (self.focus + self.buttons.len() - 1) % self.buttons.len();
                }
                AppControl::Continue
            }
            InputEvent::Text(ch) => {
                self.handle_text(ch);
                AppControl::Continue
            }
            InputEvent::Backspace => {
                if let Screen::NameEntry { name, .. } = &mut self.screen {
                    name.pop();
                }
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }

    fn handle_text(&mut self, ch: char) {
        if let Screen::NameEntry { name, .. } = &mut self.screen {
            if !ch.is_control() && name.chars().count() < MAX_NAME_LEN {
                name.push(ch);
            }
            return;
        }

        if self.screen.kind() == ScreenKind::Settings
            && self.secret.feed(ch, self.ticks)
            && !self.gradual_revealed
        {
            log::info!("Gradual speed toggle unlocked");
            self.gradual_revealed = true;
            self.relayout();
        }
    }

    /// Run an action through the transition table and apply its effects
    pub fn apply(&mut self, action: Action) -> AppControl {
        if action == Action::Quit {
            log::info!("Quit requested");
            return AppControl::Exit;
        }

        let from = self.screen.kind();
        let Some(to) = next_screen(from, action) else {
            log::debug!("Ignored {:?} on {:?}", action, from);
            return AppControl::Continue;
        };

        let previous = std::mem::replace(&mut self.screen, Screen::Menu);
        let next = match (action, previous) {
            (Action::Play, _) => Screen::Playing(Box::new(self.new_session())),
            (Action::SessionFinished(score), Screen::Playing(session)) => Screen::NameEntry {
                score,
                difficulty: session.difficulty,
                name: String::new(),
            },
            (Action::SubmitName, Screen::NameEntry { score, difficulty, name }) => {
                let rank = self.doc.leaderboards.insert(difficulty, &name, score);
                self.persist();
                Screen::Leaderboard {
                    tier: difficulty,
                    highlight: rank,
                }
            }
            (Action::SkipName | Action::Cancel, Screen::NameEntry { difficulty, .. }) => {
                Screen::Leaderboard {
                    tier: difficulty,
                    highlight: None,
                }
            }
            (Action::OpenLeaderboard, _) => Screen::Leaderboard {
                tier: self.doc.settings.difficulty,
                highlight: None,
            },
            (Action::ShowTier(tier), _) => Screen::Leaderboard {
                tier,
                highlight: None,
            },
            (Action::OpenSettings, _) => {
                self.secret.reset();
                Screen::Settings
            }
            (Action::SelectDifficulty(tier), previous) => {
                if self.doc.settings.set_difficulty(tier) {
                    log::info!("Difficulty set to {}", tier.as_str());
                    self.persist();
                }
                previous
            }
            (Action::ClearScores, previous) => {
                self.doc.leaderboards.clear(self.doc.settings.difficulty);
                self.persist();
                previous
            }
            (Action::ToggleGradualSpeed, previous) => {
                self.doc.settings.toggle_gradual_speed();
                log::info!("Gradual speed {}", self.doc.settings.gradual_speed);
                self.persist();
                previous
            }
            // Back, Cancel and SessionAborted all land on the menu
            _ => Screen::Menu,
        };
        debug_assert_eq!(next.kind(), to);

        if from != to {
            log::info!("Screen {:?} -> {:?}", from, to);
            self.focus = 0;
        }
        self.screen = next;
        self.relayout();
        AppControl::Continue
    }

    fn new_session(&mut self) -> GameSession {
        let settings = &self.doc.settings;
        GameSession::new(
            self.config.clone(),
            settings.difficulty,
            settings.gradual_speed,
            self.seeds.random(),
        )
    }

    fn relayout(&mut self) {
        let gradual = self
            .gradual_revealed
            .then_some(self.doc.settings.gradual_speed);
        self.buttons = layout(
            &self.screen,
            &self.config.viewport(),
            self.doc.settings.difficulty,
            gradual,
        );
        if self.focus >= self.buttons.len() {
            self.focus = 0;
        }
    }

    /// Save synchronously; failures are logged and otherwise ignored
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.doc) {
            log::warn!("Failed to save to {}: {}", self.store.path().display(), e);
        }
    }

    /// Snapshot of the current screen for rendering
    pub fn frame(&self) -> Frame {
        let buttons: Vec<ButtonView> = self
            .buttons
            .iter()
            .enumerate()
            .map(|(i, b)| ButtonView {
                region: b.region,
                label: b.label.clone(),
                focused: i == self.focus,
            })
            .collect();
        let settings = &self.doc.settings;

        match &self.screen {
            Screen::Menu => Frame::Menu {
                difficulty: settings.difficulty,
                buttons,
            },
            Screen::Playing(session) => Frame::Playing {
                player: session.player.rect(),
                platforms: session.platform_rects(),
                gaps: session.platforms.iter().map(|p| p.gap_rect()).collect(),
                score: session.score,
                difficulty: session.difficulty,
                game_over: session.is_game_over(),
            },
            Screen::NameEntry {
                score,
                difficulty,
                name,
            } => Frame::NameEntry {
                score: *score,
                difficulty: *difficulty,
                name: name.clone(),
                rank: self.doc.leaderboards.get(*difficulty).potential_rank(*score),
                buttons,
            },
            Screen::Leaderboard { tier, highlight } => Frame::Leaderboard {
                tier: *tier,
                entries: self.doc.leaderboards.get(*tier).entries.clone(),
                highlight: highlight.map(|rank| rank - 1),
                buttons,
            },
            Screen::Settings => Frame::Settings {
                difficulty: settings.difficulty,
                gradual_speed: self.gradual_revealed.then_some(settings.gradual_speed),
                buttons,
            },
        }
    }
}
