//! Vertical Descent entry point
//!
//! Runs the game headless: a scripted autopilot supplies input and a
//! logging sink stands in for the renderer. The loop is paced at the fixed
//! tick rate.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use vertical_descent::consts::*;
use vertical_descent::frontend::{Frame, InputEvent, InputSource, RenderSink};
use vertical_descent::sim::{Rect, SessionConfig};
use vertical_descent::{App, AppControl, SaveStore};

/// Sessions the autopilot plays before quitting
const DEMO_SESSIONS: u32 = 1;
/// Autopilot lets go of the controls after this many ticks in a session
const AUTOPILOT_MAX_TICKS: u32 = 60 * TICK_RATE;
/// Ticks spent looking at the leaderboard before moving on
const LEADERBOARD_LINGER_TICKS: u32 = 2 * TICK_RATE;

/// Plays the game from the frames it is shown
#[derive(Default)]
struct Autopilot {
    last_frame: Option<Frame>,
    sessions_played: u32,
    session_ticks: u32,
    screen_ticks: u32,
    last_score: u32,
}

impl Autopilot {
    /// Steer toward the gap of the next platform below the player
    fn steer(player: &Rect, gaps: &[Rect]) -> Option<InputEvent> {
        let target = gaps
            .iter()
            .filter(|gap| gap.top() >= player.bottom() - 1.0)
            .min_by(|a, b| a.top().total_cmp(&b.top()))?;

        let center = player.left() + player.size.x / 2.0;
        let gap_center = target.left() + target.size.x / 2.0;
        let slack = (target.size.x - player.size.x) / 4.0;
        if center < gap_center - slack {
            Some(InputEvent::MoveRight)
        } else if center > gap_center + slack {
            Some(InputEvent::MoveLeft)
        } else {
            None
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> Vec<InputEvent> {
        let Some(frame) = &self.last_frame else {
            return Vec::new();
        };
        self.screen_ticks += 1;

        match frame {
            Frame::Menu { .. } => {
                let on_play = frame
                    .buttons()
                    .iter()
                    .any(|b| b.focused && b.label == "Play");
                if self.sessions_played >= DEMO_SESSIONS {
                    vec![InputEvent::Quit]
                } else if on_play {
                    vec![InputEvent::Confirm]
                } else {
                    vec![InputEvent::FocusNext]
                }
            }
            Frame::Playing {
                player,
                gaps,
                game_over,
                ..
            } => {
                self.session_ticks += 1;
                if *game_over || self.session_ticks > AUTOPILOT_MAX_TICKS {
                    return Vec::new();
                }
                Self::steer(player, gaps).into_iter().collect()
            }
            Frame::NameEntry { name, .. } => {
                if name.is_empty() {
                    "BOT".chars().map(InputEvent::Text).collect()
                } else {
                    vec![InputEvent::Confirm]
                }
            }
            Frame::Leaderboard { .. } | Frame::Settings { .. } => {
                if self.screen_ticks > LEADERBOARD_LINGER_TICKS {
                    vec![InputEvent::Cancel]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

impl RenderSink for Autopilot {
    fn present(&mut self, frame: &Frame) {
        let changed = self
            .last_frame
            .as_ref()
            .is_none_or(|last| std::mem::discriminant(last) != std::mem::discriminant(frame));

        if changed {
            self.screen_ticks = 0;
            match frame {
                Frame::Playing { difficulty, .. } => {
                    self.session_ticks = 0;
                    self.last_score = 0;
                    log::info!("Playing on {}", difficulty.as_str());
                }
                Frame::NameEntry { score, rank, .. } => {
                    self.sessions_played += 1;
                    match rank {
                        Some(rank) => log::info!("Game over: {} (new #{} score)", score, rank),
                        None => log::info!("Game over: {}", score),
                    }
                }
                Frame::Leaderboard { tier, entries, .. } => {
                    log::info!("{} leaderboard:", tier.as_str());
                    for (i, entry) in entries.iter().enumerate() {
                        log::info!("  {}. {} - {}", i + 1, entry.name, entry.score);
                    }
                }
                _ => {}
            }
        }

        if let Frame::Playing { score, .. } = frame {
            if *score != self.last_score {
                log::debug!("Score: {}", score);
                self.last_score = *score;
            }
        }

        self.last_frame = Some(frame.clone());
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let store = SaveStore::from_env();
    log::info!("Vertical Descent starting (save: {})", store.path().display());

    let mut app = App::new(store, SessionConfig::default(), seed);
    let mut pilot = Autopilot::default();
    let tick_duration = Duration::from_secs_f32(SIM_DT);

    pilot.present(&app.frame());
    loop {
        let started = Instant::now();

        let events = pilot.poll();
        if app.update(&events) == AppControl::Exit {
            break;
        }
        pilot.present(&app.frame());

        if let Some(remaining) = tick_duration.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!("Thanks for playing!");
}
