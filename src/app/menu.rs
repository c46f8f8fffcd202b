//! Declarative menu buttons
//!
//! Each screen lists its buttons as {region, label, action}. Clicks and
//! keyboard confirms resolve to the button's action; the state machine
//! does the rest.

use glam::Vec2;

use super::screen::{Action, Screen};
use crate::difficulty::Difficulty;
use crate::sim::Rect;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_SPACING: f32 = 12.0;
/// Width of the tier tabs on the leaderboard screen
pub const TAB_WIDTH: f32 = 90.0;

/// A clickable button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub region: Rect,
    pub label: String,
    pub action: Action,
}

/// Find the action under a pointer press
pub fn hit_test(buttons: &[Button], point: Vec2) -> Option<Action> {
    buttons
        .iter()
        .find(|b| b.region.contains(point))
        .map(|b| b.action)
}

/// Stack buttons in a centered column starting at `top`
fn column(items: Vec<(String, Action)>, viewport: &Rect, top: f32) -> Vec<Button> {
    let x = viewport.left() + (viewport.size.x - BUTTON_WIDTH) / 2.0;
    items
        .into_iter()
        .enumerate()
        .map(|(i, (label, action))| Button {
            region: Rect::new(
                x,
                top + i as f32 * (BUTTON_HEIGHT + BUTTON_SPACING),
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            label,
            action,
        })
        .collect()
}

/// Lay buttons side by side, centered, at `top`
fn row(items: Vec<(String, Action)>, viewport: &Rect, top: f32, width: f32) -> Vec<Button> {
    let count = items.len() as f32;
    let total = count * width + (count - 1.0).max(0.0) * BUTTON_SPACING;
    let x0 = viewport.left() + (viewport.size.x - total) / 2.0;
    items
        .into_iter()
        .enumerate()
        .map(|(i, (label, action))| Button {
            region: Rect::new(
                x0 + i as f32 * (width + BUTTON_SPACING),
                top,
                width,
                BUTTON_HEIGHT,
            ),
            label,
            action,
        })
        .collect()
}

fn tier_items(action: fn(Difficulty) -> Action, selected: Difficulty) -> Vec<(String, Action)> {
    Difficulty::ALL
        .iter()
        .map(|&tier| {
            let label = if tier == selected {
                format!("[{}]", tier.as_str())
            } else {
                tier.as_str().to_string()
            };
            (label, action(tier))
        })
        .collect()
}

/// Buttons for a screen.
///
/// `difficulty` is the current setting; `gradual` is the gradual speed
/// toggle, `None` while it is hidden.
pub fn layout(
    screen: &Screen,
    viewport: &Rect,
    difficulty: Difficulty,
    gradual: Option<bool>,
) -> Vec<Button> {
    let top = viewport.top() + viewport.size.y * 0.35;
    match screen {
        Screen::Menu => column(
            vec![
                ("Play".to_string(), Action::Play),
                ("Leaderboard".to_string(), Action::OpenLeaderboard),
                ("Settings".to_string(), Action::OpenSettings),
                ("Quit".to_string(), Action::Quit),
            ],
            viewport,
            top,
        ),
        Screen::Playing(_) => Vec::new(),
        Screen::NameEntry { .. } => column(
            vec![
                ("Save".to_string(), Action::SubmitName),
                ("Skip".to_string(), Action::SkipName),
            ],
            viewport,
            viewport.top() + viewport.size.y * 0.55,
        ),
        Screen::Leaderboard { tier, .. } => {
            let mut buttons = column(
                vec![
                    ("Play Again".to_string(), Action::Play),
                    ("Back".to_string(), Action::Back),
                ],
                viewport,
                viewport.top() + viewport.size.y * 0.7,
            );
            buttons.extend(row(
                tier_items(Action::ShowTier, *tier),
                viewport,
                viewport.top() + viewport.size.y * 0.12,
                TAB_WIDTH,
            ));
            buttons
        }
        Screen::Settings => {
            let mut buttons = row(
                tier_items(Action::SelectDifficulty, difficulty),
                viewport,
                viewport.top() + viewport.size.y * 0.2,
                TAB_WIDTH,
            );
            let mut items = vec![(
                format!("Clear {} Scores", difficulty.as_str()),
                Action::ClearScores,
            )];
            if let Some(on) = gradual {
                let state = if on { "On" } else { "Off" };
                items.push((format!("Gradual Speed: {state}"), Action::ToggleGradualSpeed));
            }
            items.push(("Back".to_string(), Action::Back));
            buttons.extend(column(items, viewport, top));
            buttons
        }
    }
}
