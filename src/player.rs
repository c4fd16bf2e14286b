use crate::animation::{AnimationController, AnimationState};
use sdl2::rect::Rect;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source frames are 32x46, drawn at 3x
pub const PLAYER_SCALE: u32 = 3;
pub const PLAYER_WIDTH: u32 = 32 * PLAYER_SCALE;
pub const PLAYER_HEIGHT: u32 = 46 * PLAYER_SCALE;

/// Ships are drawn between the selected mask (-1) and unselected masks (2)
pub const SPRITE_DEPTH: i32 = 0;

/// Sheets are authored nose-down
pub const SPRITE_ROTATION: f64 = 180.0;

/// A named percentage shown under a ship, e.g. "SPEED - 80%"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub percent: u8,
}

impl Stat {
    pub fn new(name: &str, percent: u8) -> Self {
        Stat {
            name: name.to_string(),
            percent,
        }
    }

    pub fn display_text(&self) -> String {
        format!("{} - {}%", self.name, self.percent)
    }
}

/// Descriptive data a selectable entry may carry.
///
/// Both fields are optional so a single type covers plain ships, ships with
/// stats and labelled entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// One line of text derived from attributes
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeLine {
    Label(String),
    Stat(String),
}

impl AttributeLine {
    pub fn text(&self) -> &str {
        match self {
            AttributeLine::Label(text) | AttributeLine::Stat(text) => text,
        }
    }
}

impl PlayerAttributes {
    pub fn with_label(label: &str) -> Self {
        PlayerAttributes {
            label: Some(label.to_string()),
            stats: Vec::new(),
        }
    }

    pub fn with_stats(stats: Vec<Stat>) -> Self {
        PlayerAttributes { label: None, stats }
    }

    /// Label first, then one line per stat
    pub fn lines(&self) -> Vec<AttributeLine> {
        let mut lines = Vec::with_capacity(self.stats.len() + 1);
        if let Some(label) = &self.label {
            lines.push(AttributeLine::Label(label.clone()));
        }
        lines.extend(self.stats.iter().map(|stat| AttributeLine::Stat(stat.display_text())));
        lines
    }
}

pub struct Player {
    pub x: i32,
    pub y: i32,
    pub sprite_path: String,
    pub attributes: PlayerAttributes,
    animation_controller: AnimationController,
}

impl Player {
    pub fn new(sprite_path: &str, x: i32, y: i32, attributes: PlayerAttributes) -> Self {
        Player {
            x,
            y,
            sprite_path: sprite_path.to_string(),
            attributes,
            animation_controller: AnimationController::ship_thrusters(),
        }
    }

    pub fn play_slow(&mut self) {
        self.animation_controller.set_state(AnimationState::Slow);
    }

    pub fn play_fast(&mut self) {
        self.animation_controller.set_state(AnimationState::Fast);
    }

    pub fn update(&mut self, elapsed: Duration) {
        self.animation_controller.update(elapsed);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn center(&self) -> (i32, i32) {
        (
            self.x + PLAYER_WIDTH as i32 / 2,
            self.y + PLAYER_HEIGHT as i32 / 2,
        )
    }

    pub fn current_animation_state(&self) -> AnimationState {
        self.animation_controller.current_state()
    }

    pub fn current_frame(&self) -> usize {
        self.animation_controller.current_frame()
    }

    pub fn depth(&self) -> i32 {
        SPRITE_DEPTH
    }
}
