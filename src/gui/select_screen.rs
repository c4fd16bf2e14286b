//! Player Select Screen
//!
//! Owns the starfield, the three selectable ships and the decorations that
//! depend on which ship is hovered. Decorations are thrown away and rebuilt
//! from scratch after every selection change.

use crate::config::{ConfigError, ScreenConfig};
use crate::frame::{FrameContext, WindowSize};
use crate::player::{AttributeLine, PLAYER_WIDTH, Player};
use crate::scene::{Scene, Visual, VisualId};
use crate::star::Star;
use crate::text::{centered_x, text_height};
use rand::Rng;
use sdl2::pixels::Color;

pub const STAR_COUNT: usize = 100;

/// Top edge of every ship sprite
pub const PLAYER_ROW_Y: i32 = 240;

pub const MASK_RADIUS: u32 = 100;
/// Light halo behind the hovered ship
pub const SELECTED_MASK_COLOR: Color = Color::RGBA(51, 51, 51, 153);
pub const SELECTED_MASK_DEPTH: i32 = -1;
/// Dark film over the other ships
pub const UNSELECTED_MASK_COLOR: Color = Color::RGBA(0, 0, 0, 153);
pub const UNSELECTED_MASK_DEPTH: i32 = 2;

pub const SELECTED_TEXT_COLOR: Color = Color::RGB(255, 255, 255);
pub const DIMMED_TEXT_COLOR: Color = Color::RGB(77, 77, 77);
pub const TEXT_DEPTH: i32 = 0;

const TITLE_Y: i32 = 40;
const TITLE_SCALE: u32 = 8;
const SUBTITLE_Y: i32 = 120;
const SUBTITLE_SCALE: u32 = 4;

/// Distance from a ship's top edge to its first line of text
const LABEL_OFFSET_Y: i32 = 180;
const LABEL_SCALE: u32 = 4;
const STAT_SCALE: u32 = 2;
const LINE_GAP: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

pub struct SelectionScreen {
    stars: Vec<Star>,
    players: Vec<Player>,
    selected_index: usize,
    scene: Scene,
    decorations: Vec<VisualId>,
}

impl SelectionScreen {
    pub fn new<R: Rng>(
        config: &ScreenConfig,
        window: WindowSize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let stars = (0..STAR_COUNT).map(|_| Star::new(&mut *rng, window)).collect();

        // Even spacing: ship k is centered on width * k / (count + 1)
        let slots = config.players.len() as u32 + 1;
        let players = config
            .players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let center_x = (window.width * (i as u32 + 1) / slots) as i32;
                Player::new(
                    &player.sprite,
                    center_x - PLAYER_WIDTH as i32 / 2,
                    PLAYER_ROW_Y,
                    player.attributes.clone(),
                )
            })
            .collect();

        let mut screen = SelectionScreen {
            stars,
            players,
            selected_index: config.initial_selection,
            scene: Scene::new(),
            decorations: Vec::new(),
        };

        screen.add_title(&config.title, TITLE_Y, TITLE_SCALE, window);
        if let Some(subtitle) = &config.subtitle {
            screen.add_title(subtitle, SUBTITLE_Y, SUBTITLE_SCALE, window);
        }
        screen.refresh_decorations();

        log::info!(
            "Select screen ready: {} players, {} stars, '{}' selected",
            screen.players.len(),
            screen.stars.len(),
            screen.players[screen.selected_index].sprite_path
        );

        Ok(screen)
    }

    fn add_title(&mut self, text: &str, y: i32, scale: u32, window: WindowSize) {
        self.scene.add(Visual::Text {
            text: text.to_string(),
            x: centered_x(text, scale, window.width as i32 / 2),
            y,
            scale,
            color: SELECTED_TEXT_COLOR,
            z: TEXT_DEPTH,
        });
    }

    /// Per-frame tick. Stars only move on even frames, halving their speed.
    pub fn update(&mut self, frame: &FrameContext) {
        if frame.is_even() {
            for star in &mut self.stars {
                star.advance(frame.window.height);
            }
        }

        for player in &mut self.players {
            player.update(frame.elapsed);
        }
    }

    pub fn move_selection(&mut self, direction: Direction) {
        let count = self.players.len();
        self.selected_index = match direction {
            Direction::Left => (self.selected_index + count - 1) % count,
            Direction::Right => (self.selected_index + 1) % count,
        };

        log::debug!("Selection moved {:?} to {}", direction, self.selected_index);
        self.refresh_decorations();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_player(&self) -> &Player {
        &self.players[self.selected_index]
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Visuals derived from the current selection, masks first
    pub fn decorations(&self) -> impl Iterator<Item = &Visual> {
        self.decorations.iter().filter_map(|id| self.scene.get(*id))
    }

    fn refresh_decorations(&mut self) {
        self.animate_players();

        for id in self.decorations.drain(..) {
            self.scene.remove(id);
        }

        let mut visuals = Vec::new();
        for (index, player) in self.players.iter().enumerate() {
            visuals.push(player_mask(player, index == self.selected_index));
        }
        for (index, player) in self.players.iter().enumerate() {
            visuals.extend(player_text(player, index == self.selected_index));
        }

        self.decorations = visuals.into_iter().map(|v| self.scene.add(v)).collect();
        log::debug!("Rebuilt {} decorations", self.decorations.len());
    }

    fn animate_players(&mut self) {
        for (index, player) in self.players.iter_mut().enumerate() {
            if index == self.selected_index {
                player.play_fast();
            } else {
                player.play_slow();
            }
        }
    }
}

fn player_mask(player: &Player, selected: bool) -> Visual {
    let (color, z) = if selected {
        (SELECTED_MASK_COLOR, SELECTED_MASK_DEPTH)
    } else {
        (UNSELECTED_MASK_COLOR, UNSELECTED_MASK_DEPTH)
    };
    let (x, y) = player.center();

    Visual::Circle {
        x,
        y,
        radius: MASK_RADIUS,
        color,
        z,
    }
}

/// Label and stat lines stacked under the sprite, each centered on it
fn player_text(player: &Player, selected: bool) -> Vec<Visual> {
    let color = if selected {
        SELECTED_TEXT_COLOR
    } else {
        DIMMED_TEXT_COLOR
    };
    let center_x = player.x + PLAYER_WIDTH as i32 / 2;
    let mut y = player.y + LABEL_OFFSET_Y;

    player
        .attributes
        .lines()
        .into_iter()
        .map(|line| {
            let scale = match line {
                AttributeLine::Label(_) => LABEL_SCALE,
                AttributeLine::Stat(_) => STAT_SCALE,
            };
            let text = line.text().to_string();
            let visual = Visual::Text {
                x: centered_x(&text, scale, center_x),
                y,
                scale,
                color,
                z: TEXT_DEPTH,
                text,
            };
            y += text_height(scale) as i32 + LINE_GAP;
            visual
        })
        .collect()
}
