use crate::frame::WindowSize;
use rand::Rng;
use sdl2::pixels::Color;

/// Stars sit behind every mask and ship sprite
pub const STAR_DEPTH: i32 = -2;

/// A single background particle drifting vertically
#[derive(Debug, Clone)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub velocity_y: i32,
    pub radius: u32,
    pub color: Color,
}

impl Star {
    pub fn new<R: Rng>(rng: &mut R, window: WindowSize) -> Self {
        Star {
            x: rng.gen_range(0..window.width.max(1)) as i32,
            y: rng.gen_range(0..window.height.max(1)) as i32,
            velocity_y: rng.gen_range(-5..=0),
            radius: rng.gen_range(1..=2),
            color: Color::RGB(
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
            ),
        }
    }

    /// Moves by one velocity step, reappearing on the opposite edge
    pub fn advance(&mut self, window_height: u32) {
        let height = window_height.max(1) as i32;
        self.y = (self.y + self.velocity_y).rem_euclid(height);
    }

    pub fn depth(&self) -> i32 {
        STAR_DEPTH
    }
}
