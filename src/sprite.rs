use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Width in source pixels of one frame on a ship sheet
pub const SHIP_FRAME_WIDTH: u32 = 32;

/// A horizontal strip of equally sized frames
pub struct SpriteSheet<'a> {
    texture: &'a Texture<'a>,
    frame_width: u32,
    frame_height: u32,
    frame_count: usize,
}

impl<'a> SpriteSheet<'a> {
    /// Frame height is the texture height; frame count is derived from its width
    pub fn new(texture: &'a Texture<'a>, frame_width: u32) -> Self {
        let query = texture.query();
        let frame_width = frame_width.max(1);
        SpriteSheet {
            texture,
            frame_width,
            frame_height: query.height,
            frame_count: (query.width / frame_width) as usize,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn source_rect(&self, frame: usize) -> Rect {
        let frame = clamp_frame(frame, self.frame_count);
        Rect::new(
            frame as i32 * self.frame_width as i32,
            0,
            self.frame_width,
            self.frame_height,
        )
    }

    pub fn render_frame(
        &self,
        canvas: &mut Canvas<Window>,
        frame: usize,
        dest_rect: Rect,
        rotation_degrees: f64,
    ) -> Result<(), String> {
        if self.frame_count == 0 {
            return Err("Sprite sheet is narrower than one frame".to_string());
        }

        canvas
            .copy_ex(
                self.texture,
                Some(self.source_rect(frame)),
                Some(dest_rect),
                rotation_degrees,
                None,
                false,
                false,
            )
            .map_err(|e| e.to_string())
    }
}

/// Sheets shorter than the requested clip fall back to their last frame
fn clamp_frame(frame: usize, frame_count: usize) -> usize {
    frame.min(frame_count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_in_range_is_unchanged() {
        assert_eq!(clamp_frame(0, 5), 0);
        assert_eq!(clamp_frame(4, 5), 4);
    }

    #[test]
    fn test_frame_past_end_uses_last_frame() {
        // A 3-frame sheet asked for the fast clip (frames 3 and 4)
        assert_eq!(clamp_frame(3, 3), 2);
        assert_eq!(clamp_frame(4, 3), 2);
    }

    #[test]
    fn test_empty_sheet_clamps_to_zero() {
        assert_eq!(clamp_frame(2, 0), 0);
    }
}
