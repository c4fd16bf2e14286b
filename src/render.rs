/// Depth-sorted rendering of the select screen
///
/// Stars, ship sprites and scene visuals each carry a z value. Everything is
/// collected, stable-sorted by z ascending and drawn back to front, so a
/// higher z ends up in front.
///
/// # Usage Example
///
/// ```rust
/// render_screen(&mut canvas, &screen, &sprite_sheets)?;
/// ```
use crate::gui::SelectionScreen;
use crate::player::{Player, SPRITE_ROTATION};
use crate::scene::Visual;
use crate::sprite::SpriteSheet;
use crate::star::Star;
use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use std::collections::HashMap;

/// Sprite sheets keyed by the sprite path players were configured with
pub type SpriteSheets<'a> = HashMap<String, SpriteSheet<'a>>;

pub enum Renderable<'a> {
    Star(&'a Star),
    Player(&'a Player),
    Visual(&'a Visual),
}

impl<'a> Renderable<'a> {
    fn render(&self, canvas: &mut Canvas<Window>, sheets: &SpriteSheets) -> Result<(), String> {
        match self {
            Renderable::Star(star) => {
                fill_circle(canvas, star.x, star.y, star.radius, star.color)
            }
            Renderable::Player(player) => {
                let sheet = sheets
                    .get(&player.sprite_path)
                    .ok_or_else(|| format!("No sprite sheet loaded for {}", player.sprite_path))?;
                sheet.render_frame(canvas, player.current_frame(), player.bounds(), SPRITE_ROTATION)
            }
            Renderable::Visual(Visual::Circle {
                x, y, radius, color, ..
            }) => fill_circle(canvas, *x, *y, *radius, *color),
            Renderable::Visual(Visual::Text {
                text, x, y, scale, color, ..
            }) => draw_simple_text(canvas, text, *x, *y, *color, *scale),
        }
    }
}

/// Everything on screen paired with its z, sorted back to front
pub fn collect_renderables(screen: &SelectionScreen) -> Vec<(i32, Renderable<'_>)> {
    let mut renderables: Vec<(i32, Renderable)> = Vec::with_capacity(
        screen.stars().len() + screen.players().len() + screen.scene().len(),
    );

    for star in screen.stars() {
        renderables.push((star.depth(), Renderable::Star(star)));
    }
    for player in screen.players() {
        renderables.push((player.depth(), Renderable::Player(player)));
    }
    for visual in screen.scene().iter() {
        renderables.push((visual.depth(), Renderable::Visual(visual)));
    }

    // Stable: equal depths keep insertion order
    renderables.sort_by_key(|(z, _)| *z);
    renderables
}

pub fn render_screen(
    canvas: &mut Canvas<Window>,
    screen: &SelectionScreen,
    sheets: &SpriteSheets,
) -> Result<(), String> {
    // Masks are translucent
    canvas.set_blend_mode(BlendMode::Blend);

    for (_, renderable) in collect_renderables(screen) {
        renderable.render(canvas, sheets)?;
    }

    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}

/// Filled circle as one horizontal span per row
fn fill_circle(
    canvas: &mut Canvas<Window>,
    center_x: i32,
    center_y: i32,
    radius: u32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    for (dy, half_width) in circle_spans(radius) {
        canvas.fill_rect(Rect::new(
            center_x - half_width,
            center_y + dy,
            (half_width * 2 + 1) as u32,
            1,
        ))?;
    }

    Ok(())
}

/// `(row offset, half width)` for each row of a filled circle
fn circle_spans(radius: u32) -> impl Iterator<Item = (i32, i32)> {
    let r = radius as i32;
    (-r..=r).map(move |dy| {
        let half = ((r * r - dy * dy) as f64).sqrt().round() as i32;
        (dy, half)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScreenConfig;
    use crate::frame::WindowSize;
    use crate::gui::Direction;
    use crate::gui::select_screen::{SELECTED_MASK_DEPTH, UNSELECTED_MASK_DEPTH};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn screen() -> SelectionScreen {
        let mut rng = StdRng::seed_from_u64(3);
        SelectionScreen::new(&ScreenConfig::asteroids(), WindowSize::new(800, 600), &mut rng)
            .unwrap()
    }

    #[test]
    fn test_renderables_sorted_back_to_front() {
        let screen = screen();
        let renderables = collect_renderables(&screen);

        let depths: Vec<i32> = renderables.iter().map(|(z, _)| *z).collect();
        let mut sorted = depths.clone();
        sorted.sort();
        assert_eq!(depths, sorted);

        // Background first, dimming masks last
        assert!(matches!(renderables.first(), Some((_, Renderable::Star(_)))));
        assert_eq!(renderables.last().map(|(z, _)| *z), Some(UNSELECTED_MASK_DEPTH));
    }

    #[test]
    fn test_selected_mask_drawn_before_sprites() {
        let mut screen = screen();
        screen.move_selection(Direction::Right);
        let renderables = collect_renderables(&screen);

        let mask_position = renderables
            .iter()
            .position(|(z, r)| *z == SELECTED_MASK_DEPTH && matches!(r, Renderable::Visual(_)))
            .unwrap();
        let first_sprite = renderables
            .iter()
            .position(|(_, r)| matches!(r, Renderable::Player(_)))
            .unwrap();
        assert!(mask_position < first_sprite);
    }

    #[test]
    fn test_renderable_count() {
        let screen = screen();
        // 100 stars, 3 ships, title + subtitle, 3 masks, 6 stat lines
        assert_eq!(collect_renderables(&screen).len(), 100 + 3 + 2 + 3 + 6);
    }

    #[test]
    fn test_circle_spans_cover_diameter() {
        let spans: Vec<(i32, i32)> = circle_spans(2).collect();
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[2], (0, 2));
        assert_eq!(spans[0], (-2, 0));
        assert_eq!(spans[4], (2, 0));
    }
}
