use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use std::collections::HashMap;
use std::time::{Duration, Instant};

mod animation;
mod config;
mod frame;
mod gui;
mod input_system;
mod player;
mod render;
mod scene;
mod sprite;
mod star;
mod text;

use config::{ScreenConfig, config_search_paths, load_first_existing};
use frame::{FrameContext, WindowSize};
use gui::{Direction, SelectionScreen};
use input_system::{InputSystem, ScreenAction};
use render::{SpriteSheets, render_screen};
use sprite::{SHIP_FRAME_WIDTH, SpriteSheet};

const WINDOW_SIZE: WindowSize = WindowSize::new(800, 600);
const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_667);
const BACKGROUND_COLOR: Color = Color::RGB(0, 0, 0);

/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    path: &str,
) -> Result<sdl2::render::Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

fn main() -> Result<(), String> {
    env_logger::init();

    let (screen_config, config_source) =
        load_first_existing(&config_search_paths(), ScreenConfig::preset_from_env())?;
    match &config_source {
        Some(path) => log::info!("Loaded screen config from {}", path.display()),
        None => log::info!("Using built-in screen config"),
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&screen_config.title, WINDOW_SIZE.width, WINDOW_SIZE.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(WINDOW_SIZE.width, WINDOW_SIZE.height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Missing ship art is fatal
    let mut textures = HashMap::new();
    for player in &screen_config.players {
        if !textures.contains_key(&player.sprite) {
            let texture = load_texture(&texture_creator, &player.sprite)?;
            log::info!("Loaded sprite sheet {}", player.sprite);
            textures.insert(player.sprite.clone(), texture);
        }
    }
    let sprite_sheets: SpriteSheets = textures
        .iter()
        .map(|(path, texture)| (path.clone(), SpriteSheet::new(texture, SHIP_FRAME_WIDTH)))
        .collect();
    for (path, sheet) in &sprite_sheets {
        if sheet.frame_count() < 5 {
            log::warn!("{} has {} frames, thrust clips expect 5", path, sheet.frame_count());
        }
    }

    let mut screen = SelectionScreen::new(&screen_config, WINDOW_SIZE, &mut rand::thread_rng())?;
    let input_system = InputSystem::new();

    let mut frame_index: u64 = 0;
    let mut last_tick = Instant::now();

    'running: loop {
        let frame_start = Instant::now();

        for action in input_system.poll_events(&mut event_pump) {
            let direction = match action {
                ScreenAction::SelectPrevious => Direction::Left,
                ScreenAction::SelectNext => Direction::Right,
                ScreenAction::Quit => break 'running,
            };
            screen.move_selection(direction);
            log::debug!(
                "Hovering player {} ({:?}), {} decorations",
                screen.selected_index(),
                screen.selected_player().current_animation_state(),
                screen.decorations().count()
            );
        }

        let now = Instant::now();
        let frame = FrameContext::new(frame_index, WINDOW_SIZE, now - last_tick);
        last_tick = now;
        screen.update(&frame);

        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();
        render_screen(&mut canvas, &screen, &sprite_sheets)?;
        canvas.present();

        frame_index += 1;

        let spent = frame_start.elapsed();
        if spent < TARGET_FRAME_TIME {
            std::thread::sleep(TARGET_FRAME_TIME - spent);
        }
    }

    log::info!(
        "Exiting after {} frames with player {} ('{}') selected",
        frame_index,
        screen.selected_index(),
        screen.selected_player().sprite_path
    );
    Ok(())
}
