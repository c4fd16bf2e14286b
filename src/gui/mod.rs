//! Screen-Space GUI
//!
//! Screens that own their own state and are driven by the host loop:
//! `update()` once per frame and an input call per key press. Screens never
//! touch SDL2 directly; they describe what to draw through
//! [`Scene`](crate::scene::Scene) visuals and leave drawing to
//! [`render`](crate::render).
//!
//! # Available Screens
//!
//! - [`SelectionScreen`] - pick one of three ships with left/right
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{Direction, SelectionScreen};
//!
//! let mut screen = SelectionScreen::new(&config, window, &mut rand::thread_rng())?;
//!
//! // Each frame
//! screen.update(&frame);
//!
//! // On key press
//! screen.move_selection(Direction::Right);
//! ```

pub mod select_screen;

pub use select_screen::{Direction, SelectionScreen};
