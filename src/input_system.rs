use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Commands the select screen understands
///
/// Raw SDL2 events are translated into these so the screen never sees
/// keycodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    SelectPrevious,
    SelectNext,
    Quit,
}

/// InputSystem turns polled SDL2 events into [`ScreenAction`]s
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains all pending events and returns the resulting actions in order
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<ScreenAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Maps a single event. Held-key repeats are dropped so one press moves once.
    pub fn translate(&self, event: &Event) -> Option<ScreenAction> {
        match event {
            Event::Quit { .. } => Some(ScreenAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => Self::map_key(*key),
            _ => None,
        }
    }

    fn map_key(key: Keycode) -> Option<ScreenAction> {
        match key {
            Keycode::Left => Some(ScreenAction::SelectPrevious),
            Keycode::Right => Some(ScreenAction::SelectNext),
            Keycode::Escape => Some(ScreenAction::Quit),
            _ => None,
        }
    }
}
