use std::collections::HashMap;
use std::time::Duration;

/// Default time each sheet frame stays on screen
pub const DEFAULT_FRAME_DURATION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// Idle engine flicker for ships that are not hovered
    Slow,
    /// Full thrust for the hovered ship
    Fast,
}

impl Default for AnimationState {
    fn default() -> Self {
        AnimationState::Slow
    }
}

/// A looping range of frames on a horizontal sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub first_frame: usize,
    pub last_frame: usize,
    pub frame_duration: Duration,
}

impl AnimationClip {
    pub fn new(first_frame: usize, last_frame: usize, frame_duration_ms: u64) -> Self {
        AnimationClip {
            first_frame,
            last_frame: last_frame.max(first_frame),
            frame_duration: Duration::from_millis(frame_duration_ms),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.last_frame - self.first_frame + 1
    }
}

pub struct AnimationController {
    current_state: AnimationState,
    clips: HashMap<AnimationState, AnimationClip>,
    /// Offset into the active clip, not an absolute sheet frame
    frame_offset: usize,
    time_in_frame: Duration,
    state_changed: bool,
}

impl AnimationController {
    pub fn new() -> Self {
        AnimationController {
            current_state: AnimationState::default(),
            clips: HashMap::new(),
            frame_offset: 0,
            time_in_frame: Duration::ZERO,
            state_changed: false,
        }
    }

    /// The two clips every selectable ship carries
    pub fn ship_thrusters() -> Self {
        let mut controller = AnimationController::new();
        controller.add_animation(
            AnimationState::Slow,
            AnimationClip::new(1, 2, DEFAULT_FRAME_DURATION_MS),
        );
        controller.add_animation(
            AnimationState::Fast,
            AnimationClip::new(3, 4, DEFAULT_FRAME_DURATION_MS),
        );
        controller
    }

    pub fn add_animation(&mut self, state: AnimationState, clip: AnimationClip) {
        self.clips.insert(state, clip);
    }

    /// Switches the looping clip. Re-selecting the active clip keeps its progress.
    pub fn set_state(&mut self, new_state: AnimationState) {
        if new_state != self.current_state {
            self.current_state = new_state;
            self.state_changed = true;
        }
    }

    pub fn update(&mut self, elapsed: Duration) {
        if self.state_changed {
            self.frame_offset = 0;
            self.time_in_frame = Duration::ZERO;
            self.state_changed = false;
        }

        let Some(clip) = self.clips.get(&self.current_state) else {
            return;
        };
        if clip.frame_duration.is_zero() {
            return;
        }

        self.time_in_frame += elapsed;
        while self.time_in_frame >= clip.frame_duration {
            self.time_in_frame -= clip.frame_duration;
            self.frame_offset = (self.frame_offset + 1) % clip.frame_count();
        }
    }

    pub fn current_state(&self) -> AnimationState {
        self.current_state
    }

    /// Absolute frame index on the sprite sheet
    pub fn current_frame(&self) -> usize {
        match self.clips.get(&self.current_state) {
            Some(clip) if !self.state_changed => clip.first_frame + self.frame_offset,
            Some(clip) => clip.first_frame,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_slow_frame() {
        let controller = AnimationController::ship_thrusters();
        assert_eq!(controller.current_state(), AnimationState::Slow);
        assert_eq!(controller.current_frame(), 1);
    }

    #[test]
    fn test_slow_clip_loops_between_frames() {
        let mut controller = AnimationController::ship_thrusters();
        let step = Duration::from_millis(DEFAULT_FRAME_DURATION_MS);

        controller.update(step);
        assert_eq!(controller.current_frame(), 2);
        controller.update(step);
        assert_eq!(controller.current_frame(), 1);
    }

    #[test]
    fn test_partial_frame_time_accumulates() {
        let mut controller = AnimationController::ship_thrusters();

        controller.update(Duration::from_millis(200));
        assert_eq!(controller.current_frame(), 1);
        controller.update(Duration::from_millis(200));
        assert_eq!(controller.current_frame(), 2);
    }

    #[test]
    fn test_switching_state_restarts_clip() {
        let mut controller = AnimationController::ship_thrusters();
        controller.update(Duration::from_millis(DEFAULT_FRAME_DURATION_MS));

        controller.set_state(AnimationState::Fast);
        assert_eq!(controller.current_frame(), 3);

        controller.update(Duration::from_millis(100));
        assert_eq!(controller.current_state(), AnimationState::Fast);
        assert_eq!(controller.current_frame(), 3);
    }

    #[test]
    fn test_same_state_keeps_progress() {
        let mut controller = AnimationController::ship_thrusters();
        controller.update(Duration::from_millis(DEFAULT_FRAME_DURATION_MS));

        controller.set_state(AnimationState::Slow);
        controller.update(Duration::ZERO);
        assert_eq!(controller.current_frame(), 2);
    }

    #[test]
    fn test_clip_frame_count() {
        let clip = AnimationClip::new(3, 4, 100);
        assert_eq!(clip.frame_count(), 2);

        let inverted = AnimationClip::new(5, 2, 100);
        assert_eq!(inverted.frame_count(), 1);
    }
}
