//! Frame cursor for timed playback of an [`AnimationTrace`](crate::AnimationTrace).
//!
//! The caller owns the timer and calls [`Playback::tick`] on every interval;
//! this type only tracks which frame is shown and whether playback is running.

pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    frame_count: usize,
    current: usize,
    playing: bool,
}

impl Playback {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            current: 0,
            playing: false,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.frame_count == 0 || self.current + 1 >= self.frame_count
    }

    /// Starts playback. Does nothing when there is no frame left to advance to.
    pub fn play(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.playing = true;
        true
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.pause();
            false
        } else {
            self.play()
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.playing = false;
    }

    pub fn seek(&mut self, index: usize) {
        self.current = index.min(self.frame_count.saturating_sub(1));
    }

    /// Advances one frame while playing. Playback stops on the last frame.
    /// Returns whether the frame changed.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if self.is_finished() {
            self.playing = false;
            return false;
        }
        self.current += 1;
        if self.is_finished() {
            self.playing = false;
        }
        true
    }
}
