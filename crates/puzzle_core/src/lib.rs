//! Interview puzzle algorithms and the playback state that drives their visualizers.
//!
//! - [`unused_letters`]: letters of the alphabet missing from a piece of text.
//! - [`particle_chamber`]: 1-D particle chamber simulation producing an [`AnimationTrace`].
//! - [`playback`]: frame cursor for stepping through a trace on a timer.
//! - [`presets`]: canned inputs shown next to each puzzle.

pub mod particle_chamber;
pub mod playback;
pub mod presets;
pub mod unused_letters;

pub use particle_chamber::{animate, AnimationTrace, Chamber, ChamberError, Direction, Particle};
pub use playback::{Playback, DEFAULT_FRAME_INTERVAL_MS};
pub use unused_letters::{find_unused_letters, is_pangram, used_letters, LetterSet};
