//! One-dimensional particle chamber.
//!
//! Particles start at the `R`/`L` cells of the initial position and move
//! `speed` cells per step in their direction. Each step renders a snapshot
//! where occupied cells are `X`. The trace ends with an empty chamber once
//! every particle has left.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMPTY_CELL: char = '.';
pub const OCCUPIED_CELL: char = 'X';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChamberError {
    #[error("speed must be a positive integer, got {speed}")]
    NonPositiveSpeed { speed: i64 },
    #[error("invalid character {found:?} at index {index} (expected 'R', 'L' or '.')")]
    InvalidCharacter { index: usize, found: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'R' => Some(Self::Right),
            'L' => Some(Self::Left),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub position: i64,
    pub direction: Direction,
}

impl Particle {
    /// Moves the particle by `speed` cells. Returns `None` when the move
    /// overflows, which can only happen far outside any chamber.
    fn advanced(self, speed: i64) -> Option<Self> {
        let position = match self.direction {
            Direction::Right => self.position.checked_add(speed),
            Direction::Left => self.position.checked_sub(speed),
        }?;
        Some(Self { position, ..self })
    }

    fn cell(self, width: usize) -> Option<usize> {
        usize::try_from(self.position)
            .ok()
            .filter(|index| *index < width)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chamber {
    width: usize,
    speed: i64,
    particles: Vec<Particle>,
}

impl Chamber {
    pub fn parse(initial_position: &str, speed: i64) -> Result<Self, ChamberError> {
        if speed <= 0 {
            return Err(ChamberError::NonPositiveSpeed { speed });
        }

        let mut width = 0usize;
        let mut particles = Vec::new();
        for (index, symbol) in initial_position.chars().enumerate() {
            width += 1;
            if symbol == EMPTY_CELL {
                continue;
            }
            let direction = Direction::from_symbol(symbol).ok_or(ChamberError::InvalidCharacter {
                index,
                found: symbol,
            })?;
            particles.push(Particle {
                position: index as i64,
                direction,
            });
        }

        Ok(Self {
            width,
            speed,
            particles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn speed(&self) -> i64 {
        self.speed
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Renders the current state. Several particles sharing a cell still show
    /// as a single `X`.
    pub fn render(&self) -> String {
        let mut cells = vec![EMPTY_CELL; self.width];
        for cell in self.particles.iter().filter_map(|p| p.cell(self.width)) {
            cells[cell] = OCCUPIED_CELL;
        }
        cells.into_iter().collect()
    }

    /// Moves every particle one step and drops those that left the chamber.
    pub fn advance(&mut self) {
        let (speed, width) = (self.speed, self.width);
        self.particles = self
            .particles
            .iter()
            .filter_map(|particle| particle.advanced(speed))
            .filter(|particle| particle.cell(width).is_some())
            .collect();
    }

    pub fn snapshots(self) -> Snapshots {
        Snapshots {
            chamber: self,
            finished: false,
        }
    }
}

/// Iterator over the snapshots of a chamber, ending with the empty chamber.
#[derive(Debug, Clone)]
pub struct Snapshots {
    chamber: Chamber,
    finished: bool,
}

impl Iterator for Snapshots {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.chamber.is_empty() {
            self.finished = true;
            return Some(self.chamber.render());
        }
        let frame = self.chamber.render();
        self.chamber.advance();
        Some(frame)
    }
}

impl std::iter::FusedIterator for Snapshots {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationTrace {
    frames: Vec<String>,
}

impl AnimationTrace {
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<String> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for traces produced by [`animate`].
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn width(&self) -> usize {
        self.frames.first().map_or(0, |frame| frame.len())
    }

    pub fn get(&self, step: usize) -> Option<&str> {
        self.frames.get(step).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(String::as_str)
    }
}

impl FromIterator<String> for AnimationTrace {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

/// Simulates `initial_position` at `speed` cells per step until every
/// particle has exited, returning every snapshot including the final empty one.
pub fn animate(initial_position: &str, speed: i64) -> Result<AnimationTrace, ChamberError> {
    Ok(Chamber::parse(initial_position, speed)?.snapshots().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_particle_moving_right() {
        let trace = animate("..R....", 2).expect("valid input");
        assert_eq!(
            trace.into_frames(),
            vec!["..X....", "....X..", "......X", "......."]
        );
    }

    #[test]
    fn empty_chamber_yields_single_empty_frame() {
        let trace = animate("", 3).expect("valid input");
        assert_eq!(trace.into_frames(), vec![""]);
    }

    #[test]
    fn chamber_without_particles_yields_single_frame() {
        let trace = animate("....", 1).expect("valid input");
        assert_eq!(trace.into_frames(), vec!["...."]);
    }

    #[test]
    fn crossing_particles_render_one_x() {
        let trace = animate("R.L", 1).expect("valid input");
        assert_eq!(trace.into_frames(), vec!["X.X", ".X.", "X.X", "..."]);
    }

    #[test]
    fn mixed_directions_at_speed_three() {
        let trace = animate("RR..LRL", 3).expect("valid input");
        assert_eq!(
            trace.into_frames(),
            vec!["XX..XXX", ".X.XX..", "X.....X", "......."]
        );
    }

    #[test]
    fn fast_particles_exit_in_one_step() {
        let trace = animate("RLRLRLRLRL", 10).expect("valid input");
        assert_eq!(trace.into_frames(), vec!["XXXXXXXXXX", ".........."]);
    }

    #[test]
    fn huge_speed_does_not_overflow() {
        let trace = animate("L.R", i64::MAX).expect("valid input");
        assert_eq!(trace.into_frames(), vec!["X.X", "..."]);
    }

    #[test]
    fn rejects_non_positive_speed() {
        assert_eq!(
            animate("R", 0),
            Err(ChamberError::NonPositiveSpeed { speed: 0 })
        );
        assert_eq!(
            animate("R", -2),
            Err(ChamberError::NonPositiveSpeed { speed: -2 })
        );
    }

    #[test]
    fn rejects_lowercase_and_foreign_characters() {
        assert_eq!(
            animate("..r", 1),
            Err(ChamberError::InvalidCharacter {
                index: 2,
                found: 'r'
            })
        );
        assert_eq!(
            animate("R X", 1),
            Err(ChamberError::InvalidCharacter {
                index: 1,
                found: ' '
            })
        );
    }

    #[test]
    fn parse_collects_particles_in_order() {
        let chamber = Chamber::parse("L.R", 1).expect("valid input");
        assert_eq!(chamber.width(), 3);
        assert_eq!(
            chamber.particles(),
            &[
                Particle {
                    position: 0,
                    direction: Direction::Left
                },
                Particle {
                    position: 2,
                    direction: Direction::Right
                },
            ]
        );
    }

    #[test]
    fn advance_moves_by_exactly_speed() {
        let mut chamber = Chamber::parse("R......L", 3).expect("valid input");
        chamber.advance();
        let positions: Vec<i64> = chamber.particles().iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![3, 4]);
    }

    #[test]
    fn trace_serializes_as_plain_list() {
        let trace = animate("R.", 1).expect("valid input");
        let json = serde_json::to_string(&trace).expect("serialize");
        assert_eq!(json, r#"["X.",".X",".."]"#);
    }
}
