//! Game state and core simulation types
//!
//! Everything a session mutates lives in `GameState`, owned by the game loop.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::layout::{Lane, LaneLayout};
use super::spawn::Spawner;
use crate::consts::*;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Instructions, waiting for the begin input
    #[default]
    Start,
    /// Arrows falling
    Play,
    /// An arrow was missed; terminal for the session
    Over,
}

/// A falling arrow
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub id: u32,
    pub lane: Lane,
    /// Center point; only `y` changes after spawn
    pub pos: Vec2,
    pub size: Vec2,
    scored: bool,
}

impl Arrow {
    /// Create an unscored arrow.
    ///
    /// # Panics
    /// If either size component is not strictly positive; every hit test
    /// would be meaningless for such an arrow.
    pub fn new(id: u32, lane: Lane, pos: Vec2, size: Vec2) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "arrow size must be positive, got {size}"
        );
        Self {
            id,
            lane,
            pos,
            size,
            scored: false,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }

    /// Flag the arrow as matched. Returns false if it already was.
    pub fn mark_scored(&mut self) -> bool {
        !std::mem::replace(&mut self.scored, true)
    }

    /// Move down by the magnitude of `speed`
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.pos.y -= speed.abs();
    }
}

/// Outcome of pressing a lane this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneSignal {
    /// An arrow was matched
    Hit,
    /// Pressed with nothing in the window
    Idle,
}

/// Things that happened during a frame, for sound/UI/log collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Begin input accepted on the start screen
    Started,
    /// A new arrow entered the registry
    Spawned { id: u32, lane: Lane },
    /// A held lane was evaluated
    LaneSignal { lane: Lane, signal: LaneSignal },
    /// A matched arrow was removed and its points awarded
    Scored { id: u32, lane: Lane, total_score: u32 },
    /// An unscored arrow left the playfield
    Missed { id: u32, lane: Lane },
    /// Session ended
    GameOver { final_score: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Lane picker
    pub rng: Pcg32,
    pub screen: Screen,
    pub total_score: u32,
    /// Scroll speed, negative (downward), units per frame
    pub speed: f32,
    /// Live arrows in spawn order
    pub arrows: Vec<Arrow>,
    pub spawner: Spawner,
    pub layout: LaneLayout,
    /// Per-lane signal from the most recent frame (cleared each frame)
    pub feedback: [Option<LaneSignal>; 4],
    /// Lane whose hit lit each divider; held until no lane input is down
    pub divider_flash: [Option<Lane>; 3],
    /// Simulation frames run while playing
    pub frames: u64,
    next_id: u32,
}

impl GameState {
    /// Create a fresh session on the start screen
    pub fn new(seed: u64) -> Self {
        Self::with_layout(seed, LaneLayout::default())
    }

    pub fn with_layout(seed: u64, layout: LaneLayout) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            screen: Screen::Start,
            total_score: 0,
            speed: START_SPEED,
            arrows: Vec::new(),
            spawner: Spawner::default(),
            layout,
            feedback: [None; 4],
            divider_flash: [None; 3],
            frames: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append one arrow at the top of `lane`
    pub fn spawn_arrow(&mut self, lane: Lane) -> u32 {
        let id = self.next_entity_id();
        let pos = self.layout.spawn_point(lane);
        self.arrows
            .push(Arrow::new(id, lane, pos, Vec2::new(ARROW_WIDTH, ARROW_HEIGHT)));
        id
    }

    /// Pick a lane uniformly at random
    pub fn random_lane(&mut self) -> Lane {
        Lane::ALL[self.rng.random_range(0..Lane::ALL.len())]
    }

    /// Append one arrow in a random lane
    pub fn spawn_random_arrow(&mut self) -> (u32, Lane) {
        let lane = self.random_lane();
        (self.spawn_arrow(lane), lane)
    }

    pub fn signal(&self, lane: Lane) -> Option<LaneSignal> {
        self.feedback[lane.index()]
    }

    /// Lane whose color divider `index` (0..3, left to right) is lit with
    pub fn divider_lit(&self, index: usize) -> Option<Lane> {
        self.divider_flash.get(index).copied().flatten()
    }
}
