//! Arrow Rush - a four-lane arrow reaction game
//!
//! Core modules:
//! - `sim`: Frame simulation (arrows, spawning, scoring, difficulty, screens)
//! - `renderer`: Draw requests and shape tessellation for an external GPU backend
//! - `game`: Session object tying the clock, simulation and renderer together
//! - `settings`: JSON configuration

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation frame (scroll speed is expressed per frame)
    pub const FRAME_DT: f64 = 1.0 / 60.0;
    /// Maximum frames simulated per clock reading to prevent spiral of death
    pub const MAX_FRAMES_PER_UPDATE: u32 = 8;

    /// Playfield dimensions (y grows upward, origin bottom-left)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Falling arrow extent
    pub const ARROW_WIDTH: f32 = 30.0;
    pub const ARROW_HEIGHT: f32 = 25.0;

    /// Static marker extent
    pub const MARKER_WIDTH: f32 = 37.5;
    pub const MARKER_HEIGHT: f32 = 31.25;
    /// Press pad drawn under each marker
    pub const PAD_WIDTH: f32 = 50.0;
    pub const PAD_HEIGHT: f32 = 47.25;
    /// Lane divider thickness
    pub const DIVIDER_WIDTH: f32 = 5.0;

    /// Slack around a marker's edges inside which a press still counts
    pub const HIT_TOLERANCE: f32 = 20.0;

    /// Points per matched arrow
    pub const SCORE_PER_HIT: u32 = 5;

    /// Scroll speed (negative = downward, units per frame)
    pub const START_SPEED: f32 = -1.5;
    /// First-tier acceleration per hit and the floor it stops at
    pub const FIRST_TIER_STEP: f32 = 0.08;
    pub const FIRST_TIER_FLOOR: f32 = -4.0;
    /// Score above which the slow second tier kicks in
    pub const SECOND_TIER_SCORE: u32 = 500;
    pub const SECOND_TIER_STEP: f32 = 0.01;
    pub const SPEED_FLOOR: f32 = -8.0;

    /// Spawn tiers: extra tracks unlock past these thresholds
    pub const BRISK_SPEED: f32 = -2.5;
    pub const RAPID_SPEED: f32 = -3.5;
    pub const VETERAN_SCORE: u32 = 150;
    /// Every track spawns once per interval
    pub const SPAWN_INTERVAL: f32 = 1.0;
}
