//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Per-frame movement only (speed is units per frame)
//! - Seeded RNG only
//! - Stable iteration order (registry order is spawn order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod difficulty;
pub mod layout;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use difficulty::{ScoreTier, award_hit};
pub use layout::{InvalidLane, Lane, LaneLayout, Marker};
pub use scoring::{evaluate_press, find_match, in_hit_window};
pub use spawn::{SpawnTrack, Spawner};
pub use state::{Arrow, GameEvent, GameState, LaneSignal, Screen};
pub use tick::{TickInput, tick};
