//! Score-driven difficulty curve
//!
//! Every matched arrow is worth `SCORE_PER_HIT` and nudges the scroll speed
//! further negative (faster). Two tiers apply: a quick ramp down to -4, then,
//! once the score passes 500, a slow creep down to the -8 floor. Speed never
//! eases back.

use crate::consts::*;

/// Steps landing this close to a floor snap onto it
const FLOOR_SNAP: f32 = 1e-4;

/// Award one matched arrow: returns the new `(total_score, speed)`
pub fn award_hit(total_score: u32, speed: f32) -> (u32, f32) {
    let total_score = total_score.saturating_add(SCORE_PER_HIT);
    let mut speed = speed;

    if speed > FIRST_TIER_FLOOR {
        speed = step_toward_floor(speed, FIRST_TIER_STEP, FIRST_TIER_FLOOR);
    }
    if total_score > SECOND_TIER_SCORE && speed > SPEED_FLOOR {
        speed = step_toward_floor(speed, SECOND_TIER_STEP, SPEED_FLOOR);
    }

    (total_score, speed)
}

fn step_toward_floor(speed: f32, step: f32, floor: f32) -> f32 {
    let next = speed - step;
    if next <= floor + FLOOR_SNAP {
        floor
    } else {
        next
    }
}

/// Color tier of the live score readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Below 100
    Rookie,
    /// 100 and up
    Warm,
    /// 250 and up
    Hot,
    /// 500 and up
    Blazing,
}

impl ScoreTier {
    pub fn for_score(total_score: u32) -> Self {
        match total_score {
            500.. => ScoreTier::Blazing,
            250.. => ScoreTier::Hot,
            100.. => ScoreTier::Warm,
            _ => ScoreTier::Rookie,
        }
    }
}
