//! Accumulator-based spawn scheduling
//!
//! Each spawn track keeps its own time-since-last-spawn and fires once per
//! `SPAWN_INTERVAL` while its difficulty condition holds. Tracks unlock as the
//! scroll speed and score climb, so arrows get denser as they get faster.
//! Every track fires at a fixed offset into each second of play, so two tracks
//! never drop arrows at the same height.

use crate::consts::*;

/// Independent spawn cadences; every active track adds one arrow per interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnTrack {
    /// Always on: at least one arrow per second
    Baseline,
    /// Unlocks once speed magnitude exceeds 2.5
    Brisk,
    /// Unlocks once speed magnitude exceeds 3.5
    Rapid,
    /// Unlocks once the score passes 150
    Veteran,
}

impl SpawnTrack {
    pub const ALL: [SpawnTrack; 4] = [
        SpawnTrack::Baseline,
        SpawnTrack::Brisk,
        SpawnTrack::Rapid,
        SpawnTrack::Veteran,
    ];

    pub fn is_active(self, speed: f32, total_score: u32) -> bool {
        match self {
            SpawnTrack::Baseline => true,
            SpawnTrack::Brisk => speed < BRISK_SPEED,
            SpawnTrack::Rapid => speed < RAPID_SPEED,
            SpawnTrack::Veteran => total_score > VETERAN_SCORE,
        }
    }

    /// Seconds into each interval at which the track fires
    pub fn phase(self) -> f32 {
        match self {
            SpawnTrack::Baseline => 0.0,
            SpawnTrack::Brisk => 0.25,
            SpawnTrack::Rapid => 0.40,
            SpawnTrack::Veteran => 0.90,
        }
    }

    fn index(self) -> usize {
        match self {
            SpawnTrack::Baseline => 0,
            SpawnTrack::Brisk => 1,
            SpawnTrack::Rapid => 2,
            SpawnTrack::Veteran => 3,
        }
    }
}

/// Spawn scheduler state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spawner {
    /// Seconds of play fed through `update`
    elapsed: f32,
    /// Seconds since each track last fired; `None` while the track is locked
    since_last: [Option<f32>; 4],
}

impl Spawner {
    /// Advance every track by `dt` seconds and return how many arrows are due.
    ///
    /// A track fires at most once per call and any backlog beyond one interval
    /// is dropped, so a long stall produces one arrow per track, not a burst.
    /// A track unlocking mid-game picks up its phase from the play time and
    /// fires on its next phase point, never on the unlock frame itself.
    pub fn update(&mut self, dt: f32, speed: f32, total_score: u32) -> u32 {
        let dt = dt.max(0.0);
        self.elapsed += dt;

        let mut due = 0;
        for track in SpawnTrack::ALL {
            let slot = &mut self.since_last[track.index()];
            if !track.is_active(speed, total_score) {
                *slot = None;
                continue;
            }

            let Some(since) = *slot else {
                *slot = Some((self.elapsed - track.phase()).rem_euclid(SPAWN_INTERVAL));
                continue;
            };
            let mut since = since + dt;
            if since >= SPAWN_INTERVAL {
                due += 1;
                since = (since - SPAWN_INTERVAL).rem_euclid(SPAWN_INTERVAL);
            }
            *slot = Some(since);
        }
        due
    }

    /// Number of tracks currently unlocked
    pub fn active_tracks(&self) -> usize {
        self.since_last.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spawner: &mut Spawner, seconds: f32, dt: f32, speed: f32, score: u32) -> u32 {
        let steps = (seconds / dt).round() as u32;
        (0..steps).map(|_| spawner.update(dt, speed, score)).sum()
    }

    #[test]
    fn test_baseline_one_per_second() {
        let mut spawner = Spawner::default();
        assert_eq!(spawner.update(0.5, START_SPEED, 0), 0);
        assert_eq!(spawner.update(0.5, START_SPEED, 0), 1);
        assert_eq!(run(&mut spawner, 10.0, 0.25, START_SPEED, 0), 10);
        assert_eq!(spawner.active_tracks(), 1);
    }

    #[test]
    fn test_tracks_unlock_with_speed_and_score() {
        assert!(!SpawnTrack::Brisk.is_active(-2.5, 0));
        assert!(SpawnTrack::Brisk.is_active(-2.51, 0));
        assert!(!SpawnTrack::Rapid.is_active(-3.5, 0));
        assert!(SpawnTrack::Rapid.is_active(-3.6, 0));
        assert!(!SpawnTrack::Veteran.is_active(-8.0, 150));
        assert!(SpawnTrack::Veteran.is_active(-1.5, 155));
    }

    #[test]
    fn test_rate_ramps_with_difficulty() {
        let mut calm = Spawner::default();
        let mut frantic = Spawner::default();
        let calm_count = run(&mut calm, 10.0, 0.125, START_SPEED, 0);
        let frantic_count = run(&mut frantic, 10.0, 0.125, -4.0, 200);
        assert_eq!(calm_count, 10);
        assert_eq!(frantic_count, 40);
        assert_eq!(frantic.active_tracks(), 4);
    }

    #[test]
    fn test_stall_does_not_burst() {
        let mut spawner = Spawner::default();
        assert_eq!(spawner.update(0.25, -5.0, 300), 0);
        // A 30 second hitch with every track unlocked
        assert_eq!(spawner.update(30.0, -5.0, 300), 4);
        // Backlog is gone: nothing fires on the next short frame
        assert_eq!(spawner.update(0.05, -5.0, 300), 0);
    }

    #[test]
    fn test_tracks_fire_at_fixed_offsets() {
        let dt = 1.0 / 64.0;
        let mut spawner = Spawner::default();
        let mut fired = Vec::new();
        for step in 1..=(20 * 64) {
            let due = spawner.update(dt, -5.0, 300);
            assert!(due <= 1, "two tracks fired together at step {step}");
            if due == 1 && step <= 64 {
                fired.push(step as f32 * dt);
            }
        }
        // First firings of Brisk, Rapid, Veteran and Baseline, one frame apart at most
        assert_eq!(fired.len(), 4);
        for (at, phase) in fired.iter().zip([0.25, 0.40, 0.90, 1.0]) {
            assert!((at - phase).abs() <= dt, "fired at {at}, expected {phase}");
        }
    }

    #[test]
    fn test_late_unlock_keeps_its_phase() {
        let mut spawner = Spawner::default();
        // Baseline fires at 1.0 and 2.0; Brisk unlocks at 2.125 and waits for 2.25
        assert_eq!(run(&mut spawner, 2.0, 0.125, START_SPEED, 0), 2);
        assert_eq!(spawner.update(0.125, -3.0, 0), 0);
        assert_eq!(spawner.update(0.125, -3.0, 0), 1);
        assert_eq!(run(&mut spawner, 0.75, 0.125, -3.0, 0), 1);
        assert_eq!(spawner.active_tracks(), 2);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut spawner = Spawner::default();
        assert_eq!(spawner.update(-5.0, START_SPEED, 0), 0);
        assert_eq!(spawner.update(0.5, START_SPEED, 0), 0);
    }
}
