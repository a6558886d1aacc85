//! One simulation frame
//!
//! Frame order while playing: spawn, advance, evaluate presses, then sweep
//! scored and missed arrows out of the registry. Scored arrows are swept
//! before the miss check so a match can never also count as a miss.

use super::difficulty;
use super::layout::Lane;
use super::scoring::{evaluate_press, in_hit_window, is_candidate};
use super::state::{GameEvent, GameState, LaneSignal, Screen};

/// Inputs held during a frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start the game from the start screen
    pub begin: bool,
    pub left: bool,
    pub down: bool,
    pub up: bool,
    pub right: bool,
    /// Let the built-in player press begin and the lanes
    pub autoplay: bool,
}

impl TickInput {
    /// Whether the input bound to `lane` is held
    pub fn held(&self, lane: Lane) -> bool {
        match lane {
            Lane::Left => self.left,
            Lane::Down => self.down,
            Lane::Up => self.up,
            Lane::Right => self.right,
        }
    }

    pub fn hold(&mut self, lane: Lane) {
        match lane {
            Lane::Left => self.left = true,
            Lane::Down => self.down = true,
            Lane::Up => self.up = true,
            Lane::Right => self.right = true,
        }
    }
}

/// Advance the game by one frame of `dt` seconds and report what happened
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.feedback = [None; 4];

    let mut input = input.clone();
    if input.autoplay {
        autoplay(state, &mut input);
    }
    let input = &input;

    match state.screen {
        Screen::Start => {
            if input.begin {
                state.screen = Screen::Play;
                log::info!("Session {} started", state.seed);
                events.push(GameEvent::Started);
            }
        }
        Screen::Play => play_frame(state, input, dt, &mut events),
        Screen::Over => {}
    }

    events
}

fn play_frame(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    state.frames += 1;

    let due = state.spawner.update(dt, state.speed, state.total_score);
    for _ in 0..due {
        let (id, lane) = state.spawn_random_arrow();
        log::debug!("Spawned arrow {id} in {lane} lane");
        events.push(GameEvent::Spawned { id, lane });
    }

    let speed = state.speed;
    for arrow in &mut state.arrows {
        arrow.advance(speed);
    }

    for lane in Lane::ALL {
        if !input.held(lane) {
            continue;
        }
        let signal = match evaluate_press(&mut state.arrows, &state.layout, lane) {
            Some(_) => LaneSignal::Hit,
            None => LaneSignal::Idle,
        };
        state.feedback[lane.index()] = Some(signal);
        if signal == LaneSignal::Hit {
            let divider = state.layout.divider_for(lane);
            state.divider_flash[divider] = Some(lane);
        }
        events.push(GameEvent::LaneSignal { lane, signal });
    }
    // Dividers stay lit until every lane key is released
    if !Lane::ALL.iter().any(|&lane| input.held(lane)) {
        state.divider_flash = [None; 3];
    }

    // Single filter pass: every arrow is classified exactly once
    let mut awarded = Vec::new();
    let mut missed = Vec::new();
    state.arrows.retain(|arrow| {
        if arrow.is_scored() {
            awarded.push((arrow.id, arrow.lane));
            false
        } else if arrow.top() < 0.0 {
            missed.push((arrow.id, arrow.lane));
            false
        } else {
            true
        }
    });

    for (id, lane) in awarded {
        (state.total_score, state.speed) = difficulty::award_hit(state.total_score, state.speed);
        log::debug!(
            "Arrow {id} scored in {lane} lane: total {}, speed {:.2}",
            state.total_score,
            state.speed
        );
        events.push(GameEvent::Scored {
            id,
            lane,
            total_score: state.total_score,
        });
    }

    if !missed.is_empty() {
        for (id, lane) in missed {
            events.push(GameEvent::Missed { id, lane });
        }
        state.screen = Screen::Over;
        log::info!(
            "Game over after {} frames with score {}",
            state.frames,
            state.total_score
        );
        events.push(GameEvent::GameOver {
            final_score: state.total_score,
        });
    }
}

/// Built-in player: begins the game and holds each lane whose next arrow will
/// sit in the hit window after this frame's advance
fn autoplay(state: &GameState, input: &mut TickInput) {
    match state.screen {
        Screen::Start => input.begin = true,
        Screen::Play => {
            for lane in Lane::ALL {
                let marker = state.layout.marker(lane);
                let due = state.arrows.iter().any(|arrow| {
                    let mut next = arrow.clone();
                    next.advance(state.speed);
                    is_candidate(&next, &state.layout, lane) && in_hit_window(&next, marker)
                });
                if due {
                    input.hold(lane);
                }
            }
        }
        Screen::Over => {}
    }
}
