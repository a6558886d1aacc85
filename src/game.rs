//! Game session: clock, simulation and render pass
//!
//! The host (window, input polling, GPU) calls `update` once per display frame
//! with the clock reading and the held inputs, then `render` into its sink, then
//! waits for the next refresh.

use crate::consts::FRAME_DT;
use crate::renderer::{RenderOptions, RenderSink, render};
use crate::settings::Settings;
use crate::sim::{FrameClock, GameEvent, GameState, Screen, TickInput, tick};

/// A running session
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub clock: FrameClock,
    options: RenderOptions,
    autoplay: bool,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.resolve_seed();
        log::info!("Game initialized with seed: {seed}");
        Self {
            state: GameState::new(seed),
            clock: FrameClock::new(),
            options: settings.render_options(),
            autoplay: settings.autoplay,
        }
    }

    /// Run every simulation frame due at clock reading `now` (seconds) with
    /// `input` held throughout, and collect their events
    pub fn update(&mut self, now: f64, input: &TickInput) -> Vec<GameEvent> {
        let frames = self.clock.advance(now);
        let mut input = input.clone();
        input.autoplay |= self.autoplay;

        let mut events = Vec::new();
        for _ in 0..frames {
            events.extend(tick(&mut self.state, &input, FRAME_DT as f32));
            if self.is_over() {
                break;
            }
        }
        events
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        render(&self.state, &self.options, sink);
    }

    pub fn is_over(&self) -> bool {
        self.state.screen == Screen::Over
    }

    /// Throw the session away and start fresh on the start screen
    pub fn restart(&mut self, seed: u64) {
        log::info!("Game restarted with seed: {seed}");
        self.state = GameState::with_layout(seed, self.state.layout.clone());
        self.clock = FrameClock::new();
    }
}
