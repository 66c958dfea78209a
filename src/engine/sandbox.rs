//! The [`Sandbox`] is one running session: the environment, the input state
//! and the frame clock that drives the physics.

use crate::config::SandboxConfig;
use crate::environment::Environment;
use crate::input::InputManager;
use crate::shape::RenderShape;
use log::{info, trace};
use std::time::{Duration, Instant};

pub struct Sandbox {
    pub environment: Environment,
    pub input: InputManager,
    /// Drawn on top of the environment in screen space, e.g. a drag preview.
    pub overlay: Option<RenderShape>,

    config: SandboxConfig,
    start_time: Instant,
    delta_time: Duration,
    last_frame_time: Instant,
    accumulator: Duration,
    requested_shutdown: bool,
}

impl Default for Sandbox {
    fn default() -> Self {
        Sandbox::new(SandboxConfig::default())
    }
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> Self {
        Sandbox {
            environment: Environment::new(config.environment.clone()),
            input: InputManager::default(),
            overlay: None,
            config,
            start_time: Instant::now(),
            delta_time: Duration::ZERO,
            last_frame_time: Instant::now(),
            accumulator: Duration::ZERO,
            requested_shutdown: false,
        }
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Measures the wall clock time since the last frame and advances by it.
    pub fn update(&mut self) {
        let frame_time = self.last_frame_time.elapsed();
        self.last_frame_time = Instant::now();
        self.advance(frame_time);
    }

    /// Advances the simulation by `frame_time`, clamped to the configured
    /// maximum, and ends the input frame.
    ///
    /// Returns the number of physics steps taken.
    pub fn advance(&mut self, frame_time: Duration) -> usize {
        let frame_time = frame_time.min(self.config.max_frame_time);
        self.delta_time = frame_time;

        let steps = match self.config.fixed_timestep {
            Some(step) if !step.is_zero() => {
                self.accumulator += frame_time;

                let mut steps = 0;
                while self.accumulator >= step {
                    self.environment.step(step.as_secs_f32());
                    self.accumulator -= step;
                    steps += 1;
                }
                steps
            }
            _ if frame_time.is_zero() => 0,
            _ => {
                self.environment.step(frame_time.as_secs_f32());
                1
            }
        };

        trace!("Advanced {frame_time:?} in {steps} physics steps");
        self.input.next_frame();

        steps
    }

    /// Leftover time not yet consumed by fixed steps.
    pub fn accumulated_time(&self) -> Duration {
        self.accumulator
    }

    pub fn delta_time(&self) -> Duration {
        self.delta_time
    }

    pub fn start_time(&self) -> &Instant {
        &self.start_time
    }

    pub fn time(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn shutdown(&mut self) {
        info!("Sandbox shutdown requested");
        self.requested_shutdown = true;
    }

    pub fn is_shutting_down(&self) -> bool {
        self.requested_shutdown
    }
}
