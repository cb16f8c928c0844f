//! Run state and the per-frame update cycle.

use glam::DVec2;
use tracing::{debug, info};

use crate::body::{Body, Projection};
use crate::catalog::{self, BodySpec, CatalogError};
use crate::motion;

/// Lowest speed factor "speed down" can reach.
pub const SPEED_FLOOR: f64 = 0.1;

/// Normalized input events consumed by the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimInput {
    /// Window close request.
    Quit,
    TogglePause,
    SpeedUp,
    SpeedDown,
    /// Designated cancel key.
    Cancel,
}

/// `running` and `paused` are independent flags: pausing never stops the
/// loop or the rendering, it only suppresses motion updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunState {
    running: bool,
    paused: bool,
    speed_factor: f64,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            running: true,
            paused: false,
            speed_factor: 1.0,
        }
    }
}

impl RunState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    pub fn apply(&mut self, input: SimInput) {
        match input {
            SimInput::Quit | SimInput::Cancel => {
                if self.running {
                    info!(?input, "quit requested");
                }
                self.running = false;
            }
            SimInput::TogglePause => {
                self.paused = !self.paused;
                info!(paused = self.paused, "pause toggled");
            }
            SimInput::SpeedUp => self.speed_up(),
            SimInput::SpeedDown => self.speed_down(),
        }
    }

    /// Doubles the speed factor. No ceiling.
    pub fn speed_up(&mut self) {
        self.speed_factor *= 2.0;
        debug!(speed = self.speed_factor, "speed up");
    }

    /// Halves the speed factor, clamped at [`SPEED_FLOOR`].
    pub fn speed_down(&mut self) {
        self.speed_factor = (self.speed_factor / 2.0).max(SPEED_FLOOR);
        debug!(speed = self.speed_factor, "speed down");
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSettings {
    /// Simulated days per frame at speed factor 1.
    pub base_step_days: f64,
    pub projection: Projection,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            base_step_days: 1.0,
            projection: Projection::new(DVec2::new(960.0, 500.0), 30.0),
        }
    }
}

/// Owns the bodies and run state; only this type mutates body phases.
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    state: RunState,
    settings: SimSettings,
    elapsed_days: f64,
}

impl Simulation {
    /// Builds every body from the catalog. Catalog defects are fatal.
    pub fn new(specs: &[BodySpec], settings: SimSettings) -> Result<Self, CatalogError> {
        catalog::validate(specs)?;
        let bodies = specs
            .iter()
            .map(|spec| Body::from_spec(spec, settings.projection))
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            bodies = bodies.len(),
            orbiting = bodies.iter().filter(|b| !b.is_anchor()).count(),
            "simulation created"
        );
        Ok(Self {
            bodies,
            state: RunState::default(),
            settings,
            elapsed_days: 0.0,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    /// Simulated days advanced since start.
    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    /// Simulated days the next unpaused update will advance.
    pub fn step_days(&self) -> f64 {
        self.settings.base_step_days * self.state.speed_factor
    }

    pub fn handle_input(&mut self, input: SimInput) {
        self.state.apply(input);
    }

    /// Advances every orbiting body by one step unless paused or stopped.
    pub fn update(&mut self) {
        if !self.state.running || self.state.paused {
            return;
        }
        let dt = self.step_days();
        for body in &mut self.bodies {
            motion::advance(body, dt);
        }
        self.elapsed_days += dt;
    }

    /// One loop cycle minus rendering: apply the polled inputs, then update.
    pub fn frame<I>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = SimInput>,
    {
        for input in inputs {
            self.handle_input(input);
        }
        self.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::solar_system;

    fn sim() -> Simulation {
        Simulation::new(&solar_system(), SimSettings::default()).unwrap()
    }

    #[test]
    fn test_speed_sequence() {
        let mut state = RunState::default();
        assert_eq!(state.speed_factor(), 1.0);
        state.apply(SimInput::SpeedUp);
        assert_eq!(state.speed_factor(), 2.0);
        state.apply(SimInput::SpeedDown);
        state.apply(SimInput::SpeedDown);
        assert_eq!(state.speed_factor(), 0.5);
        for _ in 0..4 {
            state.apply(SimInput::SpeedDown);
        }
        assert_eq!(state.speed_factor(), SPEED_FLOOR);
    }

    #[test]
    fn test_speed_floor_holds() {
        let mut state = RunState::default();
        for _ in 0..10 {
            state.speed_up();
        }
        for _ in 0..100 {
            state.speed_down();
            assert!(state.speed_factor() >= SPEED_FLOOR);
        }
        assert_eq!(state.speed_factor(), 0.1);
    }

    #[test]
    fn test_quit_and_cancel_stop_the_loop() {
        for input in [SimInput::Quit, SimInput::Cancel] {
            let mut state = RunState::default();
            state.apply(input);
            assert!(!state.is_running());
        }
    }

    #[test]
    fn test_bodies_built_from_catalog() {
        let sim = sim();
        assert_eq!(sim.bodies().len(), 9);
        let sun = &sim.bodies()[0];
        assert_eq!(sun.name(), "Sun");
        assert_eq!(sun.position(), DVec2::new(960.0, 500.0));
    }

    #[test]
    fn test_catalog_defect_is_fatal() {
        let mut specs = solar_system();
        specs[2].radius = -5.0;
        assert!(Simulation::new(&specs, SimSettings::default()).is_err());
    }

    #[test]
    fn test_pause_suppresses_motion() {
        let mut sim = sim();
        sim.frame([SimInput::SpeedUp]);
        sim.frame([SimInput::TogglePause]);
        let snapshot = sim.bodies().to_vec();
        let elapsed = sim.elapsed_days();
        for _ in 0..50 {
            sim.frame(std::iter::empty());
        }
        assert_eq!(sim.bodies(), &snapshot[..]);
        assert_eq!(sim.elapsed_days(), elapsed);

        sim.frame([SimInput::TogglePause]);
        assert_ne!(sim.bodies()[3], snapshot[3]);
    }

    #[test]
    fn test_step_scales_with_speed() {
        let mut sim = sim();
        sim.frame([SimInput::SpeedUp, SimInput::SpeedUp]);
        assert_eq!(sim.elapsed_days(), 4.0);
        let earth = &sim.bodies()[3];
        let expected = 4.0 * std::f64::consts::TAU / 365.25;
        assert!((earth.angle() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_anchor_fixed_over_many_frames() {
        let mut sim = sim();
        for _ in 0..200 {
            sim.frame([SimInput::SpeedUp]);
        }
        assert_eq!(sim.bodies()[0].position(), DVec2::new(960.0, 500.0));
    }

    #[test]
    fn test_no_motion_after_quit() {
        let mut sim = sim();
        let snapshot = sim.bodies().to_vec();
        sim.frame([SimInput::Cancel]);
        assert!(!sim.state().is_running());
        assert_eq!(sim.bodies(), &snapshot[..]);
    }
}
