//! Kinematic core of the orrery: body state, circular motion, the body
//! catalog, the run-state machine and fixed-rate frame pacing.
//!
//! Nothing in here touches a window or a GPU.

pub mod body;
pub mod catalog;
pub mod motion;
pub mod pacing;
pub mod sim;

pub use body::{Body, BodyKind, CircularOrbit, Projection, Rgb};
pub use catalog::{solar_system, BodySpec, CatalogError};
pub use motion::{advance, advance_angle};
pub use pacing::FramePacer;
pub use sim::{RunState, SimInput, SimSettings, Simulation, SPEED_FLOOR};
