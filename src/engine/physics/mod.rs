//! Physics simulation powered by `rapier2d`.
//!
//! The [`PhysicsSimulator`] owns every rigid body and collider and executes
//! one physics step per call. Bodies are addressed by rapier's generational
//! handles, so a handle to a removed body reads back as `None`.

pub mod simulator;

pub use simulator::*;
