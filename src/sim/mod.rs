//! Deterministic simulation module
//!
//! Ball motion and wall reflection live here. This module must stay pure:
//! - One fixed step per frame
//! - No clamping or other corrections beyond velocity sign flips
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallContact, wall_contact};
pub use state::{Arena, Ball};
pub use tick::tick;
