//! Player Simulation: movement integration, chunk collision, first-person camera.
//!
//! # Invariants
//! - The per-frame update order is fixed; collision and the ground check run
//!   between acceleration integration and translation.
//! - The player is owned by the game loop, never by a chunk.
//! - Out-of-bounds positions are logged and tolerated, not corrected.

pub mod camera;
pub mod player;

pub use camera::FirstPersonCamera;
pub use player::Player;
