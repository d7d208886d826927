//! Input Resolution: polled key/mouse state mapped to an explicit per-frame result.
//!
//! # Invariants
//! - The simulation consumes `FrameInput` values, never raw key or button state.
//! - Resolution is scoped to the game loop; no input state lives at process scope.

pub mod frame;

pub use frame::{EditAction, FrameInput, InputState, Key, MouseButton};
