//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers cannot mutate world truth; they read chunks and the player.
//! - A drawable is a model-name reference plus a transform; geometry lives
//!   behind the backend.
//!
//! # Workaround
//! Provides a trait-based renderer interface with a debug text renderer as a
//! workaround for a GPU backend. The trait is stable; swap in a real backend
//! without changing consumers.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "blockworld-render v0.1.0"
}
