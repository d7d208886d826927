use blockworld_kernel::ChunkManager;
use blockworld_sim::{FirstPersonCamera, Player};
use glam::Vec3;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl RenderView {
    /// View looking along a first-person camera's forward vector.
    pub fn from_camera(camera: &FirstPersonCamera) -> Self {
        Self {
            eye: camera.position,
            target: camera.position + camera.forward(),
            ..Self::default()
        }
    }
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 10.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads chunk and player state plus a view configuration, then
/// produces output. It never mutates world truth.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world state and view.
    fn render(&self, world: &ChunkManager, player: &Player, view: &RenderView) -> Self::Output;
}

/// Debug text renderer ... a workaround for a GPU backend.
///
/// Produces a human-readable representation of the world and player state.
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &ChunkManager, player: &Player, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== World State (chunks={}, entities={}) ===\n",
            world.chunk_count(),
            world.entity_count()
        ));

        let p = player.position();
        out.push_str(&format!(
            "Player: pos=({:.2}, {:.2}, {:.2}) grounded={} holding={:?} model={}\n",
            p.x,
            p.y,
            p.z,
            player.on_ground(),
            player.selected_block(),
            player.entity().model
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        // Stable listing order regardless of hash-map iteration.
        let mut cells: Vec<_> = world
            .chunks()
            .map(|c| (c.coord(), c.len()))
            .collect();
        cells.sort_by_key(|(coord, _)| (coord.x, coord.z));
        for (coord, count) in cells {
            out.push_str(&format!(
                "  chunk ({:>3}, {:>3}): {} entities\n",
                coord.x, coord.z, count
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockworld_common::{BlockId, GameConfig};

    fn demo_state() -> (ChunkManager, Player) {
        let manager = ChunkManager::flat_world(1, 16.0, BlockId::DirtGrass);
        let player = Player::new(GameConfig::default());
        (manager, player)
    }

    #[test]
    fn debug_renderer_reports_counts() {
        let (manager, player) = demo_state();
        let view = RenderView::from_camera(&player.camera);
        let output = DebugTextRenderer::new().render(&manager, &player, &view);

        assert!(output.contains("chunks=9"));
        assert!(output.contains(&format!("entities={}", 9 * 16 * 16)));
        assert!(output.contains("grounded=true"));
    }

    #[test]
    fn chunk_listing_is_sorted() {
        let (manager, player) = demo_state();
        let view = RenderView::default();
        let output = DebugTextRenderer::new().render(&manager, &player, &view);

        let first = output.find("chunk ( -1,  -1)").expect("listing present");
        let last = output.find("chunk (  1,   1)").expect("listing present");
        assert!(first < last);
    }

    #[test]
    fn view_from_camera_looks_forward() {
        let (_, player) = demo_state();
        let view = RenderView::from_camera(&player.camera);
        assert_eq!(view.eye, player.eye());
        assert!(((view.target - view.eye).length() - 1.0).abs() < 1e-6);
    }
}
