use blockworld_common::{BlockId, GameConfig};
use blockworld_kernel::{Chunk, ChunkManager, Entity};
use blockworld_input::FrameInput;
use glam::Vec3;

use crate::camera::FirstPersonCamera;

/// The first-person player: an entity with a camera and velocity state,
/// owned by the game loop rather than by any chunk.
#[derive(Debug)]
pub struct Player {
    entity: Entity,
    pub camera: FirstPersonCamera,
    velocity: Vec3,
    acceleration: Vec3,
    on_ground: bool,
    selected_block: BlockId,
    config: GameConfig,
}

impl Player {
    pub fn new(config: GameConfig) -> Self {
        let entity = Entity::block_at(BlockId::Dirt, config.spawn_point);
        let camera = FirstPersonCamera {
            position: config.spawn_point + config.eye_offset,
            sensitivity: config.mouse_sensitivity,
            ..FirstPersonCamera::default()
        };
        Self {
            entity,
            camera,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            on_ground: true,
            selected_block: BlockId::Dirt,
            config,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.entity.position()
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn selected_block(&self) -> BlockId {
        self.selected_block
    }

    /// The entity the renderer draws for the player.
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Camera eye position in world space.
    pub fn eye(&self) -> Vec3 {
        self.camera.position
    }

    /// Feed this frame's resolved input: look, movement impulses, jump,
    /// palette selection. Block edits are the interaction layer's job.
    pub fn apply_input(&mut self, input: &FrameInput) {
        self.camera.rotate(input.look_delta.x, input.look_delta.y);

        self.acceleration.x += input.wish_dir.x * self.config.move_speed;
        self.acceleration.z += input.wish_dir.z * self.config.move_speed;

        if input.jump {
            self.jump();
        }
        if let Some(block) = input.select_block {
            self.selected_block = block;
        }
    }

    /// Start a jump. Airborne calls are no-ops.
    pub fn jump(&mut self) {
        if self.on_ground {
            self.on_ground = false;
            self.acceleration.y = self.config.jump_impulse;
        }
    }

    /// Advance the player one frame.
    ///
    /// The step order is deliberate and load-bearing. In particular the whole
    /// accumulated velocity is rescaled by `dt` each frame (not just the
    /// acceleration term), which gives the player an implicit terminal
    /// velocity the collision code relies on.
    pub fn update(&mut self, manager: &ChunkManager, dt: f32) {
        self.velocity += self.acceleration;
        self.velocity *= dt;
        // Horizontal impulses are consumed each frame; vertical carries over.
        self.acceleration = Vec3::new(0.0, self.velocity.y, 0.0);

        if !self.on_ground {
            self.acceleration.y -= self.config.gravity * dt;
        }

        let p = self.position();
        match manager.chunk_by_xz(p.x, p.z) {
            Some(chunk) => {
                self.collide(chunk);
                self.check_on_ground(chunk);
            }
            None => {
                tracing::info!(x = p.x, y = p.y, z = p.z, "player is out of bounds");
            }
        }

        self.entity.transform.position += self.velocity;

        if self.entity.transform.position.y < 0.0 {
            tracing::debug!("player fell through the world");
            self.entity.transform.position.y = self.config.respawn_height;
        }

        self.camera.position = self.position() + self.config.eye_offset;
    }

    /// Swept-position collision against the chunk the player stands in.
    ///
    /// Tests the box one frame ahead; on a hit, vertical motion snaps the
    /// player flush against the obstacle and any contact stops horizontal
    /// motion entirely.
    fn collide(&mut self, chunk: &Chunk) {
        let position = self.position();
        let Some(id) = chunk.entity_by_box_collision(position + self.velocity, &self.entity.bounds)
        else {
            return;
        };
        let Some(obstacle) = chunk.get(id) else {
            return;
        };
        let obstacle_pos = obstacle.position();

        if self.velocity.y > 0.0 {
            // Rising with headroom smaller than the obstacle: ceiling hit.
            if position.y + self.entity.bounds.dimensions.y < obstacle_pos.y {
                self.entity.transform.position.y = (obstacle_pos.y - 1.0).ceil();
                self.velocity.y = 0.0;
            }
        } else if self.velocity.y < 0.0 {
            // Falling from above the obstacle's top: floor hit.
            if position.y > obstacle_pos.y + obstacle.bounds.dimensions.y {
                self.entity.transform.position.y = (obstacle_pos.y + 1.0).floor();
                self.on_ground = true;
                self.velocity.y = 0.0;
            }
        }
        self.velocity.x = 0.0;
        self.velocity.z = 0.0;
    }

    /// Probe slightly below the feet; runs every frame independently of the
    /// swept test, so the grounded flag may be set twice in one frame.
    ///
    /// The probe is deeper than one frame of terminal fall, so it finds
    /// support before the swept test can intersect anything. A falling player
    /// therefore lands here: the airborne-to-grounded transition settles the
    /// feet onto the support's top and zeroes downward velocity.
    fn check_on_ground(&mut self, chunk: &Chunk) {
        let probe = self.position() - Vec3::new(0.0, self.config.ground_probe, 0.0);
        let Some(id) = chunk.entity_by_box_collision(probe, &self.entity.bounds) else {
            self.on_ground = false;
            return;
        };

        if !self.on_ground && self.velocity.y < 0.0 {
            if let Some(support) = chunk.get(id) {
                self.entity.transform.position.y = (support.position().y + 1.0).floor();
                self.velocity.y = 0.0;
            }
        }
        self.on_ground = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockworld_input::{FrameInput, InputState, Key};

    const DT: f32 = 1.0 / 60.0;

    fn flat_world() -> ChunkManager {
        ChunkManager::flat_world(2, 16.0, BlockId::DirtGrass)
    }

    fn player_at(position: Vec3) -> Player {
        Player::new(GameConfig {
            spawn_point: position,
            ..GameConfig::default()
        })
    }

    #[test]
    fn drop_comes_to_rest_on_the_floor() {
        let manager = flat_world();
        let mut player = player_at(Vec3::new(20.5, 50.0, 20.5));

        for _ in 0..10_000 {
            player.update(&manager, DT);
            if player.on_ground() && player.velocity() == Vec3::ZERO {
                break;
            }
        }

        assert!(player.on_ground());
        assert_eq!(player.position().y, 1.0);
        // Camera tracks the entity with the fixed eye offset.
        assert_eq!(player.eye(), player.position() + Vec3::new(0.5, 1.5, 0.5));
    }

    #[test]
    fn landing_stops_horizontal_motion() {
        let manager = flat_world();
        let mut player = player_at(Vec3::new(20.5, 1.001, 20.5));
        player.on_ground = false;
        player.velocity = Vec3::new(18.0, -6.0, 0.0);

        player.update(&manager, DT);

        assert!(player.on_ground());
        assert_eq!(player.velocity(), Vec3::ZERO);
        assert_eq!(player.position(), Vec3::new(20.5, 1.0, 20.5));
    }

    #[test]
    fn rising_into_a_ceiling_snaps_under_it() {
        let mut manager = ChunkManager::new(16.0);
        manager.load_square(2);
        manager
            .add_entity(Entity::block_at(BlockId::Stone, Vec3::new(20.0, 3.0, 20.0)))
            .unwrap();

        let mut player = player_at(Vec3::new(20.5, 1.9, 20.5));
        player.on_ground = false;
        player.acceleration = Vec3::new(0.0, 75.0, 0.0);

        player.update(&manager, DT);

        assert_eq!(player.position().y, 2.0);
        assert_eq!(player.velocity().y, 0.0);
        assert!(!player.on_ground());
    }

    #[test]
    fn jump_only_fires_when_grounded() {
        let manager = flat_world();
        let mut player = player_at(Vec3::new(20.5, 50.0, 20.5));
        for _ in 0..10_000 {
            player.update(&manager, DT);
            if player.on_ground() && player.velocity() == Vec3::ZERO {
                break;
            }
        }
        assert!(player.on_ground());

        player.jump();
        assert!(!player.on_ground());
        assert_eq!(player.acceleration.y, 25.0);

        // Airborne jump is a no-op.
        player.acceleration = Vec3::ZERO;
        player.jump();
        assert_eq!(player.acceleration, Vec3::ZERO);
    }

    #[test]
    fn out_of_bounds_falls_until_the_respawn_clamp() {
        // Only the origin cell is loaded; the player hangs in the void.
        let mut manager = ChunkManager::new(16.0);
        manager.load_square(0);

        let mut player = player_at(Vec3::new(100.0, 5.0, 100.0));
        player.on_ground = false;

        let mut respawned = false;
        for _ in 0..10_000 {
            player.update(&manager, DT);
            if player.position().y == 30.0 && player.velocity().y < 0.0 {
                respawned = true;
                break;
            }
        }
        assert!(respawned, "player should fall through and be reset");
    }

    #[test]
    fn input_moves_selects_and_jumps() {
        let manager = flat_world();
        let mut player = player_at(Vec3::new(20.5, 1.001, 20.5));
        // Settle onto the floor first.
        for _ in 0..10 {
            player.update(&manager, DT);
        }
        assert!(player.on_ground());

        let mut state = InputState::new();
        state.press(Key::D);
        state.press(Key::Space);
        state.press(Key::Num4);
        let input = state.resolve(player.camera.forward(), player.camera.right());

        player.apply_input(&input);

        assert!(player.acceleration.x > 0.0);
        assert!(!player.on_ground());
        assert_eq!(player.acceleration.y, 25.0);
        assert_eq!(player.selected_block(), BlockId::Stone);
    }

    #[test]
    fn look_delta_turns_the_camera() {
        let mut player = player_at(Vec3::new(20.5, 1.0, 20.5));
        let yaw_before = player.camera.yaw;

        player.apply_input(&FrameInput {
            look_delta: glam::Vec2::new(10.0, 0.0),
            ..FrameInput::default()
        });

        assert_eq!(player.camera.yaw, yaw_before + 10.0 * 0.5);
    }
}
