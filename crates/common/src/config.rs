use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables for the simulation and edit reach.
///
/// Defaults are the values the game ships with; a JSON file may override any
/// subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward acceleration applied per second while airborne.
    pub gravity: f32,
    /// Vertical acceleration impulse applied by a jump.
    pub jump_impulse: f32,
    /// Horizontal acceleration impulse per held movement key.
    pub move_speed: f32,
    /// How far below the player's feet the ground check probes.
    pub ground_probe: f32,
    /// Camera eye position relative to the player's min corner.
    pub eye_offset: Vec3,
    /// Altitude the player is reset to after falling through the world.
    pub respawn_height: f32,
    /// Where the player starts.
    pub spawn_point: Vec3,
    /// Number of samples taken along an edit ray.
    pub ray_steps: u32,
    /// World-unit distance between consecutive ray samples.
    pub ray_step_size: f32,
    /// Degrees of camera rotation per unit of mouse movement.
    pub mouse_sensitivity: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 50.0,
            jump_impulse: 25.0,
            move_speed: 10.0,
            ground_probe: 0.2,
            eye_offset: Vec3::new(0.5, 1.5, 0.5),
            respawn_height: 30.0,
            spawn_point: Vec3::new(20.5, 30.0, 20.5),
            ray_steps: 500,
            ray_step_size: 0.01,
            mouse_sensitivity: 0.5,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Maximum distance an edit ray can reach.
    pub fn reach(&self) -> f32 {
        self.ray_steps as f32 * self.ray_step_size
    }
}
