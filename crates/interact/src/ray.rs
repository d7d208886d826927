use glam::Vec3;

/// Fixed-increment samples along a direction, starting at the origin itself.
///
/// The step count bounds worst-case work per scan; there is no early
/// termination besides the caller breaking out.
#[derive(Debug, Clone)]
pub struct RaySteps {
    origin: Vec3,
    direction: Vec3,
    step_size: f32,
    steps: u32,
    taken: u32,
}

impl RaySteps {
    pub fn new(origin: Vec3, direction: Vec3, step_size: f32, steps: u32) -> Self {
        Self {
            origin,
            direction,
            step_size,
            steps,
            taken: 0,
        }
    }
}

impl Iterator for RaySteps {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.taken >= self.steps {
            return None;
        }
        let point = self.origin + (self.taken as f32 * self.step_size) * self.direction;
        self.taken += 1;
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_the_origin() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let mut ray = RaySteps::new(origin, Vec3::X, 0.01, 500);
        assert_eq!(ray.next(), Some(origin));
    }

    #[test]
    fn sample_count_and_reach_are_bounded() {
        let ray = RaySteps::new(Vec3::ZERO, Vec3::X, 0.01, 500);
        let points: Vec<Vec3> = ray.collect();

        assert_eq!(points.len(), 500);
        let last = points.last().unwrap();
        assert!((last.x - 4.99).abs() < 1e-4);
    }
}
