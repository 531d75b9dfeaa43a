//! Orb field simulation
//!
//! Soft glowing orbs drift around the hero section. The pointer pushes nearby
//! orbs away; velocities are damped, clamped and reflected at the edges.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    /// Hue in degrees, used for the gradient colour
    pub hue: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbFieldConfig {
    pub count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Pointer influence distance in pixels
    pub repel_radius: f64,
    pub repel_strength: f64,
    /// Velocity multiplier per 60 Hz frame
    pub damping: f64,
    pub max_speed: f64,
    /// Random acceleration per frame
    pub drift: f64,
}

impl Default for OrbFieldConfig {
    fn default() -> Self {
        Self {
            count: 14,
            min_radius: 40.0,
            max_radius: 120.0,
            repel_radius: 180.0,
            repel_strength: 0.9,
            damping: 0.98,
            max_speed: 3.0,
            drift: 0.03,
        }
    }
}

pub struct OrbField {
    width: f64,
    height: f64,
    config: OrbFieldConfig,
    orbs: Vec<Orb>,
    rng: SmallRng,
}

impl OrbField {
    pub fn new(width: f64, height: f64, config: OrbFieldConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut orbs = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let radius = if config.max_radius > config.min_radius {
                rng.gen_range(config.min_radius..config.max_radius)
            } else {
                config.min_radius
            };
            orbs.push(Orb {
                x: rng.gen_range(0.0..1.0) * width,
                y: rng.gen_range(0.0..1.0) * height,
                vx: rng.gen_range(-1.0..1.0),
                vy: rng.gen_range(-1.0..1.0),
                radius,
                hue: rng.gen_range(200.0..290.0),
            });
        }
        let mut field = Self {
            width,
            height,
            config,
            orbs,
            rng,
        };
        field.keep_in_bounds();
        field
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Orbs placed while an axis had no extent are scattered across the new
    /// one; otherwise they are pulled back inside.
    pub fn resize(&mut self, width: f64, height: f64) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let scatter_x = self.width <= 0.0 && width > 0.0;
        let scatter_y = self.height <= 0.0 && height > 0.0;
        self.width = width;
        self.height = height;
        if scatter_x || scatter_y {
            for orb in &mut self.orbs {
                if scatter_x {
                    orb.x = self.rng.gen_range(0.0..1.0) * width;
                }
                if scatter_y {
                    orb.y = self.rng.gen_range(0.0..1.0) * height;
                }
            }
        }
        self.keep_in_bounds();
    }

    /// Advance the simulation. `dt` is in 60 Hz frames (1.0 = 16.7 ms).
    pub fn step(&mut self, dt: f64, pointer: Option<(f64, f64)>) {
        let dt = dt.clamp(0.0, 4.0);
        let cfg = self.config;
        let damping = cfg.damping.powf(dt);

        for orb in &mut self.orbs {
            if let Some((px, py)) = pointer {
                let dx = orb.x - px;
                let dy = orb.y - py;
                let dist = dx.hypot(dy);
                if dist > f64::EPSILON && dist < cfg.repel_radius {
                    let force = (1.0 - dist / cfg.repel_radius) * cfg.repel_strength;
                    orb.vx += dx / dist * force * dt;
                    orb.vy += dy / dist * force * dt;
                }
            }

            if cfg.drift > 0.0 {
                orb.vx += self.rng.gen_range(-cfg.drift..cfg.drift) * dt;
                orb.vy += self.rng.gen_range(-cfg.drift..cfg.drift) * dt;
            }

            orb.vx *= damping;
            orb.vy *= damping;

            let speed = orb.vx.hypot(orb.vy);
            if speed > cfg.max_speed {
                let scale = cfg.max_speed / speed;
                orb.vx *= scale;
                orb.vy *= scale;
            }

            orb.x += orb.vx * dt;
            orb.y += orb.vy * dt;
            reflect(orb, self.width, self.height);
        }
    }

    fn keep_in_bounds(&mut self) {
        for orb in &mut self.orbs {
            reflect(orb, self.width, self.height);
        }
    }
}

fn reflect(orb: &mut Orb, width: f64, height: f64) {
    let max_x = (width - orb.radius).max(orb.radius);
    let max_y = (height - orb.radius).max(orb.radius);
    if orb.x < orb.radius {
        orb.x = orb.radius;
        orb.vx = orb.vx.abs();
    } else if orb.x > max_x {
        orb.x = max_x;
        orb.vx = -orb.vx.abs();
    }
    if orb.y < orb.radius {
        orb.y = orb.radius;
        orb.vy = orb.vy.abs();
    } else if orb.y > max_y {
        orb.y = max_y;
        orb.vy = -orb.vy.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_config() -> OrbFieldConfig {
        OrbFieldConfig {
            count: 1,
            min_radius: 10.0,
            max_radius: 10.0,
            drift: 0.0,
            damping: 1.0,
            ..Default::default()
        }
    }

    fn single(x: f64, y: f64, vx: f64, vy: f64) -> OrbField {
        let mut field = OrbField::new(800.0, 600.0, still_config(), 1);
        field.orbs[0] = Orb {
            x,
            y,
            vx,
            vy,
            radius: 10.0,
            hue: 220.0,
        };
        field
    }

    #[test]
    fn test_orbs_start_inside_bounds() {
        let field = OrbField::new(800.0, 600.0, OrbFieldConfig::default(), 42);
        assert_eq!(field.orbs().len(), 14);
        for orb in field.orbs() {
            assert!(orb.x >= orb.radius && orb.x <= 800.0 - orb.radius);
            assert!(orb.y >= orb.radius && orb.y <= 600.0 - orb.radius);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = OrbField::new(800.0, 600.0, OrbFieldConfig::default(), 7);
        let b = OrbField::new(800.0, 600.0, OrbFieldConfig::default(), 7);
        assert_eq!(a.orbs(), b.orbs());
    }

    #[test]
    fn test_pointer_repels_nearby_orb() {
        let mut field = single(400.0, 300.0, 0.0, 0.0);
        field.step(1.0, Some((380.0, 300.0)));
        let orb = field.orbs()[0];
        assert!(orb.vx > 0.0);
        assert!(orb.x > 400.0);
        assert_eq!(orb.vy, 0.0);
    }

    #[test]
    fn test_distant_pointer_has_no_effect() {
        let mut field = single(400.0, 300.0, 0.0, 0.0);
        field.step(1.0, Some((10.0, 10.0)));
        assert_eq!(field.orbs()[0].x, 400.0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut field = single(400.0, 300.0, 50.0, 50.0);
        field.step(1.0, None);
        let orb = field.orbs()[0];
        assert!(orb.vx.hypot(orb.vy) <= field.config.max_speed + 1e-9);
    }

    #[test]
    fn test_reflects_at_walls() {
        let mut field = single(795.0, 300.0, 2.0, 0.0);
        field.step(1.0, None);
        let orb = field.orbs()[0];
        assert_eq!(orb.x, 790.0);
        assert!(orb.vx < 0.0);

        let mut field = single(11.0, 11.0, -2.0, -2.0);
        field.step(1.0, None);
        let orb = field.orbs()[0];
        assert!(orb.vx > 0.0 && orb.vy > 0.0);
        assert_eq!((orb.x, orb.y), (10.0, 10.0));
    }

    #[test]
    fn test_damping_slows_orbs() {
        let config = OrbFieldConfig {
            damping: 0.5,
            ..still_config()
        };
        let mut field = OrbField::new(800.0, 600.0, config, 1);
        field.orbs[0] = Orb {
            x: 400.0,
            y: 300.0,
            vx: 2.0,
            vy: 0.0,
            radius: 10.0,
            hue: 220.0,
        };
        field.step(1.0, None);
        assert_eq!(field.orbs()[0].vx, 1.0);
    }

    #[test]
    fn test_resize_pulls_orbs_back_in() {
        let mut field = single(700.0, 500.0, 0.0, 0.0);
        field.resize(300.0, 200.0);
        let orb = field.orbs()[0];
        assert_eq!((orb.x, orb.y), (290.0, 190.0));
        assert_eq!(field.size(), (300.0, 200.0));
    }

    #[test]
    fn test_first_resize_scatters_orbs() {
        let mut field = OrbField::new(0.0, 0.0, OrbFieldConfig::default(), 12345);
        field.resize(1280.0, 720.0);

        let cornered = field
            .orbs()
            .iter()
            .filter(|orb| orb.x == orb.radius && orb.y == orb.radius)
            .count();
        assert!(cornered < 2, "{cornered} orbs stuck in the corner");

        let xs: Vec<f64> = field.orbs().iter().map(|orb| orb.x).collect();
        let spread = xs.iter().cloned().fold(f64::MIN, f64::max)
            - xs.iter().cloned().fold(f64::MAX, f64::min);
        assert!(spread > 320.0, "orbs only span {spread}px");
        for orb in field.orbs() {
            assert!(orb.x >= orb.radius && orb.x <= 1280.0 - orb.radius);
            assert!(orb.y >= orb.radius && orb.y <= 720.0 - orb.radius);
        }
    }

    #[test]
    fn test_first_layout_depends_on_seed() {
        let mut a = OrbField::new(0.0, 0.0, OrbFieldConfig::default(), 1);
        let mut b = OrbField::new(0.0, 0.0, OrbFieldConfig::default(), 2);
        a.resize(1280.0, 720.0);
        b.resize(1280.0, 720.0);
        assert_ne!(a.orbs(), b.orbs());
    }
}
