//! Pseudo-3D grid wave
//!
//! A ground-plane grid is displaced by two travelling sine waves plus a ripple
//! centred under the pointer, then projected with a pinhole camera onto the
//! canvas.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridWaveConfig {
    pub cols: usize,
    pub rows: usize,
    /// Distance between grid lines in world units
    pub spacing: f64,
    pub amplitude: f64,
    /// Radians per world unit
    pub wave_number: f64,
    /// Radians per second
    pub speed: f64,
    pub camera_height: f64,
    pub focal_length: f64,
    /// Depth of the first grid row in front of the camera
    pub near: f64,
    /// Fraction of the canvas height where the horizon sits
    pub horizon: f64,
    pub ripple_radius: f64,
    pub ripple_strength: f64,
}

impl Default for GridWaveConfig {
    fn default() -> Self {
        Self {
            cols: 40,
            rows: 24,
            spacing: 40.0,
            amplitude: 14.0,
            wave_number: 0.012,
            speed: 1.2,
            camera_height: 160.0,
            focal_length: 420.0,
            near: 60.0,
            horizon: 0.35,
            ripple_radius: 200.0,
            ripple_strength: 26.0,
        }
    }
}

/// A grid vertex on screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Perspective scale, 1.0 at the focal distance; used for line alpha
    pub scale: f64,
}

pub struct GridWave {
    config: GridWaveConfig,
    width: f64,
    height: f64,
}

impl GridWave {
    pub fn new(width: f64, height: f64, config: GridWaveConfig) -> Self {
        Self {
            config,
            width,
            height,
        }
    }

    pub fn config(&self) -> &GridWaveConfig {
        &self.config
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    fn horizon_y(&self) -> f64 {
        self.height * self.config.horizon
    }

    /// World x of a grid column; the grid is centred on the camera
    fn column_x(&self, col: usize) -> f64 {
        (col as f64 - (self.config.cols.saturating_sub(1)) as f64 / 2.0) * self.config.spacing
    }

    fn row_z(&self, row: usize) -> f64 {
        self.config.near + row as f64 * self.config.spacing
    }

    /// Surface height at world `(x, z)` and time `t` seconds
    pub fn height_at(&self, x: f64, z: f64, t: f64, pointer: Option<(f64, f64)>) -> f64 {
        let cfg = &self.config;
        let k = cfg.wave_number;
        let mut y = cfg.amplitude
            * 0.5
            * ((x * k + t * cfg.speed).sin() + (z * k * 0.8 - t * cfg.speed * 0.6).cos());

        if let Some((px, pz)) = pointer {
            let d = (x - px).hypot(z - pz);
            if d < cfg.ripple_radius {
                let falloff = 1.0 - d / cfg.ripple_radius;
                y += cfg.ripple_strength * falloff * falloff * (d * 0.05 - t * 3.0).cos();
            }
        }
        y
    }

    /// Project a world point; `None` when it is at or behind the camera plane
    pub fn project(&self, x: f64, y: f64, z: f64) -> Option<ProjectedPoint> {
        if z <= 1.0 {
            return None;
        }
        let scale = self.config.focal_length / z;
        Some(ProjectedPoint {
            x: self.width / 2.0 + x * scale,
            y: self.horizon_y() + (self.config.camera_height - y) * scale,
            scale,
        })
    }

    /// Map a screen position back onto the ground plane (`y = 0`).
    /// Points above the horizon have no ground intersection.
    pub fn unproject(&self, sx: f64, sy: f64) -> Option<(f64, f64)> {
        let below = sy - self.horizon_y();
        if below <= f64::EPSILON {
            return None;
        }
        let z = self.config.focal_length * self.config.camera_height / below;
        let x = (sx - self.width / 2.0) * z / self.config.focal_length;
        Some((x, z))
    }

    /// Projected grid for time `t`; rows run from near to far
    pub fn frame(&self, t: f64, pointer_screen: Option<(f64, f64)>) -> Vec<Vec<Option<ProjectedPoint>>> {
        let pointer = pointer_screen.and_then(|(sx, sy)| self.unproject(sx, sy));
        (0..self.config.rows)
            .map(|row| {
                let z = self.row_z(row);
                (0..self.config.cols)
                    .map(|col| {
                        let x = self.column_x(col);
                        let y = self.height_at(x, z, t, pointer);
                        self.project(x, y, z)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave() -> GridWave {
        GridWave::new(1280.0, 720.0, GridWaveConfig::default())
    }

    #[test]
    fn test_height_bounded_without_pointer() {
        let wave = wave();
        let limit = wave.config().amplitude;
        for i in 0..200 {
            let t = i as f64 * 0.1;
            let h = wave.height_at(i as f64 * 13.0, i as f64 * 7.0 + 60.0, t, None);
            assert!(h.abs() <= limit + 1e-9);
        }
    }

    #[test]
    fn test_pointer_ripple_is_local() {
        let wave = wave();
        let far = wave.height_at(0.0, 500.0, 0.0, Some((2000.0, 2000.0)));
        assert_eq!(far, wave.height_at(0.0, 500.0, 0.0, None));
        let near = wave.height_at(0.0, 500.0, 0.0, Some((0.0, 500.0)));
        assert!((near - far - wave.config().ripple_strength).abs() < 1e-9);
    }

    #[test]
    fn test_project_centre_line() {
        let wave = wave();
        let point = wave.project(0.0, 0.0, 420.0).unwrap();
        assert_eq!(point.x, 640.0);
        assert_eq!(point.scale, 1.0);
        assert_eq!(point.y, 720.0 * 0.35 + 160.0);
        assert!(wave.project(0.0, 0.0, 0.5).is_none());
    }

    #[test]
    fn test_unproject_inverts_ground_projection() {
        let wave = wave();
        let point = wave.project(120.0, 0.0, 500.0).unwrap();
        let (x, z) = wave.unproject(point.x, point.y).unwrap();
        assert!((x - 120.0).abs() < 1e-6);
        assert!((z - 500.0).abs() < 1e-6);
        assert!(wave.unproject(640.0, 10.0).is_none());
    }

    #[test]
    fn test_frame_dimensions() {
        let wave = wave();
        let frame = wave.frame(1.5, Some((640.0, 600.0)));
        assert_eq!(frame.len(), 24);
        assert!(frame.iter().all(|row| row.len() == 40));
        assert!(frame.iter().flatten().all(Option::is_some));
    }

    #[test]
    fn test_far_rows_are_smaller() {
        let wave = wave();
        let frame = wave.frame(0.0, None);
        let near = frame[0][20].unwrap();
        let far = frame[23][20].unwrap();
        assert!(far.scale < near.scale);
    }
}
