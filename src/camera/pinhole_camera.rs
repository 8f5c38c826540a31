use crate::math::*;

/// Pinhole camera looking down `-z` with `+y` up.
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    pub origin: Point3,
    half_height: f64,
    aspect_ratio: f64,
    width: usize,
    height: usize,
}

impl PinholeCamera {
    // vertical_fov is in radians
    pub fn new(origin: Point3, vertical_fov: f64, width: usize, height: usize) -> PinholeCamera {
        let half_height = (vertical_fov / 2.0).tan();
        let aspect_ratio = width as f64 / height.max(1) as f64;
        debug!(
            "constructing pinhole camera at {:?}, vfov {} rad, aspect ratio {}",
            origin, vertical_fov, aspect_ratio
        );
        PinholeCamera {
            origin,
            half_height,
            aspect_ratio,
            width,
            height,
        }
    }

    pub fn resolution(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Primary ray through the center of pixel `(px, py)`, row 0 at the top of the image.
    pub fn get_ray(&self, px: usize, py: usize) -> Ray {
        let (width, height) = (self.width as f64, self.height as f64);
        let x = (2.0 * (px as f64 + 0.5) / width - 1.0) * self.half_height * self.aspect_ratio;
        let y = (1.0 - 2.0 * (py as f64 + 0.5) / height) * self.half_height;
        Ray::new(self.origin, Vec3::new(x, y, -1.0).normalized())
    }
}
