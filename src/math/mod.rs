mod color;
mod point;
mod vec;

pub use color::RGBColor;
pub use point::Point3;
pub use std::f64::consts::PI;
pub use std::f64::INFINITY;
pub use vec::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    // direction is expected to be normalized already, so that `t` is a true distance.
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f64) -> Point3 {
        self.origin + self.direction * time
    }
}
