use crate::math::*;

pub struct HitRecord {
    pub time: f64,
    pub point: Point3,
    pub normal: Vec3,
    // index into the world's primitive list
    pub primitive: usize,
}

impl HitRecord {
    pub fn new(time: f64, point: Point3, normal: Vec3, primitive: usize) -> Self {
        HitRecord {
            time,
            point,
            normal: normal.normalized(),
            primitive,
        }
    }
}
