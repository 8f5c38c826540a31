mod environment;

pub use environment::EnvironmentMap;

use crate::hittable::HitRecord;
use crate::math::*;

pub use crate::geometry::*;
pub use crate::materials::*;

// distance to push secondary ray origins off a surface along its normal
pub const NORMAL_OFFSET: f64 = 0.0001;
// intersections closer than this to a ray's origin are ignored
pub const INTERSECTION_TIME_OFFSET: f64 = 0.000001;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub color: RGBColor,
}

impl PointLight {
    pub const fn new(position: Point3, color: RGBColor) -> Self {
        PointLight { position, color }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.color.is_finite()
    }
}

/// The scene: an ordered list of spheres, exactly one point light and a background.
/// Never mutated once rendering starts, so a shared reference can be handed to every worker.
#[derive(Clone, Debug)]
pub struct World {
    pub spheres: Vec<Sphere>,
    pub light: PointLight,
    pub environment: EnvironmentMap,
    pub intersection_epsilon: f64,
}

impl World {
    pub fn new(spheres: Vec<Sphere>, light: PointLight, environment: EnvironmentMap) -> Self {
        let total = spheres.len();
        let spheres: Vec<Sphere> = spheres
            .into_iter()
            .enumerate()
            .filter_map(|(index, sphere)| {
                if sphere.is_valid() {
                    Some(sphere)
                } else {
                    warn!(
                        "dropping sphere {} with radius {} at {:?} and {:?}, it cannot be rendered",
                        index, sphere.radius, sphere.origin, sphere.material
                    );
                    None
                }
            })
            .collect();
        info!(
            "constructed world with {} of {} spheres",
            spheres.len(),
            total
        );
        World {
            spheres,
            light,
            environment,
            intersection_epsilon: INTERSECTION_TIME_OFFSET,
        }
    }

    pub fn with_intersection_epsilon(mut self, epsilon: f64) -> Self {
        self.intersection_epsilon = epsilon;
        self
    }

    /// Ground, a red sphere and a blue mirror-ish sphere under a white light.
    pub fn default_scene() -> Self {
        World::new(
            vec![
                Sphere::new(
                    10000.0,
                    Point3::new(0.0, -10004.0, -20.0),
                    Material::diffuse(RGBColor::new(0.8, 0.8, 0.8)),
                ),
                Sphere::new(
                    1.0,
                    Point3::new(0.0, 0.0, -6.0),
                    Material::new(RGBColor::new(0.9, 0.1, 0.1), 0.25),
                ),
                Sphere::new(
                    1.2,
                    Point3::new(2.0, 0.2, -7.0),
                    Material::new(RGBColor::new(0.1, 0.3, 0.9), 0.5),
                ),
            ],
            PointLight::new(Point3::new(5.0, 10.0, -2.0), RGBColor::WHITE),
            EnvironmentMap::sky(),
        )
    }

    /// Closest sphere hit by `r` as `(distance, index)`. Exact ties go to the first sphere scanned.
    pub fn intersect(&self, r: Ray) -> Option<(f64, usize)> {
        let mut closest_so_far = INFINITY;
        let mut closest = None;
        for (index, sphere) in self.spheres.iter().enumerate() {
            let time = sphere.intersect(r, self.intersection_epsilon);
            if time < closest_so_far {
                closest_so_far = time;
                closest = Some((time, index));
            }
        }
        closest
    }

    pub fn hit(&self, r: Ray) -> Option<HitRecord> {
        self.intersect(r).map(|(time, index)| {
            let point = r.point_at_parameter(time);
            let normal = self.spheres[index].normal_at(point);
            HitRecord::new(time, point, normal, index)
        })
    }

    pub fn get_primitive(&self, index: usize) -> &Sphere {
        &self.spheres[index]
    }
}
