use crate::materials::Material;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub origin: Point3,
    pub material: Material,
}

impl Sphere {
    pub fn new(radius: f64, origin: Point3, material: Material) -> Sphere {
        Sphere {
            radius,
            origin,
            material,
        }
    }

    /// Non-positive or non-finite radii can't describe a surface, and a non-finite
    /// material would poison every color computed from it.
    pub fn is_valid(&self) -> bool {
        self.radius.is_finite()
            && self.radius > 0.0
            && self.origin.is_finite()
            && self.material.is_finite()
    }

    /// Smallest parametric distance greater than `epsilon` at which `r` crosses the surface,
    /// or `INFINITY` when there is none.
    pub fn intersect(&self, r: Ray, epsilon: f64) -> f64 {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || a == 0.0 {
            return INFINITY;
        }
        let discriminant_sqrt = discriminant.sqrt();

        let near = (-b - discriminant_sqrt) / (2.0 * a);
        if near > epsilon {
            return near;
        }
        let far = (-b + discriminant_sqrt) / (2.0 * a);
        if far > epsilon {
            return far;
        }
        INFINITY
    }

    /// Outward unit normal for a point on the surface.
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        (point - self.origin).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::RGBColor;

    const EPSILON: f64 = 1e-6;

    fn unit_sphere_at(z: f64) -> Sphere {
        Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, z),
            Material::diffuse(RGBColor::WHITE),
        )
    }

    #[test]
    fn test_hit_returns_near_root() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        assert_eq!(sphere.intersect(ray, EPSILON), 4.0);
    }

    #[test]
    fn test_miss_returns_infinity() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Point3::new(0.0, 1.5, 0.0), -Vec3::Z);
        assert_eq!(sphere.intersect(ray, EPSILON), INFINITY);

        // sphere entirely behind the ray
        let ray = Ray::new(Point3::ORIGIN, Vec3::Z);
        assert_eq!(sphere.intersect(ray, EPSILON), INFINITY);
    }

    #[test]
    fn test_origin_inside_returns_far_root() {
        let sphere = unit_sphere_at(0.0);
        let ray = Ray::new(Point3::ORIGIN, Vec3::X);
        assert_eq!(sphere.intersect(ray, EPSILON), 1.0);
    }

    #[test]
    fn test_tangent_ray_is_a_hit() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), -Vec3::Z);
        assert_eq!(sphere.intersect(ray, EPSILON), 5.0);
    }

    #[test]
    fn test_ray_leaving_surface_does_not_self_intersect() {
        let sphere = unit_sphere_at(-5.0);
        // starts exactly on the surface and points away from it
        let ray = Ray::new(Point3::new(0.0, 0.0, -4.0), Vec3::Z);
        assert_eq!(sphere.intersect(ray, EPSILON), INFINITY);
    }

    #[test]
    fn test_degenerate_spheres_do_not_panic() {
        let mut sphere = unit_sphere_at(-5.0);
        sphere.radius = 0.0;
        assert!(!sphere.is_valid());
        let ray = Ray::new(Point3::new(0.0, 0.5, 0.0), -Vec3::Z);
        assert_eq!(sphere.intersect(ray, EPSILON), INFINITY);

        sphere.radius = -1.0;
        assert!(!sphere.is_valid());
        let _ = sphere.intersect(ray, EPSILON);

        // zero direction never produces a hit
        let ray = Ray::new(Point3::ORIGIN, Vec3::ZERO);
        assert_eq!(unit_sphere_at(-5.0).intersect(ray, EPSILON), INFINITY);
    }

    #[test]
    fn test_normal() {
        let sphere = unit_sphere_at(-5.0);
        let normal = sphere.normal_at(Point3::new(0.0, 0.0, -4.0));
        assert_eq!(normal, Vec3::Z);
    }
}
