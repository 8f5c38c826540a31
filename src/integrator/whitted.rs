use crate::integrator::SamplerIntegrator;
use crate::math::*;
use crate::profile::Profile;
use crate::world::{World, NORMAL_OFFSET};

// shadow rays that stop this close to the light don't count as occluded
pub const SHADOW_TOLERANCE: f64 = 0.000001;

/// Constants of the local illumination model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadingSettings {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    // multiplier applied to the ambient term when the light is blocked
    pub shadow_factor: f64,
    pub normal_offset: f64,
    pub shadow_tolerance: f64,
}

impl Default for ShadingSettings {
    fn default() -> Self {
        ShadingSettings {
            ambient: 0.05,
            diffuse: 0.9,
            specular: 0.6,
            shininess: 64.0,
            shadow_factor: 0.4,
            normal_offset: NORMAL_OFFSET,
            shadow_tolerance: SHADOW_TOLERANCE,
        }
    }
}

/// Recursive tracer: ambient + diffuse + Blinn-Phong specular from a single point light,
/// hard shadows, and mirror reflection chains cut off after `max_depth` bounces.
pub struct WhittedIntegrator<'a> {
    pub world: &'a World,
    pub max_depth: u16,
    pub shading: ShadingSettings,
}

impl<'a> WhittedIntegrator<'a> {
    pub fn new(world: &'a World, max_depth: u16, shading: ShadingSettings) -> Self {
        WhittedIntegrator {
            world,
            max_depth,
            shading,
        }
    }

    pub fn trace(&self, ray: Ray, depth: u32, profile: &mut Profile) -> RGBColor {
        if depth > self.max_depth as u32 {
            return RGBColor::BLACK;
        }

        let Some(hit) = self.world.hit(ray) else {
            profile.env_hits += 1;
            return self.world.environment.emission(ray.direction);
        };
        debug_assert!(hit.point.is_finite(), "ray {:?} produced a non-finite hit", ray);

        let shading = &self.shading;
        let material = self.world.get_primitive(hit.primitive).material;
        let light = self.world.light;

        let mut color = material.color * shading.ambient;

        let to_light = light.position - hit.point;
        let light_distance = to_light.norm();
        let to_light = to_light.normalized();
        // secondary rays start slightly above the surface so they can't hit it again
        let surface_origin = hit.point + hit.normal * shading.normal_offset;

        if self.occluded(surface_origin, to_light, light_distance, profile) {
            color = color * shading.shadow_factor;
        } else {
            let cos_theta = (hit.normal * to_light).max(0.0);
            color += material.color * (cos_theta * shading.diffuse) * light.color;

            let view = (ray.origin - hit.point).normalized();
            let half_vector = (view + to_light).normalized();
            let specular = (hit.normal * half_vector).max(0.0).powf(shading.shininess);
            color += light.color * (specular * shading.specular);
        }

        if material.is_reflective() {
            let k = material.reflectivity;
            let direction = ray.direction.reflect(hit.normal).normalized();
            profile.reflection_rays += 1;
            let reflected = self.trace(Ray::new(surface_origin, direction), depth + 1, profile);
            color = color * (1.0 - k) + reflected * k;
        }

        debug_assert!(color.is_finite(), "{:?} resulted in {:?}", ray, color);
        color.clamped()
    }

    // `light_distance` is measured from the hit point, not from the offset origin.
    fn occluded(
        &self,
        origin: Point3,
        to_light: Vec3,
        light_distance: f64,
        profile: &mut Profile,
    ) -> bool {
        profile.shadow_rays += 1;
        match self.world.intersect(Ray::new(origin, to_light)) {
            Some((time, _)) => time < light_distance - self.shading.shadow_tolerance,
            None => false,
        }
    }
}

impl<'a> SamplerIntegrator for WhittedIntegrator<'a> {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> RGBColor {
        profile.camera_rays += 1;
        self.trace(camera_ray, 0, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{EnvironmentMap, Material, PointLight, Sphere};

    const MAX_DEPTH: u16 = 3;

    fn world_with(spheres: Vec<Sphere>, light_position: Point3) -> World {
        World::new(
            spheres,
            PointLight::new(light_position, RGBColor::WHITE),
            EnvironmentMap::sky(),
        )
    }

    fn assert_close(a: RGBColor, b: RGBColor) {
        assert!(
            (a.r - b.r).abs() < 1e-12 && (a.g - b.g).abs() < 1e-12 && (a.b - b.b).abs() < 1e-12,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_empty_world_returns_background_at_every_depth() {
        let world = world_with(vec![], Point3::new(5.0, 10.0, -2.0));
        let integrator = WhittedIntegrator::new(&world, MAX_DEPTH, ShadingSettings::default());
        let mut profile = Profile::default();
        let directions = [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.3, 0.8, -0.5).normalized(),
            Vec3::new(-0.2, -0.9, 0.1).normalized(),
        ];
        for direction in directions {
            let ray = Ray::new(Point3::ORIGIN, direction);
            let expected = world.environment.emission(direction);
            for depth in 0..=MAX_DEPTH as u32 {
                assert_eq!(integrator.trace(ray, depth, &mut profile), expected);
            }
        }
        assert_eq!(profile.env_hits, 3 * (MAX_DEPTH as usize + 1));
    }

    #[test]
    fn test_beyond_depth_cap_is_black() {
        let world = world_with(vec![], Point3::new(5.0, 10.0, -2.0));
        let integrator = WhittedIntegrator::new(&world, MAX_DEPTH, ShadingSettings::default());
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        let color = integrator.trace(ray, MAX_DEPTH as u32 + 1, &mut Profile::default());
        assert_eq!(color, RGBColor::BLACK);
    }

    #[test]
    fn test_exact_miss_returns_background() {
        let sphere = Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, -5.0),
            Material::diffuse(RGBColor::new(0.9, 0.1, 0.1)),
        );
        let world = world_with(vec![sphere], Point3::new(5.0, 10.0, -2.0));
        let integrator = WhittedIntegrator::new(&world, MAX_DEPTH, ShadingSettings::default());
        // passes 1.5 units above the center
        let ray = Ray::new(Point3::new(0.0, 1.5, 0.0), -Vec3::Z);
        let color = integrator.trace(ray, 0, &mut Profile::default());
        assert_eq!(color, world.environment.emission(ray.direction));
    }

    #[test]
    fn test_unshadowed_color_matches_closed_form() {
        let base = RGBColor::new(0.2, 0.6, 0.4);
        let sphere = Sphere::new(1.0, Point3::new(0.0, 0.0, -5.0), Material::diffuse(base));
        let light_position = Point3::new(0.0, 2.0, 0.0);
        let world = world_with(vec![sphere], light_position);
        let integrator = WhittedIntegrator::new(&world, MAX_DEPTH, ShadingSettings::default());

        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        let color = integrator.trace(ray, 0, &mut Profile::default());

        let hit = Point3::new(0.0, 0.0, -4.0);
        let normal = Vec3::Z;
        let to_light = (light_position - hit).normalized();
        let view = (Point3::ORIGIN - hit).normalized();
        let half_vector = (view + to_light).normalized();
        let ambient = base * 0.05;
        let diffuse = base * ((normal * to_light).max(0.0) * 0.9);
        let specular = RGBColor::WHITE * ((normal * half_vector).max(0.0).powf(64.0) * 0.6);
        let expected = (ambient + diffuse + specular).clamped();

        assert_close(color, expected);
        // the highlight is actually visible from this angle
        assert!(specular.r > 0.05);
    }

    #[test]
    fn test_occluder_strictly_darkens() {
        let surface = Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, -5.0),
            Material::diffuse(RGBColor::new(0.5, 0.5, 0.5)),
        );
        let occluder = Sphere::new(
            0.5,
            Point3::new(0.0, 5.0, -5.0),
            Material::diffuse(RGBColor::WHITE),
        );
        let light_position = Point3::new(0.0, 10.0, -5.0);
        // looks straight down onto the top of `surface`, below the occluder
        let ray = Ray::new(Point3::new(0.0, 3.0, -5.0), -Vec3::Y);

        let lit_world = world_with(vec![surface], light_position);
        let shadowed_world = world_with(vec![surface, occluder], light_position);

        let lit = WhittedIntegrator::new(&lit_world, MAX_DEPTH, ShadingSettings::default())
            .trace(ray, 0, &mut Profile::default());
        let shadowed = WhittedIntegrator::new(&shadowed_world, MAX_DEPTH, ShadingSettings::default())
            .trace(ray, 0, &mut Profile::default());

        assert!(shadowed.luminance() < lit.luminance());
        // shadowed points keep only the dimmed ambient term
        assert_close(shadowed, RGBColor::new(0.5, 0.5, 0.5) * 0.05 * 0.4);
    }

    #[test]
    fn test_spheres_beyond_the_light_do_not_shadow() {
        let surface = Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, -5.0),
            Material::diffuse(RGBColor::new(0.5, 0.5, 0.5)),
        );
        let beyond = Sphere::new(
            1.0,
            Point3::new(0.0, 20.0, -5.0),
            Material::diffuse(RGBColor::WHITE),
        );
        let light_position = Point3::new(0.0, 10.0, -5.0);
        let ray = Ray::new(Point3::new(0.0, 3.0, -5.0), -Vec3::Y);

        let alone = world_with(vec![surface], light_position);
        let with_beyond = world_with(vec![surface, beyond], light_position);
        let a = WhittedIntegrator::new(&alone, MAX_DEPTH, ShadingSettings::default())
            .trace(ray, 0, &mut Profile::default());
        let b = WhittedIntegrator::new(&with_beyond, MAX_DEPTH, ShadingSettings::default())
            .trace(ray, 0, &mut Profile::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_reflection_blends_with_recursive_trace() {
        let k = 0.3;
        let mirror_color = RGBColor::new(0.5, 0.2, 0.2);
        let mirror = Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, -5.0),
            Material::new(mirror_color, k),
        );
        let target = Sphere::new(
            1.0,
            Point3::new(0.0, 0.0, 5.0),
            Material::diffuse(RGBColor::new(0.1, 0.7, 0.1)),
        );
        let light_position = Point3::new(5.0, 10.0, -2.0);
        let world = world_with(vec![mirror, target], light_position);
        let integrator = WhittedIntegrator::new(&world, MAX_DEPTH, ShadingSettings::default());

        let mut opaque_mirror = mirror;
        opaque_mirror.material.reflectivity = 0.0;
        let opaque_world = world_with(vec![opaque_mirror, target], light_position);
        let opaque = WhittedIntegrator::new(&opaque_world, MAX_DEPTH, ShadingSettings::default());

        let primary = Ray::new(Point3::ORIGIN, -Vec3::Z);
        // the mirror is hit head-on at (0, 0, -4), so the reflection heads straight back along +z
        let reflection_ray = Ray::new(Point3::new(0.0, 0.0, -4.0) + Vec3::Z * NORMAL_OFFSET, Vec3::Z);

        let mut profile = Profile::default();
        for depth in 0..=MAX_DEPTH as u32 {
            let local = opaque.trace(primary, depth, &mut profile);
            let reflected = integrator.trace(reflection_ray, depth + 1, &mut profile);
            let expected = (local * (1.0 - k) + reflected * k).clamped();
            assert_close(integrator.trace(primary, depth, &mut profile), expected);

            if depth == MAX_DEPTH as u32 {
                assert_eq!(reflected, RGBColor::BLACK);
            } else {
                // the reflection lands on the green sphere, not the sky
                assert!(reflected.g > reflected.r);
                assert_ne!(reflected, world.environment.emission(Vec3::Z));
            }
        }
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        let mirror = Material::new(RGBColor::WHITE, 1.0);
        let world = world_with(
            vec![
                Sphere::new(1.0, Point3::new(0.0, 0.0, -5.0), mirror),
                Sphere::new(1.0, Point3::new(0.0, 0.0, 5.0), mirror),
            ],
            Point3::new(5.0, 10.0, -2.0),
        );
        let integrator = WhittedIntegrator::new(&world, MAX_DEPTH, ShadingSettings::default());
        let mut profile = Profile::default();
        let color = integrator.color(Ray::new(Point3::ORIGIN, -Vec3::Z), &mut profile);

        // fully reflective all the way down, so only the black beyond the cap remains
        assert_eq!(color, RGBColor::BLACK);
        assert_eq!(profile.camera_rays, 1);
        assert_eq!(profile.reflection_rays, MAX_DEPTH as usize + 1);
        assert_eq!(profile.shadow_rays, MAX_DEPTH as usize + 1);
        assert_eq!(profile.env_hits, 0);
    }
}
