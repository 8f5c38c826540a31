pub mod config;
pub mod scene;

use config::{Config, Resolution, TOMLConfig, TOMLRenderSettings, MAX_DEPTH_LIMIT};
use scene::SceneData;

use crate::integrator::ShadingSettings;
use crate::world::{EnvironmentMap, PointLight, Sphere, World};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use serde::de::DeserializeOwned;

fn load_arbitrary<T, P>(filepath: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let filepath = filepath.as_ref();
    info!("loading file at {}", filepath.display());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    info!("done: {} bytes", read_count);

    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(data)
}

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> anyhow::Result<TOMLConfig> {
    let mut settings: TOMLConfig = load_arbitrary(filepath)?;
    if settings.render_settings.is_empty() {
        bail!("config contains no render_settings");
    }
    let num_cpus = num_cpus::get();
    for render_settings in settings.render_settings.iter_mut() {
        check_render_settings(render_settings)?;
        render_settings.threads = match render_settings.threads {
            Some(expr) => Some(expr),
            None => Some(num_cpus as u16),
        };
    }
    Ok(settings)
}

fn check_render_settings(settings: &TOMLRenderSettings) -> anyhow::Result<()> {
    let Resolution { width, height } = settings.resolution;
    if width == 0 || height == 0 {
        bail!("resolution {}x{} has no pixels", width, height);
    }
    if let Some(vfov) = settings.vfov {
        if !(vfov > 0.0 && vfov < 180.0) {
            bail!("vfov {} must be strictly between 0 and 180 degrees", vfov);
        }
    }
    if let Some(gamma) = settings.gamma {
        if !(gamma.is_finite() && gamma > 0.0) {
            bail!("gamma {} must be positive and finite", gamma);
        }
    }
    if let Some(max_depth) = settings.max_depth {
        if max_depth > MAX_DEPTH_LIMIT {
            bail!("max_depth {} exceeds the limit of {}", max_depth, MAX_DEPTH_LIMIT);
        }
    }
    if let Some(epsilon) = settings.intersection_epsilon {
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            bail!("intersection_epsilon {} must be non-negative and finite", epsilon);
        }
    }
    if let Some(camera_position) = settings.camera_position {
        if camera_position.iter().any(|c| !c.is_finite()) {
            bail!("camera_position {:?} is not finite", camera_position);
        }
    }
    if let Some(shading) = settings.shading {
        let ShadingSettings {
            ambient,
            diffuse,
            specular,
            shininess,
            shadow_factor,
            normal_offset,
            shadow_tolerance,
        } = ShadingSettings::from(shading);
        let values = [
            ambient,
            diffuse,
            specular,
            shininess,
            shadow_factor,
            normal_offset,
            shadow_tolerance,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            bail!("shading settings {:?} contain a non-finite value", shading);
        }
    }
    Ok(())
}

pub fn parse_config<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Config> {
    Ok(Config::from(get_settings(filepath)?))
}

pub fn construct_world<P: AsRef<Path>>(scene_file: P) -> anyhow::Result<World> {
    let scene: SceneData = load_arbitrary(scene_file)?;
    world_from_scene(scene)
}

pub fn world_from_scene(scene: SceneData) -> anyhow::Result<World> {
    let light = PointLight::from(scene.light);
    if !light.is_finite() {
        bail!("light {:?} has a non-finite position or color", light);
    }
    let spheres: Vec<Sphere> = scene.spheres.into_iter().map(Sphere::from).collect();
    if spheres.is_empty() {
        warn!("scene has no spheres, only the background will be visible");
    }
    let environment = scene
        .background
        .map(EnvironmentMap::from)
        .unwrap_or_default();
    if !environment.is_finite() {
        bail!("background {:?} has a non-finite color", environment);
    }

    Ok(World::new(spheres, light, environment))
}
