use crate::integrator::ShadingSettings;
use crate::math::Point3;
use crate::tonemap::DEFAULT_GAMMA;
use crate::world::INTERSECTION_TIME_OFFSET;

use serde::Deserialize;

pub const DEFAULT_FILENAME: &str = "scene.ppm";
pub const DEFAULT_VFOV_DEGREES: f64 = 60.0;
pub const DEFAULT_MAX_DEPTH: u16 = 3;
// deeper reflection chains risk overflowing a worker thread's stack
pub const MAX_DEPTH_LIMIT: u16 = 64;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum RendererType {
    // one scanline after another on the calling thread
    Scanline,
    // scanlines spread over a rayon pool
    Parallel,
}

impl Default for RendererType {
    fn default() -> Self {
        RendererType::Parallel
    }
}

// every field falls back to the matching ShadingSettings default
#[derive(Deserialize, Copy, Clone, Debug, Default)]
pub struct TOMLShadingSettings {
    pub ambient: Option<f64>,
    pub diffuse: Option<f64>,
    pub specular: Option<f64>,
    pub shininess: Option<f64>,
    pub shadow_factor: Option<f64>,
    pub normal_offset: Option<f64>,
    pub shadow_tolerance: Option<f64>,
}

impl From<TOMLShadingSettings> for ShadingSettings {
    fn from(data: TOMLShadingSettings) -> Self {
        let default = ShadingSettings::default();
        ShadingSettings {
            ambient: data.ambient.unwrap_or(default.ambient),
            diffuse: data.diffuse.unwrap_or(default.diffuse),
            specular: data.specular.unwrap_or(default.specular),
            shininess: data.shininess.unwrap_or(default.shininess),
            shadow_factor: data.shadow_factor.unwrap_or(default.shadow_factor),
            normal_offset: data.normal_offset.unwrap_or(default.normal_offset),
            shadow_tolerance: data.shadow_tolerance.unwrap_or(default.shadow_tolerance),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: String,
    pub resolution: Resolution,
    // radians
    pub vertical_fov: f64,
    pub camera_position: Point3,
    pub max_depth: u16,
    pub threads: Option<u16>,
    pub gamma: f64,
    pub png: bool,
    pub intersection_epsilon: f64,
    pub shading: ShadingSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    // degrees
    pub vfov: Option<f64>,
    pub camera_position: Option<[f64; 3]>,
    pub max_depth: Option<u16>,
    pub threads: Option<u16>,
    pub gamma: Option<f64>,
    pub png: Option<bool>,
    pub intersection_epsilon: Option<f64>,
    pub shading: Option<TOMLShadingSettings>,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data
                .filename
                .unwrap_or_else(|| String::from(DEFAULT_FILENAME)),
            resolution: data.resolution,
            vertical_fov: data.vfov.unwrap_or(DEFAULT_VFOV_DEGREES).to_radians(),
            camera_position: data
                .camera_position
                .map(Point3::from)
                .unwrap_or(Point3::ORIGIN),
            max_depth: data.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            threads: data.threads,
            gamma: data.gamma.unwrap_or(DEFAULT_GAMMA),
            png: data.png.unwrap_or(false),
            intersection_epsilon: data
                .intersection_epsilon
                .unwrap_or(INTERSECTION_TIME_OFFSET),
            shading: data.shading.unwrap_or_default().into(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: String::from(DEFAULT_FILENAME),
            resolution: Resolution {
                width: 800,
                height: 600,
            },
            vertical_fov: DEFAULT_VFOV_DEGREES.to_radians(),
            camera_position: Point3::ORIGIN,
            max_depth: DEFAULT_MAX_DEPTH,
            threads: None,
            gamma: DEFAULT_GAMMA,
            png: false,
            intersection_epsilon: INTERSECTION_TIME_OFFSET,
            shading: ShadingSettings::default(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    // when absent the built in scene is rendered
    pub scene_file: Option<String>,
    #[serde(default)]
    pub renderer: RendererType,
    pub render_settings: Vec<TOMLRenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene_file: Option<String>,
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.scene_file,
            renderer: data.renderer,
            render_settings: data
                .render_settings
                .into_iter()
                .map(RenderSettings::from)
                .collect(),
        }
    }
}
