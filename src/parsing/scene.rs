use crate::math::*;
use crate::world::{EnvironmentMap, Material, PointLight, Sphere};

use serde::Deserialize;

pub type Point3Data = [f64; 3];
pub type ColorData = [f64; 3];

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct LightData {
    pub position: Point3Data,
    pub color: Option<ColorData>,
}

impl From<LightData> for PointLight {
    fn from(data: LightData) -> Self {
        PointLight::new(
            Point3::from(data.position),
            data.color.map(RGBColor::from).unwrap_or(RGBColor::WHITE),
        )
    }
}

#[derive(Deserialize, Copy, Clone, Debug)]
#[serde(tag = "type")]
pub enum EnvironmentData {
    Constant { color: ColorData },
    Gradient { bottom: ColorData, top: ColorData },
}

impl From<EnvironmentData> for EnvironmentMap {
    fn from(data: EnvironmentData) -> Self {
        match data {
            EnvironmentData::Constant { color } => EnvironmentMap::Constant {
                color: color.into(),
            },
            EnvironmentData::Gradient { bottom, top } => EnvironmentMap::Gradient {
                bottom: bottom.into(),
                top: top.into(),
            },
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct SphereData {
    pub origin: Point3Data,
    pub radius: f64,
    pub color: ColorData,
    pub reflectivity: Option<f64>,
}

impl From<SphereData> for Sphere {
    fn from(data: SphereData) -> Self {
        let mut reflectivity = data.reflectivity.unwrap_or(0.0);
        if !(0.0..=1.0).contains(&reflectivity) {
            warn!(
                "reflectivity {} of sphere at {:?} is outside [0, 1], clamping",
                reflectivity, data.origin
            );
            reflectivity = reflectivity.clamp(0.0, 1.0);
        }
        Sphere::new(
            data.radius,
            Point3::from(data.origin),
            Material::new(data.color.into(), reflectivity),
        )
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct SceneData {
    pub light: LightData,
    pub background: Option<EnvironmentData>,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
}
