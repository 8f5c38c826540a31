mod whitted;

use crate::math::*;
use crate::profile::Profile;

pub use whitted::{ShadingSettings, WhittedIntegrator};

pub trait SamplerIntegrator: Sync + Send {
    /// Color carried back along a primary ray, each channel in `[0, 1]`.
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> RGBColor;
}
