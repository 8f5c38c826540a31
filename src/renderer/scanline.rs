use super::{Film, Renderer};

use crate::camera::PinholeCamera;
use crate::integrator::SamplerIntegrator;
use crate::math::RGBColor;
use crate::profile::Profile;

const PROGRESS_INTERVAL: usize = 50;

/// Renders one scanline after another on the calling thread.
pub struct ScanlineRenderer {}

impl ScanlineRenderer {
    pub fn new() -> ScanlineRenderer {
        ScanlineRenderer {}
    }
}

impl Default for ScanlineRenderer {
    fn default() -> Self {
        ScanlineRenderer::new()
    }
}

impl Renderer for ScanlineRenderer {
    fn render_film(
        &self,
        integrator: &dyn SamplerIntegrator,
        camera: &PinholeCamera,
    ) -> (Film<RGBColor>, Profile) {
        let (width, height) = camera.resolution();
        let mut film: Film<RGBColor> = Film::new(width, height, RGBColor::BLACK);
        let mut profile = Profile::default();

        for y in 0..height {
            for x in 0..width {
                let color = integrator.color(camera.get_ray(x, y), &mut profile);
                film.write_at(x, y, color);
            }
            if y % PROGRESS_INTERVAL == 0 {
                info!("scanline {}/{}", y, height);
            }
        }
        (film, profile)
    }
}
