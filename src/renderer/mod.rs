mod film;
mod parallel;
mod scanline;

pub use film::Film;
pub use parallel::ParallelRenderer;
pub use scanline::ScanlineRenderer;

use crate::camera::PinholeCamera;
use crate::integrator::{SamplerIntegrator, WhittedIntegrator};
use crate::math::RGBColor;
use crate::parsing::config::{RenderSettings, RendererType};
use crate::profile::Profile;
use crate::tonemap::{tonemap_film, write_ppm, Framebuffer, GammaTonemapper, Tonemapper};
use crate::world::World;

use std::borrow::Cow;
use std::path::Path;
use std::time::Instant;

pub trait Renderer {
    fn render_film(
        &self,
        integrator: &dyn SamplerIntegrator,
        camera: &PinholeCamera,
    ) -> (Film<RGBColor>, Profile);
}

pub fn construct_renderer(renderer_type: RendererType) -> Box<dyn Renderer> {
    match renderer_type {
        RendererType::Scanline => Box::new(ScanlineRenderer::new()),
        RendererType::Parallel => Box::new(ParallelRenderer::new(true)),
    }
}

pub fn camera_from_settings(settings: &RenderSettings) -> PinholeCamera {
    PinholeCamera::new(
        settings.camera_position,
        settings.vertical_fov,
        settings.resolution.width,
        settings.resolution.height,
    )
}

/// Traces every pixel of `settings` against `world` and returns the linear film.
pub fn render_film(
    world: &World,
    settings: &RenderSettings,
    renderer: &dyn Renderer,
) -> (Film<RGBColor>, Profile) {
    let world = if world.intersection_epsilon == settings.intersection_epsilon {
        Cow::Borrowed(world)
    } else {
        Cow::Owned(
            world
                .clone()
                .with_intersection_epsilon(settings.intersection_epsilon),
        )
    };
    let camera = camera_from_settings(settings);
    let integrator = WhittedIntegrator::new(&world, settings.max_depth, settings.shading);

    info!(
        "rendering {}x{} with max depth {}",
        settings.resolution.width, settings.resolution.height, settings.max_depth
    );
    let now = Instant::now();
    let (film, profile) = renderer.render_film(&integrator, &camera);
    let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
    info!("took {}s", elapsed);
    profile.pretty_print(elapsed, settings.threads.unwrap_or(1) as usize);
    (film, profile)
}

/// Renders and gamma encodes, returning the 8-bit framebuffer.
pub fn render(world: &World, settings: &RenderSettings, renderer: &dyn Renderer) -> Framebuffer {
    let (film, _profile) = render_film(world, settings, renderer);
    let mut tonemapper = GammaTonemapper::new(settings.gamma, false);
    tonemapper.initialize(&film);
    tonemap_film(&film, &tonemapper)
}

pub fn output_film(settings: &RenderSettings, framebuffer: &Framebuffer) -> anyhow::Result<()> {
    write_ppm(framebuffer, &settings.filename)?;
    if settings.png {
        let png_filename = Path::new(&settings.filename).with_extension("png");
        #[cfg(feature = "png_output")]
        crate::tonemap::write_png(framebuffer, png_filename)?;
        #[cfg(not(feature = "png_output"))]
        warn!(
            "png output requested for {} but the png_output feature is disabled",
            png_filename.display()
        );
    }
    Ok(())
}
