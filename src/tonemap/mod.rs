use crate::math::RGBColor;
use crate::renderer::Film;
use crate::vec2d::Vec2D;

mod gamma;
mod ppm;

pub use gamma::{GammaTonemapper, DEFAULT_GAMMA};
pub use ppm::{encode_ppm, write_ppm};
#[cfg(feature = "png_output")]
pub use ppm::write_png;

/// 8-bit RGB pixels, row-major, top row first.
pub type Framebuffer = Vec2D<[u8; 3]>;

pub trait Tonemapper: Send + Sync {
    fn initialize(&mut self, film: &Film<RGBColor>);
    // maps one film pixel to display bytes
    fn map(&self, film: &Film<RGBColor>, pixel: (usize, usize)) -> [u8; 3];
}

pub fn tonemap_film(film: &Film<RGBColor>, tonemapper: &dyn Tonemapper) -> Framebuffer {
    let mut framebuffer = Framebuffer::new(film.width, film.height, [0u8; 3]);
    for y in 0..film.height {
        for x in 0..film.width {
            framebuffer.write_at(x, y, tonemapper.map(film, (x, y)));
        }
    }
    framebuffer
}
