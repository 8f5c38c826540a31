use crate::math::{RGBColor, INFINITY};
use crate::renderer::Film;

use super::Tonemapper;

pub const DEFAULT_GAMMA: f64 = 2.2;

#[derive(Clone, Debug)]
pub struct GammaTonemapper {
    pub gamma: f64,
    silenced: bool,
}

impl GammaTonemapper {
    pub fn new(gamma: f64, silenced: bool) -> Self {
        Self { gamma, silenced }
    }

    /// Clamps to `[0, 1]`, applies `c^(1/gamma)` and quantizes to 8 bits.
    pub fn map_color(&self, color: RGBColor) -> [u8; 3] {
        let encode = |c: f64| -> u8 {
            let c = c.clamp(0.0, 1.0).powf(1.0 / self.gamma);
            (c * 255.0).round() as u8
        };
        [encode(color.r), encode(color.g), encode(color.b)]
    }
}

impl Tonemapper for GammaTonemapper {
    fn initialize(&mut self, film: &Film<RGBColor>) {
        if self.silenced || film.total_pixels() == 0 {
            return;
        }
        let mut max_luminance = 0.0;
        let mut min_luminance = INFINITY;
        let mut max_lum_xy = (0, 0);
        let mut min_lum_xy = (0, 0);
        let mut total_luminance = 0.0;

        for y in 0..film.height {
            for x in 0..film.width {
                let lum = film.at(x, y).luminance();
                if lum.is_nan() {
                    warn!("nan luminance at ({}, {})", x, y);
                    continue;
                }
                total_luminance += lum;
                if lum > max_luminance {
                    max_luminance = lum;
                    max_lum_xy = (x, y);
                }
                if lum < min_luminance {
                    min_luminance = lum;
                    min_lum_xy = (x, y);
                }
            }
        }

        let avg_luminance = total_luminance / film.total_pixels() as f64;
        info!(
            "max luminance occurred at {}, {}, is {}",
            max_lum_xy.0, max_lum_xy.1, max_luminance
        );
        info!(
            "min luminance occurred at {}, {}, is {}",
            min_lum_xy.0, min_lum_xy.1, min_luminance
        );
        info!("avg luminance is {}, gamma is {}", avg_luminance, self.gamma);
    }

    fn map(&self, film: &Film<RGBColor>, pixel: (usize, usize)) -> [u8; 3] {
        self.map_color(film.at(pixel.0, pixel.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_clamping() {
        let tonemapper = GammaTonemapper::new(2.2, true);
        assert_eq!(tonemapper.map_color(RGBColor::BLACK), [0, 0, 0]);
        assert_eq!(tonemapper.map_color(RGBColor::WHITE), [255, 255, 255]);
        assert_eq!(
            tonemapper.map_color(RGBColor::new(-1.0, 2.0, f64::INFINITY)),
            [0, 255, 255]
        );
    }

    #[test]
    fn test_gamma_brightens_midtones() {
        let tonemapper = GammaTonemapper::new(2.2, true);
        let [v, _, _] = tonemapper.map_color(RGBColor::new(0.5, 0.0, 0.0));
        // 0.5^(1/2.2) * 255 = 186.09
        assert_eq!(v, 186);

        let linear = GammaTonemapper::new(1.0, true);
        assert_eq!(linear.map_color(RGBColor::new(0.5, 0.0, 0.0))[0], 128);
    }
}
