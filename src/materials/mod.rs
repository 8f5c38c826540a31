use crate::math::RGBColor;

// reflectivities at or below this are treated as fully opaque and never spawn a reflection ray.
pub const REFLECTIVITY_THRESHOLD: f64 = 1e-6;

/// Surface description owned by a single primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// base reflectance. not clamped here, the integrator clamps its final result.
    pub color: RGBColor,
    /// fraction of the final color taken from the mirror direction, in `[0, 1]`.
    pub reflectivity: f64,
}

impl Material {
    pub const fn new(color: RGBColor, reflectivity: f64) -> Self {
        Material {
            color,
            reflectivity,
        }
    }

    pub const fn diffuse(color: RGBColor) -> Self {
        Material::new(color, 0.0)
    }

    pub fn is_reflective(&self) -> bool {
        self.reflectivity > REFLECTIVITY_THRESHOLD
    }

    pub fn is_finite(&self) -> bool {
        self.color.is_finite() && self.reflectivity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflective_threshold() {
        assert!(!Material::diffuse(RGBColor::WHITE).is_reflective());
        assert!(!Material::new(RGBColor::WHITE, 1e-7).is_reflective());
        assert!(Material::new(RGBColor::WHITE, 0.25).is_reflective());
    }
}
