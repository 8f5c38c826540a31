use crate::math::*;

/// What a ray sees when it escapes the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EnvironmentMap {
    Constant {
        color: RGBColor,
    },
    // blends from `bottom` (looking straight down) to `top` (looking straight up)
    Gradient {
        bottom: RGBColor,
        top: RGBColor,
    },
}

impl EnvironmentMap {
    pub const fn sky() -> Self {
        EnvironmentMap::Gradient {
            bottom: RGBColor::new(0.7, 0.8, 1.0),
            top: RGBColor::WHITE,
        }
    }

    pub fn emission(&self, direction: Vec3) -> RGBColor {
        match self {
            EnvironmentMap::Constant { color } => *color,
            EnvironmentMap::Gradient { bottom, top } => {
                // remap the vertical component from [-1, 1] to [0, 1]
                let t = 0.5 * (direction.normalized().y + 1.0);
                bottom.lerp(*top, t)
            }
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            EnvironmentMap::Constant { color } => color.is_finite(),
            EnvironmentMap::Gradient { bottom, top } => bottom.is_finite() && top.is_finite(),
        }
    }
}

impl Default for EnvironmentMap {
    fn default() -> Self {
        EnvironmentMap::sky()
    }
}
