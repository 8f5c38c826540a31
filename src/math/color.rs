use std::ops::{Add, AddAssign, Mul};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn clamped(&self) -> RGBColor {
        RGBColor::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Linear interpolation, `t == 0` gives `self` and `t == 1` gives `other`.
    pub fn lerp(&self, other: RGBColor, t: f64) -> RGBColor {
        *self * (1.0 - t) + other * t
    }

    // rec. 709 weights, only used for comparisons and stats
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

// componentwise
impl Mul for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f64> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f64) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl From<[f64; 3]> for RGBColor {
    fn from(other: [f64; 3]) -> RGBColor {
        RGBColor::new(other[0], other[1], other[2])
    }
}

impl From<RGBColor> for [f64; 3] {
    fn from(color: RGBColor) -> [f64; 3] {
        [color.r, color.g, color.b]
    }
}
