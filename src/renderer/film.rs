pub use crate::vec2d::Vec2D as Film;
