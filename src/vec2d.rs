/// Row-major 2D buffer, row 0 is the top of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Vec2D<T> {
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}
