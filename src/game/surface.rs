use super::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);

/// Anything that can take filled rectangles in pixel coordinates.
pub trait Surface {
    fn fill_rect(&mut self, color: Rgb, origin: Vector2<i32>, size: Vector2<i32>);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Keeps every call so tests can check what was drawn.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub rects: Vec<(Rgb, Vector2<i32>, Vector2<i32>)>,
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, color: Rgb, origin: Vector2<i32>, size: Vector2<i32>) {
            self.rects.push((color, origin, size));
        }
    }
}
