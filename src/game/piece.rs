use rand::seq::SliceRandom;
use rand::Rng;

use super::span::intersect;
use super::{Rgb, Shape, Surface, Vector2};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    /// Top-left corner of the bounding box. Negative while entering from above.
    pub pos: Vector2<i32>,
    pub color: Rgb,
    pub shape: Shape,
}

impl Piece {
    pub fn new(pos: Vector2<i32>, color: Rgb, shape: Shape) -> Self {
        Self { pos, color, shape }
    }

    /// Random shape and color, random column in `0..board_width`, placed
    /// fully above the visible grid. `None` when `shapes` is empty.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, shapes: &[Shape], board_width: i32) -> Option<Self> {
        let shape = shapes.choose(rng)?.clone();
        let x = rng.gen_range(0..board_width.max(1));
        let color = Rgb(rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255));
        let pos = Vector2::new(x, -shape.size().y);
        Some(Self::new(pos, color, shape))
    }

    pub fn size(&self) -> Vector2<i32> {
        self.shape.size()
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size().y
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size().x
    }

    /// Copy of this piece shifted by `delta`.
    pub fn moved(&self, delta: Vector2<i32>) -> Self {
        let mut next = self.clone();
        next.translate(delta);
        next
    }

    pub fn translate(&mut self, delta: Vector2<i32>) {
        self.pos = self.pos + delta;
    }

    /// Copy of this piece turned by `quarters` quarter-turns.
    pub fn rotated(&self, quarters: u32) -> Self {
        let mut next = self.clone();
        next.rotate(quarters);
        next
    }

    pub fn rotate(&mut self, quarters: u32) {
        self.shape = self.shape.rotated(quarters);
    }

    /// Absolute grid coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = Vector2<i32>> + '_ {
        self.shape.cells().map(move |cell| self.pos + cell)
    }

    /// True when both pieces fill at least one common grid cell. Only the
    /// overlap of the two bounding boxes is scanned.
    pub fn collide(&self, other: &Piece) -> bool {
        let xs = intersect(self.pos.x..self.right(), other.pos.x..other.right());
        let ys = intersect(self.pos.y..self.bottom(), other.pos.y..other.bottom());
        if xs.is_empty() || ys.is_empty() {
            return false;
        }
        xs.flat_map(|x| ys.clone().map(move |y| (x, y))).any(|(x, y)| {
            self.shape.filled(x - self.pos.x, y - self.pos.y)
                && other.shape.filled(x - other.pos.x, y - other.pos.y)
        })
    }

    /// Draws one `resolution`-sized rectangle per filled cell.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, resolution: Vector2<i32>) {
        for cell in self.cells() {
            surface.fill_rect(self.color, cell.hadamard(resolution), resolution);
        }
    }
}
