pub mod piece;
pub mod shape;
pub mod span;
pub mod state;
pub mod surface;
pub mod vector;

pub use piece::Piece;
pub use shape::{Shape, ShapeError};
pub use state::{Command, Game, Phase, TickOutcome};
pub use surface::{Rgb, Surface};
pub use vector::Vector2;
