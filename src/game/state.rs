use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{BACKGROUND, Config};
use crate::game::{Piece, Shape, ShapeError, Surface, Vector2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    RotateCw,
    RotateCcw,
    /// Accepted but currently does nothing.
    Drop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Falling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Spawned,
    Fell,
    Landed,
}

pub struct Game {
    pub size: Vector2<i32>,
    pub resolution: Vector2<i32>,
    falling: Option<Piece>,
    history: VecDeque<Piece>,
    shapes: Vec<Shape>,
    strict: bool,
    rng: StdRng,
}

impl Game {
    pub fn new(config: &Config) -> Result<Self, ShapeError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_shapes(config, Shape::canonical()?, rng)
    }

    pub fn with_shapes(config: &Config, shapes: Vec<Shape>, rng: StdRng) -> Result<Self, ShapeError> {
        if shapes.is_empty() {
            return Err(ShapeError::EmptyTable);
        }
        Ok(Self {
            size: config.board,
            resolution: config.resolution,
            falling: None,
            history: VecDeque::new(),
            shapes,
            strict: config.strict,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        if self.falling.is_some() {
            Phase::Falling
        } else {
            Phase::Empty
        }
    }

    pub fn falling(&self) -> Option<&Piece> {
        self.falling.as_ref()
    }

    /// Settled pieces, most recent landing first.
    pub fn history(&self) -> &VecDeque<Piece> {
        &self.history
    }

    /// Puts `piece` in the falling slot, replacing whatever was there.
    pub fn spawn(&mut self, piece: Piece) {
        self.falling = Some(piece);
    }

    fn hits_history(&self, piece: &Piece) -> bool {
        self.history.iter().any(|settled| piece.collide(settled))
    }

    /// Within the side walls and not through the floor. The top is open.
    fn in_bounds(&self, piece: &Piece) -> bool {
        piece.pos.x >= 0 && piece.right() <= self.size.x && piece.bottom() <= self.size.y
    }

    /// Advances the state machine by one step: spawn when empty, otherwise
    /// fall one row or land into history.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(piece) = self.falling.take() else {
            // Always `Some`: the shape table is checked non-empty on construction.
            if let Some(piece) = Piece::random(&mut self.rng, &self.shapes, self.size.x) {
                self.spawn(piece);
            }
            return TickOutcome::Spawned;
        };

        let probe = piece.moved(Vector2::new(0, 1));
        if piece.bottom() < self.size.y && !self.hits_history(&probe) {
            self.falling = Some(probe);
            TickOutcome::Fell
        } else {
            self.history.push_front(piece);
            TickOutcome::Landed
        }
    }

    /// Applies a player command to the falling piece. Returns whether it changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let Some(piece) = self.falling.as_ref() else {
            return false;
        };
        let next = match command {
            Command::Left if piece.pos.x > 0 => piece.moved(Vector2::new(-1, 0)),
            Command::Right if piece.right() < self.size.x => piece.moved(Vector2::new(1, 0)),
            Command::RotateCw => piece.rotated(3),
            Command::RotateCcw => piece.rotated(1),
            _ => return false,
        };
        if self.strict && (!self.in_bounds(&next) || self.hits_history(&next)) {
            return false;
        }
        self.falling = Some(next);
        true
    }

    pub fn canvas_size(&self) -> Vector2<i32> {
        self.size.hadamard(self.resolution)
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(BACKGROUND, Vector2::new(0, 0), self.canvas_size());
        if let Some(piece) = &self.falling {
            piece.render(surface, self.resolution);
        }
        for piece in &self.history {
            piece.render(surface, self.resolution);
        }
    }
}
