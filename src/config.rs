use anyhow::{bail, Result};
use clap::Parser;

use crate::game::surface::WHITE;
use crate::game::{Rgb, Vector2};

// Shared game/window defaults.
pub const BOARD_W: i32 = 14;
pub const BOARD_H: i32 = 22;
pub const CELL_W: i32 = 2; // terminal columns per grid cell, keeps cells roughly square
pub const CELL_H: i32 = 1;
pub const TICKS_PER_SECOND: u32 = 12;
pub const CAPTION: &str = "Shameless Arcade Clone";
pub const BACKGROUND: Rgb = WHITE;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(name = "shameless-arcade", version, about)]
pub struct Args {
    /// Board width in grid cells.
    #[arg(long, default_value_t = BOARD_W, value_name = "COLS")]
    pub width: i32,

    /// Board height in grid cells.
    #[arg(long, default_value_t = BOARD_H, value_name = "ROWS")]
    pub height: i32,

    /// Terminal columns drawn per grid cell.
    #[arg(long, default_value_t = CELL_W)]
    pub cell_width: i32,

    /// Terminal rows drawn per grid cell.
    #[arg(long, default_value_t = CELL_H)]
    pub cell_height: i32,

    /// Ticks per second. Paces both falling and input handling.
    #[arg(long, default_value_t = TICKS_PER_SECOND)]
    pub fps: u32,

    /// Seed for a repeatable piece sequence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reject rotations and sideways moves that leave the board or overlap settled pieces.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub board: Vector2<i32>,
    pub resolution: Vector2<i32>,
    pub ticks_per_second: u32,
    pub seed: Option<u64>,
    pub strict: bool,
    pub caption: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: Vector2::new(BOARD_W, BOARD_H),
            resolution: Vector2::new(CELL_W, CELL_H),
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,
            strict: false,
            caption: CAPTION.to_string(),
        }
    }
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        if args.width <= 0 || args.height <= 0 {
            bail!("board must be at least 1x1 cells, got {}x{}", args.width, args.height);
        }
        if args.cell_width <= 0 || args.cell_height <= 0 {
            bail!(
                "cell resolution must be positive, got {}x{}",
                args.cell_width,
                args.cell_height
            );
        }
        // The canvas is drawn one terminal cell per pixel.
        let fits = |cells: i32, per_cell: i32| {
            cells
                .checked_mul(per_cell)
                .is_some_and(|len| len <= i32::from(u16::MAX))
        };
        if !fits(args.width, args.cell_width) || !fits(args.height, args.cell_height) {
            bail!(
                "canvas of {}x{} cells at {}x{} per cell exceeds {} terminal cells per side",
                args.width,
                args.height,
                args.cell_width,
                args.cell_height,
                u16::MAX
            );
        }
        if args.fps == 0 {
            bail!("tick rate must be at least 1 per second");
        }
        Ok(Self {
            board: Vector2::new(args.width, args.height),
            resolution: Vector2::new(args.cell_width, args.cell_height),
            ticks_per_second: args.fps,
            seed: args.seed,
            strict: args.strict,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(std::iter::once("shameless-arcade").chain(argv.iter().copied()))?;
        Config::from_args(args)
    }

    #[test]
    fn defaults_match_reference_board() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.board, Vector2::new(14, 22));
        assert_eq!(config.ticks_per_second, 12);
        assert_eq!(config.resolution, Vector2::new(2, 1));
        assert_eq!(config.caption, CAPTION);
        assert!(!config.strict);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&["--width", "10", "--height", "20", "--fps", "30", "--seed", "9", "--strict"]).unwrap();
        assert_eq!(config.board, Vector2::new(10, 20));
        assert_eq!(config.ticks_per_second, 30);
        assert_eq!(config.seed, Some(9));
        assert!(config.strict);
    }

    #[test]
    fn degenerate_values_are_rejected() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--cell-height", "0"]).is_err());
        let err = parse(&["--fps", "0"]).unwrap_err();
        assert!(err.to_string().contains("tick rate"));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let err = parse(&["--width", "50000", "--cell-width", "50000"]).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
        assert!(parse(&["--height", "40000", "--cell-height", "2"]).is_err());
        let widest = parse(&["--width", "65535", "--cell-width", "1"]).unwrap();
        assert_eq!(widest.board.hadamard(widest.resolution).x, 65535);
    }
}
