use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::game::{Game, Rgb, Surface, Vector2};

pub fn draw_game(frame: &mut Frame, game: &Game, caption: &str) {
    let area = frame.size();
    let canvas = game.canvas_size();
    let window_w = to_u16(canvas.x).saturating_add(2);
    let window_h = to_u16(canvas.y).saturating_add(2);

    if area.width < window_w || area.height < window_h {
        let msg = Paragraph::new(format!("RESIZE PANE (min {}x{})", window_w, window_h))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(caption))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, area);
        return;
    }

    let window = centered(area, window_w, window_h);
    let block = Block::default()
        .title(caption)
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Center);
    let inner = block.inner(window);
    frame.render_widget(block, window);
    frame.render_widget(BoardView { game }, inner);
}

fn to_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

struct BoardView<'a> {
    game: &'a Game,
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = BufferSurface { buf, area };
        self.game.render(&mut surface);
    }
}

/// Treats every terminal cell inside `area` as one pixel.
struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl Surface for BufferSurface<'_> {
    fn fill_rect(&mut self, color: Rgb, origin: Vector2<i32>, size: Vector2<i32>) {
        // Clip: pieces spawn above the canvas and may be rotated past its edges.
        let x0 = origin.x.max(0);
        let y0 = origin.y.max(0);
        let x1 = (origin.x + size.x).min(i32::from(self.area.width));
        let y1 = (origin.y + size.y).min(i32::from(self.area.height));
        let bg = Color::Rgb(color.0, color.1, color.2);
        for y in y0..y1 {
            for x in x0..x1 {
                self.buf
                    .get_mut(self.area.x + x as u16, self.area.y + y as u16)
                    .set_symbol(" ")
                    .set_bg(bg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::config::Config;
    use crate::game::Piece;
    use crate::game::Shape;

    fn game() -> Game {
        let config = Config {
            seed: Some(3),
            ..Config::default()
        };
        Game::new(&config).unwrap()
    }

    #[test]
    fn buffer_surface_clips_to_area() {
        let area = Rect::new(1, 1, 4, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 5));
        let mut surface = BufferSurface { buf: &mut buf, area };
        surface.fill_rect(Rgb(1, 2, 3), Vector2::new(-1, -1), Vector2::new(3, 2));
        surface.fill_rect(Rgb(9, 9, 9), Vector2::new(3, 2), Vector2::new(5, 5));

        let red = Color::Rgb(1, 2, 3);
        assert_eq!(buf.get(1, 1).bg, red);
        assert_eq!(buf.get(2, 1).bg, red);
        assert_ne!(buf.get(3, 1).bg, red);
        assert_ne!(buf.get(1, 2).bg, red);
        assert_eq!(buf.get(4, 3).bg, Color::Rgb(9, 9, 9));
        assert_eq!(buf.get(5, 3).bg, Color::Reset);
        assert_eq!(buf.get(4, 4).bg, Color::Reset);
    }

    #[test]
    fn draws_pieces_inside_window() {
        let mut g = game();
        let o = Shape::canonical().unwrap()[1].clone();
        g.spawn(Piece::new(Vector2::new(0, 0), Rgb(10, 20, 30), o));

        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal.draw(|frame| draw_game(frame, &g, "Caption")).unwrap();
        let buf = terminal.backend().buffer();

        // Window is 30x24 centered in 40x30, canvas starts one cell inside.
        let (ox, oy) = (5 + 1, 3 + 1);
        assert_eq!(buf.get(ox, oy).bg, Color::Rgb(10, 20, 30));
        assert_eq!(buf.get(ox + 3, oy + 1).bg, Color::Rgb(10, 20, 30));
        assert_eq!(buf.get(ox + 4, oy).bg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn small_terminal_asks_for_resize() {
        let g = game();
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal.draw(|frame| draw_game(frame, &g, "Caption")).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("RESIZE"));
    }
}
