//! Rasterizes the game onto a fixed character-cell grid and diff-draws it.

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthStr;

use crate::game::{Direction, Game};
use crate::maze::{GRID_CELL, GRID_OFFSET};

pub const GRID_W: usize = 34;
pub const GRID_H: usize = 32;
const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Empty,
    Wall,
    Dot,
    Player {
        open: bool,
        facing: Option<Direction>,
    },
}

pub struct Renderer {
    last: Vec<Glyph>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            last: vec![Glyph::Empty; GRID_W * GRID_H],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn draw(&mut self, stdout: &mut Stdout, game: &Game) -> io::Result<()> {
        let needed_w = (GRID_W * CELL_W) as u16;
        let needed_h = (GRID_H + 2) as u16;

        stdout.queue(MoveTo(0, 0))?;

        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            stdout.queue(Clear(ClearType::All))?;
            let msg = format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            );
            stdout.queue(Print(msg))?;
            stdout.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }

        let hud = format!(
            "Score: {:07}   arrows/hjkl move, +/- speed, r resets, q quits",
            game.score
        );
        if self.needs_full || hud != self.last_hud {
            stdout.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            stdout.queue(SetForegroundColor(Color::White))?;
            stdout.queue(Clear(ClearType::CurrentLine))?;
            stdout.queue(Print(&hud))?;
            stdout.queue(ResetColor)?;
            self.last_hud = hud;
        }

        let frame = compose(game);
        for row in 0..GRID_H {
            for col in 0..GRID_W {
                let idx = row * GRID_W + col;
                if self.needs_full || frame[idx] != self.last[idx] {
                    self.last[idx] = frame[idx];
                    self.draw_cell(stdout, col, row, frame[idx])?;
                }
            }
        }
        self.needs_full = false;

        stdout.flush()?;
        Ok(())
    }

    fn draw_cell(&self, stdout: &mut Stdout, col: usize, row: usize, glyph: Glyph) -> io::Result<()> {
        let (text, color) = match glyph {
            Glyph::Wall => ("██", Color::Red),
            Glyph::Dot => ("· ", Color::White),
            Glyph::Empty => ("  ", Color::Reset),
            Glyph::Player { open: false, .. } => ("●", Color::Yellow),
            Glyph::Player { open: true, facing } => (
                match facing {
                    Some(Direction::Left) => "ᗤ",
                    Some(Direction::Right) => "ᗧ",
                    Some(Direction::Up) => "ᗢ",
                    Some(Direction::Down) => "ᗣ",
                    None => "●",
                },
                Color::Yellow,
            ),
        };
        let x_pos = self.origin_x + (col * CELL_W) as u16;
        let y_pos = self.origin_y + row as u16;
        stdout.queue(MoveTo(x_pos, y_pos))?;
        stdout.queue(SetForegroundColor(color))?;
        stdout.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        if w < CELL_W {
            for _ in 0..(CELL_W - w) {
                stdout.queue(Print(' '))?;
            }
        }
        stdout.queue(ResetColor)?;
        Ok(())
    }
}

/// Pixel coordinate to nearest 1-based grid index; may land off the grid.
fn nearest_grid(p: i32) -> i32 {
    (p - GRID_OFFSET + GRID_CELL / 2).div_euclid(GRID_CELL) + 1
}

/// Walls under dots under the player, in grid cells, y flipped for the screen.
fn compose(game: &Game) -> Vec<Glyph> {
    let mut frame = vec![Glyph::Empty; GRID_W * GRID_H];

    for wall in &game.walls {
        let gx1 = nearest_grid(wall.start_x);
        let gy1 = nearest_grid(wall.start_y);
        let gx2 = nearest_grid(wall.end_x);
        let gy2 = nearest_grid(wall.end_y);
        for gx in gx1.min(gx2)..=gx1.max(gx2) {
            for gy in gy1.min(gy2)..=gy1.max(gy2) {
                put(&mut frame, gx, gy, Glyph::Wall);
            }
        }
    }

    for dot in &game.dots {
        if dot.active {
            put(&mut frame, nearest_grid(dot.x), nearest_grid(dot.y), Glyph::Dot);
        }
    }

    put(
        &mut frame,
        nearest_grid(game.player.x),
        nearest_grid(game.player.y),
        Glyph::Player {
            open: game.player.mouth_open,
            facing: game.player.direction,
        },
    );

    frame
}

fn put(frame: &mut [Glyph], gx: i32, gy: i32, glyph: Glyph) {
    if gx < 1 || gy < 1 || gx > GRID_W as i32 || gy > GRID_H as i32 {
        return;
    }
    let col = (gx - 1) as usize;
    let row = GRID_H - gy as usize;
    frame[row * GRID_W + col] = glyph;
}
