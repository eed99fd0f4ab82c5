//! Core game state and the movement / scoring rules.

use crate::collision;
use crate::maze::{Dot, Maze, Segment};

pub const FIELD_W: i32 = 1000;
pub const FIELD_H: i32 = 1000;
pub const STEP: i32 = 10;
pub const PLAYER_RADIUS: i32 = 24;
pub const DOT_SCORE: u32 = 100;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    Reset,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub direction: Option<Direction>,
    pub mouth_open: bool,
}

impl Player {
    fn spawn() -> Self {
        Player {
            x: FIELD_W / 2 - 5,
            y: FIELD_H / 2 + 15,
            radius: PLAYER_RADIUS,
            direction: None,
            mouth_open: true,
        }
    }
}

pub struct Game {
    pub player: Player,
    pub walls: Vec<Segment>,
    pub dots: Vec<Dot>,
    pub score: u32,
}

impl Game {
    pub fn new() -> Self {
        let maze = Maze::build();
        Game {
            player: Player::spawn(),
            walls: maze.walls,
            dots: maze.dots,
            score: 0,
        }
    }

    /// Handles one recognized key: move (walls permitting) or reset, then
    /// collect any dot the player landed on, then wrap at the field edges.
    /// The dot scan runs before the wrap, so a wrapping step never collects
    /// on the far edge it arrives at.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Move(direction) => self.step(direction),
            Command::Reset => *self = Game::new(),
        }
        self.collect_dots();
        self.wrap();
    }

    fn step(&mut self, direction: Direction) {
        self.player.mouth_open = !self.player.mouth_open;
        self.player.direction = Some(direction);
        if collision::would_hit_wall(&self.player, direction, &self.walls) {
            return;
        }
        match direction {
            Direction::Left => self.player.x -= STEP,
            Direction::Right => self.player.x += STEP,
            Direction::Up => self.player.y += STEP,
            Direction::Down => self.player.y -= STEP,
        }
    }

    fn collect_dots(&mut self) {
        for dot in &mut self.dots {
            if dot.active && touches(&self.player, dot) {
                dot.active = false;
                self.score += DOT_SCORE;
            }
        }
    }

    fn wrap(&mut self) {
        if self.player.x < 0 {
            self.player.x = FIELD_W;
        }
        if self.player.x > FIELD_W {
            self.player.x = 0;
        }
        if self.player.y < 0 {
            self.player.y = FIELD_H;
        }
        if self.player.y > FIELD_H {
            self.player.y = 0;
        }
    }
}

/// A dot only counts as eaten when the player sits on its exact row;
/// circle overlap alone is not enough.
fn touches(player: &Player, dot: &Dot) -> bool {
    let dist = (player.x - dot.x).pow(2) + (player.y - dot.y).pow(2);
    let reach = (player.radius + dot.radius).pow(2);
    dist <= reach && player.y == dot.y
}
