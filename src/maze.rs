//! Static maze geometry: axis-aligned wall segments and dot pickups,
//! authored on a coarse grid and mapped into pixel coordinates.

pub const GRID_OFFSET: i32 = 5;
pub const GRID_CELL: i32 = 30;
pub const DOT_RADIUS: i32 = 1;

/// An axis-aligned wall. Either `start_x == end_x` or `start_y == end_y`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Segment {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl Segment {
    pub fn is_vertical(&self) -> bool {
        self.start_x == self.end_x
    }

    pub fn is_horizontal(&self) -> bool {
        self.start_y == self.end_y
    }

    pub fn x_min(&self) -> i32 {
        self.start_x.min(self.end_x)
    }

    pub fn x_max(&self) -> i32 {
        self.start_x.max(self.end_x)
    }

    pub fn y_min(&self) -> i32 {
        self.start_y.min(self.end_y)
    }

    pub fn y_max(&self) -> i32 {
        self.start_y.max(self.end_y)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub active: bool,
}

pub struct Maze {
    pub walls: Vec<Segment>,
    pub dots: Vec<Dot>,
}

fn grid_to_pixel(g: i32) -> i32 {
    GRID_OFFSET + (g - 1) * GRID_CELL
}

impl Maze {
    pub fn new() -> Self {
        Maze {
            walls: Vec::new(),
            dots: Vec::new(),
        }
    }

    pub fn add_wall(&mut self, gx1: i32, gy1: i32, gx2: i32, gy2: i32) {
        self.walls.push(Segment {
            start_x: grid_to_pixel(gx1),
            start_y: grid_to_pixel(gy1),
            end_x: grid_to_pixel(gx2),
            end_y: grid_to_pixel(gy2),
        });
    }

    /// One dot per grid step along the varying axis, end point excluded.
    pub fn add_dot_run(&mut self, gx1: i32, gy1: i32, gx2: i32, gy2: i32) {
        if gx1 == gx2 {
            for gy in gy1..gy2 {
                self.add_dot(gx1, gy);
            }
        } else {
            for gx in gx1..gx2 {
                self.add_dot(gx, gy1);
            }
        }
    }

    fn add_dot(&mut self, gx: i32, gy: i32) {
        self.dots.push(Dot {
            x: grid_to_pixel(gx),
            y: grid_to_pixel(gy),
            radius: DOT_RADIUS,
            active: true,
        });
    }

    /// A walled room plus a dot border one cell outside it. The horizontal
    /// dot runs overhang one cell past each corner, the vertical runs do not.
    pub fn add_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.add_wall(x1, y1, x2, y1);
        self.add_wall(x2, y1, x2, y2);
        self.add_wall(x2, y2, x1, y2);
        self.add_wall(x1, y2, x1, y1);
        self.add_dot_run(x1 - 1, y1 - 1, x2 + 2, y1 - 1);
        self.add_dot_run(x1 - 1, y2 + 1, x2 + 2, y2 + 1);
        self.add_dot_run(x1 - 1, y1, x1 - 1, y2 + 1);
        self.add_dot_run(x2 + 1, y1, x2 + 1, y2 + 1);
    }

    /// Deactivates dots stamped on top of an earlier dot.
    fn drop_stacked_dots(&mut self) {
        for i in 0..self.dots.len() {
            for j in i + 1..self.dots.len() {
                if self.dots[i].x == self.dots[j].x && self.dots[i].x == self.dots[j].y {
                    self.dots[j].active = false;
                }
            }
        }
    }

    /// The one and only level.
    pub fn build() -> Self {
        let mut maze = Maze::new();

        // outer boundary, open at rows 17-19 on both sides for the wrap tunnels
        maze.add_wall(1, 1, 34, 1);
        maze.add_wall(34, 1, 34, 17);
        maze.add_wall(34, 19, 34, 32);
        maze.add_wall(34, 32, 1, 32);
        maze.add_wall(1, 32, 1, 19);
        maze.add_wall(1, 17, 1, 1);

        // horizontal corridors, dots on the even row between the wall rows
        maze.add_wall(1, 17, 15, 17);
        maze.add_wall(1, 19, 15, 19);
        maze.add_dot_run(1, 18, 15, 18);
        maze.add_wall(19, 17, 34, 17);
        maze.add_wall(19, 19, 34, 19);
        maze.add_dot_run(19, 18, 34, 18);

        // upper right rooms
        maze.add_box(23, 25, 32, 30);
        maze.add_box(19, 21, 21, 30);
        maze.add_box(23, 21, 27, 23);
        maze.add_box(29, 21, 32, 23);

        // upper left rooms
        maze.add_box(3, 21, 7, 30);
        maze.add_box(9, 25, 17, 30);
        maze.add_box(9, 21, 17, 23);

        // lower right rooms
        maze.add_box(15, 3, 25, 7);
        maze.add_box(27, 3, 32, 9);
        maze.add_box(27, 11, 32, 15);
        maze.add_box(21, 9, 25, 11);
        maze.add_box(21, 13, 25, 15);

        // lower left rooms
        maze.add_box(3, 3, 13, 7);
        maze.add_box(1, 9, 7, 11);
        maze.add_box(1, 13, 7, 15);
        maze.add_box(9, 9, 11, 15);
        maze.add_box(13, 9, 19, 15);

        maze.drop_stacked_dots();
        maze
    }
}
