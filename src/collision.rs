//! Wall collision for discrete stepped movement.
//!
//! Every wall is axis-aligned, so relative to a movement direction a wall
//! is either perpendicular to it (crossed side-on, the common case) or
//! parallel to it (met head-on at its nearest end). The predicate asks
//! whether the next fixed-size step would reach or cross a wall; it never
//! moves the player.

use crate::game::{Direction, Player, STEP};
use crate::maze::Segment;

/// True when one step in `direction` is blocked by any wall.
pub fn would_hit_wall(player: &Player, direction: Direction, walls: &[Segment]) -> bool {
    walls.iter().any(|wall| blocks(player, direction, wall))
}

fn blocks(p: &Player, direction: Direction, wall: &Segment) -> bool {
    match direction {
        Direction::Left => {
            if wall.is_vertical() {
                // the wall must span the row the player travels on
                p.y + p.radius >= wall.y_min()
                    && p.y + p.radius <= wall.y_max()
                    // still to the right of it
                    && p.x - p.radius > wall.start_x
                    // and the next step would reach or cross it
                    && p.x - p.radius - STEP <= wall.start_x
            } else {
                // head on into the near end of a horizontal wall
                p.y + p.radius >= wall.start_y
                    && p.y - p.radius <= wall.start_y
                    && p.x - p.radius > wall.x_max()
                    && p.x - p.radius - STEP < wall.x_max()
            }
        }
        Direction::Right => {
            if wall.is_vertical() {
                p.y + p.radius >= wall.y_min()
                    && p.y + p.radius <= wall.y_max()
                    && p.x + p.radius < wall.start_x
                    && p.x + p.radius + STEP >= wall.start_x
            } else {
                p.y + p.radius >= wall.start_y
                    && p.y - p.radius <= wall.start_y
                    && p.x + p.radius < wall.x_min()
                    && p.x + p.radius + STEP > wall.x_min()
            }
        }
        Direction::Up => {
            if wall.is_horizontal() {
                p.x + p.radius >= wall.x_min()
                    && p.x + p.radius <= wall.x_max()
                    && p.y + p.radius < wall.start_y
                    && p.y + p.radius + STEP >= wall.start_y
            } else {
                p.x + p.radius >= wall.start_x
                    && p.x - p.radius <= wall.start_x
                    && p.y + p.radius < wall.y_min()
                    && p.y + p.radius + STEP > wall.y_min()
            }
        }
        Direction::Down => {
            if wall.is_horizontal() {
                p.x + p.radius >= wall.x_min()
                    && p.x + p.radius <= wall.x_max()
                    && p.y - p.radius > wall.start_y
                    && p.y - p.radius - STEP <= wall.start_y
            } else {
                p.x + p.radius >= wall.start_x
                    && p.x - p.radius <= wall.start_x
                    && p.y - p.radius > wall.y_max()
                    && p.y - p.radius - STEP < wall.y_max()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PLAYER_RADIUS;

    fn player_at(x: i32, y: i32) -> Player {
        Player {
            x,
            y,
            radius: PLAYER_RADIUS,
            direction: None,
            mouth_open: true,
        }
    }

    fn wall(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
        Segment {
            start_x: x1,
            start_y: y1,
            end_x: x2,
            end_y: y2,
        }
    }

    #[test]
    fn no_walls_never_blocks() {
        let p = player_at(500, 500);
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert!(!would_hit_wall(&p, direction, &[]));
        }
    }

    #[test]
    fn left_blocks_one_step_out() {
        let walls = [wall(100, 50, 100, 150)];
        // leading edge at 106, one step lands at 96
        assert!(would_hit_wall(&player_at(130, 100), Direction::Left, &walls));
        // one step further away clears
        assert!(!would_hit_wall(&player_at(140, 100), Direction::Left, &walls));
    }

    #[test]
    fn left_ignores_wall_already_behind() {
        let walls = [wall(100, 50, 100, 150)];
        assert!(!would_hit_wall(&player_at(90, 100), Direction::Left, &walls));
    }

    #[test]
    fn left_span_check_uses_leading_edge_only() {
        // player body spans rows 76..124 but only y+radius is tested
        let p = player_at(130, 100);
        assert!(would_hit_wall(&p, Direction::Left, &[wall(100, 120, 100, 200)]));
        assert!(!would_hit_wall(&p, Direction::Left, &[wall(100, 50, 100, 80)]));
        assert!(!would_hit_wall(&p, Direction::Left, &[wall(100, 200, 100, 300)]));
    }

    #[test]
    fn right_blocks_one_step_out() {
        let walls = [wall(100, 50, 100, 150)];
        // leading edge at 94 steps to 104
        assert!(would_hit_wall(&player_at(70, 100), Direction::Right, &walls));
        assert!(!would_hit_wall(&player_at(60, 100), Direction::Right, &walls));
        // already past it
        assert!(!would_hit_wall(&player_at(110, 100), Direction::Right, &walls));
    }

    #[test]
    fn up_blocks_one_step_out() {
        let walls = [wall(50, 200, 150, 200)];
        assert!(would_hit_wall(&player_at(100, 166), Direction::Up, &walls));
        assert!(!would_hit_wall(&player_at(100, 156), Direction::Up, &walls));
        assert!(!would_hit_wall(&player_at(100, 210), Direction::Up, &walls));
    }

    #[test]
    fn down_blocks_one_step_out() {
        let walls = [wall(50, 50, 150, 50)];
        assert!(would_hit_wall(&player_at(100, 84), Direction::Down, &walls));
        assert!(!would_hit_wall(&player_at(100, 94), Direction::Down, &walls));
        assert!(!would_hit_wall(&player_at(100, 40), Direction::Down, &walls));
    }

    #[test]
    fn up_ignores_wall_outside_column_span() {
        let walls = [wall(200, 200, 300, 200)];
        assert!(!would_hit_wall(&player_at(100, 166), Direction::Up, &walls));
    }

    #[test]
    fn left_head_on_end_of_horizontal_wall() {
        // wall lies along the row the player straddles; its near end is at 200
        let walls = [wall(100, 100, 200, 100)];
        assert!(would_hit_wall(&player_at(226, 110), Direction::Left, &walls));
        // one step further right, the step no longer reaches the end
        assert!(!would_hit_wall(&player_at(236, 110), Direction::Left, &walls));
        // not straddling the wall's row
        assert!(!would_hit_wall(&player_at(226, 160), Direction::Left, &walls));
    }

    #[test]
    fn right_head_on_end_of_horizontal_wall() {
        let walls = [wall(300, 100, 400, 100)];
        assert!(would_hit_wall(&player_at(270, 90), Direction::Right, &walls));
        assert!(!would_hit_wall(&player_at(250, 90), Direction::Right, &walls));
    }

    #[test]
    fn up_head_on_end_of_vertical_wall() {
        let walls = [wall(100, 150, 100, 250)];
        assert!(would_hit_wall(&player_at(100, 120), Direction::Up, &walls));
        assert!(!would_hit_wall(&player_at(100, 100), Direction::Up, &walls));
        // column straddle required
        assert!(!would_hit_wall(&player_at(160, 120), Direction::Up, &walls));
    }

    #[test]
    fn down_head_on_end_of_vertical_wall() {
        let walls = [wall(100, 50, 100, 150)];
        assert!(would_hit_wall(&player_at(100, 180), Direction::Down, &walls));
        assert!(!would_hit_wall(&player_at(100, 200), Direction::Down, &walls));
    }
}
