//! Stack-based seed fill.

use log::debug;

use super::surface::{extent, Surface};

/// Recolors the 4-connected region of same-colored pixels containing
/// `(x, y)` to `color`.
///
/// Works row by row: each popped seed is grown into a maximal horizontal run,
/// then every run of source-colored pixels directly above and below pushes a
/// single new seed. Each pixel is painted at most once and the stack holds at
/// most one entry per run along the region's boundary.
///
/// Does nothing when the seed is off the surface or already has `color`.
pub fn flood_fill<S>(x: i32, y: i32, color: S::Color, surface: &mut S)
where
    S: Surface + ?Sized,
{
    if !surface.contains(x, y) {
        return;
    }
    let source = surface.get(x, y);
    if source == color {
        return;
    }

    let (width, height) = extent(surface);
    let mut stack = vec![(x, y)];
    let mut painted = 0usize;
    let mut max_depth = 1usize;

    while let Some((seed_x, row)) = stack.pop() {
        if surface.get(seed_x, row) != source {
            continue;
        }

        let mut left = seed_x;
        while left > 0 && surface.get(left - 1, row) == source {
            left -= 1;
            surface.set(left, row, color);
        }
        let mut right = seed_x;
        while right < width && surface.get(right, row) == source {
            surface.set(right, row, color);
            right += 1;
        }
        painted += (right - left) as usize;

        for neighbor in [row - 1, row + 1] {
            if neighbor < 0 || neighbor >= height {
                continue;
            }
            push_runs(surface, neighbor, left, right, source, &mut stack);
        }
        max_depth = max_depth.max(stack.len());
    }

    debug!("flood fill from ({x}, {y}): {painted} pixels, max stack depth {max_depth}");
}

/// Pushes the first pixel of every source-colored run of `row` within
/// `[left, right)`.
fn push_runs<S>(
    surface: &S,
    row: i32,
    left: i32,
    right: i32,
    source: S::Color,
    stack: &mut Vec<(i32, i32)>,
) where
    S: Surface + ?Sized,
{
    let mut in_run = false;
    for x in left..right {
        let matches = surface.get(x, row) == source;
        if matches && !in_run {
            stack.push((x, row));
        }
        in_run = matches;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::Canvas;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Counts writes to the wrapped canvas.
    struct CountingSurface {
        canvas: Canvas<u8>,
        writes: usize,
    }

    impl Surface for CountingSurface {
        type Color = u8;

        fn width(&self) -> u32 {
            self.canvas.width()
        }

        fn height(&self) -> u32 {
            self.canvas.height()
        }

        fn get(&self, x: i32, y: i32) -> u8 {
            self.canvas.get(x, y)
        }

        fn set(&mut self, x: i32, y: i32, color: u8) {
            self.writes += 1;
            self.canvas.set(x, y, color);
        }
    }

    fn from_rows(rows: &[&str]) -> Canvas<u8> {
        let width = rows[0].len() as u32;
        let pixels = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| b - b'0'))
            .collect();
        Canvas::from_vec(width, rows.len() as u32, pixels).unwrap()
    }

    #[test]
    fn fills_uniform_surface_then_is_a_no_op() {
        let mut surface = CountingSurface {
            canvas: Canvas::new(5, 5, 0),
            writes: 0,
        };
        flood_fill(2, 2, 1, &mut surface);
        assert!(surface.canvas.pixels().iter().all(|&c| c == 1));
        assert_eq!(surface.writes, 25);

        surface.writes = 0;
        flood_fill(2, 2, 1, &mut surface);
        assert_eq!(surface.writes, 0);
    }

    #[test]
    fn stops_at_walls_and_diagonals() {
        let mut canvas = from_rows(&[
            "00100", //
            "00100", //
            "11100", //
            "00010", //
            "00001",
        ]);
        flood_fill(0, 0, 2, &mut canvas);
        assert_eq!(
            canvas,
            from_rows(&[
                "22100", //
                "22100", //
                "11100", //
                "00010", //
                "00001",
            ])
        );
    }

    #[test]
    fn fills_around_obstacles() {
        let mut canvas = from_rows(&[
            "000000", //
            "011110", //
            "010010", //
            "011110", //
            "000000",
        ]);
        flood_fill(5, 4, 7, &mut canvas);
        let expected = from_rows(&[
            "777777", //
            "711117", //
            "710017", //
            "711117", //
            "777777",
        ]);
        assert_eq!(canvas, expected);
    }

    #[test]
    fn off_surface_seed_is_ignored() {
        let mut surface = CountingSurface {
            canvas: Canvas::new(3, 3, 0),
            writes: 0,
        };
        flood_fill(-1, 0, 1, &mut surface);
        flood_fill(0, 3, 1, &mut surface);
        assert_eq!(surface.writes, 0);
    }

    /// Breadth-first reference fill.
    fn reference_fill(canvas: &mut Canvas<u8>, x: i32, y: i32, color: u8) {
        let source = canvas.get(x, y);
        if source == color {
            return;
        }
        let mut queue = VecDeque::from([(x, y)]);
        canvas.set(x, y, color);
        while let Some((px, py)) = queue.pop_front() {
            for (nx, ny) in [(px - 1, py), (px + 1, py), (px, py - 1), (px, py + 1)] {
                if canvas.contains(nx, ny) && canvas.get(nx, ny) == source {
                    canvas.set(nx, ny, color);
                    queue.push_back((nx, ny));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn matches_breadth_first_fill(
            cells in prop::collection::vec(0u8..2, 64),
            seed in (0i32..8, 0i32..8)
        ) {
            let mut expected = Canvas::from_vec(8, 8, cells.clone()).unwrap();
            reference_fill(&mut expected, seed.0, seed.1, 5);

            let mut surface = CountingSurface {
                canvas: Canvas::from_vec(8, 8, cells).unwrap(),
                writes: 0,
            };
            flood_fill(seed.0, seed.1, 5, &mut surface);

            let filled = expected.pixels().iter().filter(|&&c| c == 5).count();
            prop_assert_eq!(surface.writes, filled);
            prop_assert_eq!(surface.canvas, expected);
        }
    }
}
