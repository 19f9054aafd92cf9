use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::geometry::Point;
use crate::map::{Cell, Direction, MapData, WallType};

/// One character slot of the canvas. Later variants win when two cells
/// paint the same slot.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Glyph {
    #[default]
    Blank,
    Hallway,
    Room,
    Wall,
    Door,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    fn floor(is_room: bool) -> Glyph {
        if is_room { Glyph::Room } else { Glyph::Hallway }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Blank => "  ".with(Color::Reset),
            Glyph::Hallway => "░░".with(Color::DarkYellow),
            Glyph::Room => "··".with(Color::Grey),
            Glyph::Wall => "██".with(Color::White),
            Glyph::Door => "▒▒".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::CELL_WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Character grid of `(2w + 1) x (2h + 1)` slots. Cells sit on odd
/// coordinates and wall slots between them; row 0 is the map's highest `y`,
/// so forward points up.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    pub fn from_map(map: &MapData) -> Self {
        let size = map.size();
        let width = 2 * size.width.max(0) as usize + 1;
        let height = 2 * size.height.max(0) as usize + 1;
        let mut canvas = Canvas {
            width,
            height,
            glyphs: vec![Glyph::Blank; width * height],
        };

        for room in map.rooms() {
            for (local, cell) in room.iter_cells() {
                canvas.paint_cell(room.global_point(local), cell, true);
            }
        }
        for hallway in map.hallways() {
            for (local, cell) in hallway.iter_cells() {
                canvas.paint_cell(hallway.global_point(local), cell, false);
            }
        }
        canvas.fill_corners();
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph(&self, col: usize, row: usize) -> Option<Glyph> {
        (col < self.width && row < self.height).then(|| self.glyphs[row * self.width + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.glyphs.chunks(self.width)
    }

    /// Canvas slot of a map cell.
    pub fn slot(&self, p: Point) -> (usize, usize) {
        let col = 2 * p.x.max(0) as usize + 1;
        let row = self.height - 2 - 2 * p.y.max(0) as usize;
        (col, row)
    }

    fn paint(&mut self, col: usize, row: usize, glyph: Glyph) {
        if col < self.width && row < self.height {
            let slot = &mut self.glyphs[row * self.width + col];
            *slot = (*slot).max(glyph);
        }
    }

    fn paint_cell(&mut self, p: Point, cell: &Cell, is_room: bool) {
        let (col, row) = self.slot(p);
        let floor = Glyph::floor(is_room);
        self.paint(col, row, floor);
        for direction in Direction::ALL {
            let glyph = match cell.wall(direction) {
                WallType::None => floor,
                WallType::Wall => Glyph::Wall,
                WallType::Door => Glyph::Door,
            };
            let (dc, dr) = match direction {
                Direction::Left => (-1, 0),
                Direction::Right => (1, 0),
                Direction::Forward => (0, -1),
                Direction::Backward => (0, 1),
            };
            self.paint(
                col.wrapping_add_signed(dc),
                row.wrapping_add_signed(dr),
                glyph,
            );
        }
    }

    /// Joins wall segments at the even-even slots between four cells.
    fn fill_corners(&mut self) {
        for row in (0..self.height).step_by(2) {
            for col in (0..self.width).step_by(2) {
                let touches_wall = [(0, 1), (0, -1), (1, 0), (-1, 0)].iter().any(|&(dc, dr)| {
                    self.glyph(col.wrapping_add_signed(dc), row.wrapping_add_signed(dr))
                        .is_some_and(|g| g >= Glyph::Wall)
                });
                if touches_wall {
                    self.paint(col, row, Glyph::Wall);
                }
            }
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for glyph in row {
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Plain, non-interactive rendering of a map followed by a summary line.
pub fn display(map: &MapData) -> String {
    let stats = map.stats();
    format!(
        "{}seed {} | {} rooms | {} hallways | {} doors\n",
        Canvas::from_map(map),
        map.seed(),
        stats.room_count,
        stats.hallway_count,
        stats.door_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MapGenerator;
    use crate::geometry::{Rect, Size};
    use crate::grid::Grid;
    use crate::map::Room;

    fn single_room_map() -> MapData {
        let bounds = Rect::new(Point::new(1, 1), Size::new(2, 1));
        let mut cells = Grid::new(Size::new(4, 3), Point::new(0, 0), Cell::default());
        cells[Point::new(1, 1)] = Cell {
            left: WallType::Wall,
            right: WallType::Door,
            forward: WallType::Wall,
            backward: WallType::Wall,
        };
        cells[Point::new(2, 1)] = Cell {
            left: WallType::None,
            right: WallType::Wall,
            forward: WallType::Wall,
            backward: WallType::Wall,
        };
        let room = Room::from_cells(0, bounds, &cells);
        MapData::new(0, Size::new(4, 3), vec![room], Vec::new())
    }

    #[test]
    fn test_canvas_dimensions() {
        let canvas = Canvas::from_map(&single_room_map());
        assert_eq!(canvas.width(), 9);
        assert_eq!(canvas.height(), 7);
        assert_eq!(canvas.rows().count(), 7);
    }

    #[test]
    fn test_walls_doors_and_floor() {
        let canvas = Canvas::from_map(&single_room_map());
        let (col, row) = canvas.slot(Point::new(1, 1));
        assert_eq!((col, row), (3, 3));
        assert_eq!(canvas.glyph(col, row), Some(Glyph::Room));
        assert_eq!(canvas.glyph(col - 1, row), Some(Glyph::Wall));
        // the door slot is shared with the neighbour's open side and wins
        assert_eq!(canvas.glyph(col + 1, row), Some(Glyph::Door));
        assert_eq!(canvas.glyph(col, row - 1), Some(Glyph::Wall));
        assert_eq!(canvas.glyph(col - 1, row - 1), Some(Glyph::Wall));
        assert_eq!(canvas.glyph(0, 0), Some(Glyph::Blank));
    }

    #[test]
    fn test_display_ends_with_summary() {
        let map = MapGenerator::new(Default::default()).generate();
        let text = display(&map);
        assert!(text.ends_with(&format!(
            "seed 0 | {} rooms | {} hallways | {} doors\n",
            map.stats().room_count,
            map.stats().hallway_count,
            map.stats().door_count
        )));
    }
}
