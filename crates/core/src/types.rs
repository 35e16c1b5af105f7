#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Empty,
    Wall,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }
}
