use crate::inventory::ItemInstanceId;

use super::{Cell, CellPosition, Footprint};

/// Row-major cell storage with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: CellPosition) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    fn index(&self, position: CellPosition) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn cell(&self, position: CellPosition) -> Option<&Cell> {
        self.index(position).map(|index| &self.cells[index])
    }

    pub fn occupant(&self, position: CellPosition) -> Option<ItemInstanceId> {
        self.cell(position).and_then(Cell::occupant)
    }

    /// Bounds rule: the rectangle lies entirely inside the grid.
    pub fn fits(&self, anchor: CellPosition, footprint: Footprint) -> bool {
        if !footprint.is_valid() || anchor.x < 0 || anchor.y < 0 {
            return false;
        }
        let right = i64::from(anchor.x) + i64::from(footprint.width);
        let bottom = i64::from(anchor.y) + i64::from(footprint.height);
        right <= i64::from(self.width) && bottom <= i64::from(self.height)
    }

    /// Bounds rule plus collision rule, treating cells owned by `ignore` as free.
    pub fn is_free(
        &self,
        anchor: CellPosition,
        footprint: Footprint,
        ignore: Option<ItemInstanceId>,
    ) -> bool {
        self.fits(anchor, footprint)
            && footprint.cells_at(anchor).all(|position| {
                self.cell(position)
                    .is_some_and(|cell| cell.is_available_for(ignore))
            })
    }

    /// Stamps `id` into every cell of the rectangle.
    ///
    /// Callers must have checked [`Grid::is_free`] first; cells outside the
    /// grid are skipped.
    pub(crate) fn claim(&mut self, anchor: CellPosition, footprint: Footprint, id: ItemInstanceId) {
        for position in footprint.cells_at(anchor) {
            if let Some(index) = self.index(position) {
                self.cells[index].claim(id);
            }
        }
    }

    /// Releases the cells of the rectangle that belong to `id`.
    pub(crate) fn release(&mut self, anchor: CellPosition, footprint: Footprint, id: ItemInstanceId) {
        for position in footprint.cells_at(anchor) {
            let Some(index) = self.index(position) else {
                continue;
            };
            if self.cells[index].occupant() == Some(id) {
                self.cells[index].release();
            }
        }
    }

    pub(crate) fn release_all(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over cells as `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPosition, &Cell)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let position = CellPosition::new((index % width) as i32, (index / width) as i32);
            (position, cell)
        })
    }

    pub fn free_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_occupied()).count()
    }
}
