use super::CellPosition;

/// Rectangular extent of an item, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const UNIT: Self = Self {
        width: 1,
        height: 1,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero-sized footprints cannot be placed anywhere.
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width and height swapped.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// The footprint actually occupied given a rotation flag.
    pub const fn effective(self, rotated: bool) -> Self {
        if rotated { self.transposed() } else { self }
    }

    pub const fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Cells covered when anchored at `anchor`, in row-major order.
    pub fn cells_at(self, anchor: CellPosition) -> impl Iterator<Item = CellPosition> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |dy| {
            (0..width).map(move |dx| CellPosition::new(anchor.x + dx, anchor.y + dy))
        })
    }

    /// True if `position` lies inside this footprint anchored at `anchor`.
    pub fn covers(self, anchor: CellPosition, position: CellPosition) -> bool {
        let dx = i64::from(position.x) - i64::from(anchor.x);
        let dy = i64::from(position.y) - i64::from(anchor.y);
        dx >= 0 && dy >= 0 && dx < i64::from(self.width) && dy < i64::from(self.height)
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_swaps_only_when_rotated() {
        let long = Footprint::new(3, 1);
        assert_eq!(long.effective(false), Footprint::new(3, 1));
        assert_eq!(long.effective(true), Footprint::new(1, 3));
        assert_eq!(long.effective(true).effective(true), long);
    }

    #[test]
    fn cells_are_row_major() {
        let cells: Vec<_> = Footprint::new(2, 2)
            .cells_at(CellPosition::new(1, 3))
            .collect();
        assert_eq!(
            cells,
            vec![
                CellPosition::new(1, 3),
                CellPosition::new(2, 3),
                CellPosition::new(1, 4),
                CellPosition::new(2, 4),
            ]
        );
    }

    #[test]
    fn covers_is_half_open() {
        let footprint = Footprint::new(2, 1);
        let anchor = CellPosition::new(2, 2);
        assert!(footprint.covers(anchor, CellPosition::new(3, 2)));
        assert!(!footprint.covers(anchor, CellPosition::new(4, 2)));
        assert!(!footprint.covers(anchor, CellPosition::new(2, 3)));
        assert!(!footprint.covers(anchor, CellPosition::new(1, 2)));
    }
}
