//! Dense byte-intensity field the growth engine draws into.

use serde::{Deserialize, Serialize};

/// Row-major grid of 8-bit light intensities.
///
/// All mutation saturates: adds clamp at 255, decay floors at 0, so every
/// cell is in range at all times regardless of call order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LightGrid {
    cells: Vec<u8>,
    pub width: u16,
    pub height: u16,
}

impl LightGrid {
    /// Create a zeroed grid. The backing storage is allocated exactly once
    /// here; nothing grows it afterwards.
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![0; width as usize * height as usize];
        Self {
            cells,
            width,
            height,
        }
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    /// Read a cell. Coordinates are clamped into range so reads are total.
    pub fn get(&self, x: u16, y: u16) -> u8 {
        let ix = x.min(self.width - 1);
        let iy = y.min(self.height - 1);
        self.cells[self.index(ix, iy)]
    }

    /// Saturating add at a cell. Callers bounds-check; out-of-range
    /// coordinates are clamped rather than wrapped.
    pub fn add(&mut self, x: u16, y: u16, amount: u8) {
        let ix = x.min(self.width - 1);
        let iy = y.min(self.height - 1);
        let idx = self.index(ix, iy);
        self.cells[idx] = self.cells[idx].saturating_add(amount);
    }

    /// Saturating subtract on every cell. Used as the slow global fade.
    pub fn decay(&mut self, amount: u8) {
        for cell in &mut self.cells {
            *cell = cell.saturating_sub(amount);
        }
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of cells holding any light at all.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v > 0).count()
    }
}
