//! Relator-based enumeration (HLT).

use crate::error::Result;
use crate::table::CosetTable;

pub(super) fn run(table: &mut CosetTable) -> Result<()> {
    HltRunner::new(table).run()
}

/// HLT control loop: the cursor `alpha` walks the append-only arena, which
/// makes it a FIFO over cosets in definition order.
struct HltRunner<'a> {
    table: &'a mut CosetTable,
    relators: Vec<Vec<usize>>,
}

impl<'a> HltRunner<'a> {
    fn new(table: &'a mut CosetTable) -> Self {
        let relators = table.presentation().relator_cols();
        Self { table, relators }
    }

    fn run(&mut self) -> Result<()> {
        // Fix H at the base point first.
        for w in self.table.subgroup_cols() {
            self.table.scan_cols(0, &w, true, None)?;
        }
        let width = self.table.width();
        let mut alpha = 0;
        while alpha < self.table.n() {
            if self.table.is_live(alpha) {
                for w in &self.relators {
                    self.table.scan_cols(alpha, w, true, None)?;
                    if !self.table.is_live(alpha) {
                        break;
                    }
                }
                if self.table.is_live(alpha) {
                    for col in 0..width {
                        if self.table.cell(alpha, col).is_none() {
                            self.table.define(alpha, col, None)?;
                        }
                    }
                }
            }
            alpha += 1;
        }
        Ok(())
    }
}
