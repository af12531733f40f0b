//! Coset-based enumeration (Felsch) with lookahead.

use std::collections::HashSet;

use crate::error::Result;
use crate::table::{CosetTable, Deduction};
use crate::word::{col_inverse, word_cols};

pub(super) fn run(table: &mut CosetTable, resumed: bool) -> Result<()> {
    let mut runner = FelschRunner::new(table);
    if resumed {
        runner.seed_from_draft();
    }
    runner.run()
}

/// Felsch control loop: the table plus the pending deduction stack.
pub(super) struct FelschRunner<'a> {
    table: &'a mut CosetTable,
    /// Relators as given, for lookahead sweeps.
    relators: Vec<Vec<usize>>,
    /// Cyclic conjugates of every relator and its inverse, keyed by first column.
    by_first: Vec<Vec<Vec<usize>>>,
    stack: Vec<Deduction>,
}

impl<'a> FelschRunner<'a> {
    pub(super) fn new(table: &'a mut CosetTable) -> Self {
        let presentation = table.presentation();
        let relators = presentation.relator_cols();
        let mut by_first = vec![Vec::new(); presentation.width()];
        let mut seen = HashSet::new();
        for r in presentation.relators() {
            let r = r.cyclic_reduce();
            if r.is_empty() {
                continue;
            }
            for conj in r
                .cyclic_conjugates()
                .into_iter()
                .chain(r.inverse().cyclic_conjugates())
            {
                if seen.insert(conj.clone()) {
                    let cols = word_cols(&conj);
                    by_first[cols[0]].push(cols);
                }
            }
        }
        Self {
            table,
            relators,
            by_first,
            stack: Vec::new(),
        }
    }

    /// Queue every defined live cell of a draft table.
    fn seed_from_draft(&mut self) {
        let width = self.table.width();
        for &alpha in self.table.omega() {
            for col in 0..width {
                if self.table.cell(alpha, col).is_some() {
                    self.stack.push((alpha, col));
                }
            }
        }
    }

    fn run(&mut self) -> Result<()> {
        for w in self.table.subgroup_cols() {
            self.table.scan_cols(0, &w, true, Some(&mut self.stack))?;
        }
        self.process_deductions()?;
        let width = self.table.width();
        loop {
            // Rows before `alpha` are complete, so the first undefined cell
            // among live cosets is always at or after the cursor.
            let mut alpha = 0;
            while alpha < self.table.n() {
                for col in 0..width {
                    if !self.table.is_live(alpha) {
                        break;
                    }
                    if self.table.cell(alpha, col).is_none() {
                        self.table.define(alpha, col, Some(&mut self.stack))?;
                        self.process_deductions()?;
                    }
                }
                alpha += 1;
            }
            if !self.sweep_to_fixpoint()? && self.table.is_complete() {
                return Ok(());
            }
        }
    }

    /// Drain the stack. At `max_stack_size` pending entries one lookahead
    /// pass replaces them.
    pub(super) fn process_deductions(&mut self) -> Result<()> {
        while !self.stack.is_empty() {
            if self.stack.len() >= self.table.max_stack_size() {
                self.look_ahead()?;
                continue;
            }
            let Some((alpha, col)) = self.stack.pop() else {
                break;
            };
            let alpha = self.table.rep(alpha);
            self.scan_conjugates(alpha, col)?;
            let alpha = self.table.rep(alpha);
            if let Some(beta) = self.table.cell(alpha, col) {
                let beta = self.table.rep(beta);
                self.scan_conjugates(beta, col_inverse(col))?;
            }
        }
        Ok(())
    }

    /// Scan, without defining, every conjugate starting with `col` at `alpha`.
    fn scan_conjugates(&mut self, alpha: usize, col: usize) -> Result<()> {
        for w in &self.by_first[col] {
            self.table
                .scan_cols(alpha, w, false, Some(&mut self.stack))?;
            if !self.table.is_live(alpha) {
                break;
            }
        }
        Ok(())
    }

    /// Scan every relator once at every live coset, then drop the pending
    /// stack. Consequences the pass leaves latent are picked up by the
    /// closing sweep in `run`.
    fn look_ahead(&mut self) -> Result<()> {
        self.table.stats_mut().lookaheads += 1;
        tracing::trace!(
            pending = self.stack.len(),
            live = self.table.index(),
            allocated = self.table.n(),
            "felsch lookahead"
        );
        self.sweep()?;
        self.stack.clear();
        Ok(())
    }

    /// One full non-filling pass. Returns whether it wrote anything.
    fn sweep(&mut self) -> Result<bool> {
        let before = self.table.stats().mutations();
        let live = self.table.omega().to_vec();
        for beta in live {
            for w in &self.relators {
                if !self.table.is_live(beta) {
                    break;
                }
                self.table.scan_cols(beta, w, false, None)?;
            }
        }
        Ok(self.table.stats().mutations() != before)
    }

    /// Repeat sweeps until one writes nothing. Returns whether any did.
    ///
    /// At the fixpoint no relator scanned at any live coset yields a fill or a
    /// coincidence, which is the state a fully drained stack also guarantees.
    fn sweep_to_fixpoint(&mut self) -> Result<bool> {
        let mut changed = false;
        while self.sweep()? {
            changed = true;
        }
        Ok(changed)
    }

    #[cfg(test)]
    pub(super) fn push(&mut self, d: Deduction) {
        self.stack.push(d);
    }

    #[cfg(test)]
    pub(super) fn pending(&self) -> usize {
        self.stack.len()
    }
}
