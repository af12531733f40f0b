//! Coset table: rows, union-find merge array and live list in one aggregate.
//!
//! Layout
//! - `table[c][col]` is the coset reached from coset `c` by the letter in
//!   column `col` (see `word::letter_col`), or `None` while undefined.
//! - `p[i] == i` iff coset `i` is live; otherwise `p[i]` points toward its
//!   class representative. `rep` follows the links and compresses the path.
//! - `omega` lists the live ids in increasing order and is updated together
//!   with `p` on every define and merge.
//!
//! Invariants (checked by `verify`)
//! - Letter symmetry: for live `c`, `table[c][col] == Some(d)` implies
//!   `table[d][col ^ 1] == Some(c)`.
//! - Liveness closure: `omega == { i : p[i] == i }`, and once a coincidence has
//!   drained no live row names a merged id.
//!
//! The table is split for readability: `scan.rs` (scan, fill, coincidence) and
//! `canon.rs` (compress, standardize, representatives).

mod canon;
mod scan;

use crate::cfg::EnumCfg;
use crate::error::{CosetError, Result};
use crate::presentation::Presentation;
use crate::word::{col_inverse, word_cols, Word};

/// One coset row: a target per column, `None` while undefined.
pub type Row = Vec<Option<usize>>;

/// A freshly written cell `(coset, col)` whose relator cycles still need scanning.
pub type Deduction = (usize, usize);

/// Counters accumulated by table operations over the table's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumStats {
    /// Coset ids allocated by `define`.
    pub definitions: u64,
    /// Cells filled by forced deduction during scans.
    pub deductions: u64,
    /// Classes folded away by coincidence processing.
    pub coincidences: u64,
    /// Felsch lookahead passes.
    pub lookaheads: u64,
}

impl EnumStats {
    /// Sum of all table mutations; unchanged across a step iff the step wrote nothing.
    #[inline]
    pub(crate) fn mutations(&self) -> u64 {
        self.definitions + self.deductions + self.coincidences
    }
}

/// Coset table of a presentation acting on the cosets of a subgroup.
#[derive(Clone, Debug)]
pub struct CosetTable {
    presentation: Presentation,
    subgroup: Vec<Word>,
    table: Vec<Row>,
    p: Vec<usize>,
    omega: Vec<usize>,
    max_cosets: usize,
    max_stack_size: usize,
    stats: EnumStats,
}

impl CosetTable {
    /// Table with the single coset `0` (the subgroup itself) and default limits.
    pub fn new(presentation: Presentation, subgroup: Vec<Word>) -> Result<Self> {
        Self::with_cfg(presentation, subgroup, EnumCfg::default())
    }

    /// Like `new`, with explicit limits.
    pub fn with_cfg(presentation: Presentation, subgroup: Vec<Word>, cfg: EnumCfg) -> Result<Self> {
        for w in &subgroup {
            presentation.validate_word(w)?;
        }
        let width = presentation.width();
        Ok(Self {
            presentation,
            subgroup,
            table: vec![vec![None; width]],
            p: vec![0],
            omega: vec![0],
            max_cosets: cfg.max_cosets,
            max_stack_size: cfg.max_stack_size,
            stats: EnumStats::default(),
        })
    }

    #[inline]
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }
    #[inline]
    pub fn subgroup(&self) -> &[Word] {
        &self.subgroup
    }
    #[inline]
    pub fn table(&self) -> &[Row] {
        &self.table
    }
    #[inline]
    pub fn p(&self) -> &[usize] {
        &self.p
    }
    #[inline]
    pub fn omega(&self) -> &[usize] {
        &self.omega
    }
    /// Coset ids allocated so far (live and merged).
    #[inline]
    pub fn n(&self) -> usize {
        self.table.len()
    }
    /// Live coset count; `[G:H]` once the table is complete.
    #[inline]
    pub fn index(&self) -> usize {
        self.omega.len()
    }
    /// Columns per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.presentation.width()
    }
    #[inline]
    pub fn stats(&self) -> EnumStats {
        self.stats
    }
    #[inline]
    pub fn max_cosets(&self) -> usize {
        self.max_cosets
    }
    #[inline]
    pub fn max_stack_size(&self) -> usize {
        self.max_stack_size
    }

    /// Replace both limits, e.g. to resume an enumeration that hit its cap.
    pub fn set_limits(&mut self, cfg: EnumCfg) {
        self.max_cosets = cfg.max_cosets;
        self.max_stack_size = cfg.max_stack_size;
    }

    #[inline]
    pub fn is_live(&self, coset: usize) -> bool {
        self.p[coset] == coset
    }

    #[inline]
    pub fn cell(&self, coset: usize, col: usize) -> Option<usize> {
        self.table[coset][col]
    }

    /// True when no live row has an undefined cell.
    pub fn is_complete(&self) -> bool {
        self.omega
            .iter()
            .all(|&c| self.table[c].iter().all(Option::is_some))
    }

    /// No merged rows remain (the state after `compress`).
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.omega.len() == self.table.len()
    }

    /// Check liveness closure and letter symmetry over all live rows.
    pub fn verify(&self) -> Result<()> {
        let bad = |coset, reason| Err(CosetError::InternalInconsistency { coset, reason });
        if self.p.len() != self.table.len() {
            return bad(self.table.len(), "merge array and rows differ in length");
        }
        if self.omega.windows(2).any(|w| w[0] >= w[1]) {
            return bad(0, "live list is not strictly increasing");
        }
        let mut live = self.omega.iter().peekable();
        for (i, &pi) in self.p.iter().enumerate() {
            let listed = live.next_if(|&&c| c == i).is_some();
            if listed != (pi == i) {
                return bad(i, "live list disagrees with merge array");
            }
        }
        for &c in &self.omega {
            for (col, cell) in self.table[c].iter().enumerate() {
                let Some(d) = *cell else { continue };
                if d >= self.table.len() || self.p[d] != d {
                    return bad(c, "live row names a merged coset");
                }
                if self.table[d][col_inverse(col)] != Some(c) {
                    return bad(c, "cell has no matching inverse cell");
                }
            }
        }
        Ok(())
    }

    pub(crate) fn subgroup_cols(&self) -> Vec<Vec<usize>> {
        self.subgroup.iter().map(word_cols).collect()
    }

    #[inline]
    pub(crate) fn stats_mut(&mut self) -> &mut EnumStats {
        &mut self.stats
    }

    /// Representative of `k`'s class, compressing the path walked.
    pub(crate) fn rep(&mut self, k: usize) -> usize {
        let mut root = k;
        while self.p[root] != root {
            root = self.p[root];
        }
        let mut mu = k;
        while mu != root {
            let next = self.p[mu];
            self.p[mu] = root;
            mu = next;
        }
        root
    }

    /// Fail unless `extra` more cosets fit under the cap.
    #[inline]
    pub(crate) fn ensure_room(&self, extra: usize) -> Result<()> {
        if self.table.len() + extra > self.max_cosets {
            Err(CosetError::ResourceExceeded {
                limit: self.max_cosets,
            })
        } else {
            Ok(())
        }
    }

    /// Allocate a coset `beta` with `alpha·col = beta`. Pushes `(alpha, col)`
    /// when a deduction stack is given.
    pub(crate) fn define(
        &mut self,
        alpha: usize,
        col: usize,
        deductions: Option<&mut Vec<Deduction>>,
    ) -> Result<usize> {
        self.ensure_room(1)?;
        let beta = self.table.len();
        self.table.push(vec![None; self.width()]);
        self.p.push(beta);
        self.omega.push(beta);
        self.table[alpha][col] = Some(beta);
        self.table[beta][col_inverse(col)] = Some(alpha);
        self.stats.definitions += 1;
        if let Some(stack) = deductions {
            stack.push((alpha, col));
        }
        Ok(beta)
    }
}
