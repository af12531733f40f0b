//! Two-ended scans, forced fills and coincidence processing.

use std::collections::VecDeque;

use super::{CosetTable, Deduction};
use crate::error::Result;
use crate::word::{col_inverse, Word};

impl CosetTable {
    /// Scan `word` at `alpha`, defining new cosets until the word closes.
    ///
    /// Panics if `alpha >= self.n()`. A merged `alpha` is scanned at its representative.
    pub fn scan_and_fill(&mut self, alpha: usize, word: &Word) -> Result<()> {
        let cols = self.presentation().cols(word)?;
        let alpha = self.rep(alpha);
        self.scan_cols(alpha, &cols, true, None)
    }

    /// Scan `word` at `alpha` without defining: fills a one-letter gap,
    /// records a coincidence on a closed mismatch, otherwise leaves the table alone.
    pub fn scan(&mut self, alpha: usize, word: &Word) -> Result<()> {
        let cols = self.presentation().cols(word)?;
        let alpha = self.rep(alpha);
        self.scan_cols(alpha, &cols, false, None)
    }

    /// Identify cosets `alpha` and `beta` and drain every consequence.
    pub fn coincidence(&mut self, alpha: usize, beta: usize) {
        self.coincidence_with(alpha, beta, None);
    }

    /// Core scan over table columns.
    ///
    /// `f` walks forward from the start of `word`, `b` backward from its end
    /// along inverse letters; `word[i..j]` is the gap still untraced. With
    /// `fill`, a gap of two or more letters is bridged by defining at `f`.
    /// Only definitions happen before the scan closes, so when one hits the
    /// cap they are all undone and the table is left as it was.
    pub(crate) fn scan_cols(
        &mut self,
        alpha: usize,
        word: &[usize],
        fill: bool,
        mut deductions: Option<&mut Vec<Deduction>>,
    ) -> Result<()> {
        let (mut f, mut b) = (alpha, alpha);
        let (mut i, mut j) = (0, word.len());
        let rows = self.table.len();
        let mut defined: Vec<(usize, usize)> = Vec::new();
        loop {
            while i < j {
                match self.table[f][word[i]] {
                    Some(next) => {
                        f = next;
                        i += 1;
                    }
                    None => break,
                }
            }
            if i == j {
                if f != b {
                    self.coincidence_with(f, b, deductions);
                }
                return Ok(());
            }
            while j > i {
                match self.table[b][col_inverse(word[j - 1])] {
                    Some(prev) => {
                        b = prev;
                        j -= 1;
                    }
                    None => break,
                }
            }
            if j == i {
                if f != b {
                    self.coincidence_with(f, b, deductions);
                }
                return Ok(());
            }
            if j == i + 1 {
                self.fill(f, word[i], b, deductions);
                return Ok(());
            }
            if !fill {
                return Ok(());
            }
            match self.define(f, word[i], deductions.as_deref_mut()) {
                Ok(_) => defined.push((f, word[i])),
                Err(e) => {
                    self.roll_back(rows, &defined, deductions);
                    return Err(e);
                }
            }
        }
    }

    /// Undo the definitions `defined` made since the table had `rows` rows,
    /// including the deductions they pushed.
    fn roll_back(
        &mut self,
        rows: usize,
        defined: &[(usize, usize)],
        deductions: Option<&mut Vec<Deduction>>,
    ) {
        for &(alpha, col) in defined {
            self.table[alpha][col] = None;
        }
        self.table.truncate(rows);
        self.p.truncate(rows);
        while self.omega.last().is_some_and(|&c| c >= rows) {
            self.omega.pop();
        }
        self.stats.definitions -= defined.len() as u64;
        if let Some(stack) = deductions {
            let keep = stack.len() - defined.len();
            stack.truncate(keep);
        }
    }

    /// Write the forced pair `f·col = b`, `b·col⁻¹ = f`.
    fn fill(&mut self, f: usize, col: usize, b: usize, deductions: Option<&mut Vec<Deduction>>) {
        self.table[f][col] = Some(b);
        self.table[b][col_inverse(col)] = Some(f);
        self.stats.deductions += 1;
        if let Some(stack) = deductions {
            stack.push((f, col));
        }
    }

    /// Fold the larger representative into the smaller and queue the loser.
    fn merge(&mut self, k: usize, lambda: usize, queue: &mut VecDeque<usize>) {
        let phi = self.rep(k);
        let psi = self.rep(lambda);
        if phi == psi {
            return;
        }
        let (mu, v) = (phi.min(psi), phi.max(psi));
        self.p[v] = mu;
        if let Ok(pos) = self.omega.binary_search(&v) {
            self.omega.remove(pos);
        }
        self.stats.coincidences += 1;
        queue.push_back(v);
    }

    /// Coincidence processing with an optional deduction stack.
    ///
    /// Every cell of a dead row is detached from its target and re-attached
    /// between the two representatives; when the representative cell is
    /// already taken the two targets coincide too and are queued. Each
    /// detached cell `(delta, col⁻¹)` is pushed as a deduction.
    pub(crate) fn coincidence_with(
        &mut self,
        alpha: usize,
        beta: usize,
        mut deductions: Option<&mut Vec<Deduction>>,
    ) {
        let mut queue = VecDeque::new();
        self.merge(alpha, beta, &mut queue);
        while let Some(gamma) = queue.pop_front() {
            for col in 0..self.width() {
                let Some(delta) = self.table[gamma][col] else {
                    continue;
                };
                let inv = col_inverse(col);
                self.table[delta][inv] = None;
                if let Some(stack) = deductions.as_deref_mut() {
                    stack.push((delta, inv));
                }
                let mu = self.rep(gamma);
                let nu = self.rep(delta);
                if let Some(t) = self.table[mu][col] {
                    let v = self.rep(t);
                    self.merge(nu, v, &mut queue);
                } else if let Some(t) = self.table[nu][inv] {
                    let v = self.rep(t);
                    self.merge(mu, v, &mut queue);
                } else {
                    self.table[mu][col] = Some(nu);
                    self.table[nu][inv] = Some(mu);
                }
            }
        }
    }
}
