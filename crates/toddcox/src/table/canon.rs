//! Terminal transforms (compress, standardize) and read-outs of a table.

use std::collections::VecDeque;
use std::fmt;

use super::{CosetTable, Row};
use crate::word::{col_letter, Word};

const UNLABELED: usize = usize::MAX;

/// Representative without path compression, for read-only passes.
fn root_of(p: &[usize], mut k: usize) -> usize {
    while p[k] != k {
        k = p[k];
    }
    k
}

impl CosetTable {
    /// Drop merged rows and renumber the live ones densely, keeping their order.
    ///
    /// Afterwards `n() == index()`, `p` is the identity and `omega == 0..index()`.
    /// Ids held outside the table must be renumbered the same way: the `k`-th
    /// entry of the old `omega` becomes `k`.
    pub fn compress(&mut self) {
        if self.is_compressed() {
            return;
        }
        let mut new_id = vec![UNLABELED; self.table.len()];
        for (k, &old) in self.omega.iter().enumerate() {
            new_id[old] = k;
        }
        let rows: Vec<Row> = self
            .omega
            .iter()
            .map(|&old| {
                self.table[old]
                    .iter()
                    .map(|cell| cell.map(|d| new_id[root_of(&self.p, d)]))
                    .collect()
            })
            .collect();
        let k = rows.len();
        self.table = rows;
        self.p = (0..k).collect();
        self.omega = (0..k).collect();
    }

    /// Canonical relabeling: breadth-first from coset 0, columns in order,
    /// ids assigned in visiting order. Compresses first when needed.
    ///
    /// Two tables for the same presentation and subgroup standardize to the
    /// same rows whatever strategy built them. Rows not reachable from 0
    /// (possible only in incomplete tables) keep their relative order after
    /// the reachable ones. Idempotent.
    pub fn standardize(&mut self) {
        self.compress();
        let n = self.table.len();
        let mut label = vec![UNLABELED; n];
        let mut order = Vec::with_capacity(n);
        label[0] = 0;
        order.push(0);
        let mut head = 0;
        while head < order.len() {
            let old = order[head];
            head += 1;
            for cell in &self.table[old] {
                if let Some(t) = *cell {
                    if label[t] == UNLABELED {
                        label[t] = order.len();
                        order.push(t);
                    }
                }
            }
        }
        for old in 0..n {
            if label[old] == UNLABELED {
                label[old] = order.len();
                order.push(old);
            }
        }
        self.table = order
            .iter()
            .map(|&old| self.table[old].iter().map(|c| c.map(|t| label[t])).collect())
            .collect();
    }

    /// A word `w` with `H·w` equal to coset `coset`, read off a breadth-first
    /// spanning tree from coset 0. `None` if `coset` is out of range or
    /// unreachable through defined cells.
    pub fn coset_representative(&self, coset: usize) -> Option<Word> {
        if coset >= self.table.len() {
            return None;
        }
        let target = root_of(&self.p, coset);
        let n = self.table.len();
        let mut parent: Vec<Option<(usize, usize)>> = vec![None; n];
        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        while let Some(c) = queue.pop_front() {
            if c == target {
                break;
            }
            for (col, cell) in self.table[c].iter().enumerate() {
                let Some(d) = *cell else { continue };
                let d = root_of(&self.p, d);
                if !seen[d] {
                    seen[d] = true;
                    parent[d] = Some((c, col));
                    queue.push_back(d);
                }
            }
        }
        if !seen[target] {
            return None;
        }
        let mut letters = Vec::new();
        let mut c = target;
        while let Some((prev, col)) = parent[c] {
            letters.push(col_letter(col));
            c = prev;
        }
        letters.reverse();
        Some(Word::new(letters))
    }
}

impl fmt::Display for CosetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.omega {
            write!(f, "{c}:")?;
            for cell in &self.table[c] {
                match cell {
                    Some(d) => write!(f, " {d}")?,
                    None => write!(f, " -")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
