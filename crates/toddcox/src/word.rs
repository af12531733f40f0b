//! Words over a signed generator alphabet.
//!
//! Letter `g > 0` is generator `g`, `-g` is its inverse; `0` is never a letter.
//! Words are taken as given: scanning never needs them reduced. The reductions
//! here only serve to build the Felsch conjugate lists.

use std::collections::HashSet;
use std::fmt;
use std::ops::Mul;

/// A finite sequence of signed generator indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Vec<i32>);

impl Word {
    #[inline]
    pub fn new(letters: impl Into<Vec<i32>>) -> Self {
        Self(letters.into())
    }
    #[inline]
    pub fn identity() -> Self {
        Self(Vec::new())
    }
    /// Single-letter word.
    #[inline]
    pub fn letter(letter: i32) -> Self {
        Self(vec![letter])
    }
    #[inline]
    pub fn letters(&self) -> &[i32] {
        &self.0
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Formal inverse: reverse and negate every letter.
    pub fn inverse(&self) -> Word {
        Word(self.0.iter().rev().map(|&l| -l).collect())
    }

    /// `self^k`; negative `k` powers the inverse.
    pub fn pow(&self, k: i32) -> Word {
        let base = if k < 0 { self.inverse() } else { self.clone() };
        let reps = k.unsigned_abs() as usize;
        let mut out = Vec::with_capacity(base.len() * reps);
        for _ in 0..reps {
            out.extend_from_slice(&base.0);
        }
        Word(out)
    }

    /// Cancel adjacent `g g⁻¹` pairs until none remain.
    pub fn free_reduce(&self) -> Word {
        let mut out: Vec<i32> = Vec::with_capacity(self.0.len());
        for &l in &self.0 {
            if out.last() == Some(&-l) {
                out.pop();
            } else {
                out.push(l);
            }
        }
        Word(out)
    }

    /// Free reduction followed by stripping inverse pairs at the two ends.
    pub fn cyclic_reduce(&self) -> Word {
        let w = self.free_reduce().0;
        let (mut lo, mut hi) = (0, w.len());
        while hi - lo >= 2 && w[lo] == -w[hi - 1] {
            lo += 1;
            hi -= 1;
        }
        Word(w[lo..hi].to_vec())
    }

    /// All distinct rotations, in rotation order starting with `self`.
    pub fn cyclic_conjugates(&self) -> Vec<Word> {
        if self.0.is_empty() {
            return vec![Word::identity()];
        }
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for k in 0..self.0.len() {
            let mut rot = self.0.clone();
            rot.rotate_left(k);
            if seen.insert(rot.clone()) {
                out.push(Word(rot));
            }
        }
        out
    }
}

impl From<Vec<i32>> for Word {
    fn from(letters: Vec<i32>) -> Self {
        Word(letters)
    }
}

impl From<&[i32]> for Word {
    fn from(letters: &[i32]) -> Self {
        Word(letters.to_vec())
    }
}

impl Mul for &Word {
    type Output = Word;
    fn mul(self, rhs: &Word) -> Word {
        let mut out = self.0.clone();
        out.extend_from_slice(&rhs.0);
        Word(out)
    }
}

impl Mul for Word {
    type Output = Word;
    fn mul(mut self, rhs: Word) -> Word {
        self.0.extend(rhs.0);
        self
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<identity>");
        }
        for (k, &l) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            if l < 0 {
                write!(f, "x{}^-1", -l)?;
            } else {
                write!(f, "x{l}")?;
            }
        }
        Ok(())
    }
}

/// Table column of a validated letter: generator `g` at `2(g-1)`, its inverse at `2(g-1)+1`.
#[inline]
pub(crate) fn letter_col(letter: i32) -> usize {
    2 * (letter.unsigned_abs() as usize - 1) + usize::from(letter < 0)
}

/// Letter stored in column `col`.
#[inline]
pub(crate) fn col_letter(col: usize) -> i32 {
    let g = (col / 2 + 1) as i32;
    if col % 2 == 0 {
        g
    } else {
        -g
    }
}

#[inline]
pub(crate) fn col_inverse(col: usize) -> usize {
    col ^ 1
}

/// Columns of an already validated word.
pub(crate) fn word_cols(word: &Word) -> Vec<usize> {
    word.0.iter().map(|&l| letter_col(l)).collect()
}
