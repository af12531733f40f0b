//! Finite group presentations `⟨x1..xm | R⟩`.

use crate::error::{CosetError, Result};
use crate::word::{word_cols, Word};

/// Generator count plus relator words, validated on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    generators: usize,
    relators: Vec<Word>,
}

impl Presentation {
    /// Build a presentation on `generators` generators. Every relator letter
    /// must lie in `[-generators, -1] ∪ [1, generators]`.
    pub fn new(generators: usize, relators: Vec<Word>) -> Result<Self> {
        let p = Self {
            generators,
            relators,
        };
        for r in &p.relators {
            p.validate_word(r)?;
        }
        Ok(p)
    }

    #[inline]
    pub fn generators(&self) -> usize {
        self.generators
    }

    #[inline]
    pub fn relators(&self) -> &[Word] {
        &self.relators
    }

    /// Number of table columns (generators and their inverses).
    #[inline]
    pub fn width(&self) -> usize {
        2 * self.generators
    }

    pub fn validate_word(&self, word: &Word) -> Result<()> {
        match word
            .letters()
            .iter()
            .find(|&&l| l == 0 || l.unsigned_abs() as usize > self.generators)
        {
            Some(&letter) => Err(CosetError::MalformedWord {
                letter,
                generators: self.generators,
            }),
            None => Ok(()),
        }
    }

    /// Validate and convert to table columns.
    pub(crate) fn cols(&self, word: &Word) -> Result<Vec<usize>> {
        self.validate_word(word)?;
        Ok(word_cols(word))
    }

    pub(crate) fn relator_cols(&self) -> Vec<Vec<usize>> {
        self.relators.iter().map(word_cols).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_and_zero_letters() {
        let err = Presentation::new(2, vec![Word::new([1, 3])]).unwrap_err();
        assert_eq!(
            err,
            CosetError::MalformedWord {
                letter: 3,
                generators: 2
            }
        );
        let err = Presentation::new(2, vec![Word::new([-1, 0])]).unwrap_err();
        assert!(matches!(err, CosetError::MalformedWord { letter: 0, .. }));
        assert!(Presentation::new(2, vec![Word::new([-2, 2, 1])]).is_ok());
    }

    #[test]
    fn empty_relator_list_is_valid() {
        let p = Presentation::new(3, Vec::new()).unwrap();
        assert_eq!(p.width(), 6);
        assert!(p.relators().is_empty());
    }
}
