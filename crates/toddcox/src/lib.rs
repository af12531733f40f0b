//! Todd–Coxeter coset enumeration.
//!
//! Purpose
//! - Given a finite presentation `⟨X | R⟩` of a group G and words generating a
//!   subgroup H, build the coset table of G acting on the right cosets of H
//!   and, when `[G:H]` is finite, its index and a canonical (standardized)
//!   table.
//!
//! Why this design
//! - One owned aggregate (`CosetTable`) holds the rows, the union-find merge
//!   array and the live list; every operation takes it by `&mut`, so the three
//!   never drift apart.
//! - Coset ids are plain indices into an append-only row arena. Merges and
//!   compaction are index remapping only.
//! - The two strategies (`Strategy::Hlt`, `Strategy::Felsch`) are control loops
//!   over the same table primitives and must standardize to the same table.
//!
//! References
//! - Holt, Eick, O'Brien, "Handbook of Computational Group Theory", ch. 5.
//! - Cannon, Dimino, Havas, Watson, "Implementation and Analysis of the
//!   Todd-Coxeter Algorithm", Math. Comp. 27 (1973).

pub mod cfg;
pub mod enumerate;
pub mod error;
pub mod presentation;
pub mod table;
pub mod word;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::EnumCfg;
pub use enumerate::{enumerate, enumerate_from, Strategy};
pub use error::{CosetError, Result};
pub use presentation::Presentation;
pub use table::{CosetTable, Deduction, EnumStats, Row};
pub use word::Word;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::EnumCfg;
    pub use crate::enumerate::{enumerate, enumerate_from, Strategy};
    pub use crate::error::CosetError;
    pub use crate::presentation::Presentation;
    pub use crate::table::CosetTable;
    pub use crate::word::Word;
}
