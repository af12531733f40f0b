//! Coset enumeration strategies over a shared `CosetTable`.
//!
//! Purpose
//! - `Strategy::Hlt` (Haselgrove–Leech–Trotter): scan every relator at every
//!   live coset, defining inside the scans. Simple and robust; defines eagerly.
//! - `Strategy::Felsch`: define one coset at a time, outside any scan, and
//!   propagate forced consequences through a deduction stack; a lookahead pass
//!   bounds the stack. Usually fewer cosets, more work per coset.
//!
//! Both are control loops holding `&mut CosetTable` plus a local cursor or
//! stack; after `compress` + `standardize` their results are identical.
//!
//! Note on limits
//! - `EnumCfg::max_cosets` is the only guard against infinite index. Hitting
//!   it is `CosetError::ResourceExceeded`, or an incomplete `Ok` table with
//!   `EnumCfg::incomplete`. Such a table can be resumed via `enumerate_from`.

mod felsch;
mod hlt;

use crate::cfg::EnumCfg;
use crate::error::{CosetError, Result};
use crate::presentation::Presentation;
use crate::table::CosetTable;
use crate::word::Word;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Relator-based (HLT).
    #[default]
    Hlt,
    /// Coset-based (Felsch) with lookahead.
    Felsch,
}

/// Enumerate the cosets of `⟨subgroup⟩` in the group given by `presentation`.
pub fn enumerate(
    strategy: Strategy,
    presentation: &Presentation,
    subgroup: &[Word],
    cfg: EnumCfg,
) -> Result<CosetTable> {
    let table = CosetTable::with_cfg(presentation.clone(), subgroup.to_vec(), cfg)?;
    run(strategy, table, cfg, false)
}

/// Continue enumerating from `draft`, typically a table returned incomplete,
/// under the limits in `cfg`. The strategy need not match the one that built the draft.
pub fn enumerate_from(strategy: Strategy, draft: CosetTable, cfg: EnumCfg) -> Result<CosetTable> {
    let mut table = draft;
    table.set_limits(cfg);
    run(strategy, table, cfg, true)
}

fn run(strategy: Strategy, mut table: CosetTable, cfg: EnumCfg, resumed: bool) -> Result<CosetTable> {
    tracing::debug!(
        ?strategy,
        generators = table.presentation().generators(),
        relators = table.presentation().relators().len(),
        subgroup = table.subgroup().len(),
        resumed,
        "coset enumeration start"
    );
    let outcome = match strategy {
        Strategy::Hlt => hlt::run(&mut table),
        Strategy::Felsch => felsch::run(&mut table, resumed),
    };
    let stats = table.stats();
    match outcome {
        Ok(()) => {
            debug_assert!(table.verify().is_ok(), "coset table lost consistency");
            tracing::debug!(
                ?strategy,
                index = table.index(),
                allocated = table.n(),
                definitions = stats.definitions,
                coincidences = stats.coincidences,
                lookaheads = stats.lookaheads,
                "coset enumeration closed"
            );
            Ok(table)
        }
        Err(CosetError::ResourceExceeded { limit }) => {
            tracing::warn!(?strategy, limit, live = table.index(), "coset cap reached");
            if cfg.incomplete {
                Ok(table)
            } else {
                Err(CosetError::ResourceExceeded { limit })
            }
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests;
