//! Enumeration limits.
//!
//! Policy
//! - Defaults are fixed constants; callers override per run through `EnumCfg`.
//! - Neither limit affects the result of a run that closes. `max_cosets` only
//!   decides when to give up, `max_stack_size` only when Felsch flushes its
//!   deduction stack with a lookahead pass.

/// Default cap on the number of coset ids a single table may allocate.
pub const DEFAULT_MAX_COSETS: usize = 4_096_000;
/// Default Felsch deduction-stack length that triggers a lookahead pass.
pub const DEFAULT_MAX_STACK_SIZE: usize = 100;

/// Enumeration configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumCfg {
    /// Total coset ids (live + merged) a table may allocate.
    pub max_cosets: usize,
    /// Felsch lookahead trigger.
    pub max_stack_size: usize,
    /// Return the partial table as `Ok` when `max_cosets` is hit, instead of
    /// `Err(ResourceExceeded)`. Check `CosetTable::is_complete` afterwards.
    pub incomplete: bool,
}

impl Default for EnumCfg {
    fn default() -> Self {
        Self {
            max_cosets: DEFAULT_MAX_COSETS,
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
            incomplete: false,
        }
    }
}

impl EnumCfg {
    #[inline]
    pub fn with_max_cosets(self, max_cosets: usize) -> Self {
        Self { max_cosets, ..self }
    }
    #[inline]
    pub fn with_max_stack_size(self, max_stack_size: usize) -> Self {
        Self {
            max_stack_size,
            ..self
        }
    }
    #[inline]
    pub fn with_incomplete(self, incomplete: bool) -> Self {
        Self { incomplete, ..self }
    }
}
