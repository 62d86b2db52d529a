// ABOUTME: Crate-level constants for the CSE machine binary

/// The crate version, surfaced via `--version` on the `rpal-cse` binary.
pub const VERSION: &str = "0.1.0";

/// No recursion-depth guard is applied unless the driver passes `--max-depth`
/// (see `Evaluator::with_max_depth`); this constant only documents the
/// default for anyone wiring up a new driver.
pub const DEFAULT_MAX_DEPTH: Option<usize> = None;
