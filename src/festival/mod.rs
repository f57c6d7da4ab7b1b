//! # Festival Generation Module
//!
//! This module is the algorithmic core of the application: it turns a user's
//! ranked listening history (three time-windowed top-artist lists plus the
//! recently played feed) into a fictitious three-day festival with a name,
//! dates, a location, headliners, and a per-day assignment of artists to
//! stages and time slots.
//!
//! The pipeline is pure and synchronous. It performs no I/O; the CLI layer
//! fetches and caches the inputs, and the generator is a function of those
//! inputs plus a seed derived from them.
//!
//! ## Pipeline
//!
//! 1. Deduplicate the three ranked lists into one priority-ordered pool
//!    (short → medium → long, first seen wins)
//! 2. Select headliners by descending popularity
//! 3. Rank genres by occurrence across the pool
//! 4. Derive a seed from the sorted artist id set and draw name and location
//!    from fixed word lists with a seeded generator, so the same taste
//!    profile always produces the same festival cosmetics
//! 5. Allocate artists to each day's stages from a declarative day plan,
//!    with cross-day fallback and a global no-repeats guarantee
//!
//! ## Submodules
//!
//! - [`config`] - Tunable knobs and the declarative day/stage plan table
//! - [`generator`] - Deduplication, headliner selection, and stage allocation
//! - [`name`] - Festival name, location, and date synthesis
//! - [`random`] - Seed derivation and the deterministic generator behind it

pub mod config;
pub mod generator;
pub mod name;
pub mod random;

pub use config::{DayPlan, FestivalConfig, StagePlan, StageSource};
pub use generator::{FestivalError, generate_festival, generate_festival_with};
pub use random::{SeededRandom, derive_seed};
