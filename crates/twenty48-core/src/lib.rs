//! twenty48-core: the pure engine behind a terminal 2048 game.
//!
//! This crate provides:
//! - A rectangular `Grid` of tile values with ergonomic methods
//!   (`shift`, `make_move`, `can_play`, ...)
//! - Orientation primitives (`transpose`, `mirror`) that reduce all four
//!   directional moves to one canonical slide
//! - Line compaction/fusion and the weighted random tile spawner
//!
//! Quick start:
//! ```
//! use twenty48_core::engine::{self, Move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic game setup with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let g0 = engine::new_game(4, 4, &mut rng);
//! let g1 = g0.shift(Move::Left);
//! assert_eq!((g1.height(), g1.width()), (4, 4));
//! ```
//!
//! Every transformation returns a freshly allocated grid, so callers can
//! detect whether a move did anything by comparing old and new state with
//! `==`. Prefer the RNG-injected methods when you need determinism; the
//! `*_thread` conveniences use the thread-local RNG.
pub mod engine;
