//! Deterministic book-set ranking for the "book test" mentalism trick.
//!
//! `booktest` loads a library of candidate books, each annotated with one
//! classification token per chapter, and finds the subsets that minimize
//! positional token collisions — the combinations where a spectator's chapter
//! choice picks out exactly one book. All operations are deterministic:
//! identical inputs always produce identical ranked output, byte-for-byte.

pub mod config;
pub mod library;
pub mod selection;
pub mod types;
