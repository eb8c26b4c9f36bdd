#![warn(missing_docs)]

//! # `gokigen`
//!
//! A solver for [Slant](https://en.wikipedia.org/wiki/Gokigen_Naname) puzzles, also known as Gokigen Naname.
//! Begin by decoding a seed string into a [`Puzzle`] with [`Puzzle::parse`].
//! Allocate a [`Grid`] one smaller than the puzzle on each side, wire the two into a [`Solver`], then call [`solve()`](crate::Solver::solve), driving the grid to a fixed point and yielding a flat snapshot of it.
//!
//! # Internals
//! This crate is driven by local constraint propagation and nothing else; there is no search.
//! Each numbered corner governs the up-to-four cells touching it, and each of those cells points at the corner in exactly one of its two orientations.
//!
//! Two dual deductions are applied until neither fires anywhere:
//! 1. A corner whose count is already met is "saturated": every undecided cell around it would overshoot the count by connecting, so all of them are forced to point away.
//! 2. A corner that can only still reach its count by taking every remaining undecided cell is "anti-saturated": all of them are forced to point toward it.
//!
//! Each resolved corner leaves the working set, so the sweep loop terminates after at most one pass per clue.
//! Deliberately out of scope are backtracking and the global no-loops rule of full Slant; a puzzle that needs either is returned partially filled, with undecided cells rendered as `_` in the snapshot.

pub use grid::Grid;
pub use cell::Slant;
pub use location::Location;
pub use puzzle::Puzzle;
pub use seed::SeedError;
pub use solver::Solver;

pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod seed;
pub(crate) mod quadrant;
pub(crate) mod cell;
pub(crate) mod puzzle;
pub(crate) mod solver;
