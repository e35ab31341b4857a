//! Site percolation on an n-by-n grid, decided with a weighted union-find
//! that carries two virtual sites above and below the grid.

#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
extern crate rand;

mod error;
mod data;
mod disjoint_set;
mod grid;
mod random;
mod render;
mod trial;

pub use error::{PercolationError, Result};
pub use data::{Site, Direction};
pub use disjoint_set::DisjointSet;
pub use grid::{Grid, Snapshot};
pub use random::{RandomSource, SeededUniform};
pub use render::{Renderer, TextRenderer};
pub use trial::{Trial, Trials, TrialConfig, run_trial, run_trials, percolation_rate};
