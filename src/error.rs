use std::error;
use std::fmt;

/// Everything that can go wrong while building or driving a percolation grid.
#[derive(Debug, Clone, PartialEq)]
pub enum PercolationError {
    /// A forest or grid was requested with zero elements.
    InvalidSize(usize),

    /// A forest identifier outside `0..bound`.
    OutOfRange { index: usize, bound: usize },

    /// A grid site outside `0..size` on either axis.
    SiteOutOfRange { row: isize, col: isize, size: usize },

    /// An opening probability outside `[0, 1]`.
    InvalidProbability(f64),

    /// A config key holding a value of the wrong type.
    InvalidConfig(String),
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PercolationError::InvalidSize(n) => {
                write!(f, "invalid size: expected a positive size, got {}", n)
            }
            PercolationError::OutOfRange { index, bound } => {
                write!(f, "identifier {} out of range 0..{}", index, bound)
            }
            PercolationError::SiteOutOfRange { row, col, size } => {
                write!(f, "site ({}, {}) outside a {}x{} grid", row, col, size, size)
            }
            PercolationError::InvalidProbability(p) => {
                write!(f, "probability {} not in [0, 1]", p)
            }
            PercolationError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl error::Error for PercolationError {}

pub type Result<T> = ::std::result::Result<T, PercolationError>;
