pub mod board;
pub mod error;
pub mod parse;
pub mod pq;
pub mod render;
pub mod solver;

pub use board::{Board, Move};
pub use error::{BoardError, SolverError};
pub use parse::read_board;
pub use pq::MinPq;
pub use solver::{Solver, SolverStats};
