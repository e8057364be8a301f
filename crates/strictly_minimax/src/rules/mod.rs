//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) values. None of them mutate
//! their input; [`result`] is the only one that can fail.

pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use moves::{actions, result};
pub use terminal::{terminal, utility};
pub use turn::{initial_state, player};
pub use win::winner;
