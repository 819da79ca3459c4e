//! Move animation: a FIFO queue of layer turns played one at a time.

mod runner;

pub mod animator;

pub use animator::MoveAnimator;
pub use runner::LayerTurn;
