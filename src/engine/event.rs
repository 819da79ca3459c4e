use crate::cube::MoveToken;
use crate::error::Diagnostic;

/// Notifications queued by the registry for its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// A layer turn finished and the cubies were snapped to it.
    MoveCompleted {
        /// Slot whose viewer played the move.
        slot: String,
        /// The move that finished.
        token: MoveToken,
        /// Moves still queued behind it.
        remaining: usize,
    },
    /// A non-fatal problem was detected and logged.
    Diagnostic(Diagnostic),
}
