//! Round-robin turn order.
//!
//! The rotation is a queue: the front is the player whose turn it is, and
//! finishing a turn moves that player to the back. With N players, N calls
//! to `advance` visit every player once before any repeats.

mod queue;

pub use queue::PlayerRotation;
