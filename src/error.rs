//! Errors raised when a caller breaks an operation's precondition.
//!
//! A missing key is never an error: lookups return `Option`. These variants are only produced
//! when an operation cannot run at all (taking the minimum of an empty table, selecting past the
//! end, popping an empty stack, ...).

use thiserror::Error as ThisError;

/// Shorthand used by every fallible operation in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Precondition failures for the collections in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The operation needs at least one entry in the symbol table.
    #[error("symbol table is empty")]
    EmptyTable,

    /// A rank passed to `select` was not in `0..size`.
    #[error("rank {rank} is out of range for a table of size {size}")]
    InvalidArgument {
        /// The rank that was requested.
        rank: usize,
        /// The size of the table at the time of the call.
        size: usize,
    },

    /// `del_max` on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyPriorityQueue,

    /// `dequeue` on an empty queue.
    #[error("queue is empty")]
    EmptyQueue,

    /// `pop` on an empty stack.
    #[error("stack is empty")]
    EmptyStack,
}
