//! Identifier allocation for new companies
//!
//! Draws random v4 UUIDs and probes the company store until a free one is
//! found or the attempt budget runs out.

mod allocator;

#[cfg(test)]
mod tests;

pub use allocator::{IdGenerator, IdentifierAllocator, DEFAULT_MAX_ATTEMPTS};
