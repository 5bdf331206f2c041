//! Buffer management for the read/write path.
//!
//! - [`BufferPool`] - Size-classed cache of exact-length byte buffers
//! - [`PooledBuffer`] - Rented buffer that returns to its pool on drop

mod lease;
mod pool;

pub use lease::PooledBuffer;
pub use pool::BufferPool;
