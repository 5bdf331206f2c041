//! dokanrs
//!
//! Self-contained helpers for userspace filesystem bindings.
//!
//! `dokanrs` carries the two pieces of a filesystem binding layer that have
//! real algorithmic content:
//!
//! - NT-compatible wildcard name matching, with the exact rules of the
//!   kernel's `FsRtlIsNameInExpression` including the DOS tokens `<`, `>`
//!   and `"`
//! - a size-classed byte buffer pool for hot read/write paths
//!
//! The crate intentionally:
//! - does NOT talk to a driver or marshal requests
//! - does NOT know about paths, directories or security descriptors
//! - does NOT spawn threads or block
//!
//! # Matching
//!
//! ```
//! use dokanrs::{is_name_in_expression, NameFilter};
//!
//! assert!(is_name_in_expression("<.txt", "report.txt", true));
//!
//! let filter = NameFilter::new("*.rs", false);
//! let hits: Vec<_> = filter.filter(["lib.rs", "Cargo.toml"]).collect();
//! assert_eq!(hits, ["lib.rs"]);
//! ```
//!
//! # Pooling
//!
//! ```
//! use dokanrs::{BufferPool, PoolConfig};
//!
//! let pool = BufferPool::new(PoolConfig::default().with_max_buffers_per_size_class(4))?;
//!
//! let buf = pool.rent_buffer(64 * 1024);
//! // ... fill from the backing store ...
//! pool.return_buffer(buf);
//!
//! assert_eq!(pool.served_bytes(), 64 * 1024);
//! # Ok::<(), dokanrs::PoolError>(())
//! ```
//!
//! Both components log through `tracing`; install a subscriber to see pool
//! activity at `debug` level.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod pattern;

mod util; // internal helpers

//
// Public surface (intentionally tiny)
//

pub use buffer::{BufferPool, PooledBuffer};
pub use config::{DEFAULT_MAX_BUFFERS_PER_SIZE_CLASS, DEFAULT_MAX_POOLED_BUFFER_SIZE, PoolConfig};
pub use error::PoolError;
pub use pattern::{
    ASTERISK, DOS_DOT, DOS_QM, DOS_STAR, NameFilter, QUESTION_MARK, contains_wildcards,
    is_name_in_expression,
};
