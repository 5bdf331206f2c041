//! Configuration for buffer pooling behavior.
//!
//! - [`PoolConfig`] - Largest pooled size and per-class occupancy cap
//!
//! # Example
//!
//! ```
//! use dokanrs::PoolConfig;
//!
//! // Custom limits
//! let config = PoolConfig::new(64 * 1024, 4)?;
//!
//! // Builder pattern
//! let config = PoolConfig::default()
//!     .with_max_pooled_buffer_size(256 * 1024)
//!     .with_max_buffers_per_size_class(32);
//! config.validate()?;
//!
//! # Ok::<(), dokanrs::PoolError>(())
//! ```

use crate::error::PoolError;

/// Default largest pooled buffer size (1 MiB, size class 20).
pub const DEFAULT_MAX_POOLED_BUFFER_SIZE: usize = 1024 * 1024;

/// Default number of idle buffers kept per size class.
pub const DEFAULT_MAX_BUFFERS_PER_SIZE_CLASS: usize = 10;

/// Configuration for a [`BufferPool`](crate::BufferPool).
///
/// Only buffers whose length is an exact power of two and no larger than
/// `max_pooled_buffer_size` are ever cached. Every other size is served by a
/// fresh allocation and dropped on return.
///
/// # Example
///
/// ```
/// use dokanrs::PoolConfig;
///
/// let config = PoolConfig::default();
/// assert_eq!(config.max_pooled_buffer_size(), 1024 * 1024);
/// assert_eq!(config.max_buffers_per_size_class(), 10);
/// assert_eq!(config.size_class_count(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    /// Largest buffer length that is pooled. Must be a power of 2.
    max_pooled_buffer_size: usize,

    /// Soft cap on idle buffers held per size class.
    max_buffers_per_size_class: usize,
}

impl PoolConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if `max_pooled_buffer_size` is
    /// not a power of 2 (zero included).
    ///
    /// # Example
    ///
    /// ```
    /// use dokanrs::PoolConfig;
    ///
    /// assert!(PoolConfig::new(4096, 8).is_ok());
    /// assert!(PoolConfig::new(5000, 8).is_err());
    /// ```
    pub fn new(
        max_pooled_buffer_size: usize,
        max_buffers_per_size_class: usize,
    ) -> Result<Self, PoolError> {
        if !max_pooled_buffer_size.is_power_of_two() {
            return Err(PoolError::InvalidConfig {
                message: "max_pooled_buffer_size must be a power of 2",
            });
        }

        Ok(Self {
            max_pooled_buffer_size,
            max_buffers_per_size_class,
        })
    }

    /// Sets the largest pooled buffer size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] or let [`BufferPool::new`](crate::BufferPool::new)
    /// reject it.
    pub fn with_max_pooled_buffer_size(mut self, size: usize) -> Self {
        self.max_pooled_buffer_size = size;
        self
    }

    /// Sets the per-class occupancy cap.
    pub fn with_max_buffers_per_size_class(mut self, count: usize) -> Self {
        self.max_buffers_per_size_class = count;
        self
    }

    /// Returns the largest pooled buffer size.
    pub fn max_pooled_buffer_size(&self) -> usize {
        self.max_pooled_buffer_size
    }

    /// Returns the per-class occupancy cap.
    pub fn max_buffers_per_size_class(&self) -> usize {
        self.max_buffers_per_size_class
    }

    /// Returns the number of size classes (`log2(max) + 1`).
    pub fn size_class_count(&self) -> usize {
        self.max_pooled_buffer_size.trailing_zeros() as usize + 1
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use dokanrs::PoolConfig;
    ///
    /// let config = PoolConfig::default().with_max_pooled_buffer_size(3000);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PoolError> {
        Self::new(self.max_pooled_buffer_size, self.max_buffers_per_size_class).map(|_| ())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_pooled_buffer_size: DEFAULT_MAX_POOLED_BUFFER_SIZE,
            max_buffers_per_size_class: DEFAULT_MAX_BUFFERS_PER_SIZE_CLASS,
        }
    }
}
