//! Size-classed buffer pool for read/write paths.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::BytesMut;
use crossbeam::queue::SegQueue;
use once_cell::sync::Lazy;

use super::PooledBuffer;
use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::util::size_class_of;

static GLOBAL_POOL: Lazy<BufferPool> = Lazy::new(BufferPool::default);

/// A cache of exact-size byte buffers, one lock-free queue per power-of-two
/// size class.
///
/// Buffers are handed out with exactly the requested length. Only lengths
/// that are a power of two and no larger than the configured maximum are
/// cached on return; everything else is a plain allocation.
///
/// Per-class occupancy is a soft cap: the check before insertion races with
/// concurrent returns, so a class may briefly hold a few more buffers than
/// configured. Every cached buffer still has the right length and is zeroed.
///
/// # Example
///
/// ```
/// use dokanrs::BufferPool;
///
/// let pool = BufferPool::default();
///
/// let buf = pool.rent_buffer(4096);
/// assert_eq!(buf.len(), 4096);
/// pool.return_buffer(buf);
/// assert_eq!(pool.pooled_count(4096), 1);
///
/// let again = pool.rent_buffer(4096);
/// assert!(again.iter().all(|&b| b == 0));
/// assert_eq!(pool.served_bytes(), 8192);
/// ```
pub struct BufferPool {
    config: PoolConfig,
    /// Slot `k` holds idle buffers of length exactly `2^k`.
    classes: Box<[SegQueue<BytesMut>]>,
    served_bytes: AtomicU64,
}

impl BufferPool {
    /// Creates a pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the maximum pooled size is
    /// not a power of 2.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: PoolConfig) -> Self {
        let classes = (0..config.size_class_count())
            .map(|_| SegQueue::new())
            .collect();

        Self {
            config,
            classes,
            served_bytes: AtomicU64::new(0),
        }
    }

    /// Returns the process-wide pool with default configuration.
    ///
    /// Built on first use and never torn down. Code that wants isolated
    /// statistics should own its own [`BufferPool`].
    pub fn global() -> &'static BufferPool {
        &GLOBAL_POOL
    }

    /// Rents a zeroed buffer of exactly `size` bytes.
    ///
    /// `size` is added to [`served_bytes`](Self::served_bytes) whether or not
    /// the request is served from the cache. A zero `size` yields the
    /// shared, non-allocating empty buffer and counts nothing.
    pub fn rent_buffer(&self, size: usize) -> BytesMut {
        if size == 0 {
            tracing::trace!("empty buffer requested");
            return BytesMut::new();
        }

        self.served_bytes.fetch_add(size as u64, Ordering::Relaxed);

        let Some(class) = self.size_class(size) else {
            tracing::debug!(size, "unpoolable buffer size, allocating");
            return BytesMut::zeroed(size);
        };

        match self.classes[class].pop() {
            Some(buffer) => {
                tracing::debug!(size, class, "reusing pooled buffer");
                buffer
            }
            None => {
                tracing::debug!(size, class, "size class empty, allocating");
                BytesMut::zeroed(size)
            }
        }
    }

    /// Hands a buffer back to the pool.
    ///
    /// The buffer is zeroed and cached when its length maps to a size class
    /// that is below capacity; otherwise it is dropped. Empty buffers are
    /// ignored.
    pub fn return_buffer(&self, mut buffer: BytesMut) {
        let size = buffer.len();
        if size == 0 {
            return;
        }

        let Some(class) = self.size_class(size) else {
            tracing::debug!(size, "unpoolable buffer size, discarding");
            return;
        };

        let queue = &self.classes[class];
        if queue.len() < self.config.max_buffers_per_size_class() {
            buffer.fill(0);
            queue.push(buffer);
            tracing::debug!(size, class, "buffer returned to pool");
        } else {
            tracing::debug!(size, class, "size class full, discarding buffer");
        }
    }

    /// Rents a buffer that goes back to this pool when dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use dokanrs::BufferPool;
    ///
    /// let pool = BufferPool::default();
    /// {
    ///     let mut lease = pool.lease(512);
    ///     lease[..5].copy_from_slice(b"hello");
    /// }
    /// assert_eq!(pool.pooled_count(512), 1);
    /// ```
    pub fn lease(&self, size: usize) -> PooledBuffer<'_> {
        PooledBuffer::new(self, self.rent_buffer(size))
    }

    /// Drops every cached buffer and resets the served-byte counter.
    ///
    /// Not atomic with respect to concurrent rents and returns: a buffer
    /// returned while the pool is being cleared may survive or be dropped.
    pub fn clear(&self) {
        let mut dropped = 0usize;
        for queue in self.classes.iter() {
            while queue.pop().is_some() {
                dropped += 1;
            }
        }
        self.served_bytes.store(0, Ordering::Relaxed);
        tracing::info!(dropped, "buffer pool cleared");
    }

    /// Total bytes handed out since construction or the last [`clear`](Self::clear).
    pub fn served_bytes(&self) -> u64 {
        self.served_bytes.load(Ordering::Relaxed)
    }

    /// Returns the size class a buffer of `size` bytes belongs to, if any.
    pub fn size_class(&self, size: usize) -> Option<usize> {
        size_class_of(size, self.config.max_pooled_buffer_size())
    }

    /// Number of idle buffers cached for the class `size` maps to.
    ///
    /// Always 0 for sizes that are never pooled.
    pub fn pooled_count(&self, size: usize) -> usize {
        self.size_class(size)
            .map_or(0, |class| self.classes[class].len())
    }

    /// Returns the pool configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::with_valid_config(PoolConfig::default())
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pooled: usize = self.classes.iter().map(SegQueue::len).sum();
        f.debug_struct("BufferPool")
            .field("config", &self.config)
            .field("pooled_buffers", &pooled)
            .field("served_bytes", &self.served_bytes())
            .finish()
    }
}
