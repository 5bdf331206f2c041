//! RAII handle over a rented buffer.

use std::ops::{Deref, DerefMut};

use bytes::BytesMut;

use super::BufferPool;

/// A buffer rented from a [`BufferPool`] that returns itself on drop.
///
/// Derefs to `[u8]`. Use [`into_inner`](Self::into_inner) to keep the
/// buffer instead of returning it.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    pool: &'a BufferPool,
    buffer: BytesMut,
}

impl<'a> PooledBuffer<'a> {
    pub(crate) fn new(pool: &'a BufferPool, buffer: BytesMut) -> Self {
        Self { pool, buffer }
    }

    /// Detaches the buffer from its pool.
    pub fn into_inner(mut self) -> BytesMut {
        // The emptied guard returns nothing on drop.
        std::mem::take(&mut self.buffer)
    }

    /// Returns the pool this buffer goes back to.
    pub fn pool(&self) -> &'a BufferPool {
        self.pool
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.return_buffer(std::mem::take(&mut self.buffer));
    }
}
