//! Pooled buffers on a simulated read/write path.
//!
//! Run with:
//!     RUST_LOG=dokanrs=debug cargo run --example pooled_io

use dokanrs::{BufferPool, PoolConfig};

fn main() -> Result<(), dokanrs::PoolError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let pool = BufferPool::new(PoolConfig::default().with_max_buffers_per_size_class(4))?;

    // Requests as a filesystem client might issue them
    let requests = [4096, 4096, 65_536, 1000, 0, 4096, 2 * 1024 * 1024, 65_536];

    for size in requests {
        let mut lease = pool.lease(size);
        // Stand-in for copying file contents into the buffer
        for (i, byte) in lease.iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }
        println!("served {size:>8} bytes");
    }

    println!("{pool:?}");
    println!("4 KiB class holds {} idle buffers", pool.pooled_count(4096));

    let global = BufferPool::global();
    let buf = global.rent_buffer(8192);
    global.return_buffer(buf);
    println!("global pool served {} bytes", global.served_bytes());

    Ok(())
}
