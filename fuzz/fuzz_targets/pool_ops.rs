#![no_main]

use dokanrs::{BufferPool, PoolConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|ops: Vec<(u16, bool, u8)>| {
    let pool = BufferPool::new(PoolConfig::new(16 * 1024, 3).unwrap()).unwrap();
    let mut held = Vec::new();
    let mut served = 0u64;

    for (size, give_back, fill) in ops {
        let size = size as usize;
        let mut buf = pool.rent_buffer(size);
        served += size as u64;

        // Verify: exact length, zeroed contents
        assert_eq!(buf.len(), size);
        assert!(buf.iter().all(|&b| b == 0));

        buf.fill(fill);
        held.push(buf);

        if give_back {
            if let Some(buf) = held.pop() {
                pool.return_buffer(buf);
            }
        }

        // Verify: occupancy never exceeds the cap single-threaded
        for class in 0..15 {
            assert!(pool.pooled_count(1 << class) <= 3);
        }
    }

    assert_eq!(pool.served_bytes(), served);

    pool.clear();
    assert_eq!(pool.served_bytes(), 0);
});
