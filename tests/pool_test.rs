// Integration tests for the size-classed BufferPool
// Tests cover: rent/return semantics, accounting, clear, concurrency

use dokanrs::{BufferPool, PoolConfig};
use proptest::prelude::*;

fn pool_with(max_size: usize, per_class: usize) -> BufferPool {
    BufferPool::new(PoolConfig::new(max_size, per_class).unwrap()).unwrap()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_zero_length_rent_and_return() {
    let pool = BufferPool::default();
    let buf = pool.rent_buffer(0);
    assert!(buf.is_empty(), "Zero-size rent must yield an empty buffer");

    pool.return_buffer(buf);
    assert_eq!(pool.pooled_count(0), 0);
    assert_eq!(pool.pooled_count(1), 0);
}

#[test]
fn test_rented_buffer_has_exact_length() {
    let pool = BufferPool::default();
    for size in [1, 2, 100, 512, 4096, 65_535, 1024 * 1024, 3 * 1024 * 1024] {
        let buf = pool.rent_buffer(size);
        assert_eq!(buf.len(), size, "No slack or over-allocation permitted");
        assert!(buf.iter().all(|&b| b == 0));
    }
}

#[test]
fn test_return_then_rent_reuses_zeroed_buffer() {
    let pool = BufferPool::default();
    let mut buf = pool.rent_buffer(64 * 1024);
    buf.fill(0xFF);
    let ptr = buf.as_ptr();

    pool.return_buffer(buf);
    assert_eq!(pool.pooled_count(64 * 1024), 1);

    let reused = pool.rent_buffer(64 * 1024);
    assert_eq!(reused.as_ptr(), ptr, "Idle buffer should be handed out again");
    assert!(reused.iter().all(|&b| b == 0), "Reused buffer must be zeroed");
    assert_eq!(pool.pooled_count(64 * 1024), 0);
}

#[test]
fn test_non_power_of_two_never_pooled() {
    let pool = BufferPool::default();
    let buf = pool.rent_buffer(100);
    assert_eq!(buf.len(), 100);

    pool.return_buffer(buf);
    assert_eq!(pool.pooled_count(100), 0);
    assert_eq!(pool.pooled_count(64), 0);
    assert_eq!(pool.pooled_count(128), 0);
}

#[test]
fn test_above_max_never_pooled() {
    let pool = pool_with(1024, 10);
    let buf = pool.rent_buffer(2048);
    pool.return_buffer(buf);
    assert_eq!(pool.pooled_count(2048), 0);
    assert_eq!(pool.size_class(2048), None);
}

// ============================================================================
// Capacity and Accounting
// ============================================================================

#[test]
fn test_occupancy_capped_single_threaded() {
    let pool = pool_with(4096, 3);
    let bufs: Vec<_> = (0..10).map(|_| pool.rent_buffer(4096)).collect();
    for buf in bufs {
        pool.return_buffer(buf);
        assert!(pool.pooled_count(4096) <= 3);
    }
    assert_eq!(pool.pooled_count(4096), 3);
}

#[test]
fn test_zero_per_class_disables_caching() {
    let pool = pool_with(4096, 0);
    let buf = pool.rent_buffer(1024);
    pool.return_buffer(buf);
    assert_eq!(pool.pooled_count(1024), 0);
}

#[test]
fn test_served_bytes_counts_hits_and_misses() {
    let pool = pool_with(4096, 10);
    let a = pool.rent_buffer(1024); // miss
    pool.return_buffer(a);
    let _b = pool.rent_buffer(1024); // hit
    let _c = pool.rent_buffer(100); // unpoolable
    let _d = pool.rent_buffer(8192); // above max
    let _e = pool.rent_buffer(0); // free

    assert_eq!(pool.served_bytes(), 1024 + 1024 + 100 + 8192);
}

#[test]
fn test_clear_resets_state() {
    let pool = BufferPool::default();
    let buf = pool.rent_buffer(2048);
    pool.return_buffer(buf);
    assert_eq!(pool.pooled_count(2048), 1);

    pool.clear();
    assert_eq!(pool.served_bytes(), 0);
    assert_eq!(pool.pooled_count(2048), 0);

    let fresh = pool.rent_buffer(2048);
    assert_eq!(fresh.len(), 2048);
    assert_eq!(pool.served_bytes(), 2048);
    assert_eq!(pool.pooled_count(2048), 0);
}

#[test]
fn test_global_pool_is_shared() {
    assert!(std::ptr::eq(BufferPool::global(), BufferPool::global()));
    assert_eq!(BufferPool::global().config(), &PoolConfig::default());
}

// ============================================================================
// Leases
// ============================================================================

#[test]
fn test_lease_round_trip() {
    let pool = BufferPool::default();
    {
        let mut lease = pool.lease(256);
        lease.copy_from_slice(&[1u8; 256]);
    }
    assert_eq!(pool.pooled_count(256), 1);

    let lease = pool.lease(256);
    assert!(lease.iter().all(|&b| b == 0));
    assert_eq!(pool.pooled_count(256), 0);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_rent_return() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 500;
    const PER_CLASS: usize = 4;

    let pool = pool_with(64 * 1024, PER_CLASS);
    let sizes = [512usize, 4096, 65_536, 1000];

    crossbeam::thread::scope(|s| {
        for t in 0..THREADS {
            let pool = &pool;
            s.spawn(move |_| {
                for round in 0..ROUNDS {
                    let size = sizes[(t + round) % sizes.len()];
                    let mut buf = pool.rent_buffer(size);
                    assert_eq!(buf.len(), size);
                    assert!(buf.iter().all(|&b| b == 0));
                    buf.fill(t as u8 + 1);
                    pool.return_buffer(buf);
                }
            });
        }
    })
    .unwrap();

    let expected: u64 = (0..THREADS)
        .flat_map(|t| (0..ROUNDS).map(move |round| sizes[(t + round) % sizes.len()] as u64))
        .sum();
    assert_eq!(pool.served_bytes(), expected, "No lost counter updates");

    // Soft cap: overshoot is bounded by the number of racing returners.
    for size in [512, 4096, 65_536] {
        assert!(pool.pooled_count(size) <= PER_CLASS + THREADS);
    }
    assert_eq!(pool.pooled_count(1000), 0);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_served_bytes_is_sum_of_requests(
        sizes in proptest::collection::vec(0usize..70_000, 0..32),
        return_every in 1usize..4,
    ) {
        let pool = pool_with(64 * 1024, 2);
        for (i, &size) in sizes.iter().enumerate() {
            let buf = pool.rent_buffer(size);
            prop_assert_eq!(buf.len(), size);
            if i % return_every == 0 {
                pool.return_buffer(buf);
            }
        }
        let expected: u64 = sizes.iter().map(|&s| s as u64).sum();
        prop_assert_eq!(pool.served_bytes(), expected);
    }

    #[test]
    fn prop_pooled_buffers_are_zeroed(exp in 0u32..=16, fill: u8) {
        let size = 1usize << exp;
        let pool = BufferPool::default();
        let mut buf = pool.rent_buffer(size);
        buf.fill(fill);
        pool.return_buffer(buf);

        let again = pool.rent_buffer(size);
        prop_assert_eq!(again.len(), size);
        prop_assert!(again.iter().all(|&b| b == 0));
    }

    #[test]
    fn prop_unpoolable_sizes_stay_out(size in 3usize..100_000) {
        prop_assume!(!size.is_power_of_two());
        let pool = BufferPool::default();
        let buf = pool.rent_buffer(size);
        pool.return_buffer(buf);
        prop_assert_eq!(pool.pooled_count(size), 0);
        for class in 0..21 {
            prop_assert_eq!(pool.pooled_count(1usize << class), 0);
        }
    }
}
