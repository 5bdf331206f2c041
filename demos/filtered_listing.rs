//! Filtered directory enumeration with DOS wildcards.
//!
//! Run with:
//!     cargo run --example filtered_listing -- "<.rs" [dir]

use std::env;
use std::fs;

use dokanrs::{NameFilter, contains_wildcards};

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let pattern = args.next().unwrap_or_else(|| "*".to_string());
    let dir = args.next().unwrap_or_else(|| ".".to_string());

    let filter = NameFilter::new(&pattern, true);
    tracing::info!(
        %pattern,
        wildcards = contains_wildcards(&pattern),
        match_all = filter.is_match_all(),
        "listing {}",
        dir
    );

    let names = fs::read_dir(&dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned());

    let mut count = 0;
    for name in filter.filter(names) {
        println!("{name}");
        count += 1;
    }
    println!("{count} entries match {pattern:?}");

    Ok(())
}
