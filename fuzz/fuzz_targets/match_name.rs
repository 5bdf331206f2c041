#![no_main]

use dokanrs::{NameFilter, is_name_in_expression};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String, bool)| {
    let (pattern, name, ignore_case) = input;

    // Keep backtracking bounded; file names are short in practice.
    if pattern.chars().count() > 32 || name.chars().count() > 64 {
        return;
    }

    let hit = is_name_in_expression(&pattern, &name, ignore_case);

    // Verify: the reusable filter agrees with the free function
    let filter = NameFilter::new(&pattern, ignore_case);
    assert_eq!(filter.matches(&name), hit);

    // Verify: `*` selects every name
    assert!(is_name_in_expression("*", &name, ignore_case));

    // Verify: a wildcard-free pattern is plain equality
    if !dokanrs::contains_wildcards(&pattern) && !ignore_case {
        assert_eq!(hit, pattern == name);
    }
});
