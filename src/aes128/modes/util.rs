pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process blocks in parallel if input size gt 4 KiB
