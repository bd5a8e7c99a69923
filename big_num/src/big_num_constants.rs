/// Width of one magnitude block.
pub const BLOCK_BITS: u32 = u32::BITS;

/// Blocks needed to hold any `u32`/`i32` magnitude (the minimum value takes one more).
pub const U32_BLOCKS: usize = 1;

/// Blocks needed to hold any `u64`/`i64` magnitude (the minimum value takes one more).
pub const U64_BLOCKS: usize = 2;

/// Largest magnitude served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;
