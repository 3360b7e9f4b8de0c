//! Stable hash-based course color assignment.
//!
//! The palette slot is a pure function of the course code, so two renders
//! of the same schedule always agree and no cache is needed.

/// Display palette, one slot per hash bucket.
pub const PALETTE: [&str; 8] = [
    "blue", "orange", "purple", "green", "pink", "indigo", "teal", "cyan",
];

/// 31x rolling hash over UTF-16 code units, wrapped to 32 bits.
/// The empty string hashes to 0.
fn stable_hash(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Deterministic palette color for a course code.
pub fn color_for(code: &str) -> &'static str {
    PALETTE[(stable_hash(code) as usize) % PALETTE.len()]
}
