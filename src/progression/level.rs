//! Level calculation
//!
//! XP-to-level formula shared by every category.

/// Maximum attainable level.
pub const LEVEL_CAP: u32 = 1000;

/// XP at and above which the level saturates at [`LEVEL_CAP`].
pub const LEVEL_CAP_XP: u64 = 5 * (LEVEL_CAP as u64 + 1) * (LEVEL_CAP as u64 + 1);

/// Convert accumulated XP to a level: `floor(sqrt(xp / 5))`, clamped
/// to [`LEVEL_CAP`].
///
/// Total and monotonic non-decreasing over all of `u64`; `level(0) == 0`.
pub fn level(xp: u64) -> u32 {
    // floor(sqrt(x)) == floor(sqrt(floor(x))), so integer division by 5
    // first is exact. Integer sqrt keeps this correct for XP values
    // beyond f64's integer range, not that anyone will ever get there.
    let l = isqrt(xp / 5);
    if l >= LEVEL_CAP as u64 {
        LEVEL_CAP
    } else {
        l as u32
    }
}

/// Integer square root: largest `r` with `r * r <= n`.
fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut r = (n as f64).sqrt() as u64;
    // f64 rounding can land one off in either direction near perfect
    // squares; nudge back into place.
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}
