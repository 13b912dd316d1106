use super::body::Body;

/// Strict AABB overlap test. Touching edges do not count as a collision.
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Resolve one overlapping pair: exchange the velocity vectors, then shove
/// both bodies apart along x by `separation` each, away from each other.
///
/// Equal-mass elastic exchange; not physically exact, but it visually
/// separates. The leftmost body (ties go to `a`, the first-encountered one)
/// moves further left. No relative-velocity check happens before the swap,
/// so a pair that stays overlapped swaps again every tick it persists. That
/// re-swap jitter matches the shipped behavior and stays.
pub fn resolve_pair(a: &mut Body, b: &mut Body, separation: f32) {
    std::mem::swap(&mut a.vel, &mut b.vel);

    if a.pos.x <= b.pos.x {
        a.pos.x -= separation;
        b.pos.x += separation;
    } else {
        a.pos.x += separation;
        b.pos.x -= separation;
    }
}
