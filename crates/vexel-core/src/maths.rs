//! Scalar math helpers: randomized values and tolerance-based comparison.

use rand::Rng;

/// Tolerance used by [`float_equals`].
pub const FLOAT_PRECISION: f32 = 0.0005;

/// Returns a random `f32` in `[minimum, maximum)`.
pub fn random(minimum: f32, maximum: f32) -> f32 {
    debug_assert!(minimum < maximum, "minimum must be less than maximum");
    rand::thread_rng().gen_range(minimum..maximum)
}

/// Returns one of the two edge values at random.
pub fn random_at_edge(left_edge: f32, right_edge: f32) -> f32 {
    if random_boolean() {
        left_edge
    } else {
        right_edge
    }
}

pub fn random_boolean() -> bool {
    rand::thread_rng().gen()
}

/// Compares two `f32`s within [`FLOAT_PRECISION`].
pub fn float_equals(a: f32, b: f32) -> bool {
    (a - b).abs() <= FLOAT_PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_stays_in_range() {
        for _ in 0..1000 {
            let value = random(-3.5, 7.25);
            assert!((-3.5..7.25).contains(&value));
        }
    }

    #[test]
    fn random_at_edge_only_returns_edges() {
        for _ in 0..100 {
            let value = random_at_edge(1.0, 2.0);
            assert!(value == 1.0 || value == 2.0);
        }
    }

    #[test]
    fn float_equals_respects_precision() {
        assert!(float_equals(1.0, 1.0004));
        assert!(!float_equals(1.0, 1.001));
    }
}
