use eq::approx_eq;
use eq::approx_ne;

/// Returns true if a is strictly less than b.  Raw `<` alone is not
/// enough: it can hold between values that only differ by rounding noise,
/// so the ordering must also survive the tolerance test.
///
/// # Example
/// ```
/// assert_eq!(true, fcmp::ord::approx_lt(1.0, 2.0));
/// assert_eq!(false, fcmp::ord::approx_lt(1.0, 1.0000005));
/// ```
pub fn approx_lt(a: f32, b: f32) -> bool {
    a < b && approx_ne(a, b)
}

/// Returns true if a is less than or equal to b.  Either a raw `<` or a
/// tolerance-confirmed equality is accepted; even when a<b holds the two
/// could in fact be equal, and that counts.
pub fn approx_le(a: f32, b: f32) -> bool {
    a < b || approx_eq(a, b)
}

/// Returns true if a is strictly greater than b.  Mirrors `approx_lt`.
pub fn approx_gt(a: f32, b: f32) -> bool {
    a > b && approx_ne(a, b)
}

/// Returns true if a is greater than or equal to b.  Mirrors `approx_le`.
pub fn approx_ge(a: f32, b: f32) -> bool {
    a > b || approx_eq(a, b)
}

#[cfg(test)]
mod test {
    extern crate rand;
    use self::rand::distributions::range::Range;
    use self::rand::distributions::IndependentSample;
    use eq::approx_eq;
    use eq::EPSILON;
    use ord::*;

    #[test]
    fn lt_needs_tolerance_confirmed_inequality() {
        assert_eq!(true, approx_lt(1.0, 2.0));
        assert_eq!(false, approx_lt(2.0, 1.0));
        // raw < holds but the operands are within tolerance
        assert_eq!(false, approx_lt(1.0, 1.0000005));
        assert_eq!(false, approx_lt(1.0, 1.0));
    }

    #[test]
    fn gt_mirrors_lt() {
        assert_eq!(true, approx_gt(2.0, 1.0));
        assert_eq!(false, approx_gt(1.0, 2.0));
        assert_eq!(false, approx_gt(1.0000005, 1.0));
        assert_eq!(false, approx_gt(-1.0, -1.0000005));
    }

    #[test]
    fn le_accepts_either_branch() {
        assert_eq!(true, approx_le(1.0, 2.0));
        assert_eq!(true, approx_le(1.0000005, 1.0));
        assert_eq!(true, approx_le(1.0, 1.0));
        assert_eq!(false, approx_le(1.00001, 1.0));
        assert_eq!(true, approx_ge(2.0, 1.0));
        assert_eq!(true, approx_ge(1.0, 1.0000005));
        assert_eq!(false, approx_ge(1.0, 1.00001));
    }

    #[test]
    fn trichotomy() {
        let mut rng = rand::thread_rng();
        let range = Range::new(-2.0f32, 2.0);
        let nudge = Range::new(-3.0f32, 3.0);
        for _ in 0..200000 {
            let a = range.ind_sample(&mut rng);
            let b = a + nudge.ind_sample(&mut rng) * EPSILON;
            let outcomes = [approx_lt(a, b), approx_eq(a, b), approx_gt(a, b)];
            let count = outcomes.iter().filter(|&&o| o).count();
            assert_eq!(1, count, "a: {}, b: {}, outcomes: {:?}",
                a, b, outcomes);
        }
    }

    #[test]
    fn le_equals_lt_or_eq() {
        let mut rng = rand::thread_rng();
        let range = Range::new(-2.0f32, 2.0);
        let nudge = Range::new(-3.0f32, 3.0);
        for _ in 0..200000 {
            let a = range.ind_sample(&mut rng);
            let b = a + nudge.ind_sample(&mut rng) * EPSILON;
            assert_eq!(approx_lt(a, b) || approx_eq(a, b), approx_le(a, b),
                "a: {}, b: {}", a, b);
            assert_eq!(approx_gt(a, b) || approx_eq(a, b), approx_ge(a, b),
                "a: {}, b: {}", a, b);
        }
    }

    #[test]
    fn ordering_on_nan_is_false() {
        use std::f32;
        assert_eq!(false, approx_lt(f32::NAN, 1.0));
        assert_eq!(false, approx_le(f32::NAN, 1.0));
        assert_eq!(false, approx_gt(f32::NAN, 1.0));
        assert_eq!(false, approx_ge(f32::NAN, 1.0));
        assert_eq!(false, approx_lt(1.0, f32::NAN));
        assert_eq!(false, approx_ge(1.0, f32::NAN));
    }
}
