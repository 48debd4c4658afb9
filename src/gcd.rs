//! Greatest common divisor and integer ratio reduction.
//!
//! Euclid's algorithm on magnitudes. The result is unsigned so that
//! `gcd(i64::MIN, 0) == 2^63` stays representable.

/// Greatest common divisor of `a` and `b`.
///
/// Always non-negative; `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`.
///
/// # Examples
///
/// ```
/// use lattice_raster::gcd::gcd;
///
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(-7, 0), 7);
/// ```
#[must_use]
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

/// Greatest common divisor of two unsigned values.
#[must_use]
pub fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reduce the ratio `num / den` to lowest terms.
///
/// The sign is carried by the numerator, so the returned denominator is
/// never negative. `(0, 0)` reduces to itself.
///
/// Inputs must not be `i64::MIN`; their reduced magnitude would not fit.
#[must_use]
pub fn reduce_ratio(num: i64, den: i64) -> (i64, i64) {
    let g = gcd(num, den);
    if g == 0 {
        return (0, 0);
    }
    let g = g as i64;
    let (num, den) = (num / g, den / g);
    if den < 0 {
        (-num, -den)
    } else {
        (num, den)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// gcd(a, 0) == |a| and gcd(0, b) == |b|
        #[test]
        fn prop_identity_with_zero(a in any::<i64>()) {
            prop_assert_eq!(gcd(a, 0), a.unsigned_abs());
            prop_assert_eq!(gcd(0, a), a.unsigned_abs());
        }

        /// gcd(a, b) == gcd(b, a mod b)
        #[test]
        fn prop_euclid_recurrence(a in any::<i64>(), b in any::<i64>()) {
            prop_assume!(b != 0);
            prop_assert_eq!(gcd(a, b), gcd(b, a.wrapping_rem(b)));
        }

        /// The result divides both inputs
        #[test]
        fn prop_divides_both(a in any::<i64>(), b in any::<i64>()) {
            let g = gcd(a, b);
            if g != 0 {
                prop_assert_eq!(a.unsigned_abs() % g, 0);
                prop_assert_eq!(b.unsigned_abs() % g, 0);
            }
        }

        #[test]
        fn prop_commutative(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        /// Reduced ratios are coprime and keep the value
        #[test]
        fn prop_reduced_ratio_is_coprime(num in -100_000i64..100_000, den in 1i64..100_000) {
            let (n, d) = reduce_ratio(num, den);
            prop_assert!(d > 0);
            prop_assert_eq!(gcd(n, d), 1);
            prop_assert_eq!(i128::from(n) * i128::from(den), i128::from(num) * i128::from(d));
        }
    }
}
