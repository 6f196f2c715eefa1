//! Odd-prime test shared by insertion, removal and parsing.

/// Returns `true` if `value` is an odd prime.
///
/// Values below 3 and even values are rejected outright, so 2 is never
/// accepted. Remaining candidates are trial-divided by every odd integer from
/// `floor(sqrt(value))` (rounded down to odd) down to 3.
pub(crate) fn is_odd_prime(value: i32) -> bool {
    if value < 3 || value % 2 == 0 {
        return false;
    }

    let root = value.isqrt();
    let start = if root % 2 == 0 { root - 1 } else { root };

    (3..=start)
        .rev()
        .step_by(2)
        .all(|divisor| value % divisor != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3)]
    #[case(5)]
    #[case(7)]
    #[case(11)]
    #[case(13)]
    #[case(97)]
    #[case(7919)]
    #[case(i32::MAX)]
    fn accepts_odd_primes(#[case] value: i32) {
        assert!(is_odd_prime(value));
    }

    #[rstest]
    #[case(i32::MIN)]
    #[case(-7)]
    #[case(-1)]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    #[case(9)]
    #[case(15)]
    #[case(21)]
    #[case(25)]
    #[case(49)]
    #[case(7917)]
    fn rejects_everything_else(#[case] value: i32) {
        assert!(!is_odd_prime(value));
    }

    #[rstest]
    fn matches_naive_definition_below_two_thousand() {
        let naive = |value: i32| value > 2 && value % 2 != 0 && (2..value).all(|d| value % d != 0);
        for value in -10..2000 {
            assert_eq!(is_odd_prime(value), naive(value), "value = {value}");
        }
    }
}
