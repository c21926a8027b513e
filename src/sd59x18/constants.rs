// ============================================================================
// SD59x18 Constants
// Scale factor and boundary values, all as raw I256
// ============================================================================

use crate::numeric::I256;

/// Number of decimal places.
pub const DECIMALS: u32 = 18;

/// The scale factor, 10^18.
pub const SCALE: I256 = I256::from_i128(1_000_000_000_000_000_000);

/// The value 1.0.
pub const UNIT: I256 = SCALE;

/// The value 0.5.
pub const HALF_UNIT: I256 = I256::from_i128(500_000_000_000_000_000);

/// The value 0.0.
pub const ZERO: I256 = I256::ZERO;

/// Largest representable value, 2^255 - 1
/// (57896044618658097711785492504343953926634992332820282019728.792003956564819967).
pub const MAX_SD59X18: I256 = I256::MAX;

/// Smallest representable value, -2^255
/// (-57896044618658097711785492504343953926634992332820282019728.792003956564819968).
pub const MIN_SD59X18: I256 = I256::MIN;

/// Largest whole value, 57896044618658097711785492504343953926634992332820282019728.
pub const MAX_WHOLE_SD59X18: I256 = I256::from_limbs([
    0xf502_3c99_0440_0000,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
]);

/// Smallest whole value, -57896044618658097711785492504343953926634992332820282019728.
pub const MIN_WHOLE_SD59X18: I256 = I256::from_limbs([
    0x0afd_c366_fbc0_0000,
    0x0000_0000_0000_0000,
    0x0000_0000_0000_0000,
    0x8000_0000_0000_0000,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(SCALE.to_string(), "1000000000000000000");
        assert_eq!(UNIT, SCALE);
        assert_eq!(HALF_UNIT.to_string(), "500000000000000000");
    }

    #[test]
    fn test_whole_bounds_are_scale_multiples() {
        let (_, rem) = MAX_WHOLE_SD59X18.checked_div_rem(SCALE).unwrap();
        assert!(rem.is_zero());
        let (_, rem) = MIN_WHOLE_SD59X18.checked_div_rem(SCALE).unwrap();
        assert!(rem.is_zero());

        assert_eq!(
            MAX_WHOLE_SD59X18.to_string(),
            "57896044618658097711785492504343953926634992332820282019728000000000000000000"
        );
        assert_eq!(MIN_WHOLE_SD59X18.checked_neg(), Some(MAX_WHOLE_SD59X18));
    }

    #[test]
    fn test_whole_bounds_are_tight() {
        // One more whole step past either bound leaves the range.
        assert_eq!(MAX_WHOLE_SD59X18.checked_add(SCALE), None);
        assert_eq!(MIN_WHOLE_SD59X18.checked_sub(SCALE), None);
        assert!(MAX_SD59X18.checked_sub(MAX_WHOLE_SD59X18).unwrap() < SCALE);
        assert!(MIN_WHOLE_SD59X18.checked_sub(MIN_SD59X18).unwrap() < SCALE);
    }
}
