use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive};

/// Bit length above which both operands of a ratio are shifted down before
/// the conversion to `f64`, keeping them inside the `f64` range.
const RATIO_PRECISION_BITS: u64 = 1000;

/// Converts an integer to the nearest `f64`.
///
/// ## Returns
/// - `Some(f64)`: The nearest finite double.
/// - `None`: If the integer is too large for an `f64`.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use smartcalc::util::num::bigint_to_f64;
///
/// assert_eq!(bigint_to_f64(&BigInt::from(42)), Some(42.0));
/// assert_eq!(bigint_to_f64(&BigInt::from(10).pow(400)), None);
/// ```
#[must_use]
pub fn bigint_to_f64(value: &BigInt) -> Option<f64> {
    value.to_f64().filter(|r| r.is_finite())
}

/// Converts an `f64` to an integer if and only if the value is finite and
/// integral. Every such double converts exactly.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use smartcalc::util::num::f64_to_bigint_exact;
///
/// assert_eq!(f64_to_bigint_exact(5.0), Some(BigInt::from(5)));
/// assert_eq!(f64_to_bigint_exact(-0.0), Some(BigInt::from(0)));
/// assert_eq!(f64_to_bigint_exact(1e30).unwrap().to_string(),
///            "1000000000000000019884624838656");
/// assert_eq!(f64_to_bigint_exact(0.5), None);
/// assert_eq!(f64_to_bigint_exact(f64::NAN), None);
/// ```
#[must_use]
pub fn f64_to_bigint_exact(value: f64) -> Option<BigInt> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    BigInt::from_f64(value)
}

/// Returns `numerator / denominator` as the nearest `f64`.
///
/// Operands too large for an `f64` are shifted down by the same number of
/// bits first, so only the ratio has to fit. The denominator must not be
/// zero.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use smartcalc::util::num::ratio_to_f64;
///
/// assert_eq!(ratio_to_f64(&BigInt::from(1), &BigInt::from(4)), 0.25);
/// let huge = BigInt::from(10).pow(400);
/// assert!((ratio_to_f64(&(&huge * 3), &(&huge * 2)) - 1.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn ratio_to_f64(numerator: &BigInt, denominator: &BigInt) -> f64 {
    let shift = numerator.bits().max(denominator.bits()).saturating_sub(RATIO_PRECISION_BITS);
    let n = (numerator.magnitude() >> shift).to_f64().unwrap_or(f64::INFINITY);
    let d = (denominator.magnitude() >> shift).to_f64().unwrap_or(f64::INFINITY);

    let ratio = n / d;
    if numerator.is_negative() == denominator.is_negative() { ratio } else { -ratio }
}

/// Formats a double the way the calculator prints reals.
///
/// Digits are the shortest that round-trip. The decimal exponent decides the
/// layout: below `-4` or from `16` on, scientific notation with a signed,
/// at least two-digit exponent (`3.3333333333333335e-07`, `1e+16`);
/// otherwise positional notation that always shows a fraction (`0.5`,
/// `2.0`).
///
/// ## Example
/// ```
/// use smartcalc::util::num::format_real;
///
/// assert_eq!(format_real(0.5), "0.5");
/// assert_eq!(format_real(2.0), "2.0");
/// assert_eq!(format_real(0.0001), "0.0001");
/// assert_eq!(format_real(0.00001), "1e-05");
/// assert_eq!(format_real(1.0 / 3_000_000.0), "3.3333333333333335e-07");
/// assert_eq!(format_real(1e20 / 3.0), "3.333333333333333e+19");
/// assert_eq!(format_real(1e16), "1e+16");
/// assert_eq!(format_real(9_999_999_999_999_998.0), "9999999999999998.0");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let positional = format!("{value}");
        if positional.contains('.') { positional } else { format!("{positional}.0") }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
