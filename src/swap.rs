//! Fee-inclusive swap math over a selected curve.
//!
//! This layer wraps the raw curve formulas with the fee schedule and the
//! validation both directions share. Rounding is always pool-favoring:
//!
//! - exact-in — the fee is taken off the input first. The constant-product
//!   path folds the deduction into its closed form (no intermediate
//!   truncation); the stable path rounds the post-fee input **up** before
//!   handing it to the curve, so a division remainder is collected as fee
//!   rather than traded.
//! - exact-out — the required input is rounded **up** at every truncation
//!   point, so supplying the computed input always yields at least the
//!   requested output. The stable path keeps its two `+1` steps (inverse
//!   solve, then fee grossing) separate; consolidating them would change
//!   real token amounts.

use crate::curves::{stable, uncorrelated};
use crate::domain::{CurveKind, FeeRate};
use crate::error::AmmError;
use crate::math::{mul_div, mul_to_wide, narrow_to_u64};

/// Computes the output amount for a gross input on the given curve.
///
/// `scale_in` / `scale_out` are the tokens' power-of-ten scales; only the
/// stable curve reads them.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InvalidReserve`] if either reserve is zero.
/// - Arithmetic errors from the underlying curve.
pub fn get_amount_out(
    curve: CurveKind,
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    scale_in: u64,
    scale_out: u64,
    fee: FeeRate,
) -> Result<u64, AmmError> {
    if amount_in == 0 {
        return Err(AmmError::InvalidAmount("swap input must be positive"));
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InvalidReserve("swap requires positive reserves"));
    }

    match curve {
        CurveKind::Uncorrelated => {
            uncorrelated::coin_out_with_fee(amount_in, reserve_in, reserve_out, fee)
        }
        CurveKind::Stable => {
            // Deduct the fee up front, rounding the remainder up so the
            // pool keeps the rounding dust.
            let scaled = mul_to_wide(amount_in, fee.retained());
            let denominator = fee.denominator() as u128;
            let mut amount_in_after_fee = scaled / denominator;
            if scaled % denominator != 0 {
                amount_in_after_fee += 1;
            }

            let out = stable::coin_out(
                amount_in_after_fee,
                scale_in,
                scale_out,
                reserve_in as u128,
                reserve_out as u128,
            )?;
            narrow_to_u64(out)
        }
    }
}

/// Computes the gross input required for an exact output on the given
/// curve.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::InvalidReserve`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out >= reserve_out`.
/// - Arithmetic errors from the underlying curve.
pub fn get_amount_in(
    curve: CurveKind,
    amount_out: u64,
    reserve_out: u64,
    reserve_in: u64,
    scale_out: u64,
    scale_in: u64,
    fee: FeeRate,
) -> Result<u64, AmmError> {
    if amount_out == 0 {
        return Err(AmmError::InvalidAmount("swap output must be positive"));
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InvalidReserve("swap requires positive reserves"));
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    match curve {
        CurveKind::Uncorrelated => {
            uncorrelated::coin_in_with_fee(amount_out, reserve_out, reserve_in, fee)
        }
        CurveKind::Stable => {
            let net_in = stable::coin_in(
                amount_out as u128,
                scale_out,
                scale_in,
                reserve_out as u128,
                reserve_in as u128,
            )?;
            let net_in = narrow_to_u64(net_in)?;
            // Gross up for the fee, rounding up once more.
            let grossed = mul_div(net_in, fee.denominator(), fee.retained())?;
            grossed
                .checked_add(1)
                .ok_or(AmmError::Overflow("grossed swap input exceeds u64"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const SCALE_6: u64 = 1_000_000;

    fn fee_0_3_percent() -> FeeRate {
        let Ok(fee) = FeeRate::new(3, 1000) else {
            panic!("valid fee");
        };
        fee
    }

    // -- validation shared by both directions -------------------------------

    #[test]
    fn rejects_zero_input() {
        let err = get_amount_out(
            CurveKind::Uncorrelated,
            0,
            1_000_000,
            1_000_000,
            SCALE_6,
            SCALE_6,
            fee_0_3_percent(),
        );
        assert_eq!(err, Err(AmmError::InvalidAmount("swap input must be positive")));
    }

    #[test]
    fn rejects_zero_output() {
        let err = get_amount_in(
            CurveKind::Stable,
            0,
            1_000_000,
            1_000_000,
            SCALE_6,
            SCALE_6,
            fee_0_3_percent(),
        );
        assert_eq!(
            err,
            Err(AmmError::InvalidAmount("swap output must be positive"))
        );
    }

    #[test]
    fn rejects_empty_reserves() {
        for curve in [CurveKind::Uncorrelated, CurveKind::Stable] {
            let err = get_amount_out(curve, 1000, 0, 1_000_000, SCALE_6, SCALE_6, fee_0_3_percent());
            assert_eq!(
                err,
                Err(AmmError::InvalidReserve("swap requires positive reserves"))
            );
        }
    }

    #[test]
    fn rejects_output_meeting_reserve() {
        for curve in [CurveKind::Uncorrelated, CurveKind::Stable] {
            let err = get_amount_in(
                curve,
                1_000_000,
                1_000_000,
                1_000_000,
                SCALE_6,
                SCALE_6,
                fee_0_3_percent(),
            );
            assert_eq!(err, Err(AmmError::InsufficientLiquidity));
        }
    }

    // -- uncorrelated dispatch ----------------------------------------------

    #[test]
    fn uncorrelated_reference_vector() {
        let Ok(out) = get_amount_out(
            CurveKind::Uncorrelated,
            1000,
            1_000_000,
            1_000_000,
            SCALE_6,
            SCALE_6,
            fee_0_3_percent(),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, 996);
    }

    #[test]
    fn uncorrelated_round_trip_never_favors_trader() {
        let fee = fee_0_3_percent();
        for amount in [1u64, 997, 12_345, 400_000] {
            let Ok(out) = get_amount_out(
                CurveKind::Uncorrelated,
                amount,
                1_000_000,
                1_000_000,
                SCALE_6,
                SCALE_6,
                fee,
            ) else {
                panic!("expected Ok");
            };
            if out == 0 {
                continue;
            }
            let Ok(back) = get_amount_in(
                CurveKind::Uncorrelated,
                out,
                1_000_000,
                1_000_000,
                SCALE_6,
                SCALE_6,
                fee,
            ) else {
                panic!("expected Ok");
            };
            assert!(back >= amount, "round trip favored trader: {back} < {amount}");
        }
    }

    // -- stable dispatch ----------------------------------------------------

    #[test]
    fn stable_fee_rounds_remainder_up() {
        // amount_in = 1001, retained 997: 1001·997 = 998_997, which leaves
        // a remainder mod 1000 and must round up to 999.
        // A flat curve at the peg then returns at most that.
        let Ok(out) = get_amount_out(
            CurveKind::Stable,
            1001,
            100_000_000,
            100_000_000,
            SCALE_6,
            SCALE_6,
            fee_0_3_percent(),
        ) else {
            panic!("expected Ok");
        };
        assert!(out <= 999);
        assert!(out >= 996);
    }

    #[test]
    fn stable_exact_out_covers_request() {
        let fee = fee_0_3_percent();
        for amount_out in [1_000u64, 50_000, 2_000_000] {
            let Ok(needed) = get_amount_in(
                CurveKind::Stable,
                amount_out,
                300_000_000,
                300_000_000,
                SCALE_6,
                SCALE_6,
                fee,
            ) else {
                panic!("expected Ok");
            };
            let Ok(produced) = get_amount_out(
                CurveKind::Stable,
                needed,
                300_000_000,
                300_000_000,
                SCALE_6,
                SCALE_6,
                fee,
            ) else {
                panic!("expected Ok");
            };
            assert!(
                produced >= amount_out,
                "stable round trip under-supplied: {produced} < {amount_out}"
            );
        }
    }

    #[test]
    fn stable_beats_uncorrelated_near_peg() {
        // The whole point of the stable curve: less slippage at parity.
        let fee = fee_0_3_percent();
        let Ok(stable_out) = get_amount_out(
            CurveKind::Stable,
            1_000_000,
            100_000_000,
            100_000_000,
            SCALE_6,
            SCALE_6,
            fee,
        ) else {
            panic!("expected Ok");
        };
        let Ok(cp_out) = get_amount_out(
            CurveKind::Uncorrelated,
            1_000_000,
            100_000_000,
            100_000_000,
            SCALE_6,
            SCALE_6,
            fee,
        ) else {
            panic!("expected Ok");
        };
        assert!(stable_out > cp_out);
    }
}
