//! Property-based tests using `proptest` for engine invariant validation.
//!
//! Covers the engine-wide properties:
//!
//! 1. **Round-trip bias** — exact-in A→B→A never returns more than sold.
//! 2. **Exact-out coverage** — supplying the quoted input buys at least
//!    the requested output, on both curves.
//! 3. **Invariant preservation** — each curve's invariant is
//!    non-decreasing across an applied swap (the fee stays in the pool).
//! 4. **Fee monotonicity** — a higher fee never yields more output.
//! 5. **Orientation independence** — pair construction order never
//!    changes a quote.
//! 6. **Deposit bounds** — the optimal split never exceeds either desired
//!    amount and preserves the reserve ratio within rounding.

use proptest::prelude::*;

use crate::curves::stable;
use crate::domain::{CurveKind, Decimals, FeeRate, Token, TokenAddress, TokenPair};
use crate::liquidity;
use crate::pool::Pool;
use crate::swap;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const SCALE_6: u64 = 1_000_000;

fn tok_a() -> Token {
    let Ok(d) = Decimals::new(6) else {
        panic!("valid decimals");
    };
    Token::new(TokenAddress::from_bytes([1u8; 32]), d)
}

fn tok_b() -> Token {
    let Ok(d) = Decimals::new(6) else {
        panic!("valid decimals");
    };
    Token::new(TokenAddress::from_bytes([2u8; 32]), d)
}

fn fee_30bp() -> FeeRate {
    let Ok(fee) = FeeRate::new(3, 1000) else {
        panic!("valid fee");
    };
    fee
}

fn make_pool(curve: CurveKind, ra: u64, rb: u64) -> Pool {
    let Ok(pair) = TokenPair::new(tok_a(), tok_b()) else {
        panic!("valid pair");
    };
    Pool::new(pair, curve, fee_30bp(), ra, rb)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves deep enough that fee revenue dominates solver rounding.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000_000u64..=1_000_000_000u64
}

/// Trade sizes small relative to the reserve floor.
fn amount_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=100_000u64
}

// ---------------------------------------------------------------------------
// Property 1: Round-trip bias
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_bias_uncorrelated(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(CurveKind::Uncorrelated, ra, rb);
        let Ok(ab) = pool.swap_unchecked(&tok_a(), amount) else {
            return Ok(());
        };
        if ab.amount_out() == 0 {
            return Ok(());
        }
        let Ok(ba) = pool.swap_unchecked(&tok_b(), ab.amount_out()) else {
            return Ok(());
        };
        prop_assert!(
            ba.amount_out() <= amount,
            "round trip created value: {} > {}",
            ba.amount_out(), amount
        );
    }

    #[test]
    fn prop_round_trip_bias_stable(
        reserve in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        // Balanced pool: the peg region, where the curve is flattest and
        // rounding slack is tightest.
        let mut pool = make_pool(CurveKind::Stable, reserve, reserve);
        let Ok(ab) = pool.swap_unchecked(&tok_a(), amount) else {
            return Ok(());
        };
        if ab.amount_out() == 0 {
            return Ok(());
        }
        let Ok(ba) = pool.swap_unchecked(&tok_b(), ab.amount_out()) else {
            return Ok(());
        };
        prop_assert!(
            ba.amount_out() <= amount,
            "stable round trip created value: {} > {}",
            ba.amount_out(), amount
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Exact-out coverage
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exact_out_covers_uncorrelated(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_out in amount_strategy(),
    ) {
        let fee = fee_30bp();
        let Ok(needed) = swap::get_amount_in(
            CurveKind::Uncorrelated, amount_out, rb, ra, SCALE_6, SCALE_6, fee,
        ) else {
            return Ok(());
        };
        let Ok(produced) = swap::get_amount_out(
            CurveKind::Uncorrelated, needed, ra, rb, SCALE_6, SCALE_6, fee,
        ) else {
            return Ok(());
        };
        prop_assert!(
            produced >= amount_out,
            "quoted input under-bought: {produced} < {amount_out}"
        );
    }

    #[test]
    fn prop_stable_quote_in_for_quoted_out_covers_input(
        reserve in prop_oneof![
            Just(1_000_000u64),
            Just(100_000_000u64),
            Just(1_000_000_000u64),
        ],
        amount in 1u64..=100_000,
    ) {
        // The other composition: quote the output for an input, then ask
        // what that output costs. The answer must never be below the
        // original input, or quoting would print money.
        let fee = fee_30bp();
        let Ok(out) = swap::get_amount_out(
            CurveKind::Stable, amount, reserve, reserve, SCALE_6, SCALE_6, fee,
        ) else {
            return Ok(());
        };
        if out == 0 {
            return Ok(());
        }
        let Ok(back) = swap::get_amount_in(
            CurveKind::Stable, out, reserve, reserve, SCALE_6, SCALE_6, fee,
        ) else {
            return Ok(());
        };
        prop_assert!(
            back >= amount,
            "stable quote round trip favored trader: {back} < {amount}"
        );
    }

    #[test]
    fn prop_exact_out_covers_stable(
        reserve in reserve_strategy(),
        amount_out in amount_strategy(),
    ) {
        let fee = fee_30bp();
        let Ok(needed) = swap::get_amount_in(
            CurveKind::Stable, amount_out, reserve, reserve, SCALE_6, SCALE_6, fee,
        ) else {
            return Ok(());
        };
        let Ok(produced) = swap::get_amount_out(
            CurveKind::Stable, needed, reserve, reserve, SCALE_6, SCALE_6, fee,
        ) else {
            return Ok(());
        };
        prop_assert!(
            produced >= amount_out,
            "stable quoted input under-bought: {produced} < {amount_out}"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_constant_product_non_decreasing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(CurveKind::Uncorrelated, ra, rb);
        let k_before = u128::from(ra) * u128::from(rb);
        if pool.swap_unchecked(&tok_a(), amount).is_err() {
            return Ok(());
        }
        let (ra2, rb2) = pool.reserves();
        let k_after = u128::from(ra2) * u128::from(rb2);
        prop_assert!(
            k_after >= k_before,
            "product shrank: {k_after} < {k_before}"
        );
    }

    #[test]
    fn prop_stable_invariant_non_decreasing(
        reserve in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(CurveKind::Stable, reserve, reserve);
        let Ok(k_before) = stable::lp_value(
            u128::from(reserve), SCALE_6, u128::from(reserve), SCALE_6,
        ) else {
            return Ok(());
        };
        if pool.swap_unchecked(&tok_a(), amount).is_err() {
            return Ok(());
        }
        let (ra2, rb2) = pool.reserves();
        let Ok(k_after) = stable::lp_value(
            u128::from(ra2), SCALE_6, u128::from(rb2), SCALE_6,
        ) else {
            return Ok(());
        };
        prop_assert!(
            k_after >= k_before,
            "stable invariant shrank: {k_after} < {k_before}"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_higher_fee_never_pays_more(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
        low in 0u64..50,
        bump in 1u64..50,
    ) {
        let Ok(fee_low) = FeeRate::new(low, 1000) else {
            return Ok(());
        };
        let Ok(fee_high) = FeeRate::new(low + bump, 1000) else {
            return Ok(());
        };
        let Ok(out_low) = swap::get_amount_out(
            CurveKind::Uncorrelated, amount, ra, rb, SCALE_6, SCALE_6, fee_low,
        ) else {
            return Ok(());
        };
        let Ok(out_high) = swap::get_amount_out(
            CurveKind::Uncorrelated, amount, ra, rb, SCALE_6, SCALE_6, fee_high,
        ) else {
            return Ok(());
        };
        prop_assert!(
            out_high <= out_low,
            "higher fee paid more: {out_high} > {out_low}"
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Orientation independence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quotes_ignore_construction_order(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let (Ok(p1), Ok(p2)) = (
            TokenPair::new(tok_a(), tok_b()),
            TokenPair::new(tok_b(), tok_a()),
        ) else {
            panic!("valid pairs");
        };
        let pool1 = Pool::new(p1, CurveKind::Uncorrelated, fee_30bp(), ra, rb);
        let pool2 = Pool::new(p2, CurveKind::Uncorrelated, fee_30bp(), ra, rb);
        prop_assert_eq!(
            pool1.quote_out(&tok_a(), amount),
            pool2.quote_out(&tok_a(), amount)
        );
        prop_assert_eq!(
            pool1.quote_out(&tok_b(), amount),
            pool2.quote_out(&tok_b(), amount)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Deposit bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_within_desired_and_on_ratio(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        xd in amount_strategy(),
        yd in amount_strategy(),
    ) {
        let Ok((x, y)) = liquidity::optimal_deposit(xd, yd, 0, 0, rx, ry) else {
            return Ok(());
        };
        prop_assert!(x <= xd);
        prop_assert!(y <= yd);
        // One side is always taken in full; the other is floor-implied, so
        // cross-multiplied products differ by less than one reserve unit.
        let lhs = u128::from(x) * u128::from(ry);
        let rhs = u128::from(y) * u128::from(rx);
        let diff = lhs.abs_diff(rhs);
        prop_assert!(
            diff < u128::from(rx).max(u128::from(ry)),
            "deposit off ratio: |{lhs} - {rhs}| = {diff}"
        );
    }
}
