use split_helpers::{
    constants::RATE_PRECISION,
    math::{u128_ratio, MathError},
};

/// Linear routing curve between the configured liquidity bounds.
///
/// Liquidity at or below `min_ld_amount` routes the whole transaction to
/// the pool; liquidity at or above `max_ld_amount` routes the whole
/// transaction to the sale path; in between, the sale share grows linearly
/// with the distance from the floor.
///
/// `min_ld_amount <= max_ld_amount` is NOT cross-checked, neither here nor
/// in the contract messages mutating the bounds. An inverted configuration
/// collapses the curve to a step at the floor.
#[derive(Default, Debug, scale::Encode, scale::Decode, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct SplitCurve {
    /// Expected value of one unit of the monitored asset in
    /// reference-currency units, scaled by `RATE_PRECISION`.
    reference_price: u128,
    /// Liquidity level below which the whole transaction goes to the pool.
    min_ld_amount: u128,
    /// Liquidity level at which the whole transaction goes to the sale path.
    max_ld_amount: u128,
}

impl SplitCurve {
    pub fn new(reference_price: u128, min_ld_amount: u128, max_ld_amount: u128) -> Self {
        Self {
            reference_price,
            min_ld_amount,
            max_ld_amount,
        }
    }

    pub fn reference_price(&self) -> u128 {
        self.reference_price
    }

    pub fn min_ld_amount(&self) -> u128 {
        self.min_ld_amount
    }

    pub fn max_ld_amount(&self) -> u128 {
        self.max_ld_amount
    }

    pub fn set_reference_price(&mut self, new_price: u128) {
        self.reference_price = new_price;
    }

    pub fn set_min_ld_amount(&mut self, new_floor: u128) {
        self.min_ld_amount = new_floor;
    }

    pub fn set_max_ld_amount(&mut self, new_ceiling: u128) {
        self.max_ld_amount = new_ceiling;
    }

    /// Splits a transaction into `(pct_to_pool, pct_to_sale)` given the
    /// current liquidity of the monitored pair in reference-currency units.
    pub fn split_at(&self, liquidity: u128) -> Result<(u8, u8), MathError> {
        if liquidity <= self.min_ld_amount {
            return Ok((100, 0));
        }
        if liquidity >= self.max_ld_amount {
            return Ok((0, 100));
        }
        let over = liquidity - self.min_ld_amount;
        let span = self.max_ld_amount - self.min_ld_amount;
        // over < span, so the sale share stays below 100
        let pct_to_sale = u128_ratio(over, 100, span, 1)? as u8;
        Ok((100 - pct_to_sale, pct_to_sale))
    }

    /// Values `token_reserve` units of the monitored asset in the reference
    /// currency at the configured price.
    pub fn token_value_in_reference(&self, token_reserve: u128) -> Result<u128, MathError> {
        u128_ratio(token_reserve, self.reference_price, RATE_PRECISION, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(min: u128, max: u128) -> SplitCurve {
        SplitCurve::new(RATE_PRECISION, min, max)
    }

    #[test]
    fn everything_to_pool_at_or_below_the_floor() {
        let curve = curve(1000, 3000);
        assert_eq!(curve.split_at(0), Ok((100, 0)));
        assert_eq!(curve.split_at(999), Ok((100, 0)));
        assert_eq!(curve.split_at(1000), Ok((100, 0)));
    }

    #[test]
    fn everything_to_sale_at_or_above_the_ceiling() {
        let curve = curve(1000, 3000);
        assert_eq!(curve.split_at(3000), Ok((0, 100)));
        assert_eq!(curve.split_at(3_000_000), Ok((0, 100)));
        assert_eq!(curve.split_at(u128::MAX), Ok((0, 100)));
    }

    #[test]
    fn sale_share_grows_linearly_between_the_bounds() {
        let curve = curve(1000, 3000);
        assert_eq!(curve.split_at(1400), Ok((80, 20)));
        assert_eq!(curve.split_at(1500), Ok((75, 25)));
        assert_eq!(curve.split_at(2000), Ok((50, 50)));
        assert_eq!(curve.split_at(2500), Ok((25, 75)));
        // shares round down towards the pool
        assert_eq!(curve.split_at(2999), Ok((1, 99)));
        assert_eq!(curve.split_at(1001), Ok((100, 0)));
    }

    #[test]
    fn split_is_pure_in_liquidity_and_config() {
        let curve = curve(1000, 3000);
        assert_eq!(curve.split_at(1700), curve.split_at(1700));
    }

    #[test]
    fn splits_sum_to_100_and_sale_share_is_monotone() {
        let curve = curve(1000, 3000);
        let mut last_sale = 0u8;
        for liquidity in (0..=4000u128).step_by(13) {
            let (to_pool, to_sale) = curve.split_at(liquidity).unwrap();
            assert_eq!(to_pool as u16 + to_sale as u16, 100);
            assert!(to_sale >= last_sale);
            last_sale = to_sale;
        }
    }

    #[test]
    fn inverted_bounds_collapse_to_a_step_at_the_floor() {
        let curve = curve(3000, 1000);
        assert_eq!(curve.split_at(2000), Ok((100, 0)));
        assert_eq!(curve.split_at(3000), Ok((100, 0)));
        assert_eq!(curve.split_at(3001), Ok((0, 100)));
    }

    #[test]
    fn equal_bounds_never_interpolate() {
        let curve = curve(1000, 1000);
        assert_eq!(curve.split_at(1000), Ok((100, 0)));
        assert_eq!(curve.split_at(1001), Ok((0, 100)));
    }

    #[test]
    fn token_valuation_scales_by_rate_precision() {
        let half_unit = SplitCurve::new(RATE_PRECISION / 2, 0, 0);
        assert_eq!(half_unit.token_value_in_reference(1000), Ok(500));

        let thousand_units = SplitCurve::new(RATE_PRECISION * 1000, 0, 0);
        assert_eq!(thousand_units.token_value_in_reference(3), Ok(3000));
    }
}
