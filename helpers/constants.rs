/// Number of decimal places in reference-currency rates.
///
/// A price expressing "1.0 reference units per token unit" is stored
/// as `RATE_PRECISION`. With this precision the maximum supported rate
/// is of the order of 10^26, far beyond any sane pool configuration.
pub const RATE_DECIMALS: u32 = 12;

/// Scaling factor for reference-currency rates, `10^RATE_DECIMALS`.
pub const RATE_PRECISION: u128 = 10u128.pow(RATE_DECIMALS);
