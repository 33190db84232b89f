use primitive_types::U256;

pub fn casted_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Computes `amount * num / denom` with the intermediate product widened
/// to `U256`, so the multiplication itself cannot overflow.
///
/// `code` identifies the call site in the returned [`MathError`].
pub fn u128_ratio(amount: u128, num: u128, denom: u128, code: u8) -> Result<u128, MathError> {
    casted_mul(amount, num)
        .checked_div(denom.into())
        .ok_or(MathError::DivByZero(code))?
        .try_into()
        .map_err(|_| MathError::CastOverflow(code))
}

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum MathError {
    AddOverflow(u8),
    CastOverflow(u8),
    DivByZero(u8),
    MulOverflow(u8),
    SubUnderflow(u8),
}
