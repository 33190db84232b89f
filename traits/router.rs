use crate::MathError;
use ink::{prelude::vec::Vec, primitives::AccountId};

/// Quoting surface of the exchange router.
///
/// The suite never trades through the router; it only asks it to price an
/// amount of one token in terms of another along a path of pairs.
#[ink::trait_definition]
pub trait Router {
    /// Returns amounts of tokens received for `amount_in`.
    ///
    /// At each step, a swap outcome for pair `(path[i], path[i+1])` is
    /// calculated, using tokens from the previous trade.
    #[ink(message)]
    fn get_amounts_out(
        &self,
        amount_in: u128,
        path: Vec<AccountId>,
    ) -> Result<Vec<u128>, RouterError>;
}

/// Errors that can be returned from quoting calls.
#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum RouterError {
    MathError(MathError),
    PairNotFound,
    InvalidPath,
    InsufficientAmount,
    InsufficientLiquidity,
}

impl From<MathError> for RouterError {
    fn from(error: MathError) -> Self {
        RouterError::MathError(error)
    }
}
