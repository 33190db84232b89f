use crate::{MathError, OwnableError, RouterError};
use ink::primitives::AccountId;

/// Decides how the value of an inbound transaction is divided between
/// replenishing the exchange pool and the alternate sale path.
///
/// The decision is a pure function of the monitored pair's current
/// liquidity, valued in reference-currency units, and of the owner-mutable
/// floor/ceiling configuration. Liquidity at or below the floor sends
/// everything to the pool; liquidity at or above the ceiling sends
/// everything to the sale path; in between the sale share grows linearly.
#[ink::trait_definition]
pub trait SplitFormula {
    /// Returns `(pct_to_pool, pct_to_sale)` for a transaction worth
    /// `amount_in`. Both percentages are integers in `[0, 100]` and always
    /// add up to 100.
    ///
    /// Queries the pair and the router live on every call; nothing is
    /// cached between calls.
    #[ink(message)]
    fn calculate_split(&self, amount_in: u128) -> Result<(u8, u8), SplitFormulaError>;

    /// Returns the current liquidity of the monitored pair expressed in
    /// reference-currency units. Re-runs the live query; side-effect free.
    #[ink(message)]
    fn get_ld_amount_in_reference(&self) -> Result<u128, SplitFormulaError>;

    /// Replaces the liquidity floor. Can only be called by the owner.
    #[ink(message)]
    fn update_min_ld_amount(&mut self, new_floor: u128) -> Result<(), SplitFormulaError>;

    /// Replaces the liquidity ceiling. Can only be called by the owner.
    #[ink(message)]
    fn update_max_ld_amount(&mut self, new_ceiling: u128) -> Result<(), SplitFormulaError>;

    /// Replaces the reference price of the monitored asset. Can only be
    /// called by the owner.
    #[ink(message)]
    fn update_reference_price(&mut self, new_price: u128) -> Result<(), SplitFormulaError>;

    /// Returns the configured liquidity floor in reference-currency units.
    #[ink(message)]
    fn min_ld_amount(&self) -> u128;

    /// Returns the configured liquidity ceiling in reference-currency units.
    #[ink(message)]
    fn max_ld_amount(&self) -> u128;

    /// Returns the configured reference price of the monitored asset.
    #[ink(message)]
    fn reference_price(&self) -> u128;

    /// Returns address of the router used for reference-currency quotes.
    #[ink(message)]
    fn router(&self) -> AccountId;

    /// Returns address of the monitored pair.
    #[ink(message)]
    fn pair(&self) -> AccountId;

    /// Returns address of the monitored asset.
    #[ink(message)]
    fn token(&self) -> AccountId;

    /// Returns address of the reference-currency token.
    #[ink(message)]
    fn reference_token(&self) -> AccountId;
}

/// Errors that can be returned from calling `SplitFormula`'s methods.
#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum SplitFormulaError {
    OwnableError(OwnableError),
    RouterError(RouterError),
    MathError(MathError),
    /// `calculate_split` was asked about a worthless transaction.
    InvalidAmount,
    /// The monitored asset is on neither side of the configured pair.
    InvalidPool,
}

macro_rules! impl_froms {
    ( $( $error:ident ),* ) => {
        $(
            impl From<$error> for SplitFormulaError {
                fn from(error: $error) -> Self {
                    SplitFormulaError::$error(error)
                }
            }
        )*
    };
}

impl_froms!(OwnableError, RouterError, MathError);
