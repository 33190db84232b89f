use ink::primitives::AccountId;

/// Read-only view of a constant-product pair contract.
///
/// Only the queries the liquidity-control suite consumes are part of this
/// interface; pool mutations stay with the exchange contracts themselves.
#[ink::trait_definition]
pub trait Pair {
    /// Returns amounts of tokens this pair holds and a timestamp.
    ///
    /// NOTE: This does not include the tokens that were transferred to the contract
    /// as part of the _current_ transaction.
    #[ink(message)]
    fn get_reserves(&self) -> (u128, u128, u64);

    /// Returns address of the first token.
    #[ink(message)]
    fn get_token_0(&self) -> AccountId;

    /// Returns address of the second token.
    #[ink(message)]
    fn get_token_1(&self) -> AccountId;
}
