use crate::OwnableError;
use ink::primitives::AccountId;
use psp22::PSP22Error;

/// Custodian of a liquidity-backing token balance.
///
/// The owner can move parts of the balance out (`migrate`) until the
/// one-way `block_migrate` latch is set, and can retire the component for
/// good with `finish`, which drains whatever balance is left. A finished
/// manager rejects every balance-moving call permanently.
#[ink::trait_definition]
pub trait LdManager {
    /// Moves `amount` of the managed token to `to`.
    /// Can only be called by the owner while migration is possible.
    #[ink(message)]
    fn migrate(&mut self, to: AccountId, amount: u128) -> Result<(), LdManagerError>;

    /// Permanently disables `migrate`. Idempotent.
    /// Can only be called by the owner.
    #[ink(message)]
    fn block_migrate(&mut self) -> Result<(), LdManagerError>;

    /// Sends the remaining managed balance to the owner and permanently
    /// disables the contract. Can only be called by the owner, once.
    #[ink(message)]
    fn finish(&mut self) -> Result<(), LdManagerError>;

    /// Returns address of the managed token.
    #[ink(message)]
    fn token(&self) -> AccountId;

    /// Returns address of the exchange router this manager was deployed
    /// against.
    #[ink(message)]
    fn router(&self) -> AccountId;

    /// Returns whether the migration latch has been set.
    #[ink(message)]
    fn migrate_blocked(&self) -> bool;

    /// Returns whether the manager has been finished.
    #[ink(message)]
    fn finished(&self) -> bool;
}

/// Errors that can be returned from calling `LdManager`'s methods.
#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum LdManagerError {
    OwnableError(OwnableError),
    PSP22Error(PSP22Error),
    /// Migration has been disabled with the one-way latch.
    MigrationBlocked,
    /// The manager has been finished; no balance can move anymore.
    AlreadyFinished,
}

macro_rules! impl_froms {
    ( $( $error:ident ),* ) => {
        $(
            impl From<$error> for LdManagerError {
                fn from(error: $error) -> Self {
                    LdManagerError::$error(error)
                }
            }
        )*
    };
}

impl_froms!(OwnableError, PSP22Error);
