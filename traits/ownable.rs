use ink::primitives::AccountId;
use scale::{Decode, Encode};

/// Single-owner access capability.
///
/// The account given at construction time owns the contract. Ownership
/// moves with `transfer_ownership` and is effective immediately; there is
/// no pending-owner handshake.
#[ink::trait_definition]
pub trait Ownable {
    /// Returns the address of the current owner.
    #[ink(message)]
    fn owner(&self) -> AccountId;

    /// Hands the ownership of the contract over to `new_owner`.
    /// Can only be called by the current owner.
    #[ink(message)]
    fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), OwnableError>;
}

#[derive(Debug, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum OwnableError {
    /// The caller didn't have the permissions to call a given method.
    CallerNotOwner(AccountId),
}

/// Storage backing for [`Ownable`]. Embed it in the contract storage and
/// route every privileged message through [`OwnableData::ensure_owner`].
#[derive(Debug)]
#[ink::storage_item]
pub struct OwnableData {
    owner: AccountId,
}

impl OwnableData {
    pub fn new(owner: AccountId) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> AccountId {
        self.owner
    }

    pub fn transfer_ownership(
        &mut self,
        caller: AccountId,
        new_owner: AccountId,
    ) -> Result<(), OwnableError> {
        self.ensure_owner(caller)?;
        self.owner = new_owner;
        Ok(())
    }

    pub fn ensure_owner(&self, caller: AccountId) -> Result<(), OwnableError> {
        if caller != self.owner {
            return Err(OwnableError::CallerNotOwner(caller));
        }
        Ok(())
    }
}
