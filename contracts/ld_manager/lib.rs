#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod migration;

/// Holds a liquidity-backing token balance on behalf of the owner.
///
/// The balance can be moved out piecewise with `migrate` until the one-way
/// latch is set, and the whole component can be retired with `finish`,
/// which drains whatever is left back to the owner.
#[ink::contract]
pub mod ld_manager {
    use crate::migration::MigrationState;
    use ink::{contract_ref, prelude::vec::Vec};
    use psp22::PSP22;
    use traits::{LdManager, LdManagerError, Ownable, OwnableData, OwnableError};

    #[ink(event)]
    pub struct Migrated {
        #[ink(topic)]
        pub to: AccountId,
        pub amount: u128,
    }

    #[ink(event)]
    pub struct MigrationBlocked {}

    #[ink(event)]
    pub struct Finished {
        pub amount: u128,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        pub new_owner: AccountId,
    }

    #[ink(storage)]
    pub struct LdManagerContract {
        ownable: OwnableData,
        /// Exchange router this manager was deployed against.
        router: AccountId,
        /// The managed liquidity-backing token.
        token: AccountId,
        state: MigrationState,
    }

    impl LdManagerContract {
        #[ink(constructor)]
        pub fn new(router: AccountId, token: AccountId) -> Self {
            Self {
                ownable: OwnableData::new(Self::env().caller()),
                router,
                token,
                state: MigrationState::default(),
            }
        }
    }

    impl LdManager for LdManagerContract {
        #[ink(message)]
        fn migrate(&mut self, to: AccountId, amount: u128) -> Result<(), LdManagerError> {
            self.ownable.ensure_owner(self.env().caller())?;
            self.state.ensure_can_migrate()?;

            let mut token: contract_ref!(PSP22) = self.token.into();
            token.transfer(to, amount, Vec::new())?;

            self.env().emit_event(Migrated { to, amount });
            Ok(())
        }

        #[ink(message)]
        fn block_migrate(&mut self) -> Result<(), LdManagerError> {
            self.ownable.ensure_owner(self.env().caller())?;
            if self.state.block()? {
                self.env().emit_event(MigrationBlocked {});
            }
            Ok(())
        }

        #[ink(message)]
        fn finish(&mut self) -> Result<(), LdManagerError> {
            self.ownable.ensure_owner(self.env().caller())?;
            self.state.ensure_not_finished()?;

            let mut token: contract_ref!(PSP22) = self.token.into();
            let amount = token.balance_of(self.env().account_id());
            token.transfer(self.env().caller(), amount, Vec::new())?;
            self.state.finish()?;

            self.env().emit_event(Finished { amount });
            Ok(())
        }

        #[ink(message)]
        fn token(&self) -> AccountId {
            self.token
        }

        #[ink(message)]
        fn router(&self) -> AccountId {
            self.router
        }

        #[ink(message)]
        fn migrate_blocked(&self) -> bool {
            self.state.migrate_blocked()
        }

        #[ink(message)]
        fn finished(&self) -> bool {
            self.state.finished()
        }
    }

    impl Ownable for LdManagerContract {
        #[ink(message)]
        fn owner(&self) -> AccountId {
            self.ownable.owner()
        }

        #[ink(message)]
        fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), OwnableError> {
            self.ownable
                .transfer_ownership(self.env().caller(), new_owner)?;
            self.env().emit_event(OwnershipTransferred { new_owner });
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn accounts() -> ink::env::test::DefaultAccounts<ink::env::DefaultEnvironment> {
            ink::env::test::default_accounts::<ink::env::DefaultEnvironment>()
        }

        fn set_caller(caller: AccountId) {
            ink::env::test::set_caller::<ink::env::DefaultEnvironment>(caller);
        }

        fn new_manager() -> LdManagerContract {
            LdManagerContract::new(AccountId::from([0x01; 32]), AccountId::from([0x02; 32]))
        }

        #[ink::test]
        fn initialize_works() {
            let acc = accounts();
            set_caller(acc.alice);
            let manager = new_manager();

            assert_eq!(manager.owner(), acc.alice);
            assert_eq!(manager.router(), AccountId::from([0x01; 32]));
            assert_eq!(manager.token(), AccountId::from([0x02; 32]));
            assert!(!manager.migrate_blocked());
            assert!(!manager.finished());
        }

        #[ink::test]
        fn non_owner_cannot_touch_the_balance() {
            let acc = accounts();
            set_caller(acc.alice);
            let mut manager = new_manager();

            set_caller(acc.bob);
            assert_eq!(
                manager.migrate(acc.bob, 100),
                Err(LdManagerError::OwnableError(OwnableError::CallerNotOwner(
                    acc.bob
                )))
            );
            assert_eq!(
                manager.block_migrate(),
                Err(LdManagerError::OwnableError(OwnableError::CallerNotOwner(
                    acc.bob
                )))
            );
            assert_eq!(
                manager.finish(),
                Err(LdManagerError::OwnableError(OwnableError::CallerNotOwner(
                    acc.bob
                )))
            );
            assert!(!manager.migrate_blocked());
            assert!(!manager.finished());
        }

        #[ink::test]
        fn owner_can_set_the_latch() {
            let acc = accounts();
            set_caller(acc.alice);
            let mut manager = new_manager();

            manager.block_migrate().unwrap();
            assert!(manager.migrate_blocked());

            // idempotent
            manager.block_migrate().unwrap();
            assert!(manager.migrate_blocked());
        }

        #[ink::test]
        fn migrate_fails_once_the_latch_is_set() {
            let acc = accounts();
            set_caller(acc.alice);
            let mut manager = new_manager();

            manager.block_migrate().unwrap();
            assert_eq!(
                manager.migrate(acc.bob, 100),
                Err(LdManagerError::MigrationBlocked)
            );
        }

        #[ink::test]
        fn ownership_can_be_handed_over() {
            let acc = accounts();
            set_caller(acc.alice);
            let mut manager = new_manager();

            manager.transfer_ownership(acc.bob).unwrap();
            assert_eq!(manager.owner(), acc.bob);

            assert_eq!(
                manager.block_migrate(),
                Err(LdManagerError::OwnableError(OwnableError::CallerNotOwner(
                    acc.alice
                )))
            );

            set_caller(acc.bob);
            manager.block_migrate().unwrap();
            assert!(manager.migrate_blocked());
        }
    }
}
