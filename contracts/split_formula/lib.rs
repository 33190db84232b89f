#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod curve;

/// Decides what share of an inbound transaction should replenish the
/// exchange pool and what share should be routed to the sale path,
/// based on how much liquidity the monitored pair already holds.
///
/// The pair's liquidity is valued live in reference-currency terms on
/// every call: the monitored asset's reserve at the configured reference
/// price, the counterpart reserve through the router's own quote.
#[ink::contract]
pub mod split_formula {
    use crate::curve::SplitCurve;
    use ink::{contract_ref, prelude::vec};
    use split_helpers::{ensure, math::MathError};
    use traits::{
        Ownable, OwnableData, OwnableError, Pair, Router, RouterError, SplitFormula,
        SplitFormulaError,
    };

    #[ink(event)]
    pub struct MinLdAmountChanged {
        pub min_ld_amount: u128,
    }

    #[ink(event)]
    pub struct MaxLdAmountChanged {
        pub max_ld_amount: u128,
    }

    #[ink(event)]
    pub struct ReferencePriceChanged {
        pub reference_price: u128,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        pub new_owner: AccountId,
    }

    #[ink(storage)]
    pub struct SplitFormulaContract {
        ownable: OwnableData,
        /// Router used to quote the counterpart reserve in reference terms.
        router: AccountId,
        /// The monitored trading pair.
        pair: AccountId,
        /// The monitored asset; must be one side of `pair`.
        token: AccountId,
        /// The token liquidity is valued in.
        reference_token: AccountId,
        curve: SplitCurve,
    }

    impl SplitFormulaContract {
        #[ink(constructor)]
        pub fn new(
            reference_price: u128,
            min_ld_amount: u128,
            max_ld_amount: u128,
            router: AccountId,
            pair: AccountId,
            token: AccountId,
            reference_token: AccountId,
        ) -> Self {
            Self {
                ownable: OwnableData::new(Self::env().caller()),
                router,
                pair,
                token,
                reference_token,
                curve: SplitCurve::new(reference_price, min_ld_amount, max_ld_amount),
            }
        }

        #[inline]
        fn pair_ref(&self) -> contract_ref!(Pair) {
            self.pair.into()
        }

        #[inline]
        fn router_ref(&self) -> contract_ref!(Router) {
            self.router.into()
        }

        /// Values the monitored pair's reserves in reference-currency units.
        ///
        /// Queried live on every call; never cached.
        fn liquidity_in_reference(&self) -> Result<u128, SplitFormulaError> {
            let pair = self.pair_ref();
            let (reserve_0, reserve_1, _) = pair.get_reserves();

            let (token_reserve, counter_reserve, counter_token) =
                if pair.get_token_0() == self.token {
                    (reserve_0, reserve_1, pair.get_token_1())
                } else if pair.get_token_1() == self.token {
                    (reserve_1, reserve_0, pair.get_token_0())
                } else {
                    return Err(SplitFormulaError::InvalidPool);
                };

            let token_side = self.curve.token_value_in_reference(token_reserve)?;

            let counter_side = if counter_reserve == 0 || counter_token == self.reference_token {
                counter_reserve
            } else {
                let amounts = self
                    .router_ref()
                    .get_amounts_out(counter_reserve, vec![counter_token, self.reference_token])?;
                amounts
                    .last()
                    .copied()
                    .ok_or(SplitFormulaError::RouterError(RouterError::InvalidPath))?
            };

            Ok(token_side
                .checked_add(counter_side)
                .ok_or(MathError::AddOverflow(3))?)
        }
    }

    impl SplitFormula for SplitFormulaContract {
        #[ink(message)]
        fn calculate_split(&self, amount_in: u128) -> Result<(u8, u8), SplitFormulaError> {
            ensure!(amount_in > 0, SplitFormulaError::InvalidAmount);
            let liquidity = self.liquidity_in_reference()?;
            Ok(self.curve.split_at(liquidity)?)
        }

        #[ink(message)]
        fn get_ld_amount_in_reference(&self) -> Result<u128, SplitFormulaError> {
            self.liquidity_in_reference()
        }

        #[ink(message)]
        fn update_min_ld_amount(&mut self, new_floor: u128) -> Result<(), SplitFormulaError> {
            self.ownable.ensure_owner(self.env().caller())?;
            self.curve.set_min_ld_amount(new_floor);
            self.env().emit_event(MinLdAmountChanged {
                min_ld_amount: new_floor,
            });
            Ok(())
        }

        #[ink(message)]
        fn update_max_ld_amount(&mut self, new_ceiling: u128) -> Result<(), SplitFormulaError> {
            self.ownable.ensure_owner(self.env().caller())?;
            self.curve.set_max_ld_amount(new_ceiling);
            self.env().emit_event(MaxLdAmountChanged {
                max_ld_amount: new_ceiling,
            });
            Ok(())
        }

        #[ink(message)]
        fn update_reference_price(&mut self, new_price: u128) -> Result<(), SplitFormulaError> {
            self.ownable.ensure_owner(self.env().caller())?;
            self.curve.set_reference_price(new_price);
            self.env().emit_event(ReferencePriceChanged {
                reference_price: new_price,
            });
            Ok(())
        }

        #[ink(message)]
        fn min_ld_amount(&self) -> u128 {
            self.curve.min_ld_amount()
        }

        #[ink(message)]
        fn max_ld_amount(&self) -> u128 {
            self.curve.max_ld_amount()
        }

        #[ink(message)]
        fn reference_price(&self) -> u128 {
            self.curve.reference_price()
        }

        #[ink(message)]
        fn router(&self) -> AccountId {
            self.router
        }

        #[ink(message)]
        fn pair(&self) -> AccountId {
            self.pair
        }

        #[ink(message)]
        fn token(&self) -> AccountId {
            self.token
        }

        #[ink(message)]
        fn reference_token(&self) -> AccountId {
            self.reference_token
        }
    }

    impl Ownable for SplitFormulaContract {
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

}
