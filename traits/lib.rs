#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod ld_manager;
mod ownable;
mod pair;
mod router;
mod split_formula;

pub use split_helpers::math::MathError;

pub use ld_manager::{LdManager, LdManagerError};
pub use ownable::{Ownable, OwnableData, OwnableError};
pub use pair::Pair;
pub use router::{Router, RouterError};
pub use split_formula::{SplitFormula, SplitFormulaError};
