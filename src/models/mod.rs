pub mod game;
pub mod ids;
pub mod order;
pub mod topup_option;

pub use game::Game;
pub use order::Order;
pub use topup_option::TopupOption;

use thiserror::Error;

/// A request field that fails its schema constraint, rejected before any
/// store access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("amount must be non-negative")]
    NegativeAmount,
    #[error("credits must be at least 1")]
    TooFewCredits,
}
