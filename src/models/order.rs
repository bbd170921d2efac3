use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::models::ids::OptionId;
use crate::models::{TopupOption, ValidationError};

pub const STATUS_PENDING: &str = "pending";

/// A purchase order. Collection: "order".
///
/// Orders are immutable once created: `status` starts at "pending"
/// (informally one of pending|paid|delivered|failed|cancelled) and is
/// never transitioned here, and `amount`/`credits` are a point-in-time
/// copy from the referenced option, not kept in sync afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Stored as supplied by the client; not validated against the game
    /// collection.
    pub game_id: String,
    pub option_id: OptionId,
    pub player_id: String,
    pub region: Option<String>,
    pub payment_method: String,
    pub status: String,
    pub amount: f64,
    pub credits: i64,
    pub created_at: DateTime,
}

impl Order {
    /// Builds a pending order from the request fields and the resolved
    /// top-up option whose price and credits it snapshots.
    pub fn new(
        game_id: String,
        option_id: OptionId,
        player_id: String,
        region: Option<String>,
        payment_method: String,
        option: &TopupOption,
    ) -> Result<Self, ValidationError> {
        if player_id.trim().is_empty() {
            return Err(ValidationError::Empty("player_id"));
        }
        if payment_method.trim().is_empty() {
            return Err(ValidationError::Empty("payment_method"));
        }
        Ok(Self {
            id: None,
            game_id,
            option_id,
            player_id,
            region,
            payment_method,
            status: STATUS_PENDING.to_string(),
            amount: option.amount,
            credits: option.credits,
            created_at: DateTime::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::GameId;

    fn option() -> TopupOption {
        TopupOption::new(
            GameId::from(ObjectId::new()),
            "86 Diamonds".into(),
            1.59,
            86,
        )
        .unwrap()
    }

    #[test]
    fn copies_amount_and_credits_from_the_option() {
        let option = option();
        let order = Order::new(
            "whatever".into(),
            OptionId::from(ObjectId::new()),
            "player-1".into(),
            Some("EU".into()),
            "card".into(),
            &option,
        )
        .unwrap();
        assert_eq!(order.amount, option.amount);
        assert_eq!(order.credits, option.credits);
        assert_eq!(order.status, STATUS_PENDING);
    }

    #[test]
    fn requires_player_and_payment_method() {
        let option = option();
        let oid = OptionId::from(ObjectId::new());
        assert_eq!(
            Order::new("g".into(), oid, "".into(), None, "card".into(), &option).unwrap_err(),
            ValidationError::Empty("player_id")
        );
        assert_eq!(
            Order::new("g".into(), oid, "p".into(), None, " ".into(), &option).unwrap_err(),
            ValidationError::Empty("payment_method")
        );
    }
}
