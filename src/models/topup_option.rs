use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::ids::GameId;
use crate::models::ValidationError;

/// A purchasable credit bundle for one game. Collection: "topupoption".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopupOption {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub game_id: GameId,
    pub title: String,
    /// Price in USD.
    pub amount: f64,
    /// In-game credits granted.
    pub credits: i64,
}

impl TopupOption {
    pub fn new(
        game_id: GameId,
        title: String,
        amount: f64,
        credits: i64,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::Empty("title"));
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount);
        }
        if credits < 1 {
            return Err(ValidationError::TooFewCredits);
        }
        Ok(Self {
            id: None,
            game_id,
            title,
            amount,
            credits,
        })
    }
}
