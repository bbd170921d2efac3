use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

/// A game available for top-up. Collection: "game".
///
/// `code` is the short lookup key used by the storefront (e.g. "mlbb").
/// The seed path skips codes that already exist; uniqueness is not
/// enforced by the store itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub code: String,
    pub image: Option<String>,
    pub publisher: Option<String>,
}

impl Game {
    pub fn new(
        name: String,
        code: String,
        image: Option<String>,
        publisher: Option<String>,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        if code.trim().is_empty() {
            return Err(ValidationError::Empty("code"));
        }
        Ok(Self {
            id: None,
            name,
            code,
            image,
            publisher,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_and_code() {
        assert_eq!(
            Game::new("".into(), "mlbb".into(), None, None).unwrap_err(),
            ValidationError::Empty("name")
        );
        assert_eq!(
            Game::new("Mobile Legends".into(), " ".into(), None, None).unwrap_err(),
            ValidationError::Empty("code")
        );
    }

    #[test]
    fn new_games_have_no_id_until_inserted() {
        let game = Game::new("Free Fire".into(), "ff".into(), None, Some("Garena".into())).unwrap();
        assert!(game.id.is_none());
    }
}
