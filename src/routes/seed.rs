use axum::{
    Router,
    body::Bytes,
    extract::{Json, State},
    routing::post,
};
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::ids::GameId;
use crate::models::{Game, TopupOption};
use crate::serialize::to_serializable;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SeedGame {
    pub name: String,
    pub code: String,
    pub image: Option<String>,
    pub publisher: Option<String>,
}

fn default_games() -> Vec<SeedGame> {
    vec![
        SeedGame {
            name: "Mobile Legends".into(),
            code: "mlbb".into(),
            image: Some("https://i.imgur.com/Kk2r6sG.png".into()),
            publisher: Some("Moonton".into()),
        },
        SeedGame {
            name: "PUBG Mobile".into(),
            code: "pubgm".into(),
            image: Some("https://i.imgur.com/7nYVJr9.png".into()),
            publisher: Some("Tencent".into()),
        },
        SeedGame {
            name: "Free Fire".into(),
            code: "ff".into(),
            image: Some("https://i.imgur.com/4J2hX3E.png".into()),
            publisher: Some("Garena".into()),
        },
    ]
}

fn option_presets() -> [(&'static str, f64, i64); 4] {
    [
        ("86 Diamonds", 1.59, 86),
        ("172 Diamonds", 3.09, 172),
        ("257 Diamonds", 4.59, 257),
        ("500 Diamonds", 8.99, 500),
    ]
}

/// An absent, `null`, or empty-list body falls back to the defaults; a
/// non-empty body that fails to parse is a validation error, not a
/// silent fallback.
fn parse_seed_body(body: &[u8]) -> Result<Vec<SeedGame>, AppError> {
    if body.is_empty() {
        return Ok(default_games());
    }
    let games: Option<Vec<SeedGame>> = serde_json::from_slice(body)
        .map_err(|e| AppError::unprocessable(format!("Invalid seed payload: {}", e)))?;
    Ok(games.filter(|games| !games.is_empty()).unwrap_or_else(default_games))
}

/// Idempotent sample-data seeding: games whose `code` already exists are
/// returned as-is, and the four option presets are only inserted for
/// games that have no options yet.
async fn seed_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let seeds = parse_seed_body(&body)?;

    let store = state.store.require()?;
    let games: Collection<Document> = store.collection("game");

    let mut created_games = Vec::new();
    for seed in seeds {
        if let Some(existing) = games.find_one(doc! { "code": &seed.code }, None).await? {
            created_games.push(to_serializable(&existing));
            continue;
        }
        let game = Game::new(seed.name, seed.code, seed.image, seed.publisher)?;
        let game_id = store.create_document("game", &game).await?;
        let created = games
            .find_one(doc! { "_id": game_id }, None)
            .await?
            .ok_or_else(|| AppError::internal("Game missing after insert"))?;
        created_games.push(to_serializable(&created));
    }

    let options: Collection<TopupOption> = store.collection("topupoption");
    for game in &created_games {
        let Some(game_id) = game.get("id").and_then(Value::as_str) else {
            continue;
        };
        let existing = options
            .count_documents(doc! { "game_id": game_id }, None)
            .await?;
        if existing > 0 {
            continue;
        }
        let game_id = GameId::parse(game_id)?;
        for (title, amount, credits) in option_presets() {
            let option = TopupOption::new(game_id, title.to_string(), amount, credits)?;
            store.create_document("topupoption", &option).await?;
        }
    }

    Ok(Json(json!({ "games": created_games })))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/seed", post(seed_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_default_games_with_documented_codes() {
        let games = default_games();
        let codes: Vec<&str> = games.iter().map(|g| g.code.as_str()).collect();
        assert_eq!(codes, ["mlbb", "pubgm", "ff"]);
        assert!(games.iter().all(|g| g.image.is_some() && g.publisher.is_some()));
    }

    #[test]
    fn four_presets_with_documented_prices() {
        let presets = option_presets();
        assert_eq!(presets.len(), 4);
        assert_eq!(presets[0], ("86 Diamonds", 1.59, 86));
        assert_eq!(presets[3], ("500 Diamonds", 8.99, 500));
    }

    #[test]
    fn absent_null_or_empty_bodies_fall_back_to_defaults() {
        for body in [&b""[..], b"null", b"[]"] {
            let seeds = parse_seed_body(body).unwrap();
            assert_eq!(seeds.len(), 3, "{:?}", body);
            assert_eq!(seeds[0].code, "mlbb");
        }
    }

    #[test]
    fn malformed_bodies_are_rejected_not_defaulted() {
        for body in [&b"[{\"name\": 5}]"[..], b"not json", b"{\"name\": \"x\"}"] {
            let err = parse_seed_body(body).unwrap_err();
            assert_eq!(
                err.status,
                axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                "{:?}",
                body
            );
        }
    }

    #[test]
    fn supplied_games_are_used_verbatim() {
        let seeds =
            parse_seed_body(br#"[{"name": "Genshin Impact", "code": "genshin"}]"#).unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].code, "genshin");
        assert!(seeds[0].image.is_none());
    }

    #[test]
    fn presets_satisfy_option_constraints() {
        let game_id = GameId::from(mongodb::bson::oid::ObjectId::new());
        for (title, amount, credits) in option_presets() {
            assert!(TopupOption::new(game_id, title.to_string(), amount, credits).is_ok());
        }
    }
}
