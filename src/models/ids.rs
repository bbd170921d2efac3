use mongodb::bson::oid::ObjectId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// An identifier string that is not syntactically a valid ObjectId.
/// Whether the id resolves to a record is a separate, store-side question.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid {kind} id")]
pub struct InvalidId {
    kind: &'static str,
}

macro_rules! id_type {
    ($name:ident, $kind:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(ObjectId);

        impl $name {
            pub fn parse(s: &str) -> Result<Self, InvalidId> {
                ObjectId::parse_str(s)
                    .map(Self)
                    .map_err(|_| InvalidId { kind: $kind })
            }

            pub fn object_id(&self) -> ObjectId {
                self.0
            }

            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }
        }

        impl From<ObjectId> for $name {
            fn from(oid: ObjectId) -> Self {
                Self(oid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.to_hex())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(D::Error::custom)
            }
        }
    };
}

id_type!(GameId, "game");
id_type!(OptionId, "option");
id_type!(OrderId, "order");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_object_ids() {
        let oid = ObjectId::new();
        let id = OrderId::parse(&oid.to_hex()).unwrap();
        assert_eq!(id.object_id(), oid);
        assert_eq!(id.to_hex(), oid.to_hex());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(OrderId::parse("doesnotexist").is_err());
        assert!(OptionId::parse("").is_err());
        assert!(GameId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn error_names_the_entity_kind() {
        let err = OptionId::parse("nope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid option id");
    }

    #[test]
    fn serializes_as_hex_string() {
        let oid = ObjectId::new();
        let json = serde_json::to_value(GameId::from(oid)).unwrap();
        assert_eq!(json, serde_json::Value::String(oid.to_hex()));
    }
}
