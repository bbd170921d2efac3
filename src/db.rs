use anyhow::{Context, Result};
use futures::TryStreamExt;
use mongodb::bson::{oid::ObjectId, Document};
use mongodb::{Client, Collection, Database, options::ClientOptions};
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::error::AppError;

const DEFAULT_DB_NAME: &str = "topup_db";

pub async fn connect_to_mongo() -> Result<Database> {
    let uri = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

    let client_options = ClientOptions::parse(&uri).await?;
    let client = Client::with_options(client_options)?;

    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DB_NAME));

    // Test the connection
    db.run_command(mongodb::bson::doc! {"ping": 1}, None)
        .await?;

    Ok(db)
}

/// Collection-scoped create/read operations over the underlying database.
pub struct Store {
    db: Database,
}

impl Store {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }

    /// Inserts `record` into `collection` and returns the generated id.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<ObjectId> {
        let result = self
            .db
            .collection::<T>(collection)
            .insert_one(record, None)
            .await?;
        result
            .inserted_id
            .as_object_id()
            .context("inserted id was not an ObjectId")
    }

    /// Returns every document in `collection` matching `filter`, fully
    /// materialized. Result sets here are catalog-sized.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: impl Into<Option<Document>>,
    ) -> Result<Vec<Document>> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Raw typed handle for point lookups.
    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>> {
        Ok(self.db.list_collection_names(None).await?)
    }
}

/// The store dependency handed to every handler. Connection failures at
/// startup leave it `Unavailable` instead of killing the process; data
/// endpoints branch on it via `require`.
#[derive(Clone)]
pub enum StoreHandle {
    Connected(Arc<Store>),
    Unavailable,
}

impl StoreHandle {
    pub fn require(&self) -> Result<&Store, AppError> {
        match self {
            StoreHandle::Connected(store) => Ok(store),
            StoreHandle::Unavailable => {
                Err(AppError::service_unavailable("Database not available"))
            }
        }
    }
}
