//! User-defined close-group "schemas": named member groups matched against
//! the day's nameday names.
//!
//! The store notifies readers of edits through channels handed out by
//! [`SchemaStore::subscribe`], so a matching collaborator reacts to changes
//! instead of re-reading persisted data on a timer. Persistence itself stays
//! external; the types are serde-serializable so callers can store them
//! however they like.

use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::matcher::{names_match, MatchConfig};

/// A named group of member names ("family", "colleagues", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub id: String,
    pub name: String,
    pub members: Vec<String>,
}

/// A change to the schema collection, delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEvent {
    Upserted(Schema),
    Removed(String),
}

/// Owner of the schema collection. Mutations go through the store so every
/// subscriber hears about them.
#[derive(Debug, Default)]
pub struct SchemaStore {
    schemas: Vec<Schema>,
    subscribers: Vec<Sender<SchemaEvent>>,
}

impl SchemaStore {
    pub fn new() -> Self {
        SchemaStore::default()
    }

    /// Seed the store with already-persisted schemas, without notifying.
    pub fn with_schemas(schemas: Vec<Schema>) -> Self {
        SchemaStore {
            schemas,
            subscribers: Vec::new(),
        }
    }

    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// Register a reader. Every subsequent mutation is delivered as a
    /// [`SchemaEvent`] on the returned channel.
    pub fn subscribe(&mut self) -> Receiver<SchemaEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Insert a schema, or replace the existing one with the same id.
    pub fn upsert(&mut self, schema: Schema) {
        match self.schemas.iter_mut().find(|s| s.id == schema.id) {
            Some(existing) => *existing = schema.clone(),
            None => self.schemas.push(schema.clone()),
        }
        self.notify(SchemaEvent::Upserted(schema));
    }

    /// Remove a schema by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.schemas.len();
        self.schemas.retain(|s| s.id != id);
        let removed = self.schemas.len() != before;
        if removed {
            self.notify(SchemaEvent::Removed(id.to_string()));
        }
        removed
    }

    fn notify(&mut self, event: SchemaEvent) {
        // Drop subscribers whose receiving end has gone away.
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Members of a schema who celebrate on a day carrying `nameday_names`.
pub fn members_celebrating<'a>(
    schema: &'a Schema,
    nameday_names: &[String],
    config: &MatchConfig,
) -> Vec<&'a str> {
    schema
        .members
        .iter()
        .filter(|member| {
            nameday_names
                .iter()
                .any(|name| names_match(member, name, config))
        })
        .map(String::as_str)
        .collect()
}
