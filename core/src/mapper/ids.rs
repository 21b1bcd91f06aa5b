// ## 📂 File: `src/mapper/ids.rs`

//! mapper/ids.rs
//! Object id generation for exported graph nodes.
//!
//! Ids are write-only: the consumer wants a unique token per node, and
//! nothing reads them back. They must never be derived from content, so
//! two exports of the same document share no id.

use uuid::Uuid;

/// Source of per-node object ids.
pub trait ObjectIdSource {
    fn next_id(&mut self) -> String;
}

/// Random UUIDv4 ids in 32-char lower-case hex (no hyphens).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl ObjectIdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

impl<F> ObjectIdSource for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}
