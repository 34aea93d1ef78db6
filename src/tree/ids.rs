//! Fresh node id generation

use crate::types::NodeId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh node ids
///
/// Callers still check new ids against the live tree; a source only has to make
/// collisions unlikely.
pub trait IdSource: Send {
    fn next_id(&mut self) -> NodeId;
}

/// Hex ids derived from a blake3 hash of the clock, process id and a counter
#[derive(Debug)]
pub struct HashedIdSource {
    seed: [u8; 32],
    counter: u64,
}

impl HashedIdSource {
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let mut hasher = blake3::Hasher::new();
        hasher.update(&nanos.to_le_bytes());
        hasher.update(&std::process::id().to_le_bytes());
        Self {
            seed: *hasher.finalize().as_bytes(),
            counter: 0,
        }
    }
}

impl Default for HashedIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for HashedIdSource {
    fn next_id(&mut self) -> NodeId {
        self.counter += 1;
        let mut hasher = blake3::Hasher::new_keyed(&self.seed);
        hasher.update(&self.counter.to_le_bytes());
        hex::encode(&hasher.finalize().as_bytes()[..8])
    }
}

/// Predictable ids (`<prefix>1`, `<prefix>2`, ...) for tests and scripted sessions
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    next: u64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> NodeId {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
