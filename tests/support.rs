//! Shared test doubles: an in-memory repository, a logging DB transaction manager, and
//! trivial schema collaborators — the external interfaces the pipeline wires against but
//! does not implement itself.

use oprail::context::Context;
use oprail::traits::{DbTransactionManager, ParamsSchema, Repository, TransactionScope};
use oprail::types::{Error, Key, OrderedMap, Path, Value};
use std::sync::{Arc, Mutex};

/// A `Repository` backed by a fixed list of entities, each an `OrderedMap` with an `id`
/// field. `get_one` matches every requested attribute; `get_many` looks each id up
/// individually and returns only the matches it finds, in request order — mirroring
/// `lookup::find_many`'s documented trailing-miss contract.
pub struct MapRepository {
    entities: Vec<OrderedMap>,
}

impl MapRepository {
    pub fn new(entities: Vec<OrderedMap>) -> Self {
        Self { entities }
    }
}

impl Repository for MapRepository {
    fn get_one(&self, attrs: &OrderedMap) -> Option<Value> {
        self.entities
            .iter()
            .find(|e| attrs.iter().all(|(k, v)| e.get(k) == Some(v)))
            .cloned()
            .map(Value::Map)
    }

    fn get_many(&self, attrs: &OrderedMap) -> Vec<Value> {
        let Some((_, Value::List(ids))) = attrs.iter().next() else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| {
                self.entities.iter().find(|e| e.get(&Key::new("id")) == Some(id)).cloned().map(Value::Map)
            })
            .collect()
    }
}

/// A `DbTransactionManager` that records `begin` / `commit` / `rollback` in arrival order so
/// tests can assert on transaction boundary behavior (P10, S6).
#[derive(Clone, Default)]
pub struct LoggingTransactionManager {
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl LoggingTransactionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.log.lock().unwrap().clone()
    }
}

impl DbTransactionManager for LoggingTransactionManager {
    fn begin(&self) -> Box<dyn TransactionScope> {
        self.log.lock().unwrap().push("begin");
        Box::new(LoggingScope { log: Arc::clone(&self.log), after_commit: Vec::new() })
    }
}

struct LoggingScope {
    log: Arc<Mutex<Vec<&'static str>>>,
    after_commit: Vec<Box<dyn FnOnce() + Send>>,
}

impl TransactionScope for LoggingScope {
    fn after_commit(&mut self, callback: Box<dyn FnOnce() + Send>) {
        self.after_commit.push(callback);
    }

    fn commit(self: Box<Self>) {
        self.log.lock().unwrap().push("commit");
        for cb in self.after_commit {
            cb();
        }
    }

    fn rollback(self: Box<Self>) {
        self.log.lock().unwrap().push("rollback");
    }
}

/// A `ParamsSchema` that requires a named field to hold a non-empty string, matching the
/// `blank` error code a real schema engine would use for the same failure.
pub struct RequireNonEmpty(pub Key);

impl ParamsSchema for RequireNonEmpty {
    fn validate(&self, input: &OrderedMap, _context: &Context) -> (OrderedMap, Context, Vec<Error>) {
        match input.get(&self.0).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => (input.clone(), Context::new(), Vec::new()),
            _ => (
                OrderedMap::new(),
                Context::new(),
                vec![Error::code("blank").with_path(Path::single(self.0.clone()))],
            ),
        }
    }
}
