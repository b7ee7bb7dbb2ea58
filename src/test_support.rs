//! Shared fakes for handler tests: an in-memory key-value store with
//! glob matching, plus recording and always-failing object stores.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;

use crate::config::Config;
use crate::kv::KeyValueStore;
use crate::s3::ObjectStore;
use crate::state::AppState;

/// Match a key against a glob-style pattern. Only `*` is interpreted;
/// the service never uses `?` or character classes.
pub fn glob_matches(pattern: &str, key: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    if parts.len() == 1 {
        return pattern == key;
    }

    let mut rest = match key.strip_prefix(parts[0]) {
        Some(rest) => rest,
        None => return false,
    };

    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }

    rest.ends_with(parts[parts.len() - 1])
}

/// In-memory key-value store backed by a plain map.
pub struct InMemoryKvStore {
    entries: HashMap<String, String>,
}

impl InMemoryKvStore {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .keys()
            .filter(|key| glob_matches(pattern, key))
            .cloned()
            .collect())
    }

    async fn count(&self, _pattern: &str) -> Result<i64> {
        // Same contract as the Redis client: pattern counts are not a
        // supported operation.
        bail!("COUNT command failed: unknown command")
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Key-value store where every operation fails with the given message.
pub struct FailingKvStore {
    pub message: String,
}

impl FailingKvStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl KeyValueStore for FailingKvStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!(self.message.clone()))
    }

    async fn keys(&self, _pattern: &str) -> Result<Vec<String>> {
        Err(anyhow!(self.message.clone()))
    }

    async fn count(&self, _pattern: &str) -> Result<i64> {
        Err(anyhow!(self.message.clone()))
    }

    async fn ping(&self) -> Result<()> {
        Err(anyhow!(self.message.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PutRecord {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
}

/// Object store that records every successful put.
#[derive(Default)]
pub struct RecordingObjectStore {
    puts: Mutex<Vec<PutRecord>>,
}

impl RecordingObjectStore {
    pub fn records(&self) -> Vec<PutRecord> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.puts.lock().unwrap().push(PutRecord {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
        });
        Ok(())
    }
}

/// Object store where every put fails with the given message.
pub struct FailingObjectStore {
    pub message: String,
}

impl FailingObjectStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for FailingObjectStore {
    async fn put_object(&self, _bucket: &str, _key: &str, _body: Vec<u8>) -> Result<()> {
        Err(anyhow!(self.message.clone()))
    }
}

pub fn test_config(bucket: Option<&str>) -> Config {
    Config {
        redis_host: "localhost".to_string(),
        redis_port: 6379,
        bucket_name: bucket.map(str::to_string),
        service_port: 8005,
        service_host: "0.0.0.0".to_string(),
    }
}

pub fn test_state(
    kv: Arc<dyn KeyValueStore>,
    objects: Arc<dyn ObjectStore>,
    bucket: Option<&str>,
) -> AppState {
    AppState {
        kv,
        objects,
        config: Arc::new(test_config(bucket)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_star_on_both_sides() {
        assert!(glob_matches("*users*", "app:users:1"));
        assert!(glob_matches("*users*", "users"));
        assert!(glob_matches("*users*", "users:42"));
        assert!(!glob_matches("*users*", "app:locations:1"));
    }

    #[test]
    fn test_glob_anchored_prefix_and_suffix() {
        assert!(glob_matches("users*", "users:1"));
        assert!(!glob_matches("users*", "app:users:1"));
        assert!(glob_matches("*:1", "users:1"));
        assert!(!glob_matches("*:1", "users:2"));
    }

    #[test]
    fn test_glob_without_wildcard_is_exact() {
        assert!(glob_matches("users", "users"));
        assert!(!glob_matches("users", "users:1"));
    }

    #[tokio::test]
    async fn test_in_memory_store_get_and_keys() {
        let store = InMemoryKvStore::new(&[("users:1", "alice"), ("location:1", "oslo")]);

        assert_eq!(store.get("users:1").await.unwrap(), Some("alice".to_string()));
        assert_eq!(store.get("users:2").await.unwrap(), None);

        let keys = store.keys("*users*").await.unwrap();
        assert_eq!(keys, vec!["users:1".to_string()]);
    }

    #[tokio::test]
    async fn test_in_memory_store_count_is_unsupported() {
        let store = InMemoryKvStore::empty();
        assert!(store.count("*location*").await.is_err());
    }
}
