use serde::de::DeserializeOwned;
use tracing::log;
use std::fmt::Display;
use std::time::Instant;

use crate::CONFIG;

/// One file per key. The admin side owns the write path, this server
/// only ever reads.
pub struct Db<K: Display, V: DeserializeOwned> {
    pub name: String,
    pub key_type: std::marker::PhantomData<K>,
    pub value_type: std::marker::PhantomData<V>,
}

impl<K: Display, V: DeserializeOwned> Db<K, V> {
    pub fn new(name: &str) -> Db<K, V> {
        Db {
            name: name.to_string(),
            key_type: std::marker::PhantomData,
            value_type: std::marker::PhantomData,
        }
    }

    pub fn read(&self, key: &K) -> Option<V> {
        let path = self.get_path(&key.to_string());
        Db::<K, V>::read_file(&path)
    }

    pub fn read_raw(&self, key: &K) -> String {
        let path = self.get_path(&key.to_string());
        let data = std::fs::read_to_string(path);
        log::info!("[DB] Read raw from file {}", &key.to_string());
        data.unwrap_or_default()
    }

    fn read_file(path: &str) -> Option<V> {
        let before = Instant::now();
        let data = std::fs::read_to_string(path).ok()?;
        let res = match serde_json::from_str(&data) {
            Ok(e) => Some(e),
            Err(e) => {
                // Malformed data is treated the same as absent data
                log::error!("[DB] Read failed {} {}", path, e);
                None
            }
        };
        log::debug!("[DB] Read from file {path} {:.2?}", before.elapsed());
        res
    }

    fn get_path(&self, key: &str) -> String {
        format!("{}/{}/{}", CONFIG.db_path, self.name, key)
    }
}
