use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::managererror::{ManagerError, parse_json_value};

/// Mutable registry used while a configuration is being loaded.
pub struct ManagerBuilder<V: ?Sized> {
    map: HashMap<String, Arc<V>>,
}

impl<V: ?Sized> ManagerBuilder<V> {
    pub fn new() -> ManagerBuilder<V> {
        ManagerBuilder { map: HashMap::new() }
    }

    /// Registers `value` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: String, value: Arc<V>) {
        if self.map.insert(name.clone(), value).is_some() {
            info!(name = %name, "replaced configured object");
        } else {
            info!(name = %name, "registered configured object");
        }
    }

    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn build(self) -> Manager<V> {
        Manager { map: self.map }
    }
}

impl<V: ?Sized> Default for ManagerBuilder<V> {
    fn default() -> Self {
        ManagerBuilder::new()
    }
}

/// Read-only registry of named objects.
pub struct Manager<V: ?Sized> {
    map: HashMap<String, Arc<V>>,
}

impl<V: ?Sized> Manager<V> {
    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Builds objects of type `V` from JSON, with access to already-built
/// dependencies of type `S`.
pub trait IManager<V: ?Sized, S> {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<V>,
        json_value: serde_json::Value,
        supports: &S,
    ) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(
        &self,
        builder: &mut ManagerBuilder<V>,
        json_vec: &[serde_json::Value],
        supports: &S,
    ) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(builder, j.clone(), supports)?;
        }
        Ok(())
    }

    /// Loads a file holding either one JSON object or an array of them.
    fn from_reader<P: AsRef<Path>>(
        &self,
        builder: &mut ManagerBuilder<V>,
        file_path: P,
        supports: &S,
    ) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(builder, &json_array, supports)
        } else {
            self.insert_obj_from_json(builder, json_value, supports)
        }
    }
}
