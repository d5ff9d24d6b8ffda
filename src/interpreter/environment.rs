/*
 * ==========================================================================
 * SimpCode - line-oriented scripting interpreter
 * ==========================================================================
 *
 * License:
 * This file is part of the SimpCode interpreter project.
 *
 * SimpCode is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use crate::error::{Result, SimpError};
use crate::value::Value;

/// The variable store for one program run.
///
/// Keys are created on first assignment and never removed. There is a
/// single flat scope: SimpCode has no functions or blocks that would
/// need a parent chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    values: HashMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or overwrites `name`.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).copied()
    }

    /// Like [`get`](Self::get), but a missing name is an error.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.get(name)
            .ok_or_else(|| SimpError::VariableNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Name-ordered view, used for snapshots.
    pub fn sorted(&self) -> BTreeMap<&str, Value> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v)).collect()
    }

    /// JSON object of every variable, keys sorted.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for VariableStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.sorted().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_then_lookup() {
        let mut store = VariableStore::new();
        store.assign("x", Value::Integer(4));
        store.assign("x", Value::Real(1.5));
        assert_eq!(store.lookup("x"), Ok(Value::Real(1.5)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_variable_is_reported_by_name() {
        let store = VariableStore::new();
        assert_eq!(
            store.lookup("ghost"),
            Err(SimpError::VariableNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn json_snapshot_is_sorted() {
        let mut store = VariableStore::new();
        store.assign("zeta", Value::Integer(1));
        store.assign("alpha", Value::Real(0.5));
        assert_eq!(store.to_json(), r#"{"alpha":0.5,"zeta":1}"#);
    }
}
