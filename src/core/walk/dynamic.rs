//! `Walk` for self-describing document values.
//!
//! These are the dynamic wrappers of a config tree: the concrete node is
//! only known at runtime, so each value is matched, walked, and left in
//! place under the same variant.

use super::{Walk, Walker};
use crate::error::Result;

impl Walk for serde_json::Value {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        use serde_json::Value;

        match self {
            Value::String(s) => walker.string(s),
            Value::Array(items) => items.walk(walker),
            Value::Object(map) => {
                for (key, value) in map.iter_mut() {
                    walker.entry(key, value)?;
                }
                Ok(())
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => Ok(()),
        }
    }
}

impl Walk for toml::Value {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        use toml::Value;

        match self {
            Value::String(s) => walker.string(s),
            Value::Array(items) => items.walk(walker),
            Value::Table(table) => table.walk(walker),
            Value::Integer(_) | Value::Float(_) | Value::Boolean(_) | Value::Datetime(_) => Ok(()),
        }
    }
}

impl Walk for toml::Table {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        for (key, value) in self.iter_mut() {
            walker.entry(key, value)?;
        }
        Ok(())
    }
}
