/// Generic named property bag attached to models or used stand-alone.

use glam::{Mat4, Vec2, Vec3, Vec4};
use rustc_hash::FxHashMap;

/// A typed property value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

/// Properties resource
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    name: String,
    values: FxHashMap<String, PropertyValue>,
}

impl Properties {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a value, returning the previous one
    pub fn set(&mut self, key: &str, value: PropertyValue) -> Option<PropertyValue> {
        self.values.insert(key.to_string(), value)
    }

    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.values.get(key).copied()
    }

    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Convenience accessor for float properties
    pub fn float(&self, key: &str) -> Option<f32> {
        match self.values.get(key) {
            Some(PropertyValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Convenience accessor for matrix properties
    pub fn mat4(&self, key: &str) -> Option<Mat4> {
        match self.values.get(key) {
            Some(PropertyValue::Mat4(value)) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;
