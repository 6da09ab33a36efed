use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;


/// The unit of data flowing through the transform.
/// `data` is the primary feature vector,
/// `file` holds named scalar fields such as the training label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Primary feature representation.
    pub data: Vec<f64>,
    /// Named side-channel values.
    pub file: BTreeMap<String, f64>,
}


impl Template {
    /// Construct a template holding `data` and no field.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data, file: BTreeMap::new(), }
    }


    /// Set the field `name` to `value`.
    pub fn with_field<S: ToString>(mut self, name: S, value: f64) -> Self {
        self.set(name, value);
        self
    }


    /// Set the field `name` to `value`,
    /// replacing the old value if any.
    pub fn set<S: ToString>(&mut self, name: S, value: f64) {
        self.file.insert(name.to_string(), value);
    }


    /// Returns the value of the field `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.file.get(name).copied()
    }
}
