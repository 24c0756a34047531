use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub name: String,
    pub source_address: String,
}

impl Subscription {
    pub fn new(name: impl Into<String>, source_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_address: source_address.into(),
        }
    }
}
