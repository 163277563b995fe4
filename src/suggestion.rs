use serde::Deserialize;

/// A candidate record returned by the directory endpoint
///
/// Extra fields in the payload (email, address, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub id: u64,
    pub name: String,
}

impl Suggestion {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
