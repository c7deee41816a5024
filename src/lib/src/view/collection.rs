use serde::{Deserialize, Serialize};

/// One page of a management API collection.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Collection<T> {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
    pub items: Vec<T>,
}

impl<T> Collection<T> {
    /// True when the items seen so far, including this page, cover `total`.
    pub fn is_last_page(&self) -> bool {
        self.items.is_empty() || self.skip + self.items.len() >= self.total
    }
}
