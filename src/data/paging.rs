use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn into_first(self) -> Option<T> {
        self.items.into_iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
