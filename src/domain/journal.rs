//! Named groupings of entries

/// A journal that entries may belong to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Journal {
    pub id: i64,
    pub name: String,
}

impl Journal {
    pub fn new(name: impl Into<String>) -> Self {
        Journal {
            id: 0,
            name: name.into(),
        }
    }
}
