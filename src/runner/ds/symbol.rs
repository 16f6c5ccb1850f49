use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A symbol. Identity comes from a fresh id, so two symbols with the same
/// description are still distinct.
#[derive(Clone, Debug)]
pub struct SymbolData {
    id: Uuid,
    description: Option<String>,
}

impl SymbolData {
    pub fn new(description: impl Into<String>) -> Self {
        SymbolData {
            id: Uuid::new_v4(),
            description: Some(description.into()),
        }
    }

    pub fn new_empty() -> Self {
        SymbolData {
            id: Uuid::new_v4(),
            description: None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
impl PartialEq for SymbolData {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for SymbolData {}
impl Hash for SymbolData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
impl Display for SymbolData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(d) => write!(f, "Symbol({})", d),
            None => write!(f, "Symbol()"),
        }
    }
}

/* Well known symbols */
lazy_static! {
    pub static ref SYMBOL_TO_PRIMITIVE: SymbolData = SymbolData::new("Symbol.toPrimitive");
    pub static ref SYMBOL_TO_STRING_TAG: SymbolData = SymbolData::new("Symbol.toStringTag");
}
