use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::BitOr;

use crate::runner::ds::native_accessor::NativeAccessor;
use crate::runner::ds::operations::test_and_comparison::same_value;
use crate::runner::ds::symbol::SymbolData;
use crate::runner::ds::value::JsValue;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Str(String),
    Sym(SymbolData),
}
impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(s) => write!(f, "{}", s),
            PropertyKey::Sym(s) => write!(f, "{}", s),
        }
    }
}
impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::Str(s.to_string())
    }
}
impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::Str(s)
    }
}
impl From<SymbolData> for PropertyKey {
    fn from(s: SymbolData) -> Self {
        PropertyKey::Sym(s)
    }
}

/// Writable / Enumerable / Configurable flags granted at installation. Anything
/// not granted is false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyAttributes(u8);

impl PropertyAttributes {
    pub const NONE: PropertyAttributes = PropertyAttributes(0);
    pub const WRITABLE: PropertyAttributes = PropertyAttributes(1 << 0);
    pub const ENUMERABLE: PropertyAttributes = PropertyAttributes(1 << 1);
    pub const CONFIGURABLE: PropertyAttributes = PropertyAttributes(1 << 2);

    pub fn is_writable(&self) -> bool {
        self.0 & Self::WRITABLE.0 != 0
    }

    pub fn is_enumerable(&self) -> bool {
        self.0 & Self::ENUMERABLE.0 != 0
    }

    pub fn is_configurable(&self) -> bool {
        self.0 & Self::CONFIGURABLE.0 != 0
    }
}

impl BitOr for PropertyAttributes {
    type Output = PropertyAttributes;

    fn bitor(self, rhs: Self) -> Self::Output {
        PropertyAttributes(self.0 | rhs.0)
    }
}

#[derive(Clone)]
pub enum PropertyDescriptor {
    Data {
        value: JsValue,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Accessor {
        accessor: NativeAccessor,
        enumerable: bool,
        configurable: bool,
    },
}
impl PropertyDescriptor {
    pub fn data(value: JsValue, attributes: PropertyAttributes) -> Self {
        PropertyDescriptor::Data {
            value,
            writable: attributes.is_writable(),
            enumerable: attributes.is_enumerable(),
            configurable: attributes.is_configurable(),
        }
    }

    /// Accessor properties have no writable bit; it is ignored if present.
    pub fn accessor(accessor: NativeAccessor, attributes: PropertyAttributes) -> Self {
        PropertyDescriptor::Accessor {
            accessor,
            enumerable: attributes.is_enumerable(),
            configurable: attributes.is_configurable(),
        }
    }

    pub fn is_enumerable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { enumerable, .. } => *enumerable,
            PropertyDescriptor::Accessor { enumerable, .. } => *enumerable,
        }
    }

    pub fn is_configurable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { configurable, .. } => *configurable,
            PropertyDescriptor::Accessor { configurable, .. } => *configurable,
        }
    }

    pub fn is_writable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { writable, .. } => *writable,
            PropertyDescriptor::Accessor { .. } => false,
        }
    }

    pub fn is_data_descriptor(&self) -> bool {
        matches!(self, PropertyDescriptor::Data { .. })
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        matches!(self, PropertyDescriptor::Accessor { .. })
    }

    pub fn attributes(&self) -> PropertyAttributes {
        let mut attributes = PropertyAttributes::NONE;
        if self.is_writable() {
            attributes = attributes | PropertyAttributes::WRITABLE;
        }
        if self.is_enumerable() {
            attributes = attributes | PropertyAttributes::ENUMERABLE;
        }
        if self.is_configurable() {
            attributes = attributes | PropertyAttributes::CONFIGURABLE;
        }
        attributes
    }
}
impl PartialEq for PropertyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                PropertyDescriptor::Data {
                    value,
                    writable,
                    enumerable,
                    configurable,
                },
                PropertyDescriptor::Data {
                    value: other_value,
                    writable: other_writable,
                    enumerable: other_enumerable,
                    configurable: other_configurable,
                },
            ) => {
                same_value(value, other_value)
                    && writable == other_writable
                    && enumerable == other_enumerable
                    && configurable == other_configurable
            }
            (
                PropertyDescriptor::Accessor {
                    accessor,
                    enumerable,
                    configurable,
                },
                PropertyDescriptor::Accessor {
                    accessor: other_accessor,
                    enumerable: other_enumerable,
                    configurable: other_configurable,
                },
            ) => {
                accessor.same_accessor(other_accessor)
                    && enumerable == other_enumerable
                    && configurable == other_configurable
            }
            _ => false,
        }
    }
}
