use indexmap::IndexMap;

/// Represents an enum type defined within some
/// [`TypeRegistry`](crate::TypeRegistry).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, in definition order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) value: serde_json::Value,
}
impl EnumValue {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The runtime value this enum value stands for.
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }
}
