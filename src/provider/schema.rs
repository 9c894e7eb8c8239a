use std::collections::BTreeMap;

use serde::Serialize;

/// Value type of a schema attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// A single string.
    String,
    /// An ordered list of strings.
    StringList,
}

/// Who supplies an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
    /// Must be set in configuration.
    Required,
    /// Set by the provider during a read.
    Computed,
}

/// One attribute of a data source or provider schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Value type.
    #[serde(rename = "type")]
    pub kind: AttributeType,
    /// Who sets the value.
    pub mode: AttributeMode,
    /// Markdown description used by documentation generators.
    pub markdown_description: &'static str,
}

impl Attribute {
    /// A string that must be configured.
    pub const fn required_string(markdown_description: &'static str) -> Self {
        Attribute {
            kind: AttributeType::String,
            mode: AttributeMode::Required,
            markdown_description,
        }
    }

    /// A string filled in by the provider.
    pub const fn computed_string(markdown_description: &'static str) -> Self {
        Attribute {
            kind: AttributeType::String,
            mode: AttributeMode::Computed,
            markdown_description,
        }
    }

    /// A list of strings filled in by the provider.
    pub const fn computed_list(markdown_description: &'static str) -> Self {
        Attribute {
            kind: AttributeType::StringList,
            mode: AttributeMode::Computed,
            markdown_description,
        }
    }

    /// Whether the attribute must be configured.
    pub fn is_required(&self) -> bool {
        self.mode == AttributeMode::Required
    }
}

/// Schema of a provider or data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Markdown description of the block.
    pub markdown_description: &'static str,
    /// Attributes keyed by name.
    pub attributes: BTreeMap<&'static str, Attribute>,
}

impl Schema {
    /// An empty schema with a description.
    pub fn new(markdown_description: &'static str) -> Self {
        Schema {
            markdown_description,
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Names of the attributes that must be configured.
    pub fn required_attributes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes
            .iter()
            .filter(|(_, attribute)| attribute.is_required())
            .map(|(name, _)| *name)
    }
}
