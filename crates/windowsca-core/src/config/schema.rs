//! Provider-level schema

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::types::CredentialField;

/// A string attribute in the provider configuration block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringAttribute {
    pub description: String,
    pub optional: bool,
    pub sensitive: bool,
}

impl StringAttribute {
    pub fn optional(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            optional: true,
            sensitive: false,
        }
    }

    /// Mark the attribute sensitive so the host redacts it in plan output
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Schema of the `provider "windowsca"` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSchema {
    pub description: String,
    pub attributes: BTreeMap<String, StringAttribute>,
}

impl ProviderSchema {
    pub fn attribute(&self, name: &str) -> Option<&StringAttribute> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

static SCHEMA: Lazy<ProviderSchema> = Lazy::new(|| {
    let attributes = CredentialField::ALL
        .into_iter()
        .map(|field| {
            let description = format!(
                "WinRM {} of the certificate authority server. May also be provided via the {} environment variable.",
                field.label(),
                field.env_var()
            );
            let attribute = StringAttribute::optional(description);
            let attribute = if field.is_sensitive() {
                attribute.sensitive()
            } else {
                attribute
            };
            (field.attribute_name().to_string(), attribute)
        })
        .collect();

    ProviderSchema {
        description: "Manage certificates on a Windows Certificate Authority over WinRM.".to_string(),
        attributes,
    }
});

/// The provider's configuration schema
pub fn provider_schema() -> &'static ProviderSchema {
    &SCHEMA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_attributes() {
        let schema = provider_schema();
        assert_eq!(schema.attributes.len(), 3);

        for field in CredentialField::ALL {
            let attribute = schema.attribute(field.attribute_name()).unwrap();
            assert!(attribute.optional);
            assert_eq!(attribute.sensitive, field.is_sensitive());
            assert!(attribute.description.contains(field.env_var()));
        }
        assert!(!schema.contains("host"));
    }

    #[test]
    fn test_schema_serialization() {
        let json = serde_json::to_value(provider_schema()).unwrap();
        assert_eq!(json["attributes"]["winrm_password"]["sensitive"], true);
        assert_eq!(json["attributes"]["winrm_hostname"]["sensitive"], false);
    }
}
