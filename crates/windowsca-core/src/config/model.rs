//! Decoded provider configuration

use serde_json::Value;

use crate::types::{AttributePath, AttributeValue, CredentialField, Diagnostic, Diagnostics};

use super::schema::provider_schema;

/// String Terraform substitutes for values that are not known until apply
pub const UNKNOWN_VALUE: &str = "74D93920-ED26-11E3-AC10-0800200C9A66";

/// The provider block as declared by the practitioner
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub winrm_hostname: AttributeValue,
    pub winrm_username: AttributeValue,
    pub winrm_password: AttributeValue,
}

impl ProviderConfig {
    pub fn new(
        winrm_hostname: AttributeValue,
        winrm_username: AttributeValue,
        winrm_password: AttributeValue,
    ) -> Self {
        Self {
            winrm_hostname,
            winrm_username,
            winrm_password,
        }
    }

    pub fn get(&self, field: CredentialField) -> &AttributeValue {
        match field {
            CredentialField::Hostname => &self.winrm_hostname,
            CredentialField::Username => &self.winrm_username,
            CredentialField::Password => &self.winrm_password,
        }
    }

    fn slot_mut(&mut self, field: CredentialField) -> &mut AttributeValue {
        match field {
            CredentialField::Hostname => &mut self.winrm_hostname,
            CredentialField::Username => &mut self.winrm_username,
            CredentialField::Password => &mut self.winrm_password,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, field: CredentialField, value: AttributeValue) -> Self {
        *self.slot_mut(field) = value;
        self
    }

    /// Decode the configuration object sent by the host
    ///
    /// Every problem in the document is reported, not just the first.
    pub fn from_value(value: &Value) -> Result<Self, Diagnostics> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => {
                return Err(Diagnostics::from(Diagnostic::error(
                    "Invalid Provider Configuration",
                    format!(
                        "The provider configuration must be an object, got {}.",
                        json_kind(other)
                    ),
                )));
            }
        };

        let mut config = Self::default();
        let mut diags = Diagnostics::new();

        for field in CredentialField::ALL {
            let Some(raw) = object.get(field.attribute_name()) else {
                continue;
            };
            match raw {
                Value::Null => {}
                Value::String(s) if s == UNKNOWN_VALUE => {
                    *config.slot_mut(field) = AttributeValue::Unknown;
                }
                Value::String(s) => {
                    *config.slot_mut(field) = AttributeValue::Set(s.clone());
                }
                other => {
                    diags.add_attribute_error(
                        AttributePath::root(field.attribute_name()),
                        "Invalid Attribute Type",
                        format!(
                            "The {} attribute must be a string, got {}.",
                            field.attribute_name(),
                            json_kind(other)
                        ),
                    );
                }
            }
        }

        for key in object.keys() {
            if CredentialField::from_attribute_name(key).is_none() {
                diags.add_attribute_error(
                    AttributePath::root(key.as_str()),
                    "Unsupported Argument",
                    format!(
                        "An argument named \"{}\" is not expected here. Supported arguments: {}.",
                        key,
                        supported_arguments()
                    ),
                );
            }
        }

        diags.into_result().map(|()| config)
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let password: &dyn std::fmt::Debug = match &self.winrm_password {
            AttributeValue::Set(_) => &"[REDACTED]",
            other => other,
        };
        f.debug_struct("ProviderConfig")
            .field("winrm_hostname", &self.winrm_hostname)
            .field("winrm_username", &self.winrm_username)
            .field("winrm_password", password)
            .finish()
    }
}

fn supported_arguments() -> String {
    provider_schema()
        .attributes
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_states() {
        let config = ProviderConfig::from_value(&json!({
            "winrm_hostname": "ca01",
            "winrm_username": null,
            "winrm_password": UNKNOWN_VALUE,
        }))
        .unwrap();

        assert_eq!(config.winrm_hostname, AttributeValue::set("ca01"));
        assert_eq!(config.winrm_username, AttributeValue::Null);
        assert_eq!(config.winrm_password, AttributeValue::Unknown);
    }

    #[test]
    fn test_decode_missing_keys_are_null() {
        let config = ProviderConfig::from_value(&json!({})).unwrap();
        assert_eq!(config, ProviderConfig::default());

        let config = ProviderConfig::from_value(&Value::Null).unwrap();
        assert_eq!(config, ProviderConfig::default());
    }

    #[test]
    fn test_decode_keeps_empty_string() {
        let config = ProviderConfig::from_value(&json!({ "winrm_username": "" })).unwrap();
        assert_eq!(config.winrm_username, AttributeValue::set(""));
    }

    #[test]
    fn test_decode_accumulates_errors() {
        let diags = ProviderConfig::from_value(&json!({
            "winrm_hostname": 42,
            "winrm_password": ["a"],
            "winrm_port": "5986",
        }))
        .unwrap_err();

        assert_eq!(diags.error_count(), 3);
        let port = &diags.as_slice()[2];
        assert!(port.detail.contains("winrm_hostname"));
    }

    #[test]
    fn test_decode_errors_follow_field_order() {
        // Map keys sort as aaa_extra < winrm_hostname < winrm_password < winrm_username
        let diags = ProviderConfig::from_value(&json!({
            "aaa_extra": true,
            "winrm_username": false,
            "winrm_password": ["a"],
            "winrm_hostname": 42,
            "winrm_port": "5986",
        }))
        .unwrap_err();

        let got: Vec<_> = diags
            .iter()
            .map(|d| (d.summary.as_str(), d.path.clone()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Invalid Attribute Type", Some(AttributePath::root("winrm_hostname"))),
                ("Invalid Attribute Type", Some(AttributePath::root("winrm_username"))),
                ("Invalid Attribute Type", Some(AttributePath::root("winrm_password"))),
                ("Unsupported Argument", Some(AttributePath::root("aaa_extra"))),
                ("Unsupported Argument", Some(AttributePath::root("winrm_port"))),
            ]
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ProviderConfig::default()
            .with(CredentialField::Hostname, AttributeValue::set("ca01"))
            .with(CredentialField::Password, AttributeValue::set("hunter2"));
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("ca01"));

        let unknown = ProviderConfig::default().with(CredentialField::Password, AttributeValue::Unknown);
        assert!(format!("{:?}", unknown).contains("Unknown"));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let diags = ProviderConfig::from_value(&json!("ca01")).unwrap_err();
        assert_eq!(diags.len(), 1);
        assert!(diags.as_slice()[0].detail.contains("got string"));
    }

    #[test]
    fn test_type_error_does_not_echo_value() {
        let diags = ProviderConfig::from_value(&json!({ "winrm_password": 123456 })).unwrap_err();
        assert!(!diags.to_string().contains("123456"));
    }
}
