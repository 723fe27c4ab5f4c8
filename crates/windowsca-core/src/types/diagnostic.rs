//! User-facing diagnostics
//!
//! Everything the provider reports back to the host goes through these
//! types. The host renders them verbatim, so insertion order is preserved.

use serde::Serialize;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// Path to the attribute a diagnostic refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributePath(Vec<String>);

impl AttributePath {
    /// Path to a top-level attribute
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Extend the path with a nested attribute name
    pub fn at_name(mut self, name: impl Into<String>) -> Self {
        self.0.push(name.into());
        self
    }

    pub fn steps(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for AttributePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A single diagnostic: severity, short summary, remediation detail and an
/// optional attribute path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<AttributePath>,
}

impl Diagnostic {
    /// Error not tied to a specific attribute
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        }
    }

    /// Error attached to an attribute
    pub fn attribute_error(
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            path: Some(path),
            ..Self::error(summary, detail)
        }
    }

    /// Warning not tied to a specific attribute
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(summary, detail)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.summary)?;
        if let Some(path) = &self.path {
            write!(f, "\n  with {}", path)?;
        }
        if !self.detail.is_empty() {
            write!(f, "\n{}", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered collection of diagnostics
///
/// Used as the error arm of every fallible configure step. A collection with
/// at least one error means the step failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Append every diagnostic from `other`, keeping order
    pub fn append(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(summary, detail));
    }

    pub fn add_attribute_error(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::attribute_error(path, summary, detail));
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    /// `Err(self)` when an error was recorded, `Ok(())` otherwise
    ///
    /// This is the gate between configure steps.
    pub fn into_result(self) -> Result<(), Diagnostics> {
        if self.has_error() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self(diagnostics)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_path_display() {
        let path = AttributePath::root("winrm_hostname");
        assert_eq!(path.to_string(), "winrm_hostname");
        assert_eq!(path.clone().at_name("inner").to_string(), "winrm_hostname.inner");
        assert_eq!(path.steps(), &["winrm_hostname".to_string()]);
    }

    #[test]
    fn test_diagnostics_order_and_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_error());
        assert!(diags.clone().into_result().is_ok());

        diags.push(Diagnostic::warning("first", ""));
        assert!(!diags.has_error());

        diags.add_attribute_error(AttributePath::root("a"), "second", "detail");
        diags.add_error("third", "detail");

        assert!(diags.has_error());
        assert_eq!(diags.len(), 3);
        assert_eq!(diags.error_count(), 2);

        let summaries: Vec<_> = diags.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries, vec!["first", "second", "third"]);
        assert!(diags.into_result().is_err());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut a = Diagnostics::from(Diagnostic::error("a", ""));
        let b = Diagnostics::from(vec![Diagnostic::error("b", ""), Diagnostic::error("c", "")]);
        a.append(b);
        let summaries: Vec<_> = a.into_iter().map(|d| d.summary).collect();
        assert_eq!(summaries, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_display() {
        let diags = Diagnostics::from(vec![
            Diagnostic::attribute_error(AttributePath::root("winrm_username"), "Missing", "Set it."),
            Diagnostic::error("Broken", "Details."),
        ]);
        assert_eq!(
            diags.to_string(),
            "Error: Missing\n  with winrm_username\nSet it.\n\nError: Broken\nDetails."
        );
    }

    #[test]
    fn test_serialization() {
        let diag = Diagnostic::attribute_error(AttributePath::root("winrm_password"), "Missing", "Set it.");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["path"], serde_json::json!(["winrm_password"]));

        let json = serde_json::to_value(Diagnostic::error("x", "y")).unwrap();
        assert!(json.get("path").is_none());
    }
}
