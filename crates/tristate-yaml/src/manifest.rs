//! Form manifest types.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};
use tristate_widgets::{Checkbox, CheckboxProps};

/// A form described in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormManifest {
    /// Form name
    #[serde(default)]
    pub name: String,
    /// Checkboxes in display order
    #[serde(default)]
    pub checkboxes: Vec<CheckboxEntry>,
}

/// One checkbox in a form manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxEntry {
    /// Unique id; becomes the widget's test id
    pub id: String,
    /// Visible label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Initial widget configuration
    #[serde(flatten)]
    pub props: CheckboxProps,
}

impl CheckboxEntry {
    /// Build the widget for this entry.
    #[must_use]
    pub fn build(&self) -> Checkbox {
        let checkbox = Checkbox::with_props(self.props).with_test_id(self.id.as_str());
        match &self.label {
            Some(label) => checkbox.label(label.as_str()),
            None => checkbox,
        }
    }
}

impl FormManifest {
    /// Parse and validate a manifest from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or the manifest fails
    /// [`validate`](Self::validate).
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        debug!(
            name = %manifest.name,
            checkboxes = manifest.checkboxes.len(),
            "loaded form manifest"
        );
        Ok(manifest)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check names and ids.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a missing or blank form name, a
    /// blank checkbox id, or a checkbox id used twice.
    pub fn validate(&self) -> Result<(), ParseError> {
        let result = self.check();
        if let Err(e) = &result {
            warn!(name = %self.name, error = %e, "form manifest rejected");
        }
        result
    }

    fn check(&self) -> Result<(), ParseError> {
        if self.name.is_empty() {
            return Err(ParseError::MissingField("name".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(ParseError::Validation(
                "form name must not be blank".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.checkboxes.iter().enumerate() {
            let field = format!("checkboxes[{index}].id");
            if entry.id.trim().is_empty() {
                return Err(ParseError::InvalidValue {
                    field,
                    message: "must not be empty".to_string(),
                });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ParseError::InvalidValue {
                    field,
                    message: format!("duplicate id '{}'", entry.id),
                });
            }
        }
        Ok(())
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&CheckboxEntry> {
        self.checkboxes.iter().find(|entry| entry.id == id)
    }

    /// Build one widget per entry, in manifest order.
    #[must_use]
    pub fn build(&self) -> Vec<Checkbox> {
        self.checkboxes.iter().map(CheckboxEntry::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristate_core::{Brick, Widget};
    use tristate_widgets::{CheckState, ValidationStatus};

    const SIGNUP_YAML: &str = r#"
name: "signup"
checkboxes:
  - id: "terms"
    label: "Accept terms"
    required: true
    validationStatus: "error"
  - id: "newsletter"
    label: "Send me news"
    defaultChecked: true
  - id: "select-all"
    checked: false
    indeterminate: true
  - id: "locked"
    checked: true
    disabled: true
"#;

    fn signup() -> FormManifest {
        FormManifest::from_yaml(SIGNUP_YAML).expect("valid manifest")
    }

    #[test]
    fn test_parse_manifest() {
        let manifest = signup();
        assert_eq!(manifest.name, "signup");
        assert_eq!(manifest.checkboxes.len(), 4);
    }

    #[test]
    fn test_parse_entry_props() {
        let manifest = signup();
        let terms = manifest.entry("terms").expect("terms");
        assert_eq!(terms.label.as_deref(), Some("Accept terms"));
        assert!(terms.props.required);
        assert_eq!(terms.props.validation_status, ValidationStatus::Error);
        assert_eq!(terms.props.checked, None);

        let news = manifest.entry("newsletter").expect("newsletter");
        assert_eq!(news.props.default_checked, Some(true));

        let locked = manifest.entry("locked").expect("locked");
        assert_eq!(locked.props.checked, Some(true));
        assert!(locked.props.disabled);
        assert!(manifest.entry("missing").is_none());
    }

    #[test]
    fn test_unknown_validation_status_is_none() {
        let manifest = FormManifest::from_yaml(
            "name: f\ncheckboxes:\n  - id: a\n    validationStatus: warning\n",
        )
        .expect("valid manifest");
        assert_eq!(
            manifest.checkboxes[0].props.validation_status,
            ValidationStatus::None
        );
    }

    #[test]
    fn test_build_widgets() {
        let boxes = signup().build();
        assert_eq!(boxes.len(), 4);

        assert_eq!(boxes[0].test_id(), Some("terms"));
        assert_eq!(boxes[0].accessible_name(), Some("Accept terms"));
        assert_eq!(boxes[0].aria_attributes().get("aria-invalid"), Some("true"));

        assert!(boxes[1].is_checked());
        assert!(!boxes[1].mode().is_controlled());

        assert_eq!(boxes[2].get_state(), CheckState::Indeterminate);
        assert!(boxes[2].to_html().contains(r#"aria-checked="mixed""#));

        assert!(boxes[3].is_checked());
        assert!(boxes[3].is_disabled());
        assert_eq!(boxes[3].accessible_name(), None);
    }

    #[test]
    fn test_missing_name_rejected() {
        let err = FormManifest::from_yaml("checkboxes: []").expect_err("no name");
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "name"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = FormManifest::from_yaml("name: '  '").expect_err("blank name");
        assert!(matches!(err, ParseError::Validation(_)));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = FormManifest::from_yaml("name: f\ncheckboxes:\n  - id: ''\n")
            .expect_err("empty id");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'checkboxes[0].id': must not be empty"
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let yaml = "name: f\ncheckboxes:\n  - id: a\n  - id: b\n  - id: a\n";
        let err = FormManifest::from_yaml(yaml).expect_err("duplicate id");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'checkboxes[2].id': duplicate id 'a'"
        );
    }

    #[test]
    fn test_invalid_yaml() {
        let err = FormManifest::from_yaml("name: [unclosed").expect_err("bad yaml");
        assert!(matches!(err, ParseError::Yaml(_)));
    }

    #[test]
    fn test_empty_form_is_valid() {
        let manifest = FormManifest::from_yaml("name: empty").expect("valid");
        assert!(manifest.build().is_empty());
    }

    #[test]
    fn test_roundtrip() {
        let manifest = signup();
        let yaml = manifest.to_yaml().expect("serialize");
        assert!(yaml.contains("defaultChecked: true"));
        assert!(!yaml.contains("label: null"));
        let manifest2 = FormManifest::from_yaml(&yaml).expect("reparse");
        assert_eq!(manifest, manifest2);
    }
}
