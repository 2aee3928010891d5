//! YAML form manifests for tristate widgets.
//!
//! A manifest names a form and lists its checkboxes; each entry carries the
//! same camelCase props the widget accepts.
//!
//! ```
//! use tristate_yaml::FormManifest;
//!
//! let manifest = FormManifest::from_yaml(
//!     "name: signup\ncheckboxes:\n  - id: terms\n    label: Accept terms\n    required: true\n",
//! )
//! .expect("valid manifest");
//! let boxes = manifest.build();
//! assert_eq!(boxes.len(), 1);
//! assert!(boxes[0].get_props().required);
//! ```

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{CheckboxEntry, FormManifest};
