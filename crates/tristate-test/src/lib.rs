#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
//! Testing harness for tristate widgets.
//!
//! Render a widget, query it the way assistive technology sees it, drive it
//! with simulated input, and re-render it with new owner configuration.
//!
//! ```
//! use tristate_core::{
//!     AccessibleRole, Brick, BrickAssertion, BrickVerification, Canvas, Constraints, Event,
//!     LayoutResult, Rect, Size, TypeId, Widget,
//! };
//! use tristate_test::Harness;
//!
//! struct Label;
//!
//! impl Brick for Label {
//!     fn brick_name(&self) -> &'static str { "Label" }
//!     fn assertions(&self) -> &[BrickAssertion] { &[] }
//!     fn verify(&self) -> BrickVerification { BrickVerification::default() }
//!     fn to_html(&self) -> String { "<span></span>".into() }
//! }
//!
//! impl Widget for Label {
//!     fn type_id(&self) -> TypeId { TypeId::of::<Self>() }
//!     fn measure(&self, c: Constraints) -> Size { c.constrain(Size::new(40.0, 16.0)) }
//!     fn layout(&mut self, bounds: Rect) -> LayoutResult { LayoutResult { size: bounds.size() } }
//!     fn paint(&self, _canvas: &mut dyn Canvas) {}
//!     fn event(&mut self, _event: &Event) -> Option<Box<dyn std::any::Any + Send>> { None }
//!     fn test_id(&self) -> Option<&str> { Some("label") }
//! }
//!
//! let harness = Harness::new(Label);
//! harness.assert_exists("Label").assert_exists("#label");
//! assert!(!harness.exists("[role='checkbox']"));
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
