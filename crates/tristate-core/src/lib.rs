//! Core types and traits for the tristate widget library.
//!
//! This crate provides foundational types used by the widget crates:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] and [`Brick`] traits
//! - Accessibility values: [`AriaChecked`], [`AriaBool`], [`AriaAttributes`]
//! - DOM-target output: [`Element`], [`ClassList`]

mod aria;
mod brick;
mod canvas;
mod class_list;
mod color;
mod constraints;
mod element;
mod error;
mod event;
mod geometry;
pub mod widget;

pub use aria::{AriaAttributes, AriaBool, AriaChecked};
pub use brick::{Brick, BrickAssertion, BrickBudget, BrickVerification};
pub use canvas::{DrawCommand, RecordingCanvas};
pub use class_list::ClassList;
pub use color::Color;
pub use constraints::Constraints;
pub use element::{Element, ElementTag, Node};
pub use error::{CoreError, CoreResult};
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, LayoutResult, TextStyle, TypeId, Widget};
