//! Widget implementations for the tristate library.

pub mod checkbox;
pub mod circle_badge;

pub use checkbox::{
    derive_attributes, resolve_toggle, ActivationSource, ChangeEvent, ChangeHandler,
    ChangeNotifier, CheckState, Checkbox, CheckboxChanged, CheckboxProps, Mode,
    RenderedAttributes, ToggleResolution, ValidationStatus, ValueStore,
};
pub use circle_badge::{BadgeSize, CircleBadge};
