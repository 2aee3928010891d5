//! Tri-state checkbox for boolean input.
//!
//! The control reconciles four inputs into what the platform and assistive
//! technology see:
//!
//! - an owner-supplied `checked` value (controlled mode) or an internal
//!   [`ValueStore`] seeded from `defaultChecked` (uncontrolled mode),
//! - the `indeterminate` overlay, which never touches the stored boolean,
//! - `disabled` / `required` / `validationStatus` configuration,
//! - user activation (primary click, `Space`, or [`Checkbox::activate`]).
//!
//! [`derive_attributes`] is the single source of truth for the rendered
//! attribute set and is re-run on every query; nothing derived is cached.
//!
//! # Examples
//!
//! ```
//! use tristate_widgets::{Checkbox, CheckboxProps};
//! use tristate_core::{AriaChecked, Widget};
//!
//! let mut cb = Checkbox::new().default_checked(true);
//! assert!(cb.is_checked());
//!
//! cb.activate_programmatic();
//! assert!(!cb.is_checked());
//!
//! cb.rerender(CheckboxProps::new().checked(true).indeterminate(true));
//! assert!(!cb.is_checked());
//! assert_eq!(cb.attributes().aria_checked, AriaChecked::Mixed);
//! assert_eq!(cb.aria_attributes().get("aria-checked"), Some("mixed"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::any::Any;
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace, warn};
use tristate_core::{
    widget::{AccessibleRole, LayoutResult},
    AriaAttributes, AriaBool, AriaChecked, Brick, BrickAssertion, BrickBudget, BrickVerification,
    Canvas, Color, Constraints, CoreResult, Element, Event, Key, MouseButton, Point, Rect, Size,
    TextStyle, TypeId, Widget,
};

const BOX_COLOR: Color = Color {
    r: 0.8,
    g: 0.8,
    b: 0.8,
    a: 1.0,
};
const CHECKED_COLOR: Color = Color {
    r: 0.2,
    g: 0.47,
    b: 0.96,
    a: 1.0,
};
const DISABLED_COLOR: Color = Color {
    r: 0.6,
    g: 0.6,
    b: 0.6,
    a: 1.0,
};

const DEFAULT_TEST_ID: &str = "checkbox";

const ASSERTIONS: &[BrickAssertion] = &[
    BrickAssertion::MaxLatencyMs(16),
    BrickAssertion::AriaAttribute("aria-checked"),
    BrickAssertion::AriaAttribute("aria-disabled"),
    BrickAssertion::AriaAttribute("aria-required"),
    BrickAssertion::AriaAttribute("aria-invalid"),
];

/// Validation outcome reported by the owning form.
///
/// Parsing is total: anything other than `"error"` or `"success"` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// No validation has run
    #[default]
    None,
    /// Value passed validation
    Success,
    /// Value failed validation
    Error,
}

impl ValidationStatus {
    /// Parse a status token. Unknown tokens degrade to [`ValidationStatus::None`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "success" => Self::Success,
            _ => Self::None,
        }
    }

    /// Token form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Whether this status marks the field invalid.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl From<&str> for ValidationStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl<'de> Deserialize<'de> for ValidationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(Self::None, |s| Self::parse(&s)))
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner-supplied configuration for one render.
///
/// Field names serialize in camelCase (`defaultChecked`, `validationStatus`)
/// so the same record can be written in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxProps {
    /// Controlled value. Presence selects controlled mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Initial value for uncontrolled mode; read once at first render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_checked: Option<bool>,
    /// Mixed-state display overlay
    pub indeterminate: bool,
    /// Suppresses activation
    pub disabled: bool,
    /// Field is required by its form
    pub required: bool,
    /// Validation outcome
    pub validation_status: ValidationStatus,
}

impl CheckboxProps {
    /// Empty configuration: uncontrolled, unchecked, enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            checked: None,
            default_checked: None,
            indeterminate: false,
            disabled: false,
            required: false,
            validation_status: ValidationStatus::None,
        }
    }

    /// Set the controlled value.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Set the uncontrolled initial value.
    #[must_use]
    pub const fn default_checked(mut self, default_checked: bool) -> Self {
        self.default_checked = Some(default_checked);
        self
    }

    /// Set the indeterminate overlay.
    #[must_use]
    pub const fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set required state.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set validation status.
    #[must_use]
    pub const fn validation_status(mut self, status: ValidationStatus) -> Self {
        self.validation_status = status;
        self
    }
}

/// Internal value for uncontrolled mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueStore {
    value: bool,
}

impl ValueStore {
    /// Create the store from `defaultChecked`.
    #[must_use]
    pub const fn initialize(default_checked: bool) -> Self {
        Self {
            value: default_checked,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn get(&self) -> bool {
        self.value
    }

    /// Store a new value. Returns whether it differed from the old one.
    pub fn set(&mut self, next: bool) -> bool {
        let changed = self.value != next;
        self.value = next;
        changed
    }
}

impl Default for ValueStore {
    fn default() -> Self {
        Self::initialize(false)
    }
}

/// Who owns the boolean value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The owner supplies the value on every render.
    Controlled(bool),
    /// The control owns the value.
    Uncontrolled(ValueStore),
}

impl Mode {
    /// Select the mode for a first render.
    #[must_use]
    pub fn from_props(props: &CheckboxProps) -> Self {
        match (props.checked, props.default_checked) {
            (Some(checked), Some(_)) => {
                warn!(
                    checked,
                    "checkbox received both checked and defaultChecked; using checked"
                );
                Self::Controlled(checked)
            }
            (Some(checked), None) => Self::Controlled(checked),
            (None, default_checked) => {
                Self::Uncontrolled(ValueStore::initialize(default_checked.unwrap_or(false)))
            }
        }
    }

    /// The value governing display for this render.
    #[must_use]
    pub const fn effective_value(&self) -> bool {
        match self {
            Self::Controlled(value) => *value,
            Self::Uncontrolled(store) => store.get(),
        }
    }

    /// Whether the owner controls the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }

    /// Apply a later render's configuration.
    ///
    /// Once `checked` has been supplied the control stays controlled; a
    /// configuration that drops it keeps the last supplied value.
    pub fn reconcile(&mut self, props: &CheckboxProps) {
        match (props.checked, self.is_controlled()) {
            (Some(checked), true) => *self = Self::Controlled(checked),
            (Some(checked), false) => {
                warn!(
                    checked,
                    discarded = self.effective_value(),
                    "checkbox switched from uncontrolled to controlled"
                );
                *self = Self::Controlled(checked);
            }
            (None, true) => {
                warn!(
                    last = self.effective_value(),
                    "checked omitted on a controlled checkbox; keeping last value"
                );
            }
            (None, false) => {}
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Uncontrolled(ValueStore::default())
    }
}

/// Outcome of resolving an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResolution {
    /// Whether the activation may change anything
    pub permitted: bool,
    /// Value the control would move to
    pub next_value: bool,
}

/// Resolve an activation against the current configuration.
///
/// Disabled controls refuse. Otherwise the next value is the negation of the
/// effective value, regardless of `indeterminate`.
#[must_use]
pub const fn resolve_toggle(props: &CheckboxProps, effective_value: bool) -> ToggleResolution {
    if props.disabled {
        ToggleResolution {
            permitted: false,
            next_value: effective_value,
        }
    } else {
        ToggleResolution {
            permitted: true,
            next_value: !effective_value,
        }
    }
}

/// Native flags and ARIA states for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedAttributes {
    /// Platform `checked` flag; forced false while indeterminate
    pub native_checked: bool,
    /// Platform `disabled` flag
    pub native_disabled: bool,
    /// Platform `indeterminate` flag (display only)
    pub native_indeterminate: bool,
    /// `aria-checked`
    pub aria_checked: AriaChecked,
    /// `aria-disabled`
    pub aria_disabled: AriaBool,
    /// `aria-required`
    pub aria_required: AriaBool,
    /// `aria-invalid`
    pub aria_invalid: AriaBool,
}

impl RenderedAttributes {
    /// ARIA attribute set including the `checkbox` role.
    #[must_use]
    pub fn to_aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .with("role", AccessibleRole::Checkbox.as_str())
            .with("aria-checked", self.aria_checked.as_str())
            .with("aria-disabled", self.aria_disabled.as_str())
            .with("aria-required", self.aria_required.as_str())
            .with("aria-invalid", self.aria_invalid.as_str())
    }

    /// Displayed tri-state.
    #[must_use]
    pub fn check_state(&self) -> CheckState {
        self.aria_checked.into()
    }
}

/// Displayed state, as assistive technology announces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckState {
    /// Not checked
    #[default]
    Unchecked,
    /// Checked
    Checked,
    /// Mixed (partial selection in trees)
    Indeterminate,
}

impl CheckState {
    /// Check if checked (true for Checked, false for others).
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Check if indeterminate.
    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

impl From<AriaChecked> for CheckState {
    fn from(value: AriaChecked) -> Self {
        match value {
            AriaChecked::True => Self::Checked,
            AriaChecked::False => Self::Unchecked,
            AriaChecked::Mixed => Self::Indeterminate,
        }
    }
}

/// Derive the rendered attribute set. Pure; call on every render.
#[must_use]
pub fn derive_attributes(props: &CheckboxProps, effective_value: bool) -> RenderedAttributes {
    let attrs = RenderedAttributes {
        native_checked: !props.indeterminate && effective_value,
        native_disabled: props.disabled,
        native_indeterminate: props.indeterminate,
        aria_checked: if props.indeterminate {
            AriaChecked::Mixed
        } else {
            AriaChecked::from(effective_value)
        },
        aria_disabled: props.disabled.into(),
        aria_required: props.required.into(),
        aria_invalid: props.validation_status.is_error().into(),
    };
    trace!(?attrs, effective_value, "derived checkbox attributes");
    attrs
}

/// What triggered an activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationSource {
    /// Primary pointer press inside the control
    Pointer {
        /// Press position
        position: Point,
    },
    /// Key press while focused
    Keyboard {
        /// Key pressed
        key: Key,
    },
    /// Activation requested in code
    Programmatic,
}

/// Payload delivered to the owner's change handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeEvent {
    /// Activation that produced the change
    pub source: ActivationSource,
    /// The control's computed next value
    pub checked: bool,
    /// Whether the owner controls the value
    pub controlled: bool,
}

/// Message emitted from [`Widget::event`] when an activation is accepted.
///
/// In controlled mode this is a request: the visible state only moves when
/// the owner re-renders with a new `checked` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckboxChanged {
    /// The control's computed next value
    pub checked: bool,
    /// Activation that produced the change
    pub source: ActivationSource,
}

/// Owner callback type.
pub type ChangeHandler = Box<dyn FnMut(&ChangeEvent) + Send + Sync>;

/// One-way delivery of change events to the owner.
#[derive(Default)]
pub struct ChangeNotifier {
    handler: Option<ChangeHandler>,
}

impl ChangeNotifier {
    /// Notifier with a handler installed.
    #[must_use]
    pub fn new(handler: ChangeHandler) -> Self {
        Self {
            handler: Some(handler),
        }
    }

    /// Whether a handler is installed.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.handler.is_some()
    }

    /// Invoke the handler if present. Returns whether it ran.
    pub fn notify(&mut self, event: &ChangeEvent) -> bool {
        match self.handler.as_mut() {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("handler", &self.handler.as_ref().map(|_| "FnMut"))
            .finish()
    }
}

/// Checkbox widget.
#[derive(Debug)]
pub struct Checkbox {
    /// Configuration of the latest render
    props: CheckboxProps,
    /// Value ownership
    mode: Mode,
    /// Owner callback
    notifier: ChangeNotifier,
    /// Label text
    label: String,
    /// Box size
    box_size: f32,
    /// Spacing between box and label
    spacing: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    /// Whether hovered
    hovered: bool,
    /// Whether focused
    focused: bool,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox {
    /// Create a new unconfigured checkbox.
    #[must_use]
    pub fn new() -> Self {
        Self {
            props: CheckboxProps::new(),
            mode: Mode::default(),
            notifier: ChangeNotifier::default(),
            label: String::new(),
            box_size: 18.0,
            spacing: 8.0,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
            hovered: false,
            focused: false,
        }
    }

    /// Create a checkbox from a full configuration (first render).
    #[must_use]
    pub fn with_props(props: CheckboxProps) -> Self {
        Self::new().props(props)
    }

    /// Replace the initial configuration.
    #[must_use]
    pub fn props(mut self, props: CheckboxProps) -> Self {
        self.mode = Mode::from_props(&props);
        self.props = props;
        self
    }

    /// Set the controlled value.
    #[must_use]
    pub fn checked(self, checked: bool) -> Self {
        let props = self.props.checked(checked);
        self.props(props)
    }

    /// Set the uncontrolled initial value.
    #[must_use]
    pub fn default_checked(self, default_checked: bool) -> Self {
        let props = self.props.default_checked(default_checked);
        self.props(props)
    }

    /// Set the indeterminate overlay.
    #[must_use]
    pub const fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.props.indeterminate = indeterminate;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    /// Set required state.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.props.required = required;
        self
    }

    /// Set validation status.
    #[must_use]
    pub const fn validation_status(mut self, status: ValidationStatus) -> Self {
        self.props.validation_status = status;
        self
    }

    /// Install the owner's change handler.
    #[must_use]
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&ChangeEvent) + Send + Sync + 'static,
    {
        self.notifier = ChangeNotifier::new(Box::new(handler));
        self
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set box size.
    #[must_use]
    pub fn box_size(mut self, size: f32) -> Self {
        self.box_size = size.max(8.0);
        self
    }

    /// Set spacing between box and label.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Re-render with a new owner configuration.
    ///
    /// The change handler and, in uncontrolled mode, the internal value
    /// survive; `defaultChecked` is not consulted again.
    pub fn rerender(&mut self, props: CheckboxProps) {
        self.mode.reconcile(&props);
        self.props = props;
        if self.props.disabled {
            self.hovered = false;
        }
        trace!(props = ?self.props, mode = ?self.mode, "checkbox re-rendered");
    }

    /// Run an activation through resolve, store, notify.
    ///
    /// Returns `None` when the activation was suppressed.
    pub fn activate(&mut self, source: ActivationSource) -> Option<CheckboxChanged> {
        let current = self.mode.effective_value();
        let resolution = resolve_toggle(&self.props, current);
        if !resolution.permitted {
            debug!(?source, "checkbox activation suppressed (disabled)");
            return None;
        }

        if let Mode::Uncontrolled(store) = &mut self.mode {
            store.set(resolution.next_value);
        }

        let change = ChangeEvent {
            source,
            checked: resolution.next_value,
            controlled: self.mode.is_controlled(),
        };
        let notified = self.notifier.notify(&change);
        debug!(
            from = current,
            to = resolution.next_value,
            controlled = change.controlled,
            notified,
            "checkbox toggled"
        );

        Some(CheckboxChanged {
            checked: resolution.next_value,
            source,
        })
    }

    /// Activate as if by script.
    pub fn activate_programmatic(&mut self) -> Option<CheckboxChanged> {
        self.activate(ActivationSource::Programmatic)
    }

    /// Configuration of the latest render.
    #[must_use]
    pub const fn get_props(&self) -> &CheckboxProps {
        &self.props
    }

    /// Value ownership.
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The logical boolean value (ignores the indeterminate overlay).
    #[must_use]
    pub const fn value(&self) -> bool {
        self.mode.effective_value()
    }

    /// Derive the attribute set for the current render.
    #[must_use]
    pub fn attributes(&self) -> RenderedAttributes {
        derive_attributes(&self.props, self.value())
    }

    /// Native checked flag as the platform would report it.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.attributes().native_checked
    }

    /// Displayed tri-state.
    #[must_use]
    pub fn get_state(&self) -> CheckState {
        self.attributes().check_state()
    }

    /// Check if the indeterminate overlay is shown.
    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        self.props.indeterminate
    }

    /// Check if disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    /// Get the label.
    #[must_use]
    pub fn get_label(&self) -> &str {
        &self.label
    }

    fn build_element(&self) -> CoreResult<Element> {
        let attrs = self.attributes();
        let mut input = Element::parse("input")?
            .class("tristate-checkbox")
            .attr("type", "checkbox")?
            .attr("data-testid", self.test_id().unwrap_or(DEFAULT_TEST_ID))?;
        if let Some(name) = self.accessible_name() {
            input.set_attr("aria-label", name)?;
        }
        for (name, value) in attrs.to_aria().iter().filter(|(n, _)| *n != "role") {
            input.set_attr(name, value)?;
        }
        if attrs.native_checked {
            input.set_flag("checked")?;
        }
        if attrs.native_disabled {
            input.set_flag("disabled")?;
        }
        if self.props.required {
            input.set_flag("required")?;
        }
        if attrs.native_indeterminate {
            input.set_attr("data-indeterminate", "true")?;
        }
        Ok(input)
    }
}

impl Widget for Checkbox {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let label_width = if self.label.is_empty() {
            0.0
        } else {
            self.label.len() as f32 * 8.0 // ~8px per character
        };

        let total_width = self.box_size + self.spacing + label_width;
        constraints.constrain(Size::new(total_width, self.box_size))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let attrs = self.attributes();
        let box_rect = Rect::new(
            self.bounds.x,
            self.bounds.y + (self.bounds.height - self.box_size) / 2.0,
            self.box_size,
            self.box_size,
        );

        let box_color = if attrs.native_disabled {
            DISABLED_COLOR
        } else if attrs.native_checked || attrs.native_indeterminate {
            CHECKED_COLOR
        } else {
            BOX_COLOR
        };
        canvas.fill_rect(box_rect, box_color);

        if !attrs.native_disabled {
            if attrs.native_indeterminate {
                let bar = Rect::new(
                    self.box_size.mul_add(0.2, box_rect.x),
                    self.box_size.mul_add(0.4, box_rect.y),
                    self.box_size * 0.6,
                    self.box_size * 0.2,
                );
                canvas.fill_rect(bar, Color::WHITE);
            } else if attrs.native_checked {
                let mark = Rect::new(
                    self.box_size.mul_add(0.25, box_rect.x),
                    self.box_size.mul_add(0.25, box_rect.y),
                    self.box_size * 0.5,
                    self.box_size * 0.5,
                );
                canvas.fill_rect(mark, Color::WHITE);
            }
        }

        if !self.label.is_empty() {
            let style = TextStyle {
                color: if attrs.native_disabled {
                    DISABLED_COLOR
                } else {
                    Color::BLACK
                },
                ..TextStyle::default()
            };
            canvas.draw_text(
                &self.label,
                Point::new(
                    self.bounds.x + self.box_size + self.spacing,
                    self.bounds.y + (self.bounds.height - 16.0) / 2.0,
                ),
                &style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let changed = match event {
            Event::MouseMove { position } => {
                self.hovered = !self.props.disabled && self.bounds.contains_point(position);
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => self.activate(ActivationSource::Pointer {
                position: *position,
            }),
            Event::KeyDown { key: Key::Space } if self.focused => {
                self.activate(ActivationSource::Keyboard { key: Key::Space })
            }
            Event::FocusIn => {
                self.focused = !self.props.disabled;
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            _ => None,
        };

        changed.map(|msg| Box::new(msg) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        !self.props.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.props.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value
            .as_deref()
            .or(if self.label.is_empty() {
                None
            } else {
                Some(self.label.as_str())
            })
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Checkbox
    }

    fn aria_attributes(&self) -> AriaAttributes {
        self.attributes().to_aria()
    }

    fn test_id(&self) -> Option<&str> {
        Some(self.test_id_value.as_deref().unwrap_or(DEFAULT_TEST_ID))
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Checkbox {
    fn brick_name(&self) -> &'static str {
        "Checkbox"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        ASSERTIONS
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        let aria = self.aria_attributes();
        let mut verification = BrickVerification {
            verification_time: Duration::from_micros(10),
            ..BrickVerification::default()
        };
        for assertion in ASSERTIONS {
            match assertion {
                BrickAssertion::AriaAttribute(name) if !aria.contains(name) => verification
                    .failed
                    .push((assertion.clone(), format!("missing {name}"))),
                _ => verification.passed.push(assertion.clone()),
            }
        }
        verification
    }

    fn to_html(&self) -> String {
        match self.build_element() {
            Ok(element) => element.to_html(),
            Err(e) => {
                warn!(error = %e, test_id = ?self.test_id_value, "checkbox failed to render");
                String::new()
            }
        }
    }

    fn to_css(&self) -> String {
        ".tristate-checkbox { display: inline-block; }".into()
    }
}
