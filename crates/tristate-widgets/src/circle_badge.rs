//! Circular badge rendered as a configurable host element.
//!
//! The badge always carries `CircleBadge` and a size class. Owner classes are
//! merged in without duplicates, and the single icon child gets
//! `CircleBadge-icon` added to whatever classes it already has.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;
use tristate_core::{
    Brick, BrickAssertion, BrickVerification, ClassList, CoreResult, Element, ElementTag,
};

const BADGE_CLASS: &str = "CircleBadge";
const ICON_CLASS: &str = "CircleBadge-icon";

/// Badge diameter variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    /// Small badge
    Small,
    /// Medium badge
    #[default]
    Medium,
    /// Large badge
    Large,
}

impl BadgeSize {
    /// Modifier class for this size.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Small => "CircleBadge--small",
            Self::Medium => "CircleBadge--medium",
            Self::Large => "CircleBadge--large",
        }
    }
}

/// Circular badge.
#[derive(Debug, Clone, Default)]
pub struct CircleBadge {
    tag: ElementTag,
    size: BadgeSize,
    bg: Option<String>,
    title: Option<String>,
    class_name: ClassList,
    attributes: Vec<(String, String)>,
    icon: Option<Element>,
}

impl CircleBadge {
    /// Create a medium `div` badge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render as a different host element (`"a"`, `"span"`, ...).
    pub fn is(mut self, tag: &str) -> CoreResult<Self> {
        self.tag = ElementTag::parse(tag)?;
        Ok(self)
    }

    /// Set the size variant.
    #[must_use]
    pub const fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Background color token; renders as `bg-<color>`.
    #[must_use]
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Set the `title` attribute.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Owner-supplied classes.
    #[must_use]
    pub fn class_name(mut self, classes: &str) -> Self {
        self.class_name.extend_str(classes);
        self
    }

    /// Pass-through attribute (`href`, `aria-label`, ...). Validated at render.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the icon child. Replaces any previous icon.
    #[must_use]
    pub fn icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Host tag.
    #[must_use]
    pub const fn tag(&self) -> &ElementTag {
        &self.tag
    }

    /// Build the element tree.
    pub fn render(&self) -> CoreResult<Element> {
        let mut root = Element::new(self.tag.clone())
            .class(BADGE_CLASS)
            .class(self.size.class());
        if let Some(bg) = &self.bg {
            root.classes_mut().add(&format!("bg-{bg}"));
        }
        root.classes_mut().merge(&self.class_name);

        if let Some(title) = &self.title {
            root.set_attr("title", title.as_str())?;
        }
        for (name, value) in &self.attributes {
            root.set_attr(name, value.as_str())?;
        }

        if let Some(icon) = &self.icon {
            let mut icon = icon.clone();
            icon.classes_mut().add(ICON_CLASS);
            root = root.child(icon);
        }
        Ok(root)
    }
}

impl Brick for CircleBadge {
    fn brick_name(&self) -> &'static str {
        "CircleBadge"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16)]
    }

    fn verify(&self) -> BrickVerification {
        let mut verification = BrickVerification {
            verification_time: Duration::from_micros(5),
            ..BrickVerification::default()
        };
        match self.render() {
            Ok(_) => verification.passed.extend_from_slice(self.assertions()),
            Err(e) => verification
                .failed
                .push((BrickAssertion::ElementValid, e.to_string())),
        }
        verification
    }

    fn to_html(&self) -> String {
        match self.render() {
            Ok(element) => element.to_html(),
            Err(e) => {
                warn!(error = %e, tag = self.tag.as_str(), "circle badge failed to render");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristate_core::Node;

    fn img(classes: &str) -> Element {
        Element::parse("img")
            .expect("tag")
            .class(classes)
            .attr("alt", "")
            .expect("attr")
            .attr("src", "primer.jpg")
            .expect("attr")
    }

    fn icon_of(el: &Element) -> &Element {
        match &el.children()[0] {
            Node::Element(e) => e,
            Node::Text(_) => panic!("Expected element child"),
        }
    }

    #[test]
    fn test_renders_medium_by_default() {
        let el = CircleBadge::new().render().expect("render");
        assert_eq!(el.tag().as_str(), "div");
        assert!(el.classes().contains("CircleBadge--medium"));
    }

    #[test]
    fn test_respects_is_tag() {
        let html = CircleBadge::new()
            .is("a")
            .expect("tag")
            .attr("href", "https://github.com")
            .icon(img(""))
            .to_html();
        assert_eq!(
            html,
            r#"<a class="CircleBadge CircleBadge--medium" href="https://github.com"><img class="CircleBadge-icon" alt="" src="primer.jpg"/></a>"#
        );
    }

    #[test]
    fn test_invalid_tag_rejected() {
        assert!(CircleBadge::new().is("not a tag").is_err());
    }

    #[test]
    fn test_applies_title() {
        let el = CircleBadge::new().title("primer logo").render().expect("render");
        assert_eq!(el.get_attr("title"), Some("primer logo"));
    }

    #[test]
    fn test_adds_bg_class() {
        let el = CircleBadge::new().bg("blue").render().expect("render");
        assert!(el.classes().contains("bg-blue"));
    }

    #[test]
    fn test_owner_classes_merged_without_duplicates() {
        let el = CircleBadge::new()
            .size(BadgeSize::Large)
            .class_name("CircleBadge custom custom")
            .render()
            .expect("render");
        assert_eq!(
            el.classes().to_string(),
            "CircleBadge CircleBadge--large custom"
        );
    }

    #[test]
    fn test_adds_icon_class_to_child() {
        let el = CircleBadge::new().icon(img("")).render().expect("render");
        assert!(icon_of(&el).classes().contains(ICON_CLASS));
    }

    #[test]
    fn test_does_not_duplicate_icon_class() {
        let el = CircleBadge::new()
            .icon(img("CircleBadge-icon"))
            .render()
            .expect("render");
        assert_eq!(icon_of(&el).classes().to_string(), "CircleBadge-icon");
    }

    #[test]
    fn test_preserves_child_class_names() {
        let el = CircleBadge::new().icon(img("primer")).render().expect("render");
        let classes = icon_of(&el).classes();
        assert!(classes.contains("primer"));
        assert!(classes.contains(ICON_CLASS));
        assert_eq!(el.children().len(), 1);
    }

    #[test]
    fn test_bad_attribute_fails_verification() {
        let badge = CircleBadge::new().attr("bad name", "x");
        assert!(!badge.can_render());
        assert!(badge.to_html().is_empty());
        assert!(CircleBadge::new().can_render());
    }
}
