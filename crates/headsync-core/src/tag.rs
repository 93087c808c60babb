//! The managed-tag description: tag name, selector, attributes, inner text.
//!
//! All four fields are independently settable; [`crate::reconcile`] only
//! acts when both the tag name and the selector are present and non-empty.

use smol_str::SmolStr;

/// A single attribute to apply to the managed element.
///
/// Pairs with an absent (or empty) name or value are skipped at apply time.
/// This is deliberate: bindings often resolve to nothing before their data
/// arrives, and a half-bound pair must not clobber the element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagAttribute {
    pub name: SmolStr,
    pub value: Option<SmolStr>,
}

impl TagAttribute {
    /// Create an attribute pair with both name and value.
    pub fn new(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a pair whose value is not yet bound.
    pub fn unbound(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// The `(name, value)` to apply, or None if either side is missing.
    pub fn applied(&self) -> Option<(&str, &str)> {
        if self.name.is_empty() {
            return None;
        }
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => Some((self.name.as_str(), value)),
            _ => None,
        }
    }
}

/// Description of one tag inside the head section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSpec {
    /// Element type to create when the selector matches nothing.
    pub tag_name: Option<SmolStr>,
    /// Selector identifying the managed element within the head.
    pub selector: Option<SmolStr>,
    /// Attribute pairs, applied in order.
    pub attributes: Vec<TagAttribute>,
    /// Text content; applied only when non-empty.
    pub inner_text: String,
}

impl TagSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<SmolStr>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    pub fn with_selector(mut self, selector: impl Into<SmolStr>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_attribute(mut self, attribute: TagAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_inner_text(mut self, inner_text: impl Into<String>) -> Self {
        self.inner_text = inner_text.into();
        self
    }

    /// Whether a reconcile pass may act on this spec.
    pub fn is_actionable(&self) -> bool {
        self.actionable().is_some()
    }

    /// The `(tag_name, selector)` pair, when both are present and non-empty.
    pub fn actionable(&self) -> Option<(&str, &str)> {
        match (self.tag_name.as_deref(), self.selector.as_deref()) {
            (Some(tag_name), Some(selector)) if !tag_name.is_empty() && !selector.is_empty() => {
                Some((tag_name, selector))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actionable_requires_both_fields() {
        let spec = TagSpec::new().with_tag_name("meta");
        assert!(!spec.is_actionable());

        let spec = spec.with_selector("meta[name=x]");
        assert_eq!(spec.actionable(), Some(("meta", "meta[name=x]")));
    }

    #[test]
    fn test_empty_strings_are_not_actionable() {
        let spec = TagSpec::new().with_tag_name("").with_selector("meta");
        assert!(!spec.is_actionable());

        let spec = TagSpec::new().with_tag_name("meta").with_selector("");
        assert!(!spec.is_actionable());
    }

    #[test]
    fn test_attribute_applied() {
        assert_eq!(
            TagAttribute::new("name", "x").applied(),
            Some(("name", "x"))
        );
        assert_eq!(TagAttribute::unbound("name").applied(), None);
        assert_eq!(TagAttribute::new("", "x").applied(), None);
        assert_eq!(TagAttribute::new("name", "").applied(), None);
    }
}
