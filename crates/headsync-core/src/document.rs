//! Head-document backends.
//!
//! `HeadDocument` is the seam between the reconcile pass and a concrete
//! head section. `PlainHead` is the field-based implementation used
//! natively and in tests; the browser implementation lives in
//! `headsync-browser`.

use smol_str::SmolStr;

use crate::error::HeadError;
use crate::selector::Selector;

/// Backend trait over a head section.
///
/// Implementations resolve elements by selector and mutate them in place.
/// Element handles are backend-specific: the browser backend hands out real
/// DOM elements, the plain backend hands out indices into its child list.
/// Handles are re-derived by selector lookup on every pass, never cached
/// across passes.
pub trait HeadDocument {
    /// Handle to an element inside the head.
    type Element;

    /// First element in the head matching `selector`, if any.
    fn query(&mut self, selector: &str) -> Result<Option<Self::Element>, HeadError>;

    /// Create an element of type `tag_name` and append it to the head.
    fn create_and_append(&mut self, tag_name: &str) -> Result<Self::Element, HeadError>;

    /// Set an attribute on the element, overwriting any existing value.
    fn set_attribute(
        &mut self,
        element: &mut Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), HeadError>;

    /// Replace the element's text content.
    fn set_text(&mut self, element: &mut Self::Element, text: &str) -> Result<(), HeadError>;
}

/// An element held by [`PlainHead`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainElement {
    /// Lowercased tag name.
    pub tag_name: SmolStr,
    /// Attribute pairs in first-set order.
    pub attributes: Vec<(SmolStr, SmolStr)>,
    /// Text content.
    pub text: String,
}

impl PlainElement {
    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| n.as_str() == name) {
            slot.1 = value.into();
        } else {
            self.attributes.push((name.into(), value.into()));
        }
    }
}

/// In-memory head section.
///
/// Stores children as plain structs and resolves selectors with the
/// [`Selector`] subset. Use this for native rendering targets and as the
/// test double for anything written against [`HeadDocument`].
#[derive(Clone, Debug, Default)]
pub struct PlainHead {
    children: Vec<PlainElement>,
}

/// Element names per the DOM: an ASCII letter, then letters, digits, or `-`.
/// The plain analog of the native `InvalidCharacterError`.
fn is_valid_tag_name(tag_name: &str) -> bool {
    let mut chars = tag_name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl PlainHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[PlainElement] {
        &self.children
    }

    pub fn element(&self, index: usize) -> Option<&PlainElement> {
        self.children.get(index)
    }

    fn child_mut(&mut self, index: usize) -> Result<&mut PlainElement, HeadError> {
        self.children
            .get_mut(index)
            .ok_or_else(|| HeadError::Platform("stale element handle".to_string()))
    }
}

impl HeadDocument for PlainHead {
    type Element = usize;

    fn query(&mut self, selector: &str) -> Result<Option<usize>, HeadError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .children
            .iter()
            .position(|el| selector.matches(&el.tag_name, |name| el.attribute(name))))
    }

    fn create_and_append(&mut self, tag_name: &str) -> Result<usize, HeadError> {
        if !is_valid_tag_name(tag_name) {
            return Err(HeadError::TagName(tag_name.into()));
        }
        self.children.push(PlainElement {
            tag_name: tag_name.to_ascii_lowercase().into(),
            ..PlainElement::default()
        });
        Ok(self.children.len() - 1)
    }

    fn set_attribute(
        &mut self,
        element: &mut usize,
        name: &str,
        value: &str,
    ) -> Result<(), HeadError> {
        self.child_mut(*element)?.set_attribute(name, value);
        Ok(())
    }

    fn set_text(&mut self, element: &mut usize, text: &str) -> Result<(), HeadError> {
        self.child_mut(*element)?.text = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_query() {
        let mut head = PlainHead::new();
        assert_eq!(head.query("meta[name=x]"), Ok(None));

        let mut el = head.create_and_append("META").unwrap();
        head.set_attribute(&mut el, "name", "x").unwrap();

        let found = head.query("meta[name=x]").unwrap();
        assert_eq!(found, Some(el));
        assert_eq!(head.element(el).unwrap().tag_name, "meta");
    }

    #[test]
    fn test_set_attribute_overwrites_in_place() {
        let mut head = PlainHead::new();
        let mut el = head.create_and_append("meta").unwrap();
        head.set_attribute(&mut el, "name", "x").unwrap();
        head.set_attribute(&mut el, "content", "a").unwrap();
        head.set_attribute(&mut el, "name", "y").unwrap();

        let element = head.element(el).unwrap();
        let expected: Vec<(SmolStr, SmolStr)> =
            vec![("name".into(), "y".into()), ("content".into(), "a".into())];
        assert_eq!(element.attributes, expected);
    }

    #[test]
    fn test_invalid_tag_name() {
        let mut head = PlainHead::new();
        assert_eq!(
            head.create_and_append("not a tag"),
            Err(HeadError::TagName("not a tag".into()))
        );
        assert_eq!(
            head.create_and_append(""),
            Err(HeadError::TagName("".into()))
        );
        assert_eq!(
            head.create_and_append("1up"),
            Err(HeadError::TagName("1up".into()))
        );
    }

    #[test]
    fn test_query_surfaces_parse_errors() {
        let mut head = PlainHead::new();
        assert!(matches!(
            head.query("meta > link"),
            Err(HeadError::Selector { .. })
        ));
    }

    #[test]
    fn test_query_returns_first_match() {
        let mut head = PlainHead::new();
        let mut a = head.create_and_append("meta").unwrap();
        head.set_attribute(&mut a, "name", "x").unwrap();
        let mut b = head.create_and_append("meta").unwrap();
        head.set_attribute(&mut b, "name", "x").unwrap();

        assert_eq!(head.query("meta[name=x]"), Ok(Some(a)));
    }
}
