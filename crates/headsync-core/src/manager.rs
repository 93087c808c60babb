//! Observable wrapper: four bound fields driving reconciliation.
//!
//! `HeadTagManager` owns a [`TagSpec`] and a backend. Every setter records
//! the new value, notifies watchers, and re-runs [`reconcile`] - the
//! explicit "on any field change, recompute" shape. Hosting frameworks
//! wire their own change notifications (signals, observed properties) to
//! these setters.

use smol_str::SmolStr;
use tracing::trace;

use crate::document::HeadDocument;
use crate::error::HeadError;
use crate::reconcile::{Outcome, reconcile};
use crate::tag::{TagAttribute, TagSpec};

type Watcher = Box<dyn FnMut(&TagSpec)>;

/// Declaratively manages one tag inside a head section.
///
/// The managed element is never cached: each pass re-derives it by selector
/// lookup, so externally created elements are adopted and externally
/// removed ones are recreated on the next change.
pub struct HeadTagManager<H: HeadDocument> {
    spec: TagSpec,
    head: H,
    watchers: Vec<Watcher>,
}

impl<H: HeadDocument> HeadTagManager<H> {
    /// Create a manager with an empty spec. Nothing happens until both the
    /// tag name and the selector have been set.
    pub fn new(head: H) -> Self {
        Self {
            spec: TagSpec::new(),
            head,
            watchers: Vec::new(),
        }
    }

    /// Create a manager from a prepared spec, running one initial pass.
    pub fn with_spec(head: H, spec: TagSpec) -> Result<Self, HeadError> {
        let mut manager = Self {
            spec,
            head,
            watchers: Vec::new(),
        };
        reconcile(&manager.spec, &mut manager.head)?;
        Ok(manager)
    }

    pub fn spec(&self) -> &TagSpec {
        &self.spec
    }

    pub fn head(&self) -> &H {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut H {
        &mut self.head
    }

    pub fn into_head(self) -> H {
        self.head
    }

    /// Register a watcher, invoked with the spec after every field change.
    pub fn watch(&mut self, watcher: impl FnMut(&TagSpec) + 'static) {
        self.watchers.push(Box::new(watcher));
    }

    pub fn set_tag_name(&mut self, tag_name: Option<SmolStr>) -> Result<Outcome, HeadError> {
        self.spec.tag_name = tag_name;
        self.changed()
    }

    pub fn set_selector(&mut self, selector: Option<SmolStr>) -> Result<Outcome, HeadError> {
        self.spec.selector = selector;
        self.changed()
    }

    pub fn set_attributes(&mut self, attributes: Vec<TagAttribute>) -> Result<Outcome, HeadError> {
        self.spec.attributes = attributes;
        self.changed()
    }

    pub fn set_inner_text(&mut self, inner_text: impl Into<String>) -> Result<Outcome, HeadError> {
        self.spec.inner_text = inner_text.into();
        self.changed()
    }

    fn changed(&mut self) -> Result<Outcome, HeadError> {
        trace!(watchers = self.watchers.len(), "spec changed, notifying");
        for watcher in &mut self.watchers {
            watcher(&self.spec);
        }
        reconcile(&self.spec, &mut self.head)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::document::PlainHead;

    fn make_manager() -> HeadTagManager<PlainHead> {
        HeadTagManager::new(PlainHead::new())
    }

    #[test]
    fn test_setters_drive_reconciliation() {
        let mut manager = make_manager();

        // Half-bound: nothing to do yet.
        let outcome = manager.set_tag_name(Some("meta".into())).unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(manager.head().is_empty());

        // Second field completes the spec and the element appears.
        let outcome = manager.set_selector(Some("meta[name=x]".into())).unwrap();
        assert_eq!(outcome, Outcome::Created);
        assert_eq!(manager.head().len(), 1);

        let outcome = manager
            .set_attributes(vec![
                TagAttribute::new("name", "x"),
                TagAttribute::new("content", "y"),
            ])
            .unwrap();
        assert_eq!(outcome, Outcome::Updated);
        assert_eq!(manager.head().len(), 1);
        assert_eq!(
            manager.head().element(0).unwrap().attribute("content"),
            Some("y")
        );
    }

    #[test]
    fn test_inner_text_setter() {
        let mut manager = make_manager();
        manager.set_tag_name(Some("title".into())).unwrap();
        manager.set_selector(Some("title".into())).unwrap();
        manager.set_inner_text("hello").unwrap();

        assert_eq!(manager.head().element(0).unwrap().text, "hello");
    }

    #[test]
    fn test_watchers_observe_every_change() {
        let mut manager = make_manager();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        manager.watch(move |spec| sink.borrow_mut().push(spec.clone()));

        manager.set_tag_name(Some("meta".into())).unwrap();
        manager.set_inner_text("x").unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].tag_name.as_deref(), Some("meta"));
        assert_eq!(seen[1].inner_text, "x");
    }

    #[test]
    fn test_with_spec_runs_initial_pass() {
        let spec = TagSpec::new()
            .with_tag_name("meta")
            .with_selector("meta[charset]")
            .with_attribute(TagAttribute::new("charset", "utf-8"));

        let manager = HeadTagManager::with_spec(PlainHead::new(), spec).unwrap();
        assert_eq!(manager.head().len(), 1);
        assert_eq!(
            manager.head().element(0).unwrap().attribute("charset"),
            Some("utf-8")
        );
    }

    #[test]
    fn test_adopts_externally_created_element() {
        let mut head = PlainHead::new();
        let mut el = head.create_and_append("meta").unwrap();
        head.set_attribute(&mut el, "name", "x").unwrap();

        let mut manager = HeadTagManager::new(head);
        manager.set_tag_name(Some("meta".into())).unwrap();
        manager.set_selector(Some("meta[name=x]".into())).unwrap();
        manager
            .set_attributes(vec![TagAttribute::new("content", "y")])
            .unwrap();

        // Updated in place, not duplicated.
        assert_eq!(manager.head().len(), 1);
        assert_eq!(
            manager.head().element(0).unwrap().attribute("content"),
            Some("y")
        );
    }

    #[test]
    fn test_setter_surfaces_backend_error() {
        let mut manager = make_manager();
        manager.set_tag_name(Some("meta".into())).unwrap();

        let result = manager.set_selector(Some("meta > link".into()));
        assert!(matches!(result, Err(HeadError::Selector { .. })));
    }
}
