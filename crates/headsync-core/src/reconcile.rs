//! The head-tag reconciliation pass.
//!
//! One routine: make the head element described by a [`TagSpec`] exist and
//! carry the spec's attributes and text. Attributes absent from the spec
//! are left untouched, so repeated passes converge instead of thrashing
//! values other code may have set.

use tracing::{debug, trace};

use crate::document::HeadDocument;
use crate::error::HeadError;
use crate::tag::TagSpec;

/// What a reconcile pass did to the head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Tag name or selector missing; the head was not touched.
    Skipped,
    /// No element matched the selector; one was created and filled in.
    Created,
    /// An existing element matched and was updated in place.
    Updated,
}

/// Ensure the head element described by `spec` exists and is up to date.
///
/// 1. Skip silently unless both tag name and selector are present.
/// 2. Find the first head element matching the selector.
/// 3. Create and append one of the spec's tag type on a miss.
/// 4. Apply each fully-bound attribute pair in order, overwriting.
/// 5. Set the text content when the spec's inner text is non-empty.
///
/// Backend failures (malformed selector, bad tag name, any DOM exception)
/// propagate unchanged; there are no retries.
pub fn reconcile<H: HeadDocument>(spec: &TagSpec, head: &mut H) -> Result<Outcome, HeadError> {
    let Some((tag_name, selector)) = spec.actionable() else {
        trace!("reconcile skipped: tag name or selector missing");
        return Ok(Outcome::Skipped);
    };

    let (mut element, outcome) = match head.query(selector)? {
        Some(element) => (element, Outcome::Updated),
        None => {
            debug!(tag_name, selector, "no match in head, creating element");
            (head.create_and_append(tag_name)?, Outcome::Created)
        }
    };

    for attribute in &spec.attributes {
        let Some((name, value)) = attribute.applied() else {
            trace!(name = %attribute.name, "skipping unbound attribute");
            continue;
        };
        head.set_attribute(&mut element, name, value)?;
    }

    if !spec.inner_text.is_empty() {
        head.set_text(&mut element, &spec.inner_text)?;
    }

    trace!(tag_name, selector, ?outcome, "reconcile pass complete");
    Ok(outcome)
}
