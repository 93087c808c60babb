//! Compound selector subset for the in-memory head backend.
//!
//! Covers what head management needs: type selectors, `*`, `#id`, `.class`,
//! `[attr]`, and `[attr=value]` with bare or quoted values, plus compounds
//! of those (`meta[name=x]`, `link.canonical[rel]`). Combinators,
//! pseudo-classes, and selector lists are rejected with a parse error, the
//! analog of the native selector engine's `SyntaxError`.
//!
//! The browser backend does not use this module; it hands the raw selector
//! string to the native engine.

use smol_str::SmolStr;

use crate::error::HeadError;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Component {
    Universal,
    Type(SmolStr),
    Id(SmolStr),
    Class(SmolStr),
    AttrExists(SmolStr),
    AttrEquals(SmolStr, SmolStr),
}

/// A parsed compound selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    components: Vec<Component>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_')
}

/// Split off the leading identifier, returning `(ident, rest)`.
fn split_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

impl Selector {
    /// Parse a compound selector, rejecting anything outside the subset.
    pub fn parse(input: &str) -> Result<Self, HeadError> {
        let err = |reason: &'static str| HeadError::Selector {
            selector: input.to_string(),
            reason,
        };

        let mut rest = input.trim();
        if rest.is_empty() {
            return Err(err("empty selector"));
        }

        let mut components = Vec::new();
        while let Some(c) = rest.chars().next() {
            match c {
                '*' => {
                    if !components.is_empty() {
                        return Err(err("`*` must come first"));
                    }
                    components.push(Component::Universal);
                    rest = &rest[1..];
                }
                '#' => {
                    let (ident, r) = split_ident(&rest[1..]);
                    if ident.is_empty() {
                        return Err(err("expected identifier after `#`"));
                    }
                    components.push(Component::Id(ident.into()));
                    rest = r;
                }
                '.' => {
                    let (ident, r) = split_ident(&rest[1..]);
                    if ident.is_empty() {
                        return Err(err("expected identifier after `.`"));
                    }
                    components.push(Component::Class(ident.into()));
                    rest = r;
                }
                '[' => {
                    let r = rest[1..].trim_start();
                    let (name, r) = split_ident(r);
                    if name.is_empty() {
                        return Err(err("expected attribute name"));
                    }
                    let r = r.trim_start();
                    if let Some(r) = r.strip_prefix(']') {
                        components.push(Component::AttrExists(name.into()));
                        rest = r;
                    } else if let Some(r) = r.strip_prefix('=') {
                        let r = r.trim_start();
                        let (value, r): (SmolStr, &str) = match r.chars().next() {
                            Some(quote @ ('"' | '\'')) => {
                                let body = &r[1..];
                                let Some(close) = body.find(quote) else {
                                    return Err(err("unterminated quoted value"));
                                };
                                (body[..close].into(), &body[close + 1..])
                            }
                            _ => {
                                let (value, r) = split_ident(r);
                                if value.is_empty() {
                                    return Err(err("expected attribute value"));
                                }
                                (value.into(), r)
                            }
                        };
                        let r = r.trim_start();
                        let Some(r) = r.strip_prefix(']') else {
                            return Err(err("expected `]`"));
                        };
                        components.push(Component::AttrEquals(name.into(), value));
                        rest = r;
                    } else {
                        return Err(err("expected `]` or `=`"));
                    }
                }
                ' ' | '\t' | '\n' | '>' | '+' | '~' => {
                    return Err(err("combinators are not supported"));
                }
                ',' => return Err(err("selector lists are not supported")),
                ':' => return Err(err("pseudo-classes are not supported")),
                _ if is_ident_char(c) => {
                    if !components.is_empty() {
                        return Err(err("type selector must come first"));
                    }
                    let (ident, r) = split_ident(rest);
                    components.push(Component::Type(ident.into()));
                    rest = r;
                }
                _ => return Err(err("unexpected character")),
            }
        }

        Ok(Self { components })
    }

    /// Whether an element with the given tag name and attributes matches.
    ///
    /// `attr` looks up an attribute value by name. Tag names compare ASCII
    /// case-insensitively, as in the HTML DOM.
    pub fn matches<'a>(&self, tag_name: &str, attr: impl Fn(&str) -> Option<&'a str>) -> bool {
        self.components.iter().all(|component| match component {
            Component::Universal => true,
            Component::Type(name) => name.eq_ignore_ascii_case(tag_name),
            Component::Id(id) => attr("id") == Some(id.as_str()),
            Component::Class(class) => attr("class")
                .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class)),
            Component::AttrExists(name) => attr(name.as_str()).is_some(),
            Component::AttrEquals(name, value) => attr(name.as_str()) == Some(value.as_str()),
        })
    }
}
