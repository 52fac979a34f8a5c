//! Stack of open selector contexts, one entry per nesting level.

/// Marker replaced by the enclosing selector.
pub const PARENT_REFERENCE: char = '&';

#[derive(Debug, Default, Clone)]
pub struct ContextStack {
    contexts: Vec<String>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn push(&mut self, selector: String) {
        self.contexts.push(selector);
    }

    pub fn pop(&mut self) -> Option<String> {
        self.contexts.pop()
    }

    /// Nearest enclosing selector, if any.
    pub fn parent(&self) -> Option<&str> {
        self.contexts.last().map(String::as_str)
    }

    /// Replace the first `&` in `selector` with the nearest enclosing selector.
    ///
    /// With nothing open the reference resolves to the empty string, so `&.x` at the top
    /// level becomes `.x`. Only one level is resolved; the parent is used verbatim.
    pub fn resolve_parent_reference(&self, selector: &str) -> String {
        selector.replacen(PARENT_REFERENCE, self.parent().unwrap_or(""), 1)
    }

    /// Open selectors, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(String::as_str)
    }
}
