//! Indent-to-brace transformer
//!
//!     A stateful machine fed one line at a time. It tracks open selectors on a
//!     [ContextStack](super::context_stack::ContextStack) and turns indentation changes into
//!     closing braces, the same way an indent/dedent pass would feed a brace-based grammar.
//!
//! Algorithm
//!
//!     1. Blank and comment lines are emitted as they are. They never open or close anything.
//!     2. Any other line has an indent level. While more selectors are open than that level,
//!        emit a closing brace and pop.
//!     3. A property is emitted with a `;` appended unless it already ends with one.
//!     4. A selector is emitted with ` {` appended and pushed. If it holds a `&`, the first
//!        one is replaced by the nearest open selector and the replaced text is what gets
//!        emitted and pushed.
//!     5. At the end of the document every remaining selector is closed.
//!
//!     Closing braces are indented to the level of the selector they close.
use super::context_stack::{ContextStack, PARENT_REFERENCE};
use super::line_classification::{
    classify_line, indent_level, leading_whitespace, trim_line, LineKind, TransformOptions,
};

/// Convert an indentation-nested style sheet to brace-delimited CSS with the default options.
pub fn convert_sass_to_css(source: &str) -> String {
    convert_sass_to_css_with(source, &TransformOptions::default())
}

/// Convert an indentation-nested style sheet to brace-delimited CSS.
///
/// Never fails: malformed input produces best-effort output.
pub fn convert_sass_to_css_with(source: &str, options: &TransformOptions) -> String {
    let mut transformer = IndentTransformer::new(options.clone());
    for line in source.split('\n') {
        transformer.process_line(line);
    }
    transformer.finish()
}

/// Single-pass line transformer. One instance handles exactly one document.
pub struct IndentTransformer {
    options: TransformOptions,
    stack: ContextStack,
    output: Vec<String>,
}

impl IndentTransformer {
    pub fn new(options: TransformOptions) -> Self {
        Self {
            options,
            stack: ContextStack::new(),
            output: Vec::new(),
        }
    }

    /// Currently open selectors.
    pub fn contexts(&self) -> &ContextStack {
        &self.stack
    }

    /// Feed the next source line (without its newline).
    pub fn process_line(&mut self, line: &str) {
        let kind = classify_line(line, &self.options);
        if kind.is_passthrough() {
            self.output.push(line.to_string());
            return;
        }

        let level = indent_level(line, &self.options);
        self.close_until(level);

        let trimmed = trim_line(line);
        match kind {
            LineKind::Property => {
                if trimmed.ends_with(';') {
                    self.output.push(line.to_string());
                } else {
                    self.output.push(format!("{line};"));
                }
            }
            _ if trimmed.contains(PARENT_REFERENCE) => {
                let selector = self.stack.resolve_parent_reference(trimmed);
                self.output
                    .push(format!("{}{} {{", leading_whitespace(line), selector));
                self.stack.push(selector);
            }
            _ => {
                self.output.push(format!("{line} {{"));
                self.stack.push(trimmed.to_string());
            }
        }
    }

    /// Close everything still open and return the converted document.
    pub fn finish(mut self) -> String {
        self.close_until(0);
        self.output.join("\n")
    }

    /// Pop and close selectors until at most `level` remain open.
    fn close_until(&mut self, level: usize) {
        while self.stack.depth() > level {
            let padding = " ".repeat((self.stack.depth() - 1) * self.options.indent_unit());
            self.output.push(format!("{padding}}}"));
            self.stack.pop();
        }
    }
}
