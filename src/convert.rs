//! Indent-to-brace conversion
//!
//!     This module turns indentation-nested style sheets into brace-delimited CSS. The input
//!     is the "indented" flavour of SASS as it is typically hand written: selectors on their
//!     own line, declarations nested one level deeper, and `&` standing in for the enclosing
//!     selector. There are no variables, mixins or functions here; this is a text rewrite,
//!     not a compiler.
//!
//! The Conversion Pass
//!
//!     The conversion is a single forward pass over the source lines:
//!         1. Line classification. See [line_classification](line_classification).
//!            Each line is blank, a comment, a property (it contains a colon) or a selector.
//!            Non-passthrough lines also get an indent level: leading whitespace characters
//!            divided by the indent width, rounded down.
//!
//!         2. Context tracking. See [context_stack](context_stack).
//!            Open selectors live on a stack. A line with a shallower indent level closes
//!            every selector above it before it is emitted.
//!
//!         3. Emission. See [transformer](transformer).
//!            Properties get a `;` terminator, selectors get an opening ` {` and are pushed.
//!            Whatever is still open at the end of the document is closed.
//!
//! Known Quirks
//!
//!     Classification is purely textual. A selector carrying a pseudo-class (`a:hover`,
//!     `&:focus`) contains a colon and is therefore treated as a property. Tabs count as a
//!     single indentation character, same as a space. Both behaviours are relied upon by
//!     existing converted sheets and are kept as is.
//!
//!     Conversion never fails. Malformed input produces best-effort output, for instance a
//!     top-level `&` resolves against an empty parent.

pub mod context_stack;
pub mod line_classification;
pub mod transformer;

pub use context_stack::ContextStack;
pub use line_classification::{classify_line, indent_level, LineKind, TransformOptions};
pub use transformer::{convert_sass_to_css, convert_sass_to_css_with, IndentTransformer};
