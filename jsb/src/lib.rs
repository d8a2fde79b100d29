//! Fluent builder for JavaScript source text.
//!
//! ```
//! use jsb::jsb;
//!
//! let js = jsb()
//!     .declare_var_with("x", "123")
//!     .open_scope_with("x, $")
//!     .append_line("$('foo').bar(x);")
//!     .close_scope()
//!     .unwrap()
//!     .finalize();
//!
//! assert_eq!(js, "var x = 123;\n(function(x, $) {\n$('foo').bar(x);\n})(x, $)\n");
//! ```
pub mod buffer;
pub mod conditional;
pub mod function;
pub mod scope;
pub mod script;

pub use buffer::TextBuffer;
pub use conditional::{ElseChain, IfChain};
pub use function::FunctionDecl;
pub use scope::{Assignment, Scope, ScopeError};
pub use script::ScriptError;

/// A new top-level scope.
pub fn jsb() -> Scope {
    Scope::new()
}

/// A top-level scope holding `text` verbatim; handy as an `if` or function body.
pub fn jsb_with(text: impl std::fmt::Display) -> Scope {
    Scope::new().append(text)
}
