/// Scope: the unit every statement is written into.
///
/// A root scope renders its statements verbatim. A nested scope is opened
/// from a parent, owns that parent until it is closed, and renders as an
/// immediately-invoked closure that gets spliced back into the parent.
use std::fmt;

use tracing::{debug, trace};

use crate::buffer::TextBuffer;
use crate::conditional::IfChain;
use crate::function::FunctionDecl;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("can't close the top-level scope")]
    CloseRoot,
}

#[derive(Debug, Clone, Default)]
pub struct Scope {
    buf: TextBuffer,
    /// Suspended enclosing scope, handed back by `close_scope`.
    parent: Option<Box<Scope>>,
    /// Argument list used for both the closure parameters and the call.
    args: Option<String>,
}

impl Scope {
    /// A new top-level scope.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of enclosing scopes; 0 for a root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cur = self.parent.as_deref();
        while let Some(scope) = cur {
            depth += 1;
            cur = scope.parent.as_deref();
        }
        depth
    }

    pub fn args(&self) -> Option<&str> {
        self.args.as_deref()
    }

    /// Statements written so far, without any closure wrapping.
    pub fn body(&self) -> &str {
        self.buf.as_str()
    }

    /// `var <name>;`
    pub fn declare_var(mut self, name: impl fmt::Display) -> Self {
        self.buf.append("var ").append(name).append(";").newline();
        self
    }

    /// `var <name> = <value>;`
    pub fn declare_var_with(mut self, name: impl fmt::Display, value: impl fmt::Display) -> Self {
        self.buf
            .append("var ")
            .append(name)
            .append(" = ")
            .append(value)
            .append(";")
            .newline();
        self
    }

    /// Start `<name> = <value>;`. The statement is written by [`Assignment::to`].
    pub fn assign(self, value: impl fmt::Display) -> Assignment {
        Assignment {
            scope: self,
            value: value.to_string(),
        }
    }

    /// Raw text, no terminator.
    pub fn append(mut self, text: impl fmt::Display) -> Self {
        self.buf.append(text);
        self
    }

    pub fn append_line(mut self, text: impl fmt::Display) -> Self {
        self.buf.append(text).newline();
        self
    }

    /// Open a nested closure scope with an empty argument list.
    pub fn open_scope(self) -> Scope {
        self.open(None)
    }

    /// Open a nested closure scope. `args` is emitted verbatim as both the
    /// parameter list and the invocation arguments, e.g. `"x, $"`.
    pub fn open_scope_with(self, args: impl Into<String>) -> Scope {
        self.open(Some(args.into()))
    }

    fn open(self, args: Option<String>) -> Scope {
        trace!(depth = self.depth() + 1, args = ?args, "opening scope");
        Scope {
            buf: TextBuffer::new(),
            parent: Some(Box::new(self)),
            args,
        }
    }

    /// Render this scope. Roots render their body as-is; nested scopes are
    /// wrapped as `(function(<args>) {\n<body>})(<args>)\n`.
    ///
    /// Computed from the current state on every call.
    pub fn finalize(&self) -> String {
        if self.is_root() {
            return self.buf.render();
        }
        let args = self.args().unwrap_or("");
        let mut out = self.buf.clone();
        out.prepend(format_args!("(function({args}) {{\n"))
            .append("})(")
            .append(args)
            .append(")")
            .newline();
        out.into_string()
    }

    /// Finalize this scope into its parent and return the parent.
    pub fn close_scope(self) -> Result<Scope, ScopeError> {
        if self.is_root() {
            return Err(ScopeError::CloseRoot);
        }
        let depth = self.depth();
        let rendered = self.finalize();
        let Some(parent) = self.parent else {
            return Err(ScopeError::CloseRoot);
        };
        debug!(depth, args = ?self.args, len = rendered.len(), "closing scope");
        Ok(parent.append(rendered))
    }

    /// Open an `if (<condition>)` chain. Nothing is written until the chain
    /// is advanced or terminated.
    pub fn if_block(self, condition: impl fmt::Display, block: impl Into<Scope>) -> IfChain {
        IfChain::new(self, condition.to_string(), block.into())
    }

    /// An `if` with no `else` branches, written immediately.
    pub fn if_then(self, condition: impl fmt::Display, block: impl Into<Scope>) -> Scope {
        self.if_block(condition, block).end_if()
    }

    /// `function <header> {\n<body>\n}\n`, where `header` is e.g. `foo(a, b)`.
    pub fn declare_function(self, header: impl fmt::Display, body: impl Into<Scope>) -> Scope {
        FunctionDecl::new(header.to_string(), body.into()).render_into(self)
    }

    /// Write `<opener> {\n<finalized block>\n}\n`.
    pub(crate) fn splice_block(mut self, opener: impl fmt::Display, block: &Scope) -> Scope {
        self.buf
            .append(opener)
            .append(" {")
            .newline()
            .append(block.finalize())
            .newline()
            .append("}")
            .newline();
        self
    }
}

impl From<&str> for Scope {
    fn from(text: &str) -> Self {
        Scope::new().append(text)
    }
}

impl From<String> for Scope {
    fn from(text: String) -> Self {
        Scope::new().append(text)
    }
}

/// Pending `<name> = <value>;` statement.
#[must_use = "an assignment writes nothing until `to` names its target"]
#[derive(Debug)]
pub struct Assignment {
    scope: Scope,
    value: String,
}

impl Assignment {
    pub fn to(self, name: impl fmt::Display) -> Scope {
        let Assignment { scope, value } = self;
        scope.append(name).append(" = ").append(value).append_line(";")
    }
}
