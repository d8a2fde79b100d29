/// Named function declarations.
use tracing::trace;

use crate::scope::Scope;

/// A `function <header> { ... }` waiting to be written into a scope.
#[derive(Debug)]
pub struct FunctionDecl {
    /// Name and parameter list, e.g. `foo(a, b)`.
    header: String,
    body: Scope,
}

impl FunctionDecl {
    pub fn new(header: String, body: Scope) -> Self {
        Self { header, body }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Write the declaration into `owner` and return it.
    pub fn render_into(self, owner: Scope) -> Scope {
        trace!(header = %self.header, "writing function");
        owner.splice_block(format_args!("function {}", self.header), &self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsb;

    #[test]
    fn test_declare_function() {
        let body = jsb().assign("12").to("a").append("alert('a is '+a+');");
        let js = jsb().declare_function("foo(a, bar, c)", body).finalize();
        assert_eq!(
            js,
            "function foo(a, bar, c) {\na = 12;\nalert('a is '+a+');\n}\n"
        );
    }

    #[test]
    fn test_render_into_existing_statements() {
        let decl = FunctionDecl::new("noop()".into(), Scope::new());
        assert_eq!(decl.header(), "noop()");
        let js = decl.render_into(jsb().declare_var("x")).finalize();
        assert_eq!(js, "var x;\nfunction noop() {\n\n}\n");
    }

    #[test]
    fn test_function_body_from_text() {
        let js = jsb().declare_function("id(x)", "return x;").finalize();
        assert_eq!(js, "function id(x) {\nreturn x;\n}\n");
    }
}
