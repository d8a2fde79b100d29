/// Declarative build scripts: a JSON list of statements replayed through
/// the builder. This is what the `jsb` binary reads.
///
/// ```json
/// [
///   {"op": "var", "name": "x", "value": "13"},
///   {"op": "if", "branches": [{"condition": "x > 1", "body": [{"op": "line", "text": "go();"}]}]}
/// ]
/// ```
use serde::Deserialize;
use tracing::debug;

use crate::scope::{Scope, ScopeError};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("invalid build script: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Scope(#[from] ScopeError),
    #[error("'if' statement needs at least one branch")]
    EmptyConditional,
}

/// Top-level script: a bare statement array or `{"statements": [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Script {
    Statements(Vec<Statement>),
    Document { statements: Vec<Statement> },
}

impl Script {
    pub fn statements(&self) -> &[Statement] {
        match self {
            Script::Statements(s) => s,
            Script::Document { statements } => statements,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Statement {
    Var {
        name: String,
        #[serde(default)]
        value: Option<String>,
    },
    Assign {
        name: String,
        value: String,
    },
    Raw {
        text: String,
    },
    Line {
        text: String,
    },
    Scope {
        #[serde(default)]
        args: Option<String>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    If {
        branches: Vec<Branch>,
        #[serde(default, rename = "else")]
        otherwise: Option<Vec<Statement>>,
    },
    Function {
        header: String,
        #[serde(default)]
        body: Vec<Statement>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub condition: String,
    #[serde(default)]
    pub body: Vec<Statement>,
}

/// Parse a script and render it as JavaScript.
pub fn render(json: &str) -> Result<String, ScriptError> {
    let script: Script = serde_json::from_str(json)?;
    let statements = script.statements();
    debug!(statements = statements.len(), "rendering build script");
    Ok(build(statements)?.finalize())
}

/// Replay statements into a fresh root scope.
pub fn build(statements: &[Statement]) -> Result<Scope, ScriptError> {
    apply_all(Scope::new(), statements)
}

fn apply_all(scope: Scope, statements: &[Statement]) -> Result<Scope, ScriptError> {
    statements.iter().try_fold(scope, apply)
}

fn apply(scope: Scope, stmt: &Statement) -> Result<Scope, ScriptError> {
    let scope = match stmt {
        Statement::Var { name, value: None } => scope.declare_var(name),
        Statement::Var {
            name,
            value: Some(value),
        } => scope.declare_var_with(name, value),
        Statement::Assign { name, value } => scope.assign(value).to(name),
        Statement::Raw { text } => scope.append(text),
        Statement::Line { text } => scope.append_line(text),
        Statement::Scope { args, body } => {
            let inner = match args {
                Some(args) => scope.open_scope_with(args.as_str()),
                None => scope.open_scope(),
            };
            apply_all(inner, body)?.close_scope()?
        }
        Statement::If {
            branches,
            otherwise,
        } => {
            let (first, rest) = branches
                .split_first()
                .ok_or(ScriptError::EmptyConditional)?;
            let mut chain = scope.if_block(&first.condition, build(&first.body)?);
            for branch in rest {
                chain = chain.else_if(&branch.condition, build(&branch.body)?);
            }
            match otherwise {
                Some(body) => chain.else_block(build(body)?).end_if(),
                None => chain.end_if(),
            }
        }
        Statement::Function { header, body } => scope.declare_function(header, build(body)?),
    };
    Ok(scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_vars_and_assign() {
        let js = render(
            r#"[
                {"op": "var", "name": "x"},
                {"op": "var", "name": "y", "value": "2"},
                {"op": "assign", "name": "x", "value": "y * 2"}
            ]"#,
        )
        .unwrap();
        assert_eq!(js, "var x;\nvar y = 2;\nx = y * 2;\n");
    }

    #[test]
    fn test_render_document_form() {
        let js = render(r#"{"statements": [{"op": "line", "text": "go();"}]}"#).unwrap();
        assert_eq!(js, "go();\n");
    }

    #[test]
    fn test_render_scope_with_args() {
        let js = render(
            r#"[
                {"op": "var", "name": "x", "value": "123"},
                {"op": "scope", "args": "x, $", "body": [
                    {"op": "line", "text": "$('foo').bar(x);"}
                ]}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            js,
            "var x = 123;\n(function(x, $) {\n$('foo').bar(x);\n})(x, $)\n"
        );
    }

    #[test]
    fn test_render_conditional_chain() {
        let js = render(
            r#"[{"op": "if",
                 "branches": [
                    {"condition": "a", "body": [{"op": "raw", "text": "f();"}]},
                    {"condition": "b", "body": [{"op": "raw", "text": "g();"}]}
                 ],
                 "else": [{"op": "raw", "text": "h();"}]}]"#,
        )
        .unwrap();
        assert_eq!(
            js,
            "if (a) {\nf();\n}\nelse if (b) {\ng();\n}\nelse {\nh();\n}\n"
        );
    }

    #[test]
    fn test_render_function() {
        let js = render(
            r#"[{"op": "function", "header": "inc(n)", "body": [{"op": "raw", "text": "return n + 1;"}]}]"#,
        )
        .unwrap();
        assert_eq!(js, "function inc(n) {\nreturn n + 1;\n}\n");
    }

    #[test]
    fn test_empty_conditional_rejected() {
        let err = render(r#"[{"op": "if", "branches": []}]"#).unwrap_err();
        assert!(matches!(err, ScriptError::EmptyConditional));
    }

    #[test]
    fn test_unknown_op_rejected() {
        let err = render(r#"[{"op": "while", "text": "x"}]"#).unwrap_err();
        assert!(matches!(err, ScriptError::Json(_)));
        assert!(err.to_string().starts_with("invalid build script"));
    }
}
