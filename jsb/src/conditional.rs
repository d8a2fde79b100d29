/// if / else if / else chains.
///
/// A chain holds exactly one pending clause plus the scope it will be
/// written into. Advancing the chain writes the pending clause and queues
/// the next one; `end_if` writes the last clause and hands the scope back.
/// The scope is only reachable through `end_if`, so a chain can't be left
/// half-written.
use std::fmt;

use tracing::trace;

use crate::scope::Scope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    If,
    ElseIf,
}

impl Keyword {
    fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::ElseIf => "else if",
        }
    }
}

#[derive(Debug)]
struct Clause {
    keyword: Keyword,
    condition: String,
    block: Scope,
}

impl Clause {
    fn write_into(self, owner: Scope) -> Scope {
        trace!(keyword = self.keyword.as_str(), condition = %self.condition, "writing clause");
        let opener = format!("{} ({})", self.keyword.as_str(), self.condition);
        owner.splice_block(opener, &self.block)
    }
}

/// An open `if` or `else if` clause.
#[must_use = "a conditional writes nothing until `end_if` is called"]
#[derive(Debug)]
pub struct IfChain {
    owner: Scope,
    pending: Clause,
}

impl IfChain {
    pub(crate) fn new(owner: Scope, condition: String, block: Scope) -> Self {
        Self {
            owner,
            pending: Clause {
                keyword: Keyword::If,
                condition,
                block,
            },
        }
    }

    /// Write the pending clause and open `else if (<condition>)`.
    pub fn else_if(self, condition: impl fmt::Display, block: impl Into<Scope>) -> IfChain {
        let owner = self.pending.write_into(self.owner);
        IfChain {
            owner,
            pending: Clause {
                keyword: Keyword::ElseIf,
                condition: condition.to_string(),
                block: block.into(),
            },
        }
    }

    /// Write the pending clause and open the final `else`.
    pub fn else_block(self, block: impl Into<Scope>) -> ElseChain {
        ElseChain {
            owner: self.pending.write_into(self.owner),
            block: block.into(),
        }
    }

    /// Write the pending clause and return the owning scope.
    pub fn end_if(self) -> Scope {
        self.pending.write_into(self.owner)
    }
}

/// A pending `else` block; always the last link of a chain.
#[must_use = "an else block writes nothing until `end_if` is called"]
#[derive(Debug)]
pub struct ElseChain {
    owner: Scope,
    block: Scope,
}

impl ElseChain {
    pub fn end_if(self) -> Scope {
        trace!("writing else clause");
        self.owner.splice_block("else", &self.block)
    }
}
