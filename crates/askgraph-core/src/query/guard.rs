//! Read-only guard for generated Cypher.
//!
//! The generated query goes to the database untouched. When the guard is
//! enabled, statements that contain a write clause are refused before any
//! database call is made. The check is lexical: string literals, quoted
//! identifiers and comments are skipped, remaining words are compared
//! case-insensitively against the write clause keywords.
//!
//! Procedures can write too, and may carry whole statements inside string
//! arguments, so every `CALL` must name a procedure on a read-only
//! allow-list. `CALL { ... }` subqueries are allowed; their clauses are
//! checked like the rest of the statement.

use std::fmt;

/// Clause keywords that modify the graph or load external data.
pub const WRITE_CLAUSES: &[&str] = &[
    "CREATE", "MERGE", "DELETE", "DETACH", "SET", "REMOVE", "DROP", "LOAD", "FOREACH",
];

/// Procedures that only read schema or server metadata.
pub const READ_ONLY_PROCEDURES: &[&str] = &[
    "db.labels",
    "db.relationshipTypes",
    "db.propertyKeys",
    "db.schema.visualization",
    "db.schema.nodeTypeProperties",
    "db.schema.relTypeProperties",
    "db.indexes",
    "db.constraints",
    "db.info",
    "dbms.components",
];

/// Why a query was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    WriteClause(&'static str),
    Procedure(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteClause(clause) => write!(f, "the write clause {}", clause),
            Self::Procedure(name) if name.is_empty() => f.write_str("a CALL without a plain procedure name"),
            Self::Procedure(name) => write!(f, "the procedure {} (not on the read-only allow-list)", name),
        }
    }
}

/// Check a query for anything that could modify the database.
pub fn check(cypher: &str) -> Option<Violation> {
    let code = strip_literals(cypher);

    if let Some(clause) = write_clause_in(&code) {
        return Some(Violation::WriteClause(clause));
    }
    disallowed_call_in(&code).map(Violation::Procedure)
}

/// Return the first write clause found in `cypher`, if any.
pub fn find_write_clause(cypher: &str) -> Option<&'static str> {
    write_clause_in(&strip_literals(cypher))
}

fn write_clause_in(code: &str) -> Option<&'static str> {
    code.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .find_map(|word| {
            WRITE_CLAUSES
                .iter()
                .find(|kw| kw.eq_ignore_ascii_case(word))
                .copied()
        })
}

/// Return the name of the first called procedure that is not allow-listed.
fn disallowed_call_in(code: &str) -> Option<String> {
    let mut rest = code;

    while let Some(pos) = find_word(rest, "CALL") {
        let after = rest[pos + 4..].trim_start();
        if after.starts_with('{') {
            rest = after;
            continue;
        }

        let name: String = after
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '.')
            .collect();
        let allowed = READ_ONLY_PROCEDURES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(&name));
        if !allowed {
            return Some(name);
        }
        rest = after;
    }

    None
}

/// Byte offset of `word` standing on its own, compared case-insensitively.
fn find_word(code: &str, word: &str) -> Option<usize> {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_' || c == '.';
    code.char_indices().find_map(|(i, _)| {
        let candidate = code.get(i..i + word.len())?;
        if !candidate.eq_ignore_ascii_case(word) {
            return None;
        }
        let before_ok = code[..i].chars().next_back().map_or(true, |c| !is_ident(c));
        let after_ok = code[i + word.len()..].chars().next().map_or(true, |c| !is_ident(c));
        (before_ok && after_ok).then_some(i)
    })
}

/// Replace quoted text and comments with spaces.
fn strip_literals(cypher: &str) -> String {
    let mut out = String::with_capacity(cypher.len());
    let mut chars = cypher.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' | '`' => {
                let quote = c;
                while let Some(inner) = chars.next() {
                    if inner == '\\' && quote != '`' {
                        chars.next();
                    } else if inner == quote {
                        break;
                    }
                }
                out.push(' ');
            }
            '/' if chars.peek() == Some(&'/') => {
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        break;
                    }
                }
                out.push('\n');
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}
