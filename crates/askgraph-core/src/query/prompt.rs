//! Prompt templates and response cleanup shared by both LLM call sites.

/// Movie graph schema used when no schema file is configured.
pub const DEFAULT_SCHEMA: &str = r#"Schema:
(:Movie)-[:IN_GENRE]->(:Genre)
(:Person)-[:DIRECTED]->(:Movie)
(:Person)-[:ACTED_IN]->(:Movie)

Relationships:
"ACTED_IN"
"DIRECTED"
"PRODUCED"
"WROTE"
"FOLLOWS"
"REVIEWED"

Properties:
"Movie.title"
"Movie.released"
"Movie.tagline"
"Person.name"
"Person.born""#;

/// Build the natural language to Cypher translation prompt.
pub fn cypher_prompt(schema: &str, question: &str) -> String {
    format!(
        r#"You are an AI that converts natural language questions into Cypher queries.

IMPORTANT RULES (follow strictly):
- Output ONLY the Cypher query.
- Follow the given schema, relationships, and properties.
- No explanation.
- No markdown.
- No code blocks.
- No extra text.
- No backticks.
- Return plain Cypher only.
- The Cypher query must return ONLY plain text (string) values.
  No nodes, no maps, no lists of objects, no JSON structures.
- The last line MUST be a RETURN <string property> expression.
- Under no circumstances should the query return nodes or objects.

{schema}

User question: "{question}"
Return ONLY the Cypher query."#,
        schema = schema.trim(),
        question = question,
    )
}

/// Build the result summarization prompt.
pub fn summary_prompt(question: &str, rendered_result: &str) -> String {
    format!(
        r#"You are an AI assistant. Summarize database results concisely.
User question: "{question}"
Database result: "{rendered_result}"
Write all the values with a short, clear explanation (1-2 lines)."#
    )
}

/// Strip surrounding whitespace and backtick fences from a model response.
pub fn clean_response(text: &str) -> &str {
    let mut current = text;
    loop {
        let next = current.trim().trim_matches('`');
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

/// Drop the `cypher` info string left behind by a ```` ```cypher ```` fence.
pub fn strip_language_tag(text: &str) -> &str {
    match text.split_once('\n') {
        Some((first, rest)) if first.trim().eq_ignore_ascii_case("cypher") => clean_response(rest),
        _ => text,
    }
}
