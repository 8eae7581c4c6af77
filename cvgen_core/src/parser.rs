use crate::lexer::Token;
use crate::lexer::tokenize;

/// A node in the parsed template tree.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Node {
	/// Literal template text, emitted unchanged.
	Text(String),
	/// A `{{name}}` variable placeholder. `raw` is the exact source text,
	/// emitted verbatim when the name resolves nowhere.
	Variable { name: String, raw: String },
	/// A `{{.}}` current-item placeholder.
	CurrentItem { raw: String },
	/// A `{{#name}}...{{/name}}` section with its parsed body.
	Section { name: String, body: Vec<Node> },
}

/// Parse a template into a node tree.
///
/// Section pairing is deliberately non-greedy: an open marker for `name`
/// pairs with the *nearest following* close marker for the same name,
/// regardless of any same-name opens in between. An open marker with no
/// matching close, and a close marker with no preceding open, degrade to
/// literal text. Parsing cannot fail; malformed markup just renders as-is.
pub fn parse(template: &str) -> Vec<Node> {
	let tokens = tokenize(template);
	parse_tokens(&tokens)
}

fn parse_tokens(tokens: &[Token<'_>]) -> Vec<Node> {
	let mut nodes: Vec<Node> = Vec::new();
	let mut index = 0;

	while index < tokens.len() {
		match &tokens[index] {
			Token::Text(text) => {
				push_text(&mut nodes, text);
				index += 1;
			}
			Token::Variable { name, raw } => {
				nodes.push(Node::Variable {
					name: (*name).to_string(),
					raw: (*raw).to_string(),
				});
				index += 1;
			}
			Token::CurrentItem { raw } => {
				nodes.push(Node::CurrentItem {
					raw: (*raw).to_string(),
				});
				index += 1;
			}
			// A close without an open stays literal.
			Token::SectionClose { raw, .. } => {
				push_text(&mut nodes, raw);
				index += 1;
			}
			Token::SectionOpen { name, raw } => {
				match find_close(&tokens[index + 1..], name) {
					Some(offset) => {
						let close = index + 1 + offset;
						nodes.push(Node::Section {
							name: (*name).to_string(),
							body: parse_tokens(&tokens[index + 1..close]),
						});
						index = close + 1;
					}
					None => {
						push_text(&mut nodes, raw);
						index += 1;
					}
				}
			}
		}
	}

	nodes
}

/// Find the nearest close marker for `name` in a flat forward scan.
fn find_close(tokens: &[Token<'_>], name: &str) -> Option<usize> {
	tokens.iter().position(|token| {
		matches!(token, Token::SectionClose { name: close_name, .. } if *close_name == name)
	})
}

/// Append literal text, merging into a trailing `Text` node when possible.
fn push_text(nodes: &mut Vec<Node>, text: &str) {
	if let Some(Node::Text(existing)) = nodes.last_mut() {
		existing.push_str(text);
	} else {
		nodes.push(Node::Text(text.to_string()));
	}
}
