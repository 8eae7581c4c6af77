use logos::Logos;

/// Raw tokens produced by logos for flat tokenization of template text.
///
/// Placeholder forms are matched as whole lexemes so that anything that fails
/// to form a complete placeholder (a lone `{`, an unterminated `{{name`)
/// falls through to literal text.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[regex(r"\{\{#[0-9A-Za-z_]+\}\}")]
	SectionOpen,
	#[regex(r"\{\{/[0-9A-Za-z_]+\}\}")]
	SectionClose,
	#[regex(r"\{\{[0-9A-Za-z_]+\}\}")]
	Variable,
	#[regex(r"\{\{[ \t\r\n]*\.[ \t\r\n]*\}\}")]
	CurrentItem,
	#[token("{")]
	Brace,
	#[regex(r"[^{]+")]
	Text,
}

/// A lexed template token. Placeholder tokens keep both the extracted name
/// and the raw source slice so unresolved placeholders can be emitted
/// verbatim during rendering.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'a> {
	/// A run of literal template text.
	Text(&'a str),
	/// `{{name}}`
	Variable { name: &'a str, raw: &'a str },
	/// `{{#name}}`
	SectionOpen { name: &'a str, raw: &'a str },
	/// `{{/name}}`
	SectionClose { name: &'a str, raw: &'a str },
	/// `{{.}}`, with optional whitespace inside the braces.
	CurrentItem { raw: &'a str },
}

/// Tokenize a template into placeholder and text tokens. Adjacent literal
/// runs (including stray braces) are coalesced into a single `Text` token.
pub(crate) fn tokenize(source: &str) -> Vec<Token<'_>> {
	let mut tokens = Vec::new();
	// Start offset of the pending literal run, if any.
	let mut text_start: Option<usize> = None;

	for (result, span) in RawToken::lexer(source).spanned() {
		let raw = &source[span.clone()];

		let token = match result {
			Ok(RawToken::SectionOpen) => {
				Token::SectionOpen {
					name: &raw[3..raw.len() - 2],
					raw,
				}
			}
			Ok(RawToken::SectionClose) => {
				Token::SectionClose {
					name: &raw[3..raw.len() - 2],
					raw,
				}
			}
			Ok(RawToken::Variable) => {
				Token::Variable {
					name: &raw[2..raw.len() - 2],
					raw,
				}
			}
			Ok(RawToken::CurrentItem) => Token::CurrentItem { raw },
			// Braces that don't open a placeholder, plain text, and any
			// unrecognized bytes all join the current literal run.
			Ok(RawToken::Brace | RawToken::Text) | Err(()) => {
				text_start.get_or_insert(span.start);
				continue;
			}
		};

		if let Some(start) = text_start.take() {
			tokens.push(Token::Text(&source[start..span.start]));
		}
		tokens.push(token);
	}

	if let Some(start) = text_start {
		tokens.push(Token::Text(&source[start..]));
	}

	tokens
}
