use crate::parser::Node;
use crate::parser::parse;
use crate::value::Value;

/// A scope in the chain of contexts active during rendering. The chain is
/// rooted at the caller-supplied top-level context; sections push the value
/// they resolved to.
struct Scope<'a> {
	value: &'a Value,
	parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
	fn root(value: &'a Value) -> Self {
		Self {
			value,
			parent: None,
		}
	}

	fn child(&'a self, value: &'a Value) -> Self {
		Self {
			value,
			parent: Some(self),
		}
	}

	/// Resolve a variable name from the innermost scope outward. Inner scopes
	/// take precedence; the root context acts as the final fallback, which is
	/// what makes top-level fields usable anywhere in the template.
	fn lookup(&self, name: &str) -> Option<&'a Value> {
		match self.value.get(name) {
			Some(value) => Some(value),
			None => self.parent.and_then(|parent| parent.lookup(name)),
		}
	}
}

/// Render a template against a context value.
///
/// Rendering is total: every unresolved placeholder degrades to its literal
/// source text and malformed section markers pass through unchanged, so a
/// partially-filled document always comes out the other side. The function is
/// pure — no I/O, no shared state, safe to call concurrently on independent
/// inputs.
pub fn render(template: &str, context: &Value) -> String {
	let nodes = parse(template);
	let mut output = String::with_capacity(template.len());
	render_nodes(&nodes, &Scope::root(context), &mut output);
	output
}

fn render_nodes(nodes: &[Node], scope: &Scope<'_>, output: &mut String) {
	for node in nodes {
		match node {
			Node::Text(text) => output.push_str(text),
			Node::Variable { name, raw } => {
				match scope.lookup(name) {
					Some(value) => output.push_str(&value.coerce_to_text()),
					None => output.push_str(raw),
				}
			}
			// The current-item placeholder resolves only when the innermost
			// scope is a bare string (a sequence element); there is no
			// outward fallback.
			Node::CurrentItem { raw } => {
				match scope.value {
					Value::String(text) => output.push_str(text),
					_ => output.push_str(raw),
				}
			}
			Node::Section { name, body } => render_section(name, body, scope, output),
		}
	}
}

/// Render one section. The section name is looked up in the innermost scope
/// only — sections never resolve against enclosing scopes.
fn render_section(name: &str, body: &[Node], scope: &Scope<'_>, output: &mut String) {
	let Some(value) = scope.value.get(name) else {
		tracing::trace!(section = name, "section absent from scope, suppressed");
		return;
	};

	match value {
		Value::Null => {}
		Value::Sequence(items) => {
			for item in items {
				render_nodes(body, &scope.child(item), output);
			}
		}
		Value::Mapping(_) => {
			render_nodes(body, &scope.child(value), output);
		}
		// Scalars cannot host nested content; the whole section is
		// suppressed rather than rendered once.
		Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
	}
}
