use swc_core::common::DUMMY_SP;
use swc_core::ecma::ast::{Expr, Tpl, TplElement};

const SEPARATOR: char = ' ';

/// One class of a rewritten class attribute.
#[derive(Debug)]
pub enum TemplatePart {
  /// Text copied as-is into the template
  Literal(String),
  /// A `module["class"]` lookup
  Lookup(Box<Expr>),
}

/// Builds a template literal rendering every part separated by exactly one space.
///
/// `["a", x, "b", y]` becomes `` `a ${x} b ${y}` ``.
pub fn build_template(parts: Vec<TemplatePart>) -> Tpl {
  let mut quasis = vec![String::new()];
  let mut exprs = Vec::new();

  for part in parts {
    match part {
      TemplatePart::Literal(text) => {
        if let Some(quasi) = quasis.last_mut() {
          quasi.push_str(&text);
          quasi.push(SEPARATOR);
        }
      }
      TemplatePart::Lookup(expr) => {
        exprs.push(expr);
        quasis.push(SEPARATOR.to_string());
      }
    }
  }

  if let Some(quasi) = quasis.last_mut() {
    let trimmed = quasi.trim_end_matches(SEPARATOR).len();
    quasi.truncate(trimmed);
  }

  let last = quasis.len() - 1;
  let quasis = quasis
    .into_iter()
    .enumerate()
    .map(|(index, cooked)| TplElement {
      span: DUMMY_SP,
      tail: index == last,
      raw: escape_raw(&cooked).into(),
      cooked: Some(cooked.into()),
    })
    .collect();

  Tpl {
    span: DUMMY_SP,
    exprs,
    quasis,
  }
}

/// Escapes the characters that would otherwise end or interpolate the template.
fn escape_raw(cooked: &str) -> String {
  let mut raw = String::with_capacity(cooked.len());
  let mut chars = cooked.chars().peekable();

  while let Some(c) = chars.next() {
    match c {
      '\\' => raw.push_str("\\\\"),
      '`' => raw.push_str("\\`"),
      '$' if chars.peek() == Some(&'{') => raw.push_str("\\$"),
      c => raw.push(c),
    }
  }

  raw
}
