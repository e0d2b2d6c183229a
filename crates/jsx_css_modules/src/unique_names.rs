use std::collections::HashSet;

use swc_core::ecma::ast::{Ident, Module};
use swc_core::ecma::atoms::Atom;
use swc_core::ecma::visit::{Visit, VisitWith};

/// Generates identifier names that do not clash with any identifier of the file.
#[derive(Debug, Default)]
pub struct UniqueNames {
  used: HashSet<Atom>,
}

struct UsedNameCollector<'a> {
  used: &'a mut HashSet<Atom>,
}

impl Visit for UsedNameCollector<'_> {
  fn visit_ident(&mut self, ident: &Ident) {
    self.used.insert(ident.sym.clone());
  }
}

impl UniqueNames {
  pub fn from_module(module: &Module) -> Self {
    let mut used = HashSet::new();
    module.visit_with(&mut UsedNameCollector { used: &mut used });
    Self { used }
  }

  /// Returns `_hint`, `_hint2`, `_hint3`, ... whichever is free first, and reserves it.
  pub fn generate(&mut self, hint: &str) -> Atom {
    let base = uid_base(hint);

    let mut index = 1usize;
    loop {
      let candidate: Atom = match index {
        1 => format!("_{base}").into(),
        n => format!("_{base}{n}").into(),
      };

      if self.used.insert(candidate.clone()) {
        return candidate;
      }
      index += 1;
    }
  }
}

/// Turns a hint into the stem of a generated name.
///
/// Characters that cannot appear in an identifier are dropped and the following character is
/// upper-cased, eg. `my-card` becomes `myCard`. Leading underscores and trailing digits are
/// stripped so that generated names read `_style2` rather than `__style12`.
fn uid_base(hint: &str) -> String {
  let mut stem = String::with_capacity(hint.len());
  let mut upper_next = false;

  for c in hint.chars() {
    if c.is_alphanumeric() || c == '_' || c == '$' {
      if upper_next && !stem.is_empty() {
        stem.extend(c.to_uppercase());
      } else {
        stem.push(c);
      }
      upper_next = false;
    } else {
      upper_next = true;
    }
  }

  stem
    .trim_start_matches(|c: char| c == '_' || c.is_ascii_digit())
    .trim_end_matches(|c: char| c.is_ascii_digit())
    .to_string()
}

#[cfg(test)]
mod tests {
  use jsx_css_modules_swc_runner::test_utils::run_test_visit;
  use swc_core::ecma::visit::VisitMut;

  use super::*;

  struct Generate {
    hints: Vec<&'static str>,
    names: Vec<Atom>,
  }

  impl VisitMut for Generate {
    fn visit_mut_module(&mut self, module: &mut Module) {
      let mut unique_names = UniqueNames::from_module(module);
      for hint in &self.hints {
        self.names.push(unique_names.generate(hint));
      }
    }
  }

  fn generate(code: &str, hints: Vec<&'static str>) -> Vec<String> {
    let result = run_test_visit(code, |_| Generate {
      hints,
      names: vec![],
    });

    result
      .visitor
      .names
      .iter()
      .map(|name| name.to_string())
      .collect()
  }

  #[test]
  fn test_generates_prefixed_names() {
    assert_eq!(generate("", vec!["style", "card"]), ["_style", "_card"]);
  }

  #[test]
  fn test_generated_names_are_reserved() {
    assert_eq!(
      generate("", vec!["style", "style", "style"]),
      ["_style", "_style2", "_style3"]
    );
  }

  #[test]
  fn test_avoids_names_used_in_the_file() {
    let code = r#"
      import _card from "./card";
      const _style = 1;
      function render() { return <_style2/>; }
    "#;

    assert_eq!(
      generate(code, vec!["style", "card"]),
      ["_style3", "_card2"]
    );
  }

  #[test]
  fn test_uid_base() {
    assert_eq!(uid_base("style"), "style");
    assert_eq!(uid_base("my-card"), "myCard");
    assert_eq!(uid_base("__card"), "card");
    assert_eq!(uid_base("card12"), "card");
    assert_eq!(uid_base("1card"), "card");
    assert_eq!(uid_base(""), "");
  }
}
