use indexmap::IndexMap;
use swc_core::ecma::ast::Ident;

use crate::errors::ErrorKind;

/// The css-module bindings of the file being transformed.
///
/// Each entry maps a module to the identifier bound to the stylesheet's default export.
/// A registry lives for exactly one file.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
  default_module: Option<Ident>,
  /// Insertion ordered, the first entry is the implicit default
  named_modules: IndexMap<String, Ident>,
}

impl ModuleRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register_default(&mut self, ident: Ident) -> Result<(), ErrorKind> {
    if self.default_module.is_some() {
      return Err(ErrorKind::DuplicateDefault);
    }

    tracing::debug!("Registered default css-module as {}", ident.sym);
    self.default_module = Some(ident);
    Ok(())
  }

  pub fn register_named(&mut self, module_name: &str, ident: Ident) -> Result<(), ErrorKind> {
    if self.named_modules.contains_key(module_name) {
      return Err(ErrorKind::DuplicateModule {
        module_name: module_name.to_string(),
      });
    }

    tracing::debug!("Registered css-module {} as {}", module_name, ident.sym);
    self.named_modules.insert(module_name.to_string(), ident);
    Ok(())
  }

  pub fn lookup(&self, module_name: &str) -> Option<&Ident> {
    self.named_modules.get(module_name)
  }

  pub fn default_module(&self) -> Option<&Ident> {
    self.default_module.as_ref()
  }

  pub fn has_any_module(&self) -> bool {
    self.default_module.is_some() || !self.named_modules.is_empty()
  }

  pub fn first_named_module_name(&self) -> Option<&str> {
    self.named_modules.keys().next().map(String::as_str)
  }

  /// Makes the first named module the default one when the file has no default module.
  ///
  /// Once promoted, the module stays the default for the rest of the file, so a later unnamed
  /// import is a duplicate default.
  pub fn promote_first_named(&mut self) -> Option<&Ident> {
    if self.default_module.is_none() {
      if let Some((module_name, ident)) = self.named_modules.first() {
        tracing::debug!("Using css-module {} as the default module", module_name);
        self.default_module = Some(ident.clone());
      }
    }

    self.default_module.as_ref()
  }
}

#[cfg(test)]
mod tests {
  use swc_core::common::{SyntaxContext, DUMMY_SP};

  use super::*;

  fn ident(name: &str) -> Ident {
    Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty())
  }

  #[test]
  fn test_empty_registry() {
    let registry = ModuleRegistry::new();
    assert!(!registry.has_any_module());
    assert!(registry.default_module().is_none());
    assert_eq!(registry.first_named_module_name(), None);
  }

  #[test]
  fn test_register_default_once() {
    let mut registry = ModuleRegistry::new();
    assert_eq!(registry.register_default(ident("_style")), Ok(()));
    assert_eq!(
      registry.register_default(ident("_style2")),
      Err(ErrorKind::DuplicateDefault)
    );
    assert_eq!(&*registry.default_module().unwrap().sym, "_style");
    assert!(registry.has_any_module());
  }

  #[test]
  fn test_register_named_once() {
    let mut registry = ModuleRegistry::new();
    assert_eq!(registry.register_named("card", ident("_card")), Ok(()));
    assert_eq!(
      registry.register_named("card", ident("_card2")),
      Err(ErrorKind::DuplicateModule {
        module_name: "card".into()
      })
    );
    assert_eq!(&*registry.lookup("card").unwrap().sym, "_card");
    assert!(registry.lookup("button").is_none());
  }

  #[test]
  fn test_first_named_module_keeps_insertion_order() {
    let mut registry = ModuleRegistry::new();
    registry.register_named("zeta", ident("_zeta")).unwrap();
    registry.register_named("alpha", ident("_alpha")).unwrap();
    assert_eq!(registry.first_named_module_name(), Some("zeta"));
  }

  #[test]
  fn test_promote_first_named() {
    let mut registry = ModuleRegistry::new();
    assert!(registry.promote_first_named().is_none());

    registry.register_named("card", ident("_card")).unwrap();
    registry.register_named("button", ident("_button")).unwrap();

    assert_eq!(&*registry.promote_first_named().unwrap().sym, "_card");
    assert_eq!(
      registry.register_default(ident("_style")),
      Err(ErrorKind::DuplicateDefault)
    );
  }

  #[test]
  fn test_promote_keeps_existing_default() {
    let mut registry = ModuleRegistry::new();
    registry.register_named("card", ident("_card")).unwrap();
    registry.register_default(ident("_style")).unwrap();

    assert_eq!(&*registry.promote_first_named().unwrap().sym, "_style");
  }
}
