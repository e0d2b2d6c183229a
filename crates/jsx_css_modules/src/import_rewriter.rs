use swc_core::common::{SyntaxContext, DUMMY_SP};
use swc_core::ecma::ast::{Ident, ImportDecl, ImportDefaultSpecifier, ImportSpecifier, Str};

use crate::errors::{CssModulesError, ErrorKind};
use crate::import_classifier::{ImportClassification, ModuleReference};
use crate::module_registry::ModuleRegistry;
use crate::unique_names::UniqueNames;

/// Hint for the identifier bound to the unnamed css-module
const DEFAULT_MODULE_HINT: &str = "style";

/// Rewrites a css-module import into a default import and records its binding.
///
/// * `import "./a.module.css"` becomes `import _style from "./a.module.css"`
/// * `import "./a.module.css#card"` becomes `import _card from "./a.module.css"`
/// * `import styles from "./a.module.css"` is kept and registered as `styles`
///
/// Returns `Ok(false)` for imports of anything but a css-module.
pub fn rewrite_import(
  import: &mut ImportDecl,
  registry: &mut ModuleRegistry,
  unique_names: &mut UniqueNames,
) -> Result<bool, CssModulesError> {
  let Some(reference) = ModuleReference::parse(&import.src.value) else {
    return Ok(false);
  };

  let span = import.span;
  validate_specifiers(import, &reference).map_err(|kind| CssModulesError::new(kind, span))?;

  let classification = ImportClassification::classify(reference, !import.specifiers.is_empty());

  match &classification {
    ImportClassification::SpecifierBoundModule { .. } => {
      let local = specifier_local(&import.specifiers[0]).clone();
      let module_name = local.sym.to_string();
      registry
        .register_named(&module_name, local)
        .map_err(|kind| CssModulesError::new(kind, span))?;
    }
    ImportClassification::DefaultModule { .. } => {
      let local = generated_ident(unique_names, DEFAULT_MODULE_HINT);
      registry
        .register_default(local.clone())
        .map_err(|kind| CssModulesError::new(kind, span))?;
      import.specifiers = vec![default_specifier(local)];
    }
    ImportClassification::NamedModule { module_name, .. } => {
      let local = generated_ident(unique_names, module_name);
      registry
        .register_named(module_name, local.clone())
        .map_err(|kind| CssModulesError::new(kind, span))?;
      import.specifiers = vec![default_specifier(local)];
    }
  }

  import.src = Box::new(Str {
    span: import.src.span,
    value: classification.module_source().into(),
    raw: None,
  });

  Ok(true)
}

fn validate_specifiers(import: &ImportDecl, reference: &ModuleReference) -> Result<(), ErrorKind> {
  let import_source = || import.src.value.to_string();

  match import.specifiers.as_slice() {
    [] => Ok(()),
    [ImportSpecifier::Default(_)] => match &reference.module_name {
      Some(module_name) => Err(ErrorKind::NamedBoundImport {
        import_source: import_source(),
        module_name: module_name.clone(),
      }),
      None => Ok(()),
    },
    [ImportSpecifier::Default(_), ..] => Err(ErrorKind::MultipleBindings {
      import_source: import_source(),
    }),
    _ => Err(ErrorKind::NotDefaultImport {
      import_source: import_source(),
    }),
  }
}

fn specifier_local(specifier: &ImportSpecifier) -> &Ident {
  match specifier {
    ImportSpecifier::Default(default) => &default.local,
    ImportSpecifier::Named(named) => &named.local,
    ImportSpecifier::Namespace(namespace) => &namespace.local,
  }
}

fn generated_ident(unique_names: &mut UniqueNames, hint: &str) -> Ident {
  Ident::new(unique_names.generate(hint), DUMMY_SP, SyntaxContext::empty())
}

fn default_specifier(local: Ident) -> ImportSpecifier {
  ImportSpecifier::Default(ImportDefaultSpecifier {
    span: DUMMY_SP,
    local,
  })
}
