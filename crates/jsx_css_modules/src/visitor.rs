use swc_core::ecma::ast::{ImportDecl, JSXAttr, JSXAttrName, Module, Script};
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

use crate::class_name_rewriter::rewrite_class_attr;
use crate::config::CssModulesConfig;
use crate::errors::CssModulesError;
use crate::import_rewriter::rewrite_import;
use crate::module_registry::ModuleRegistry;
use crate::unique_names::UniqueNames;

/// Rewrites css-module imports and the class attributes using them.
///
/// # Example
///
/// Input:
/// ```js
/// import "./card.module.css";
/// import "./layout.module.css#layout";
///
/// const el = <div className="title layout#row #global"/>;
/// ```
///
/// Output:
/// ```js
/// import _style from "./card.module.css";
/// import _layout from "./layout.module.css";
///
/// const el = <div className={`${_style["title"]} ${_layout["row"]} global`}/>;
/// ```
///
/// Imports and attributes are handled in document order, so an attribute only sees the modules
/// imported above it. The first error stops the transform, it is available through
/// [`CssModulesVisitor::error`].
pub struct CssModulesVisitor {
  config: CssModulesConfig,
  registry: ModuleRegistry,
  unique_names: UniqueNames,
  error: Option<CssModulesError>,
}

impl CssModulesVisitor {
  pub fn new(config: CssModulesConfig) -> Self {
    CssModulesVisitor {
      config,
      registry: ModuleRegistry::new(),
      unique_names: UniqueNames::default(),
      error: None,
    }
  }

  pub fn error(&self) -> Option<&CssModulesError> {
    self.error.as_ref()
  }

  pub fn registry(&self) -> &ModuleRegistry {
    &self.registry
  }

  pub fn into_result(self) -> Result<(), CssModulesError> {
    match self.error {
      Some(error) => Err(error),
      None => Ok(()),
    }
  }

  fn is_class_attribute(&self, attr: &JSXAttr) -> bool {
    match &attr.name {
      JSXAttrName::Ident(name) => self
        .config
        .attribute_names
        .iter()
        .any(|attribute_name| attribute_name.as_str() == &*name.sym),
      JSXAttrName::JSXNamespacedName(_) => false,
    }
  }

  fn start_file(&mut self, unique_names: UniqueNames) {
    self.registry = ModuleRegistry::new();
    self.unique_names = unique_names;
    self.error = None;
  }
}

impl VisitMut for CssModulesVisitor {
  fn visit_mut_module(&mut self, module: &mut Module) {
    self.start_file(UniqueNames::from_module(module));
    module.visit_mut_children_with(self);
  }

  fn visit_mut_script(&mut self, script: &mut Script) {
    self.start_file(UniqueNames::default());
    script.visit_mut_children_with(self);
  }

  fn visit_mut_import_decl(&mut self, import: &mut ImportDecl) {
    if self.error.is_some() {
      return;
    }

    if let Err(error) = rewrite_import(import, &mut self.registry, &mut self.unique_names) {
      self.error = Some(error);
    }
  }

  fn visit_mut_jsx_attr(&mut self, attr: &mut JSXAttr) {
    if self.error.is_some() {
      return;
    }

    if self.is_class_attribute(attr) {
      match rewrite_class_attr(attr, &mut self.registry) {
        // The new value only holds generated lookups
        Ok(true) => return,
        Ok(false) => {}
        Err(error) => {
          self.error = Some(error);
          return;
        }
      }
    }

    attr.visit_mut_children_with(self);
  }
}
