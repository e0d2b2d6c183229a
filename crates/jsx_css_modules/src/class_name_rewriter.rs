use swc_core::common::{Span, DUMMY_SP};
use swc_core::ecma::ast::{
  ComputedPropName, Expr, Ident, JSXAttr, JSXAttrValue, JSXExpr, JSXExprContainer, Lit,
  MemberExpr, MemberProp, Str, Tpl,
};

use crate::errors::{CssModulesError, ErrorKind};
use crate::module_registry::ModuleRegistry;
use crate::template_builder::{build_template, TemplatePart};

const MODULE_SEPARATOR: char = '#';

/// One space separated word of a class attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassToken<'a> {
  /// `classname`, a class of the default module
  Plain(&'a str),
  /// `module#classname`
  Qualified { module: &'a str, classname: &'a str },
  /// `#classname` or an empty word, kept as literal text
  Global(&'a str),
}

impl<'a> ClassToken<'a> {
  pub fn parse(word: &'a str) -> ClassToken<'a> {
    if word.is_empty() {
      return ClassToken::Global(word);
    }

    match word.split_once(MODULE_SEPARATOR) {
      Some(("", classname)) => ClassToken::Global(classname),
      Some((module, classname)) => ClassToken::Qualified { module, classname },
      None => ClassToken::Plain(word),
    }
  }
}

/// Splits on single spaces. Repeated spaces produce empty global tokens, so the rendered
/// attribute keeps its interior whitespace.
pub fn split_class_tokens(value: &str) -> impl Iterator<Item = ClassToken<'_>> {
  value.split(' ').map(ClassToken::parse)
}

/// Rewrites a string class attribute into a template literal of module lookups.
///
/// Returns `Ok(false)` when the attribute is left untouched: no css-module is bound in the file
/// or the value is not a plain string.
pub fn rewrite_class_attr(
  attr: &mut JSXAttr,
  registry: &mut ModuleRegistry,
) -> Result<bool, CssModulesError> {
  if !registry.has_any_module() {
    return Ok(false);
  }

  registry.promote_first_named();

  let Some(JSXAttrValue::Lit(Lit::Str(value))) = &attr.value else {
    return Ok(false);
  };

  let span = value.span;
  let mut tpl = rewrite_class_name(&value.value, registry, span)?;
  tpl.span = span;

  tracing::trace!("Rewrote class attribute {:?}", &*value.value);

  attr.value = Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
    span,
    expr: JSXExpr::Expr(Box::new(Expr::Tpl(tpl))),
  }));

  Ok(true)
}

/// Builds the template literal for a class string, eg. `"a x#b"` with a default module `_style`
/// and a module `x` bound to `_x` gives `` `${_style["a"]} ${_x["b"]}` ``.
pub fn rewrite_class_name(
  value: &str,
  registry: &ModuleRegistry,
  span: Span,
) -> Result<Tpl, CssModulesError> {
  let default_module = registry
    .default_module()
    .ok_or_else(|| CssModulesError::new(ErrorKind::NoDefaultModule, span))?;

  let parts = split_class_tokens(value)
    .map(|token| match token {
      ClassToken::Global(text) => Ok(TemplatePart::Literal(text.to_string())),
      ClassToken::Plain(classname) => Ok(TemplatePart::Lookup(module_lookup(
        default_module,
        classname,
      ))),
      ClassToken::Qualified { module, classname } => {
        let module_ident = resolve_module(registry, default_module, module).ok_or_else(|| {
          CssModulesError::new(
            ErrorKind::ModuleNotFound {
              module_name: module.to_string(),
              classname: classname.to_string(),
            },
            span,
          )
        })?;
        Ok(TemplatePart::Lookup(module_lookup(module_ident, classname)))
      }
    })
    .collect::<Result<Vec<_>, CssModulesError>>()?;

  Ok(build_template(parts))
}

/// Named modules are looked up by name, the default module may also be addressed by the
/// identifier it is bound to.
fn resolve_module<'a>(
  registry: &'a ModuleRegistry,
  default_module: &'a Ident,
  module: &str,
) -> Option<&'a Ident> {
  if &*default_module.sym == module {
    return Some(default_module);
  }

  registry.lookup(module)
}

fn module_lookup(module: &Ident, classname: &str) -> Box<Expr> {
  Box::new(Expr::Member(MemberExpr {
    span: DUMMY_SP,
    obj: Box::new(Expr::Ident(module.clone())),
    prop: MemberProp::Computed(ComputedPropName {
      span: DUMMY_SP,
      expr: Box::new(Expr::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        value: classname.into(),
        raw: None,
      }))),
    }),
  }))
}
