//! Rewrites string `className` attributes of JSX elements into lookups on css-module imports.
//!
//! ```js
//! import "./card.module.css";
//! const el = <div className="title"/>;
//! ```
//!
//! becomes
//!
//! ```js
//! import _style from "./card.module.css";
//! const el = <div className={`${_style["title"]}`}/>;
//! ```
//!
//! See [`CssModulesVisitor`] for the supported import and class name forms.
use swc_core::ecma::ast::Program;
use swc_core::ecma::visit::VisitMutWith;

pub mod class_name_rewriter;
mod config;
pub mod errors;
pub mod import_classifier;
pub mod import_rewriter;
pub mod module_registry;
pub mod template_builder;
pub mod unique_names;
mod visitor;

pub use config::CssModulesConfig;
pub use errors::{CssModulesError, ErrorKind, SourceLocation};
pub use visitor::CssModulesVisitor;

/// Runs the transform over a whole program, stopping at the first error.
///
/// The program may be partially rewritten when an error is returned.
#[tracing::instrument(level = "debug", skip_all)]
pub fn transform_program(
  program: &mut Program,
  config: CssModulesConfig,
) -> Result<(), CssModulesError> {
  let mut visitor = CssModulesVisitor::new(config);
  program.visit_mut_with(&mut visitor);
  visitor.into_result()
}

#[cfg(test)]
mod tests {
  use indoc::indoc;
  use jsx_css_modules_swc_runner::runner::{run_with_transformation, RunWithTransformationOptions};
  use pretty_assertions::assert_eq;

  use super::*;

  fn run(code: &str) -> (String, Result<(), CssModulesError>) {
    let output = run_with_transformation(RunWithTransformationOptions::new(code), |_, module| {
      let mut program = Program::Module(module.clone());
      let result = transform_program(&mut program, CssModulesConfig::default());
      if let Program::Module(transformed) = program {
        *module = transformed;
      }
      result
    })
    .unwrap();

    (output.output_code, output.transform_result)
  }

  #[test]
  fn test_transform_program() {
    let (output_code, result) = run(indoc! {r#"
      import "./a.module.scss";
      import "./b.module.sass#b";
      export const Card = () => <div className="card b#title #active"/>;
    "#});

    assert_eq!(result, Ok(()));
    assert_eq!(
      output_code,
      indoc! {r#"
        import _style from "./a.module.scss";
        import _b from "./b.module.sass";
        export const Card = ()=><div className={`${_style["card"]} ${_b["title"]} active`}/>;
      "#}
    );
  }

  #[test]
  fn test_transform_program_error() {
    let (_, result) = run(indoc! {r#"
      import { title } from "./a.module.css";
    "#});

    assert_eq!(
      result.map_err(|error| error.kind),
      Err(ErrorKind::NotDefaultImport {
        import_source: "./a.module.css".into()
      })
    );
  }
}
