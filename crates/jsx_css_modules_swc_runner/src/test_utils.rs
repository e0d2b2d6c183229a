use swc_core::ecma::parser::{Syntax, TsSyntax};
use swc_core::ecma::visit::VisitMut;

use crate::runner::{run_visit, RunWithTransformationOptions};
pub use crate::runner::{RunContext, RunVisitResult};

/// In the future this might be a different type to `RunContext`
pub type RunTestContext = RunContext;

/// Helper to test SWC visitors over JSX modules.
///
/// * Parse `code` with SWC
/// * Run a visitor over it
/// * Return the result
///
pub fn run_test_visit<V: VisitMut>(
  code: &str,
  make_visit: impl FnOnce(RunTestContext) -> V,
) -> RunVisitResult<V> {
  run_visit(RunWithTransformationOptions::new(code), make_visit).unwrap()
}

/// Same as `run_test_visit` with an explicit parser syntax
pub fn run_test_visit_with_syntax<V: VisitMut>(
  code: &str,
  syntax: Syntax,
  make_visit: impl FnOnce(RunTestContext) -> V,
) -> RunVisitResult<V> {
  let options = RunWithTransformationOptions {
    code,
    syntax: Some(syntax),
  };
  run_visit(options, make_visit).unwrap()
}

/// TypeScript with JSX, for `.tsx` components
pub fn tsx_syntax() -> Syntax {
  Syntax::Typescript(TsSyntax {
    tsx: true,
    ..Default::default()
  })
}
