use std::string::FromUtf8Error;
use swc_core::common::input::StringInput;
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, Globals, Mark, SourceMap, GLOBALS};
use swc_core::ecma::ast::Module;
use swc_core::ecma::codegen::text_writer::JsWriter;
use swc_core::ecma::parser::lexer::Lexer;
use swc_core::ecma::parser::{EsSyntax, Parser, Syntax};
use swc_core::ecma::transforms::base::resolver;
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

pub struct RunContext {
  /// Source-map in use
  pub source_map: Lrc<SourceMap>,
  /// Global mark from SWC resolver
  pub global_mark: Mark,
  /// Unresolved mark from SWC resolver
  pub unresolved_mark: Mark,
}

pub struct RunVisitResult<V> {
  pub output_code: String,
  #[allow(unused)]
  pub visitor: V,
  pub source_map: Vec<u8>,
}

pub struct RunWithTransformationOptions<'a> {
  pub code: &'a str,
  /// Parser syntax, defaults to ECMAScript with JSX enabled
  pub syntax: Option<Syntax>,
}

impl<'a> RunWithTransformationOptions<'a> {
  pub fn new(code: &'a str) -> Self {
    Self { code, syntax: None }
  }
}

pub struct RunWithTransformationOutput<R> {
  pub output_code: String,
  pub transform_result: R,
  pub source_map: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum RunWithTransformationError {
  #[error("Failed to parse module")]
  SwcParse(swc_core::ecma::parser::error::Error),
  #[error("IO Error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("Invalid utf-8 output: {0}")]
  InvalidUtf8Output(#[from] FromUtf8Error),
  #[error("Failed to generate source map")]
  SourceMap(#[from] sourcemap::Error),
}

/// Syntax used when none is given: plain ECMAScript modules with JSX.
pub fn jsx_syntax() -> Syntax {
  Syntax::Es(EsSyntax {
    jsx: true,
    ..Default::default()
  })
}

/// Runner of SWC transformations
///
/// * Parse `code` with SWC
/// * Run a visitor over it
/// * Return the result
///
pub fn run_visit<V: VisitMut>(
  options: RunWithTransformationOptions<'_>,
  make_visit: impl FnOnce(RunContext) -> V,
) -> Result<RunVisitResult<V>, RunWithTransformationError> {
  let RunWithTransformationOutput {
    output_code,
    transform_result,
    source_map,
  } = run_with_transformation(options, |context: RunContext, module: &mut Module| {
    let mut visit = make_visit(context);
    module.visit_mut_with(&mut visit);
    visit
  })?;

  Ok(RunVisitResult {
    output_code,
    visitor: transform_result,
    source_map,
  })
}

/// Parse code, run resolver over it, then run the `transform` function with the parsed module.
/// Codegen and return the results.
pub fn run_with_transformation<R>(
  options: RunWithTransformationOptions<'_>,
  transform: impl FnOnce(RunContext, &mut Module) -> R,
) -> Result<RunWithTransformationOutput<R>, RunWithTransformationError> {
  let source_map = Lrc::new(SourceMap::default());
  let source_file = source_map.new_source_file(
    Lrc::new(FileName::Custom("component.jsx".into())),
    options.code.into(),
  );

  let lexer = Lexer::new(
    options.syntax.unwrap_or_else(jsx_syntax),
    Default::default(),
    StringInput::from(&*source_file),
    None,
  );

  let mut parser = Parser::new_from(lexer);
  let mut module = parser
    .parse_module()
    .map_err(RunWithTransformationError::SwcParse)?;

  GLOBALS.set(
    &Globals::new(),
    || -> Result<RunWithTransformationOutput<R>, RunWithTransformationError> {
      let global_mark = Mark::new();
      let unresolved_mark = Mark::new();
      module.visit_mut_with(&mut resolver(unresolved_mark, global_mark, false));

      let context = RunContext {
        source_map: source_map.clone(),
        global_mark,
        unresolved_mark,
      };
      let transform_result = transform(context, &mut module);

      let mut line_pos_buffer = vec![];
      let mut output_buffer = vec![];
      let writer = JsWriter::new(
        source_map.clone(),
        "\n",
        &mut output_buffer,
        Some(&mut line_pos_buffer),
      );
      let mut emitter = swc_core::ecma::codegen::Emitter {
        cfg: Default::default(),
        cm: source_map.clone(),
        comments: None,
        wr: writer,
      };
      emitter.emit_module(&module)?;
      let output_code = String::from_utf8(output_buffer)?;
      let source_map = source_map.build_source_map(&line_pos_buffer);
      let mut output_map_buffer = vec![];
      source_map.to_writer(&mut output_map_buffer)?;

      Ok(RunWithTransformationOutput {
        output_code,
        transform_result,
        source_map: output_map_buffer,
      })
    },
  )
}

#[cfg(test)]
mod tests {
  use swc_core::ecma::ast::{JSXAttrValue, Lit, Str};
  use swc_core::ecma::visit::VisitMut;

  use super::*;

  #[test]
  fn test_parses_jsx_by_default() {
    struct Visitor;
    impl VisitMut for Visitor {
      fn visit_mut_jsx_attr_value(&mut self, n: &mut JSXAttrValue) {
        *n = JSXAttrValue::Lit(Lit::Str(Str::from("replacement")));
      }
    }

    let code = r#"const el = <div id="test"/>;"#;
    let RunVisitResult { output_code, .. } =
      run_visit(RunWithTransformationOptions::new(code), |_: RunContext| Visitor).unwrap();
    assert_eq!(
      output_code,
      r#"const el = <div id="replacement"/>;
"#
    );
  }

  #[test]
  fn test_reports_parse_errors() {
    let options = RunWithTransformationOptions {
      code: "const el = <div>;",
      syntax: Some(Syntax::Es(Default::default())),
    };

    let result = run_with_transformation(options, |_, _| ());
    assert!(matches!(
      result,
      Err(RunWithTransformationError::SwcParse(_))
    ));
  }
}
