use serde::Serialize;
use swc_core::common::{SourceMap, Span};

/// The ways a file can fail to compile.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
  #[error("import css-module as a default import on '{import_source}'")]
  NotDefaultImport { import_source: String },

  #[error("more than one import binding found on '{import_source}'")]
  MultipleBindings { import_source: String },

  #[error("cannot combine an import binding with module name '{module_name}' on '{import_source}'")]
  NamedBoundImport {
    import_source: String,
    module_name: String,
  },

  #[error("css-module '{module_name}' has already been declared")]
  DuplicateModule { module_name: String },

  #[error(
    "only one default css-module import is allowed, provide names for all except the default module"
  )]
  DuplicateDefault,

  #[error("no default css-module found")]
  NoDefaultModule,

  #[error("module '{module_name}' on class '{classname}' not found")]
  ModuleNotFound {
    module_name: String,
    classname: String,
  },
}

/// A fatal error for the file being transformed, pointing at the node that caused it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct CssModulesError {
  pub kind: ErrorKind,
  pub span: Span,
}

impl CssModulesError {
  pub fn new(kind: ErrorKind, span: Span) -> Self {
    Self { kind, span }
  }

  pub fn hints(&self) -> Vec<String> {
    match &self.kind {
      ErrorKind::NotDefaultImport { .. } | ErrorKind::MultipleBindings { .. } => vec![
        "Use `import \"./a.module.css\"`, `import \"./a.module.css#name\"` or `import name from \"./a.module.css\"`".into(),
      ],
      ErrorKind::NamedBoundImport { .. } => vec![
        "Either remove the `#name` suffix or the import binding".into(),
      ],
      ErrorKind::DuplicateModule { .. } => {
        vec!["Give each css-module import in this file a different name".into()]
      }
      ErrorKind::DuplicateDefault => {
        vec!["Add a `#name` suffix to the import source, eg. `import \"./a.module.css#a\"`".into()]
      }
      ErrorKind::NoDefaultModule => {
        vec!["Import a css-module in this file before using it in a class attribute".into()]
      }
      ErrorKind::ModuleNotFound { module_name, .. } => vec![format!(
        "Declare the module with a `#{module_name}` suffix on its import source"
      )],
    }
  }

  pub fn source_location(&self, source_map: &SourceMap) -> SourceLocation {
    SourceLocation::from(source_map, self.span)
  }
}

/// 1-based start and end position of a span within its file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
  pub file_name: String,
  pub start_line: usize,
  pub start_col: usize,
  pub end_line: usize,
  pub end_col: usize,
}

impl SourceLocation {
  pub fn from(source_map: &SourceMap, span: Span) -> Self {
    if span.lo().is_dummy() || span.hi().is_dummy() {
      return SourceLocation {
        file_name: String::from("unknown"),
        start_line: 1,
        start_col: 1,
        end_line: 1,
        end_col: 2,
      };
    }

    let start = source_map.lookup_char_pos(span.lo());
    let end = source_map.lookup_char_pos(span.hi());

    SourceLocation {
      file_name: start.file.name.to_string(),
      start_line: start.line,
      start_col: start.col_display + 1,
      end_line: end.line,
      end_col: end.col_display,
    }
  }
}
