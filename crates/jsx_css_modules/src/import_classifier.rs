use once_cell::sync::Lazy;
use regex::Regex;

/// `<path>.module.(css|sass|scss)[#<name>][:<tag>]`, case-insensitive.
static CSS_MODULE_SOURCE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)^(?P<path>.*\.module\.(?:s[ac]ss|css))(?P<suffix>#[^:]*)?(?::.*)?$").unwrap()
});

/// An import source split into the stylesheet path and the optional `#name` suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleReference {
  /// The source with the `#name` suffix removed
  pub module_source: String,
  pub module_name: Option<String>,
}

impl ModuleReference {
  /// Returns `None` when `source` is not a css-module import.
  ///
  /// The name follows the last `#`, so `./a.module.css#x#y` is the module `y` of
  /// `./a.module.css#x`.
  pub fn parse(source: &str) -> Option<ModuleReference> {
    let captures = CSS_MODULE_SOURCE.captures(source)?;

    let Some(suffix) = captures.name("suffix") else {
      return Some(ModuleReference {
        module_source: source.to_string(),
        module_name: None,
      });
    };

    // Everything from the last `#` onwards is dropped from the source, tag included.
    let name_start = suffix.start() + suffix.as_str().rfind('#').unwrap_or_default();
    let module_name = &source[name_start + 1..suffix.end()];

    Some(ModuleReference {
      module_source: source[..name_start].to_string(),
      module_name: Some(module_name)
        .filter(|name| !name.is_empty())
        .map(str::to_string),
    })
  }
}

/// How a css-module import statement binds its stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportClassification {
  /// `import "./a.module.css"`
  DefaultModule { module_source: String },
  /// `import "./a.module.css#name"`
  NamedModule {
    module_source: String,
    module_name: String,
  },
  /// `import style from "./a.module.css"`
  SpecifierBoundModule { module_source: String },
}

impl ImportClassification {
  pub fn classify(reference: ModuleReference, has_specifiers: bool) -> ImportClassification {
    let ModuleReference {
      module_source,
      module_name,
    } = reference;

    if has_specifiers {
      return ImportClassification::SpecifierBoundModule { module_source };
    }

    match module_name {
      None => ImportClassification::DefaultModule { module_source },
      Some(module_name) => ImportClassification::NamedModule {
        module_source,
        module_name,
      },
    }
  }

  pub fn module_source(&self) -> &str {
    match self {
      ImportClassification::DefaultModule { module_source }
      | ImportClassification::NamedModule { module_source, .. }
      | ImportClassification::SpecifierBoundModule { module_source } => module_source,
    }
  }
}
