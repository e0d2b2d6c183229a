use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CssModulesConfig {
  ///
  /// JSX attributes holding class names that should be rewritten.
  ///
  /// Defaults to `["className"]`
  ///
  #[serde(default = "default_attribute_names")]
  pub attribute_names: Vec<String>,
}

fn default_attribute_names() -> Vec<String> {
  vec![String::from("className")]
}

impl Default for CssModulesConfig {
  fn default() -> CssModulesConfig {
    CssModulesConfig {
      attribute_names: default_attribute_names(),
    }
  }
}
