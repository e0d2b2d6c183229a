use jsx_css_modules::{transform_program, CssModulesConfig};
use swc_core::common::errors::HANDLER;
use swc_core::ecma::ast::Program;
use swc_core::plugin::{plugin_transform, proxies::TransformPluginProgramMetadata};

#[plugin_transform]
pub fn process_transform(program: Program, metadata: TransformPluginProgramMetadata) -> Program {
  let config = match metadata.get_transform_plugin_config() {
    Some(config_string) => serde_json::from_str::<CssModulesConfig>(&config_string)
      .expect("Invalid JSON configuration"),
    None => CssModulesConfig::default(),
  };

  let mut transformed = program.clone();
  match transform_program(&mut transformed, config) {
    Ok(()) => transformed,
    Err(error) => {
      // Nothing of a failed file is kept, the host reports the diagnostic
      HANDLER.with(|handler| {
        let mut diagnostic = handler.struct_span_err(error.span, &error.to_string());
        for hint in error.hints() {
          diagnostic.note(&hint);
        }
        diagnostic.emit();
      });
      program
    }
  }
}
