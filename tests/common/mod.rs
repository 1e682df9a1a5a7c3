pub mod fixtures;

use fontscale::{FontScaleOptions, FontScalePlugin, TransformOutput};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Builds a plugin with default options.
pub fn default_plugin() -> FontScalePlugin {
    FontScalePlugin::new(FontScaleOptions::default()).expect("default options are valid")
}

/// Transforms `css` as a plain stylesheet and returns the resulting text.
pub fn transform_css(plugin: &FontScalePlugin, css: &str) -> String {
    plugin
        .transform(css, "/project/src/styles.css")
        .map(|TransformOutput { code, .. }| code)
        .expect("stylesheet ids pass the default filter")
}

/// Asserts that a stylesheet transforms to the expected text.
#[macro_export]
macro_rules! assert_transforms {
    ($plugin:expr, $input:expr, $expected:expr) => {
        assert_eq!(
            $crate::common::transform_css(&$plugin, $input),
            $expected,
            "transforming {:?}",
            $input
        );
    };
}
