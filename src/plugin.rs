// src/plugin.rs
use crate::config::FontScaleOptions;
use crate::error::FontScaleError;
use crate::sfc;
use fontscale_filter::PathFilter;
use fontscale_rules::{StyleRewriter, apply_rewriters, default_rewriters};
use fontscale_style::{SourceMap, Stylesheet};
use std::fmt;
use std::sync::Arc;

/// The identifier reported to the host build tool.
pub const PLUGIN_NAME: &str = "font-size-plugin";

/// The rewritten text of one file, plus a source map when requested.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub code: String,
    pub map: Option<SourceMap>,
}

/// What happened to one file.
#[derive(Debug)]
pub enum TransformOutcome {
    /// Disabled, or the identifier did not pass the path filter. Nothing was parsed.
    Skipped,
    Transformed(TransformOutput),
    /// Processing failed; `code` is the untouched input.
    Degraded { code: String, cause: FontScaleError },
}

impl TransformOutcome {
    /// The host-facing view: `None` means "leave the file alone".
    pub fn into_output(self) -> Option<TransformOutput> {
        match self {
            TransformOutcome::Skipped => None,
            TransformOutcome::Transformed(output) => Some(output),
            TransformOutcome::Degraded { code, .. } => Some(TransformOutput { code, map: None }),
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TransformOutcome::Skipped)
    }
}

/// The per-file font scaling transform.
///
/// Configuration is fixed at construction; clones share the compiled filter
/// and rewriters, so one instance can serve concurrent calls.
#[derive(Clone)]
pub struct FontScalePlugin {
    filter: Arc<PathFilter>,
    rewriters: Arc<[Box<dyn StyleRewriter>]>,
    enabled: bool,
    source_map: bool,
}

impl fmt::Debug for FontScalePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rewriters: Vec<_> = self.rewriters.iter().map(|r| r.name()).collect();
        f.debug_struct("FontScalePlugin")
            .field("rewriters", &rewriters)
            .field("enabled", &self.enabled)
            .field("source_map", &self.source_map)
            .finish()
    }
}

impl FontScalePlugin {
    /// Compiles the include/exclude patterns. Fails only on invalid patterns.
    pub fn new(options: FontScaleOptions) -> Result<Self, FontScaleError> {
        let filter = PathFilter::new(&options.include.0, &options.exclude.0)?;
        Ok(Self {
            filter: Arc::new(filter),
            rewriters: default_rewriters(options.policy).into(),
            enabled: options.enabled,
            source_map: options.source_map,
        })
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Runs the transform on one file and reports exactly what happened.
    pub fn process(&self, content: &str, id: &str) -> TransformOutcome {
        if !self.enabled || !self.filter.is_match(id) {
            log::debug!("[{}] Skipping {}", PLUGIN_NAME, id);
            return TransformOutcome::Skipped;
        }

        log::info!("[{}] Processing file: {}", PLUGIN_NAME, id);
        match self.rewrite(content, id) {
            Ok(output) => TransformOutcome::Transformed(output),
            Err(cause) => {
                log::error!("[{}] Failed to process {}: {}", PLUGIN_NAME, id, cause);
                TransformOutcome::Degraded {
                    code: content.to_string(),
                    cause,
                }
            }
        }
    }

    /// Host entry point. `None` when the file is skipped; otherwise the
    /// rewritten text, or the original text if processing failed.
    pub fn transform(&self, content: &str, id: &str) -> Option<TransformOutput> {
        self.process(content, id).into_output()
    }

    /// Like [`FontScalePlugin::process`], but runs on the blocking pool so
    /// async callers are not stalled by parsing.
    pub async fn process_async(&self, content: String, id: String) -> TransformOutcome {
        let plugin = self.clone();
        let original = content.clone();
        let handle = tokio::task::spawn_blocking(move || plugin.process(&content, &id));

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("[{}] Transform task did not complete: {}", PLUGIN_NAME, e);
                TransformOutcome::Degraded {
                    code: original,
                    cause: FontScaleError::Task(e),
                }
            }
        }
    }

    pub async fn transform_async(&self, content: String, id: String) -> Option<TransformOutput> {
        self.process_async(content, id).await.into_output()
    }

    fn rewrite(&self, content: &str, id: &str) -> Result<TransformOutput, FontScaleError> {
        if sfc::is_component(id) {
            let code = sfc::rewrite_style_blocks(content, |css| {
                self.rewrite_sheet(css).map(|sheet| sheet.to_css())
            })?;
            return Ok(TransformOutput { code, map: None });
        }

        let sheet = self.rewrite_sheet(content)?;
        if self.source_map {
            let file = id.split_once('?').map_or(id, |(path, _)| path);
            let (code, map) = sheet.to_css_with_map(file, Some(content));
            Ok(TransformOutput {
                code,
                map: Some(map),
            })
        } else {
            Ok(TransformOutput {
                code: sheet.to_css(),
                map: None,
            })
        }
    }

    fn rewrite_sheet(&self, css: &str) -> Result<Stylesheet, FontScaleError> {
        let mut sheet = Stylesheet::parse(css)?;
        apply_rewriters(&mut sheet, &self.rewriters)?;
        Ok(sheet)
    }
}
