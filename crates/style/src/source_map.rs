//! Source map (revision 3) output for serialized stylesheets.

pub use sourcemap::SourceMap;
use sourcemap::SourceMapBuilder;

/// Records one mapping per printed node start, all pointing into a single
/// source file. Lines and columns are zero-based.
pub(crate) struct MapRecorder {
    builder: SourceMapBuilder,
    source_id: u32,
}

impl MapRecorder {
    pub(crate) fn new(file: &str, source_content: Option<&str>) -> Self {
        let mut builder = SourceMapBuilder::new(Some(file));
        let source_id = builder.add_source(file);
        if let Some(content) = source_content {
            builder.set_source_contents(source_id, Some(content));
        }
        Self { builder, source_id }
    }

    pub(crate) fn add(&mut self, line: u32, column: u32, source_line: u32, source_column: u32) {
        self.builder.add_raw(
            line,
            column,
            source_line,
            source_column,
            Some(self.source_id),
            None,
            false,
        );
    }

    pub(crate) fn finish(self) -> SourceMap {
        self.builder.into_sourcemap()
    }
}

/// Serializes a map to its JSON form.
pub fn to_json_bytes(map: &SourceMap) -> Result<Vec<u8>, sourcemap::Error> {
    let mut bytes = Vec::new();
    map.to_writer(&mut bytes)?;
    Ok(bytes)
}
