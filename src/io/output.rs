use crate::comparison::Comparison;
use crate::core::ScoreResult;
use std::io::Write;

pub use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()>;

    fn write_score(
        &mut self,
        price: f64,
        average_price: f64,
        result: &ScoreResult,
    ) -> anyhow::Result<()>;

    /// Push buffered output to the destination, surfacing write failures.
    fn flush(&mut self) -> anyhow::Result<()>;
}

/// Build the writer for `format`. With `styled` false the terminal table is
/// rendered without ANSI styling, as needed for file destinations.
pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    styled: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer).styled(styled)),
    }
}
