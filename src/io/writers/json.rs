use crate::comparison::Comparison;
use crate::core::ScoreResult;
use crate::io::output::OutputWriter;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    price: f64,
    average_price: f64,
    #[serde(flatten)]
    result: &'a ScoreResult,
    color_family: &'static str,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(comparison)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_score(
        &mut self,
        price: f64,
        average_price: f64,
        result: &ScoreResult,
    ) -> anyhow::Result<()> {
        let report = ScoreReport {
            price,
            average_price,
            result,
            color_family: result.tier.color_family(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
