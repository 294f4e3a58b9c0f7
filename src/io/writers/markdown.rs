use crate::comparison::{display_price, format_address, format_usd, Comparison, OrgCard};
use crate::core::ScoreResult;
use crate::io::output::OutputWriter;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        self.write_header(comparison)?;
        self.write_summary(comparison)?;
        self.write_cards(comparison)?;
        Ok(())
    }

    fn write_score(
        &mut self,
        price: f64,
        average_price: f64,
        result: &ScoreResult,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "# Mario Price Score")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Price | Average | MPS | Tier |")?;
        writeln!(self.writer, "|-------|---------|-----|------|")?;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            format_usd(price),
            format_usd(average_price),
            result.score,
            result.tier
        )?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        let title = comparison
            .procedure_name
            .as_deref()
            .unwrap_or("Price Comparison");
        writeln!(self.writer, "# {}", title)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Facilities | {} |", comparison.cards.len())?;
        writeln!(self.writer, "| Price line-items | {} |", comparison.total_providers())?;
        writeln!(
            self.writer,
            "| Average price | {} |",
            format_usd(comparison.average_price)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cards(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        if comparison.cards.is_empty() {
            writeln!(self.writer, "_No facilities found for this procedure._")?;
            return Ok(());
        }

        writeln!(self.writer, "## Facilities")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Organization | Price | MPS | Savings | Providers | Address |"
        )?;
        writeln!(
            self.writer,
            "|--------------|-------|-----|---------|-----------|---------|"
        )?;
        for card in &comparison.cards {
            self.write_card_row(card)?;
        }
        Ok(())
    }

    fn write_card_row(&mut self, card: &OrgCard) -> anyhow::Result<()> {
        let name = if card.marios_pick {
            format!("{} (Mario's Pick)", card.group.org_name)
        } else {
            card.group.org_name.clone()
        };
        let score = card
            .score
            .map(|s| format!("{} ({})", s.score, s.tier))
            .unwrap_or_else(|| "-".to_string());
        let savings = card
            .savings_percentage
            .map(|pct| format!("{}% below avg", pct))
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} |",
            name,
            display_price(&card.group.price_range),
            score,
            savings,
            card.group.count_provider,
            format_address(&card.group)
        )?;
        Ok(())
    }
}
