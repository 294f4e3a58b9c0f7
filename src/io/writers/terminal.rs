use crate::comparison::{display_price, format_address, format_usd, Comparison, OrgCard};
use crate::core::{ColorTier, ScoreResult};
use crate::io::output::OutputWriter;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    styled: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            styled: true,
        }
    }

    /// Disable to write plain text regardless of whether stdout is a tty.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    fn paint(&self, text: ColoredString) -> String {
        if self.styled {
            text.to_string()
        } else {
            text.clear().to_string()
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn tier_color(tier: ColorTier) -> Color {
    match tier {
        ColorTier::Excellent => Color::Green,
        ColorTier::Good => Color::Blue,
        ColorTier::Fair => Color::DarkYellow,
        ColorTier::Poor => Color::Red,
    }
}

fn colorize_tier(text: &str, tier: ColorTier) -> ColoredString {
    match tier {
        ColorTier::Excellent => text.green(),
        ColorTier::Good => text.blue(),
        ColorTier::Fair => text.yellow(),
        ColorTier::Poor => text.red(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_comparison(&mut self, comparison: &Comparison) -> anyhow::Result<()> {
        let title = comparison
            .procedure_name
            .as_deref()
            .unwrap_or("Price Comparison");

        writeln!(self.writer)?;
        let heading = self.paint(title.bold().cyan());
        writeln!(self.writer, "{}", heading)?;
        writeln!(
            self.writer,
            "{} options nearby, {} price line-items, average {}",
            comparison.cards.len(),
            comparison.total_providers(),
            format_usd(comparison.average_price)
        )?;
        writeln!(self.writer)?;

        if comparison.cards.is_empty() {
            writeln!(self.writer, "No facilities found for this procedure.")?;
            return Ok(());
        }

        let mut table = Table::new();
        if !self.styled {
            table.force_no_tty();
        }
        table.load_preset(UTF8_FULL).set_header(vec![
            "Organization",
            "Price",
            "MPS",
            "Savings",
            "Network",
            "Providers",
            "Address",
        ]);
        for card in &comparison.cards {
            table.add_row(card_row(card));
        }
        writeln!(self.writer, "{}", table)?;
        Ok(())
    }

    fn write_score(
        &mut self,
        price: f64,
        average_price: f64,
        result: &ScoreResult,
    ) -> anyhow::Result<()> {
        let heading = self.paint("Mario Price Score for".bold());
        let score = self.paint(colorize_tier(&result.score.to_string(), result.tier).bold());
        let label = self.paint(colorize_tier(result.tier.label(), result.tier));
        writeln!(
            self.writer,
            "{} {} vs average {}",
            heading,
            format_usd(price),
            format_usd(average_price)
        )?;
        writeln!(self.writer, "  MPS: {} ({})", score, label)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn card_row(card: &OrgCard) -> Vec<Cell> {
    let name = if card.marios_pick {
        Cell::new(format!("{}  [Mario's Pick]", card.group.org_name)).fg(Color::Cyan)
    } else {
        Cell::new(&card.group.org_name)
    };
    let score = match card.score {
        Some(result) => Cell::new(result.score).fg(tier_color(result.tier)),
        None => Cell::new("-"),
    };
    let savings = card
        .savings_percentage
        .map(|pct| format!("{}% below avg", pct))
        .unwrap_or_else(|| "-".to_string());
    let network = if card.group.in_network {
        "In-Network"
    } else {
        "Out-of-Network"
    };

    vec![
        name,
        Cell::new(display_price(&card.group.price_range)),
        score,
        Cell::new(savings),
        Cell::new(network),
        Cell::new(card.group.count_provider),
        Cell::new(format_address(&card.group)),
    ]
}
