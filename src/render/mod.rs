// file: src/render/mod.rs
// description: terminal presentation of lookup results with staggered reveal
// reference: https://docs.rs/colored

pub mod card;

use crate::error::Result;
use crate::models::Quote;
use crate::session::View;
use colored::*;
use std::io::Write;
use std::time::Duration;

pub const TITLE: &str = "🪶 Classic Quotes 🪶";

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    width: usize,
    reveal_delay: Duration,
}

impl Renderer {
    pub fn new(color: bool, reveal_delay_ms: u64) -> Self {
        Self {
            color,
            width: card::DEFAULT_CARD_WIDTH,
            reveal_delay: Duration::from_millis(reveal_delay_ms),
        }
    }

    /// No colour and no reveal delay.
    pub fn plain() -> Self {
        Self::new(false, 0)
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn paint(&self, text: &str, style: impl Fn(ColoredString) -> ColoredString) -> String {
        if self.color {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn banner(&self) -> String {
        self.paint(TITLE, |s| s.bold())
    }

    pub fn card(&self, quote: &Quote) -> String {
        let lines = card::layout(quote, self.width);
        let last = lines.len().saturating_sub(1);

        lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                if idx == 0 || idx == last {
                    self.paint(line, |s| s.dimmed())
                } else {
                    self.paint(line, |s| s.italic())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn not_found(&self, query: &str) -> String {
        self.paint(&format!("No quotes found for “{}.”", query), |s| {
            s.italic()
        })
    }

    pub fn suggestions(&self, topics: &[&str]) -> String {
        topics
            .iter()
            .map(|t| format!("  {}", self.paint(t, |s| s.cyan())))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the view, pausing `reveal_delay` before every card after the first.
    pub async fn render<W: Write>(&self, view: View<'_>, out: &mut W) -> Result<()> {
        match view {
            View::Idle => {}
            View::NotFound(query) => {
                writeln!(out, "{}", self.not_found(query))?;
            }
            View::Quotes(results) => {
                for (idx, quote) in results.iter().enumerate() {
                    if idx > 0 && !self.reveal_delay.is_zero() {
                        tokio::time::sleep(self.reveal_delay).await;
                    }
                    writeln!(out, "{}", self.card(quote))?;
                    out.flush()?;
                }
            }
        }

        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true, 100)
    }
}
