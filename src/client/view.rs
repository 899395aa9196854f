use std::io::Write;

use crate::engine::prelude::*;

/// Plain-text rendering of a game in progress.
///
/// ```text
/// Canvas: R0
/// P1: R1
/// > P2: R2
/// Hand: R3
/// ```
///
/// The hand line carries no trailing newline.
pub struct TextView<'a> {
    model: &'a dyn RedGameModel,
}

impl<'a> TextView<'a> {
    pub fn new(model: &'a dyn RedGameModel) -> Self {
        Self { model }
    }

    pub fn render(&self) -> Result<String> {
        let canvas = self.model.canvas()?;
        let mut out = String::from("Canvas: ");
        out.push(canvas.color().letter());
        if canvas.is_sentinel() {
            out.push('0');
        }
        out.push('\n');

        let winning = self.model.winning_palette_index()?;
        for idx in 0..self.model.num_palettes()? {
            if idx == winning {
                out.push_str("> ");
            }
            let palette = self.model.palette(idx)?;
            out.push_str(&format!("P{}: {}\n", idx + 1, joined(&palette)));
        }

        out.push_str("Hand: ");
        out.push_str(&joined(&self.model.hand()?));
        Ok(out)
    }

    pub fn render_to<W: Write + ?Sized>(&self, out: &mut W) -> color_eyre::Result<()> {
        out.write_all(self.render()?.as_bytes())?;
        Ok(())
    }
}

fn joined(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
