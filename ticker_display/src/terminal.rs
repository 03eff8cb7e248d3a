//! Terminal stand-in for the round display.
//!
//! Each distinct frame is printed as one line; identical consecutive frames are skipped
//! so a 100 ms loop does not flood the terminal.
use std::io::Write;

use log::{debug, error};
use ticker_common::Quote;
use ticker_common::render::Renderer;
use ticker_common::view::{Frame, Status, Trend};

/// Renderer writing frames to any `Write` sink.
pub struct TerminalRenderer<W: Write> {
    out: W,
    last_frame: Option<Frame>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_frame: None,
        }
    }

    fn write_frame(&mut self, frame: &Frame) -> std::io::Result<()> {
        let arrow = match frame.trend {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => " ",
        };
        writeln!(
            self.out,
            "{:<6} {:>10} {} {:<16} | {} | {} | {} | {}",
            frame.title,
            frame.price,
            arrow,
            frame.change,
            frame.bid_ask,
            frame.volume,
            frame.high_low,
            frame.status
        )?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, ticker: &str, quote: Option<&Quote>) {
        let frame = Frame::new(ticker, quote);
        if self.last_frame.as_ref() == Some(&frame) {
            return;
        }
        if let Err(e) = self.write_frame(&frame) {
            error!("Failed to draw {}: {}", ticker, e);
        }
        self.last_frame = Some(frame);
    }

    fn status(&mut self, ticker: &str, status: Status) {
        debug!("{}: {}", ticker, status);
    }
}
