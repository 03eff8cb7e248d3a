//! Display side of the loop.

use crate::model::quote::Quote;
use crate::view::Status;

/// Draws the active ticker. Implementations must tolerate a missing quote and any
/// subset of missing fields; see [`Frame`](crate::view::Frame) for the text layout.
pub trait Renderer {
    /// Draw `ticker` with its cached quote, or a "no data yet" screen.
    fn draw(&mut self, ticker: &str, quote: Option<&Quote>);

    /// Show a transient status for `ticker` (fetch in progress or just failed).
    fn status(&mut self, _ticker: &str, _status: Status) {}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw(&mut self, ticker: &str, quote: Option<&Quote>) {
        (**self).draw(ticker, quote)
    }

    fn status(&mut self, ticker: &str, status: Status) {
        (**self).status(ticker, status)
    }
}
