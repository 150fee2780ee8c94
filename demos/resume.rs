//! Example animating a resumed transfer, sized to the terminal
//!
//! Run with `RUST_LOG=barline=trace` to see the filler's log events.

use barline::{Bar, FillerBuilder, ProgressState, WidthSource};
use color_eyre::Result;
use console::Term;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TOTAL: i64 = 2_048;
const ALREADY_ON_DISK: i64 = 700;
const CHUNK: i64 = 37;

/// Reports the current terminal width, minus room for the counter.
struct TermWidth {
    term: Term,
    reserved: usize,
}

impl WidthSource for TermWidth {
    fn available_width(&self) -> usize {
        let (_rows, columns) = self.term.size();
        usize::from(columns).saturating_sub(self.reserved)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let term = Term::stdout();
    let width = TermWidth {
        term: term.clone(),
        reserved: 12,
    };

    let mut bar = Bar::new(FillerBuilder::new().build_refillable()?);
    bar.set_refill(ALREADY_ON_DISK);

    let mut ticker = tokio::time::interval(Duration::from_millis(30));
    let mut current = ALREADY_ON_DISK;
    loop {
        ticker.tick().await;
        let line = bar.draw(&ProgressState::new(TOTAL, current), &width);
        term.clear_line()?;
        term.write_str(&format!("{line}{current:>5}/{TOTAL}"))?;

        if current >= TOTAL {
            break;
        }
        current = (current + CHUNK).min(TOTAL);
    }
    term.write_line("")?;

    Ok(())
}
