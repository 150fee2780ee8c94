//! Example printing a table of bar styles at several progress levels

use barline::{Filler, FillerBuilder, ProgressState, RenderRequest};
use color_eyre::Result;
use comfy_table::Table;

const STYLES: &[&str] = &["[=>-]<+", "|#>.|", "(━╸─)", "[█▌░]", "[=の-]"];
const LEVELS: &[i64] = &[0, 1, 33, 66, 99, 100];

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut header = vec!["style".to_string()];
    header.extend(LEVELS.iter().map(|level| format!("{level}%")));

    let mut table = Table::new();
    table.set_header(header);

    let request = RenderRequest::new(16).trim_space(true);
    for style in STYLES {
        for reverse in [false, true] {
            let filler = FillerBuilder::new().style(*style).reverse(reverse).build()?;
            let mut row = vec![format!("{style}{}", if reverse { " rev" } else { "" })];
            row.extend(
                LEVELS
                    .iter()
                    .map(|&level| filler.render(&ProgressState::new(100, level), &request)),
            );
            table.add_row(row);
        }
    }

    // Refill overlay on the default style.
    let filler = FillerBuilder::new().build()?;
    let mut row = vec!["refill 30%".to_string()];
    row.extend(LEVELS.iter().map(|&level| {
        filler.render(&ProgressState::new(100, level).with_refill(30), &request)
    }));
    table.add_row(row);

    println!("{table}");
    Ok(())
}
