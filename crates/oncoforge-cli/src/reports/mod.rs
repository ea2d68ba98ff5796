use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use oncoforge_core::events::{map_state_to_residue, Event};
use oncoforge_core::search::SearchResult;
use oncoforge_core::trajectory::TrajectorySample;

/// Rows of the history table shown inline; the JSON record carries the rest.
const HISTORY_PREVIEW_ROWS: usize = 15;

pub fn print_trajectory_summary(samples: &[TrajectorySample]) {
    if samples.is_empty() {
        println!("\nNo samples produced (day count <= 0).");
        return;
    }

    let first = &samples[0];
    let last = samples.last().expect("non-empty");
    let peak = samples
        .iter()
        .fold(f64::MIN, |acc, s| acc.max(s.impulse));

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Days").add_attribute(Attribute::Bold),
        Cell::new("Initial State").add_attribute(Attribute::Bold),
        Cell::new("Final State").add_attribute(Attribute::Bold),
        Cell::new("Final Memory").add_attribute(Attribute::Bold),
        Cell::new("Peak Impulse").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(samples.len()),
        Cell::new(format!("{:.4}", first.state)),
        Cell::new(format!("{:.4}", last.state)),
        Cell::new(format!("{:.4}", last.memory)),
        Cell::new(format!("{:.4}", peak)).fg(Color::Red),
    ]);

    println!("\n{}", table);
}

pub fn print_events(events: &[Event], protein_length: Option<usize>, offset: u64) {
    if events.is_empty() {
        println!("\nNo mutation events above the threshold.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Time").add_attribute(Attribute::Bold),
        Cell::new("Impulse").add_attribute(Attribute::Bold),
        Cell::new("PRNG State").add_attribute(Attribute::Bold),
    ];
    if protein_length.is_some() {
        header.push(Cell::new("Residue").add_attribute(Attribute::Bold));
    }
    table.add_row(header);

    for event in events {
        let mut row = vec![
            Cell::new(event.step),
            Cell::new(format!("{:.1}", event.time)),
            Cell::new(format!("{:.4}", event.impulse)).fg(Color::Red),
            Cell::new(event.prng_state),
        ];
        if let Some(len) = protein_length {
            let residue = map_state_to_residue(event.prng_state, offset, len);
            row.push(Cell::new(residue).fg(Color::Cyan));
        }
        table.add_row(row);
    }

    let columns = if protein_length.is_some() { 5 } else { 4 };
    for i in 0..columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n{}", table);
}

pub fn print_search_summary(result: &SearchResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("").add_attribute(Attribute::Bold),
        Cell::new("Protein").add_attribute(Attribute::Bold),
        Cell::new("Impact").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Baseline"),
        Cell::new(&result.baseline_protein),
        Cell::new(format!("{:.3}", result.baseline_impact)),
    ]);
    table.add_row(vec![
        Cell::new("Best").add_attribute(Attribute::Bold),
        Cell::new(&result.best_protein).fg(Color::Green),
        Cell::new(format!("{:.3}", result.best_impact)).fg(Color::Green),
    ]);

    println!("\n{}", table);

    if result.history.is_empty() {
        println!("No distinct viable mutants were produced.");
        return;
    }

    let mut history = Table::new();
    history
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    history.add_row(vec![
        Cell::new("Iter").add_attribute(Attribute::Bold),
        Cell::new("Mutant Protein").add_attribute(Attribute::Bold),
        Cell::new("Impact").add_attribute(Attribute::Bold),
    ]);
    for record in result.history.iter().take(HISTORY_PREVIEW_ROWS) {
        let improved = record.impact == result.best_impact;
        let impact_cell = if improved {
            Cell::new(format!("{:.3}", record.impact)).fg(Color::Green)
        } else {
            Cell::new(format!("{:.3}", record.impact))
        };
        history.add_row(vec![
            Cell::new(record.iteration),
            Cell::new(&record.protein),
            impact_cell,
        ]);
    }

    println!("{}", history);
    if result.history.len() > HISTORY_PREVIEW_ROWS {
        println!(
            "... {} further history entries (see the JSON record)",
            result.history.len() - HISTORY_PREVIEW_ROWS
        );
    }
}
