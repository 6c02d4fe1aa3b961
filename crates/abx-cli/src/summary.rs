use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use abx_cli::pipeline::{AnalyzeOutcome, ValidateOutcome};
use abx_model::{AntibioticResult, CombinationResult};

pub fn print_analysis(outcome: &AnalyzeOutcome, top: Option<usize>) {
    let results = &outcome.results;
    println!("Input: {}", outcome.input.display());
    println!("Records: {}", results.record_count);
    println!(
        "Antibiotics retained: {} (threshold {}%)",
        results.retained.len(),
        results.options.threshold
    );
    match &outcome.reports {
        Some(paths) => {
            println!("Output: {}", outcome.output_dir.display());
            for path in paths.iter() {
                println!("  {}", path.display());
            }
        }
        None => println!("Output: none (dry run)"),
    }

    let interval = format!("{}% CI", results.options.confidence_level);
    let limit = top.unwrap_or(usize::MAX);

    println!();
    println!("Antibiotics:");
    println!("{}", antibiotic_table(&results.antibiotics, &interval, limit));
    print_truncation(results.antibiotics.len(), limit);

    println!();
    println!("Combinations:");
    println!("{}", combination_table(&results.combinations, &interval, limit));
    print_truncation(results.combinations.len(), limit);
}

pub fn print_validation(outcome: &ValidateOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Records: {}", outcome.record_count);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Antibiotic"),
        header_cell("S"),
        header_cell("R"),
        header_cell("N"),
        header_cell("Tested %"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in &outcome.columns {
        table.add_row(vec![
            name_cell(&column.name),
            count_cell(column.susceptible, Color::Green),
            count_cell(column.resistant, Color::Red),
            dim_cell(column.not_tested),
            Cell::new(format!("{:.2}", column.tested_percentage)),
        ]);
    }
    println!("{table}");
    println!("Table is valid.");
}

fn antibiotic_table(results: &[AntibioticResult], interval: &str, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Antibiotic"),
        header_cell("Susceptible %"),
        header_cell(interval),
        header_cell("S"),
        header_cell("R"),
        header_cell("Tested %"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [1, 3, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 2, CellAlignment::Center);
    for result in results.iter().take(limit) {
        table.add_row(vec![
            name_cell(&result.antibiotic),
            percent_cell(result.susceptibility),
            interval_cell(result.lower_bound, result.upper_bound),
            Cell::new(result.susceptible),
            Cell::new(result.resistant),
            Cell::new(format!("{:.2}", result.tested_percentage)),
        ]);
    }
    table
}

fn combination_table(results: &[CombinationResult], interval: &str, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Combination"),
        header_cell("Local %"),
        header_cell(&format!("Local {interval}")),
        header_cell("Global %"),
        header_cell(&format!("Global {interval}")),
        header_cell("Tested"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [1, 3, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for result in results.iter().take(limit) {
        table.add_row(vec![
            name_cell(&result.label()),
            percent_cell(result.local_effectiveness),
            interval_cell(result.local_lower, result.local_upper),
            percent_cell(result.global_effectiveness),
            interval_cell(result.global_lower, result.global_upper),
            Cell::new(result.tested),
        ]);
    }
    table
}

fn print_truncation(total: usize, limit: usize) {
    if total > limit {
        println!("({} more not shown)", total - limit);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn name_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn percent_cell(value: f64) -> Cell {
    let color = if value >= 80.0 {
        Color::Green
    } else if value >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{value:.2}")).fg(color)
}

fn interval_cell(lower: f64, upper: f64) -> Cell {
    Cell::new(format!("{lower:.2} - {upper:.2}"))
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
