use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use queenforge::board::{Gene, ScoredChromosome};
use queenforge::fitness::{max_conflicts, Conflict};

fn format_genes(genes: &[Gene]) -> String {
    genes
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn fitness_cell(fitness: u32) -> Cell {
    let cell = Cell::new(fitness).set_alignment(CellAlignment::Right);
    if fitness == 0 {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

/// Final population, most fit first. `top` limits the rows shown.
pub fn print_population_table(population: &[ScoredChromosome], top: Option<usize>) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Board").add_attribute(Attribute::Bold),
        Cell::new("Fitness").fg(Color::Cyan),
    ]);

    let shown = top.unwrap_or(population.len()).min(population.len());
    for (rank, member) in population.iter().take(shown).enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(format!("[{}]", format_genes(member.genes()))),
            fitness_cell(member.fitness()),
        ]);
    }
    println!("{}", table);

    if shown < population.len() {
        println!("({} more not shown)", population.len() - shown);
    }
}

/// Draws the board with `Q` for queens. Rows past the edge are listed
/// underneath instead of drawn.
pub fn print_board_grid(name: &str, genes: &[Gene]) {
    println!("\nBoard: {}", name);
    let n = genes.len();
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in 0..n {
        let cells: Vec<Cell> = genes
            .iter()
            .map(|&g| {
                let mark = if g == row { "Q" } else { " " };
                Cell::new(mark).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);

    for (col, &g) in genes.iter().enumerate() {
        if g >= n {
            println!("  column {}: queen off the board at row {}", col, g);
        }
    }
}

pub fn print_conflict_report(genes: &[Gene], fitness: u32, conflicts: &[Conflict]) {
    println!("Board: [{}]", format_genes(genes));
    println!("Fitness: {} (max {})", fitness, max_conflicts(genes.len()));

    if conflicts.is_empty() {
        println!("No two queens attack each other.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Col A"),
        Cell::new("Col B"),
        Cell::new("Kind").fg(Color::Red),
    ]);
    for c in conflicts {
        table.add_row(vec![
            Cell::new(c.first).set_alignment(CellAlignment::Right),
            Cell::new(c.second).set_alignment(CellAlignment::Right),
            Cell::new(c.kind),
        ]);
    }
    println!("{}", table);
}
