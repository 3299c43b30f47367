use crate::reports;
use clap::Args;
use queenforge::board::parse_board;
use queenforge::error::QfResult;
use queenforge::fitness::{conflicts, evaluate};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Rows per column, e.g. "1,3,0,2"
    pub board: String,

    /// Expected board size; defaults to the number of rows given
    #[arg(short = 'q', long)]
    pub queens: Option<usize>,
}

pub fn run(args: CheckArgs) -> QfResult<()> {
    let given = args
        .board
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .count();
    let genes = parse_board(&args.board, args.queens.unwrap_or(given))?;

    let fitness = evaluate(&genes);
    reports::print_conflict_report(&genes, fitness, &conflicts(&genes));
    reports::print_board_grid("INPUT", &genes);
    Ok(())
}
