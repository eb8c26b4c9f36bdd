use std::env;
use std::error::Error;

use gokigen::{Grid, Puzzle, Solver};

const DEFAULT_SEED: &str = "1a10d223b2d03a21c2a20a01c";

fn main() -> Result<(), Box<dyn Error>> {
    let seed = env::args().nth(1).unwrap_or_else(|| DEFAULT_SEED.to_owned());

    let puzzle = Puzzle::parse(&seed)?;
    let mut grid = Grid::new(puzzle.size() - 1);
    let mut solver = Solver::new(&puzzle, &mut grid);

    let solution = solver.solve();
    if solution.contains('_') {
        println!("Solve process failed");
    } else {
        println!("Success!");
    }

    println!("{}", solver.render());

    Ok(())
}
