use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use cubewalk_core::{enumerate_walks, render_line, AdjacencyTable};

#[derive(Parser, Debug)]
#[command(name = "cubewalk", about = "Cube vertex walk token generator")]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();
    let table = AdjacencyTable::cube();
    let walks = enumerate_walks(&table);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_line(&walks))?;
    Ok(())
}
