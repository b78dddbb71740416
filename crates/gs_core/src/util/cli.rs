use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Maze escape demo", long_about = None)]
struct Cli {
    /// Width of the maze in cells
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Height of the maze in cells
    #[arg(long, default_value_t = 100)]
    height: usize,

    /// Seed for the maze randomizer
    #[arg(short, long, default_value_t = 20231113)]
    seed: u64,

    /// Number of extra walls to remove after generation
    #[arg(short, long, value_name = "walls", default_value_t = 250)]
    remove_walls: usize,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub remove_walls: usize,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        width: cli.width.max(2),
        height: cli.height.max(2),
        seed: cli.seed,
        remove_walls: cli.remove_walls,
    }
}
