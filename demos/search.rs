//! Stepwise terminal search demo.
//!
//! Run: cargo run --bin search -- --method astar --animate
//!
//! Without `--map` a random map is generated; `--seed` makes it repeatable.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use gridseek_core::{GridMap, Point, maptext};
use gridseek_demos::{HEIGHT, Layer, WIDTH, random_map, render};
use gridseek_paths::{Method, Search, SearchEngine, SearchStatus};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(about = "Watch BFS, greedy and A* searches expand over a grid")]
struct Options {
    /// Bordered map file: one border line, then rows where `1` is a wall.
    #[arg(long)]
    map: Option<PathBuf>,
    /// Map width in cells.
    #[arg(long, default_value_t = WIDTH)]
    width: i32,
    /// Map height in cells.
    #[arg(long, default_value_t = HEIGHT)]
    height: i32,
    /// Search strategy: bfs, dfs or astar.
    #[arg(long, default_value_t = Method::Bfs)]
    method: Method,
    /// Start cell as X,Y (defaults to the top-left corner).
    #[arg(long)]
    start: Option<Point>,
    /// Target cell as X,Y (defaults to the bottom-right corner).
    #[arg(long)]
    target: Option<Point>,
    /// Seed for the random map.
    #[arg(long)]
    seed: Option<u64>,
    /// Wall percentage for the random map.
    #[arg(long, default_value_t = 25)]
    wall_pct: u32,
    /// Print the grid after every expansion.
    #[arg(long)]
    animate: bool,
    /// Pause between animation frames, in milliseconds.
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
    /// Stop after this many expansions.
    #[arg(long)]
    max_steps: Option<usize>,
    /// Show A* estimates (g + h) instead of distances.
    #[arg(long)]
    estimates: bool,
}

fn load_map(opts: &Options) -> Result<GridMap, Box<dyn std::error::Error>> {
    let mut map = match &opts.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            maptext::parse_bordered(&text, opts.width, opts.height)
        }
        None => {
            let mut rng = match opts.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => rand::make_rng::<SmallRng>(),
            };
            random_map(&mut rng, opts.width, opts.height, opts.wall_pct)
        }
    };
    let start = opts.start.unwrap_or(Point::ZERO);
    let target = opts
        .target
        .unwrap_or(Point::new(opts.width - 1, opts.height - 1));
    // Picking a cell claims it even if it was a wall.
    for p in [start, target] {
        map.set_wall(p, false)?;
    }
    map.set_start(start)?;
    map.set_target(target)?;
    Ok(map)
}

fn run(opts: &Options) -> Result<SearchStatus, Box<dyn std::error::Error>> {
    let map = load_map(opts)?;
    let layer = if opts.estimates {
        Layer::Estimate
    } else {
        Layer::Steps
    };
    let mut engine = SearchEngine::new(&map, opts.method);

    let status = if opts.animate {
        loop {
            let status = engine.advance()?;
            print!("\x1b[2J\x1b[H");
            println!(
                "{} | step {} | frontier {}",
                opts.method,
                engine.expansions(),
                engine.frontier().len()
            );
            print!("{}", render(&map, &engine, None, layer));
            let out_of_budget = opts.max_steps.is_some_and(|l| engine.expansions() >= l);
            if status.is_terminal() || out_of_budget {
                break status;
            }
            std::thread::sleep(Duration::from_millis(opts.delay_ms));
        }
    } else {
        engine.run(opts.max_steps)?
    };

    let path = engine.reconstruct_path()?;
    println!();
    print!("{}", render(&map, &engine, path.as_deref(), layer));
    match &path {
        Some(path) => println!(
            "{}: found a path of {} steps after {} expansions",
            opts.method,
            path.len() - 1,
            engine.expansions()
        ),
        None => println!(
            "{}: {} after {} expansions",
            opts.method,
            status,
            engine.expansions()
        ),
    }
    Ok(status)
}

fn main() {
    let opts = Options::parse();
    match run(&opts) {
        Ok(SearchStatus::Found) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
