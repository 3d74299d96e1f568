//! Animate a search run in the terminal.
//!
//! Run: cargo run --bin stepsearch -- maze --algo dfs --delay-ms 20
//!      cargo run --bin stepsearch -- tour --algo beam --width 2 --seed 7

use std::error::Error;
use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use stepsearch_demo::{
    DriveOptions, drive, format_path, frontier_lines, maze_rows, plot_points, present, weigh,
    write_lines,
};
use stepsearch_engine::{
    DEFAULT_BEAM_WIDTH, Informed, Problem, ProximityGraph, Scheduler, SchedulerConfig, Solution,
    Strategy, Uninformed,
};
use stepsearch_gen::{MazeConfig, MazeGen, PointGen, ScatterConfig};

const PLOT_ROWS: usize = 20;
const PLOT_COLS: usize = 60;

/// Step-by-step graph search in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// RNG seed for the generated instance (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Give up after this many steps
    #[arg(long, global = true)]
    max_steps: Option<usize>,

    /// Pause between steps, in milliseconds
    #[arg(long, global = true, default_value_t = 0)]
    delay_ms: u64,

    /// Print only the final result
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the exit of a random walled maze
    Maze {
        #[arg(long, value_enum, default_value_t = Algo::Bfs)]
        algo: Algo,
        #[arg(long, default_value_t = MazeConfig::default().rows)]
        rows: i32,
        #[arg(long, default_value_t = MazeConfig::default().cols)]
        cols: i32,
        /// Chance that an interior cell is a wall
        #[arg(long, default_value_t = MazeConfig::default().wall_probability)]
        wall_probability: f64,
    },
    /// Route from the first to the last of a set of scattered points
    Route {
        #[arg(long, value_enum, default_value_t = Algo::Astar)]
        algo: Algo,
        #[arg(long, default_value_t = ScatterConfig::default().count)]
        count: usize,
        /// Neighbors linked per point
        #[arg(short, long, default_value_t = ScatterConfig::default().k)]
        k: usize,
        /// Beam width
        #[arg(long, default_value_t = DEFAULT_BEAM_WIDTH)]
        width: usize,
    },
    /// Shortest closed tour through every city
    Tour {
        #[arg(long, value_enum, default_value_t = Algo::Astar)]
        algo: Algo,
        #[arg(long, default_value_t = ScatterConfig::tour().count)]
        count: usize,
        /// Beam width
        #[arg(long, default_value_t = DEFAULT_BEAM_WIDTH)]
        width: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Algo {
    Bfs,
    Dfs,
    Beam,
    Astar,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {seed}");
    let rng = StdRng::seed_from_u64(seed);
    let config = SchedulerConfig {
        max_steps: args.max_steps,
    };
    let opts = DriveOptions {
        delay: Duration::from_millis(args.delay_ms),
        quiet: args.quiet,
    };

    match args.command {
        Command::Maze {
            algo,
            rows,
            cols,
            wall_probability,
        } => {
            let cfg = MazeConfig {
                rows,
                cols,
                wall_probability,
            };
            run_maze(MazeGen::new(cfg, rng), algo, config, opts)
        }
        Command::Route {
            algo,
            count,
            k,
            width,
        } => {
            let cfg = ScatterConfig {
                count,
                k,
                ..ScatterConfig::default()
            };
            let graph = PointGen::new(cfg, rng).proximity_graph();
            run_route(&graph, algo, width, config, opts)
        }
        Command::Tour { algo, count, width } => {
            let cfg = ScatterConfig {
                count,
                ..ScatterConfig::tour()
            };
            let graph = PointGen::new(cfg, rng).proximity_graph();
            run_tour(&graph, algo, width, config, opts)
        }
    }
}

fn run_maze(
    mut maze_gen: MazeGen<StdRng>,
    algo: Algo,
    config: SchedulerConfig,
    opts: DriveOptions,
) -> Result<(), Box<dyn Error>> {
    let maze = maze_gen.generate();
    let (grid, start, goal) = (&maze.grid, maze.start, maze.goal);
    let strategy = match algo {
        Algo::Bfs => Uninformed::bfs(grid, start, goal)?,
        Algo::Dfs => Uninformed::dfs(grid, start, goal)?,
        Algo::Beam | Algo::Astar => {
            return Err(format!("{algo:?} needs a weighted point graph; use bfs or dfs").into());
        }
    };
    let name = strategy.name();
    let mut sched = Scheduler::with_config(strategy, config);
    let mut out = io::stdout();

    let result = drive(&mut sched, opts, |snap| {
        let current = snap.frontier.first().map(Vec::as_slice).unwrap_or_default();
        let header = format!(
            "{name} | step {} | frontier {} | visited {}",
            snap.step,
            snap.frontier.len(),
            snap.visited.len()
        );
        present(&mut out, &header, &maze_rows(grid, start, goal, Some(snap), current))
    });

    let path = result.as_ref().map(|s| s.path.as_slice()).unwrap_or_default();
    write_lines(&mut out, &maze_rows(grid, start, goal, None, path))?;
    report(name, sched.steps(), result)
}

fn run_route(
    graph: &ProximityGraph,
    algo: Algo,
    width: usize,
    config: SchedulerConfig,
    opts: DriveOptions,
) -> Result<(), Box<dyn Error>> {
    let (start, goal) = (0, graph.len().saturating_sub(1));
    let mut out = io::stdout();

    let outcome = match algo {
        Algo::Bfs | Algo::Dfs => {
            let strategy = if algo == Algo::Bfs {
                Uninformed::bfs(graph, start, goal)?
            } else {
                Uninformed::dfs(graph, start, goal)?
            };
            let name = strategy.name();
            let mut sched = Scheduler::with_config(strategy, config);
            let result = drive(&mut sched, opts, |snap| {
                present(&mut out, name, &frontier_lines(graph, snap))
            })
            .map(|sol| weigh(graph, sol));
            (name, sched.steps(), result)
        }
        Algo::Beam | Algo::Astar => {
            let problem = Problem::route(graph, start, goal)?;
            let strategy = informed(problem, algo, width)?;
            let name = strategy.name();
            let mut sched = Scheduler::with_config(strategy, config);
            let result = drive(&mut sched, opts, |snap| {
                present(&mut out, name, &frontier_lines(graph, snap))
            });
            (name, sched.steps(), result)
        }
    };

    let (name, steps, result) = outcome;
    let path = result.as_ref().map(|s| s.path.as_slice()).unwrap_or_default();
    write_lines(
        &mut out,
        &plot_points(graph, path, start, Some(goal), PLOT_ROWS, PLOT_COLS),
    )?;
    report(name, steps, result)
}

fn run_tour(
    graph: &ProximityGraph,
    algo: Algo,
    width: usize,
    config: SchedulerConfig,
    opts: DriveOptions,
) -> Result<(), Box<dyn Error>> {
    let problem = Problem::tour(graph, 0)?;
    let strategy = informed(problem, algo, width)?;
    let name = strategy.name();
    let mut sched = Scheduler::with_config(strategy, config);
    let mut out = io::stdout();

    let result = drive(&mut sched, opts, |snap| {
        present(&mut out, name, &frontier_lines(graph, snap))
    });

    let path = result.as_ref().map(|s| s.path.as_slice()).unwrap_or_default();
    write_lines(
        &mut out,
        &plot_points(graph, path, problem.start(), None, PLOT_ROWS, PLOT_COLS),
    )?;
    report(name, sched.steps(), result)
}

fn informed(problem: Problem<'_>, algo: Algo, width: usize) -> Result<Informed<'_>, Box<dyn Error>> {
    match algo {
        Algo::Beam => Ok(Informed::beam(problem, width)?),
        Algo::Astar => Ok(Informed::astar(problem)),
        Algo::Bfs | Algo::Dfs => {
            Err(format!("{algo:?} ignores edge costs; use beam or astar").into())
        }
    }
}

fn report<N: std::fmt::Display>(
    name: &str,
    steps: usize,
    result: Result<Solution<N>, Box<dyn Error>>,
) -> Result<(), Box<dyn Error>> {
    let sol = result?;
    println!(
        "{name}: {} nodes, cost {:.1}, {steps} steps",
        sol.path.len(),
        sol.cost
    );
    println!("{}", format_path(&sol.path));
    Ok(())
}
