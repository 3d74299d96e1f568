//! Terminal front end for the `stepsearch` binary.
//!
//! Turns engine snapshots into text frames (a character map for mazes, a
//! coarse scatter plot plus a frontier listing for point graphs) and drives a
//! [`Scheduler`] to completion with optional pacing between steps.

use std::collections::HashSet;
use std::error::Error;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use stepsearch_core::{Point, Vec2};
use stepsearch_engine::{
    GridGraph, ProximityGraph, Scheduler, Snapshot, Solution, Status, Strategy, WALL,
    WeightedGraph, reconstruct,
};

// Map glyphs
pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const PATH: char = '*';
pub const FRONTIER: char = 'o';
pub const VISITED: char = '+';
pub const NODE: char = '.';

// Colours
const COL_WALL: Color = Color::Rgb { r: 100, g: 100, b: 130 };
const COL_ENDPOINT: Color = Color::Rgb { r: 255, g: 220, b: 80 };
const COL_PATH: Color = Color::Rgb { r: 50, g: 180, b: 255 };
const COL_FRONTIER: Color = Color::Rgb { r: 80, g: 200, b: 80 };
const COL_VISITED: Color = Color::Rgb { r: 120, g: 90, b: 60 };

/// Frontier sequences listed per frame for point graphs.
const FRONTIER_LINES: usize = 5;

// ---------------------------------------------------------------------------
// Driving
// ---------------------------------------------------------------------------

/// How [`drive`] paces and presents a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveOptions {
    /// Sleep between steps.
    pub delay: Duration,
    /// Skip snapshots and per-step output entirely.
    pub quiet: bool,
}

/// Run `sched` to a terminal status, handing every intermediate snapshot to
/// `show` unless `opts.quiet` is set.
pub fn drive<S, F>(
    sched: &mut Scheduler<S>,
    opts: DriveOptions,
    mut show: F,
) -> Result<Solution<S::Node>, Box<dyn Error>>
where
    S: Strategy,
    F: FnMut(&Snapshot<S::Node>) -> io::Result<()>,
{
    if opts.quiet {
        return Ok(sched.run()?);
    }
    loop {
        match sched.step() {
            Status::Running(snap) => {
                show(&snap)?;
                if !opts.delay.is_zero() {
                    thread::sleep(opts.delay);
                }
            }
            Status::Success(sol) => return Ok(sol),
            Status::Failure(e) => return Err(e.into()),
        }
    }
}

/// Re-cost `sol` by the graph's edge weights. Uninformed searches count
/// edges, which is not a distance on a weighted graph.
pub fn weigh<G: WeightedGraph>(graph: &G, sol: Solution<G::Node>) -> Solution<G::Node> {
    Solution {
        cost: reconstruct::path_cost(graph, &sol.path),
        path: sol.path,
    }
}

// ---------------------------------------------------------------------------
// Mazes
// ---------------------------------------------------------------------------

/// Character rows for a maze, overlaid with the visited set, the frontier
/// heads, `path`, and the two endpoints (later layers win).
pub fn maze_rows(
    grid: &GridGraph,
    start: Point,
    goal: Point,
    snap: Option<&Snapshot<Point>>,
    path: &[Point],
) -> Vec<String> {
    let (visited, frontier): (HashSet<Point>, HashSet<Point>) = match snap {
        Some(s) => (
            s.visited.iter().copied().collect(),
            s.frontier.iter().filter_map(|seq| seq.last().copied()).collect(),
        ),
        None => Default::default(),
    };
    let path: HashSet<Point> = path.iter().copied().collect();

    grid.render_rows(|p| {
        if p == start {
            Some(START)
        } else if p == goal {
            Some(GOAL)
        } else if path.contains(&p) {
            Some(PATH)
        } else if frontier.contains(&p) {
            Some(FRONTIER)
        } else if visited.contains(&p) {
            Some(VISITED)
        } else {
            None
        }
    })
}

// ---------------------------------------------------------------------------
// Point graphs
// ---------------------------------------------------------------------------

/// Coarse `rows` × `cols` character plot of a point graph. Nodes on `path`
/// are drawn as [`PATH`], `start` and `goal` as the endpoint glyphs, and the
/// rest as [`NODE`]. Several nodes may share a character cell.
pub fn plot_points(
    graph: &ProximityGraph,
    path: &[usize],
    start: usize,
    goal: Option<usize>,
    rows: usize,
    cols: usize,
) -> Vec<String> {
    let mut canvas = vec![vec![' '; cols]; rows];
    if rows == 0 || cols == 0 || graph.is_empty() {
        return canvas.into_iter().map(String::from_iter).collect();
    }

    let (lo, hi) = bounds(graph.points());
    let scale = |v: f64, lo: f64, hi: f64, n: usize| -> usize {
        let span = (hi - lo).max(f64::EPSILON);
        (((v - lo) / span) * (n - 1) as f64).round() as usize
    };
    let on_path: HashSet<usize> = path.iter().copied().collect();

    for (i, p) in graph.points().iter().enumerate() {
        let c = scale(p.x, lo.x, hi.x, cols);
        let r = scale(p.y, lo.y, hi.y, rows);
        let glyph = if i == start {
            START
        } else if Some(i) == goal {
            GOAL
        } else if on_path.contains(&i) {
            PATH
        } else {
            NODE
        };
        let cell = &mut canvas[r][c];
        // Endpoints and path nodes are never hidden by plain nodes.
        if *cell == ' ' || *cell == NODE {
            *cell = glyph;
        }
    }
    canvas.into_iter().map(String::from_iter).collect()
}

fn bounds(points: &[Vec2]) -> (Vec2, Vec2) {
    points.iter().fold(
        (
            Vec2::new(f64::INFINITY, f64::INFINITY),
            Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(lo, hi), p| {
            (
                Vec2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vec2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        },
    )
}

/// One line per leading frontier sequence: its node list and partial cost.
pub fn frontier_lines(graph: &ProximityGraph, snap: &Snapshot<usize>) -> Vec<String> {
    let mut lines = vec![format!(
        "step {}: {} in frontier, {} expanded",
        snap.step,
        snap.frontier.len(),
        snap.visited.len()
    )];
    lines.extend(snap.frontier.iter().take(FRONTIER_LINES).map(|seq| {
        format!(
            "  {} (cost {:.1})",
            format_path(seq),
            reconstruct::path_cost(graph, seq)
        )
    }));
    if snap.frontier.len() > FRONTIER_LINES {
        lines.push(format!("  ... {} more", snap.frontier.len() - FRONTIER_LINES));
    }
    lines
}

/// `a -> b -> c`
pub fn format_path<N: std::fmt::Display>(path: &[N]) -> String {
    path.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn glyph_color(ch: char) -> Option<Color> {
    match ch {
        WALL => Some(COL_WALL),
        START | GOAL => Some(COL_ENDPOINT),
        PATH => Some(COL_PATH),
        FRONTIER => Some(COL_FRONTIER),
        VISITED => Some(COL_VISITED),
        _ => None,
    }
}

/// Write `lines` with glyph colouring. Runs of the same colour share one
/// colour change.
pub fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        let mut current = None;
        for ch in line.chars() {
            let color = glyph_color(ch);
            if color != current {
                match color {
                    Some(c) => queue!(out, SetForegroundColor(c))?,
                    None => queue!(out, ResetColor)?,
                }
                current = color;
            }
            queue!(out, Print(ch))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

/// Clear the screen and draw a full frame.
pub fn present(out: &mut impl Write, header: &str, lines: &[String]) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::All),
        Print(header),
        Print("\n")
    )?;
    write_lines(out, lines)
}
