//! ruta — interactive terminal route planner.
//!
//! Collects a board, start/goal markers and obstacles from stdin, then runs
//! the shortest-path search and renders the result with colored cells.

mod input;
mod render;

use std::io::{self, BufRead, Write};

use ruta_core::{Grid, Point};
use ruta_paths::shortest_path;

use crate::input::Command;

/// Default board: 6 rows x 9 columns.
const DEFAULT_WIDTH: i32 = 9;
const DEFAULT_HEIGHT: i32 = 6;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let Some(mut grid) = setup_board(&mut lines)? else {
        return Ok(());
    };
    edit_obstacles(&mut lines, &mut grid)?;

    match shortest_path(&grid) {
        Some(path) => {
            log::debug!("route found with {} steps", path.len() - 1);
            println!("\nRoute found ({} steps):", path.len() - 1);
            print!("{}", render::render_board(&grid, &path));
        }
        None => println!("\nNo route exists with the current obstacles."),
    }
    Ok(())
}

/// Print `msg` and read one line. `None` on end of input.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, msg: &str) -> io::Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Collect board dimensions and the start/goal markers, re-prompting on
/// invalid input. `None` when stdin closes before a board is complete.
fn setup_board<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<Option<Grid>> {
    loop {
        let Some(size_line) = prompt(
            lines,
            &format!("Board size as `rows cols` (enter for {DEFAULT_HEIGHT} {DEFAULT_WIDTH}): "),
        )?
        else {
            return Ok(None);
        };
        let (width, height) = if size_line.trim().is_empty() {
            (DEFAULT_WIDTH, DEFAULT_HEIGHT)
        } else {
            match input::parse_size(&size_line) {
                Some(size) => size,
                None => {
                    println!("Expected two numbers, e.g. `6 9`.");
                    continue;
                }
            }
        };

        let Some(start) = prompt_cell(lines, "Start cell as `row col`: ")? else {
            return Ok(None);
        };
        let Some(goal) = prompt_cell(lines, "Goal cell as `row col`: ")? else {
            return Ok(None);
        };

        match Grid::new(width, height, start, goal) {
            Ok(grid) => return Ok(Some(grid)),
            Err(err) => println!("{err}"),
        }
    }
}

/// Prompt until a well-formed cell is entered. `None` on end of input.
fn prompt_cell<B: BufRead>(lines: &mut io::Lines<B>, msg: &str) -> io::Result<Option<Point>> {
    loop {
        let Some(line) = prompt(lines, msg)? else {
            return Ok(None);
        };
        match input::parse_cell(&line) {
            Some(p) => return Ok(Some(p)),
            None => println!("Expected `row col`, e.g. `0 0`."),
        }
    }
}

/// Obstacle editing loop: render the board, apply `add`/`remove` commands,
/// stop on `done` or end of input.
fn edit_obstacles<B: BufRead>(lines: &mut io::Lines<B>, grid: &mut Grid) -> io::Result<()> {
    loop {
        print!("{}", render::render_board(grid, &[]));
        let Some(line) = prompt(lines, "Obstacles — `add R C`, `remove R C`, or `done`: ")?
        else {
            return Ok(());
        };
        let result = match input::parse_command(&line) {
            Some(Command::Add(p)) => grid.add_obstacle(p),
            Some(Command::Remove(p)) => grid.remove_obstacle(p),
            Some(Command::Done) => return Ok(()),
            None => {
                println!("Unrecognized command.");
                continue;
            }
        };
        if let Err(err) = result {
            println!("{err}");
        }
    }
}
