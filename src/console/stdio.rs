//! `Console` over real stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::grid::Grid;

use super::Console;

/// The interactive stdin/stdout console.
///
/// Prompt loops never give up: junk input is reported and re-prompted.
/// A closed stdin is unrecoverable mid-prompt and panics.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn read_line(&mut self) -> String {
        let mut line = String::new();
        let bytes = io::stdin()
            .lock()
            .read_line(&mut line)
            .expect("failed to read from stdin");
        assert!(bytes > 0, "stdin closed while awaiting input");
        line
    }
}

impl Console for StdConsole {
    fn prompt_int_in_range(&mut self, min: usize, max: usize) -> usize {
        loop {
            println!("Please enter a number between {min} and {max}:");
            match self.read_line().trim().parse::<i64>() {
                Ok(n) if n >= min as i64 && n <= max as i64 => return n as usize,
                Ok(_) => println!("Error: number not in range."),
                Err(_) => println!("Error: input is not a number."),
            }
        }
    }

    fn prompt_trimmed_string(&mut self) -> String {
        loop {
            println!("Please enter a string:");
            let line = self.read_line();
            let trimmed = line.trim();
            if trimmed.is_empty() {
                println!("Error: string is empty or contains only white spaces.");
            } else {
                return trimmed.to_string();
            }
        }
    }

    fn prompt_yes_no(&mut self, message: &str) -> bool {
        loop {
            print!("{message} [y/n]: ");
            io::stdout().flush().expect("failed to flush stdout");
            match self.read_line().trim().to_ascii_lowercase().as_str() {
                "y" => return true,
                "n" => return false,
                _ => {}
            }
        }
    }

    fn render(&mut self, grid: &Grid) {
        println!("{grid}");
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}
