//! Text format for program grids.
//!
//! Syntax:
//! - One grid row per non-blank line, top row first
//! - Cells: whitespace-separated `RRGGBB` hex colors, `#` prefix optional
//! - Comments: `;` to end of line
//!
//! ```text
//! ; prints "A"
//! #080041 #0c0000
//! ```
//!
//! Case is ignored on input; [`render`] writes lowercase with a `#` prefix.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::{Cell, MyceliumError, MyceliumResult, Program};

/// Parse program text into a grid.
pub fn parse(source: &str) -> MyceliumResult<Program> {
    let mut cells = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let code = raw.split(';').next().unwrap_or("");

        let before = cells.len();
        for (column, token) in tokens(code) {
            cells.push(parse_cell(token).ok_or_else(|| MyceliumError::InvalidCell {
                line,
                column,
                token: token.to_string(),
            })?);
        }

        let found = cells.len() - before;
        if found == 0 {
            continue;
        }
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(MyceliumError::RaggedRow { line, expected, found });
            }
            Some(_) => {}
        }
        height += 1;
    }

    Program::new(width.unwrap_or(0), height, cells)
}

/// Tokens of one line with their 1-based starting column.
fn tokens<'a>(code: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    let mut rest = code;
    let mut offset = 0;
    std::iter::from_fn(move || {
        let start = rest.find(|c: char| !c.is_whitespace())?;
        let len = rest[start..]
            .find(char::is_whitespace)
            .unwrap_or(rest.len() - start);
        let token = &rest[start..start + len];
        let column = code[..offset + start].chars().count() + 1;
        offset += start + len;
        rest = &rest[start + len..];
        Some((column, token))
    })
}

fn parse_cell(token: &str) -> Option<Cell> {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Cell::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Render a grid in the text format.
pub fn render(program: &Program) -> String {
    let mut out = String::with_capacity(program.width() * program.height() * 8);
    for row in program.rows() {
        for (x, cell) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            let _ = write!(out, "#{:02x}{:02x}{:02x}", cell.r, cell.g, cell.b);
        }
        out.push('\n');
    }
    out
}

/// Read and parse a program file.
pub fn load(path: impl AsRef<Path>) -> MyceliumResult<Program> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}

/// Write a program file.
pub fn save(path: impl AsRef<Path>, program: &Program) -> MyceliumResult<()> {
    fs::write(path, render(program))?;
    Ok(())
}
