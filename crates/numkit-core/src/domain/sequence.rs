//! Text rendering of integer sequences
//!
//! A sequence renders as its elements separated by single spaces,
//! terminated by a line break. An empty sequence is just the line break.

use std::io::{self, Write};

/// Render a sequence as a single line
pub fn render_sequence(seq: &[i64]) -> String {
    let mut out = seq
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    out
}

/// Write a sequence as a single line into `w`
pub fn write_sequence<W: Write>(w: &mut W, seq: &[i64]) -> io::Result<()> {
    let mut iter = seq.iter();
    if let Some(first) = iter.next() {
        write!(w, "{}", first)?;
        for value in iter {
            write!(w, " {}", value)?;
        }
    }
    writeln!(w)
}

/// Render a triangular table, one row per line
pub fn render_triangle(rows: &[Vec<i64>]) -> String {
    rows.iter().map(|row| render_sequence(row)).collect()
}
