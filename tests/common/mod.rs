// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use piet_interp::geometry::{Color, Hue, Lightness};
use piet_interp::io::{StringInput, StringOutput};
use piet_interp::memo::{Grid, ProgramMemo};
use piet_interp::Interpreter;

/// Parse one color token.
///
/// `R Y G C B M` are the normal hues; an `l` or `d` prefix makes them light
/// or dark (`lR`, `dM`). `W` or `.` is white, `K` is black.
pub fn color(token: &str) -> Color {
    let (lightness, hue) = match token.len() {
        1 => (Lightness::Normal, token),
        2 => match &token[..1] {
            "l" => (Lightness::Light, &token[1..]),
            "d" => (Lightness::Dark, &token[1..]),
            _ => panic!("bad lightness prefix in {:?}", token),
        },
        _ => panic!("bad color token {:?}", token),
    };
    let hue = match hue {
        "W" | "." => return Color::White,
        "K" => return Color::Black,
        "R" => Hue::Red,
        "Y" => Hue::Yellow,
        "G" => Hue::Green,
        "C" => Hue::Cyan,
        "B" => Hue::Blue,
        "M" => Hue::Magenta,
        _ => panic!("bad hue in {:?}", token),
    };
    Color::new(hue, lightness)
}

/// Build a grid from rows of whitespace-separated color tokens.
pub fn grid(rows: &[&str]) -> Grid {
    let parsed: Vec<Vec<Color>> = rows
        .iter()
        .map(|row| row.split_whitespace().map(color).collect())
        .collect();
    let width = parsed[0].len();
    assert!(parsed.iter().all(|r| r.len() == width), "ragged grid");
    Grid::from_colors(width, parsed.len(), parsed.into_iter().flatten().collect())
        .expect("valid grid")
}

pub fn memo(rows: &[&str]) -> ProgramMemo {
    ProgramMemo::new(grid(rows))
}

pub type TestInterpreter<'m> = Interpreter<'m, StringInput, StringOutput>;

pub fn interpreter<'m>(memo: &'m ProgramMemo, input: &str) -> TestInterpreter<'m> {
    Interpreter::new(memo, StringInput::new(input), StringOutput::new())
}

/// Run a program to termination and return its output.
pub fn run_program(rows: &[&str], input: &str) -> String {
    let memo = memo(rows);
    let mut interp = interpreter(&memo, input);
    interp.run().expect("program terminates");
    interp.output().as_str().to_string()
}
