//! Banner and box-drawn table for the monkey list.

use crossterm::style::{style, Color, Stylize};
use monkey_core::Monkey;
use std::borrow::Cow;
use std::io::{self, Write};

const LOGO: &str = r"  __  __            _
 |  \/  | ___  _ __| | _____ _   _
 | |\/| |/ _ \| '__| |/ / _ \ | | |
 | |  | | (_) | |  |   <  __/ |_| |
 |_|  |_|\___/|_|  |_|\_\___|\__, |
                             |___/";

const HEADERS: [&str; 4] = ["Name", "Scientific", "Region", "Description"];
const ELLIPSIS: char = '…';

/// Table layout options.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub description_width: usize,
    pub color: bool,
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

pub fn print_banner(out: &mut impl Write, title: &str, color: bool) -> io::Result<()> {
    let banner = format!("{LOGO}\n   {title}\n");
    writeln!(out, "{}", paint(&banner, Color::Yellow, color))
}

/// Cuts `text` to `width` characters, replacing the last kept one with `…` when it
/// does not fit.
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    if text.chars().count() <= width {
        return Cow::Borrowed(text);
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    Cow::Owned(cut)
}

fn widest(monkeys: &[Monkey], header: &str, cell: impl Fn(&Monkey) -> &str) -> usize {
    monkeys
        .iter()
        .map(|m| cell(m).chars().count())
        .fold(header.chars().count(), usize::max)
}

fn column_widths(monkeys: &[Monkey], description_width: usize) -> [usize; 4] {
    [
        widest(monkeys, HEADERS[0], |m| m.name.as_str()),
        widest(monkeys, HEADERS[1], |m| m.scientific_name.as_str()),
        widest(monkeys, HEADERS[2], |m| m.region.as_str()),
        description_width,
    ]
}

fn border(widths: &[usize; 4], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "═".repeat(w + 2)).collect();
    let mid = mid.to_string();
    format!("{left}{}{right}", segments.join(mid.as_str()))
}

fn row(widths: &[usize; 4], cells: [&str; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!(" {cell:<w$} "))
        .collect();
    format!("║{}║", padded.join("║"))
}

pub fn print_table(out: &mut impl Write, monkeys: &[Monkey], style: &TableStyle) -> io::Result<()> {
    let widths = column_widths(monkeys, style.description_width);
    let frame = |line: String| paint(&line, Color::DarkGrey, style.color);

    writeln!(out, "{}", frame(border(&widths, '╔', '╦', '╗')))?;
    writeln!(out, "{}", paint(&row(&widths, HEADERS), Color::Cyan, style.color))?;
    writeln!(out, "{}", frame(border(&widths, '╠', '╬', '╣')))?;
    for m in monkeys {
        let description = truncate(&m.description, style.description_width);
        writeln!(
            out,
            "{}",
            row(
                &widths,
                [
                    m.name.as_str(),
                    m.scientific_name.as_str(),
                    m.region.as_str(),
                    &*description,
                ],
            )
        )?;
    }
    writeln!(out, "{}", frame(border(&widths, '╚', '╩', '╝')))
}
