use std::io::{self, Write};

use image_rs::{imageops::FilterType, Rgb, RgbImage};
use termion::{color, cursor, style};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;

use super::{fit_within, resize_panel};

const FALLBACK_TERMINAL_SIZE: (u16, u16) = (80, 24);
const PANEL_GAP: u16 = 2;
// title line, blank line and the prompt
const RESERVED_ROWS: u16 = 3;

/// Draws `left` and `right` next to each other with half block characters,
/// two image rows per terminal row, and blocks until q, Esc or Enter is pressed.
pub fn show_side_by_side(left: &RgbImage, right: &RgbImage, left_title: &str, right_title: &str) -> io::Result<()> {
    let stdout = io::stdout();
    if !termion::is_tty(&stdout) {
        return Err(io::Error::new(io::ErrorKind::Unsupported, "stdout is not a terminal, use a file output instead"));
    }

    let (columns, rows) = termion::terminal_size().unwrap_or(FALLBACK_TERMINAL_SIZE);
    let panel_columns = (columns.saturating_sub(PANEL_GAP)/2).max(1) as u32;
    let panel_pixel_rows = (2*rows.saturating_sub(RESERVED_ROWS)).max(2) as u32;

    let (width, height) = left.dimensions();
    let (panel_width, panel_height) = fit_within(width, height, panel_columns, panel_pixel_rows);
    let left_panel = resize_panel(left, panel_width, panel_height, FilterType::Triangle);
    let right_panel = resize_panel(right, panel_width, panel_height, FilterType::Nearest);

    let mut out = stdout.lock();
    write!(out, "{}", termion::clear::All)?;
    write!(out, "{}", cursor::Goto(1, 1))?;
    writeln!(out, "{}{:<width$}{:gap$}{}{}", style::Bold, left_title, "", right_title, style::Reset, width = panel_width as usize, gap = PANEL_GAP as usize)?;

    for text_row in 0..(panel_height + 1)/2 {
        write_panel_row(&mut out, &left_panel, text_row)?;
        write!(out, "{:gap$}", "", gap = PANEL_GAP as usize)?;
        write_panel_row(&mut out, &right_panel, text_row)?;
        writeln!(out)?;
    }
    writeln!(out, "\nPress q, Esc or Enter to close")?;
    out.flush()?;
    drop(out);

    wait_for_close()
}

fn write_panel_row<W: Write>(out: &mut W, panel: &RgbImage, text_row: u32) -> io::Result<()> {
    let top_row = 2*text_row;
    for x in 0..panel.width() {
        let Rgb([r, g, b]) = *panel.get_pixel(x, top_row);
        write!(out, "{}", color::Fg(color::Rgb(r, g, b)))?;
        match top_row + 1 < panel.height() {
            true => {
                let Rgb([r, g, b]) = *panel.get_pixel(x, top_row + 1);
                write!(out, "{}", color::Bg(color::Rgb(r, g, b)))?;
            },
            false => write!(out, "{}", color::Bg(color::Reset))?
        }
        write!(out, "\u{2580}")?;
    }
    write!(out, "{}{}", color::Fg(color::Reset), color::Bg(color::Reset))
}

fn wait_for_close() -> io::Result<()> {
    let _raw = io::stdout().into_raw_mode()?;
    for key in io::stdin().keys() {
        match key? {
            Key::Char('q') | Key::Char('\n') | Key::Esc | Key::Ctrl('c') => break,
            _ => {}
        }
    }
    Ok(())
}
