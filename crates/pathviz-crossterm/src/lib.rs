//! Crossterm renderer for pathviz.
//!
//! Provides a [`TerminalSink`] that implements
//! [`pathviz_search::VisitSink`], painting each visit / path event as a
//! coloured cell and pausing between events so a run can be watched.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{CellKind, Grid, Point};
use pathviz_search::VisitSink;

/// Terminal columns per grid cell; two keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for CtColor {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        CtColor::Rgb { r, g, b }
    }
}

/// Background colour for each cell kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: Rgb,
    pub wall: Rgb,
    pub start: Rgb,
    pub end: Rgb,
    pub path: Rgb,
    pub visited: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Rgb(255, 255, 255),
            wall: Rgb(30, 30, 30),
            start: Rgb(0, 200, 0),
            end: Rgb(200, 0, 0),
            path: Rgb(255, 255, 100),
            visited: Rgb(100, 200, 255),
        }
    }
}

impl Palette {
    pub fn color(&self, kind: CellKind) -> Rgb {
        match kind {
            CellKind::Empty => self.empty,
            CellKind::Wall => self.wall,
            CellKind::Start => self.start,
            CellKind::End => self.end,
            CellKind::Path => self.path,
            CellKind::Visited => self.visited,
        }
    }
}

/// Animating sink writing to any terminal-like [`Write`].
///
/// `VisitSink` callbacks cannot fail, so the first I/O error is kept and
/// later events are dropped; check [`TerminalSink::take_error`] after a run.
pub struct TerminalSink<W: Write> {
    out: W,
    palette: Palette,
    delay: Duration,
    start: Option<Point>,
    end: Option<Point>,
    error: Option<io::Error>,
}

impl TerminalSink<io::Stdout> {
    /// A sink on standard output.
    pub fn stdout(delay: Duration) -> Self {
        Self::new(io::stdout(), delay)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            palette: Palette::default(),
            delay,
            start: None,
            end: None,
            error: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Switch to the alternate screen and hide the cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        log::debug!("entering alternate screen");
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
    }

    /// Restore the normal screen.
    pub fn leave(&mut self) -> io::Result<()> {
        log::debug!("leaving alternate screen");
        execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )
    }

    /// Repaint the whole grid and remember where its terminals are.
    ///
    /// Terminal cells are never repainted by later events.
    pub fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        self.start = grid.positions(CellKind::Start).next();
        self.end = grid.positions(CellKind::End).next();
        for cell in grid {
            self.queue_cell(cell.pos, cell.kind)?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Print `text` on the row below a grid of `size` rows.
    pub fn draw_status(&mut self, size: i32, text: &str) -> io::Result<()> {
        let row = u16::try_from(size).unwrap_or(u16::MAX);
        queue!(
            self.out,
            cursor::MoveTo(0, row),
            ResetColor,
            terminal::Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }

    /// The first write error seen by an event callback, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Give the writer back.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn queue_cell(&mut self, p: Point, kind: CellKind) -> io::Result<()> {
        let (Ok(x), Ok(y)) = (u16::try_from(p.x), u16::try_from(p.y)) else {
            return Ok(());
        };
        let bg: CtColor = self.palette.color(kind).into();
        queue!(
            self.out,
            cursor::MoveTo(x.saturating_mul(CELL_WIDTH), y),
            SetForegroundColor(bg),
            SetBackgroundColor(bg),
            Print("  ")
        )
    }

    fn paint(&mut self, p: Point, kind: CellKind) {
        if self.error.is_some() || Some(p) == self.start || Some(p) == self.end {
            return;
        }
        let res = self.queue_cell(p, kind).and_then(|()| self.out.flush());
        if let Err(err) = res {
            log::warn!("terminal write failed: {err}");
            self.error = Some(err);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl<W: Write> VisitSink for TerminalSink<W> {
    fn on_visit(&mut self, p: Point) {
        self.paint(p, CellKind::Visited);
    }

    fn on_path(&mut self, p: Point) {
        self.paint(p, CellKind::Path);
    }
}
