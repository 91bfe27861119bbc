//! Live terminal session over a single widget.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use search_select::{FocusRegion, SearchSelect};

use crate::error::DemoError;

/// Restores the terminal when dropped, even if the session errors out.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("Failed to leave raw mode: {}", e);
        }
    }
}

pub fn run(widget: &SearchSelect) -> Result<(), DemoError> {
    let _guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();
    widget.on_focus();

    loop {
        draw(&mut stdout, widget)?;

        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            break;
        }

        let (key, modifiers) = markup::from_key_event(key_event);
        let result = widget.on_key(key, modifiers)?;
        log::debug!("{:?} {:?} -> {:?}", modifiers, key, result);

        // Tabbing out leaves nothing to drive; bring focus back to the field
        if widget.region().is_none() {
            widget.on_focus();
        }
    }

    execute!(stdout, cursor::MoveToNextLine(1))?;
    Ok(())
}

fn draw(out: &mut impl Write, widget: &SearchSelect) -> io::Result<()> {
    execute!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;

    let label = widget.source().get_label().unwrap_or_default();
    write!(out, "{label}  (Ctrl+Q to quit)\r\n")?;

    if !widget.chip_labels().is_empty() {
        let active = widget.active_chip_label();
        let chips: Vec<String> = widget
            .chip_labels()
            .into_iter()
            .map(|l| {
                if widget.region() == Some(FocusRegion::Chips) && active.as_deref() == Some(l.as_str()) {
                    format!("[*{l}*]")
                } else {
                    format!("[{l}]")
                }
            })
            .collect();
        write!(out, "{}\r\n", chips.join(" "))?;
    }

    let arrow = if widget.is_open() { "^" } else { "v" };
    write!(out, "> {} {arrow}\r\n", widget.input_text())?;

    if widget.is_open() {
        let active = widget.active_row_label();
        for row in widget.rows().iter().filter(|r| r.shown) {
            let marker = if active.as_deref() == Some(row.label.as_str()) { ">" } else { " " };
            let check = if row.selected { "x" } else { " " };
            let note = if row.disabled { " (disabled)" } else { "" };
            write!(out, "{marker} [{check}] {}{note}\r\n", row.label)?;
        }
        if widget.has_no_results() {
            write!(out, "    {}\r\n", search_select::NO_RESULTS_TEXT)?;
        }
    }

    write!(out, "\r\nstate: {:?}\r\n", widget.state())?;
    out.flush()
}
