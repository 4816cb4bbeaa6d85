use biblio::api::{CmdMessage, MessageLevel};
use biblio::error::BiblioError;
use biblio::model::BookView;
use biblio::rest::reason_phrase;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn status_line(status: u16) -> String {
    let line = format!("HTTP {} {}", status, reason_phrase(status));
    if status < 300 {
        line.green().to_string()
    } else {
        line.red().to_string()
    }
}

/// A single book as a labelled block under a status line.
pub(super) fn render_book(status: u16, heading: &str, book: &BookView) -> String {
    let mut out = String::new();
    out.push_str(&status_line(status));
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    for (label, value) in [
        ("ID", book.id.to_string()),
        ("Title", book.title.clone()),
        ("Author", book.author.clone()),
        ("Year", book.publication_year.to_string()),
    ] {
        out.push_str(&format!("  {:<7} {}\n", format!("{}:", label), value));
    }
    out
}

/// All books as an aligned table. Widths are display widths, so accented
/// titles still line up.
pub(super) fn render_book_list(books: &[BookView]) -> String {
    let mut out = format!("Total books: {}\n", books.len());
    if books.is_empty() {
        out.push_str(&"No books in the catalog.".dimmed().to_string());
        out.push('\n');
        return out;
    }

    let rows: Vec<[String; 4]> = books
        .iter()
        .map(|b| {
            [
                b.id.to_string(),
                b.title.clone(),
                b.author.clone(),
                b.publication_year.to_string(),
            ]
        })
        .collect();
    let header = ["ID", "Title", "Author", "Year"].map(String::from);

    let mut widths = header.clone().map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    out.push('\n');
    out.push_str(&render_row(&header, &widths).bold().to_string());
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row, &widths));
        out.push('\n');
    }
    out
}

fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        // Last column is not padded.
        if i + 1 < cells.len() {
            line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
        }
    }
    line
}

pub(super) fn render_error(err: &BiblioError) -> String {
    format!("{}\nMessage: {}\n", status_line(err.status_code()), err)
}
