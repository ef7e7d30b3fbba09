//! anytag demo - a one-line editor that highlights #tags and @tags
//!
//! Type text; tags are coloured as you type. Click a tag (or press Enter
//! on it) to activate it, and list every tag found with C-t / C-a.

mod display;
mod field;
mod input;
mod terminal;

use std::cell::RefCell;
use std::env;
use std::process;
use std::rc::Rc;

use tracing::info;

use anytag::{Result, TagAnnotator, TagClickListener, TagConfig};
use display::{Display, FIELD_ROW};
use field::TagField;
use input::Action;
use terminal::Terminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Some(first) = args.first() {
        match first.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("anytag {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }

    init_tracing()?;

    let config = TagConfig::load()?;
    let mut annotator = TagAnnotator::new(config);
    let activations = Rc::new(RefCell::new(Vec::new()));
    annotator.set_click_listener(click_listener(&activations));
    annotator.attach(TagField::new(args.join(" ")))?;

    let mut terminal = Terminal::new()?;
    let mut display = Display::new();

    loop {
        if let Some(field) = annotator.source() {
            display.render(&mut terminal, field, annotator.has_click_listener())?;
        }

        let Some(action) = input::translate_event(terminal.read_event()?) else {
            continue;
        };

        match action {
            Action::Quit => break,
            Action::Insert(ch) => {
                annotator.edit(|field| field.insert_char(ch));
            }
            Action::Backspace => {
                annotator.edit(|field| field.delete_backward());
            }
            Action::Delete => {
                annotator.edit(|field| field.delete_forward());
            }
            Action::Left => {
                move_cursor(&mut annotator, TagField::move_left);
            }
            Action::Right => {
                move_cursor(&mut annotator, TagField::move_right);
            }
            Action::Home => {
                move_cursor(&mut annotator, TagField::move_home);
            }
            Action::End => {
                move_cursor(&mut annotator, TagField::move_end);
            }
            Action::ActivateAtCursor => {
                if let Some(offset) = cursor_tag_offset(&annotator) {
                    annotator.activate(offset);
                }
            }
            Action::Click { col, row } => {
                let offset = annotator
                    .source()
                    .filter(|_| row == FIELD_ROW)
                    .and_then(|field| field.col_to_byte(col as usize))
                    .filter(|&offset| is_clickable(&annotator, offset));
                if let Some(offset) = offset {
                    annotator.activate(offset);
                }
            }
            Action::ShowHashTags => {
                display.set_message(format!("Hash tags: {:?}", annotator.hash_tags()));
            }
            Action::ShowAtTags => {
                display.set_message(format!("At tags: {:?}", annotator.at_tags()));
            }
            Action::ToggleListener => {
                if annotator.clear_click_listener().is_none() {
                    annotator.set_click_listener(click_listener(&activations));
                }
                annotator.rescan();
                display.force_redraw();
            }
            Action::Redraw => display.force_redraw(),
        }

        if let Some(message) = activations.borrow_mut().pop() {
            display.set_message(message);
        }
    }

    Ok(())
}

/// Listener that records a message per activation
fn click_listener(activations: &Rc<RefCell<Vec<String>>>) -> TagClickListener {
    let hashes = Rc::clone(activations);
    let ats = Rc::clone(activations);
    TagClickListener::new()
        .on_hash_tag_activated(move |tag| {
            info!(tag, "hash tag clicked");
            hashes.borrow_mut().push(format!("Clicked HashTag: {}", tag));
        })
        .on_at_tag_activated(move |tag| {
            info!(tag, "at tag clicked");
            ats.borrow_mut().push(format!("Clicked AtTag: {}", tag));
        })
}

/// Cursor motion leaves the text, and so the tags, untouched
fn move_cursor(annotator: &mut TagAnnotator<TagField>, motion: fn(&mut TagField)) {
    if let Some(field) = annotator.source_mut() {
        motion(field);
    }
}

/// Only clickable annotations report activations
fn is_clickable(annotator: &TagAnnotator<TagField>, offset: usize) -> bool {
    annotator
        .source()
        .and_then(|field| field.annotation_at(offset))
        .is_some_and(|annotation| annotation.clickable)
}

/// Offset of the clickable tag under the cursor, or the one ending right at it
fn cursor_tag_offset(annotator: &TagAnnotator<TagField>) -> Option<usize> {
    let cursor = annotator.source()?.cursor();
    [Some(cursor), cursor.checked_sub(1)]
        .into_iter()
        .flatten()
        .find(|&offset| is_clickable(annotator, offset))
}

/// Log to anytag.log when RUST_LOG is set; the screen belongs to the editor
fn init_tracing() -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        let file = std::fs::File::create("anytag.log")?;
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
    Ok(())
}

fn print_usage() {
    println!("anytag {} - #tag and @tag highlighting demo", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: anytag [OPTIONS] [TEXT...]");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Keys:");
    println!("  Enter, click   Activate the tag under the cursor / pointer");
    println!("  C-t            Show all #tags");
    println!("  C-a            Show all @tags");
    println!("  C-l            Toggle tag click listener");
    println!("  Esc, C-q       Quit");
    println!();
    println!("Colours and extra tag characters are read from ~/.anytag.toml");
}
