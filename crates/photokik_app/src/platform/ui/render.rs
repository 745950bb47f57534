use std::fmt::Write;

use chrono::Utc;
use photokik_core::{AppViewModel, Screen, CARD_WIDTH};
use photokik_library::PhotoShelf;

/// Renders the current screen from the view-model snapshot plus the shelf.
pub fn render(view: &AppViewModel, shelf: &PhotoShelf) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== PhotoKik ===");
    match view.screen {
        Screen::Swipe => render_swipe(&mut out, view),
        Screen::Gallery => render_gallery(&mut out, shelf),
        Screen::Trash => render_trash(&mut out, shelf),
        Screen::Settings => render_settings(&mut out, view),
    }
    let _ = writeln!(out);
    let _ = write!(
        out,
        "[swipe | gallery | trash | settings]  `help` for commands"
    );
    out
}

fn render_swipe(out: &mut String, view: &AppViewModel) {
    match &view.current_photo {
        Some(card) => {
            let _ = writeln!(out, "Photo {} of {}", view.position + 1, view.queue_len);
            let _ = writeln!(out);
            let _ = writeln!(out, "    {}", card.caption);
            let _ = writeln!(out);
            let _ = writeln!(out, "    <- Kik        Keep ->");
        }
        None => {
            let _ = writeln!(out, "No more photos to review!");
        }
    }
}

fn render_gallery(out: &mut String, shelf: &PhotoShelf) {
    let _ = writeln!(out, "Your Gallery");
    if shelf.kept().is_empty() {
        let _ = writeln!(out, "Nothing kept yet. Swipe right to keep a photo.");
        return;
    }
    let now = Utc::now();
    for kept in shelf.kept() {
        let days = now.signed_duration_since(kept.kept_at).num_days();
        let _ = writeln!(
            out,
            "  [{}] {} - Saved {} day(s) ago",
            kept.item.id, kept.item.caption, days
        );
    }
}

fn render_trash(out: &mut String, shelf: &PhotoShelf) {
    if shelf.trash().is_empty() {
        let _ = writeln!(out, "Trash is Empty");
        let _ = writeln!(out, "Photos you kik will appear here");
        return;
    }
    let _ = writeln!(out, "Trash ({} photo(s))", shelf.trash().len());
    for item in shelf.trash() {
        let _ = writeln!(out, "  [{}] {}", item.id, item.caption);
    }
    let _ = writeln!(
        out,
        "`empty` clears the bin, `restore <id>` keeps a photo after all"
    );
}

fn render_settings(out: &mut String, view: &AppViewModel) {
    let percent = view.swipe_threshold / CARD_WIDTH * 100.0;
    let _ = writeln!(out, "Settings");
    let _ = writeln!(
        out,
        "  Swipe Sensitivity: {:.0} units ({:.0}% of card width)",
        view.swipe_threshold, percent
    );
    let _ = writeln!(out, "  Change it with `sensitivity <0..1>`");
    let _ = writeln!(out, "  About PhotoKik: version {}", env!("CARGO_PKG_VERSION"));
}

pub fn help() -> String {
    [
        "Commands:",
        "  keep | k            keep the current photo",
        "  kik | d             discard the current photo",
        "  swipe <dx>          release a drag at horizontal offset <dx>",
        "  swipe/gallery/trash/settings   switch screens",
        "  refresh | r         reload the photo batch",
        "  empty               empty the trash bin",
        "  restore <id>        move a trashed photo back to the gallery",
        "  sensitivity <0..1>  set the swipe threshold as a card-width fraction",
        "  quit | q            exit",
    ]
    .join("\n")
}
