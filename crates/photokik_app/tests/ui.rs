use photokik_app::platform::ui::input::{parse, Command};
use photokik_app::platform::ui::render;
use photokik_core::{update, AppState, Decision, Msg, PhotoItem, Screen};
use photokik_library::{OutcomeSink, PhotoShelf};

#[test]
fn decision_commands_parse() {
    assert_eq!(parse("keep"), Command::Msg(Msg::KeepPressed));
    assert_eq!(parse("k"), Command::Msg(Msg::KeepPressed));
    assert_eq!(parse("kik"), Command::Msg(Msg::KikPressed));
    assert_eq!(parse("d"), Command::Msg(Msg::KikPressed));
    assert_eq!(
        parse("swipe 180"),
        Command::Msg(Msg::SwipeReleased { dx: 180.0 })
    );
    assert_eq!(
        parse("swipe -200.5"),
        Command::Msg(Msg::SwipeReleased { dx: -200.5 })
    );
}

#[test]
fn navigation_commands_parse() {
    assert_eq!(
        parse("swipe"),
        Command::Msg(Msg::ScreenSelected(Screen::Swipe))
    );
    assert_eq!(
        parse("gallery"),
        Command::Msg(Msg::ScreenSelected(Screen::Gallery))
    );
    assert_eq!(
        parse("trash"),
        Command::Msg(Msg::ScreenSelected(Screen::Trash))
    );
    assert_eq!(
        parse("settings"),
        Command::Msg(Msg::ScreenSelected(Screen::Settings))
    );
}

#[test]
fn shelf_and_settings_commands_parse() {
    assert_eq!(parse("refresh"), Command::Msg(Msg::RefreshRequested));
    assert_eq!(parse("empty"), Command::Msg(Msg::EmptyTrashClicked));
    assert_eq!(parse("restore 3"), Command::Restore(3));
    assert_eq!(parse("sensitivity 0.3"), Command::Sensitivity(0.3));
    assert_eq!(parse("QUIT"), Command::Quit);
    assert_eq!(parse(""), Command::Msg(Msg::NoOp));
}

#[test]
fn bad_input_is_reported_not_dispatched() {
    assert_eq!(parse("swipe lots"), Command::Unknown("swipe lots".into()));
    assert_eq!(parse("restore abc"), Command::Unknown("restore abc".into()));
    // Sensitivity outside (0, 1] would commit on every release or none.
    assert_eq!(
        parse("sensitivity 0"),
        Command::Unknown("sensitivity 0".into())
    );
    assert_eq!(
        parse("sensitivity 2.0"),
        Command::Unknown("sensitivity 2.0".into())
    );
    assert_eq!(parse("frobnicate"), Command::Unknown("frobnicate".into()));
}

#[test]
fn swipe_screen_shows_the_current_card() {
    let (state, _) = update(
        AppState::new(),
        Msg::PhotosLoaded(vec![
            PhotoItem::new(1, "Beautiful sunset at the beach"),
            PhotoItem::new(2, "Family dinner last weekend"),
        ]),
    );

    let screen = render::render(&state.view(), &PhotoShelf::new());
    assert!(screen.contains("Photo 1 of 2"));
    assert!(screen.contains("Beautiful sunset at the beach"));
    assert!(screen.contains("<- Kik"));
    assert!(screen.contains("Keep ->"));
}

#[test]
fn exhausted_queue_shows_the_done_message() {
    let (state, _) = update(AppState::new(), Msg::PhotosLoaded(Vec::new()));
    let screen = render::render(&state.view(), &PhotoShelf::new());
    assert!(screen.contains("No more photos to review!"));
}

#[test]
fn trash_screen_mirrors_the_shelf() {
    let (state, _) = update(AppState::new(), Msg::ScreenSelected(Screen::Trash));
    let mut shelf = PhotoShelf::new();

    let screen = render::render(&state.view(), &shelf);
    assert!(screen.contains("Trash is Empty"));
    assert!(screen.contains("Photos you kik will appear here"));

    shelf.record(PhotoItem::new(7, "Blurry concert shot"), Decision::Discard);
    let screen = render::render(&state.view(), &shelf);
    assert!(screen.contains("Trash (1 photo(s))"));
    assert!(screen.contains("[7] Blurry concert shot"));
}

#[test]
fn gallery_screen_lists_kept_photos() {
    let (state, _) = update(AppState::new(), Msg::ScreenSelected(Screen::Gallery));
    let mut shelf = PhotoShelf::new();

    let screen = render::render(&state.view(), &shelf);
    assert!(screen.contains("Nothing kept yet"));

    shelf.record(PhotoItem::new(1, "Vacation memories"), Decision::Keep);
    let screen = render::render(&state.view(), &shelf);
    assert!(screen.contains("Vacation memories"));
    assert!(screen.contains("Saved 0 day(s) ago"));
}

#[test]
fn settings_screen_shows_the_threshold() {
    let (state, _) = update(AppState::new(), Msg::ScreenSelected(Screen::Settings));
    let screen = render::render(&state.view(), &PhotoShelf::new());
    assert!(screen.contains("Swipe Sensitivity: 150 units (47% of card width)"));
}
