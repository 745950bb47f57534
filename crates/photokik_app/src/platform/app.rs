use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use kik_logging::kik_info;
use photokik_core::{threshold_for_ratio, update, AppState, Msg};

use super::effects::EffectRunner;
use super::logging;
use super::settings::{self, SETTINGS_FILENAME};
use super::ui::input::{parse, Command};
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let settings_path = PathBuf::from(SETTINGS_FILENAME);
    let mut settings = settings::load(&settings_path);
    logging::initialize(settings.log_destination);

    let mut runner = EffectRunner::new();
    let mut state = AppState::new();
    state = dispatch(
        state,
        Msg::SwipeThresholdChanged(threshold_for_ratio(settings.swipe_threshold_ratio)),
        &mut runner,
    );
    state = dispatch(state, Msg::RefreshRequested, &mut runner);
    kik_info!("PhotoKik started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    state.consume_dirty();
    writeln!(out, "{}", render::render(&state.view(), runner.shelf()))?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut force_render = false;
        match parse(&line) {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", render::help())?;
            }
            Command::Unknown(text) => {
                writeln!(out, "Unknown command: {} (try `help`)", text)?;
            }
            Command::Restore(id) => {
                if runner.shelf_mut().restore(id).is_none() {
                    writeln!(out, "No photo {} in the trash", id)?;
                }
                force_render = true;
            }
            Command::Sensitivity(ratio) => {
                settings.swipe_threshold_ratio = ratio;
                settings::save(&settings_path, &settings);
                state = dispatch(
                    state,
                    Msg::SwipeThresholdChanged(threshold_for_ratio(ratio)),
                    &mut runner,
                );
            }
            Command::Msg(msg) => {
                state = dispatch(state, msg, &mut runner);
            }
        }
        if state.consume_dirty() || force_render {
            writeln!(out, "{}", render::render(&state.view(), runner.shelf()))?;
        }
    }

    kik_info!("PhotoKik exiting");
    Ok(())
}

/// Applies a message, runs its effects, and keeps going until the follow-up
/// messages settle. Single-threaded by design: the whole chain completes
/// before the next input line is read.
fn dispatch(mut state: AppState, msg: Msg, runner: &mut EffectRunner) -> AppState {
    let mut inbox = VecDeque::from([msg]);
    while let Some(msg) = inbox.pop_front() {
        let (next, effects) = update(state, msg);
        state = next;
        inbox.extend(runner.run(effects));
    }
    state
}
