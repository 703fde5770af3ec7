use std::io;
use std::sync::Arc;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::Config;
use crate::controller::GuessController;
use crate::service::HttpGuessService;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the draw/dispatch loop on the calling thread. Network tasks run
/// on `runtime`; everything else, including all session and grid
/// mutation, happens here.
pub fn run(
    config: Config,
    runtime: tokio::runtime::Handle,
    initial_puzzle: Option<String>,
) -> io::Result<()> {
    let service = HttpGuessService::new(config.server_url.clone(), config.connect_timeout())
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let controller = GuessController::new(
        Arc::new(service),
        runtime,
        events.sender(),
        config.default_rows,
    );
    let mut app = App::new(controller, config.default_rows);
    app.start_puzzle(initial_puzzle.as_deref().unwrap_or(""));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::GuessCompleted { task, result }) => app.on_guess_completed(task, result),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
