use crate::catalog::{HttpMovieSource, MovieSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(source: HttpMovieSource) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let mut app = App::new(source.url());
    let events = EventHandler::new(tick_rate);

    app.begin_load();
    let sender = events.sender();
    runtime.spawn(async move {
        let result = source.fetch().await;
        let _ = sender.send(AppEvent::CatalogLoaded(result));
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::CatalogLoaded(result)) => app.on_catalog_loaded(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
