use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::unbounded_channel;

use crate::api::StoreClient;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub async fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut events = EventHandler::new(tick_rate);

    let client = StoreClient::new(
        &config.store.base_url,
        config.store.connect_timeout(),
        config.store.request_timeout(),
    );

    let (cache_tx, mut cache_rx) = unbounded_channel();
    let cache = CacheStore::new(Arc::new(client.clone()), cache_tx);

    // Merge cache settles into the main event stream.
    let forward = events.sender();
    tokio::spawn(async move {
        while let Some(event) = cache_rx.recv().await {
            if forward.send(AppEvent::Cache(event)).is_err() {
                break;
            }
        }
    });

    let mut app = App::new(client, cache, events.sender());
    tracing::info!(base_url = %config.store.base_url, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Tick) => app.on_tick(),
            Some(AppEvent::Resize(_, _)) => {}
            Some(AppEvent::Cache(event)) => app.on_cache_event(event),
            Some(AppEvent::Mutation(outcome)) => app.on_mutation(outcome),
            Some(AppEvent::InputClosed) | None => break,
        }
    }

    drop(guard);
    Ok(())
}
