use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use skywatch_core::{
    Config, Debouncer, WeatherReport, WeatherState,
    provider::{WeatherProvider, provider_from_config},
};
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::ui;

/// Quiescence window between the last keystroke and the lookup.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(800);

/// How long to block on the keyboard before servicing the channels again.
const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// Everything the render pass needs.
pub struct App {
    /// Raw text the user is typing.
    pub input: String,
    /// The debounced value lookups actually use.
    pub settled: String,
    pub weather: WeatherState,
}

pub async fn run_widget(initial: Option<String>) -> Result<()> {
    let config = Config::load()?;

    // A missing key disables lookups but never kills the widget.
    let provider: Option<Arc<dyn WeatherProvider>> = match provider_from_config(&config) {
        Ok(p) => Some(Arc::new(p)),
        Err(err) => {
            error!("{err:#}; weather lookups disabled");
            None
        }
    };

    let (debouncer, mut settled_rx) = Debouncer::new(DEBOUNCE_WINDOW);
    let (report_tx, mut report_rx) = mpsc::channel::<WeatherReport>(16);

    let mut app = App {
        input: initial.clone().unwrap_or_default(),
        settled: String::new(),
        weather: WeatherState::default(),
    };

    // An initial location triggers a lookup like any later settled change.
    if let Some(initial) = initial {
        apply_settled(&mut app, initial, provider.as_ref(), &report_tx);
    }

    let mut terminal = ui::setup_terminal()?;

    let outcome = async {
        loop {
            // All state transitions happen here, on the loop's thread: the
            // debounce task and the lookup tasks only send messages.
            while let Ok(query) = settled_rx.try_recv() {
                apply_settled(&mut app, query, provider.as_ref(), &report_tx);
            }
            while let Ok(report) = report_rx.try_recv() {
                app.weather.apply(report);
            }

            ui::draw(&mut terminal, &app)?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Esc => break,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break;
                        }
                        KeyCode::Char(c) => {
                            app.input.push(c);
                            debouncer.update(app.input.clone()).await;
                        }
                        KeyCode::Backspace => {
                            app.input.pop();
                            debouncer.update(app.input.clone()).await;
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    ui::restore_terminal(&mut terminal)?;
    outcome
}

/// Whether a newly settled query should trigger a lookup.
fn should_fetch(previous: &str, settled: &str) -> bool {
    settled != previous && !settled.is_empty()
}

fn apply_settled(
    app: &mut App,
    query: String,
    provider: Option<&Arc<dyn WeatherProvider>>,
    report_tx: &mpsc::Sender<WeatherReport>,
) {
    let fetch = should_fetch(&app.settled, &query);
    app.settled = query;

    if !fetch {
        return;
    }
    let Some(provider) = provider else { return };

    spawn_lookup(Arc::clone(provider), app.settled.clone(), report_tx.clone());
}

fn spawn_lookup(
    provider: Arc<dyn WeatherProvider>,
    query: String,
    report_tx: mpsc::Sender<WeatherReport>,
) {
    tokio::spawn(async move {
        // No generation counter: a slow response for an older query can land
        // after a faster response for a newer one and win.
        match provider.current(&query).await {
            Ok(report) => {
                let _ = report_tx.send(report).await;
            }
            Err(err) => warn!(%query, "weather lookup failed: {err}"),
        }
    });
}
