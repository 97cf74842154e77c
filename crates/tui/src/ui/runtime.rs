//! Runtime: event loop and input routing for the viewer.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and animation ticks.
//! - Route input to the focused component and apply the returned `Effect`s.
//!
//! Ticking follows what is on screen: the splash ticks at its schedule, a
//! running smooth scroll ticks every frame, and an idle page wakes rarely.
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::TuiOptions;
use crate::app::{App, Effect, Msg};
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

type Backend = CrosstermBackend<std::io::Stdout>;

const INPUT_POLL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(5000);

/// Spawn a dedicated input thread that polls the terminal and forwards
/// `crossterm` events over a Tokio channel.
///
/// Mouse moves are throttled to one per poll interval. The thread exits once
/// the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    thread::spawn(move || {
        let mut last_mouse_move = Instant::now();
        while !sender.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(error) => {
                    warn!(%error, "failed to poll terminal input");
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(error) => {
                    warn!(%error, "failed to read terminal input");
                    break;
                }
            };
            let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
            if is_mouse_move {
                if last_mouse_move.elapsed() < INPUT_POLL {
                    continue;
                }
                last_mouse_move = Instant::now();
            }
            if sender.blocking_send(event).is_err() {
                break;
            }
        }
        debug!("input thread stopped");
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

fn process_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        debug!(?effect, "applying effect");
        app.apply(effect);
    }
}

fn new_ticker(period: Duration) -> Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Entry point for the runtime: sets up the terminal, runs the event loop,
/// and restores the terminal even when the loop fails.
pub async fn run_app(options: TuiOptions) -> Result<()> {
    let TuiOptions {
        portfolio,
        settings,
        preferences,
        theme_override,
        show_splash,
    } = options;
    let preferred_theme = preferences.preferred_theme();
    let loaded_theme = theme::load(theme_override.as_deref(), preferred_theme.as_deref());
    info!(theme = loaded_theme.definition.id, splash = show_splash, "starting viewer");

    let mut terminal = setup_terminal()?;
    let app = terminal.size().map_err(anyhow::Error::from).and_then(|size| {
        App::new(portfolio, settings, preferences, loaded_theme, show_splash, (size.width, size.height))
            .context("invalid section configuration")
    });
    let mut app = match app {
        Ok(app) => app,
        Err(error) => {
            if let Err(cleanup_error) = cleanup_terminal(&mut terminal) {
                warn!(%cleanup_error, "failed to restore terminal");
            }
            return Err(error);
        }
    };
    let mut main_view = MainView::new();

    let result = event_loop(&mut terminal, &mut app, &mut main_view).await;
    let cleanup = cleanup_terminal(&mut terminal);
    app.shutdown();
    info!("viewer closed");
    result.and(cleanup)
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut current_interval = app.tick_interval().unwrap_or(IDLE_INTERVAL);
    let mut ticker = new_ticker(current_interval);

    render(terminal, app, main_view)?;

    // Some terminals drop resize notifications; compare against the last
    // known size after every wakeup.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let target_interval = app.tick_interval().unwrap_or(IDLE_INTERVAL);
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = new_ticker(current_interval);
        }

        let mut needs_render;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Resize(width, height) = event {
                    last_size = Some((width, height));
                }
                let effects = handle_input_event(app, main_view, event);
                process_effects(app, effects);
                needs_render = true;
            }

            _ = ticker.tick() => {
                let animating = app.needs_animation();
                let effects = main_view.handle_message(app, Msg::Tick);
                needs_render = animating || !effects.is_empty();
                process_effects(app, effects);
            }

            _ = signal::ctrl_c() => { break; }
        }

        if app.should_quit {
            break;
        }

        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            let effects = main_view.handle_message(app, Msg::Resize(width, height));
            process_effects(app, effects);
            needs_render = true;
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}
