use mcex::app::{App, RefreshPlan};
use mcex::config::Config;
use mcex::loader::{AsyncMessage, Loader};
use mcex::provider::SimulatedProvider;
use mcex::ui;

use anyhow::{Context, Result};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::fs::OpenOptions;
use std::io::stdout;
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = Config::load()?;

    run_tui(config).await?;

    Ok(())
}

/// Log to a file under the config dir, only when RUST_LOG is set
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    std::fs::create_dir_all(Config::config_dir()?)?;
    let path = Config::log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {path:?}"))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    log::info!("mcex starting");
    Ok(())
}

async fn run_tui(config: Config) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(32);
    let loader = Loader::new(SimulatedProvider::default(), tx);

    let mut app = App::new(config).persistent();

    // Auto-select a chain and load its dashboard
    let chains = app.config.chains.clone();
    if let Some(request) = app.set_chains(chains) {
        loader.fetch_all(&request);
    }

    let result = run_event_loop(&mut terminal, &mut app, &loader, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    loader: &Loader<SimulatedProvider>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            app.apply_message(msg);
        }

        // Poll for input events
        if event::poll(std::time::Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }

                if app.search_focused {
                    // Search box with history
                    match key.code {
                        KeyCode::Enter => {
                            let query = match app.get_selected_history_query() {
                                Some(query) => {
                                    app.clear_history_selection();
                                    // Add to history again to move it to top
                                    app.remember_search(query.clone());
                                    Some(query)
                                }
                                None => app.submit_search(),
                            };
                            app.blur_search();
                            if let Some(query) = query {
                                if let Some(request) = app.begin_search(&query) {
                                    loader.search(request);
                                }
                            }
                        }
                        KeyCode::Esc => app.blur_search(),
                        KeyCode::Up => app.select_history_prev(),
                        KeyCode::Down => app.select_history_next(),
                        KeyCode::Delete | KeyCode::Backspace
                            if app.selected_history_index.is_some() =>
                        {
                            app.delete_selected_history();
                        }
                        _ => {
                            // Typing leaves history selection
                            app.clear_history_selection();
                            app.search_input.handle_event(&ev);
                        }
                    }
                } else {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('/') => app.focus_search(),
                        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                        KeyCode::Enter => {
                            if let Some(link) = app.get_selected_link() {
                                app.follow_link(link);
                            }
                        }
                        KeyCode::Char('d') => app.goto_dashboard(),
                        KeyCode::Char('b') => {
                            app.open_breadcrumb();
                        }
                        KeyCode::Char('r') => match app.refresh() {
                            RefreshPlan::Reload(request) => loader.fetch_all(&request),
                            RefreshPlan::Unsupported(_) | RefreshPlan::NoChain => {}
                        },
                        KeyCode::Char('c') => {
                            if let Some(request) = app.cycle_chain(true) {
                                loader.fetch_all(&request);
                            }
                        }
                        KeyCode::Char('C') => {
                            if let Some(request) = app.cycle_chain(false) {
                                loader.fetch_all(&request);
                            }
                        }
                        KeyCode::Char('n') if app.is_on_dashboard() => app.next_page(),
                        KeyCode::Char('p') if app.is_on_dashboard() => app.prev_page(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
