mod app;
mod config;

use crate::app::handlers::dialog::{handle_dialog_key, sync_active_dialog};
use crate::app::handlers::options::handle_options_key;
use crate::app::i18n::Messages;
use crate::app::runtime::{HostRuntime, HostSignal, LocalExtensionHost};
use crate::app::view::ui::draw_ui;
use crate::app::AppState;
use crate::config::{OptionsConfig, USAGE};
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

type OptionsTerminal = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageExit {
    Quit,
    Reload,
}

struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

/// The terminal belongs to the UI, so logs only go to a file when one is configured.
fn init_tracing(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_messages(config: &OptionsConfig) -> Messages {
    let Some(path) = config.messages_path.as_deref() else {
        return Messages::builtin();
    };
    match Messages::load(path) {
        Ok(messages) => {
            tracing::info!(
                path = %path.display(),
                translated = messages.translated_count(),
                "message catalog loaded"
            );
            messages
        }
        Err(error) => {
            tracing::warn!(%error, "using built-in messages");
            Messages::builtin()
        }
    }
}

fn load_page(config: &OptionsConfig) -> (AppState, Receiver<HostSignal>) {
    let (host, signals) = LocalExtensionHost::new(config.storage_dir.clone());
    let storage_label = host.storage_dir().display().to_string();
    let host: Arc<dyn HostRuntime> = Arc::new(host);
    let mut app = AppState::new(load_messages(config), host, storage_label);
    sync_active_dialog(&mut app, true);
    (app, signals)
}

fn run_page(
    terminal: &mut OptionsTerminal,
    app: &mut AppState,
    signals: &Receiver<HostSignal>,
    key_debug: bool,
) -> io::Result<PageExit> {
    let mut needs_redraw = true;
    loop {
        if sync_active_dialog(app, false) {
            needs_redraw = true;
        }
        if app.refresh_reset_phase() {
            needs_redraw = true;
        }

        match signals.try_recv() {
            Ok(HostSignal::Reload) => {
                app.unload();
                return Ok(PageExit::Reload);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
        }

        if needs_redraw {
            terminal.draw(|f| draw_ui(f, app))?;
            needs_redraw = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key_debug {
                        tracing::debug!(code = ?key.code, modifiers = ?key.modifiers, "key");
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.should_exit = true;
                    } else if let Some(redraw) = handle_dialog_key(app, key.code) {
                        needs_redraw |= redraw;
                    } else if handle_options_key(app, key.code, key.modifiers) {
                        needs_redraw = true;
                    }
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }

        if app.should_exit {
            app.unload();
            return Ok(PageExit::Quit);
        }
    }
}

fn run_terminal(config: &OptionsConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    let _restore_guard = TerminalRestoreGuard;
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let mut load = 0_u32;
    loop {
        load += 1;
        let (mut app, signals) = load_page(config);
        tracing::info!(load, storage = %app.storage_label, "options page loaded");
        match run_page(&mut terminal, &mut app, &signals, config.key_debug)? {
            PageExit::Quit => break,
            PageExit::Reload => {
                tracing::info!(load, "options page reloading");
                terminal.clear()?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = OptionsConfig::from_env()?;
    if config.show_help {
        println!("{USAGE}");
        return Ok(());
    }
    init_tracing(config.log_file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("temple-options")
        .enable_all()
        .build()?;
    let result = {
        let _runtime_guard = runtime.enter();
        run_terminal(&config)
    };
    // Async tasks are dropped here. A storage clear runs on the blocking pool
    // and gets up to SHUTDOWN_GRACE to finish.
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    result
}
