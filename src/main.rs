mod app;
mod config;
mod error;
mod event;
mod github;
mod session;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use session::FileStore;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "octoview", about = "TUI GitHub profile finder")]
struct Cli {
    #[arg(long, short, help = "Username to look up on launch")]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.user);

    let client = match github::client::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let store = FileStore::new(FileStore::default_path());
    let mut app = App::new(config, Box::new(store));
    app.restore_session();

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    // The startup auto-run may already have queued a lookup.
    spawn_pending_lookups(&mut app, &client, &tx);

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        spawn_pending_lookups(&mut app, &client, &tx);

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Each queued lookup becomes its own task; its result comes back on the
/// channel. Overlapping lookups are not cancelled, so the last result to
/// arrive wins the view and the persisted value.
fn spawn_pending_lookups(
    app: &mut App,
    client: &reqwest::Client,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    while let Some(query) = app.take_pending_lookup() {
        let client = client.clone();
        let tx = tx.clone();
        let api_url = app.config.api_url.clone();
        tokio::spawn(async move {
            let result = github::client::fetch_user(&client, &api_url, &query).await;
            let _ = tx.send(AppEvent::LookupResult { query, result });
        });
    }
}
