mod app;
mod config;
mod contrib;
mod data_source;
mod error;
mod event;
mod github;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::Parser;
use config::Config;
use contrib::classify;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use data_source::FetchMode;
use event::{AppEvent, FetchedBatch};
use futures::StreamExt;
use github::client::GitHubClient;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "tally", about = "TUI GitHub contributions viewer")]
struct Cli {
    #[arg(long, short, help = "GitHub account name to fetch")]
    user: Option<String>,

    #[arg(long, short, value_enum, help = "What to fetch: activity events or repositories")]
    mode: Option<FetchMode>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.user, cli.mode);

    let client = match data_source::init_github_client(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(config);

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

    let tick_tx = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.tick().await;
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    loop {
        if let Some((account, mode)) = app.take_fetch_request() {
            let fetch_tx = tx.clone();
            let client = client.clone();
            let per_page = app.config.per_page;
            tokio::spawn(async move {
                let result = fetch_batch(&client, &account, mode, per_page).await;
                let _ = fetch_tx.send(AppEvent::FetchDone(result));
            });
        }

        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };
        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Runs on the worker task: one fetch, classified into display records.
/// The app only ever sees the normalized result or an error string.
async fn fetch_batch(
    client: &GitHubClient,
    account: &str,
    mode: FetchMode,
    per_page: u8,
) -> std::result::Result<FetchedBatch, String> {
    let contributions = match mode {
        FetchMode::Events => {
            let events = client
                .fetch_user_events(account, per_page)
                .await
                .map_err(|e| e.to_string())?;
            classify::classify(&events)
        }
        FetchMode::Repos => {
            let repos = client
                .fetch_user_repos(account, per_page)
                .await
                .map_err(|e| e.to_string())?;
            classify::map_repos(&repos)
        }
    };

    let rate_limit = client.rate_limit().await;

    Ok(FetchedBatch {
        contributions,
        rate_limit,
    })
}
