mod commands;
mod render;

use commands::{Command, Entry, HELP, QUICK_EXAMPLES};
use incident_sync::{Dashboard, SyncConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let once = std::env::args().any(|arg| arg == "--once");
    let config = SyncConfig::from_env();

    let result = if once {
        run_once(&config).await
    } else {
        run(&config).await
    };

    if let Err(err) = result {
        eprintln!("incident-dash: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let level = std::env::var("INCIDENT_LOG")
        .ok()
        .and_then(|v| v.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_once(config: &SyncConfig) -> Result<(), String> {
    let dashboard = Dashboard::connect(config);
    let refreshed = dashboard.refresh().await;
    print!("{}", render::render(&dashboard.snapshot()));
    refreshed.map_err(|e| e.to_string())
}

async fn run(config: &SyncConfig) -> Result<(), String> {
    let mut dashboard = Dashboard::connect(config);
    let mut updates = dashboard.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    dashboard.start();
    redraw(&dashboard.snapshot());

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                redraw(&state);
            }
            line = lines.next_line() => {
                let Some(line) = line.map_err(|e| e.to_string())? else {
                    break;
                };
                match commands::parse(&line) {
                    Command::Quit => break,
                    Command::Submit(text) => {
                        match commands::entry(&dashboard.snapshot(), &text) {
                            Entry::Submit => {
                                dashboard.set_draft(text.clone());
                                let submissions = dashboard.submissions();
                                tokio::spawn(async move {
                                    submissions.submit(&text).await;
                                });
                            }
                            Entry::Busy => warn!("submission pending, input not sent"),
                            Entry::Blank => {}
                        }
                    }
                    Command::Send => {
                        let state = dashboard.snapshot();
                        match commands::entry(&state, &state.draft) {
                            Entry::Submit => {
                                let submissions = dashboard.submissions();
                                tokio::spawn(async move {
                                    submissions.submit(&state.draft).await;
                                });
                            }
                            Entry::Busy => warn!("submission pending, input not sent"),
                            Entry::Blank => {}
                        }
                    }
                    Command::Quick(index) => dashboard.set_draft(QUICK_EXAMPLES[index]),
                    Command::Filter(filter) => dashboard.set_filter(filter),
                    Command::Refresh => {
                        let engine = dashboard.engine();
                        tokio::spawn(async move {
                            let _ = engine.refresh().await;
                        });
                    }
                    Command::Help => println!("{HELP}"),
                    Command::Invalid(reason) => warn!(%reason, "ignored input"),
                }
            }
        }
    }

    dashboard.teardown();
    info!("bye");
    Ok(())
}

fn redraw(state: &incident_sync::DashboardState) {
    print!("\x1b[2J\x1b[H{}", render::render(state));
    println!("\n(:help for commands)");
}
