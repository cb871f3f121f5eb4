mod config;
mod logging;
mod screens;
mod services;
mod utils;

use crate::{
    config::{load_config, VERSION},
    screens::{
        entry::validate_nickname,
        rank::{LoadState, RankScreen},
    },
    services::backend::Backend,
};
use log::{error, info};
use std::process::exit;

#[tokio::main]
async fn main() {
    let config = load_config().unwrap_or_default();

    logging::setup(config.logging);

    info!("Starting Quiz Rank Client v{}", VERSION);

    // The surrounding quiz flow provides the nickname and the quiz
    // result, the CLI takes them as arguments
    let mut args = std::env::args().skip(1);
    let nickname = args.next().unwrap_or_default();
    let correct_answers: u32 = args
        .next()
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);

    let nickname = match validate_nickname(&nickname, &config.reserved_nicknames) {
        Ok(value) => value.to_string(),
        Err(err) => {
            error!("Rejected nickname: {}", err);
            exit(1);
        }
    };

    let backend = Backend::new(&config.backend);
    let mut screen = RankScreen::new(nickname, correct_answers, config.display);

    // One load per visit to the screen, both fetches concurrent
    let generation = screen.begin_load();
    let result = backend.load(screen.nickname()).await;
    screen.finish_load(generation, result);

    render(&screen);

    // The view the toggle control switches to
    screen.toggle();
    println!();
    render(&screen);
}

/// Renders the rank screen to stdout in the shape the web view
/// presents it: the summary header followed by the visible rows
fn render(screen: &RankScreen) {
    match screen.state() {
        LoadState::Loading => println!("Loading..."),
        LoadState::Failed(err) => println!("Could not load the leaderboard: {}", err),
        LoadState::Ready { .. } => {
            let mode = if screen.windowed() {
                "Around you"
            } else {
                "Top of the leaderboard"
            };

            println!(
                "{} answered {} questions correctly.",
                screen.nickname(),
                screen.correct_answers()
            );
            // Prefer the placement the server computed, fall back to
            // the position located within the snapshot
            let placement = screen.server_rank().or_else(|| screen.located_rank());
            match placement {
                Some(rank) => println!("Overall placement: #{} of {}", rank, screen.total()),
                None => println!("Overall placement is not available yet."),
            }

            println!("-- {} --", mode);
            let rows = screen.visible_slice();
            if rows.is_empty() {
                println!("Nothing to show yet.");
                return;
            }

            for row in rows {
                let marker = if row.nickname == screen.nickname() {
                    ">"
                } else {
                    " "
                };
                println!("{} {:>3}. {:<24} {}", marker, row.rank, row.nickname, row.score);
            }
        }
    }
}
