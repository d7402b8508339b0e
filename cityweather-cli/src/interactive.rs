use anyhow::Context;
use cityweather_core::{SearchOutcome, Session, WeatherClient};
use inquire::{InquireError, Text};

use crate::{cli::print_notice, render};

const HELP: &str = "\
Commands:
  <city> | search <city>   look up a city
  fav                      add the shown city to favorites
  favs                     list favorites
  theme                    toggle light/dark
  help                     show this text
  quit                     leave the session";

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Search(String),
    Favorite,
    Favorites,
    ToggleTheme,
    Help,
    Quit,
}

fn parse_action(line: &str) -> Action {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match head {
        "search" => Action::Search(rest.trim().to_string()),
        "fav" if rest.is_empty() => Action::Favorite,
        "favs" if rest.is_empty() => Action::Favorites,
        "theme" if rest.is_empty() => Action::ToggleTheme,
        "help" if rest.is_empty() => Action::Help,
        "quit" | "exit" if rest.is_empty() => Action::Quit,
        _ => Action::Search(line.to_string()),
    }
}

/// Run one search through the session and print whatever it produced.
async fn search(client: &WeatherClient, session: &mut Session, city: &str) {
    let ticket = session.begin_search();
    let result = client.search(city).await;

    match session.complete(ticket, result) {
        SearchOutcome::Displayed => {
            if let Some(report) = session.displayed() {
                print!("{}", render::report(report, session.theme()));
            }
        }
        SearchOutcome::Rejected(err) | SearchOutcome::Cleared(err) => {
            print_notice(&err, session.theme());
        }
        SearchOutcome::Discarded => {}
    }
}

pub async fn run(client: &WeatherClient, default_city: &str) -> anyhow::Result<()> {
    let mut session = Session::new();

    search(client, &mut session, default_city).await;
    println!("Type `help` for commands.");

    loop {
        let line = match Text::new(">").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read command"),
        };

        match parse_action(&line) {
            Action::Search(city) => search(client, &mut session, &city).await,
            Action::Favorite => {
                let Some(name) = session.current_snapshot().map(|s| s.location_name.clone()) else {
                    println!("Nothing to add: search for a city first.");
                    continue;
                };
                if session.add_favorite() {
                    println!("Added {name} to favorites.");
                } else {
                    tracing::debug!(location = %name, "already a favorite");
                }
            }
            Action::Favorites => {
                print!("{}", render::favorites(session.favorites().list(), session.theme()));
            }
            Action::ToggleTheme => {
                let theme = session.toggle_theme();
                println!("Switched to {theme:?} mode.");
            }
            Action::Help => println!("{HELP}"),
            Action::Quit => break,
        }
    }

    Ok(())
}
