mod config;
mod ui;

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hangman_core::{GameEngine, WordCatalog};
use hangman_persistence::ProfileStore;
use hangman_types::{Difficulty, GuessOutcome};

use config::Config;
use ui::ViewState;

fn main() -> Result<()> {
    // Logs go to stderr so they never fight the terminal UI; silent
    // unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    info!(data_dir = %config.data_dir.display(), "starting hangman");

    let mut store = ProfileStore::open(&config.data_dir);
    let catalog = match &config.words_file {
        Some(path) => WordCatalog::load(path),
        None => WordCatalog::builtin(),
    };

    let initial_score = store.active().map(|p| p.score).unwrap_or(0);
    let mut engine = GameEngine::new(catalog, initial_score, config.difficulty);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let result = run(&mut stdout, &mut engine, &mut store, config.difficulty);
    execute!(stdout, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    out: &mut Stdout,
    engine: &mut GameEngine,
    store: &mut ProfileStore,
    mut difficulty: Difficulty,
) -> Result<()> {
    let mut view = ViewState::default();

    loop {
        ui::render(out, engine, store, &view)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char('1') => {
                difficulty = Difficulty::Easy;
                engine.start_round(difficulty);
                view.clear();
            }
            KeyCode::Char('2') => {
                difficulty = Difficulty::Medium;
                engine.start_round(difficulty);
                view.clear();
            }
            KeyCode::Char('3') => {
                difficulty = Difficulty::Hard;
                engine.start_round(difficulty);
                view.clear();
            }
            KeyCode::Char('?') => view.show_hint = !view.show_hint,
            KeyCode::Enter => {
                engine.start_round(difficulty);
                view.clear();
            }
            KeyCode::Tab => {
                // The profile prompts are plain line input; hand the
                // terminal back while they run.
                execute!(out, LeaveAlternateScreen)?;
                terminal::disable_raw_mode()?;
                let result = profile_menu(store, engine);
                terminal::enable_raw_mode()?;
                execute!(out, EnterAlternateScreen)?;
                result?;
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                handle_guess(engine, store, &mut view, c);
            }
            _ => {}
        }
    }

    Ok(())
}

fn handle_guess(engine: &mut GameEngine, store: &mut ProfileStore, view: &mut ViewState, c: char) {
    let letter = c.to_ascii_uppercase();
    match engine.guess(letter) {
        GuessOutcome::Correct => {
            view.message = Some(format!("'{letter}' is in the word!"));
        }
        GuessOutcome::Incorrect => {
            view.message = Some(format!("'{letter}' is not in the word"));
        }
        GuessOutcome::Win { round_score } => {
            store.update_score(engine.total_score());
            view.message = Some(format!("You won! +{round_score} points"));
        }
        GuessOutcome::Loss => {
            store.update_score(engine.total_score());
            view.message = Some("You ran out of guesses! -50 points".to_string());
        }
        GuessOutcome::Ignored => {}
    }
}

fn profile_menu(store: &mut ProfileStore, engine: &mut GameEngine) -> Result<()> {
    if let Some(profile) = store.active() {
        println!(
            "\nLogged in as {} (score {}, joined {})",
            profile.username, profile.score, profile.date_joined
        );
        let choice = prompt_line("[o] log out, anything else to go back: ")?;
        if choice.eq_ignore_ascii_case("o") {
            // Guest play keeps the local score after logout.
            store.logout();
            println!("Logged out.");
        }
        return Ok(());
    }

    let choice = prompt_line("\n[l] log in, [r] register, anything else to go back: ")?;
    match choice.to_ascii_lowercase().as_str() {
        "l" => {
            let username = prompt_line("username: ")?;
            let password = prompt_line("password: ")?;
            match store.login(&username, &password) {
                Ok(profile) => {
                    engine.set_total_score(profile.score);
                    println!("Welcome back, {}!", profile.username);
                }
                Err(e) => println!("Login failed: {e}"),
            }
        }
        "r" => {
            let username = prompt_line("username (at least 3 characters): ")?;
            let password = prompt_line("password (at least 6 characters): ")?;
            // Boundary validation; the store itself only rejects blanks.
            if username.trim().len() < 3 {
                println!("Username must be at least 3 characters long");
            } else if password.trim().len() < 6 {
                println!("Password must be at least 6 characters long");
            } else {
                match store.register(&username, &password) {
                    Ok(profile) => {
                        engine.set_total_score(profile.score);
                        println!("Welcome, {}!", profile.username);
                    }
                    Err(e) => println!("Registration failed: {e}"),
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
