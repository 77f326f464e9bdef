//! Stateless rendering of core state. Nothing here mutates the engine or
//! the profile store.

use std::io::{self, Write};

use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use hangman_core::{GameEngine, MAX_WRONG_GUESSES};
use hangman_persistence::ProfileStore;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One drawing per wrong-guess count, 0 through 6.
const GALLOWS: [&str; 7] = [
    r"  +---+
  |   |
      |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

pub fn gallows_stage(wrong_guesses: u8) -> &'static str {
    GALLOWS[usize::from(wrong_guesses.min(MAX_WRONG_GUESSES))]
}

/// Transient presentation flags; holds no game state.
#[derive(Debug, Default)]
pub struct ViewState {
    pub show_hint: bool,
    pub message: Option<String>,
}

impl ViewState {
    pub fn clear(&mut self) {
        self.show_hint = false;
        self.message = None;
    }
}

pub fn render(
    out: &mut impl Write,
    engine: &GameEngine,
    store: &ProfileStore,
    view: &ViewState,
) -> io::Result<()> {
    let state = engine.state();

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("HANGMAN"),
        SetAttribute(Attribute::Reset),
        MoveToNextLine(1)
    )?;

    let player = store
        .active()
        .map(|p| p.username.as_str())
        .unwrap_or("guest");
    queue!(
        out,
        Print(format!(
            "score: {}   difficulty: {}   player: {}",
            engine.total_score(),
            state.difficulty,
            player
        )),
        MoveToNextLine(2)
    )?;

    for line in gallows_stage(state.wrong_guesses).lines() {
        queue!(out, Print(line), MoveToNextLine(1))?;
    }
    queue!(out, MoveToNextLine(1))?;

    let masked: String = state
        .masked_word()
        .chars()
        .flat_map(|c| [c, ' '])
        .collect();
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(masked.trim_end()),
        SetAttribute(Attribute::Reset),
        MoveToNextLine(2)
    )?;

    if view.show_hint {
        queue!(
            out,
            SetForegroundColor(Color::Cyan),
            Print(format!("hint: {}", state.hint)),
            ResetColor,
            MoveToNextLine(2)
        )?;
    }

    for row in KEYBOARD_ROWS {
        for letter in row.chars() {
            if state.is_letter_correct(letter) {
                queue!(
                    out,
                    SetForegroundColor(Color::Green),
                    Print(letter),
                    ResetColor
                )?;
            } else if state.is_letter_guessed(letter) {
                queue!(
                    out,
                    SetForegroundColor(Color::DarkGrey),
                    Print(letter),
                    ResetColor
                )?;
            } else {
                queue!(out, Print(letter))?;
            }
            queue!(out, Print(" "))?;
        }
        queue!(out, MoveToNextLine(1))?;
    }
    queue!(out, MoveToNextLine(1))?;

    if let Some(message) = &view.message {
        queue!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(message.as_str()),
            ResetColor,
            MoveToNextLine(1)
        )?;
    }

    if state.is_over {
        if state.is_win {
            queue!(
                out,
                SetForegroundColor(Color::Green),
                Print("Congratulations, you won!"),
                ResetColor,
                MoveToNextLine(1)
            )?;
        } else {
            queue!(
                out,
                SetForegroundColor(Color::Red),
                Print(format!("Game over - the word was {}", state.word)),
                ResetColor,
                MoveToNextLine(1)
            )?;
        }
        queue!(out, Print("press Enter to play again"), MoveToNextLine(1))?;
    }

    queue!(
        out,
        MoveToNextLine(1),
        SetForegroundColor(Color::DarkGrey),
        Print("a-z guess   1/2/3 difficulty   ? hint   Tab profile   Enter new round   Esc quit"),
        ResetColor
    )?;

    out.flush()
}
