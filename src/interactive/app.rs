//! TUI application state and logic
//!
//! All state lives in `App` and is owned by the main thread; key presses and
//! ticks arrive as [`Event`]s and are applied one at a time.

use super::event::{self, Event};
use super::lifecycle::ExitHandlers;
use super::rendering;
use crate::config::GameConfig;
use crate::core::CharacterStatus;
use crate::error::ConfigError;
use crate::hints::combine_hints;
use crate::output::count_of;
use crate::puzzle::Puzzle;
use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// Interval between tick events
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Messages kept for display
const MAX_MESSAGES: usize = 5;

/// What the keyboard currently edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters of the next guess
    Guess,
    /// Helper mode: the reported result of the typed guess, puzzle by puzzle
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Reset,
    IncrementAttempts,
    DecrementAttempts,
    Backspace,
    Submit,
    Letter(char),
    Status(CharacterStatus),
}

/// Translate a key press; keys without a meaning in `mode` yield `None`
#[must_use]
pub fn action_for_key(key: KeyEvent, mode: InputMode) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('r') if ctrl => Some(Action::Reset),
        KeyCode::Char('i') if ctrl => Some(Action::IncrementAttempts),
        KeyCode::Tab => Some(Action::IncrementAttempts),
        KeyCode::Char('d') if ctrl => Some(Action::DecrementAttempts),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => match mode {
            InputMode::Guess => c
                .is_ascii_alphabetic()
                .then_some(Action::Letter(c.to_ascii_lowercase())),
            InputMode::Status => CharacterStatus::from_code(c).map(Action::Status),
        },
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Pacing state of the automatic solver
#[derive(Debug, Clone)]
struct AutoSolver {
    interval: Duration,
    next_step: Instant,
    /// Letters of the current hint still to type; empty means submit next
    typing: Option<String>,
    gave_up: bool,
}

/// Application state
pub struct App {
    puzzles: Vec<Puzzle>,
    config: GameConfig,
    guess: String,
    /// Helper mode results being entered, one per puzzle
    results: Vec<Vec<CharacterStatus>>,
    input_mode: InputMode,
    status_index: usize,
    hints: Vec<String>,
    presets: VecDeque<String>,
    solver: Option<AutoSolver>,
    messages: Vec<Message>,
    started: Instant,
    finished: Option<Duration>,
    pub should_quit: bool,
}

impl App {
    /// Build every puzzle of `config` and play its pre-set attempts
    ///
    /// # Errors
    /// Returns `ConfigError` if a puzzle cannot be built.
    pub fn new(config: GameConfig, dictionary: &Arc<[String]>) -> Result<Self, ConfigError> {
        let puzzles = (0..config.num_puzzles)
            .map(|index| Puzzle::new(config.puzzle_options(index, dictionary)))
            .collect::<Result<Vec<_>, _>>()?;
        let started = Instant::now();
        let solver = config.solve.then(|| AutoSolver {
            interval: Duration::from_secs(1) / config.solve_speed.max(1),
            next_step: started,
            typing: None,
            gave_up: false,
        });

        let mut app = Self {
            results: vec![Vec::new(); puzzles.len()],
            puzzles,
            presets: config.attempts.iter().cloned().collect(),
            config,
            guess: String::new(),
            input_mode: InputMode::Guess,
            status_index: 0,
            hints: Vec::new(),
            solver,
            messages: Vec::new(),
            started,
            finished: None,
            should_quit: false,
        };
        app.add_message(app.welcome(), MessageStyle::Info);
        app.play_presets();
        app.refresh();
        Ok(app)
    }

    fn welcome(&self) -> &'static str {
        if self.config.helper {
            "Type the word you played, Enter, then its result with 0/2/3"
        } else if self.config.solve {
            "Sit back, the puzzle solves itself"
        } else {
            "Guess the word!"
        }
    }

    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The guess being typed
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Result entered so far for puzzle `index` in helper mode
    #[must_use]
    pub fn result(&self, index: usize) -> &[CharacterStatus] {
        self.results.get(index).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Puzzle receiving statuses in helper mode
    #[must_use]
    pub const fn status_index(&self) -> usize {
        self.status_index
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub const fn is_solving(&self) -> bool {
        self.solver.is_some()
    }

    /// Every puzzle is solved or out of attempts
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.puzzles.iter().all(Puzzle::is_over)
    }

    /// Time spent on the current game, frozen once it is over
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.started.elapsed())
    }

    /// Apply one user action
    ///
    /// While the engine plays only Quit is accepted, and Reset once the game
    /// is over or the engine has given up.
    pub fn apply(&mut self, action: Action) {
        let allowed = match action {
            Action::Quit => true,
            Action::Reset => {
                self.solver.as_ref().is_none_or(|solver| solver.gave_up) || self.is_game_over()
            }
            _ => self.solver.is_none(),
        };
        if !allowed {
            return;
        }
        match action {
            Action::Quit => self.should_quit = true,
            Action::Reset => self.reset(),
            Action::IncrementAttempts => self.increment_attempts(),
            Action::DecrementAttempts => self.decrement_attempts(),
            Action::Backspace => self.backspace(),
            Action::Submit => self.submit(),
            Action::Letter(letter) => self.type_letter(letter),
            Action::Status(status) => self.push_status(status),
        }
    }

    /// Advance the automatic solver when its pacing interval has passed
    pub fn on_tick(&mut self, now: Instant) {
        if self.is_game_over() {
            return;
        }
        let Some(solver) = self.solver.as_mut() else {
            return;
        };
        if now < solver.next_step {
            return;
        }
        solver.next_step = now + solver.interval;
        self.solve_step();
    }

    fn solve_step(&mut self) {
        let typing = match self.solver.as_mut() {
            Some(solver) if !solver.gave_up => solver.typing.take(),
            _ => return,
        };
        let mut letters = match typing {
            Some(rest) if rest.is_empty() => {
                self.submit_guess();
                return;
            }
            Some(rest) => rest,
            None => {
                if let Some(word) = self.hints.first() {
                    debug!("auto-solve types \"{word}\"");
                    word.clone()
                } else {
                    self.add_message("Failed to solve, no hints left", MessageStyle::Error);
                    if let Some(solver) = self.solver.as_mut() {
                        solver.gave_up = true;
                    }
                    return;
                }
            }
        };
        let letter = letters.remove(0);
        self.type_letter(letter);
        if let Some(solver) = self.solver.as_mut() {
            solver.typing = Some(letters);
        }
    }

    fn type_letter(&mut self, letter: char) {
        if self.input_mode == InputMode::Guess
            && !self.is_game_over()
            && self.guess.len() < self.config.word_length
        {
            self.guess.push(letter);
        }
    }

    fn push_status(&mut self, status: CharacterStatus) {
        if self.input_mode != InputMode::Status {
            return;
        }
        let length = self.config.word_length;
        if self.results[self.status_index].len() == length
            && let Some(next) = self.next_unfinished(self.status_index)
        {
            self.status_index = next;
        }
        let result = &mut self.results[self.status_index];
        if result.len() < length {
            result.push(status);
        }
    }

    fn backspace(&mut self) {
        match self.input_mode {
            InputMode::Guess => {
                self.guess.pop();
            }
            InputMode::Status => {
                if self.results[self.status_index].is_empty() {
                    match self.previous_unfinished(self.status_index) {
                        Some(previous) => self.status_index = previous,
                        None => {
                            self.input_mode = InputMode::Guess;
                            return;
                        }
                    }
                }
                self.results[self.status_index].pop();
            }
        }
    }

    fn submit(&mut self) {
        if self.is_game_over() {
            return;
        }
        match self.input_mode {
            InputMode::Guess if self.guess.len() < self.config.word_length => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            InputMode::Guess if self.config.helper => self.enter_status_mode(),
            InputMode::Guess => self.submit_guess(),
            InputMode::Status => {
                let complete =
                    self.results[self.status_index].len() == self.config.word_length;
                if complete && self.next_unfinished(self.status_index).is_none() {
                    self.submit_statuses();
                }
            }
        }
    }

    fn enter_status_mode(&mut self) {
        self.input_mode = InputMode::Status;
        self.status_index = self.first_unfinished().unwrap_or(0);
        for result in &mut self.results {
            result.clear();
        }
    }

    /// Play the typed guess in every unfinished puzzle
    fn submit_guess(&mut self) {
        let mut accepted = false;
        let mut rejection = None;
        for puzzle in self.puzzles.iter_mut().filter(|p| !p.is_over()) {
            match puzzle.attempt(&self.guess, None) {
                Ok(_) => accepted = true,
                Err(err) => {
                    if rejection.is_none() {
                        rejection = Some(err);
                    }
                }
            }
        }
        if let Some(err) = rejection {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
        if accepted {
            self.guess.clear();
            self.refresh();
        }
    }

    /// Play the typed guess with the reported results (helper mode)
    fn submit_statuses(&mut self) {
        let mut rejection = None;
        for (puzzle, result) in self.puzzles.iter_mut().zip(&self.results) {
            if puzzle.is_over() {
                continue;
            }
            if let Err(err) = puzzle.attempt(&self.guess, Some(result.as_slice()))
                && rejection.is_none()
            {
                rejection = Some(err);
            }
        }
        if let Some(err) = rejection {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
        self.guess.clear();
        for result in &mut self.results {
            result.clear();
        }
        self.input_mode = InputMode::Guess;
        self.status_index = 0;
        self.play_presets();
        self.refresh();
    }

    /// Pre-set attempts are played directly, or in helper mode typed in one
    /// at a time for the player to report their results
    fn play_presets(&mut self) {
        if self.config.helper {
            if !self.is_game_over()
                && let Some(word) = self.presets.pop_front()
            {
                self.guess = word;
                self.enter_status_mode();
            }
            return;
        }
        while let Some(word) = self.presets.pop_front() {
            if self.is_game_over() {
                break;
            }
            self.guess = word;
            self.submit_guess();
            self.guess.clear();
        }
    }

    fn reset(&mut self) {
        let errors: Vec<String> = self
            .puzzles
            .iter_mut()
            .filter_map(|puzzle| puzzle.reset().err())
            .map(|err| err.to_string())
            .collect();
        for error in &errors {
            self.add_message(error, MessageStyle::Error);
        }
        self.guess.clear();
        for result in &mut self.results {
            result.clear();
        }
        self.input_mode = InputMode::Guess;
        self.status_index = 0;
        self.started = Instant::now();
        self.finished = None;
        if let Some(solver) = self.solver.as_mut() {
            solver.next_step = self.started;
            solver.typing = None;
            solver.gave_up = false;
        }
        self.add_message("New game started", MessageStyle::Info);
        self.refresh();
    }

    fn increment_attempts(&mut self) {
        for puzzle in &mut self.puzzles {
            puzzle.increment_max_attempts();
        }
        self.refresh();
    }

    fn decrement_attempts(&mut self) {
        if !self.puzzles.iter().all(Puzzle::can_decrement_max_attempts) {
            self.add_message("Cannot remove more attempts", MessageStyle::Error);
            return;
        }
        for puzzle in &mut self.puzzles {
            puzzle.decrement_max_attempts();
        }
        self.refresh();
    }

    /// Recompute hints and the game clock after a state change
    fn refresh(&mut self) {
        self.hints = combine_hints(&self.puzzles);
        match (self.is_game_over(), self.finished) {
            (true, None) => {
                self.finished = Some(self.started.elapsed());
                self.announce_outcome();
            }
            (false, Some(_)) => self.finished = None,
            _ => {}
        }
    }

    fn announce_outcome(&mut self) {
        if self.puzzles.iter().all(Puzzle::is_solved) {
            let attempts = self
                .puzzles
                .iter()
                .map(|p| p.attempts().len())
                .max()
                .unwrap_or(0);
            self.add_message(
                &format!(
                    "Solved in {}! Ctrl+R plays again",
                    count_of(attempts, "attempt", "attempts")
                ),
                MessageStyle::Success,
            );
            return;
        }
        let missed: Vec<String> = self
            .puzzles
            .iter()
            .filter(|p| !p.is_solved())
            .filter_map(|p| p.secret().map(str::to_uppercase))
            .collect();
        let text = if missed.is_empty() {
            "Out of attempts".to_string()
        } else {
            format!("Out of attempts, the answer was {}", missed.join(", "))
        };
        self.add_message(&text, MessageStyle::Error);
    }

    fn first_unfinished(&self) -> Option<usize> {
        self.puzzles.iter().position(|p| !p.is_over())
    }

    fn next_unfinished(&self, from: usize) -> Option<usize> {
        (from + 1..self.puzzles.len()).find(|&idx| !self.puzzles[idx].is_over())
    }

    fn previous_unfinished(&self, from: usize) -> Option<usize> {
        (0..from).rev().find(|&idx| !self.puzzles[idx].is_over())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Letters of the answer row, `None` where a letter is still hidden
///
/// A letter shows once it has been guessed at its position; the whole answer
/// shows once the puzzle is over. Hidden secrets have no answer row.
#[must_use]
pub fn answer_reveal(puzzle: &Puzzle) -> Option<Vec<Option<char>>> {
    let secret = puzzle.secret()?;
    let over = puzzle.is_over();
    let reveal = secret
        .bytes()
        .enumerate()
        .map(|(idx, letter)| {
            let guessed = puzzle
                .attempts()
                .iter()
                .any(|a| a.guess().as_bytes().get(idx) == Some(&letter));
            (over || guessed).then_some(char::from(letter))
        })
        .collect();
    Some(reveal)
}

/// Keyboard color of `letter`: its status if every puzzle agrees, else unknown
#[must_use]
pub fn keyboard_status(puzzles: &[Puzzle], letter: char) -> CharacterStatus {
    let mut statuses = puzzles.iter().map(|p| p.knowledge().get(letter));
    let Some(first) = statuses.next() else {
        return CharacterStatus::Unknown;
    };
    if statuses.all(|status| status == first) {
        first
    } else {
        CharacterStatus::Unknown
    }
}

/// Run the TUI application
///
/// The terminal is restored by exit handlers that run exactly once, also
/// when the application panics.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering.
pub fn run_tui(app: App) -> Result<()> {
    let exit_handlers = ExitHandlers::new();
    exit_handlers.register(|| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    });
    exit_handlers.install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = event::spawn(TICK_RATE);
    let res = run_app(&mut terminal, app, &events);

    exit_handlers.run();
    terminal.show_cursor()?;
    res.map(|_| ())
}

/// Draw, wait for the next event, apply it; until quit or the channel closes
///
/// # Errors
/// Returns an error if drawing fails.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    events: &Receiver<Event>,
) -> Result<App> {
    loop {
        terminal.draw(|f| rendering::ui(f, &app))?;

        let Ok(event) = events.recv() else {
            break;
        };
        match event {
            Event::Key(key) => {
                if let Some(action) = action_for_key(key, app.input_mode()) {
                    app.apply(action);
                }
            }
            Event::Tick => app.on_tick(Instant::now()),
        }

        if app.should_quit {
            break;
        }
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharacterStatus::{CorrectLocation, NotPresent, WrongLocation};
    use ratatui::backend::TestBackend;
    use rstest::rstest;
    use std::sync::mpsc;

    const WORDS: [&str; 8] = [
        "brain", "crane", "drain", "ghost", "grain", "plumb", "slate", "train",
    ];

    fn dictionary() -> Arc<[String]> {
        WORDS.map(String::from).to_vec().into()
    }

    fn app(config: GameConfig) -> App {
        App::new(config.validate().unwrap(), &dictionary()).unwrap()
    }

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn with_answers(list: &[&str]) -> GameConfig {
        GameConfig {
            answers: answers(list),
            num_puzzles: list.len(),
            ..GameConfig::default()
        }
    }

    fn type_word(app: &mut App, word: &str) {
        for letter in word.chars() {
            app.apply(Action::Letter(letter));
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(letter: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(letter), KeyModifiers::CONTROL)
    }

    #[rstest]
    #[case(press(KeyCode::Esc), InputMode::Guess, Some(Action::Quit))]
    #[case(ctrl('c'), InputMode::Status, Some(Action::Quit))]
    #[case(ctrl('r'), InputMode::Guess, Some(Action::Reset))]
    #[case(ctrl('i'), InputMode::Guess, Some(Action::IncrementAttempts))]
    #[case(press(KeyCode::Tab), InputMode::Guess, Some(Action::IncrementAttempts))]
    #[case(ctrl('d'), InputMode::Guess, Some(Action::DecrementAttempts))]
    #[case(press(KeyCode::Backspace), InputMode::Status, Some(Action::Backspace))]
    #[case(press(KeyCode::Enter), InputMode::Guess, Some(Action::Submit))]
    #[case(press(KeyCode::Char('T')), InputMode::Guess, Some(Action::Letter('t')))]
    #[case(press(KeyCode::Char('3')), InputMode::Guess, None)]
    #[case(press(KeyCode::Char('3')), InputMode::Status, Some(Action::Status(CorrectLocation)))]
    #[case(press(KeyCode::Char('1')), InputMode::Status, None)]
    #[case(press(KeyCode::Char('a')), InputMode::Status, None)]
    #[case(ctrl('x'), InputMode::Guess, None)]
    #[case(press(KeyCode::Left), InputMode::Guess, None)]
    fn keys_map_to_actions(
        #[case] key: KeyEvent,
        #[case] mode: InputMode,
        #[case] expected: Option<Action>,
    ) {
        assert_eq!(action_for_key(key, mode), expected);
    }

    #[test]
    fn typing_and_submitting_a_guess() {
        let mut app = app(with_answers(&["train"]));
        type_word(&mut app, "cranes");
        assert_eq!(app.guess(), "crane");
        app.apply(Action::Backspace);
        assert_eq!(app.guess(), "cran");
        app.apply(Action::Submit);
        assert_eq!(app.messages().last().unwrap().text, "Not enough letters");

        app.apply(Action::Letter('e'));
        app.apply(Action::Submit);
        assert_eq!(app.guess(), "");
        assert_eq!(app.puzzles()[0].attempts().len(), 1);
        assert_eq!(app.hints(), ["ghost", "brain", "drain", "grain", "plumb"]);
    }

    #[test]
    fn rejected_guess_stays_in_the_draft() {
        let mut app = app(with_answers(&["train"]));
        type_word(&mut app, "zzzzz");
        app.apply(Action::Submit);
        assert_eq!(app.guess(), "zzzzz");
        assert!(app.puzzles()[0].attempts().is_empty());
        assert_eq!(
            app.messages().last().unwrap().text,
            "\"zzzzz\" is not in the dictionary"
        );
    }

    #[test]
    fn winning_freezes_the_clock_and_ignores_input() {
        let mut app = app(with_answers(&["train"]));
        type_word(&mut app, "train");
        app.apply(Action::Submit);
        assert!(app.is_game_over());
        assert!(app.hints().is_empty());
        let elapsed = app.elapsed();
        assert_eq!(app.elapsed(), elapsed);
        assert_eq!(app.messages().last().unwrap().style, MessageStyle::Success);

        type_word(&mut app, "crane");
        assert_eq!(app.guess(), "");
    }

    #[test]
    fn reset_starts_a_new_game() {
        let mut app = app(with_answers(&["train"]));
        type_word(&mut app, "crane");
        app.apply(Action::Submit);
        type_word(&mut app, "gho");
        app.apply(Action::Reset);
        assert_eq!(app.guess(), "");
        assert!(app.puzzles()[0].attempts().is_empty());
        assert_eq!(app.puzzles()[0].secret(), Some("train"));
        assert!(!app.is_game_over());
    }

    #[test]
    fn presets_are_played_on_start() {
        let config = GameConfig {
            attempts: answers(&["crane", "ghost"]),
            ..with_answers(&["train"])
        };
        let app = app(config);
        let played: Vec<&str> = app.puzzles()[0]
            .attempts()
            .iter()
            .map(|a| a.guess())
            .collect();
        assert_eq!(played, ["crane", "ghost"]);
    }

    #[test]
    fn exhausted_game_reveals_the_answer() {
        let config = GameConfig {
            max_attempts: 1,
            ..with_answers(&["train"])
        };
        let mut app = app(config);
        type_word(&mut app, "crane");
        app.apply(Action::Submit);
        assert!(app.is_game_over());
        assert_eq!(
            app.messages().last().unwrap().text,
            "Out of attempts, the answer was TRAIN"
        );
        let reveal = answer_reveal(&app.puzzles()[0]).unwrap();
        assert!(reveal.iter().all(Option::is_some));

        // another attempt slot reopens the game
        app.apply(Action::IncrementAttempts);
        assert!(!app.is_game_over());
        assert_eq!(app.puzzles()[0].max_attempts(), 2);
    }

    #[test]
    fn decrement_keeps_a_free_attempt() {
        let config = GameConfig {
            max_attempts: 3,
            ..with_answers(&["train", "ghost"])
        };
        let mut app = app(config);
        type_word(&mut app, "crane");
        app.apply(Action::Submit);
        app.apply(Action::DecrementAttempts);
        assert!(app.puzzles().iter().all(|p| p.max_attempts() == 2));

        app.apply(Action::DecrementAttempts);
        assert!(app.puzzles().iter().all(|p| p.max_attempts() == 2));
        assert_eq!(
            app.messages().last().unwrap().text,
            "Cannot remove more attempts"
        );
    }

    #[test]
    fn helper_mode_collects_results_per_puzzle() {
        let config = GameConfig {
            helper: true,
            num_puzzles: 2,
            ..GameConfig::default()
        };
        let mut app = app(config);
        type_word(&mut app, "crane");
        app.apply(Action::Submit);
        assert_eq!(app.input_mode(), InputMode::Status);
        assert_eq!(app.status_index(), 0);

        // letters are ignored while entering statuses
        app.apply(Action::Letter('x'));
        for status in [NotPresent, CorrectLocation, CorrectLocation, WrongLocation, NotPresent] {
            app.apply(Action::Status(status));
        }
        // first result is complete, but the second puzzle still needs one
        app.apply(Action::Submit);
        assert_eq!(app.input_mode(), InputMode::Status);

        app.apply(Action::Status(NotPresent));
        assert_eq!(app.status_index(), 1);
        app.apply(Action::Backspace);
        assert!(app.result(1).is_empty());
        app.apply(Action::Backspace);
        assert_eq!(app.status_index(), 0);
        assert_eq!(app.result(0).len(), 4);
        app.apply(Action::Status(NotPresent));

        for _ in 0..5 {
            app.apply(Action::Status(NotPresent));
        }
        app.apply(Action::Submit);
        assert_eq!(app.input_mode(), InputMode::Guess);
        let first = &app.puzzles()[0].attempts()[0];
        assert_eq!(first.guess(), "crane");
        assert_eq!(first.result()[1], CorrectLocation);
        assert_eq!(app.puzzles()[1].attempts()[0].result(), [NotPresent; 5]);
        assert!(app.hints().iter().all(|h| h != "crane"));
    }

    #[test]
    fn helper_backspace_on_empty_result_edits_the_guess() {
        let config = GameConfig {
            helper: true,
            ..GameConfig::default()
        };
        let mut app = app(config);
        type_word(&mut app, "crane");
        app.apply(Action::Submit);
        app.apply(Action::Backspace);
        assert_eq!(app.input_mode(), InputMode::Guess);
        app.apply(Action::Backspace);
        assert_eq!(app.guess(), "cran");
    }

    #[test]
    fn helper_presets_are_waiting_for_results() {
        let config = GameConfig {
            helper: true,
            attempts: answers(&["crane", "ghost"]),
            ..GameConfig::default()
        };
        let mut app = app(config);
        assert_eq!(app.guess(), "crane");
        assert_eq!(app.input_mode(), InputMode::Status);

        for _ in 0..5 {
            app.apply(Action::Status(NotPresent));
        }
        app.apply(Action::Submit);
        assert_eq!(app.guess(), "ghost");
        assert_eq!(app.input_mode(), InputMode::Status);
    }

    #[test]
    fn auto_solve_types_one_letter_per_interval() {
        let config = GameConfig {
            solve: true,
            solve_speed: 10,
            ..with_answers(&["train"])
        };
        let mut app = app(config);
        let start = app.started;
        let first = app.hints()[0].clone();

        app.on_tick(start);
        assert_eq!(app.guess(), &first[..1]);
        // too early for the next letter
        app.on_tick(start + Duration::from_millis(50));
        assert_eq!(app.guess().len(), 1);

        // keys other than quit are ignored
        app.apply(Action::Backspace);
        assert_eq!(app.guess().len(), 1);

        let mut now = start;
        for _ in 0..60 {
            now += Duration::from_millis(100);
            app.on_tick(now);
        }
        assert!(app.is_game_over());
        assert!(app.puzzles()[0].is_solved());

        app.apply(Action::Quit);
        assert!(app.should_quit);
    }

    fn solving(answer: &str) -> App {
        app(GameConfig {
            solve: true,
            solve_speed: 10,
            ..with_answers(&[answer])
        })
    }

    fn tick_for(app: &mut App, from: Instant, ticks: u32) {
        for step in 0..ticks {
            app.on_tick(from + Duration::from_millis(100) * step);
        }
    }

    #[test]
    fn auto_solve_plays_again_after_reset() {
        let mut app = solving("train");
        let start = app.started;
        app.on_tick(start);
        // the engine is still playing
        app.apply(Action::Reset);
        assert_eq!(app.guess().len(), 1);

        tick_for(&mut app, start, 60);
        assert!(app.puzzles()[0].is_solved());
        assert!(app.messages().last().unwrap().text.ends_with("Ctrl+R plays again"));

        app.apply(Action::Reset);
        assert!(!app.is_game_over());
        assert!(app.puzzles()[0].attempts().is_empty());
        assert_eq!(app.guess(), "");

        let restart = app.started;
        tick_for(&mut app, restart, 60);
        assert!(app.puzzles()[0].is_solved());
    }

    #[test]
    fn auto_solve_gives_up_without_hints() {
        // no dictionary word shares a letter with the answer
        let mut app = solving("zzzzz");
        let start = app.started;
        tick_for(&mut app, start, 60);

        let played: Vec<&str> = app.puzzles()[0]
            .attempts()
            .iter()
            .map(|a| a.guess())
            .collect();
        assert_eq!(played, ["train", "plumb"]);
        assert!(!app.is_game_over());
        assert!(app.hints().is_empty());
        let failures = app
            .messages()
            .iter()
            .filter(|m| m.text == "Failed to solve, no hints left")
            .count();
        assert_eq!(failures, 1);
        assert_eq!(app.messages().last().unwrap().style, MessageStyle::Error);

        app.apply(Action::Reset);
        assert!(app.puzzles()[0].attempts().is_empty());
        assert_eq!(app.messages().last().unwrap().text, "New game started");
        let restart = app.started;
        tick_for(&mut app, restart, 10);
        assert_eq!(app.puzzles()[0].attempts().len(), 1);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(with_answers(&["train"]));
        for _ in 0..(MAX_MESSAGES + 3) {
            app.apply(Action::Reset);
        }
        assert_eq!(app.messages().len(), MAX_MESSAGES);
        assert!(app.messages().iter().all(|m| m.text == "New game started"));
    }

    #[test]
    fn keyboard_status_needs_agreement() {
        let mut app = app(with_answers(&["train", "ghost"]));
        type_word(&mut app, "crane");
        app.apply(Action::Submit);
        // c and e are absent from both answers
        assert_eq!(keyboard_status(app.puzzles(), 'c'), NotPresent);
        assert_eq!(keyboard_status(app.puzzles(), 'e'), NotPresent);
        // r is green for train and absent for ghost
        assert_eq!(keyboard_status(app.puzzles(), 'r'), CharacterStatus::Unknown);
        assert_eq!(keyboard_status(app.puzzles(), 'z'), CharacterStatus::Unknown);
        assert_eq!(keyboard_status(&[], 'a'), CharacterStatus::Unknown);
    }

    #[test]
    fn answer_reveals_letters_guessed_in_place() {
        let mut app = app(with_answers(&["train"]));
        assert_eq!(
            answer_reveal(&app.puzzles()[0]),
            Some(vec![None; 5])
        );
        type_word(&mut app, "brain");
        app.apply(Action::Submit);
        assert_eq!(
            answer_reveal(&app.puzzles()[0]),
            Some(vec![None, Some('r'), Some('a'), Some('i'), Some('n')])
        );

        let helper = self::app(GameConfig {
            helper: true,
            ..GameConfig::default()
        });
        assert_eq!(answer_reveal(&helper.puzzles()[0]), None);
    }

    #[test]
    fn event_loop_applies_keys_until_quit() {
        let app = app(with_answers(&["train"]));
        let (tx, rx) = mpsc::channel();
        for letter in "train".chars() {
            tx.send(Event::Key(press(KeyCode::Char(letter)))).unwrap();
        }
        tx.send(Event::Key(press(KeyCode::Enter))).unwrap();
        tx.send(Event::Tick).unwrap();
        tx.send(Event::Key(press(KeyCode::Esc))).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let app = run_app(&mut terminal, app, &rx).unwrap();
        assert!(app.should_quit);
        assert!(app.puzzles()[0].is_solved());
    }

    #[test]
    fn event_loop_ends_when_the_channel_closes() {
        let app = app(with_answers(&["train"]));
        let (tx, rx) = mpsc::channel();
        tx.send(Event::Key(press(KeyCode::Char('c')))).unwrap();
        drop(tx);

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let app = run_app(&mut terminal, app, &rx).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.guess(), "c");
    }
}
