//! Line-mode helper for a puzzle played elsewhere
//!
//! The player reports each guess they made and the feedback they got; the
//! session answers with the next hints.

use crate::core::{CharacterStatus, parse_feedback};
use crate::error::PuzzleError;
use crate::output::count_of;
use crate::puzzle::{Puzzle, PuzzleOptions, PuzzleStatus};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Games played during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssistSummary {
    pub games: usize,
    pub solved: usize,
}

/// Run the helper on stdin and stdout
///
/// # Errors
/// Returns an error if the puzzle cannot be built or the terminal fails.
pub fn run_assist(options: PuzzleOptions) -> anyhow::Result<AssistSummary> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    assist_session(options, stdin.lock(), &mut stdout)
}

/// A helper session over arbitrary input and output
///
/// `options` should hide the secret; see
/// [`PuzzleOptions::with_unknown_answer`]. The session ends on `quit` or at
/// the end of the input.
///
/// # Errors
/// Returns an error if the puzzle cannot be built or reading or writing fails.
pub fn assist_session<R: BufRead, W: Write>(
    options: PuzzleOptions,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<AssistSummary> {
    let mut puzzle = Puzzle::new(options)?;
    let mut summary = AssistSummary::default();

    writeln!(out, "{}", "Wordle helper".bright_cyan().bold())?;
    writeln!(
        out,
        "Report each guess, then its feedback: G/3 green, Y/2 yellow, -/0 gray, or 'win'."
    )?;
    writeln!(out, "Commands: 'new' starts over, 'quit' exits.")?;

    loop {
        let hints = puzzle.hints();
        let turn = puzzle.attempts().len() + 1;
        writeln!(out)?;
        writeln!(out, "Turn {turn}/{}", puzzle.max_attempts())?;
        if hints.is_empty() {
            writeln!(
                out,
                "{}",
                "No word fits the feedback so far, type 'new' to start over".red()
            )?;
        } else {
            writeln!(out, "Hints: {}", hints.join(", ").green())?;
        }

        let Some(guess) = prompt(&mut input, out, "Guess (enter for the first hint)")? else {
            break;
        };
        let guess = match guess.as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                start_over(&mut puzzle, out)?;
                continue;
            }
            "" => match hints.first() {
                Some(hint) => hint.clone(),
                None => continue,
            },
            _ => guess,
        };

        let Some(feedback) = prompt(&mut input, out, &format!("Feedback for {guess}"))? else {
            break;
        };
        let result = match feedback.as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                start_over(&mut puzzle, out)?;
                continue;
            }
            "win" => vec![CharacterStatus::CorrectLocation; puzzle.word_length()],
            _ => match parse_feedback(&feedback) {
                Some(result) => result,
                None => {
                    writeln!(out, "{}", format!("Cannot read feedback \"{feedback}\"").red())?;
                    continue;
                }
            },
        };

        match puzzle.attempt(&guess, Some(&result)) {
            Ok(attempt) => writeln!(out, "{attempt}")?,
            Err(PuzzleError::Validation(err)) => {
                writeln!(out, "{}", err.to_string().red())?;
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        match puzzle.status() {
            PuzzleStatus::InProgress => {}
            PuzzleStatus::Solved => {
                summary.games += 1;
                summary.solved += 1;
                writeln!(
                    out,
                    "{}",
                    format!(
                        "Solved in {}!",
                        count_of(puzzle.attempts().len(), "guess", "guesses")
                    )
                        .green()
                        .bold()
                )?;
                start_over(&mut puzzle, out)?;
            }
            PuzzleStatus::Exhausted => {
                summary.games += 1;
                writeln!(out, "{}", "Out of attempts.".red().bold())?;
                start_over(&mut puzzle, out)?;
            }
        }
    }

    writeln!(out, "Bye!")?;
    Ok(summary)
}

fn start_over<W: Write>(puzzle: &mut Puzzle, out: &mut W) -> anyhow::Result<()> {
    puzzle.reset()?;
    writeln!(out, "New game started.")?;
    Ok(())
}

/// Print `label` and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::with_length;

    const WORDS: [&str; 8] = [
        "brain", "crane", "drain", "ghost", "grain", "plumb", "slate", "train",
    ];

    fn options(max_attempts: usize) -> PuzzleOptions {
        PuzzleOptions::new()
            .with_dictionary(WORDS.map(String::from).to_vec())
            .with_word_filters(vec![with_length(5)])
            .with_max_attempts(max_attempts)
            .with_unknown_answer(5)
    }

    fn run(script: &str, max_attempts: usize) -> (AssistSummary, String) {
        let mut out = Vec::new();
        let summary = assist_session(options(max_attempts), script.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reported_feedback_narrows_hints() {
        let (summary, out) = run("crane\n-GGY-\n", 6);
        assert_eq!(summary, AssistSummary::default());
        assert!(out.contains("train, brain, grain, drain, crane"));
        assert!(out.contains("Turn 2/6"));
        assert!(out.contains("ghost, brain, drain, grain, plumb"));
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn empty_guess_plays_the_first_hint() {
        let (summary, out) = run("\nwin\nquit\n", 6);
        assert_eq!(summary, AssistSummary { games: 1, solved: 1 });
        assert!(out.contains("Solved in 1 guess!"));
        assert!(out.contains("New game started."));
    }

    #[test]
    fn bad_feedback_is_asked_again() {
        let (summary, out) = run("crane\nxyz\ncrane\n32020\n", 6);
        assert_eq!(summary, AssistSummary::default());
        assert!(out.contains("Cannot read feedback \"xyz\""));
        assert!(out.contains("Turn 2/6"));
    }

    #[test]
    fn invalid_guess_is_rejected() {
        let (_, out) = run("cranes\n-----\n", 6);
        assert!(out.contains("\"cranes\" has 6 letters, expected 5"));
        assert!(!out.contains("Turn 2/6"));
    }

    #[test]
    fn running_out_of_attempts_starts_over() {
        let (summary, out) = run("crane\n-----\nghost\n-----\n", 2);
        assert_eq!(summary, AssistSummary { games: 1, solved: 0 });
        assert!(out.contains("Out of attempts."));
    }

    #[test]
    fn contradictory_feedback_leaves_no_hints() {
        let (_, out) = run("train\n-----\nbrain\nGGGG-\n", 6);
        assert!(out.contains("No word fits the feedback so far"));
    }
}
