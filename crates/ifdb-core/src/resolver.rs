//! Interprets the user's answer to the game prompt
//!
//! An answer is either a paging command, an absolute index into the full
//! candidate list, or something to reject with a one-line correction.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::pager::Pager;
use crate::terminal::Terminal;
use crate::types::Candidate;

const GAME_PROMPT: &str = "Which game do you want to get? ";

/// Direction of a paging command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Next,
    Previous,
}

/// Why an answer was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Text is neither a number nor an accepted command
    NotANumber,
    /// Number outside `[0, len)`
    OutOfRange,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::NotANumber => "Please enter the number of a game.",
            Rejection::OutOfRange => "Please enter a number within an appropriate range.",
        }
    }
}

/// Classified answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Page(Page),
    Select(usize),
    Invalid(Rejection),
}

/// Parse an index in `[0, len)`
pub fn parse_index(input: &str, len: usize) -> std::result::Result<usize, Rejection> {
    let number: i64 = input.trim().parse().map_err(|_| Rejection::NotANumber)?;

    usize::try_from(number)
        .ok()
        .filter(|&i| i < len)
        .ok_or(Rejection::OutOfRange)
}

/// Classify one line of input against a list of `len` candidates
pub fn resolve(input: &str, len: usize, paging: bool) -> Resolution {
    let command = input.trim();

    if paging {
        if command.eq_ignore_ascii_case("n") {
            return Resolution::Page(Page::Next);
        }
        if command.eq_ignore_ascii_case("p") {
            return Resolution::Page(Page::Previous);
        }
    }

    match parse_index(command, len) {
        Ok(index) => Resolution::Select(index),
        Err(rejection) => Resolution::Invalid(rejection),
    }
}

/// Show the candidates and loop until the user picks one
///
/// `candidates` must not be empty; an empty search ends the session before
/// this is reached.
pub fn select_candidate<'a, R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    candidates: &'a [Candidate],
) -> Result<&'a Candidate> {
    let mut pager = Pager::new(candidates);

    for line in pager.header() {
        terminal.say(line)?;
    }
    for line in pager.render() {
        terminal.say(&line)?;
    }

    loop {
        let answer = terminal.prompt(GAME_PROMPT)?;

        match resolve(&answer, candidates.len(), pager.is_paged()) {
            Resolution::Page(page) => {
                match page {
                    Page::Next => pager.next_page(),
                    Page::Previous => pager.previous_page(),
                }
                debug!(offset = pager.offset(), "paged");
                for line in pager.render() {
                    terminal.say(&line)?;
                }
            }
            Resolution::Select(index) => return Ok(&candidates[index]),
            Resolution::Invalid(rejection) => terminal.say(rejection.message())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IfdbError;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn candidates(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate {
                tuid: format!("tuid{}", i),
                title: format!("Game {}", i),
                devsys: "TADS 3".to_string(),
                star_rating: 3.0,
                num_ratings: 1,
            })
            .collect()
    }

    fn run(input: &str, list: &[Candidate]) -> (Result<String>, String) {
        let mut terminal = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = select_candidate(&mut terminal, list).map(|c| c.tuid.clone());
        let output = String::from_utf8(terminal.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_resolve_page_commands_case_insensitive() {
        assert_eq!(resolve("N", 15, true), Resolution::Page(Page::Next));
        assert_eq!(resolve(" p ", 15, true), Resolution::Page(Page::Previous));
    }

    #[test]
    fn test_resolve_page_commands_disabled_for_short_lists() {
        assert_eq!(
            resolve("n", 9, false),
            Resolution::Invalid(Rejection::NotANumber)
        );
        assert_eq!(
            resolve("P", 3, false),
            Resolution::Invalid(Rejection::NotANumber)
        );
    }

    #[test]
    fn test_resolve_range() {
        assert_eq!(resolve("0", 3, false), Resolution::Select(0));
        assert_eq!(resolve("2", 3, false), Resolution::Select(2));
        assert_eq!(
            resolve("3", 3, false),
            Resolution::Invalid(Rejection::OutOfRange)
        );
        assert_eq!(
            resolve("-1", 3, false),
            Resolution::Invalid(Rejection::OutOfRange)
        );
        assert_eq!(
            resolve("1.5", 3, false),
            Resolution::Invalid(Rejection::NotANumber)
        );
        assert_eq!(resolve("", 3, false), Resolution::Invalid(Rejection::NotANumber));
    }

    #[test]
    fn test_short_list_selection() {
        let list = candidates(3);
        let (result, output) = run("n\n7\n1\n", &list);
        assert_eq!(result.unwrap(), "tuid1");
        assert!(output.starts_with("Search results:\n(0): Game 0"));
        assert!(output.contains("Please enter the number of a game."));
        assert!(output.contains("Please enter a number within an appropriate range."));
        assert!(!output.contains("(Use N and P to page)"));
    }

    #[test]
    fn test_paging_then_absolute_selection() {
        let list = candidates(15);
        let (result, output) = run("n\np\nn\n12\n", &list);
        assert_eq!(result.unwrap(), "tuid12");
        assert!(output.contains("(Use N and P to page)"));
        assert_eq!(output.matches("(10): Game 10").count(), 2);
        assert_eq!(output.matches("(0): Game 0").count(), 2);
    }

    #[test]
    fn test_invalid_input_keeps_current_page() {
        let list = candidates(15);
        let (result, output) = run("n\nzz\n99\nn\n12\n", &list);
        assert_eq!(result.unwrap(), "tuid12");

        let after_first_page = output
            .split_once("(10): Game 10")
            .map(|(_, rest)| rest)
            .expect("second page rendered");
        assert!(!after_first_page.contains("(0): Game 0"));
        assert!(after_first_page.contains("Please enter the number of a game."));
        assert!(after_first_page.contains("Please enter a number within an appropriate range."));
        assert_eq!(output.matches("(10): Game 10").count(), 2);
        assert_eq!(output.matches("(14): Game 14").count(), 2);
    }

    #[test]
    fn test_invalid_input_then_next_continues_from_current_page() {
        let list = candidates(25);
        let (result, output) = run("n\nzz\n-3\nn\n22\n", &list);
        assert_eq!(result.unwrap(), "tuid22");
        assert_eq!(output.matches("(0): Game 0").count(), 1);
        assert_eq!(output.matches("(10): Game 10").count(), 1);
        assert_eq!(output.matches("(20): Game 20").count(), 1);
    }

    #[test]
    fn test_selection_outside_window_is_allowed() {
        let list = candidates(15);
        let (result, _) = run("14\n", &list);
        assert_eq!(result.unwrap(), "tuid14");
    }

    #[test]
    fn test_input_closed_while_selecting() {
        let list = candidates(2);
        let (result, _) = run("x\n", &list);
        assert!(matches!(result, Err(IfdbError::InputClosed)));
    }

    proptest! {
        #[test]
        fn prop_valid_index_returns_that_candidate(len in 1usize..40, seed in any::<usize>()) {
            let list = candidates(len);
            let index = seed % len;
            let (result, _) = run(&format!("{}\n", index), &list);
            prop_assert_eq!(result.unwrap(), format!("tuid{}", index));
        }

        #[test]
        fn prop_out_of_range_rejected(len in 1usize..40, extra in 0usize..1000) {
            let index = (len + extra).to_string();
            prop_assert_eq!(
                resolve(&index, len, paging_for(len)),
                Resolution::Invalid(Rejection::OutOfRange)
            );
        }
    }

    fn paging_for(len: usize) -> bool {
        crate::pager::paging_enabled(len)
    }
}
