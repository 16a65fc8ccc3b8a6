//! Picks one download among a game's playable files

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::resolver::parse_index;
use crate::terminal::Terminal;
use crate::types::DownloadLink;

const LINK_PROMPT: &str = "Which one do you wish to download? ";

/// Outcome of the download chooser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkChoice<'a> {
    /// Nothing to download; no prompt was shown
    NoLinks,
    /// The only link was offered and refused
    Declined,
    Chosen(&'a DownloadLink),
}

/// One chooser line for a link
pub fn format_link(index: usize, link: &DownloadLink) -> String {
    format!("({}): {} ({})", index, link.title, link.format)
}

/// Resolve `links` to a single download
///
/// With one link the user confirms or declines it. With several, every link
/// is listed (never paged) and only an index in `[0, len)` is accepted.
pub fn choose_link<'a, R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    links: &'a [DownloadLink],
) -> Result<LinkChoice<'a>> {
    match links {
        [] => {
            terminal.say("No download links found... :(")?;
            Ok(LinkChoice::NoLinks)
        }
        [link] => {
            terminal.say(&format!(
                "One download link found. ({}, {})",
                link.title, link.format
            ))?;
            if terminal.confirm("Download? (y/n) ")? {
                Ok(LinkChoice::Chosen(link))
            } else {
                Ok(LinkChoice::Declined)
            }
        }
        _ => {
            terminal.say("There are multiple downloads available:")?;
            for (i, link) in links.iter().enumerate() {
                terminal.say(&format_link(i, link))?;
            }

            loop {
                let answer = terminal.prompt(LINK_PROMPT)?;
                match parse_index(&answer, links.len()) {
                    Ok(index) => return Ok(LinkChoice::Chosen(&links[index])),
                    Err(_) => {
                        terminal.say("Please enter a number within an appropriate range.")?
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn links(n: usize) -> Vec<DownloadLink> {
        (0..n)
            .map(|i| DownloadLink {
                url: format!("https://example.org/game{}.z5", i),
                title: format!("game{}.z5", i),
                desc: String::new(),
                format: "Z-Machine 5".to_string(),
                is_game: true,
            })
            .collect()
    }

    fn run(input: &str, links: &[DownloadLink]) -> (Option<String>, bool, String) {
        let mut terminal = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let (chosen, declined) = match choose_link(&mut terminal, links).unwrap() {
            LinkChoice::NoLinks => (None, false),
            LinkChoice::Declined => (None, true),
            LinkChoice::Chosen(link) => (Some(link.title.clone()), false),
        };
        let output = String::from_utf8(terminal.into_output()).unwrap();
        (chosen, declined, output)
    }

    #[test]
    fn test_no_links_issues_no_prompt() {
        let (chosen, declined, output) = run("", &[]);
        assert_eq!(chosen, None);
        assert!(!declined);
        assert_eq!(output, "No download links found... :(\n");
    }

    #[test]
    fn test_single_link_confirmed() {
        let (chosen, _, output) = run("y\n", &links(1));
        assert_eq!(chosen.as_deref(), Some("game0.z5"));
        assert!(output.contains("One download link found. (game0.z5, Z-Machine 5)"));
    }

    #[test]
    fn test_single_link_declined() {
        let (chosen, declined, _) = run("no\n", &links(1));
        assert_eq!(chosen, None);
        assert!(declined);
    }

    #[test]
    fn test_multiple_links_listed_in_full() {
        let (chosen, _, output) = run("11\n", &links(12));
        assert_eq!(chosen.as_deref(), Some("game11.z5"));
        assert!(output.contains("(0): game0.z5 (Z-Machine 5)"));
        assert!(output.contains("(11): game11.z5 (Z-Machine 5)"));
    }

    #[test]
    fn test_multiple_links_reprompt_until_in_range() {
        let (chosen, _, output) = run("n\n2\n-1\nfirst\n1\n", &links(2));
        assert_eq!(chosen.as_deref(), Some("game1.z5"));
        assert_eq!(
            output
                .matches("Please enter a number within an appropriate range.")
                .count(),
            4
        );
        assert_eq!(output.matches(LINK_PROMPT).count(), 5);
    }
}
