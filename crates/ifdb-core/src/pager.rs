//! Paged view over search results
//!
//! Lists of at least [`PAGE_SIZE`] candidates are shown one window at a time;
//! shorter lists are shown in full and never page.

use std::ops::Range;

use crate::types::Candidate;

/// Number of candidates shown per page
pub const PAGE_SIZE: usize = 10;

/// Whether a list of `len` candidates accepts paging commands
pub fn paging_enabled(len: usize) -> bool {
    len >= PAGE_SIZE
}

/// Offset of the next page, clamped to the start of the last page
pub fn page_forward(offset: usize, len: usize) -> usize {
    let last_start = len.saturating_sub(1) / PAGE_SIZE * PAGE_SIZE;
    (offset + PAGE_SIZE).min(last_start)
}

/// Offset of the previous page, clamped to zero
pub fn page_backward(offset: usize) -> usize {
    offset.saturating_sub(PAGE_SIZE)
}

/// Absolute indices shown for a window starting at `offset`
pub fn window(offset: usize, len: usize) -> Range<usize> {
    let start = offset.min(len);
    start..(start + PAGE_SIZE).min(len)
}

/// One display line for a candidate at absolute index `index`
pub fn format_candidate(index: usize, candidate: &Candidate) -> String {
    format!(
        "({}): {} ({}, {} stars, {} ratings)",
        index, candidate.title, candidate.devsys, candidate.star_rating, candidate.num_ratings
    )
}

/// Render the window starting at `offset`
pub fn render(candidates: &[Candidate], offset: usize) -> Vec<String> {
    window(offset, candidates.len())
        .map(|i| format_candidate(i, &candidates[i]))
        .collect()
}

/// Cursor over one candidate list
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    candidates: &'a [Candidate],
    offset: usize,
}

impl<'a> Pager<'a> {
    pub fn new(candidates: &'a [Candidate]) -> Self {
        Self {
            candidates,
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_paged(&self) -> bool {
        paging_enabled(self.candidates.len())
    }

    /// Heading printed once above the first page
    pub fn header(&self) -> &'static [&'static str] {
        if self.is_paged() {
            &[
                "Too many options, only showing first 10 results:",
                "(Use N and P to page)",
            ]
        } else {
            &["Search results:"]
        }
    }

    pub fn window(&self) -> Range<usize> {
        if self.is_paged() {
            window(self.offset, self.candidates.len())
        } else {
            0..self.candidates.len()
        }
    }

    /// Lines of the current window; unpaged lists render in full
    pub fn render(&self) -> Vec<String> {
        self.window()
            .map(|i| format_candidate(i, &self.candidates[i]))
            .collect()
    }

    pub fn next_page(&mut self) {
        self.offset = page_forward(self.offset, self.candidates.len());
    }

    pub fn previous_page(&mut self) {
        self.offset = page_backward(self.offset);
    }
}
