//! Pagination state exposed to the presentation layer.

use serde::Serialize;

use crate::models::Character;

// == Pagination State ==
/// Everything the page needs to render: current results plus pager flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationState {
    pub current_page: u32,
    /// Zero until a page has been loaded successfully
    pub total_pages: u32,
    pub search_term: String,
    pub is_loading: bool,
    /// Last fetch produced nothing usable, whether no match or network error
    pub is_not_found: bool,
    pub characters: Vec<Character>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            search_term: String::new(),
            is_loading: false,
            is_not_found: false,
            characters: Vec::new(),
        }
    }
}

impl PaginationState {
    pub fn can_go_previous(&self) -> bool {
        !self.is_not_found && self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_not_found && self.current_page < self.total_pages
    }

    /// Page count shown next to the pager. A not-found result is one empty page.
    pub fn displayed_total(&self) -> u32 {
        if self.is_not_found {
            1
        } else {
            self.total_pages.max(1)
        }
    }

    /// Clamps a requested page into `[1, total_pages]`.
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }

    pub fn find_character(&self, id: u64) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub(crate) fn show(&mut self, characters: Vec<Character>, total_pages: u32) {
        self.characters = characters;
        self.total_pages = total_pages;
        self.is_not_found = false;
    }

    /// Total pages keep their previous value; the pager is disabled anyway.
    pub(crate) fn show_not_found(&mut self) {
        self.characters.clear();
        self.is_not_found = true;
    }
}
