//! Transient view state
//!
//! Everything here lives for one window session and is discarded on exit.
//! All operations are total: navigation wraps with modular arithmetic and
//! an empty project list leaves the carousel parked at index 0.

use crate::content::{self, Project};
use crate::types::{Language, Theme, View};
use tracing::debug;

/// Step forward through a list of `len` items, wrapping to the start.
/// An empty list parks the index at 0.
pub fn cycle_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + 1) % len
}

/// Step backward through a list of `len` items, wrapping to the end.
pub fn cycle_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + len - 1) % len
}

/// Snapshot handed to the assistant when a question is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiRequest {
    pub question: String,
    pub theme: Theme,
    pub lang: Language,
}

/// Display text for a finished question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    /// The request failed and `text` is the localized error
    pub is_error: bool,
}

#[derive(Debug, Clone)]
pub struct PortfolioState {
    pub view: View,
    pub theme: Theme,
    pub lang: Language,
    pub active_project: usize,
    pub active_skill: Option<&'static str>,
    /// Index into the themed project list of the project shown in the modal
    pub modal_project: Option<usize>,
    pub image_index: usize,
    pub question: String,
    pub answer: String,
    pub answer_is_error: bool,
    pub is_loading: bool,
    /// Themed project list backing the carousel and modal
    project_source: fn(Theme) -> Vec<&'static Project>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self {
            view: View::Selection,
            theme: Theme::Coffee,
            lang: Language::Pt,
            active_project: 0,
            active_skill: None,
            modal_project: None,
            image_index: 0,
            question: String::new(),
            answer: String::new(),
            answer_is_error: false,
            is_loading: false,
            project_source: content::projects_for,
        }
    }
}

impl PortfolioState {
    pub fn start_portfolio(&mut self, theme: Theme) {
        debug!(?theme, "Character selected");
        self.theme = theme;
        self.view = View::Portfolio;
        self.active_project = 0;
        self.active_skill = None;
    }

    pub fn back_to_selection(&mut self) {
        self.view = View::Selection;
        self.modal_project = None;
        self.active_skill = None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.active_skill = None;
        self.active_project = 0;
        debug!(theme = ?self.theme, "Theme toggled");
    }

    pub fn toggle_lang(&mut self) {
        self.lang = self.lang.toggled();
    }

    // ------------------------------------------------------------------------
    // Carousel
    // ------------------------------------------------------------------------

    pub fn projects(&self) -> Vec<&'static Project> {
        (self.project_source)(self.theme)
    }

    pub fn project_count(&self) -> usize {
        self.projects().len()
    }

    pub fn active_project(&self) -> Option<&'static Project> {
        self.projects().get(self.active_project).copied()
    }

    pub fn next_project(&mut self) {
        self.active_project = cycle_next(self.active_project, self.project_count());
    }

    pub fn prev_project(&mut self) {
        self.active_project = cycle_prev(self.active_project, self.project_count());
    }

    /// Jump straight to a carousel slot (dot indicators). Out of range is ignored.
    pub fn select_project(&mut self, index: usize) {
        if index < self.project_count() {
            self.active_project = index;
        }
    }

    // ------------------------------------------------------------------------
    // Skill popover
    // ------------------------------------------------------------------------

    /// Clicking the open skill closes it; clicking another switches to it.
    pub fn toggle_skill(&mut self, name: &'static str) {
        self.active_skill = match self.active_skill {
            Some(open) if open == name => None,
            _ => Some(name),
        };
    }

    pub fn close_skill(&mut self) {
        self.active_skill = None;
    }

    pub fn is_skill_open(&self, name: &str) -> bool {
        self.active_skill == Some(name)
    }

    // ------------------------------------------------------------------------
    // Project modal
    // ------------------------------------------------------------------------

    pub fn open_project_modal(&mut self) {
        if self.active_project().is_some() {
            self.modal_project = Some(self.active_project);
            self.image_index = 0;
        }
    }

    pub fn close_modal(&mut self) {
        self.modal_project = None;
    }

    pub fn modal_project(&self) -> Option<&'static Project> {
        self.modal_project
            .and_then(|idx| self.projects().get(idx).copied())
    }

    pub fn next_image(&mut self) {
        if let Some(len) = self.modal_image_count() {
            self.image_index = cycle_next(self.image_index, len);
        }
    }

    pub fn prev_image(&mut self) {
        if let Some(len) = self.modal_image_count() {
            self.image_index = cycle_prev(self.image_index, len);
        }
    }

    fn modal_image_count(&self) -> Option<usize> {
        self.modal_project()
            .map(|p| p.images.len())
            .filter(|&len| len > 0)
    }

    /// Escape closes both the modal and any open skill popover
    pub fn escape(&mut self) {
        self.modal_project = None;
        self.active_skill = None;
    }

    // ------------------------------------------------------------------------
    // Assistant
    // ------------------------------------------------------------------------

    /// Mark a question as in flight. Returns `None` for blank input or while
    /// another question is still pending.
    pub fn begin_question(&mut self) -> Option<AiRequest> {
        if self.is_loading || self.question.trim().is_empty() {
            return None;
        }
        self.is_loading = true;
        Some(AiRequest {
            question: self.question.clone(),
            theme: self.theme,
            lang: self.lang,
        })
    }

    pub fn finish_question(&mut self, reply: AssistantReply) {
        self.answer = reply.text;
        self.answer_is_error = reply.is_error;
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio(theme: Theme) -> PortfolioState {
        let mut state = PortfolioState::default();
        state.start_portfolio(theme);
        state
    }

    #[test]
    fn test_next_wraps_forward() {
        let mut state = portfolio(Theme::Coffee);
        let len = state.project_count();
        assert!(len > 0);
        state.active_project = len - 1;
        state.next_project();
        assert_eq!(state.active_project, 0);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let mut state = portfolio(Theme::Hardware);
        let len = state.project_count();
        state.prev_project();
        assert_eq!(state.active_project, len - 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for theme in [Theme::Coffee, Theme::Hardware] {
            let mut state = portfolio(theme);
            let len = state.project_count();
            for _ in 0..len {
                state.next_project();
            }
            assert_eq!(state.active_project, 0);
            for _ in 0..len {
                state.prev_project();
            }
            assert_eq!(state.active_project, 0);
        }
    }

    #[test]
    fn test_three_item_wrap() {
        // P1, P2, P3
        assert_eq!(cycle_next(2, 3), 0);
        assert_eq!(cycle_prev(0, 3), 2);
        assert_eq!(cycle_next(0, 3), 1);
        assert_eq!(cycle_prev(2, 3), 1);
    }

    #[test]
    fn test_empty_list_parks_at_zero() {
        assert_eq!(cycle_next(0, 0), 0);
        assert_eq!(cycle_prev(0, 0), 0);
        assert_eq!(cycle_next(5, 0), 0);
    }

    #[test]
    fn test_empty_theme_leaves_state_unchanged() {
        let mut state = PortfolioState {
            project_source: |_| Vec::new(),
            ..portfolio(Theme::Hardware)
        };
        assert_eq!(state.project_count(), 0);
        assert!(state.active_project().is_none());

        state.next_project();
        state.prev_project();
        state.select_project(0);
        assert_eq!(state.active_project, 0);

        state.open_project_modal();
        assert!(state.modal_project.is_none());
        assert!(state.modal_project().is_none());
        state.next_image();
        assert_eq!(state.image_index, 0);

        state.toggle_theme();
        assert_eq!(state.active_project, 0);
        assert!(state.active_project().is_none());
    }

    #[test]
    fn test_single_item_stays_put() {
        assert_eq!(cycle_next(0, 1), 0);
        assert_eq!(cycle_prev(0, 1), 0);
    }

    #[test]
    fn test_stale_index_is_brought_back_in_range() {
        assert!(cycle_next(7, 3) < 3);
        assert!(cycle_prev(7, 3) < 3);
    }

    #[test]
    fn test_toggle_theme_resets_selection() {
        let mut state = portfolio(Theme::Coffee);
        state.next_project();
        state.toggle_skill("Java 17+");
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Hardware);
        assert_eq!(state.active_project, 0);
        assert!(state.active_skill.is_none());
        assert!(state.active_project().is_some_and(|p| p.theme == Theme::Hardware));
    }

    #[test]
    fn test_toggle_lang_round_trips() {
        let mut state = PortfolioState::default();
        let start = state.lang;
        state.toggle_lang();
        assert_ne!(state.lang, start);
        state.toggle_lang();
        assert_eq!(state.lang, start);
    }

    #[test]
    fn test_skill_toggle_same_key_closes() {
        let mut state = portfolio(Theme::Coffee);
        state.toggle_skill("Groovy");
        assert!(state.is_skill_open("Groovy"));
        state.toggle_skill("Groovy");
        assert!(state.active_skill.is_none());
    }

    #[test]
    fn test_skill_toggle_other_key_switches() {
        let mut state = portfolio(Theme::Coffee);
        state.toggle_skill("Groovy");
        state.toggle_skill("SQL");
        assert!(state.is_skill_open("SQL"));
        assert!(!state.is_skill_open("Groovy"));
    }

    #[test]
    fn test_select_project_ignores_out_of_range() {
        let mut state = portfolio(Theme::Coffee);
        state.select_project(1);
        assert_eq!(state.active_project, 1);
        state.select_project(99);
        assert_eq!(state.active_project, 1);
    }

    #[test]
    fn test_modal_gallery_wraps() {
        let mut state = portfolio(Theme::Hardware);
        state.select_project(1);
        state.open_project_modal();
        let project = state.modal_project().unwrap();
        assert_eq!(project.title, "MIPS 32-bit Processor");
        let len = project.images.len();
        state.prev_image();
        assert_eq!(state.image_index, len - 1);
        state.next_image();
        assert_eq!(state.image_index, 0);
    }

    #[test]
    fn test_open_modal_resets_image_index() {
        let mut state = portfolio(Theme::Coffee);
        state.open_project_modal();
        state.next_image();
        state.close_modal();
        state.open_project_modal();
        assert_eq!(state.image_index, 0);
    }

    #[test]
    fn test_image_nav_without_modal_is_noop() {
        let mut state = portfolio(Theme::Coffee);
        state.next_image();
        state.prev_image();
        assert_eq!(state.image_index, 0);
    }

    #[test]
    fn test_escape_closes_modal_and_skill() {
        let mut state = portfolio(Theme::Coffee);
        state.open_project_modal();
        state.toggle_skill("Docker");
        state.escape();
        assert!(state.modal_project.is_none());
        assert!(state.active_skill.is_none());
    }

    #[test]
    fn test_begin_question_rejects_blank() {
        let mut state = portfolio(Theme::Coffee);
        state.question = "   ".to_string();
        assert!(state.begin_question().is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_begin_question_rejects_while_loading() {
        let mut state = portfolio(Theme::Hardware);
        state.question = "FPGA?".to_string();
        let request = state.begin_question().unwrap();
        assert_eq!(request.theme, Theme::Hardware);
        assert!(state.is_loading);
        assert!(state.begin_question().is_none());

        state.finish_question(AssistantReply {
            text: "answer".to_string(),
            is_error: false,
        });
        assert!(!state.is_loading);
        assert_eq!(state.answer, "answer");
        assert!(state.begin_question().is_some());
    }

    #[test]
    fn test_error_flag_survives_language_toggle() {
        let mut state = portfolio(Theme::Coffee);
        state.question = "Kafka?".to_string();
        state.begin_question();
        state.finish_question(AssistantReply {
            text: "Erro ao conectar com a IA.".to_string(),
            is_error: true,
        });
        state.toggle_lang();
        assert!(state.answer_is_error);

        state.begin_question();
        state.finish_question(AssistantReply {
            text: "Yes.".to_string(),
            is_error: false,
        });
        assert!(!state.answer_is_error);
    }
}
