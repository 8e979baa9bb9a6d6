use crate::config::ERROR_PREFIX;
use crate::core::render::ResultsView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Results,
    Error,
}

/// Explicit display state of the form page.
///
/// Results content survives being hidden, the same way the page keeps the
/// last rendered text in a hidden container.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub loading_visible: bool,
    pub info_visible: bool,
    pub results_visible: bool,
    pub results: Option<ResultsView>,
    pub error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}

impl ViewState {
    /// Page load: info panel shown, nothing else.
    pub fn initial() -> Self {
        Self {
            loading_visible: false,
            info_visible: true,
            results_visible: false,
            results: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading_visible {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.results_visible {
            Phase::Results
        } else {
            Phase::Idle
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn show_error(&mut self, message: &str) {
        self.error = Some(format!("{}{}", ERROR_PREFIX, message));
        self.loading_visible = false;
    }

    pub fn start_loading(&mut self) {
        self.loading_visible = true;
        self.results_visible = false;
    }

    pub fn show_results(&mut self, results: ResultsView) {
        self.loading_visible = false;
        self.info_visible = false;
        self.results = Some(results);
        self.results_visible = true;
    }

    pub fn reset(&mut self) {
        self.results_visible = false;
        self.info_visible = true;
        self.error = None;
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
