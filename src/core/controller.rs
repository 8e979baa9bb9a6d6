use crate::core::form;
use crate::core::page::{self, ids};
use crate::core::render::{render_results, ResultsView};
use crate::core::view::ViewState;
use crate::domain::model::{PredictionOutcome, PredictionRequest, PredictionResponse};
use crate::domain::ports::{ConfigProvider, Page, PredictionService};
use crate::utils::error::{FormError, Result};

/// How one submit attempt ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent.
    Invalid(FormError),
    Estimated(ResultsView),
    /// The service answered with `success: false`.
    Rejected(String),
    /// The request or its response could not be completed.
    Unreachable(FormError),
}

impl SubmitOutcome {
    pub fn is_estimated(&self) -> bool {
        matches!(self, SubmitOutcome::Estimated(_))
    }
}

/// Drives the prediction form: reads the page, validates, calls the
/// prediction service and renders the outcome back into the page.
pub struct FormController<P: Page, S: PredictionService, C: ConfigProvider> {
    page: P,
    service: S,
    config: C,
    view: ViewState,
}

impl<P: Page, S: PredictionService, C: ConfigProvider> FormController<P, S, C> {
    /// Creates the controller and renders the initial page state.
    pub fn new(page: P, service: S, config: C) -> Self {
        let mut controller = Self {
            page,
            service,
            config,
            view: ViewState::initial(),
        };
        controller.load();
        controller
    }

    pub fn load(&mut self) {
        self.view = ViewState::initial();
        self.render();
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// Reads the page and checks required fields and the area range.
    /// An out-of-range area is displayed right away.
    pub fn validate(&mut self) -> Result<PredictionRequest> {
        let values = page::read_form(&self.page);
        let range = self.config.area_range();

        match form::validate(&values, range) {
            Err(err @ FormError::AreaOutOfRange { .. }) => {
                self.show_error(&range.message());
                Err(err)
            }
            other => other,
        }
    }

    pub fn build_payload(&self) -> Result<PredictionRequest> {
        form::build_payload(&page::read_form(&self.page))
    }

    /// First half of a submit: clears the error region, validates and, when
    /// the form is valid, switches to the loading state. The returned request
    /// is what must be sent.
    pub fn begin_submit(&mut self) -> Result<PredictionRequest> {
        self.view.clear_error();
        self.render();

        let request = match self.validate() {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!("Form validation failed: {}", err);
                let message = err.user_friendly_message(self.config.messages());
                self.show_error(&message);
                return Err(err);
            }
        };

        self.view.start_loading();
        self.render();
        tracing::debug!("Submitting prediction request: {:?}", request);
        Ok(request)
    }

    /// Second half of a submit: renders whatever came back. Each call
    /// overwrites the display, so the last completion wins.
    pub fn finish_submit(&mut self, response: Result<PredictionResponse>) -> SubmitOutcome {
        let outcome = response.and_then(PredictionResponse::into_outcome);

        match outcome {
            Ok(PredictionOutcome::Estimate {
                formatted_price,
                features,
            }) => {
                let results = render_results(&formatted_price, &features);
                tracing::info!("Prediction received: {}", formatted_price);
                self.view.show_results(results.clone());
                self.render();
                SubmitOutcome::Estimated(results)
            }
            Ok(PredictionOutcome::Rejected { error }) => {
                let message =
                    error.unwrap_or_else(|| self.config.messages().generic_failure.clone());
                tracing::warn!("Prediction rejected by service: {}", message);
                self.show_error(&message);
                SubmitOutcome::Rejected(message)
            }
            Err(err) => {
                tracing::error!("Prediction request failed: {}", err);
                let message = self.config.messages().connection_failed.clone();
                self.show_error(&message);
                SubmitOutcome::Unreachable(err)
            }
        }
    }

    /// Validate, send one request and render the outcome.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(err) => return SubmitOutcome::Invalid(err),
        };

        let response = self.service.predict(&request).await;
        self.finish_submit(response)
    }

    /// Submit for a host that filled the inputs programmatically: the area
    /// change handler runs first, and a rejected area ends the attempt with
    /// the range message still displayed.
    pub async fn submit_entered(&mut self) -> SubmitOutcome {
        let area = self.page.value(ids::AREA).unwrap_or_default();
        if !area.trim().is_empty() {
            if let Err(err) = self.area_changed() {
                tracing::warn!("Area {} rejected before submit", area);
                return SubmitOutcome::Invalid(err);
            }
        }
        self.submit().await
    }

    /// Form reset: default inputs, info panel back, results and error hidden.
    pub fn reset(&mut self) {
        self.page.reset_inputs();
        self.view.reset();
        self.render();
    }

    /// Change handler for the area input. Clears the field and shows the
    /// range message when the new value is a number outside the range, and
    /// returns that rejection.
    pub fn area_changed(&mut self) -> Result<()> {
        let raw = self.page.value(ids::AREA).unwrap_or_default();
        let range = self.config.area_range();

        if let Err(err) = form::check_live_area(&raw, range) {
            tracing::debug!("Area {} rejected on change", raw);
            self.show_error(&range.message());
            self.page.set_value(ids::AREA, "");
            return Err(err);
        }
        Ok(())
    }

    fn show_error(&mut self, message: &str) {
        self.view.show_error(message);
        self.render();
    }

    fn render(&mut self) {
        page::apply(&mut self.page, &self.view);
    }
}
