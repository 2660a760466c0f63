use crate::application::form_state::FormState;
use crate::application::premium_panel::PremiumPanel;
use crate::application::render::chart::{ChartSlot, PayoffChart};
use crate::application::render::result_view::ResultView;
use crate::domain::entities::collar_request::CollarRequest;
use crate::domain::entities::collar_result::CollarResult;
use crate::domain::error::DomainError;
use crate::domain::ports::chart_canvas::ChartCanvas;
use crate::domain::ports::credential_store::CredentialStore;
use crate::domain::ports::pricing_service::PricingService;
use crate::domain::values::form_field::FormField;
use std::sync::Arc;

/// One dashboard session: form, collar result, chart and premium panel.
///
/// Operations catch their own failures and keep a display string in
/// [`Dashboard::error`] (or the premium panel's error). Busy flags track the
/// in-flight operation of each kind; nothing fences a stale response.
pub struct Dashboard<C: ChartCanvas> {
    service: Arc<dyn PricingService>,
    form: FormState,
    result: Option<CollarResult>,
    error: Option<String>,
    loading: bool,
    expirations_loading: bool,
    premium: PremiumPanel,
    chart: ChartSlot<C>,
}

impl<C: ChartCanvas> Dashboard<C> {
    pub fn new(
        service: Arc<dyn PricingService>,
        store: Arc<dyn CredentialStore>,
        canvas: C,
    ) -> Self {
        Self::with_form(service, store, canvas, CollarRequest::default())
    }

    pub fn with_form(
        service: Arc<dyn PricingService>,
        store: Arc<dyn CredentialStore>,
        canvas: C,
        request: CollarRequest,
    ) -> Self {
        Self {
            service,
            form: FormState::new(request),
            result: None,
            error: None,
            loading: false,
            expirations_loading: false,
            premium: PremiumPanel::new(store),
            chart: ChartSlot::new(canvas),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn result(&self) -> Option<&CollarResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loading_expirations(&self) -> bool {
        self.expirations_loading
    }

    pub fn premium(&self) -> &PremiumPanel {
        &self.premium
    }

    pub fn chart(&self) -> &ChartSlot<C> {
        &self.chart
    }

    pub fn result_view(&self) -> Option<ResultView> {
        self.result.as_ref().map(ResultView::from_result)
    }

    pub fn payoff_chart(&self) -> Option<PayoffChart> {
        self.result
            .as_ref()
            .map(|r| PayoffChart::from_result(r, &self.form.request().ticker))
    }

    /// Ticker edits reload expirations; every other field is a plain update.
    pub async fn edit(&mut self, field: FormField, raw: &str) -> Result<(), DomainError> {
        match field {
            FormField::Ticker => {
                self.change_ticker(raw).await;
                Ok(())
            }
            _ => self.form.edit(field, raw),
        }
    }

    pub async fn change_ticker(&mut self, ticker: &str) {
        self.begin_ticker_change(ticker);
        self.load_expirations().await;
    }

    /// Synchronous half of a ticker change: stores the ticker and drops every
    /// result and error derived from the previous one.
    pub fn begin_ticker_change(&mut self, ticker: &str) {
        self.form.edit(FormField::Ticker, ticker).ok();
        self.discard_results();
        self.error = None;
    }

    pub async fn load_expirations(&mut self) {
        self.expirations_loading = true;
        let ticker = self.form.request().ticker.clone();
        match self.service.get_expirations(&ticker).await {
            Ok(list) => {
                log::debug!("{} expirations for {ticker}", list.len());
                self.form.apply_expirations(list);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.expirations_loading = false;
    }

    /// Post the current form. Any previous result is gone before the request
    /// goes out, so a failure never leaves stale tiles behind.
    pub async fn calculate(&mut self) {
        self.loading = true;
        self.error = None;
        self.discard_results();

        let request = self.form.request().clone();
        match self.service.calculate_collar(&request).await {
            Ok(res) => {
                self.chart.show(&PayoffChart::from_result(&res, &request.ticker));
                self.result = Some(res);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    pub fn set_credential(&mut self, credential: impl Into<String>) {
        self.premium.set_credential(credential);
    }

    pub async fn load_premium(&mut self) {
        self.premium
            .load(self.service.as_ref(), self.form.request())
            .await;
    }

    fn discard_results(&mut self) {
        self.result = None;
        self.chart.clear();
        self.premium.reset();
    }
}
