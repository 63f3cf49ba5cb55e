// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    client::ApiClient,
    config::{options::PageKind, state::AppState},
    forms::{BenchmarkForm, ComparisonForm, ModelForm, PricingForm},
    types::Model,
    views::{ComparisonsView, ModelsView, ScraperView},
};

use super::{actions, components, pages::Page, router, tasks::Tasks};

type BoxError = Box<dyn Error + Send + Sync>;

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "LLM Catalog",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc.egui_ctx.clone(), state)?))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub tasks: Tasks,

    /// One-line status under the page.
    pub status: String,

    // per-page view state
    pub models: ModelsView,
    pub comparisons: ComparisonsView,
    pub scraper: ScraperView,

    // create forms (drawn as windows over any page)
    pub model_form: ModelForm,
    pub benchmark_form: BenchmarkForm,
    pub pricing_form: PricingForm,
    pub comparison_form: ComparisonForm,

    /// Model picker contents for the forms; fetched when a form opens.
    pub choices: Vec<Model>,
}

impl App {
    pub fn new(ctx: egui::Context, state: AppState) -> Result<Self, BoxError> {
        let api = ApiClient::from_options(&state.options.api)?;
        logf!("Init: backend={}", api.root());
        let tasks = Tasks::new(ctx, api)?;

        let mut app = Self {
            state,
            tasks,
            status: s!("Idle"),
            models: ModelsView::new(),
            comparisons: ComparisonsView::new(),
            scraper: ScraperView::new(),
            model_form: ModelForm::default(),
            benchmark_form: BenchmarkForm::default(),
            pricing_form: PricingForm::default(),
            comparison_form: ComparisonForm::default(),
            choices: Vec::new(),
        };

        let page = app.current_page();
        logf!("Init: default page={:?}", page.kind());
        page.on_enter(&mut app);
        Ok(app)
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Leave the current page and enter page `idx`.
    pub fn switch_to(&mut self, idx: usize) {
        let prev = self.current_page();
        prev.on_leave(self);
        self.state.gui.current_page_index = idx;
        let next = self.current_page();
        logf!("UI: Tab switch {:?} → {:?}", prev.kind(), next.kind());
        next.on_enter(self);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for outcome in self.tasks.drain() {
            actions::apply(self, outcome);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).small());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });

        components::forms::draw(ctx, self);
        components::confirm::draw(ctx, self);
    }
}
