// src/gui/tasks.rs
//
// Bridge between the UI thread and the network. Requests run on a tokio
// runtime owned by the app; each one posts exactly one TaskOutcome back over
// a channel and asks egui for a repaint. The UI thread drains the channel at
// the top of every frame, so views are only ever touched from there.

use std::future::Future;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui;
use tokio::runtime::{Builder, Runtime};

use crate::aggregate::ComparisonDetail;
use crate::client::ApiClient;
use crate::error::TransportError;
use crate::types::*;
use crate::views::Ticket;

type Res<T> = Result<T, TransportError>;

/// One finished request, tagged with whatever the view needs to file it.
#[derive(Debug)]
pub enum TaskOutcome {
    Models(Ticket, Res<Vec<Model>>),
    Providers(Ticket, Res<Vec<Provider>>),
    ModelDeleted(Id, Res<()>),

    /// Model list for the form pickers.
    Choices(Res<Vec<Model>>),
    ModelCreated(Res<Model>),
    ProviderCreated(Res<Provider>),
    BenchmarkCreated(Res<Benchmark>),
    PricingCreated(Res<Pricing>),
    ComparisonCreated(Res<ComparisonTable>),

    Comparisons(Ticket, Res<Vec<ComparisonTable>>),
    Detail(Ticket, Res<ComparisonDetail>),
    ComparisonDeleted(Id, Res<()>),

    Scraped(Res<ScrapeResult>),
    WebSources(Ticket, Res<Vec<WebSource>>),
    WebSourceAdded(Res<WebSource>),
    WebSourceDeleted(Id, Res<()>),
}

impl TaskOutcome {
    pub fn name(&self) -> &'static str {
        match self {
            TaskOutcome::Models(..) => "models",
            TaskOutcome::Providers(..) => "providers",
            TaskOutcome::ModelDeleted(..) => "model deleted",
            TaskOutcome::Choices(..) => "choices",
            TaskOutcome::ModelCreated(..) => "model created",
            TaskOutcome::ProviderCreated(..) => "provider created",
            TaskOutcome::BenchmarkCreated(..) => "benchmark created",
            TaskOutcome::PricingCreated(..) => "pricing created",
            TaskOutcome::ComparisonCreated(..) => "comparison created",
            TaskOutcome::Comparisons(..) => "comparisons",
            TaskOutcome::Detail(..) => "comparison detail",
            TaskOutcome::ComparisonDeleted(..) => "comparison deleted",
            TaskOutcome::Scraped(..) => "scrape",
            TaskOutcome::WebSources(..) => "web sources",
            TaskOutcome::WebSourceAdded(..) => "web source added",
            TaskOutcome::WebSourceDeleted(..) => "web source deleted",
        }
    }
}

pub struct Tasks {
    rt: Runtime,
    api: ApiClient,
    tx: Sender<TaskOutcome>,
    rx: Receiver<TaskOutcome>,
    ctx: egui::Context,
}

impl Tasks {
    pub fn new(ctx: egui::Context, api: ApiClient) -> io::Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("llm-catalog-net")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self { rt, api, tx, rx, ctx })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Run `job` on the runtime with its own client handle. Nothing is
    /// cancelled: if the result is no longer wanted, the view drops it.
    pub fn spawn<F, Fut>(&self, job: F)
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = TaskOutcome> + Send + 'static,
    {
        let fut = job(self.api.clone());
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.rt.spawn(async move {
            let outcome = fut.await;
            logd!("Task: done ({})", outcome.name());
            // Receiver only goes away with the app itself.
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    /// Everything that finished since the last frame.
    pub fn drain(&self) -> Vec<TaskOutcome> {
        self.rx.try_iter().collect()
    }
}
