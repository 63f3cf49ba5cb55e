// src/gui/actions/mutate.rs
//
// Creates and deletes. Every submit validates locally first; a rejected
// draft never reaches the network.

use crate::gui::{app::App, tasks::TaskOutcome};

pub fn submit_model_form(app: &mut App) {
    match app.model_form.submit() {
        Ok(new) => {
            logf!("Create: model name={:?} provider={}", new.name, new.provider_id);
            app.tasks.spawn(move |api| async move { TaskOutcome::ModelCreated(api.create_model(&new).await) });
        }
        Err(e) => logd!("Create: model rejected: {e}"),
    }
}

/// Inline provider creation from inside the model form.
pub fn create_inline_provider(app: &mut App) {
    match app.model_form.begin_provider() {
        Ok(new) => {
            logf!("Create: provider name={:?}", new.name);
            app.tasks.spawn(move |api| async move { TaskOutcome::ProviderCreated(api.create_provider(&new).await) });
        }
        Err(e) => app.model_form.set_error(e.to_string()),
    }
}

pub fn submit_benchmark_form(app: &mut App) {
    match app.benchmark_form.submit() {
        Ok(new) => {
            logf!("Create: benchmark {:?} model={}", new.benchmark_name, new.model_id);
            app.tasks.spawn(move |api| async move { TaskOutcome::BenchmarkCreated(api.create_benchmark(&new).await) });
        }
        Err(e) => logd!("Create: benchmark rejected: {e}"),
    }
}

pub fn submit_pricing_form(app: &mut App) {
    match app.pricing_form.submit() {
        Ok(new) => {
            logf!("Create: pricing {} model={}", new.price_type, new.model_id);
            app.tasks.spawn(move |api| async move { TaskOutcome::PricingCreated(api.create_pricing(&new).await) });
        }
        Err(e) => logd!("Create: pricing rejected: {e}"),
    }
}

pub fn submit_comparison_form(app: &mut App) {
    match app.comparison_form.submit() {
        Ok(new) => {
            logf!("Create: comparison {:?} models={:?}", new.name, new.model_ids);
            app.tasks.spawn(move |api| async move { TaskOutcome::ComparisonCreated(api.create_comparison(&new).await) });
        }
        Err(e) => logd!("Create: comparison rejected: {e}"),
    }
}

/// Runs only after the user said yes.
pub fn confirm_delete_model(app: &mut App) {
    let Some(id) = app.models.delete.confirm() else { return };
    logf!("Delete: model id={id}");
    app.tasks.spawn(move |api| async move { TaskOutcome::ModelDeleted(id, api.delete_model(id).await) });
}

pub fn confirm_delete_comparison(app: &mut App) {
    let Some(id) = app.comparisons.delete.confirm() else { return };
    logf!("Delete: comparison id={id}");
    app.tasks.spawn(move |api| async move { TaskOutcome::ComparisonDeleted(id, api.delete_comparison(id).await) });
}
