// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Pages and components decide *when*; these functions decide *what*:
// they start requests through app.tasks and file the outcomes into views.

mod load;     // src/gui/actions/load.rs
mod mutate;   // src/gui/actions/mutate.rs
mod outcome;  // src/gui/actions/outcome.rs
mod scrape;   // src/gui/actions/scrape.rs

pub use load::{load_choices, load_comparisons, load_models, select_comparison};
pub use mutate::{
    confirm_delete_comparison, confirm_delete_model, create_inline_provider,
    submit_benchmark_form, submit_comparison_form, submit_model_form, submit_pricing_form,
};
pub use outcome::apply;
pub use scrape::{add_source, confirm_delete_source, load_sources, scrape};
