// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::models::PAGE,
    &pages::comparisons::PAGE,
    &pages::scraper::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
