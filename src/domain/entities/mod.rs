//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`UrlRecord`] - A shortened URL mapping, the store's record of truth
//! - [`RedirectTarget`] - The lightweight code→URL pair a cache hit yields
//! - [`ClickEvent`] - A click event on a shortened link
//!
//! Creation inputs use separate structs (`NewUrlRecord`, `NewClick`) so that
//! store-assigned fields (`id`, timestamps) never appear half-initialized.

pub mod click;
pub mod url;

pub use click::{ClickEvent, NewClick};
pub use url::{NewUrlRecord, RedirectTarget, UrlRecord};
