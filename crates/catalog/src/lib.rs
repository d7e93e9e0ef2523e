//! Product catalog engine.
//!
//! Filtering, sorting and pagination over an in-memory product catalog,
//! implemented as deterministic domain logic (no IO beyond loading the
//! catalog, no rendering). [`view::CatalogView`] sequences the pure engine
//! against a presentation layer.

pub mod config;
pub mod count;
pub mod criteria;
pub mod engine;
pub mod filter;
pub mod pagination;
pub mod product;
pub mod sort;
pub mod store;
pub mod view;

pub use config::CatalogConfig;
pub use count::{CountLabels, PluralClass, format_count, plural_class};
pub use criteria::{Criteria, SortMode, VolumeRange};
pub use engine::{compute, query};
pub use filter::{filter, matches};
pub use pagination::{
    DEFAULT_MAX_VISIBLE, PageRequest, PageSlice, PageSlot, PaginationModel, build_page_window,
    slice, total_pages,
};
pub use product::{Price, Product, format_price};
pub use sort::sort;
pub use store::{Catalog, CatalogError};
pub use view::{CatalogInteraction, CatalogView, Presenter};
