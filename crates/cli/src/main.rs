//! `pethouse-catalog`: query a product catalog file from the command line.

mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pethouse_catalog::{
    Catalog, CatalogConfig, CatalogInteraction, CatalogView, Criteria, PageRequest, SortMode,
};
use pethouse_core::ProductId;

use crate::render::{TextPresenter, card};

#[derive(Debug, Parser)]
#[command(
    name = "pethouse-catalog",
    version,
    about = "Filter, sort and page a product catalog"
)]
struct Args {
    /// JSON file with the product catalog (array of product records).
    #[arg(long, value_name = "PATH")]
    products: PathBuf,

    /// Accepted product type (repeatable).
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Neck filter token (repeatable).
    #[arg(long = "neck", value_name = "NECK")]
    necks: Vec<String>,

    /// Purpose filter token (repeatable).
    #[arg(long = "purpose", value_name = "PURPOSE")]
    purposes: Vec<String>,

    /// Volume range `min-max`, inclusive (repeatable).
    #[arg(long = "volume", value_name = "MIN-MAX")]
    volumes: Vec<String>,

    #[arg(long, value_name = "LITRES")]
    volume_from: Option<f64>,

    #[arg(long, value_name = "LITRES")]
    volume_to: Option<f64>,

    /// default | priceAsc | priceDesc
    #[arg(long, default_value = "default")]
    sort: SortMode,

    /// Page number, or `next`/`prev` relative to the first page.
    #[arg(long, default_value = "1")]
    page: PageRequest,

    /// Overrides PETHOUSE_ITEMS_PER_PAGE.
    #[arg(long)]
    per_page: Option<usize>,

    /// Print the card of a single product instead of a catalog page.
    #[arg(long, value_name = "ID")]
    show: Option<ProductId>,
}

impl Args {
    fn criteria(&self) -> Criteria {
        Criteria::new()
            .with_types(self.types.iter().cloned())
            .with_necks(self.necks.iter().cloned())
            .with_purposes(self.purposes.iter().cloned())
            .with_volumes(self.volumes.iter().cloned())
            .with_volume_bounds(self.volume_from, self.volume_to)
            .with_sort(self.sort)
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let catalog = Catalog::from_path(&args.products)
        .with_context(|| format!("failed to load catalog from {}", args.products.display()))?;

    if let Some(id) = &args.show {
        let product = catalog
            .require(id)
            .with_context(|| format!("product {id} is not in the catalog"))?;
        return Ok(card(product));
    }

    let mut config = CatalogConfig::from_env();
    if let Some(per_page) = args.per_page {
        config.items_per_page = per_page;
    }

    let mut view = CatalogView::new(&catalog, config, TextPresenter::default())
        .context("invalid catalog configuration")?;
    view.on_criteria_changed(args.criteria());
    view.on_page_requested(args.page);

    tracing::debug!(
        page = view.current_page(),
        total_pages = view.total_pages(),
        "rendered catalog page"
    );

    Ok(view.presenter().screen())
}

fn main() -> anyhow::Result<()> {
    pethouse_observability::init();

    let args = Args::parse();
    let screen = run(&args)?;
    print!("{screen}");
    Ok(())
}
