//! Catalog view controller.
//!
//! Owns the derived state of one catalog view (criteria, filtered set,
//! current page) and sequences recompute → render against a [`Presenter`].
//! The filtered set is only recomputed on criteria changes; page requests
//! reslice it.

use pethouse_core::DomainResult;

use crate::config::CatalogConfig;
use crate::count::format_count;
use crate::criteria::Criteria;
use crate::engine::compute;
use crate::pagination::{PageRequest, PaginationModel, slice, total_pages};
use crate::product::Product;
use crate::store::Catalog;

/// Presentation layer: draws a page of products, the page controls and the
/// count line. Each call fully replaces what was rendered before.
pub trait Presenter {
    fn render_page(&mut self, items: &[&Product], empty_message: &str);

    /// `model.is_hidden()` means the controls should be cleared.
    fn render_pagination(&mut self, model: &PaginationModel);

    fn render_count(&mut self, text: &str);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render_page(&mut self, items: &[&Product], empty_message: &str) {
        (**self).render_page(items, empty_message)
    }

    fn render_pagination(&mut self, model: &PaginationModel) {
        (**self).render_pagination(model)
    }

    fn render_count(&mut self, text: &str) {
        (**self).render_count(text)
    }
}

/// User interactions the catalog view reacts to.
pub trait CatalogInteraction {
    /// New filter/sort selections: recompute and go back to page 1.
    fn on_criteria_changed(&mut self, criteria: Criteria);

    /// Page control click: reslice the current filtered set.
    fn on_page_requested(&mut self, request: PageRequest);
}

pub struct CatalogView<'a, P: Presenter> {
    catalog: &'a Catalog,
    config: CatalogConfig,
    presenter: P,
    criteria: Criteria,
    filtered: Vec<&'a Product>,
    current_page: usize,
}

impl<'a, P: Presenter> CatalogView<'a, P> {
    /// Create the view and render the unfiltered catalog.
    pub fn new(catalog: &'a Catalog, config: CatalogConfig, presenter: P) -> DomainResult<Self> {
        config.validate()?;
        let mut view = Self {
            catalog,
            config,
            presenter,
            criteria: Criteria::default(),
            filtered: Vec::new(),
            current_page: 1,
        };
        view.recompute();
        Ok(view)
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.config.items_per_page)
    }

    pub fn filtered(&self) -> &[&'a Product] {
        &self.filtered
    }

    pub fn page_items(&self) -> Vec<&'a Product> {
        slice(&self.filtered, self.current_page, self.config.items_per_page).items
    }

    pub fn pagination(&self) -> PaginationModel {
        PaginationModel::new(self.current_page, self.total_pages())
    }

    pub fn count_text(&self) -> String {
        format_count(self.filtered.len() as u64, &self.config.count_labels)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Reset every selection and recompute.
    pub fn clear(&mut self) {
        self.criteria.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = compute(self.catalog, &self.criteria);
        self.current_page = 1;
        tracing::debug!(
            catalog = self.catalog.len(),
            filtered = self.filtered.len(),
            sort = %self.criteria.sort,
            "catalog recomputed"
        );

        self.render_page();
        let count = self.count_text();
        self.presenter.render_count(&count);
        self.render_pagination();
    }

    fn render_page(&mut self) {
        let items = self.page_items();
        self.presenter.render_page(&items, &self.config.empty_message);
    }

    fn render_pagination(&mut self) {
        let model = self.pagination();
        self.presenter.render_pagination(&model);
    }
}

impl<P: Presenter> CatalogInteraction for CatalogView<'_, P> {
    fn on_criteria_changed(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.recompute();
    }

    fn on_page_requested(&mut self, request: PageRequest) {
        let target = request.resolve(self.current_page, self.total_pages());
        if target == self.current_page && !matches!(request, PageRequest::Number(_)) {
            return;
        }
        tracing::debug!(from = self.current_page, to = target, "page requested");
        self.current_page = target;
        self.render_page();
        self.render_pagination();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::SortMode;
    use crate::pagination::PageSlot;

    #[derive(Debug, Default)]
    struct RecordingPresenter {
        pages: Vec<(Vec<String>, String)>,
        paginations: Vec<PaginationModel>,
        counts: Vec<String>,
    }

    impl Presenter for RecordingPresenter {
        fn render_page(&mut self, items: &[&Product], empty_message: &str) {
            self.pages.push((
                items.iter().map(|p| p.id.to_string()).collect(),
                empty_message.to_string(),
            ));
        }

        fn render_pagination(&mut self, model: &PaginationModel) {
            self.paginations.push(model.clone());
        }

        fn render_count(&mut self, text: &str) {
            self.counts.push(text.to_string());
        }
    }

    fn catalog(n: u64) -> Catalog {
        Catalog::new(
            (1..=n)
                .map(|i| {
                    let kind = if i % 2 == 0 { "Банка" } else { "Бутылка" };
                    Product::new(i, kind, format!("#{i}")).with_price((n - i) as f64)
                })
                .collect(),
        )
        .unwrap()
    }

    fn config(per_page: usize) -> CatalogConfig {
        CatalogConfig {
            items_per_page: per_page,
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn initial_render_shows_first_page_of_everything() {
        let catalog = catalog(25);
        let view = CatalogView::new(&catalog, config(12), RecordingPresenter::default()).unwrap();

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total_pages(), 3);

        let presenter = view.into_presenter();
        assert_eq!(presenter.pages.len(), 1);
        assert_eq!(presenter.pages[0].0.len(), 12);
        assert_eq!(presenter.counts, vec!["Найдено 25 позиций".to_string()]);
        assert_eq!(
            presenter.paginations[0].window,
            vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)]
        );
    }

    #[test]
    fn rejects_zero_page_size() {
        let catalog = catalog(3);
        assert!(CatalogView::new(&catalog, config(0), RecordingPresenter::default()).is_err());
    }

    #[test]
    fn page_request_reslices_without_recount() {
        let catalog = catalog(25);
        let mut view =
            CatalogView::new(&catalog, config(12), RecordingPresenter::default()).unwrap();

        view.on_page_requested(PageRequest::Number(3));
        assert_eq!(view.current_page(), 3);
        assert_eq!(view.page_items().len(), 1);

        let presenter = view.presenter();
        assert_eq!(presenter.pages.last().unwrap().0, vec!["25".to_string()]);
        assert_eq!(presenter.counts.len(), 1);
        assert_eq!(presenter.paginations.len(), 2);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let catalog = catalog(25);
        let mut view =
            CatalogView::new(&catalog, config(12), RecordingPresenter::default()).unwrap();

        view.on_page_requested(PageRequest::Number(99));
        assert_eq!(view.current_page(), 3);

        view.on_page_requested(PageRequest::Number(0));
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn previous_and_next_stop_at_edges() {
        let catalog = catalog(25);
        let mut view =
            CatalogView::new(&catalog, config(12), RecordingPresenter::default()).unwrap();

        view.on_page_requested(PageRequest::Previous);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.presenter().pages.len(), 1);

        view.on_page_requested(PageRequest::Next);
        view.on_page_requested(PageRequest::Next);
        view.on_page_requested(PageRequest::Next);
        assert_eq!(view.current_page(), 3);
        assert_eq!(view.presenter().pages.len(), 3);
    }

    #[test]
    fn criteria_change_resets_to_first_page() {
        let catalog = catalog(25);
        let mut view =
            CatalogView::new(&catalog, config(5), RecordingPresenter::default()).unwrap();
        view.on_page_requested(PageRequest::Number(2));
        assert_eq!(view.current_page(), 2);

        view.on_criteria_changed(
            Criteria::new()
                .with_types(["Бутылка"])
                .with_sort(SortMode::PriceAsc),
        );

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered().len(), 13);
        assert_eq!(view.count_text(), "Найдено 13 позиций");
        // Cheapest bottle is the last odd id.
        assert_eq!(view.page_items()[0].id.as_str(), "25");
    }

    #[test]
    fn empty_result_passes_empty_message() {
        let catalog = catalog(4);
        let mut view =
            CatalogView::new(&catalog, config(12), RecordingPresenter::default()).unwrap();
        view.on_criteria_changed(Criteria::new().with_types(["Преформа"]));

        assert_eq!(view.total_pages(), 0);
        assert_eq!(view.current_page(), 1);

        let presenter = view.into_presenter();
        let (items, message) = presenter.pages.last().unwrap();
        assert!(items.is_empty());
        assert_eq!(message, "Нет товаров по заданным параметрам");
        assert!(presenter.paginations.last().unwrap().is_hidden());
        assert_eq!(presenter.counts.last().unwrap(), "Найдено 0 позиций");
    }

    #[test]
    fn clear_restores_full_catalog() {
        let catalog = catalog(6);
        let mut view =
            CatalogView::new(&catalog, config(12), RecordingPresenter::default()).unwrap();
        view.on_criteria_changed(Criteria::new().with_types(["Банка"]));
        assert_eq!(view.filtered().len(), 3);

        view.clear();
        assert_eq!(view.criteria(), &Criteria::default());
        assert_eq!(view.filtered().len(), 6);
    }

    #[test]
    fn works_with_borrowed_presenter() {
        let catalog = catalog(3);
        let mut presenter = RecordingPresenter::default();
        {
            let mut view = CatalogView::new(&catalog, config(2), &mut presenter).unwrap();
            view.on_page_requested(PageRequest::Next);
        }
        assert_eq!(presenter.pages.len(), 2);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Action {
            Page(usize),
            Previous,
            Next,
            Filter(bool),
            Clear,
        }

        fn arb_action() -> impl Strategy<Value = Action> {
            prop_oneof![
                (0usize..20).prop_map(Action::Page),
                Just(Action::Previous),
                Just(Action::Next),
                any::<bool>().prop_map(Action::Filter),
                Just(Action::Clear),
            ]
        }

        proptest! {
            /// Property: the current page always lies in [1, max(1, total_pages)].
            #[test]
            fn current_page_stays_in_range(
                size in 0u64..60,
                per_page in 1usize..10,
                actions in proptest::collection::vec(arb_action(), 0..30)
            ) {
                let catalog = catalog(size);
                let presenter = RecordingPresenter::default();
                let mut view = CatalogView::new(&catalog, config(per_page), presenter).unwrap();

                for action in actions {
                    match action {
                        Action::Page(n) => view.on_page_requested(PageRequest::Number(n)),
                        Action::Previous => view.on_page_requested(PageRequest::Previous),
                        Action::Next => view.on_page_requested(PageRequest::Next),
                        Action::Filter(bottles) => {
                            let kind = if bottles { "Бутылка" } else { "Банка" };
                            view.on_criteria_changed(Criteria::new().with_types([kind]));
                            prop_assert_eq!(view.current_page(), 1);
                        }
                        Action::Clear => view.clear(),
                    }
                    let page = view.current_page();
                    prop_assert!(page >= 1 && page <= view.total_pages().max(1));
                }
            }
        }
    }
}
