//! Plain-text presenter: keeps the last rendered grid, controls and count.

use std::fmt::Write;

use pethouse_catalog::{PageSlot, PaginationModel, Presenter, Product, format_price};

#[derive(Debug, Default)]
pub struct TextPresenter {
    grid: String,
    controls: String,
    count: String,
}

impl TextPresenter {
    pub fn screen(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.count);
        out.push_str("\n\n");
        out.push_str(&self.grid);
        if !self.controls.is_empty() {
            out.push('\n');
            out.push_str(&self.controls);
            out.push('\n');
        }
        out
    }
}

pub fn card(product: &Product) -> String {
    let mut out = format!("{} [{}]\n", product.title, product.id);
    for (label, value) in product.details() {
        let _ = writeln!(out, "    {label}: {value}");
    }
    let _ = writeln!(out, "    от {} р/шт", format_price(&product.price));
    out
}

pub fn format_controls(model: &PaginationModel) -> String {
    if model.is_hidden() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(model.window.len() + 2);
    parts.push(if model.has_previous { "‹" } else { " " }.to_string());
    for slot in &model.window {
        parts.push(match slot {
            PageSlot::Page(n) if *n == model.current_page => format!("[{n}]"),
            PageSlot::Page(n) => n.to_string(),
            PageSlot::Ellipsis => "…".to_string(),
        });
    }
    parts.push(if model.has_next { "›" } else { " " }.to_string());
    parts.join(" ")
}

impl Presenter for TextPresenter {
    fn render_page(&mut self, items: &[&Product], empty_message: &str) {
        self.grid.clear();
        if items.is_empty() {
            self.grid.push_str(empty_message);
            self.grid.push('\n');
            return;
        }
        for product in items {
            self.grid.push_str(&card(product));
        }
    }

    fn render_pagination(&mut self, model: &PaginationModel) {
        self.controls = format_controls(model);
    }

    fn render_count(&mut self, text: &str) {
        self.count = text.to_string();
    }
}
