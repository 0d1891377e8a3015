use contracts::catalog::category::{Category, CategoryDraft};
use contracts::common::validation::FieldErrors;
use leptos::prelude::*;

/// Reactive state of the category form, shared by create and edit.
#[derive(Clone, Copy)]
pub struct CategoryFormVm {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub icon: RwSignal<String>,
    pub color: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
}

impl CategoryFormVm {
    pub fn new(initial: Option<&Category>) -> Self {
        match initial {
            Some(category) => Self {
                name: RwSignal::new(category.core.name.clone()),
                description: RwSignal::new(category.core.description.clone()),
                icon: RwSignal::new(category.icon.clone()),
                color: RwSignal::new(category.color.clone()),
                errors: RwSignal::new(FieldErrors::new()),
            },
            None => Self {
                name: RwSignal::new(String::new()),
                description: RwSignal::new(String::new()),
                icon: RwSignal::new("wrench".to_string()),
                color: RwSignal::new("#2F80ED".to_string()),
                errors: RwSignal::new(FieldErrors::new()),
            },
        }
    }

    pub fn build_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            icon: self.icon.get_untracked(),
            color: self.color.get_untracked(),
        }
    }
}
