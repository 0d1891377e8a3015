//! Client-side narrowing and ordering helpers used by the association
//! pickers inside the entity forms. List screens themselves filter and
//! sort server-side.

use std::cmp::Ordering;

use contracts::common::EntityRef;

pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

impl Searchable for EntityRef {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for EntityRef {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::common::EntityStatus;

    fn entity_ref(id: i64, name: &str) -> EntityRef {
        EntityRef {
            id,
            name: name.to_string(),
            status: EntityStatus::Active,
        }
    }

    #[test]
    fn filter_is_case_insensitive() {
        let items = vec![entity_ref(1, "Plumbing"), entity_ref(2, "Roofing")];
        let hits = filter_list(items, "plumb");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let items = vec![entity_ref(1, "Plumbing"), entity_ref(2, "Roofing")];
        assert_eq!(filter_list(items, "  ").len(), 2);
    }

    #[test]
    fn sorts_by_name_both_ways() {
        let mut items = vec![entity_ref(1, "roofing"), entity_ref(2, "Drain")];
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].id, 2);
        sort_list(&mut items, "name", false);
        assert_eq!(items[0].id, 1);
    }
}
