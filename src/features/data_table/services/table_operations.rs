use std::cmp::Ordering;
use crate::core::models::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Age,
}

impl Field {
    pub fn all() -> Vec<Field> {
        vec![Field::Id, Field::Name, Field::Age]
    }

    pub fn header(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "Name",
            Field::Age => "Age",
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Field::Id => 90,
            Field::Name => 150,
            Field::Age => 110,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Id | Field::Age)
    }

    pub fn cell(&self, person: &Person) -> String {
        match self {
            Field::Id => person.id.to_string(),
            Field::Name => person.name.clone(),
            Field::Age => person.age.to_string(),
        }
    }

    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            Field::Id => a.id.cmp(&b.id),
            Field::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Field::Age => a.age.cmp(&b.age),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Field,
    pub direction: SortDirection,
}

/// Header clicks cycle ascending, descending, unsorted. Clicking a different
/// column starts over at ascending.
pub fn next_sort(current: Option<SortState>, field: Field) -> Option<SortState> {
    match current {
        Some(SortState { field: f, direction: SortDirection::Asc }) if f == field => Some(SortState {
            field,
            direction: SortDirection::Desc,
        }),
        Some(SortState { field: f, direction: SortDirection::Desc }) if f == field => None,
        _ => Some(SortState {
            field,
            direction: SortDirection::Asc,
        }),
    }
}

pub fn sorted_rows(rows: &[Person], sort: Option<SortState>) -> Vec<Person> {
    let mut rows = rows.to_vec();
    if let Some(SortState { field, direction }) = sort {
        rows.sort_by(|a, b| {
            let ord = field.compare(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    rows
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size).max(1)
}

pub fn page_rows(rows: &[Person], page: usize, page_size: usize) -> Vec<Person> {
    rows.iter()
        .skip(page.saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect()
}

// Footer text, e.g. "1–5 of 12"
pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 {
        return "0–0 of 0".to_string();
    }
    let first = page * page_size + 1;
    let last = ((page + 1) * page_size).min(total);
    format!("{}–{} of {}", first, last, total)
}
