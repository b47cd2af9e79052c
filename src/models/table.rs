use super::company::{Company, SortField};
use super::sector::Sector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active column and direction of the company table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: same column flips direction, a new column starts ascending.
    pub fn clicked(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::new(field, SortDirection::Ascending)
        }
    }
}

/// Interaction state shared by the sector chart and the company table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableState {
    pub selected: Option<Sector>,
    pub sort: SortState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    /// Toggles selection when the same sector is picked again.
    SelectSector(Sector),
    ClearSelection,
    SortBy(SortField),
}

impl TableState {
    pub fn apply(&self, action: TableAction) -> Self {
        match action {
            TableAction::SelectSector(sector) => {
                let already_selected = self.selected.as_ref().is_some_and(|s| s.id == sector.id);
                Self {
                    selected: if already_selected { None } else { Some(sector) },
                    sort: self.sort,
                }
            }
            TableAction::ClearSelection => Self {
                selected: None,
                sort: self.sort,
            },
            TableAction::SortBy(field) => Self {
                selected: self.selected.clone(),
                sort: self.sort.clicked(field),
            },
        }
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected.as_ref().map(|s| s.id)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.name.as_str())
    }

    /// Company table heading for the current selection.
    pub fn title(&self, limit: u32) -> String {
        match self.selected_name() {
            Some(name) => format!("{name} Companies"),
            None => format!("Top {limit} Companies by Market Cap"),
        }
    }
}

/// Keeps only companies whose sector name matches exactly.
pub fn filter_by_sector<'a>(companies: &'a [Company], sector: Option<&str>) -> Vec<&'a Company> {
    companies
        .iter()
        .filter(|c| sector.is_none_or(|name| c.sector == name))
        .collect()
}

/// Stable sort; descending reverses the comparator so ties keep input order.
pub fn sort_companies(rows: &mut [&Company], sort: SortState) {
    rows.sort_by(|a, b| {
        let ordering = a.sort_key(sort.field).compare(&b.sort_key(sort.field));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Rows to display for the given filter and sort.
pub fn visible_companies(
    companies: &[Company],
    sector: Option<&str>,
    sort: SortState,
) -> Vec<Company> {
    let mut rows = filter_by_sector(companies, sector);
    sort_companies(&mut rows, sort);
    rows.into_iter().cloned().collect()
}
