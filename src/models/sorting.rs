use std::cmp::Ordering;

use super::property::{Property, PropertyType};

/// Columns the vacancy list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortColumn {
    #[default]
    QueuePosition,
    TotalInQueue,
    Reserved,
    Rent,
    Area,
    Floor,
    Description,
    SizeSqm,
    Street,
    PropertyType,
    ReserveUntil,
    MoveIn,
}

impl SortColumn {
    /// Stable identifier, used as the `<option>` value
    pub const fn id(&self) -> &'static str {
        match self {
            Self::QueuePosition => "queue_position.position",
            Self::TotalInQueue => "queue_position.total_in_queue",
            Self::Reserved => "reserved",
            Self::Rent => "rent",
            Self::Area => "area",
            Self::Floor => "floor",
            Self::Description => "description",
            Self::SizeSqm => "size_sqm",
            Self::Street => "address.street",
            Self::PropertyType => "property_type",
            Self::ReserveUntil => "reserve_until",
            Self::MoveIn => "move_in",
        }
    }

    /// Label shown in the sort dropdown and table header
    pub const fn label(&self) -> &'static str {
        match self {
            Self::QueuePosition => "Köplats",
            Self::TotalInQueue => "I kö",
            Self::Reserved => "Reserverad",
            Self::Rent => "Hyra",
            Self::Area => "Område",
            Self::Floor => "Våning",
            Self::Description => "Beskrivning",
            Self::SizeSqm => "Golvyta",
            Self::Street => "Adress",
            Self::PropertyType => "Typ",
            Self::ReserveUntil => "Sista anmälningsdag",
            Self::MoveIn => "Inflyttning",
        }
    }

    /// Columns offered by the grid view's dropdown.
    pub const fn dropdown() -> &'static [Self] {
        &[
            Self::QueuePosition,
            Self::Rent,
            Self::SizeSqm,
            Self::ReserveUntil,
            Self::MoveIn,
            Self::Floor,
        ]
    }

    /// Columns of the table view, in display order.
    pub const fn table() -> &'static [Self] {
        &[
            Self::QueuePosition,
            Self::TotalInQueue,
            Self::Reserved,
            Self::Rent,
            Self::Area,
            Self::Floor,
            Self::Description,
            Self::SizeSqm,
            Self::Street,
            Self::PropertyType,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::table()
            .iter()
            .chain(Self::dropdown())
            .copied()
            .find(|column| column.id() == id)
    }

    /// Ascending order of two properties by this column.
    ///
    /// A missing queue position is the column's minimum.
    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            Self::QueuePosition => a.queue_position.position.cmp(&b.queue_position.position),
            Self::TotalInQueue => a
                .queue_position
                .total_in_queue
                .cmp(&b.queue_position.total_in_queue),
            Self::Reserved => a.reserved.cmp(&b.reserved),
            Self::Rent => a.rent.cmp(&b.rent),
            Self::Area => a.area.cmp(&b.area),
            Self::Floor => a.floor.cmp(&b.floor),
            Self::Description => a.description.cmp(&b.description),
            Self::SizeSqm => a.size_sqm.total_cmp(&b.size_sqm),
            Self::Street => a.address.street.cmp(&b.address.street),
            Self::PropertyType => a.property_type.cmp(&b.property_type),
            Self::ReserveUntil => a.reserve_until.cmp(&b.reserve_until),
            Self::MoveIn => a.move_in.cmp(&b.move_in),
        }
    }
}

/// The active single-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: SortColumn,
    pub desc: bool,
}

impl SortState {
    pub const fn new(column: SortColumn, desc: bool) -> Self {
        Self { column, desc }
    }

    /// Picking a column from the dropdown always starts ascending.
    pub const fn select(column: SortColumn) -> Self {
        Self::new(column, false)
    }

    /// Header click: flips the active column, otherwise selects the new one.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == column {
            Self::new(column, !self.desc)
        } else {
            Self::select(column)
        }
    }

    /// Header arrow for a column, if it is the sorted one
    pub fn indicator(&self, column: SortColumn) -> Option<&'static str> {
        (self.column == column).then_some(if self.desc { " 🔽" } else { " 🔼" })
    }

    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        let ordering = self.column.compare(a, b);
        if self.desc {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Orders the collection without touching it. Ties keep collection order.
pub fn sort_vacancies<'a>(vacancies: &'a [Property], sort: &SortState) -> Vec<&'a Property> {
    let mut rows: Vec<&Property> = vacancies.iter().collect();
    rows.sort_by(|a, b| sort.compare(a, b));
    rows
}

/// Column filters of the table view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VacancyFilter {
    /// Case-insensitive substring of the area name
    pub area: String,
    pub property_type: Option<PropertyType>,
}

/// A change to one field of [`VacancyFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetArea(String),
    SetType(Option<PropertyType>),
}

impl VacancyFilter {
    /// Returns the filter with only the field named by `action` replaced.
    pub fn apply(self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetArea(area) => Self { area, ..self },
            FilterAction::SetType(property_type) => Self {
                property_type,
                ..self
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.area.trim().is_empty() && self.property_type.is_none()
    }

    pub fn matches(&self, property: &Property) -> bool {
        let needle = self.area.trim().to_lowercase();
        let area_matches = needle.is_empty() || property.area.to_lowercase().contains(&needle);
        let type_matches = self
            .property_type
            .is_none_or(|property_type| property.property_type == property_type);

        area_matches && type_matches
    }
}

/// Filters then sorts, as the table renders it.
pub fn visible_rows<'a>(
    vacancies: &'a [Property],
    sort: &SortState,
    filter: &VacancyFilter,
) -> Vec<&'a Property> {
    let mut rows: Vec<&Property> = vacancies.iter().filter(|p| filter.matches(p)).collect();
    rows.sort_by(|a, b| sort.compare(a, b));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_actions_touch_one_field() {
        let filter = VacancyFilter::default()
            .apply(FilterAction::SetType(Some(PropertyType::Dorm)))
            .apply(FilterAction::SetArea("Flogsta".to_string()));
        assert_eq!(filter.area, "Flogsta");
        assert_eq!(filter.property_type, Some(PropertyType::Dorm));

        let filter = filter.apply(FilterAction::SetType(None));
        assert_eq!(filter.area, "Flogsta");
        assert_eq!(filter.property_type, None);
    }

    #[test]
    fn test_default_sort_is_ascending_queue_position() {
        let sort = SortState::default();
        assert_eq!(sort.column, SortColumn::QueuePosition);
        assert!(!sort.desc);
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let sort = SortState::select(SortColumn::Rent).toggled(SortColumn::Rent);
        assert_eq!(sort, SortState::new(SortColumn::Rent, true));
    }

    #[test]
    fn test_toggle_other_column_resets_to_ascending() {
        let sort = SortState::new(SortColumn::Rent, true).toggled(SortColumn::Floor);
        assert_eq!(sort, SortState::new(SortColumn::Floor, false));
    }

    #[test]
    fn test_column_ids_round_trip() {
        for column in SortColumn::table().iter().chain(SortColumn::dropdown()) {
            assert_eq!(SortColumn::from_id(column.id()), Some(*column));
        }
        assert_eq!(SortColumn::from_id("nope"), None);
    }

    #[test]
    fn test_indicator_only_on_active_column() {
        let sort = SortState::new(SortColumn::Rent, true);
        assert_eq!(sort.indicator(SortColumn::Rent), Some(" 🔽"));
        assert_eq!(sort.indicator(SortColumn::Floor), None);
    }
}
