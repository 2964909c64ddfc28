//! Filtering, sorting and active-chip derivation for the gallery.
//!
//! Everything here is pure: `apply` maps the catalog snapshot plus the
//! current criteria to the visible, ordered subset, and never fails.
//! Missing optional fields degrade per stage (an entry without a price
//! never matches a specific price band) instead of erroring.

use std::cmp::Ordering;

use crate::state::catalog::{Goat, GoatStatus};

/// Status selection in the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Sold,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Available,
        StatusFilter::Sold,
    ];

    /// Kebab-case value key, used in chip labels
    pub fn key(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Available => "available",
            StatusFilter::Sold => "sold",
        }
    }

    /// Radio label in the filter panel
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Available => "Available",
            StatusFilter::Sold => "Sold",
        }
    }

    fn matches(&self, status: GoatStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => status == GoatStatus::Available,
            StatusFilter::Sold => status == GoatStatus::Sold,
        }
    }
}

/// Price band selection, in rupees.
/// Band edges are inclusive on the named bands, strict on the open ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    All,
    Under22000,
    From22000To26000,
    From26000To30000,
    Over30000,
}

impl PriceRange {
    pub const OPTIONS: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::Under22000,
        PriceRange::From22000To26000,
        PriceRange::From26000To30000,
        PriceRange::Over30000,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Under22000 => "under-22000",
            PriceRange::From22000To26000 => "22000-26000",
            PriceRange::From26000To30000 => "26000-30000",
            PriceRange::Over30000 => "over-30000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => "All Prices",
            PriceRange::Under22000 => "Under ₹22,000",
            PriceRange::From22000To26000 => "₹22,000 - ₹26,000",
            PriceRange::From26000To30000 => "₹26,000 - ₹30,000",
            PriceRange::Over30000 => "Over ₹30,000",
        }
    }

    /// An entry without a price never matches a specific band
    fn matches(&self, price: Option<f64>) -> bool {
        if *self == PriceRange::All {
            return true;
        }

        let Some(price) = price else {
            return false;
        };

        match self {
            PriceRange::All => true,
            PriceRange::Under22000 => price < 22000.0,
            PriceRange::From22000To26000 => (22000.0..=26000.0).contains(&price),
            PriceRange::From26000To30000 => (26000.0..=30000.0).contains(&price),
            PriceRange::Over30000 => price > 30000.0,
        }
    }
}

/// Weight band selection, in kg. Same edge pattern as [`PriceRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightRange {
    #[default]
    All,
    Under35,
    From35To45,
    From45To55,
    Over55,
}

impl WeightRange {
    pub const OPTIONS: [WeightRange; 5] = [
        WeightRange::All,
        WeightRange::Under35,
        WeightRange::From35To45,
        WeightRange::From45To55,
        WeightRange::Over55,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WeightRange::All => "all",
            WeightRange::Under35 => "under-35",
            WeightRange::From35To45 => "35-45",
            WeightRange::From45To55 => "45-55",
            WeightRange::Over55 => "over-55",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightRange::All => "All Weights",
            WeightRange::Under35 => "Under 35 kg",
            WeightRange::From35To45 => "35 - 45 kg",
            WeightRange::From45To55 => "45 - 55 kg",
            WeightRange::Over55 => "Over 55 kg",
        }
    }

    fn matches(&self, weight: Option<f64>) -> bool {
        if *self == WeightRange::All {
            return true;
        }

        let Some(weight) = weight else {
            return false;
        };

        match self {
            WeightRange::All => true,
            WeightRange::Under35 => weight < 35.0,
            WeightRange::From35To45 => (35.0..=45.0).contains(&weight),
            WeightRange::From45To55 => (45.0..=55.0).contains(&weight),
            WeightRange::Over55 => weight > 55.0,
        }
    }
}

/// Sort order for the surviving entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
}

impl SortBy {
    pub const OPTIONS: [SortBy; 4] = [
        SortBy::Newest,
        SortBy::Oldest,
        SortBy::PriceLow,
        SortBy::PriceHigh,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Oldest => "oldest",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Newest => "Newest First",
            SortBy::Oldest => "Oldest First",
            SortBy::PriceLow => "Price: Low to High",
            SortBy::PriceHigh => "Price: High to Low",
        }
    }
}

/// One criteria field, addressable for per-chip reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    Price,
    Weight,
    Sort,
}

/// The combined search/filter/sort selection driving the visible subset.
///
/// Session-only state: never persisted. `Default` is the "show everything,
/// newest first" view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status: StatusFilter,
    pub price: PriceRange,
    pub weight: WeightRange,
    pub sort: SortBy,
}

impl FilterCriteria {
    /// Reset a single field to its default (chip removal)
    pub fn reset(&mut self, field: FilterField) {
        match field {
            FilterField::Status => self.status = StatusFilter::All,
            FilterField::Price => self.price = PriceRange::All,
            FilterField::Weight => self.weight = WeightRange::All,
            FilterField::Sort => self.sort = SortBy::Newest,
        }
    }

    /// Reset every field, including the search term
    pub fn clear_all(&mut self) {
        *self = FilterCriteria::default();
    }
}

/// A removable token summarizing one non-default criterion
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChip {
    pub field: FilterField,
    pub label: String,
}

/// Derive the active-filter chips from the current criteria.
///
/// One chip per non-default field among status/price/weight/sort. The search
/// term intentionally produces no chip, matching the original design.
pub fn active_chips(criteria: &FilterCriteria) -> Vec<FilterChip> {
    let mut chips = Vec::new();

    if criteria.status != StatusFilter::All {
        chips.push(FilterChip {
            field: FilterField::Status,
            label: format!("status: {}", criteria.status.key()),
        });
    }
    if criteria.price != PriceRange::All {
        chips.push(FilterChip {
            field: FilterField::Price,
            label: format!("price: {}", criteria.price.key()),
        });
    }
    if criteria.weight != WeightRange::All {
        chips.push(FilterChip {
            field: FilterField::Weight,
            label: format!("weight: {}", criteria.weight.key()),
        });
    }
    if criteria.sort != SortBy::Newest {
        chips.push(FilterChip {
            field: FilterField::Sort,
            label: format!("sort: {}", criteria.sort.key()),
        });
    }

    chips
}

/// Derive the visible, ordered subset of the catalog.
///
/// Filter stages run first (search, status, price, weight), then a stable
/// sort over the survivors, so entries tied on the sort key keep their
/// relative catalog order. With all-default criteria this is the identity.
pub fn apply(catalog: &[Goat], criteria: &FilterCriteria) -> Vec<Goat> {
    let term = criteria.search_term.trim().to_lowercase();

    let mut goats: Vec<Goat> = catalog
        .iter()
        .filter(|goat| matches_search(goat, &term))
        .filter(|goat| criteria.status.matches(goat.status))
        .filter(|goat| criteria.price.matches(goat.price))
        .filter(|goat| criteria.weight.matches(goat.weight))
        .cloned()
        .collect();

    sort_goats(&mut goats, criteria.sort);
    goats
}

/// Case-folded substring match over id and description.
/// `term` must already be trimmed and lowercased.
fn matches_search(goat: &Goat, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    if goat.id.to_lowercase().contains(term) {
        return true;
    }

    goat.description
        .as_deref()
        .is_some_and(|desc| desc.to_lowercase().contains(term))
}

fn sort_goats(goats: &mut [Goat], sort: SortBy) {
    match sort {
        SortBy::Newest => {
            goats.sort_by(|a, b| defined_first(a.date_listed, b.date_listed, |a, b| b.cmp(&a)));
        }
        SortBy::Oldest => {
            goats.sort_by(|a, b| defined_first(a.date_listed, b.date_listed, |a, b| a.cmp(&b)));
        }
        SortBy::PriceLow => {
            goats.sort_by(|a, b| defined_first(a.price, b.price, cmp_f64));
        }
        SortBy::PriceHigh => {
            goats.sort_by(|a, b| defined_first(a.price, b.price, |a, b| cmp_f64(b, a)));
        }
    }
}

/// Compare two optional sort keys, placing undefined values after every
/// defined one regardless of direction. Ties report `Equal` so the stable
/// sort keeps catalog order.
fn defined_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Catalog prices are plain finite numbers; NaN never reaches this point.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn goat(
        id: &str,
        status: GoatStatus,
        price: Option<f64>,
        date: Option<&str>,
        weight: Option<f64>,
    ) -> Goat {
        Goat {
            id: id.to_string(),
            video_url: format!("https://example.com/{id}.mp4"),
            thumbnail: None,
            status,
            description: None,
            price,
            date_listed: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            weight,
        }
    }

    fn ids(goats: &[Goat]) -> Vec<&str> {
        goats.iter().map(|g| g.id.as_str()).collect()
    }

    fn sample_catalog() -> Vec<Goat> {
        vec![
            goat("G1", GoatStatus::Available, Some(20000.0), Some("2024-01-01"), Some(30.0)),
            goat("G2", GoatStatus::Sold, Some(25000.0), Some("2024-02-01"), Some(40.0)),
            goat("G3", GoatStatus::Available, Some(28000.0), Some("2024-03-01"), Some(50.0)),
            goat("G4", GoatStatus::Available, None, None, None),
        ]
    }

    #[test]
    fn default_criteria_are_the_identity() {
        let catalog = sample_catalog();
        let result = apply(&catalog, &FilterCriteria::default());

        assert_eq!(result, catalog);
    }

    #[test]
    fn status_filter_keeps_matching_entries() {
        let catalog = vec![
            goat("G1", GoatStatus::Available, Some(20000.0), Some("2024-01-01"), None),
            goat("G2", GoatStatus::Sold, Some(25000.0), Some("2024-02-01"), None),
        ];
        let criteria = FilterCriteria {
            status: StatusFilter::Available,
            ..Default::default()
        };

        assert_eq!(ids(&apply(&catalog, &criteria)), ["G1"]);
    }

    #[test]
    fn price_band_edges_are_inclusive() {
        let catalog = vec![goat("G1", GoatStatus::Available, Some(22000.0), None, None)];

        let in_band = FilterCriteria {
            price: PriceRange::From22000To26000,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&catalog, &in_band)), ["G1"]);

        let below = FilterCriteria {
            price: PriceRange::Under22000,
            ..Default::default()
        };
        assert!(apply(&catalog, &below).is_empty());
    }

    #[test]
    fn weight_band_edges_are_inclusive() {
        let catalog = vec![goat("G1", GoatStatus::Available, None, None, Some(55.0))];

        let in_band = FilterCriteria {
            weight: WeightRange::From45To55,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&catalog, &in_band)), ["G1"]);

        let above = FilterCriteria {
            weight: WeightRange::Over55,
            ..Default::default()
        };
        assert!(apply(&catalog, &above).is_empty());
    }

    #[test]
    fn missing_values_never_match_a_specific_band() {
        let catalog = vec![goat("G4", GoatStatus::Available, None, None, None)];

        let by_price = FilterCriteria {
            price: PriceRange::Under22000,
            ..Default::default()
        };
        assert!(apply(&catalog, &by_price).is_empty());

        let by_weight = FilterCriteria {
            weight: WeightRange::Over55,
            ..Default::default()
        };
        assert!(apply(&catalog, &by_weight).is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = vec![goat("a1", GoatStatus::Available, None, None, None)];
        let criteria = FilterCriteria {
            search_term: "A1".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&apply(&catalog, &criteria)), ["a1"]);
    }

    #[test]
    fn search_matches_description_but_not_missing_ones() {
        let mut with_desc = goat("G1", GoatStatus::Available, None, None, None);
        with_desc.description = Some("Healthy Barbari goat".to_string());
        let without_desc = goat("G2", GoatStatus::Available, None, None, None);
        let catalog = vec![with_desc, without_desc];

        let criteria = FilterCriteria {
            search_term: "  barbari ".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&apply(&catalog, &criteria)), ["G1"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            search_term: "   ".to_string(),
            ..Default::default()
        };

        assert_eq!(apply(&catalog, &criteria), catalog);
    }

    #[test]
    fn newest_sorts_dated_entries_first() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            sort: SortBy::Newest,
            ..Default::default()
        };

        assert_eq!(ids(&apply(&catalog, &criteria)), ["G3", "G2", "G1", "G4"]);
    }

    #[test]
    fn oldest_still_puts_undated_entries_last() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            sort: SortBy::Oldest,
            ..Default::default()
        };

        assert_eq!(ids(&apply(&catalog, &criteria)), ["G1", "G2", "G3", "G4"]);
    }

    #[test]
    fn equal_dates_keep_catalog_order() {
        let catalog = vec![
            goat("G1", GoatStatus::Available, None, Some("2024-05-11"), None),
            goat("G2", GoatStatus::Available, None, Some("2024-05-11"), None),
            goat("G3", GoatStatus::Available, None, Some("2024-01-01"), None),
        ];

        let newest = FilterCriteria {
            sort: SortBy::Newest,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&catalog, &newest)), ["G1", "G2", "G3"]);

        let oldest = FilterCriteria {
            sort: SortBy::Oldest,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&catalog, &oldest)), ["G3", "G1", "G2"]);
    }

    #[test]
    fn price_sorts_put_unpriced_entries_last_in_both_directions() {
        let catalog = sample_catalog();

        let low = FilterCriteria {
            sort: SortBy::PriceLow,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&catalog, &low)), ["G1", "G2", "G3", "G4"]);

        let high = FilterCriteria {
            sort: SortBy::PriceHigh,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&catalog, &high)), ["G3", "G2", "G1", "G4"]);
    }

    #[test]
    fn price_high_over_two_entry_catalog() {
        let catalog = vec![
            goat("G1", GoatStatus::Available, Some(20000.0), Some("2024-01-01"), None),
            goat("G2", GoatStatus::Sold, Some(25000.0), Some("2024-02-01"), None),
        ];
        let criteria = FilterCriteria {
            sort: SortBy::PriceHigh,
            ..Default::default()
        };

        assert_eq!(ids(&apply(&catalog, &criteria)), ["G2", "G1"]);
    }

    #[test]
    fn stages_compose() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            status: StatusFilter::Available,
            price: PriceRange::From26000To30000,
            ..Default::default()
        };

        assert_eq!(ids(&apply(&catalog, &criteria)), ["G3"]);
    }

    #[test]
    fn default_criteria_produce_no_chips() {
        assert!(active_chips(&FilterCriteria::default()).is_empty());
    }

    #[test]
    fn chips_cover_non_default_fields_only() {
        let criteria = FilterCriteria {
            search_term: "barbari".to_string(),
            status: StatusFilter::Sold,
            sort: SortBy::PriceHigh,
            ..Default::default()
        };

        let chips = active_chips(&criteria);
        let labels: Vec<&str> = chips.iter().map(|c| c.label.as_str()).collect();

        // The search term never produces a chip
        assert_eq!(labels, ["status: sold", "sort: price-high"]);
    }

    #[test]
    fn chip_removal_resets_one_field() {
        let mut criteria = FilterCriteria {
            status: StatusFilter::Sold,
            sort: SortBy::PriceHigh,
            ..Default::default()
        };

        criteria.reset(FilterField::Status);

        let chips = active_chips(&criteria);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "sort: price-high");
    }

    #[test]
    fn clear_all_also_clears_the_search_term() {
        let mut criteria = FilterCriteria {
            search_term: "barbari".to_string(),
            status: StatusFilter::Sold,
            price: PriceRange::Over30000,
            weight: WeightRange::Under35,
            sort: SortBy::Oldest,
        };

        criteria.clear_all();

        assert_eq!(criteria, FilterCriteria::default());
        assert!(active_chips(&criteria).is_empty());
    }
}
