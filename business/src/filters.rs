//! Faculty directory filter chips and card visibility.
//!
//! Clicking a chip toggles it with [`render_filter`]; [`render_cards`] then
//! shows the cards that satisfy every active department chip and every active
//! research-group chip, and shows the "no result" notice when none remain.

use crate::dom::Element;

pub const FILTER_ACTIVE: &str = "filters__filter--active";
pub const FILTER_DEPARTMENT: &str = "filters__filter--dept";
pub const FILTER_RESEARCH: &str = "filters__filter--research";
pub const CARD: &str = "cards__card";
pub const CARD_HIDDEN: &str = "card--hide";
pub const CARD_DEPARTMENT: &str = "departments__department";
pub const NO_RESULT_HIDDEN: &str = "no-result--hide";

pub const DEPARTMENT_ATTR: &str = "data-department";
pub const RESEARCH_GROUP_ATTR: &str = "data-research-group";
pub const CARD_DEPARTMENT_ATTR: &str = "data";

/// Toggles a chip between active and inactive.
pub fn render_filter(chip: &mut Element) {
    chip.toggle_class(FILTER_ACTIVE);
}

/// Conditions collected from the active chips.
///
/// A chip missing its value attribute yields `None`, a condition no card
/// satisfies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    pub departments: Vec<Option<String>>,
    pub research_groups: Vec<Option<String>>,
}

impl ActiveFilters {
    pub fn from_chips<'a>(chips: impl IntoIterator<Item = &'a Element>) -> Self {
        let mut filters = Self::default();
        for chip in chips {
            if !chip.has_class(FILTER_ACTIVE) {
                continue;
            }
            if chip.has_class(FILTER_DEPARTMENT) {
                filters
                    .departments
                    .push(chip.attribute(DEPARTMENT_ATTR).map(str::to_owned));
            }
            if chip.has_class(FILTER_RESEARCH) {
                filters
                    .research_groups
                    .push(chip.attribute(RESEARCH_GROUP_ATTR).map(str::to_owned));
            }
        }
        filters
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty() && self.research_groups.is_empty()
    }

    /// Whether a card with these department codes and research-group code
    /// string passes every condition.
    pub fn admits(&self, departments: &[&str], research_group: Option<&str>) -> bool {
        let departments_ok = self.departments.iter().all(|wanted| {
            wanted
                .as_deref()
                .is_some_and(|wanted| departments.contains(&wanted))
        });
        if !departments_ok {
            return false;
        }

        self.research_groups.iter().all(|wanted| {
            match (wanted.as_deref(), research_group) {
                (Some(wanted), Some(codes)) => {
                    let mut chars = wanted.chars();
                    matches!(
                        (chars.next(), chars.next()),
                        (Some(code), None) if codes.contains(code)
                    )
                }
                _ => false,
            }
        })
    }

    fn admits_card(&self, card: &Element) -> bool {
        let departments: Vec<&str> = card
            .elements_by_class(CARD_DEPARTMENT)
            .into_iter()
            .filter_map(|department| department.attribute(CARD_DEPARTMENT_ATTR))
            .collect();
        self.admits(&departments, card.attribute(RESEARCH_GROUP_ATTR))
    }
}

/// Applies the active chips in `filters` to every card under `cards`.
///
/// Returns the number of cards left visible.
pub fn render_cards(filters: &[Element], cards: &mut Element, no_result: &mut Element) -> usize {
    let active = ActiveFilters::from_chips(filters);

    if active.is_empty() {
        let mut shown = 0;
        cards.for_each_matching_mut(&[CARD], &mut |card: &mut Element| {
            card.remove_class(CARD_HIDDEN);
            shown += 1;
        });
        no_result.add_class(NO_RESULT_HIDDEN);
        return shown;
    }

    let mut shown = 0;
    cards.for_each_matching_mut(&[CARD], &mut |card: &mut Element| {
        if active.admits_card(card) {
            card.remove_class(CARD_HIDDEN);
            shown += 1;
        } else {
            card.add_class(CARD_HIDDEN);
        }
    });

    if shown == 0 {
        no_result.remove_class(NO_RESULT_HIDDEN);
    } else {
        no_result.add_class(NO_RESULT_HIDDEN);
    }
    log::debug!(
        "Faculty filter: {} department, {} research conditions, {} cards shown",
        active.departments.len(),
        active.research_groups.len(),
        shown
    );
    shown
}
