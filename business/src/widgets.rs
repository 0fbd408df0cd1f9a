//! Page widgets and their bootstrap.
//!
//! Each widget checks for the markup it needs when constructed. [`bootstrap`]
//! builds every widget independently, so a page missing one header still gets
//! the others and the dropdown.

use crate::dom::Element;
use log::{error, info};
use thiserror::Error;

pub const HEADER: &[&str] = &["body__header", "header"];
pub const HEADER_HIDDEN: &str = "header--hide";
pub const DROPDOWN_CONTENT: &str = "nation-dropdown__content";
pub const DROPDOWN_OPEN: &str = "nation-dropdown__content--open";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("{widget}: no element matches {selector}")]
    MissingElement {
        widget: &'static str,
        selector: String,
    },
    #[error("{widget}: item {index} out of {len}")]
    NoSuchItem {
        widget: &'static str,
        index: usize,
        len: usize,
    },
}

fn selector(classes: &[&str]) -> String {
    classes.iter().map(|class| format!(".{class}")).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Base,
    Medium,
    Large,
}

impl HeaderKind {
    pub const ALL: [Self; 3] = [Self::Base, Self::Medium, Self::Large];

    pub fn modifier(self) -> &'static str {
        match self {
            Self::Base => "header--base",
            Self::Medium => "header--medium",
            Self::Large => "header--large",
        }
    }

    fn classes(self) -> [&'static str; 3] {
        [HEADER[0], HEADER[1], self.modifier()]
    }
}

/// Switches the page to one header layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSwitcher {
    kind: HeaderKind,
}

impl HeaderSwitcher {
    pub fn new(document: &Element, kind: HeaderKind) -> Result<Self, WidgetError> {
        if document.select_all(&kind.classes()).is_empty() {
            return Err(WidgetError::MissingElement {
                widget: "HeaderSwitcher",
                selector: selector(&kind.classes()),
            });
        }
        Ok(Self { kind })
    }

    pub fn kind(&self) -> HeaderKind {
        self.kind
    }

    /// Shows this header and hides every other `.body__header.header`.
    pub fn activate(&self, document: &mut Element) {
        let modifier = self.kind.modifier();
        document.for_each_matching_mut(HEADER, &mut |header: &mut Element| {
            if header.has_class(modifier) {
                header.remove_class(HEADER_HIDDEN);
            } else {
                header.add_class(HEADER_HIDDEN);
            }
        });
    }
}

/// Open/close control for the nation dropdowns on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownControl {
    len: usize,
}

impl DropdownControl {
    pub fn new(document: &Element) -> Result<Self, WidgetError> {
        let len = document.elements_by_class(DROPDOWN_CONTENT).len();
        if len == 0 {
            return Err(WidgetError::MissingElement {
                widget: "DropdownControl",
                selector: selector(&[DROPDOWN_CONTENT]),
            });
        }
        Ok(Self { len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Toggles the `index`-th dropdown, returning whether it is now open.
    pub fn toggle(&self, document: &mut Element, index: usize) -> Result<bool, WidgetError> {
        let mut seen = 0;
        let mut open = None;
        document.for_each_matching_mut(&[DROPDOWN_CONTENT], &mut |content: &mut Element| {
            if seen == index {
                open = Some(content.toggle_class(DROPDOWN_OPEN));
            }
            seen += 1;
        });

        open.ok_or(WidgetError::NoSuchItem {
            widget: "DropdownControl",
            index,
            len: seen,
        })
    }
}

/// Widgets that initialised on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Widgets {
    pub headers: Vec<HeaderSwitcher>,
    pub dropdown: Option<DropdownControl>,
}

/// Initialises every widget the page supports.
///
/// Failures are logged and skipped.
pub fn bootstrap(document: &Element) -> Widgets {
    let mut widgets = Widgets::default();

    for kind in HeaderKind::ALL {
        match HeaderSwitcher::new(document, kind) {
            Ok(header) => widgets.headers.push(header),
            Err(e) => error!("{e}"),
        }
    }

    match DropdownControl::new(document) {
        Ok(dropdown) => widgets.dropdown = Some(dropdown),
        Err(e) => error!("{e}"),
    }

    info!(
        "Widgets ready: {} headers, dropdown {}",
        widgets.headers.len(),
        if widgets.dropdown.is_some() {
            "on"
        } else {
            "off"
        }
    );
    widgets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Element {
        Element::with_classes("body")
            .child(Element::with_classes("body__header header header--base"))
            .child(Element::with_classes("body__header header header--medium"))
            .child(
                Element::with_classes("profile")
                    .child(Element::with_classes("nation-dropdown__content"))
                    .child(Element::with_classes("nation-dropdown__content")),
            )
    }

    fn hidden(document: &Element, kind: HeaderKind) -> bool {
        document.select_all(&kind.classes())[0].has_class(HEADER_HIDDEN)
    }

    #[test]
    fn test_missing_header_does_not_block_others() {
        let widgets = bootstrap(&page());

        let kinds: Vec<HeaderKind> = widgets.headers.iter().map(HeaderSwitcher::kind).collect();
        assert_eq!(kinds, [HeaderKind::Base, HeaderKind::Medium]);
        assert_eq!(widgets.dropdown.map(|d| d.len()), Some(2));
    }

    #[test]
    fn test_missing_dropdown_is_reported() {
        let document = Element::with_classes("body")
            .child(Element::with_classes("body__header header header--large"));

        let widgets = bootstrap(&document);
        assert_eq!(widgets.headers.len(), 1);
        assert!(widgets.dropdown.is_none());
        assert_eq!(
            DropdownControl::new(&document),
            Err(WidgetError::MissingElement {
                widget: "DropdownControl",
                selector: ".nation-dropdown__content".to_owned(),
            })
        );
    }

    #[test]
    fn test_header_needs_every_class() {
        let document = Element::new().child(Element::with_classes("header header--large"));
        let err = HeaderSwitcher::new(&document, HeaderKind::Large).unwrap_err();
        assert_eq!(
            err.to_string(),
            "HeaderSwitcher: no element matches .body__header.header.header--large"
        );
    }

    #[test]
    fn test_activate_hides_other_headers() {
        let mut document = page();
        let medium = HeaderSwitcher::new(&document, HeaderKind::Medium).unwrap();

        medium.activate(&mut document);
        assert!(hidden(&document, HeaderKind::Base));
        assert!(!hidden(&document, HeaderKind::Medium));

        let base = HeaderSwitcher::new(&document, HeaderKind::Base).unwrap();
        base.activate(&mut document);
        assert!(!hidden(&document, HeaderKind::Base));
        assert!(hidden(&document, HeaderKind::Medium));
    }

    #[test]
    fn test_dropdown_toggle() {
        let mut document = page();
        let dropdown = DropdownControl::new(&document).unwrap();

        assert_eq!(dropdown.toggle(&mut document, 1), Ok(true));
        let contents = document.elements_by_class(DROPDOWN_CONTENT);
        assert!(!contents[0].has_class(DROPDOWN_OPEN));
        assert!(contents[1].has_class(DROPDOWN_OPEN));

        assert_eq!(dropdown.toggle(&mut document, 1), Ok(false));
        assert_eq!(
            dropdown.toggle(&mut document, 5),
            Err(WidgetError::NoSuchItem {
                widget: "DropdownControl",
                index: 5,
                len: 2,
            })
        );
    }
}
