use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config;
use crate::content::{ColorOption, Size};

/// Which FAQ entry is expanded. Only one can be open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FaqState {
    #[default]
    Closed,
    Open(usize),
}

impl FaqState {
    pub fn toggle(self, index: usize) -> Self {
        match self {
            FaqState::Open(open) if open == index => FaqState::Closed,
            _ => FaqState::Open(index),
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self == FaqState::Open(index)
    }
}

/// Interaction state owned by the landing page root.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageState {
    pub selected_color: ColorOption,
    pub selected_size: Size,
    pub active_faq: FaqState,
}

pub enum PageAction {
    SelectColor(ColorOption),
    SelectSize(Size),
    ToggleFaq(usize),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::SelectColor(color) => {
                debug!("Selected color {}", color.name());
                next.selected_color = color;
            }
            PageAction::SelectSize(size) => {
                debug!("Selected size {}", size.label());
                next.selected_size = size;
            }
            PageAction::ToggleFaq(index) => {
                next.active_faq = next.active_faq.toggle(index);
                debug!("FAQ now {:?}", next.active_faq);
            }
        }
        Rc::new(next)
    }
}

/// Navbar local state: scroll styling and the mobile menu.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub menu_open: bool,
}

pub enum NavbarAction {
    Scrolled(f64),
    ToggleMenu,
    // A link or the shop button was chosen.
    Navigated,
}

impl Reducible for NavbarState {
    type Action = NavbarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavbarAction::Scrolled(offset) => NavbarState {
                scrolled: is_scrolled(offset),
                ..(*self).clone()
            },
            NavbarAction::ToggleMenu => NavbarState {
                menu_open: !self.menu_open,
                ..(*self).clone()
            },
            NavbarAction::Navigated => NavbarState {
                menu_open: false,
                ..(*self).clone()
            },
        };
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::NAV_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;
    use proptest::prelude::*;
    use yew::Reducible;

    fn apply(state: PageState, action: PageAction) -> PageState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn nav(state: NavbarState, action: NavbarAction) -> NavbarState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn defaults_match_first_load() {
        let state = PageState::default();
        assert_eq!(state.selected_color, ColorOption::ALL[0]);
        assert_eq!(state.selected_size, Size::M);
        assert_eq!(state.active_faq, FaqState::Closed);
        assert_eq!(NavbarState::default(), NavbarState { scrolled: false, menu_open: false });
    }

    #[test]
    fn faq_transitions() {
        let open = FaqState::Closed.toggle(1);
        assert_eq!(open, FaqState::Open(1));
        assert_eq!(open.toggle(1), FaqState::Closed);
        assert_eq!(open.toggle(3), FaqState::Open(3));
        assert!(open.is_open(1));
        assert!(!open.is_open(0));
    }

    #[test]
    fn selecting_color_leaves_size_alone() {
        let state = apply(PageState::default(), PageAction::SelectSize(Size::XL));
        let state = apply(state, PageAction::SelectColor(ColorOption::Green));
        assert_eq!(state.selected_color, ColorOption::Green);
        assert_eq!(state.selected_size, Size::XL);
        let marked: Vec<_> = ColorOption::ALL
            .iter()
            .filter(|c| **c == state.selected_color)
            .collect();
        assert_eq!(marked.len(), 1);
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn menu_toggles_and_closes_on_navigation() {
        let state = nav(NavbarState::default(), NavbarAction::ToggleMenu);
        assert!(state.menu_open);
        let state = nav(state, NavbarAction::Scrolled(120.0));
        assert!(state.menu_open && state.scrolled);
        let state = nav(state, NavbarAction::Navigated);
        assert!(!state.menu_open);
        assert!(state.scrolled);
        let state = nav(state, NavbarAction::ToggleMenu);
        let state = nav(state, NavbarAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn unchanged_navbar_state_is_reused() {
        let state = Rc::new(NavbarState::default());
        let next = state.clone().reduce(NavbarAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn landing_walkthrough() {
        let mut navbar = NavbarState::default();
        let mut page = PageState::default();
        assert!(!navbar.scrolled);

        navbar = nav(navbar, NavbarAction::Scrolled(51.0));
        assert!(navbar.scrolled);

        page = apply(page, PageAction::ToggleFaq(2));
        assert_eq!(page.active_faq, FaqState::Open(2));
        assert_eq!((0..FAQS.len()).filter(|i| page.active_faq.is_open(*i)).count(), 1);

        page = apply(page, PageAction::ToggleFaq(2));
        assert_eq!(page.active_faq, FaqState::Closed);

        let swatch = ColorOption::ALL[3];
        page = apply(page, PageAction::SelectColor(swatch));
        assert_eq!(page.selected_color, swatch);
        assert_eq!(page.selected_size, Size::M);
    }

    proptest! {
        #[test]
        fn never_two_faqs_open(clicks in proptest::collection::vec(0usize..5, 0..40)) {
            let mut faq = FaqState::Closed;
            for index in clicks {
                let before = faq;
                faq = faq.toggle(index);
                match before {
                    FaqState::Open(open) if open == index => prop_assert_eq!(faq, FaqState::Closed),
                    _ => prop_assert_eq!(faq, FaqState::Open(index)),
                }
                prop_assert!((0..5).filter(|i| faq.is_open(*i)).count() <= 1);
            }
        }

        #[test]
        fn scrolled_iff_past_threshold(offset in -1000.0f64..10_000.0) {
            let state = nav(NavbarState::default(), NavbarAction::Scrolled(offset));
            prop_assert_eq!(state.scrolled, offset > 50.0);
        }

        #[test]
        fn exactly_one_size_selected(picks in proptest::collection::vec(0usize..4, 0..20)) {
            let mut page = PageState::default();
            for pick in picks {
                page = apply(page, PageAction::SelectSize(Size::ALL[pick]));
                prop_assert_eq!(page.selected_size, Size::ALL[pick]);
            }
            prop_assert_eq!(Size::ALL.iter().filter(|s| **s == page.selected_size).count(), 1);
        }
    }
}
