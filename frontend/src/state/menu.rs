use std::rc::Rc;

use log::debug;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

pub enum MenuAction {
    /// Burger button press.
    Toggle,
    /// A link inside the menu was activated.
    Navigate,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => match *self {
                MenuState::Closed => MenuState::Open,
                MenuState::Open => MenuState::Closed,
            },
            MenuAction::Navigate => MenuState::Closed,
        };
        debug!("Mobile menu {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;

    fn apply(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips_state() {
        let opened = apply(MenuState::Closed, MenuAction::Toggle);
        assert_eq!(opened, MenuState::Open);
        assert_eq!(apply(opened, MenuAction::Toggle), MenuState::Closed);
    }

    #[test]
    fn navigating_from_open_menu_closes_it_for_every_link() {
        for item in NAV_ITEMS.iter() {
            let state = apply(MenuState::Closed, MenuAction::Toggle);
            assert_eq!(apply(state, MenuAction::Navigate), MenuState::Closed, "link {}", item.label);
        }
    }

    #[test]
    fn navigating_with_closed_menu_keeps_it_closed() {
        assert_eq!(apply(MenuState::Closed, MenuAction::Navigate), MenuState::Closed);
    }
}
