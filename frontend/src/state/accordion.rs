use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// Single-expand disclosure group: at most one entry is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionState {
    len: usize,
    expanded: Option<usize>,
}

pub enum AccordionAction {
    Activate(usize),
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Activate(index) if index >= self.len => self,
            AccordionAction::Activate(index) => {
                let expanded = if self.is_expanded(index) { None } else { Some(index) };
                debug!("FAQ accordion {:?} -> {:?}", self.expanded, expanded);
                Rc::new(Self { len: self.len, expanded })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activate(state: Rc<AccordionState>, index: usize) -> Rc<AccordionState> {
        state.reduce(AccordionAction::Activate(index))
    }

    #[test]
    fn starts_fully_collapsed() {
        let state = AccordionState::new(3);
        assert_eq!(state.expanded(), None);
        assert!((0..3).all(|i| !state.is_expanded(i)));
    }

    #[test]
    fn activating_closed_entry_expands_it() {
        let state = activate(Rc::new(AccordionState::new(3)), 1);
        assert_eq!(state.expanded(), Some(1));
    }

    #[test]
    fn activating_expanded_entry_collapses_it() {
        let state = activate(Rc::new(AccordionState::new(3)), 2);
        let state = activate(state, 2);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn opening_another_entry_collapses_the_previous_one() {
        let state = activate(Rc::new(AccordionState::new(3)), 0);
        let state = activate(state, 2);
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(0));
        assert_eq!((0..3).filter(|i| state.is_expanded(*i)).count(), 1);
    }

    #[test]
    fn out_of_range_activation_is_ignored() {
        let state = activate(Rc::new(AccordionState::new(3)), 1);
        let state = activate(state, 3);
        assert_eq!(state.expanded(), Some(1));
    }

    #[test]
    fn never_more_than_one_entry_open() {
        let mut state = Rc::new(AccordionState::new(3));
        for index in [0, 1, 1, 2, 0, 0, 2, 1] {
            state = activate(state, index);
            assert!((0..3).filter(|i| state.is_expanded(*i)).count() <= 1);
        }
    }
}
