//! The home menu: a selection reducer over a fixed list of links.

use crate::domain::{
    cue::Cue,
    route::{Destination, Route},
};

/// A single home menu entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Item {
    pub label: &'static str,
    pub destination: Destination,
    /// Button artwork shown for the entry.
    pub art: &'static str,
}

pub const ITEMS: [Item; 4] = [
    Item {
        label: "CONJURE",
        destination: Destination::Page(Route::Conjure),
        art: "BUTTON1_CONJURE.svg",
    },
    Item {
        label: "ABOUT",
        destination: Destination::Page(Route::About),
        art: "BUTTON2_ABOUT.svg",
    },
    Item {
        label: "CHECK ELIGIBILITY",
        destination: Destination::Page(Route::CheckEligibility),
        art: "BUTTON3_CHECK ELIGIBILITY.svg",
    },
    Item {
        label: "SUDOSIX",
        destination: Destination::External("https://x.com/sudosix"),
        art: "BUTTON4_SUDOSIX.svg",
    },
];

/// Input driving the menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Input {
    Down,
    Up,
    Enter,
    /// The pointer entered the item at the given index.
    HoverEnter(usize),
    /// The pointer moved anywhere over the menu.
    MouseMove,
    /// The pointer left the menu.
    HoverLeave,
    Click(usize),
}

/// Side effects requested by a menu transition.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Outcome {
    pub cue: Option<Cue>,
    pub navigate: Option<Destination>,
}

#[derive(Clone, Debug, Default)]
pub struct Menu {
    selected: Option<usize>,
    hovered: Option<usize>,
    keyboard: bool,
}

impl Menu {
    pub fn items(&self) -> &'static [Item] {
        &ITEMS
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The item drawn with the cursor markers. Keyboard navigation wins over
    /// a stale hover; otherwise the hovered item takes precedence.
    pub fn active(&self) -> Option<usize> {
        if self.keyboard {
            self.selected
        } else {
            self.hovered.or(self.selected)
        }
    }

    pub fn apply(&mut self, input: Input) -> Outcome {
        let len = ITEMS.len();
        match input {
            Input::Down => {
                self.keyboard = true;
                self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
                Outcome {
                    cue: Some(Cue::OptionSelection),
                    navigate: None,
                }
            }
            Input::Up => {
                self.keyboard = true;
                self.selected = Some(self.selected.map_or(len - 1, |i| (i + len - 1) % len));
                Outcome {
                    cue: Some(Cue::OptionSelection),
                    navigate: None,
                }
            }
            Input::Enter => match self.selected {
                Some(index) => Outcome {
                    cue: Some(Cue::Enter),
                    navigate: Some(ITEMS[index].destination),
                },
                None => Outcome::default(),
            },
            Input::HoverEnter(index) if index < len => {
                self.keyboard = false;
                let changed = self.hovered != Some(index);
                self.hovered = Some(index);
                Outcome {
                    cue: changed.then_some(Cue::OptionSelection),
                    navigate: None,
                }
            }
            Input::MouseMove => {
                self.keyboard = false;
                Outcome::default()
            }
            Input::HoverLeave => {
                self.hovered = None;
                Outcome::default()
            }
            Input::Click(index) if index < len => Outcome {
                cue: Some(Cue::Enter),
                navigate: Some(ITEMS[index].destination),
            },
            Input::HoverEnter(_) | Input::Click(_) => Outcome::default(),
        }
    }
}
