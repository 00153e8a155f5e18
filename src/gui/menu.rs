//! Base Menu Component
//!
//! Provides the selection cursor shared by every menu screen: cyclic
//! keyboard navigation over a fixed range of draw-list indices, and the
//! recoloring that makes the selected row stand out.

use crate::node::Element;
use sdl2::pixels::Color;

/// Configuration for menu appearance
#[derive(Debug, Clone, Copy)]
pub struct MenuStyle {
    /// Normal item text color
    pub item_color: Color,

    /// Selected item text color
    pub selected_item_color: Color,

    /// Non-selectable hint text color
    pub hint_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            item_color: Color::RGB(255, 255, 255),
            selected_item_color: Color::RGB(230, 230, 0),
            hint_color: Color::RGB(160, 160, 170),
        }
    }
}

/// Which rows changed color after a selection move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: usize,
    pub current: usize,
}

/// A cursor over the selectable rows `first..=last` of a draw list
///
/// # Example
///
/// ```ignore
/// let mut cursor = MenuCursor::new(1, 3);
///
/// // Navigate (wraps from 1 to 3)
/// if let Some(change) = cursor.select_previous() {
///     MenuCursor::apply(&mut elements, change, &style);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MenuCursor {
    selected: usize,
    first: usize,
    last: usize,
}

impl MenuCursor {
    /// Creates a cursor on the first selectable row
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last);
        MenuCursor {
            selected: first,
            first,
            last,
        }
    }

    /// Get currently selected index
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) -> Option<SelectionChange> {
        let index = if self.selected == self.first {
            self.last
        } else {
            self.selected - 1
        };
        self.select(index)
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) -> Option<SelectionChange> {
        let index = if self.selected == self.last {
            self.first
        } else {
            self.selected + 1
        };
        self.select(index)
    }

    /// Selects an explicit row; `None` if it is outside the selectable range
    pub fn select(&mut self, index: usize) -> Option<SelectionChange> {
        (self.first..=self.last)
            .contains(&index)
            .then(|| self.move_to(index))
    }

    /// Recolors rows so only the current selection is highlighted
    pub fn apply(elements: &mut [Element], change: SelectionChange, style: &MenuStyle) {
        if let Some(text) = elements.get_mut(change.previous).and_then(Element::as_text_mut) {
            text.set_color(style.item_color);
        }
        if let Some(text) = elements.get_mut(change.current).and_then(Element::as_text_mut) {
            text.set_color(style.selected_item_color);
        }
    }

    /// Colors every selectable row for the current selection
    pub fn highlight_all(&self, elements: &mut [Element], style: &MenuStyle) {
        for index in self.first..=self.last {
            let color = if index == self.selected {
                style.selected_item_color
            } else {
                style.item_color
            };
            if let Some(text) = elements.get_mut(index).and_then(Element::as_text_mut) {
                if text.color() != color {
                    text.set_color(color);
                }
            }
        }
    }

    fn move_to(&mut self, index: usize) -> SelectionChange {
        let change = SelectionChange {
            previous: self.selected,
            current: index,
        };
        self.selected = index;
        log::debug!("Menu selection {} -> {}", change.previous, change.current);
        change
    }
}
