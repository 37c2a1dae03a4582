use std::fmt::Display;
use std::rc::Rc;

use derive_more::{AsRef, Deref, Display as DeriveDisplay, From, Into};

use super::colorizer::HueWheel;
use super::quadrant::{Quadrant, Wedge};
use super::shadow::{ChangeError, ListChange, ShadowList};
use crate::config::{self, Colorizer, Settings};
use crate::geometry::Point;
use crate::theme::{Hue, WedgeColors};

#[derive(Debug, Clone, PartialEq, Eq, Hash, DeriveDisplay, Deref, From, Into, AsRef)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

/// Derived state for one menu item. Lives in the shadow list at the item's index.
#[derive(Debug, Clone)]
pub struct Entry<T> {
    /// Shared with the backing list; compared by identity, never by value.
    pub value: Rc<T>,
    pub label: Label,
    pub enabled: bool,
    pub hue: Hue,
    pub colors: WedgeColors,
    /// Set by the last completed layout pass.
    pub quadrant: Option<Quadrant>,
    pub wedge: Option<Wedge>,
}

impl<T: Display> Entry<T> {
    pub fn new(value: Rc<T>, label: Label, hue: Hue) -> Self {
        Self {
            value,
            label,
            enabled: true,
            hue,
            colors: WedgeColors::from_hue(hue),
            quadrant: None,
            wedge: None,
        }
    }

    /// The value's text may change while its identity does not.
    fn refresh_label(&mut self) {
        let text = self.value.to_string();
        if self.label != *text {
            self.label = Label::new(text);
        }
    }
}

/// Ordered menu items plus their derived entries.
///
/// Every mutation notifies the shadow list exactly once, before returning, so the two
/// never disagree about length or position.
pub struct PieMenu<T> {
    pub(super) items: Vec<Rc<T>>,
    pub(super) entries: ShadowList<Entry<T>>,
    pub(super) hues: HueWheel,
    pub(super) settings: Settings,
    pub(super) center: Point,
}

impl<T: Display> PieMenu<T> {
    pub fn new<I, V>(items: I, settings: Settings) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Rc<T>>,
    {
        let items: Vec<Rc<T>> = items.into_iter().map(Into::into).collect();
        let entries = ShadowList::new(items.len());

        Self {
            items,
            entries,
            hues: HueWheel::new(settings.colorizer, settings.hue_separation),
            settings,
            center: Point::default(),
        }
    }

    /// Settings from the config file and `PIE_MENU_*` environment, defaults on any problem.
    pub fn from_env<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Rc<T>>,
    {
        Self::new(items, config::load_or_default())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rc<T>> {
        self.items.get(index)
    }

    /// `None` until a layout pass has materialized the entry, and again after it was invalidated.
    pub fn entry(&self, index: usize) -> Option<&Entry<T>> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = Option<&Entry<T>>> {
        self.entries.iter()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn colorizer(&self) -> Colorizer {
        self.hues.colorizer()
    }

    /// Applies to entries materialized from now on; existing wedges keep their color.
    pub fn set_colorizer(&mut self, colorizer: Colorizer) {
        self.settings.colorizer = colorizer;
        self.hues.set_colorizer(colorizer);
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Moving the menu changes its bounds, so the next layout pass asks for a resize.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn push(&mut self, value: impl Into<Rc<T>>) {
        let index = self.items.len();
        self.items.push(value.into());
        self.notify(ListChange::added(index));
    }

    pub fn insert(&mut self, index: usize, value: impl Into<Rc<T>>) -> Result<(), ChangeError> {
        self.check_index(index, self.items.len() + 1)?;
        self.items.insert(index, value.into());
        self.notify(ListChange::added(index));
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Rc<T>, ChangeError> {
        self.check_index(index, self.items.len())?;
        let value = self.items.remove(index);
        self.notify(ListChange::removed(index));
        Ok(value)
    }

    /// Puts a different value at `index`; its entry is rebuilt on the next pass.
    pub fn replace(&mut self, index: usize, value: impl Into<Rc<T>>) -> Result<Rc<T>, ChangeError> {
        self.check_index(index, self.items.len())?;
        let old = std::mem::replace(&mut self.items[index], value.into());
        self.notify(ListChange::changed(index));
        Ok(old)
    }

    /// Same value, but its derived state (color included) is recomputed on the next pass.
    pub fn invalidate(&mut self, index: usize) -> Result<(), ChangeError> {
        self.check_index(index, self.items.len())?;
        self.notify(ListChange::changed(index));
        Ok(())
    }

    fn check_index(&self, index: usize, limit: usize) -> Result<(), ChangeError> {
        if index < limit {
            Ok(())
        } else {
            Err(ChangeError::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    fn notify(&mut self, change: ListChange) {
        // single-index and range-checked above, so only a length mismatch can fail and that panics
        if let Err(e) = self.entries.react(change, self.items.len()) {
            unreachable!("menu produced an invalid change {:?}: {}", change, e);
        }
    }

    /// Builds missing entries and refreshes labels of the cached ones.
    pub(super) fn refresh_entries(&mut self) {
        let total = self.items.len();

        for (index, value) in self.items.iter().enumerate() {
            match self.entries.get_mut(index) {
                Some(entry) => {
                    assert!(
                        Rc::ptr_eq(&entry.value, value),
                        "entry {} no longer describes the item at its index",
                        index
                    );
                    entry.refresh_label();
                }
                None => {
                    let label = Label::new(value.to_string());
                    let hue = self.hues.next_hue(&label, total);
                    self.entries.set(index, Entry::new(Rc::clone(value), label, hue));
                }
            }
        }
    }
}
