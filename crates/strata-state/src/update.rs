//! Partial site updates.

use strata_core::ItemUpdate;

/// A partial update of the top item at one site.
///
/// `count` mirrors the count attribute of a site: `Some(0)` sweeps the
/// whole pile off the site. Any other count is ignored, since the count of
/// a pile is its size.
///
/// # Examples
///
/// ```
/// use strata_core::ItemUpdate;
/// use strata_state::SiteUpdate;
///
/// let place = SiteUpdate::from(ItemUpdate::new(2, 1));
/// assert!(!place.clears());
/// assert!(SiteUpdate::sweep().clears());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SiteUpdate {
    /// Fields to change on the top item.
    pub item: ItemUpdate,
    /// Requested item count.
    pub count: Option<u32>,
}

impl SiteUpdate {
    /// An update that removes the whole pile.
    pub fn sweep() -> Self {
        Self {
            item: ItemUpdate::NONE,
            count: Some(0),
        }
    }

    /// Set the requested count.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Returns `true` if the update removes the whole pile.
    pub fn clears(&self) -> bool {
        self.count == Some(0)
    }
}

impl From<ItemUpdate> for SiteUpdate {
    fn from(item: ItemUpdate) -> Self {
        Self { item, count: None }
    }
}
