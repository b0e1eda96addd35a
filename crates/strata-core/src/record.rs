//! Item records, their fields, and partial updates.

use std::fmt;

/// One integer attribute of an [`ItemRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Item (piece type) id. `0` means no item.
    What,
    /// Owner id. `0` means neutral.
    Who,
    /// Auxiliary sub-state id.
    State,
    /// Orientation id.
    Rotation,
    /// Numeric tag (e.g. card rank).
    Value,
}

impl Field {
    /// Number of fields in a record.
    pub const COUNT: usize = 5;

    /// All fields, in storage order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::What,
        Field::Who,
        Field::State,
        Field::Rotation,
        Field::Value,
    ];

    /// Dense index of this field in [`Field::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::What => 0,
            Self::Who => 1,
            Self::State => 2,
            Self::Rotation => 3,
            Self::Value => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::What => "what",
            Self::Who => "who",
            Self::State => "state",
            Self::Rotation => "rotation",
            Self::Value => "value",
        };
        f.write_str(name)
    }
}

/// Aspects of an item that can be concealed from a player.
///
/// [`HiddenField::Site`] hides the presence of the item itself; the other
/// variants hide one attribute while the item stays visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HiddenField {
    /// The whole item.
    Site,
    /// The item id.
    What,
    /// The owner.
    Who,
    /// The pile height.
    Count,
    /// The sub-state.
    State,
    /// The orientation.
    Rotation,
    /// The numeric tag.
    Value,
}

impl HiddenField {
    /// Number of hidden-flag layers.
    pub const COUNT: usize = 7;

    /// All hidden-flag layers, in storage order.
    pub const ALL: [HiddenField; HiddenField::COUNT] = [
        HiddenField::Site,
        HiddenField::What,
        HiddenField::Who,
        HiddenField::Count,
        HiddenField::State,
        HiddenField::Rotation,
        HiddenField::Value,
    ];

    /// Dense index of this layer in [`HiddenField::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Site => 0,
            Self::What => 1,
            Self::Who => 2,
            Self::Count => 3,
            Self::State => 4,
            Self::Rotation => 5,
            Self::Value => 6,
        }
    }

    /// Single-bit mask for this layer within a per-level hidden byte.
    pub fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl From<Field> for HiddenField {
    fn from(field: Field) -> Self {
        match field {
            Field::What => Self::What,
            Field::Who => Self::Who,
            Field::State => Self::State,
            Field::Rotation => Self::Rotation,
            Field::Value => Self::Value,
        }
    }
}

/// The attributes of one physical item at one level of a pile.
///
/// The all-zero record is the absent item: it is what reads return for
/// empty levels and never-written sites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemRecord {
    /// Item id (`0` = absent).
    pub what: u32,
    /// Owner id (`0` = neutral).
    pub who: u32,
    /// Sub-state id.
    pub state: u32,
    /// Orientation id.
    pub rotation: u32,
    /// Numeric tag.
    pub value: u32,
}

impl ItemRecord {
    /// The absent item.
    pub const EMPTY: ItemRecord = ItemRecord {
        what: 0,
        who: 0,
        state: 0,
        rotation: 0,
        value: 0,
    };

    /// A record with the given item and owner; other fields zero.
    pub fn new(what: u32, who: u32) -> Self {
        Self {
            what,
            who,
            ..Self::EMPTY
        }
    }

    /// Read one field.
    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::What => self.what,
            Field::Who => self.who,
            Field::State => self.state,
            Field::Rotation => self.rotation,
            Field::Value => self.value,
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: Field, value: u32) {
        match field {
            Field::What => self.what = value,
            Field::Who => self.who = value,
            Field::State => self.state = value,
            Field::Rotation => self.rotation = value,
            Field::Value => self.value = value,
        }
    }

    /// Returns `true` if no item is present.
    pub fn is_absent(&self) -> bool {
        self.what == 0
    }
}

/// A partial item record: `None` fields are left unchanged.
///
/// Used by push/insert (where unchanged means zero on a fresh level) and by
/// top-of-pile updates.
///
/// # Examples
///
/// ```
/// use strata_core::{Field, ItemUpdate};
///
/// let update = ItemUpdate::new(3, 1).rotation(2);
/// assert_eq!(update.get(Field::What), Some(3));
/// assert_eq!(update.get(Field::Rotation), Some(2));
/// assert_eq!(update.get(Field::State), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemUpdate {
    /// New item id, if changing.
    pub what: Option<u32>,
    /// New owner, if changing.
    pub who: Option<u32>,
    /// New sub-state, if changing.
    pub state: Option<u32>,
    /// New orientation, if changing.
    pub rotation: Option<u32>,
    /// New numeric tag, if changing.
    pub value: Option<u32>,
}

impl ItemUpdate {
    /// An update that changes nothing.
    pub const NONE: ItemUpdate = ItemUpdate {
        what: None,
        who: None,
        state: None,
        rotation: None,
        value: None,
    };

    /// An update setting the item and owner.
    pub fn new(what: u32, who: u32) -> Self {
        Self {
            what: Some(what),
            who: Some(who),
            ..Self::NONE
        }
    }

    /// Set the item id.
    pub fn what(mut self, what: u32) -> Self {
        self.what = Some(what);
        self
    }

    /// Set the owner.
    pub fn who(mut self, who: u32) -> Self {
        self.who = Some(who);
        self
    }

    /// Set the sub-state.
    pub fn state(mut self, state: u32) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the orientation.
    pub fn rotation(mut self, rotation: u32) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Set the numeric tag.
    pub fn value(mut self, value: u32) -> Self {
        self.value = Some(value);
        self
    }

    /// The requested value for one field.
    pub fn get(&self, field: Field) -> Option<u32> {
        match field {
            Field::What => self.what,
            Field::Who => self.who,
            Field::State => self.state,
            Field::Rotation => self.rotation,
            Field::Value => self.value,
        }
    }

    /// Iterate over the fields this update changes.
    pub fn fields(&self) -> impl Iterator<Item = (Field, u32)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }

    /// Returns `true` if the update changes nothing.
    pub fn is_noop(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Apply the update on top of `base`.
    pub fn apply_to(&self, mut base: ItemRecord) -> ItemRecord {
        for (field, value) in self.fields() {
            base.set(field, value);
        }
        base
    }
}

impl From<ItemRecord> for ItemUpdate {
    fn from(r: ItemRecord) -> Self {
        Self {
            what: Some(r.what),
            who: Some(r.who),
            state: Some(r.state),
            rotation: Some(r.rotation),
            value: Some(r.value),
        }
    }
}
