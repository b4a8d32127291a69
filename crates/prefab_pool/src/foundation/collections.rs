//! Specialized collection types

pub use slotmap::{SlotMap, Key};

slotmap::new_key_type! {
    /// Stable handle to an object stored in a [`HandleMap`]
    ///
    /// Handles are generational: once the object is removed the handle
    /// stays invalid even if the slot is reused.
    pub struct ObjectId;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<ObjectId, T>;
