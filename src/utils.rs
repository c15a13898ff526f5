use std::{path::Path, sync::Arc};

/// Immutable, cheaply clonable string shared between actors.
pub type ArcStr = Arc<str>;

/// Immutable, cheaply clonable path shared between actors.
pub type ArcPath = Arc<Path>;

/// Immutable, cheaply clonable slice. Used to publish list snapshots to
/// observers without copying the entries.
pub type ArcSlice<T> = Arc<[T]>;

/// Treats an empty cursor the same as a missing one.
///
/// A cursor is only meaningful when it points somewhere, so `Some("")` is
/// collapsed into `None`.
pub fn non_empty(cursor: Option<&str>) -> Option<ArcStr> {
    cursor.filter(|c| !c.is_empty()).map(ArcStr::from)
}
