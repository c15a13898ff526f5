use std::{fmt::Display, future::Future, sync::Arc};

use crate::ArcStr;

/// Why a load was started. Carried into [`RefreshState::Loading`] so the view
/// can pick the right indicator (full screen spinner vs. footer spinner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshHint {
    /// First page, replacing whatever is shown
    InitialLoad,
    /// Next page, appended to what is shown
    LoadMore,
}

/// Loading state of a [`PagedList`](super::PagedList), published to observers
/// on every change.
#[derive(Debug, Clone)]
pub enum RefreshState {
    Loading { hint: RefreshHint },
    Loaded { has_next: bool },
    /// The last operation failed. The item list is left as it was before.
    Error { cause: Arc<anyhow::Error> },
}

impl RefreshState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Whether another page is known to exist. Only a successful load knows.
    pub fn has_next(&self) -> bool {
        matches!(self, Self::Loaded { has_next: true })
    }
}

impl Display for RefreshState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading {
                hint: RefreshHint::InitialLoad,
            } => write!(f, "loading"),
            Self::Loading {
                hint: RefreshHint::LoadMore,
            } => write!(f, "loading more"),
            Self::Loaded { has_next: true } => write!(f, "loaded, more available"),
            Self::Loaded { has_next: false } => write!(f, "loaded, end of list"),
            Self::Error { cause } => write!(f, "error: {cause:#}"),
        }
    }
}

/// A page of a paginated collection: the items to display, in order, and the
/// cursor of the next page.
pub trait ListShow<Item> {
    fn display_list(&self) -> &[Item];

    /// Cursor of the next page. `None` or an empty string both mean this is
    /// the last page.
    fn next_page_url(&self) -> Option<&str>;
}

/// Fetches pages of a paginated collection.
///
/// `None` asks for the first page, `Some(cursor)` for the page a previous
/// [`ListShow::next_page_url`] pointed at. Any async closure with the same
/// shape is a loader.
pub trait PageLoader<P>: Send + Sync + 'static {
    fn load(&self, cursor: Option<ArcStr>) -> impl Future<Output = anyhow::Result<P>> + Send;
}

impl<P, F, Fut> PageLoader<P> for F
where
    F: Fn(Option<ArcStr>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<P>> + Send,
{
    fn load(&self, cursor: Option<ArcStr>) -> impl Future<Output = anyhow::Result<P>> + Send {
        self(cursor)
    }
}
