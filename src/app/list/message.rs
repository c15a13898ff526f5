use tokio::sync::oneshot::Sender;

use super::data::RefreshHint;

/// Messages that can be sent to a [`PagedList`](super::PagedList) actor.
///
/// `tx` is fired once the operation's final state has been published.
#[derive(Debug)]
pub enum Message {
    /// Reloads the first page, replacing the item list
    Refresh { hint: RefreshHint, tx: Sender<()> },
    /// Appends the page at the stored cursor, if there is one
    LoadMore { tx: Sender<()> },
}
