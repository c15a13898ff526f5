use anyhow::Context;
use std::sync::Arc;
use tokio::sync::{mpsc::Sender, oneshot, watch};

mod core;
mod data;
pub mod message;

use crate::{ArcSlice, log::Log};
pub use data::{ListShow, PageLoader, RefreshHint, RefreshState};
use message::Message;

/// A paginated list of view entries, kept in memory and fed page by page by a
/// [`PageLoader`].
///
/// The list is owned by an actor. Construction requests the first page
/// immediately; afterwards the view drives it with [`refresh`] and
/// [`load_more`]. Two observable values are exposed: the [`RefreshState`] and
/// the current items. Both can be read at any time and watched for changes.
///
/// Every loaded item is turned into zero or more entries by the mapper, so the
/// list holds entries ready to render, in display order.
///
/// # Examples
/// ```ignore
/// let list = PagedList::spawn(api, illust_cards, log);
/// list.wait_settled().await;
/// for card in list.items().iter() {
///     println!("{card}");
/// }
/// list.load_more().await?;
/// ```
///
/// # Thread Safety
/// Cloning is cheap. The actor stops once every clone has been dropped, and an
/// operation still running at that point is abandoned.
///
/// [`refresh`]: PagedList::refresh
/// [`load_more`]: PagedList::load_more
#[derive(Debug)]
pub struct PagedList<E> {
    sender: Sender<Message>,
    state: watch::Receiver<RefreshState>,
    items: watch::Receiver<ArcSlice<E>>,
    /// Dropped with the last handle, which tells the actor to stop
    _alive: Arc<oneshot::Sender<()>>,
}

impl<E> Clone for PagedList<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
            items: self.items.clone(),
            _alive: self._alive.clone(),
        }
    }
}

impl<E> PagedList<E>
where
    E: Clone + Send + Sync + 'static,
{
    /// Spawns the list actor, which starts loading the first page right away
    /// with [`RefreshHint::InitialLoad`].
    ///
    /// # Arguments
    /// * `loader` - Fetches the first page (`None`) or the page at a cursor
    /// * `mapper` - Turns one loaded item into the entries to display for it
    /// * `log` - Receives the details of every failed load
    pub fn spawn<L, P, I, M>(loader: L, mapper: M, log: Log) -> Self
    where
        L: PageLoader<P>,
        P: ListShow<I> + Send + 'static,
        I: 'static,
        M: Fn(&I) -> Vec<E> + Send + Sync + 'static,
    {
        let (list, _) = self::core::Core::new(loader, mapper, log).spawn();
        list
    }

    /// Sends a command and waits until the actor has published its outcome.
    async fn command(&self, message: impl FnOnce(oneshot::Sender<()>) -> Message) -> anyhow::Result<()> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(message(tx))
            .await
            .context("Sending message to PagedList actor")?;
        rx.await.context("Awaiting response from PagedList actor")
    }

    /// Reloads the first page and replaces the item list with it.
    ///
    /// Resolves once the new state has been published. A failed load is not
    /// an error here: it shows up as [`RefreshState::Error`] and leaves the
    /// items untouched. An error is only returned if the actor is gone.
    pub async fn refresh(&self, hint: RefreshHint) -> anyhow::Result<()> {
        self.command(|tx| Message::Refresh { hint, tx }).await
    }

    /// Appends the next page to the item list.
    ///
    /// Does nothing when no next page is known. Otherwise behaves like
    /// [`refresh`](PagedList::refresh), except that new entries are appended.
    pub async fn load_more(&self) -> anyhow::Result<()> {
        self.command(|tx| Message::LoadMore { tx }).await
    }

    /// The current refresh state.
    pub fn state(&self) -> RefreshState {
        self.state.borrow().clone()
    }

    /// The current entries, in display order.
    pub fn items(&self) -> ArcSlice<E> {
        self.items.borrow().clone()
    }

    /// A receiver notified on every refresh state change from now on.
    pub fn subscribe_state(&self) -> watch::Receiver<RefreshState> {
        let mut state = self.state.clone();
        state.borrow_and_update();
        state
    }

    /// A receiver notified every time the item list changes from now on.
    pub fn subscribe_items(&self) -> watch::Receiver<ArcSlice<E>> {
        let mut items = self.items.clone();
        items.borrow_and_update();
        items
    }

    /// Waits until no load is in progress and returns the resulting state.
    ///
    /// Mostly useful right after [`spawn`](PagedList::spawn), to wait for the
    /// initial load.
    pub async fn wait_settled(&self) -> anyhow::Result<RefreshState> {
        let mut state = self.state.clone();
        let settled = state
            .wait_for(|state| !state.is_loading())
            .await
            .context("PagedList actor stopped while loading")?;
        Ok(settled.clone())
    }
}
