use std::{marker::PhantomData, sync::Arc};

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};

use super::data::{ListShow, PageLoader, RefreshHint, RefreshState};
use super::message::Message;
use crate::{ArcSlice, ArcStr, log::Log, utils::non_empty};

/// The actor behind a [`PagedList`](super::PagedList).
///
/// Owns the page cursor and publishes the refresh state and the item list
/// through `watch` channels. Operations run one at a time, in the order they
/// were requested, so a load-more queued behind a refresh always sees the
/// refreshed cursor.
pub struct Core<L, P, I, E, M> {
    loader: L,
    mapper: M,
    log: Log,
    /// Cursor of the next page; `None` exactly when no next page is known
    cursor: Option<ArcStr>,
    state: watch::Sender<RefreshState>,
    items: watch::Sender<ArcSlice<E>>,
    _page: PhantomData<fn() -> (P, I)>,
}

impl<L, P, I, E, M> Core<L, P, I, E, M>
where
    L: PageLoader<P>,
    P: ListShow<I> + Send + 'static,
    I: 'static,
    E: Clone + Send + Sync + 'static,
    M: Fn(&I) -> Vec<E> + Send + Sync + 'static,
{
    pub fn new(loader: L, mapper: M, log: Log) -> Self {
        let (state, _) = watch::channel(RefreshState::Loading {
            hint: RefreshHint::InitialLoad,
        });
        let (items, _) = watch::channel(ArcSlice::from(Vec::new()));

        Self {
            loader,
            mapper,
            log,
            cursor: None,
            state,
            items,
            _page: PhantomData,
        }
    }

    /// Transforms the core into an actor. The first page is requested right
    /// away, before any message is handled.
    ///
    /// The actor stops once every handle is gone. An operation still in
    /// flight at that point is abandoned and its result dropped.
    pub fn spawn(mut self) -> (super::PagedList<E>, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel(32);
        let (alive, mut closed) = oneshot::channel::<()>();

        let list = super::PagedList {
            sender: tx,
            state: self.state.subscribe(),
            items: self.items.subscribe(),
            _alive: Arc::new(alive),
        };

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = self.refresh(RefreshHint::InitialLoad) => {}
                _ = &mut closed => return,
            }

            while let Some(message) = rx.recv().await {
                tokio::select! {
                    _ = self.handle(message) => {}
                    _ = &mut closed => return,
                }
            }
        });

        (list, handle)
    }

    async fn handle(&mut self, message: Message) {
        match message {
            Message::Refresh { hint, tx } => {
                self.refresh(hint).await;
                let _ = tx.send(());
            }
            Message::LoadMore { tx } => {
                self.load_more().await;
                let _ = tx.send(());
            }
        }
    }

    /// Reloads the first page and replaces the whole item list with it.
    async fn refresh(&mut self, hint: RefreshHint) {
        self.loading(hint);

        match self.fetch(None).await {
            Ok((entries, next)) => {
                self.items.send_replace(ArcSlice::from(entries));
                self.loaded(next);
            }
            Err(err) => self.failed("refresh", err),
        }
    }

    /// Appends the page at the stored cursor. Without a cursor there is
    /// nothing to load and nothing changes.
    async fn load_more(&mut self) {
        let Some(cursor) = self.cursor.clone() else {
            return;
        };

        self.loading(RefreshHint::LoadMore);

        match self.fetch(Some(cursor)).await {
            Ok((entries, next)) => {
                if !entries.is_empty() {
                    let items: ArcSlice<E> =
                        self.items.borrow().iter().cloned().chain(entries).collect();
                    self.items.send_replace(items);
                }
                self.loaded(next);
            }
            Err(err) => self.failed("load more", err),
        }
    }

    /// Loads one page and maps its items to view entries. Nothing is
    /// published here, so a failure leaves every observable untouched.
    async fn fetch(&self, cursor: Option<ArcStr>) -> anyhow::Result<(Vec<E>, Option<ArcStr>)> {
        let page = self.loader.load(cursor).await?;
        let entries = page
            .display_list()
            .iter()
            .flat_map(|item| (self.mapper)(item))
            .collect();

        Ok((entries, non_empty(page.next_page_url())))
    }

    /// Publishes `Loading { hint }` unless observers already see exactly that,
    /// as they do before the initial load.
    fn loading(&mut self, hint: RefreshHint) {
        self.state.send_if_modified(|state| match state {
            RefreshState::Loading { hint: current } if *current == hint => false,
            _ => {
                *state = RefreshState::Loading { hint };
                true
            }
        });
    }

    fn loaded(&mut self, next: Option<ArcStr>) {
        self.cursor = next;
        self.state.send_replace(RefreshState::Loaded {
            has_next: self.cursor.is_some(),
        });
    }

    fn failed(&mut self, operation: &str, err: anyhow::Error) {
        self.log.error("list", format!("{operation} failed: {err:#}"));
        self.state.send_replace(RefreshState::Error {
            cause: Arc::new(err),
        });
    }
}
