use tokio::sync::oneshot::Sender;

use super::data::IllustResponse;
use crate::ArcStr;

/// Messages that can be sent to the [`IllustApi`](super::IllustApi) actor.
#[derive(Debug)]
pub enum Message {
    /// Fetches the first page (`cursor` is `None`) or the page at `cursor`
    GetPage {
        cursor: Option<ArcStr>,
        tx: Sender<anyhow::Result<IllustResponse>>,
    },
}
