use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{ArcStr, app::list::ListShow};

/// Kind of work an illustration entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IllustKind {
    #[default]
    Illust,
    Manga,
    Ugoira,
}

/// Author of an illustration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustUser {
    pub id: u64,
    pub name: ArcStr,
    pub account: ArcStr,
    #[serde(default)]
    pub is_followed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustTag {
    pub name: ArcStr,
    #[serde(default)]
    pub translated_name: Option<ArcStr>,
}

/// Preview images of an illustration, from smallest to largest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageUrls {
    #[serde(default)]
    pub square_medium: Option<ArcStr>,
    #[serde(default)]
    pub medium: Option<ArcStr>,
    #[serde(default)]
    pub large: Option<ArcStr>,
}

/// One illustration of a feed, as returned by the app API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Illust {
    pub id: u64,
    pub title: ArcStr,
    #[serde(rename = "type", default)]
    pub kind: IllustKind,
    #[serde(default)]
    pub caption: ArcStr,
    pub user: IllustUser,
    #[serde(default)]
    pub tags: Vec<IllustTag>,
    #[serde(default)]
    pub image_urls: ImageUrls,
    pub create_date: DateTime<FixedOffset>,
    #[serde(default = "one")]
    pub page_count: u32,
    #[serde(default)]
    pub total_bookmarks: u64,
    #[serde(default)]
    pub total_view: u64,
    #[serde(default)]
    pub is_bookmarked: bool,
    /// False for works hidden from the current viewer (deleted, restricted, ...)
    #[serde(default = "visible")]
    pub visible: bool,
}

fn one() -> u32 {
    1
}

fn visible() -> bool {
    true
}

/// A page of an illustration feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustResponse {
    pub illusts: Vec<Illust>,
    /// Absolute URL of the next page
    #[serde(default)]
    pub next_url: Option<ArcStr>,
}

impl ListShow<Illust> for IllustResponse {
    fn display_list(&self) -> &[Illust] {
        &self.illusts
    }

    fn next_page_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }
}
