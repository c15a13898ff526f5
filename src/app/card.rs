use std::fmt::Display;

use crate::{ArcStr, api::pixiv::{Illust, IllustKind}};

/// A feed entry ready to be rendered: everything a list row shows about one
/// illustration, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllustCard {
    pub id: u64,
    pub title: ArcStr,
    pub author: ArcStr,
    /// Short label for the kind of work, with the page count for multi page works
    pub badge: Option<String>,
    pub bookmarks: u64,
    pub thumbnail: Option<ArcStr>,
    pub tags: Vec<ArcStr>,
}

/// Maps an illustration to the cards shown for it.
///
/// Works hidden from the viewer produce no card at all.
pub fn illust_cards(illust: &Illust) -> Vec<IllustCard> {
    if !illust.visible {
        return Vec::new();
    }

    let badge = match (illust.kind, illust.page_count) {
        (IllustKind::Illust, 0 | 1) => None,
        (IllustKind::Illust, pages) => Some(format!("{pages}P")),
        (IllustKind::Manga, 0 | 1) => Some("manga".to_string()),
        (IllustKind::Manga, pages) => Some(format!("manga {pages}P")),
        (IllustKind::Ugoira, _) => Some("ugoira".to_string()),
    };

    let tags = illust
        .tags
        .iter()
        .map(|tag| tag.translated_name.clone().unwrap_or_else(|| tag.name.clone()))
        .collect();

    vec![IllustCard {
        id: illust.id,
        title: illust.title.clone(),
        author: illust.user.name.clone(),
        badge,
        bookmarks: illust.total_bookmarks,
        thumbnail: illust
            .image_urls
            .square_medium
            .clone()
            .or_else(|| illust.image_urls.medium.clone()),
        tags,
    }]
}

impl Display for IllustCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} by {}", self.id, self.title, self.author)?;
        if let Some(badge) = &self.badge {
            write!(f, " [{badge}]")?;
        }
        write!(f, " ♥{}", self.bookmarks)?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(|t| &**t).collect();
            write!(f, " ({})", tags.join(", "))?;
        }
        Ok(())
    }
}
