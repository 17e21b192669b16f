use serde::{Deserialize, Serialize};

/// Fixed photo categories used by the gallery filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoCategory {
    #[serde(rename = "équipe")]
    Team,
    #[serde(rename = "entraînement")]
    Training,
    #[serde(rename = "match")]
    Match,
    #[serde(rename = "événement")]
    Event,
}

impl PhotoCategory {
    pub const ALL: [PhotoCategory; 4] = [
        PhotoCategory::Team,
        PhotoCategory::Training,
        PhotoCategory::Match,
        PhotoCategory::Event,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PhotoCategory::Team => "Équipe",
            PhotoCategory::Training => "Entraînement",
            PhotoCategory::Match => "Match",
            PhotoCategory::Event => "Événement",
        }
    }
}

/// A gallery photo. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
    #[serde(rename = "url_image")]
    pub image_url: String,
    #[serde(rename = "categorie")]
    pub category: PhotoCategory,
    #[serde(rename = "date_prise")]
    pub taken_on: Option<String>,
}

/// Gallery filter: the sentinel "all" or one fixed category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Category(PhotoCategory),
}

impl GalleryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            GalleryFilter::All => "Toutes",
            GalleryFilter::Category(category) => category.label(),
        }
    }

    /// Cycle order used by the gallery filter bar.
    pub fn next(&self) -> Self {
        match self {
            GalleryFilter::All => GalleryFilter::Category(PhotoCategory::Team),
            GalleryFilter::Category(PhotoCategory::Team) => {
                GalleryFilter::Category(PhotoCategory::Training)
            }
            GalleryFilter::Category(PhotoCategory::Training) => {
                GalleryFilter::Category(PhotoCategory::Match)
            }
            GalleryFilter::Category(PhotoCategory::Match) => {
                GalleryFilter::Category(PhotoCategory::Event)
            }
            GalleryFilter::Category(PhotoCategory::Event) => GalleryFilter::All,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            GalleryFilter::All => GalleryFilter::Category(PhotoCategory::Event),
            GalleryFilter::Category(PhotoCategory::Team) => GalleryFilter::All,
            GalleryFilter::Category(PhotoCategory::Training) => {
                GalleryFilter::Category(PhotoCategory::Team)
            }
            GalleryFilter::Category(PhotoCategory::Match) => {
                GalleryFilter::Category(PhotoCategory::Training)
            }
            GalleryFilter::Category(PhotoCategory::Event) => {
                GalleryFilter::Category(PhotoCategory::Match)
            }
        }
    }
}

/// Photos matching the filter. `All` yields the full set; a category yields
/// the equal-category subset, possibly empty. Pure relative to `photos`.
pub fn filter_photos<'a>(photos: &'a [Photo], filter: GalleryFilter) -> Vec<&'a Photo> {
    match filter {
        GalleryFilter::All => photos.iter().collect(),
        GalleryFilter::Category(category) => {
            photos.iter().filter(|p| p.category == category).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, category: PhotoCategory) -> Photo {
        Photo {
            id: id.to_string(),
            title: format!("Photo {id}"),
            description: String::new(),
            image_url: format!("https://example.com/{id}.jpg"),
            category,
            taken_on: None,
        }
    }

    #[test]
    fn test_filter_all_returns_every_photo() {
        let photos = vec![
            photo("1", PhotoCategory::Team),
            photo("2", PhotoCategory::Match),
            photo("3", PhotoCategory::Training),
        ];

        let visible = filter_photos(&photos, GalleryFilter::All);
        assert_eq!(visible.len(), photos.len());
    }

    #[test]
    fn test_filter_by_category_returns_matching_subset() {
        let photos = vec![
            photo("1", PhotoCategory::Team),
            photo("2", PhotoCategory::Match),
            photo("3", PhotoCategory::Team),
        ];

        let visible = filter_photos(&photos, GalleryFilter::Category(PhotoCategory::Team));
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == PhotoCategory::Team));
    }

    #[test]
    fn test_filter_with_no_match_is_empty_not_an_error() {
        let photos = vec![photo("1", PhotoCategory::Team)];

        let visible = filter_photos(&photos, GalleryFilter::Category(PhotoCategory::Event));
        assert!(visible.is_empty());

        let visible = filter_photos(&[], GalleryFilter::Category(PhotoCategory::Match));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_cycle_wraps_through_all_categories() {
        let mut filter = GalleryFilter::All;
        for _ in 0..PhotoCategory::ALL.len() + 1 {
            filter = filter.next();
        }
        assert_eq!(filter, GalleryFilter::All);
        assert_eq!(GalleryFilter::All.prev().next(), GalleryFilter::All);
    }
}
