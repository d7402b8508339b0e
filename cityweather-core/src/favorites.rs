use crate::model::WeatherSnapshot;

/// Bookmarked snapshots in insertion order, unique by exact location name.
///
/// Lives for one session only. No removal.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    entries: Vec<WeatherSnapshot>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `snapshot` unless its location is already present.
    ///
    /// Returns `true` if it was inserted. Duplicates are ignored silently;
    /// the stored snapshot is not refreshed.
    pub fn add(&mut self, snapshot: WeatherSnapshot) -> bool {
        if self.contains(&snapshot.location_name) {
            return false;
        }
        self.entries.push(snapshot);
        true
    }

    pub fn list(&self) -> &[WeatherSnapshot] {
        &self.entries
    }

    /// Case-sensitive, as returned by the provider.
    pub fn contains(&self, location_name: &str) -> bool {
        self.entries.iter().any(|fav| fav.location_name == location_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
