//! Selection records: a chosen region joined back to display names.

use serde::Serialize;

use crate::core::comparison::PlaylistSets;
use crate::core::playlist::Playlist;
use crate::core::types::PlaylistId;
use crate::engine::sets::intersection_size;

/// Joiner placed between playlist names in an intersection label:
/// the mathematical intersection sign, U+2229.
pub const INTERSECTION_JOINER: &str = " ∩ ";

/// A region the caller is inspecting: participating ids, a human-readable
/// label, and the intersection size. Transient; rebuilt on every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub playlist_ids: Vec<PlaylistId>,
    pub label: String,
    pub size: usize,
}

/// Join display names with the intersection symbol, in the order given.
#[must_use]
pub fn intersection_label<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().collect::<Vec<_>>().join(INTERSECTION_JOINER)
}

/// Build a [`Selection`] for a group of playlist ids.
///
/// The label uses the display names of the ids that exist in `playlists`,
/// in the order given; unknown ids contribute nothing to the label and an
/// empty set to the size.
#[must_use]
pub fn select_region(
    ids: &[PlaylistId],
    playlists: &[Playlist],
    sets: &PlaylistSets,
) -> Selection {
    let names = ids.iter().filter_map(|id| {
        playlists
            .iter()
            .find(|playlist| &playlist.id == id)
            .map(|playlist| playlist.title.as_str())
    });

    Selection {
        playlist_ids: ids.to_vec(),
        label: intersection_label(names),
        size: intersection_size(&sets.resolve_all(ids)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparison::TrackSet;

    #[test]
    fn test_intersection_label_joiner() {
        assert_eq!(
            intersection_label(["Rock", "Pop", "Jazz"]),
            "Rock ∩ Pop ∩ Jazz"
        );
        assert_eq!(intersection_label(["Solo"]), "Solo");
        assert_eq!(intersection_label(std::iter::empty::<&str>()), "");
    }

    #[test]
    fn test_select_region_skips_unknown_names() {
        let playlists = vec![
            Playlist::new(PlaylistId::new("p0"), "First", "owner", 2),
            Playlist::new(PlaylistId::new("p1"), "Second", "owner", 2),
        ];
        let sets = PlaylistSets::new(
            [
                (
                    PlaylistId::new("p0"),
                    ["a", "b"].iter().map(|k| (*k).to_string()).collect::<TrackSet>(),
                ),
                (
                    PlaylistId::new("p1"),
                    ["b", "c"].iter().map(|k| (*k).to_string()).collect::<TrackSet>(),
                ),
            ]
            .into_iter()
            .collect(),
        );

        let ids = vec![
            PlaylistId::new("p0"),
            PlaylistId::new("ghost"),
            PlaylistId::new("p1"),
        ];
        let selection = select_region(&ids, &playlists, &sets);

        assert_eq!(selection.label, "First ∩ Second");
        // ghost resolves to an empty set, so nothing intersects
        assert_eq!(selection.size, 0);
        assert_eq!(selection.playlist_ids, ids);
    }
}
