use super::tally::Tally;
use flixlens_models::{TopTitleStat, ViewingEntry};

pub const DEFAULT_TOP_TITLES: usize = 6;

/// Most watched titles grouped by normalized title.
///
/// Each group shows the display title of its most recent row in input order
/// and the genre of its first row.
pub fn build_top_titles(entries: &[ViewingEntry], limit: usize) -> Vec<TopTitleStat> {
    let mut by_title: Tally<&str, TopTitleStat> = Tally::new();
    for entry in entries {
        let stat = by_title.entry(entry.normalized_title.as_str(), || TopTitleStat {
            title: entry.title.clone(),
            minutes: 0,
            sessions: 0,
            genre: entry.genre,
        });
        stat.minutes += u64::from(entry.duration_minutes);
        stat.sessions += 1;
        if stat.title != entry.title {
            stat.title.clone_from(&entry.title);
        }
    }

    let mut titles: Vec<TopTitleStat> = by_title.into_vec().into_iter().map(|(_, stat)| stat).collect();
    titles.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    titles.truncate(limit);
    titles
}
