use super::tally::Tally;
use super::trend::{into_chronological, month_key, month_label};
use crate::text::normalize;
use flixlens_models::{SearchEntry, SearchStats, TrendPoint, WordCloudToken};

pub const DEFAULT_WORD_CLOUD_LIMIT: usize = 60;
pub const DEFAULT_TOP_SEARCHES: usize = 6;

/// Words never counted in the word cloud
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "of", "in", "on", "at", "to", "for", "with", "season", "episode", "movie", "show",
];

pub fn build_search_stats(entries: &[SearchEntry]) -> SearchStats {
    build_search_stats_with(entries, DEFAULT_WORD_CLOUD_LIMIT, DEFAULT_TOP_SEARCHES)
}

/// Query totals, monthly counts, word cloud and most repeated queries
pub fn build_search_stats_with(entries: &[SearchEntry], word_cloud_limit: usize, top_searches_limit: usize) -> SearchStats {
    if entries.is_empty() {
        return SearchStats::default();
    }

    let mut monthly: Tally<(i32, u32), TrendPoint> = Tally::new();
    let mut tokens: Tally<String, u64> = Tally::new();
    let mut queries: Tally<String, u64> = Tally::new();

    for entry in entries {
        let point = monthly.entry(month_key(&entry.timestamp), || TrendPoint {
            label: month_label(&entry.timestamp),
            minutes: 0,
        });
        point.minutes += 1;

        let normalized = normalize(&entry.query);
        for word in normalized.split_whitespace().filter(|word| !STOP_WORDS.contains(word)) {
            tokens.add(word.to_string(), 1);
        }
        queries.add(normalized, 1);
    }

    SearchStats {
        total_queries: entries.len() as u64,
        monthly_counts: into_chronological(monthly),
        word_cloud: ranked_tokens(tokens, word_cloud_limit),
        top_searches: ranked_tokens(queries, top_searches_limit),
    }
}

fn ranked_tokens(tally: Tally<String, u64>, limit: usize) -> Vec<WordCloudToken> {
    let mut ranked: Vec<WordCloudToken> = tally
        .into_vec()
        .into_iter()
        .map(|(value, count)| WordCloudToken { value, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}
