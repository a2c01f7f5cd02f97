use flixlens_models::{DeviceStat, GenreStat, HeatmapPoint, Insight, SearchStats, WatchHighlights};

/// Compose narrative observations from already computed views.
///
/// Each observation is independent and is left out when its data is missing.
pub fn create_insights(
    watch: &WatchHighlights,
    genres: &[GenreStat],
    devices: &[DeviceStat],
    heatmap: &[HeatmapPoint],
    search: &SearchStats,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.extend(weekend_rhythm(heatmap));
    insights.extend(genre_crush(genres));
    insights.extend(device_of_choice(devices, watch.total_hours));
    insights.extend(session_pace(watch.average_session_minutes));
    insights.extend(search_habit(search));

    insights
}

fn weekend_rhythm(heatmap: &[HeatmapPoint]) -> Option<Insight> {
    if heatmap.is_empty() {
        return None;
    }

    let (weekend, weekday) = heatmap.iter().fold((0u64, 0u64), |(weekend, weekday), point| {
        if point.day.is_weekend() {
            (weekend + point.value, weekday)
        } else {
            (weekend, weekday + point.value)
        }
    });

    // Ties count as weekday viewing
    if weekend > weekday {
        Some(Insight::new(
            "Weekend Binges",
            "Weekends dominate your screen time.",
            "You log more minutes on Saturdays & Sundays.",
        ))
    } else {
        Some(Insight::new(
            "Weekday Viewer",
            "Weekday consistency keeps watch time balanced.",
            "Your sessions are steady through the work week.",
        ))
    }
}

fn genre_crush(genres: &[GenreStat]) -> Option<Insight> {
    let favorite = genres.first()?;
    let highlight = match genres.get(1) {
        Some(runner_up) => format!("{} & {} lead the queue.", favorite.genre, runner_up.genre),
        None => favorite.genre.to_string(),
    };

    Some(Insight::new(
        "Genre Crush",
        highlight,
        format!("You lean towards {} stories.", favorite.genre.label().to_lowercase()),
    ))
}

fn device_of_choice(devices: &[DeviceStat], total_hours: f64) -> Option<Insight> {
    let top = devices.first()?;
    let total_minutes = total_hours * 60.0;
    let denominator = if total_minutes == 0.0 { 1.0 } else { total_minutes };
    let share = (top.minutes as f64 / denominator * 100.0).round();

    Some(Insight::new(
        "Device of Choice",
        format!("{}% of watch time", share),
        format!("Most sessions start on your {}.", top.device),
    ))
}

fn session_pace(average_session_minutes: u64) -> Option<Insight> {
    if average_session_minutes == 0 {
        return None;
    }

    Some(Insight::new(
        "Session Pace",
        "Short bursts keep things fresh.",
        format!("Average session runs about {} minutes.", average_session_minutes),
    ))
}

fn search_habit(search: &SearchStats) -> Option<Insight> {
    if search.total_queries == 0 {
        return None;
    }

    let detail = match search.top_searches.first() {
        Some(favorite) => format!("You frequently looked up \"{}\".", favorite.value),
        None => "Searches guide what you play next.".to_string(),
    };

    Some(Insight::new(
        "Search Habit",
        format!("{} searches logged", search.total_queries),
        detail,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{build_device_stats, build_genre_stats, build_heatmap, build_search_stats};
    use crate::fixtures::{search, viewing, viewing_on};
    use crate::summary::summarize_watching;
    use flixlens_models::{DayOfWeek, Genre, ViewingEntry, WordCloudToken};

    fn insights_for(entries: &[ViewingEntry]) -> Vec<Insight> {
        let watch = summarize_watching(entries);
        create_insights(
            &watch,
            &build_genre_stats(entries),
            &build_device_stats(entries),
            &build_heatmap(entries),
            &SearchStats::default(),
        )
    }

    #[test]
    fn test_weekend_insight() {
        // Jan 6 and 7 2024 are Saturday and Sunday
        let entries = vec![
            viewing("2024-01-06 20:00:00", "60", "A"),
            viewing("2024-01-07 20:00:00", "30", "B"),
        ];
        let insights = insights_for(&entries);
        assert_eq!(insights[0].label, "Weekend Binges");
    }

    #[test]
    fn test_weekday_insight() {
        let entries = vec![
            viewing("2024-01-08 20:00:00", "60", "A"),
            viewing("2024-01-12 20:00:00", "30", "B"),
        ];
        let insights = insights_for(&entries);
        assert_eq!(insights[0].label, "Weekday Viewer");
    }

    #[test]
    fn test_equal_split_is_weekday() {
        let heatmap = vec![
            HeatmapPoint { day: DayOfWeek::Sunday, hour: 20, value: 45 },
            HeatmapPoint { day: DayOfWeek::Wednesday, hour: 20, value: 45 },
        ];
        let insight = weekend_rhythm(&heatmap).unwrap();
        assert_eq!(insight.label, "Weekday Viewer");
    }

    #[test]
    fn test_nothing_to_say_without_data() {
        let insights = create_insights(&WatchHighlights::default(), &[], &[], &[], &SearchStats::default());
        assert!(insights.is_empty());
    }

    #[test]
    fn test_genre_pairing() {
        let single = vec![GenreStat { genre: Genre::Horror, entries: 1, minutes: 30 }];
        let insight = genre_crush(&single).unwrap();
        assert_eq!(insight.highlight, "Horror");
        assert_eq!(insight.detail, "You lean towards horror stories.");

        let paired = vec![
            GenreStat { genre: Genre::SciFiFantasy, entries: 2, minutes: 90 },
            GenreStat { genre: Genre::Comedy, entries: 1, minutes: 30 },
        ];
        let insight = genre_crush(&paired).unwrap();
        assert_eq!(insight.highlight, "Sci-Fi & Fantasy & Comedy lead the queue.");
    }

    #[test]
    fn test_device_share() {
        let entries = vec![
            viewing_on("2024-01-08 20:00:00", "90", "A", "Smart TV"),
            viewing_on("2024-01-09 20:00:00", "30", "B", "Phone"),
        ];
        let insights = insights_for(&entries);
        let device = insights.iter().find(|i| i.label == "Device of Choice").unwrap();

        assert_eq!(device.highlight, "75% of watch time");
        assert_eq!(device.detail, "Most sessions start on your Smart TV.");
    }

    #[test]
    fn test_device_share_with_zero_hours_does_not_divide_by_zero() {
        let devices = vec![DeviceStat { device: "TV".to_string(), count: 1, minutes: 0 }];
        let insight = device_of_choice(&devices, 0.0).unwrap();
        assert_eq!(insight.highlight, "0% of watch time");
    }

    #[test]
    fn test_session_pace() {
        let entries = vec![viewing("2024-01-08 20:00:00", "42", "A")];
        let insights = insights_for(&entries);
        let pace = insights.iter().find(|i| i.label == "Session Pace").unwrap();
        assert_eq!(pace.detail, "Average session runs about 42 minutes.");
    }

    #[test]
    fn test_search_habit() {
        let stats = build_search_stats(&[
            search("2024-01-10 21:00:00", "Dark"),
            search("2024-01-11 21:00:00", "dark"),
        ]);
        let insight = search_habit(&stats).unwrap();
        assert_eq!(insight.highlight, "2 searches logged");
        assert_eq!(insight.detail, "You frequently looked up \"dark\".");

        let no_favorite = SearchStats {
            total_queries: 3,
            top_searches: Vec::<WordCloudToken>::new(),
            ..SearchStats::default()
        };
        assert_eq!(search_habit(&no_favorite).unwrap().detail, "Searches guide what you play next.");
        assert!(search_habit(&SearchStats::default()).is_none());
    }
}
