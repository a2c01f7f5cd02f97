pub mod day;
pub mod genre;
pub mod highlights;
pub mod insight;
pub mod record;
pub mod search;
pub mod stats;
pub mod viewing;

pub use day::DayOfWeek;
pub use genre::Genre;
pub use highlights::{TitleHighlight, WatchHighlights, NOT_AVAILABLE};
pub use insight::Insight;
pub use record::RawRecord;
pub use search::SearchEntry;
pub use stats::{DayTotal, DeviceStat, DistributionPoint, GenreStat, HeatmapPoint, SearchStats, TopTitleStat, TrendPoint, WordCloudToken};
pub use viewing::ViewingEntry;
