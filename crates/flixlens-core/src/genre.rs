use flixlens_models::Genre;

/// Keyword table checked in declaration order; the first genre with a
/// matching keyword wins.
pub const GENRE_KEYWORDS: &[(Genre, &[&str])] = &[
    (
        Genre::ActionThriller,
        &["action", "mission", "spy", "hero", "battle", "war", "thriller", "heist"],
    ),
    (
        Genre::DramaRomance,
        &["drama", "romance", "love", "heart", "wedding", "affair"],
    ),
    (
        Genre::Comedy,
        &["comedy", "funny", "laugh", "sitcom", "stand-up", "joke"],
    ),
    (
        Genre::Documentary,
        &["documentary", "docuseries", "true crime", "history", "planet", "nature"],
    ),
    (
        Genre::KidsFamily,
        &["kids", "family", "animated", "cartoon", "adventures"],
    ),
    (
        Genre::Anime,
        &["anime", "manga", "naruto", "attack on titan", "demon", "hero academia"],
    ),
    (
        Genre::Horror,
        &["horror", "ghost", "haunting", "zombie", "haunted"],
    ),
    (
        Genre::SciFiFantasy,
        &["sci-fi", "space", "galaxy", "future", "robot", "fantasy", "magic"],
    ),
];

/// Infer a genre from a title and its attributes text.
///
/// Plain substring matching, so titles like "Warehouse 13" land in
/// Action & Thriller. Episodic titles without a keyword fall back to Series.
pub fn classify_genre(title: &str, attributes: &str) -> Genre {
    let haystack = format!("{} {}", title, attributes).to_lowercase();

    let matched = GENRE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(genre, _)| *genre);
    if let Some(genre) = matched {
        return genre;
    }

    if haystack.contains("season") || haystack.contains("episode") {
        Genre::Series
    } else if haystack.contains("documentary") {
        Genre::Documentary
    } else {
        Genre::GeneralEntertainment
    }
}
