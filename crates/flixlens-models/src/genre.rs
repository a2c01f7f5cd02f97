use serde::{Deserialize, Serialize};
use std::fmt;

/// Genre label inferred for a viewing entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Genre {
    #[serde(rename = "Action & Thriller")]
    ActionThriller,
    #[serde(rename = "Drama & Romance")]
    DramaRomance,
    Comedy,
    Documentary,
    #[serde(rename = "Kids & Family")]
    KidsFamily,
    Anime,
    Horror,
    #[serde(rename = "Sci-Fi & Fantasy")]
    SciFiFantasy,
    Series,
    #[serde(rename = "General Entertainment")]
    GeneralEntertainment,
}

impl Genre {
    pub fn label(&self) -> &'static str {
        match self {
            Genre::ActionThriller => "Action & Thriller",
            Genre::DramaRomance => "Drama & Romance",
            Genre::Comedy => "Comedy",
            Genre::Documentary => "Documentary",
            Genre::KidsFamily => "Kids & Family",
            Genre::Anime => "Anime",
            Genre::Horror => "Horror",
            Genre::SciFiFantasy => "Sci-Fi & Fantasy",
            Genre::Series => "Series",
            Genre::GeneralEntertainment => "General Entertainment",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
