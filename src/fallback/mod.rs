//! Static fallback content: a curated anthology keyed by topic, plus an
//! improvised template for topics the anthology does not cover.
//! Read-only for the process lifetime.

mod poems;

/// Topics with a curated poem. Keys are lower-case; [`lookup`] lower-cases the
/// incoming topic before matching.
pub const CURATED_TOPICS: [&str; 9] = [
    "amor",
    "vida",
    "saudade",
    "natureza",
    "amizade",
    "tempo",
    "esperança",
    "liberdade",
    "mar",
];

/// Returns the curated poem for `topic`, if the anthology covers it.
pub fn lookup(topic: &str) -> Option<&'static str> {
    match topic.to_lowercase().as_str() {
        "amor" => Some(poems::AMOR),
        "vida" => Some(poems::VIDA),
        "saudade" => Some(poems::SAUDADE),
        "natureza" => Some(poems::NATUREZA),
        "amizade" => Some(poems::AMIZADE),
        "tempo" => Some(poems::TEMPO),
        "esperança" => Some(poems::ESPERANCA),
        "liberdade" => Some(poems::LIBERDADE),
        "mar" => Some(poems::MAR),
        _ => None,
    }
}

/// Improvises a poem around `topic` from the generic verse template. The topic
/// appears twice, in its original casing.
pub fn improvise(topic: &str) -> String {
    format!(
        "Pensamentos sobre {topic} flutuam no ar,\n\
         Como pássaros livres a voar.\n\
         Inspiração que nasce do coração,\n\
         E toca a alma com suave emoção.\n\
         \n\
         Em cada palavra, em cada verso,\n\
         Descubro um universo diverso.\n\
         E assim celebro em poesia,\n\
         O que {topic} traz de magia."
    )
}
