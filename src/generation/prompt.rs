//! Re-usable prompt skeleton for the generation endpoint.

/// Builds the generation prompt for `topic`.
///
/// The topic is interpolated verbatim - untrimmed - so the request carries
/// exactly what the user typed.
pub fn poem_prompt(topic: &str) -> String {
    format!(
        "Escreva um poema bonito e profundo sobre {}. O poema deve ter entre 8 e 12 versos, ser emotivo e usar linguagem poética.",
        topic
    )
}
