// src/noyau/format.rs

/// Texte canonique d’un résultat :
/// - entier sans décimale (5, pas 5.0)
/// - sinon, la plus courte écriture décimale qui relit la même valeur
/// - jamais d’exposant : le texte doit pouvoir repartir dans le tampon
/// - -0 s’affiche 0
///
/// `Display` de f64 donne déjà exactement ça (sans notation scientifique).
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
