//! Noyau de la calculatrice à touches
//!
//! Organisation interne :
//! - symbole.rs     : symboles d’entrée + table touche -> symbole
//! - jetons.rs      : tokenisation du tampon
//! - eval.rs        : réduction en deux passes (`*` `/` puis `+` `-`)
//! - format.rs      : texte canonique d’un résultat
//! - erreur.rs      : erreurs d’évaluation (internes, toutes affichées "Error")
//! - accumulateur.rs: machine à états (tampon + affichage)

pub mod accumulateur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod symbole;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::{DisplayState, ExpressionAccumulator};
pub use eval::eval_expression;
pub use format::format_nombre;
pub use symbole::{Operator, Symbol};
