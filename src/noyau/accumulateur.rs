//! Accumulateur d’expression : la machine à états derrière le pavé.
//!
//! Contrats :
//! - `apply` est total : toute suite de symboles donne un `DisplayState`, jamais de panique.
//! - Après "=" réussi, le tampon contient le texte du résultat (on continue le calcul).
//! - Après "=" en échec, le tampon est vide (la saisie suivante repart de zéro).

use std::fmt;

use tracing::{debug, warn};

use super::eval::eval_expression;
use super::format::format_nombre;
use super::symbole::Symbol;

/// Texte affiché pour tout échec d’évaluation.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayState {
    /// Saisie en cours (texte brut du tampon, éventuellement vide).
    Editing(String),
    /// Résultat canonique.
    Result(String),
    Error,
}

impl DisplayState {
    /// Texte à rendre tel quel par le collaborateur.
    pub fn texte(&self) -> &str {
        match self {
            DisplayState::Editing(s) | DisplayState::Result(s) => s,
            DisplayState::Error => TEXTE_ERREUR,
        }
    }

    pub fn est_erreur(&self) -> bool {
        matches!(self, DisplayState::Error)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState::Editing(String::new())
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.texte())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExpressionAccumulator {
    tampon: String,
    affichage: DisplayState,
}

impl ExpressionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applique un symbole et retourne le nouvel affichage.
    pub fn apply(&mut self, symbol: Symbol) -> DisplayState {
        debug!(%symbol, tampon = %self.tampon, "symbole");

        self.affichage = match symbol {
            Symbol::Clear => {
                self.tampon.clear();
                DisplayState::Editing(String::new())
            }
            Symbol::Evaluate => self.evaluer(),
            autre => {
                if let Some(c) = autre.literal() {
                    self.tampon.push(c);
                }
                DisplayState::Editing(self.tampon.clone())
            }
        };

        self.affichage.clone()
    }

    fn evaluer(&mut self) -> DisplayState {
        match eval_expression(&self.tampon) {
            Ok(v) => {
                let txt = format_nombre(v);
                debug!(expression = %self.tampon, resultat = %txt, "évaluation");
                self.tampon.clone_from(&txt);
                DisplayState::Result(txt)
            }
            Err(e) => {
                warn!(
                    expression = %self.tampon,
                    erreur = %e,
                    division_par_zero = e.est_division_par_zero(),
                    mal_formee = e.est_mal_formee(),
                    "évaluation impossible"
                );
                self.tampon.clear();
                DisplayState::Error
            }
        }
    }

    /// Dernier affichage produit (Editing("") au départ).
    pub fn affichage(&self) -> &DisplayState {
        &self.affichage
    }

    /// Vue lecture seule du tampon.
    pub fn tampon(&self) -> &str {
        &self.tampon
    }
}
