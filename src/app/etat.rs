//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder UN accumulateur et le dernier texte à afficher.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `ExpressionAccumulator::apply`.
//! - L’écran n’est jamais périmé : `ecran` est recalculé à chaque touche.

use crate::noyau::{DisplayState, ExpressionAccumulator, Symbol};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    accu: ExpressionAccumulator,

    // --- sortie ---
    pub ecran: String,
    pub en_erreur: bool,
}

impl AppCalc {
    /// Une touche du pavé (ou du clavier) : applique + met l’écran à jour.
    pub fn appuyer(&mut self, symbol: Symbol) -> &DisplayState {
        let d = self.accu.apply(symbol);
        self.ecran = d.texte().to_string();
        self.en_erreur = d.est_erreur();
        self.accu.affichage()
    }

    /// Esc / bouton C.
    pub fn clear_entree(&mut self) {
        self.appuyer(Symbol::Clear);
    }

    /// Saisie texte brute (clavier) : les caractères inconnus sont ignorés.
    pub fn taper(&mut self, texte: &str) {
        for c in texte.chars() {
            if let Some(s) = Symbol::depuis_touche(c) {
                self.appuyer(s);
            }
        }
    }
}
