//! Noyau — erreurs d’évaluation.
//!
//! Deux familles seulement côté utilisateur (les deux s’affichent "Error") :
//! - expression mal formée (vide, opérateur pendant, littéral invalide, ...)
//! - division par zéro
//!
//! La distinction reste interne (logs + tests).

use thiserror::Error;

/// Résultat du noyau.
pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("expression vide")]
    ExpressionVide,

    /// Opérateur en tête, en fin, ou deux opérateurs consécutifs.
    #[error("opérateur pendant")]
    OperateurPendant,

    #[error("littéral invalide: {0:?}")]
    LitteralInvalide(String),

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("division par zéro")]
    DivisionParZero,

    /// Dépassement vers ±∞ en cours de calcul.
    #[error("résultat non fini")]
    ResultatNonFini,
}

impl EvalError {
    pub fn est_division_par_zero(&self) -> bool {
        matches!(self, EvalError::DivisionParZero)
    }

    /// Tout le reste = expression mal formée.
    pub fn est_mal_formee(&self) -> bool {
        !self.est_division_par_zero()
    }
}
