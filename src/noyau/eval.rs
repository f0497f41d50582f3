//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> validation (nombre, op, nombre, ...) -> passe `*` `/` -> passe `+` `-`
//!
//! Deux passes gauche -> droite, pas d’arbre : la grammaire n’a que deux
//! niveaux de priorité et pas de parenthèses.

use tracing::trace;

use super::erreur::{EvalError, Result};
use super::jetons::{format_tokens, tokenize, Tok};
use super::symbole::Operator;

/// API publique : évalue le tampon en f64 fini.
pub fn eval_expression(expr_str: &str) -> Result<f64> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(EvalError::ExpressionVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    trace!(jetons = %format_tokens(&jetons), "jetons");

    // 2) Alternance stricte nombre / opérateur
    let (nombres, ops) = separer(&jetons)?;

    // 3) Passe multiplicative
    let (nombres, ops) = reduire_multiplicatifs(nombres, ops)?;

    // 4) Passe additive
    let v = reduire_additifs(&nombres, &ops);

    if !v.is_finite() {
        return Err(EvalError::ResultatNonFini);
    }
    Ok(v)
}

/// Sépare en `n0 op0 n1 op1 ... nk`. Toute autre forme est mal formée.
fn separer(jetons: &[Tok]) -> Result<(Vec<f64>, Vec<Operator>)> {
    let mut nombres = Vec::with_capacity(jetons.len() / 2 + 1);
    let mut ops = Vec::with_capacity(jetons.len() / 2);

    for (i, t) in jetons.iter().enumerate() {
        let attend_nombre = i % 2 == 0;
        match (t, attend_nombre) {
            (Tok::Num(v), true) => nombres.push(*v),
            (Tok::Op(op), false) => ops.push(*op),
            _ => return Err(EvalError::OperateurPendant),
        }
    }

    // opérateur final sans opérande
    if nombres.len() != ops.len() + 1 {
        return Err(EvalError::OperateurPendant);
    }
    Ok((nombres, ops))
}

/// Réduit `*` et `/` de gauche à droite ; il ne reste que `+` et `-`.
fn reduire_multiplicatifs(
    nombres: Vec<f64>,
    ops: Vec<Operator>,
) -> Result<(Vec<f64>, Vec<Operator>)> {
    let mut it = nombres.into_iter();
    let Some(premier) = it.next() else {
        return Err(EvalError::ExpressionVide);
    };

    let mut sortie_n = vec![premier];
    let mut sortie_ops = Vec::new();

    for (op, b) in ops.into_iter().zip(it) {
        if op.est_multiplicatif() {
            // sortie_n n’est jamais vide (premier)
            let Some(a) = sortie_n.last_mut() else {
                return Err(EvalError::OperateurPendant);
            };
            *a = appliquer(*a, op, b)?;
        } else {
            sortie_ops.push(op);
            sortie_n.push(b);
        }
    }

    Ok((sortie_n, sortie_ops))
}

/// Réduit `+` et `-` de gauche à droite.
fn reduire_additifs(nombres: &[f64], ops: &[Operator]) -> f64 {
    let mut acc = nombres.first().copied().unwrap_or(0.0);
    for (op, b) in ops.iter().zip(nombres.iter().skip(1)) {
        acc = match op {
            Operator::Minus => acc - b,
            _ => acc + b,
        };
    }
    acc
}

fn appliquer(a: f64, op: Operator, b: f64) -> Result<f64> {
    let v = match op {
        Operator::Plus => a + b,
        Operator::Minus => a - b,
        Operator::Star => a * b,
        Operator::Slash => {
            if b == 0.0 {
                return Err(EvalError::DivisionParZero);
            }
            a / b
        }
    };
    if !v.is_finite() {
        return Err(EvalError::ResultatNonFini);
    }
    Ok(v)
}
