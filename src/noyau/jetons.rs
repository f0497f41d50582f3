// src/noyau/jetons.rs

use super::erreur::{EvalError, Result};
use super::symbole::Operator;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operator),
}

/// Tokenize le tampon en jetons.
/// Supporte:
/// - littéraux décimaux (ex: 12, 3.5, .5, 7.)
/// - opérateurs + - * /
/// - un '-' tout en tête = signe du premier littéral (ex: "-3+1", chaînage
///   depuis un résultat négatif). Ailleurs, '-' reste binaire.
///
/// Ne vérifie PAS l’alternance nombre/opérateur : c’est le rôle du réducteur.
pub fn tokenize(s: &str) -> Result<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Littéral (avec signe de tête éventuel)
        let signe_de_tete = c == '-'
            && out.is_empty()
            && i + 1 < chars.len()
            && est_car_litteral(chars[i + 1]);

        if est_car_litteral(c) || signe_de_tete {
            let start = i;
            i += 1;
            while i < chars.len() && est_car_litteral(chars[i]) {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_litteral(&txt)?));
            continue;
        }

        // Opérateurs
        let op = match c {
            '+' => Operator::Plus,
            '-' => Operator::Minus,
            '*' => Operator::Star,
            '/' => Operator::Slash,
            _ => return Err(EvalError::CaractereInattendu(c)),
        };
        out.push(Tok::Op(op));
        i += 1;
    }

    Ok(out)
}

fn est_car_litteral(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Un littéral : au plus un point, au moins un chiffre, valeur finie.
fn lire_litteral(txt: &str) -> Result<f64> {
    let corps = txt.strip_prefix('-').unwrap_or(txt);
    let points = corps.chars().filter(|&c| c == '.').count();
    let chiffres = corps.chars().any(|c| c.is_ascii_digit());
    if points > 1 || !chiffres {
        return Err(EvalError::LitteralInvalide(txt.to_string()));
    }

    let v: f64 = txt
        .parse()
        .map_err(|_| EvalError::LitteralInvalide(txt.to_string()))?;
    if !v.is_finite() {
        return Err(EvalError::LitteralInvalide(txt.to_string()));
    }
    Ok(v)
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let out: Vec<String> = tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.literal().to_string(),
        })
        .collect();
    out.join(" ")
}
