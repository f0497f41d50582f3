// src/noyau/symbole.rs
//
// Symboles d’entrée (une touche = un symbole).
// Le collaborateur (UI, CLI) traduit ses boutons/touches ici, puis appelle
// ExpressionAccumulator::apply.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operator {
    pub fn literal(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
        }
    }

    /// `*` et `/` passent avant `+` et `-`.
    pub fn est_multiplicatif(self) -> bool {
        matches!(self, Operator::Star | Operator::Slash)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Chiffre 0..=9.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Clear,
    Evaluate,
}

impl Symbol {
    /// Caractère ajouté au tampon (None pour Clear / Evaluate).
    pub fn literal(self) -> Option<char> {
        match self {
            Symbol::Digit(d) => char::from_digit(u32::from(d.min(9)), 10),
            Symbol::DecimalPoint => Some('.'),
            Symbol::Operator(op) => Some(op.literal()),
            Symbol::Clear | Symbol::Evaluate => None,
        }
    }

    /// Table touche -> symbole, partagée par le pavé, le clavier et `--touches`.
    ///
    /// Accepte aussi les variantes “affichage” : × ÷ et x pour la multiplication,
    /// Enter ('\n' / '\r') pour "=".
    pub fn depuis_touche(c: char) -> Option<Symbol> {
        let s = match c {
            '0'..='9' => Symbol::Digit(c as u8 - b'0'),
            '.' | ',' => Symbol::DecimalPoint,
            '+' => Symbol::Operator(Operator::Plus),
            '-' | '−' => Symbol::Operator(Operator::Minus),
            '*' | 'x' | 'X' | '×' => Symbol::Operator(Operator::Star),
            '/' | '÷' => Symbol::Operator(Operator::Slash),
            'c' | 'C' => Symbol::Clear,
            '=' | '\n' | '\r' => Symbol::Evaluate,
            _ => return None,
        };
        Some(s)
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        Symbol::depuis_touche(c).ok_or(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Clear => f.write_str("C"),
            Symbol::Evaluate => f.write_str("="),
            autre => match autre.literal() {
                Some(c) => write!(f, "{c}"),
                None => Ok(()),
            },
        }
    }
}
