//! Propriétés de l’accumulateur sur des suites de touches arbitraires.

use proptest::prelude::*;

use super::{DisplayState, ExpressionAccumulator, Operator, Symbol};

fn symbole_saisie() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        (0u8..=9).prop_map(Symbol::Digit),
        Just(Symbol::DecimalPoint),
        prop_oneof![
            Just(Operator::Plus),
            Just(Operator::Minus),
            Just(Operator::Star),
            Just(Operator::Slash),
        ]
        .prop_map(Symbol::Operator),
    ]
}

fn symbole_quelconque() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        4 => symbole_saisie(),
        1 => Just(Symbol::Clear),
        1 => Just(Symbol::Evaluate),
    ]
}

proptest! {
    #[test]
    fn saisie_sans_egal_concatene(symboles in prop::collection::vec(symbole_saisie(), 0..40)) {
        let mut acc = ExpressionAccumulator::new();
        let mut attendu = String::new();
        for s in &symboles {
            attendu.extend(s.literal());
            let d = acc.apply(*s);
            prop_assert_eq!(d, DisplayState::Editing(attendu.clone()));
        }
        prop_assert_eq!(acc.affichage().texte(), attendu.as_str());
    }

    #[test]
    fn clear_remet_a_vide(symboles in prop::collection::vec(symbole_quelconque(), 0..40)) {
        let mut acc = ExpressionAccumulator::new();
        for s in symboles {
            acc.apply(s);
        }
        prop_assert_eq!(acc.apply(Symbol::Clear), DisplayState::Editing(String::new()));
        prop_assert_eq!(acc.tampon(), "");
    }

    #[test]
    fn jamais_de_panique_et_affichage_coherent(
        symboles in prop::collection::vec(symbole_quelconque(), 0..60)
    ) {
        let mut acc = ExpressionAccumulator::new();
        for s in symboles {
            let d = acc.apply(s);
            prop_assert_eq!(&d, acc.affichage());
            match &d {
                DisplayState::Error => prop_assert_eq!(acc.tampon(), ""),
                DisplayState::Result(txt) => prop_assert_eq!(acc.tampon(), txt.as_str()),
                DisplayState::Editing(txt) => prop_assert_eq!(acc.tampon(), txt.as_str()),
            }
        }
    }

    #[test]
    fn egal_idempotent(symboles in prop::collection::vec(symbole_saisie(), 1..20)) {
        let mut acc = ExpressionAccumulator::new();
        for s in symboles {
            acc.apply(s);
        }
        let premier = acc.apply(Symbol::Evaluate);
        if let DisplayState::Result(_) = premier {
            prop_assert_eq!(acc.apply(Symbol::Evaluate), premier);
        }
    }
}
