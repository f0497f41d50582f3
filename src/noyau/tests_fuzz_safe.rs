//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’accumulateur avec des suites de touches, sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariant clé : Error => tampon vide ; Result(t) => tampon == t

use std::time::{Duration, Instant};

use super::{eval_expression, DisplayState, ExpressionAccumulator, Operator, Symbol};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

const TOUCHES: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '=', 'C',
];

fn gen_touche(rng: &mut Rng) -> Symbol {
    // "=" un peu plus fréquent pour provoquer des évaluations
    let c = if rng.pick(6) == 0 {
        '='
    } else {
        TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]
    };
    Symbol::depuis_touche(c).unwrap_or(Symbol::Clear)
}

/// Expression bien formée : n (op n)*, sans division.
fn gen_expression_sure(rng: &mut Rng, termes: usize) -> String {
    let mut s = String::new();
    for i in 0..termes {
        if i > 0 {
            s.push(['+', '-', '*'][rng.pick(3) as usize]);
        }
        s.push_str(&(1 + rng.pick(99)).to_string());
    }
    s
}

fn rejouer(seed: u64, n: usize) -> Vec<DisplayState> {
    let mut rng = Rng::new(seed);
    let mut acc = ExpressionAccumulator::new();
    (0..n).map(|_| acc.apply(gen_touche(&mut rng))).collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_tampon() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut acc = ExpressionAccumulator::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..5_000 {
        budget(t0, max);

        match acc.apply(gen_touche(&mut rng)) {
            DisplayState::Error => {
                assert_eq!(acc.tampon(), "", "Error => tampon vide");
                seen_err += 1;
            }
            DisplayState::Result(t) => {
                assert_eq!(acc.tampon(), t);
                seen_ok += 1;
            }
            DisplayState::Editing(t) => assert_eq!(acc.tampon(), t),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes touches => mêmes affichages
    assert_eq!(rejouer(0xBADC0DE, 500), rejouer(0xBADC0DE, 500));
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let termes = 1 + rng.pick(8) as usize;
        let expr = gen_expression_sure(&mut rng, termes);

        let v = eval_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        // Entiers seulement => résultat entier
        assert_eq!(v.fract(), 0.0, "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut acc = ExpressionAccumulator::new();
    for i in 0..800 {
        if i > 0 {
            acc.apply(Symbol::Operator(Operator::Plus));
        }
        acc.apply(Symbol::DecimalPoint);
        acc.apply(Symbol::Digit(5));
    }
    budget(t0, max);

    // 800 * 0.5 = 400
    assert_eq!(acc.apply(Symbol::Evaluate), DisplayState::Result("400".into()));
}
