//! Tests scientifiques (campagne) : invariants + scénarios + limites contrôlées.
//!
//! But : vérifier les propriétés du pipeline sans faire chauffer la machine.
//! - aller-retour rendu -> lecture (proptest, magnitudes < 10^9, ≤ 6 décimales)
//! - précédence / parenthèses / division par zéro
//! - période : détectée seulement quand la valeur ne tient pas en millionièmes
//! - stress borné (budget temps, profondeur modérée)

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::erreur::ErreurCalcul;
use super::format::ecrire_nombre;
use super::jetons::tokenize;
use super::lecture::lire_nombre;
use super::rpn::evaluer;
use super::valeur::ValeurExacte;
use super::{calculer, calculer_detaille, Reglages};

fn calc_ok(expr: &str) -> String {
    calculer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_ok(expr: &str) -> ValeurExacte {
    let t = tokenize(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    evaluer(&t).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Aller-retour ------------------------ */

proptest! {
    #[test]
    fn sci_aller_retour_rendu_lecture(
        entier in 0u64..1_000_000_000,
        numer in 0u32..1_000_000,
        k in 1u32..=6,
        negatif in any::<bool>(),
    ) {
        let numer = numer % 10u32.pow(k);
        let v = ValeurExacte::decimal(entier, numer, k);
        let v = if negatif { -v } else { v };

        let texte = ecrire_nombre(&v, None);
        let relu = lire_nombre(&texte);
        prop_assert_eq!(relu, Ok(v), "texte={}", texte);
    }

    #[test]
    fn sci_rendu_idempotent(n in -1_000_000i64..1_000_000, d in 1i64..5_000) {
        let v = ValeurExacte::fraction(n, d).unwrap();
        prop_assert_eq!(ecrire_nombre(&v, None), ecrire_nombre(&v, None));
    }
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn sci_precedence_et_parentheses() {
    assert_eq!(eval_ok("два плюс два умножить на два"), ValeurExacte::entier(6));
    assert_eq!(eval_ok("(два плюс два) умножить на два"), ValeurExacte::entier(8));
    assert_eq!(
        eval_ok("два умножить на (три плюс четыре) минус пять"),
        ValeurExacte::entier(9)
    );
}

#[test]
fn sci_scenarios_de_reference() {
    // 10.5 / 2 = 5.25 (exact)
    assert_eq!(
        calc_ok("десять и пять десятых разделить на два"),
        "пять и двадцать пять сотых"
    );
    assert_eq!(calc_ok("пятьдесят разделить на четыре"), "двенадцать и пять десятых");
    // 100.025 / 5 = 20.005
    assert_eq!(
        calc_ok("сто и двадцать пять тысячных разделить на пять"),
        "двадцать и пять тысячных"
    );
    // 7.03 / 3 = 2.34(3)
    assert_eq!(
        calc_ok("семь и три сотых разделить на три"),
        "два и тридцать четыре сотых и три тысячных в периоде"
    );
    // 10.3 / 3.1 = 3.(3225806451612903) : période trop longue => arrondi
    assert_eq!(
        calc_ok("десять и три десятых разделить на три и одна десятая"),
        "три и триста двадцать две тысячи пятьсот восемьдесят одна миллионная"
    );
}

#[test]
fn sci_division_par_zero_jamais_de_panique() {
    assert_eq!(
        calculer("пять разделить на ноль"),
        Err(ErreurCalcul::DivisionParZero)
    );
    assert_eq!(
        calculer("пять остаток от деления на (два минус два)"),
        Err(ErreurCalcul::DivisionParZero)
    );
}

#[test]
fn sci_modulo() {
    assert_eq!(calc_ok("семь остаток от деления на три"), "один");
    assert_eq!(calc_ok("минус семь по модулю три"), "два");
    assert_eq!(
        calc_ok("пять и пять десятых остаток два"),
        "один и пять десятых"
    );
}

#[test]
fn sci_grands_nombres() {
    assert_eq!(
        calc_ok("девятьсот девяносто девять тысяч девятьсот девяносто девять плюс один"),
        "один миллион"
    );
    assert_eq!(
        calc_ok("два миллиона умножить на три"),
        "шесть миллионов"
    );
    assert_eq!(
        calc_ok("двадцать одна тысяча плюс ноль"),
        "двадцать одна тысяча"
    );
}

#[test]
fn sci_negatifs() {
    assert_eq!(calc_ok("два минус пять"), "минус три");
    assert_eq!(
        calc_ok("один минус один разделить на три"),
        "ноль и шесть десятых в периоде"
    );
    assert_eq!(
        calc_ok("минус один разделить на три"),
        "минус ноль и три десятых в периоде"
    );
}

/* ------------------------ Période : porte d’entrée ------------------------ */

#[test]
fn sci_periode_seulement_si_non_fini() {
    // 0.000111 est exact en millionièmes : pas de période affichée
    let d = calculer_detaille(
        "сто одиннадцать разделить на миллион",
        &Reglages::default(),
    )
    .unwrap();
    assert_eq!(d.periode, None);
    assert_eq!(d.resultat, "ноль и сто одиннадцать миллионных");

    // 1/9 : période "1"
    let d = calculer_detaille("один разделить на девять", &Reglages::default()).unwrap();
    assert_eq!(d.periode.map(|p| (p.debut, p.bloc)), Some((0, "1".to_string())));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = String::new();
    for k in 0..80 {
        if k > 0 {
            expr.push_str(" плюс ");
        }
        expr.push_str("одна десятая");
        budget(t0, max);
    }

    // 80 × 0.1 = 8
    assert_eq!(calc_ok(&expr), "восемь");
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_imbriquees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = "один".to_string();
    for _ in 0..60 {
        expr = format!("({expr} умножить на один)");
        budget(t0, max);
    }
    expr.push_str(" плюс один");

    assert_eq!(calc_ok(&expr), "два");
    budget(t0, max);
}
