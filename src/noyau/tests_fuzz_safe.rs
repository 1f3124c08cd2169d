//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - seule erreur attendue : division par zéro (les phrases générées sont toujours valides)
//! - invariant clé : le texte d’un résultat sans période (< 10^9) se relit à la valeur arrondie

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::format::ecrire_nombre;
use super::lecture::lire_nombre;
use super::valeur::ValeurExacte;
use super::{calculer_detaille, Reglages};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Opérande : une valeur (parfois nulle) écrite en numéral par le rendu lui-même.
fn gen_operande(rng: &mut Rng) -> String {
    let entier = match rng.pick(4) {
        0 => 0,
        1 => rng.pick(20),
        2 => rng.pick(1_000),
        _ => rng.pick(3_000_000),
    };
    let v = if rng.coin() {
        let k = 1 + rng.pick(3);
        ValeurExacte::decimal(entier, rng.pick(10u32.pow(k)), k)
    } else {
        ValeurExacte::entier(entier)
    };
    ecrire_nombre(&v, None)
}

fn gen_operateur(rng: &mut Rng) -> &'static str {
    match rng.pick(10) {
        0 => "плюс",
        1 => "+",
        2 => "минус",
        3 => "умножить на",
        4 => "*",
        5 => "разделить на",
        6 => "/",
        7 => "остаток от деления на",
        8 => "делить на",
        _ => "прибавить",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_operande(rng);
    }
    match rng.pick(4) {
        0 => format!(
            "{} {} {}",
            gen_operande(rng),
            gen_operateur(rng),
            gen_operande(rng)
        ),
        1 => format!(
            "({}) {} {}",
            gen_expr(rng, depth - 1),
            gen_operateur(rng),
            gen_expr(rng, depth - 1)
        ),
        2 => format!(
            "{} {} ({})",
            gen_expr(rng, depth - 1),
            gen_operateur(rng),
            gen_expr(rng, depth - 1)
        ),
        _ => format!(
            "{} {} {}",
            gen_expr(rng, depth - 1),
            gen_operateur(rng),
            gen_operande(rng)
        ),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({} плюс {})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "ноль".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_relecture() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2_000);

    let reglages = Reglages::default();
    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut rng_bis = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        // même seed => même expression => même sortie
        assert_eq!(expr, gen_expr(&mut rng_bis, 3));

        match calculer_detaille(&expr, &reglages) {
            Ok(d) => {
                let encore = calculer_detaille(&expr, &reglages)
                    .unwrap_or_else(|e| panic!("non déterministe: expr={expr:?} err={e}"));
                assert_eq!(d.resultat, encore.resultat);

                // au-delà du milliard, “тысяча миллионов” ne se relit pas
                let relisible = d.exact.abs() < ValeurExacte::entier(1_000_000_000);
                if d.periode.is_none() && relisible {
                    let relu = lire_nombre(&d.resultat)
                        .unwrap_or_else(|e| panic!("relecture: {:?} err={e}", d.resultat));
                    let arrondi = ValeurExacte::decimal(0, 1, 6);
                    let ecart = (relu - d.exact.clone()).abs();
                    assert!(
                        ecart <= arrondi,
                        "écart trop grand: expr={expr:?} exact={} texte={:?}",
                        d.exact,
                        d.resultat
                    );
                }
                seen_ok += 1;
            }
            Err(ErreurCalcul::DivisionParZero) => seen_err += 1,
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err < seen_ok, "trop de divisions par zéro: {seen_err}");
}

#[test]
fn fuzz_safe_mots_inconnus_rejetes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let intrus = ["пятт", "сотня", "полтора", "и", "миллиард"];

    for _ in 0..60 {
        budget(t0, max);

        let mot = intrus[rng.pick(intrus.len() as u32) as usize];
        let expr = format!("{} плюс {mot}", gen_operande(&mut rng));

        match calculer_detaille(&expr, &Reglages::default()) {
            Err(ErreurCalcul::NombreInconnu(_)) => {}
            autre => panic!("attendu NombreInconnu: expr={expr:?} obtenu={autre:?}"),
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1_000);

    let expr = somme_balancee("одна вторая", 2);
    assert!(calculer_detaille(&expr, &Reglages::default()).is_err());

    let expr = somme_balancee("пять десятых", 800);
    budget(t0, max);

    let d = calculer_detaille(&expr, &Reglages::default()).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800 × 0.5 = 400
    assert_eq!(d.resultat, "четыреста");
}
