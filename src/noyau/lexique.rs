// src/noyau/lexique.rs
//
// Lexique des numéraux russes + synonymes d’opérateurs.
//
// - Tables canoniques mot -> valeur (unités 0..19, dizaines, centaines, échelles, dénominateurs)
// - Tables inverses valeur -> mot, construites UNE fois à partir des tables canoniques
//   (la première forme listée pour une valeur est la forme canonique, masculine)
// - Recherche : mot exact, en minuscules (l’appelant normalise), pas de racinisation
//
// Tout est immuable pour la durée du processus (OnceLock).

use std::collections::HashMap;
use std::sync::OnceLock;

/* ------------------------ Tables canoniques ------------------------ */

const UNITES: &[(&str, u32)] = &[
    ("ноль", 0),
    ("один", 1),
    ("одна", 1),
    ("одно", 1),
    ("два", 2),
    ("две", 2),
    ("три", 3),
    ("четыре", 4),
    ("пять", 5),
    ("шесть", 6),
    ("семь", 7),
    ("восемь", 8),
    ("девять", 9),
    ("десять", 10),
    ("одиннадцать", 11),
    ("двенадцать", 12),
    ("тринадцать", 13),
    ("четырнадцать", 14),
    ("пятнадцать", 15),
    ("шестнадцать", 16),
    ("семнадцать", 17),
    ("восемнадцать", 18),
    ("девятнадцать", 19),
];

const DIZAINES: &[(&str, u32)] = &[
    ("двадцать", 20),
    ("тридцать", 30),
    ("сорок", 40),
    ("пятьдесят", 50),
    ("шестьдесят", 60),
    ("семьдесят", 70),
    ("восемьдесят", 80),
    ("девяносто", 90),
];

const CENTAINES: &[(&str, u32)] = &[
    ("сто", 100),
    ("двести", 200),
    ("триста", 300),
    ("четыреста", 400),
    ("пятьсот", 500),
    ("шестьсот", 600),
    ("семьсот", 700),
    ("восемьсот", 800),
    ("девятьсот", 900),
];

/// Formes féminines (compte de milliers, numérateurs de fractions).
const FEMININ: &[(u32, &str)] = &[(1, "одна"), (2, "две")];

/// Échelles : toutes les formes fléchies lues, valeur = multiplicateur.
const ECHELLES: &[(&str, u32)] = &[
    ("тысяча", 1_000),
    ("тысячи", 1_000),
    ("тысяч", 1_000),
    ("тысячу", 1_000),
    ("миллион", 1_000_000),
    ("миллиона", 1_000_000),
    ("миллионов", 1_000_000),
];

/// Dénominateurs : (exposant de 10, pluriel génitif, singulier nominatif).
const FRACTIONS: &[(u32, &str, &str)] = &[
    (1, "десятых", "десятая"),
    (2, "сотых", "сотая"),
    (3, "тысячных", "тысячная"),
    (4, "десятитысячных", "десятитысячная"),
    (5, "стотысячных", "стотысячная"),
    (6, "миллионных", "миллионная"),
];

/// Plus grand exposant nommable (millionièmes).
pub const EXPOSANT_MAX: u32 = 6;

/// Mot négatif en tête de phrase.
pub const MOT_MOINS: &str = "минус";
/// Conjonction entre partie entière et partie fractionnaire.
pub const MOT_ET: &str = "и";
/// Le zéro littéral.
pub const MOT_ZERO: &str = "ноль";
/// Marqueur de période.
pub const MOT_PERIODE: &str = "в периоде";

/// Synonymes d’opérateurs -> symbole canonique.
const SYNONYMES: &[(&str, char)] = &[
    ("плюс", '+'),
    ("прибавить", '+'),
    ("сложить с", '+'),
    ("минус", '-'),
    ("вычесть", '-'),
    ("отнять", '-'),
    ("умножить на", '*'),
    ("умножить", '*'),
    ("умноженное на", '*'),
    ("помножить на", '*'),
    ("разделить на", '/'),
    ("разделить", '/'),
    ("делить на", '/'),
    ("деленное на", '/'),
    ("делённое на", '/'),
    ("поделить на", '/'),
    ("остаток от деления на", '%'),
    ("остаток от деления", '%'),
    ("остаток", '%'),
    ("по модулю", '%'),
];

/* ------------------------ Classement d’un mot ------------------------ */

/// Rôle lexical d’un mot de numéral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mot {
    /// Unité, dizaine ou centaine : s’additionne au sous-total.
    Nombre(u32),
    /// Échelle (1000, 1 000 000) : multiplie le sous-total.
    Echelle(u32),
    /// Dénominateur 10^k.
    Fraction(u32),
}

fn table_mots() -> &'static HashMap<&'static str, Mot> {
    static TABLE: OnceLock<HashMap<&'static str, Mot>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut t = HashMap::new();
        for &(mot, v) in UNITES.iter().chain(DIZAINES).chain(CENTAINES) {
            t.insert(mot, Mot::Nombre(v));
        }
        for &(mot, v) in ECHELLES {
            t.insert(mot, Mot::Echelle(v));
        }
        for &(k, pluriel, singulier) in FRACTIONS {
            t.insert(pluriel, Mot::Fraction(k));
            t.insert(singulier, Mot::Fraction(k));
        }
        t
    })
}

/// Classe un mot (déjà en minuscules). None si inconnu.
pub fn classer(mot: &str) -> Option<Mot> {
    table_mots().get(mot).copied()
}

/* ------------------------ Tables inverses ------------------------ */

struct Inverses {
    unites: HashMap<u32, &'static str>,
    dizaines: HashMap<u32, &'static str>,
    centaines: HashMap<u32, &'static str>,
    feminin: HashMap<u32, &'static str>,
    fractions: HashMap<u32, (&'static str, &'static str)>,
}

fn inverses() -> &'static Inverses {
    static INV: OnceLock<Inverses> = OnceLock::new();
    INV.get_or_init(|| {
        // première forme listée = forme canonique (ordre des tables, pas d’un HashMap)
        fn inverse(table: &[(&'static str, u32)]) -> HashMap<u32, &'static str> {
            let mut m = HashMap::new();
            for &(mot, v) in table {
                m.entry(v).or_insert(mot);
            }
            m
        }
        Inverses {
            unites: inverse(UNITES),
            dizaines: inverse(DIZAINES),
            centaines: inverse(CENTAINES),
            feminin: FEMININ.iter().copied().collect(),
            fractions: FRACTIONS.iter().map(|&(k, p, s)| (k, (p, s))).collect(),
        }
    })
}

/// Mot d’une unité 0..=19. `feminin` : одна/две au lieu de один/два.
pub fn mot_unite(n: u32, feminin: bool) -> Option<&'static str> {
    let inv = inverses();
    if feminin {
        if let Some(m) = inv.feminin.get(&n) {
            return Some(*m);
        }
    }
    inv.unites.get(&n).copied()
}

/// Mot d’une dizaine (20, 30, …, 90).
pub fn mot_dizaine(n: u32) -> Option<&'static str> {
    inverses().dizaines.get(&n).copied()
}

/// Mot d’une centaine (100, …, 900).
pub fn mot_centaine(n: u32) -> Option<&'static str> {
    inverses().centaines.get(&n).copied()
}

/// Mot du dénominateur 10^k : (pluriel génitif, singulier).
pub fn mots_fraction(k: u32) -> Option<(&'static str, &'static str)> {
    inverses().fractions.get(&k).copied()
}

/* ------------------------ Opérateurs ------------------------ */

/// Synonymes découpés en mots, du plus long au plus court (en nombre de mots).
/// Ainsi "умножить на" passe avant "умножить", "остаток от деления на" avant "остаток".
pub fn synonymes_operateurs() -> &'static [(Vec<&'static str>, char)] {
    static SYN: OnceLock<Vec<(Vec<&'static str>, char)>> = OnceLock::new();
    SYN.get_or_init(|| {
        let mut v: Vec<(Vec<&'static str>, char)> = SYNONYMES
            .iter()
            .map(|&(s, c)| (s.split_whitespace().collect(), c))
            .collect();
        // tri stable : à longueur égale, l’ordre de la table est conservé
        v.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        v
    })
}
