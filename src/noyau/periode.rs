// src/noyau/periode.rs
//
// Détection d’une période dans un développement décimal (chaînes de chiffres).
//
// Heuristique bornée, PAS une preuve :
// - on travaille sur un développement à précision fixe (tronqué)
// - zéros de fin retirés d’abord (ils ne forment jamais une période)
// - longueur de 1 à `periode_max`, puis début le plus tôt
// - un bloc est accepté s’il se répète 3 fois de suite (bloc + 2 copies) et n’est pas que des zéros
//
// Limites assumées : une période plus longue que la fenêtre est manquée ;
// le bloc n’a pas à courir jusqu’au bout de la fenêtre, donc une tête qui se
// répète 3 fois gagne : 67/600 = 0.111(6) donne le bloc "1" en position 0.

/// Longueur maximale de période par défaut.
pub const PERIODE_MAX_DEFAUT: usize = 4;

/// Répétitions contiguës exigées (bloc compris).
const REPETITIONS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Periode {
    /// Décalage du bloc dans la chaîne des chiffres fractionnaires.
    pub debut: usize,
    /// Chiffres du bloc répété.
    pub bloc: String,
}

/// Cherche le plus petit bloc répété (puis le plus tôt).
pub fn trouver_periode(chiffres: &str, periode_max: usize) -> Option<Periode> {
    let s = chiffres.trim_end_matches('0').as_bytes();
    let n = s.len();

    for long in 1..=periode_max {
        if long * REPETITIONS > n {
            break;
        }
        for debut in 0..=(n - long * REPETITIONS) {
            let bloc = &s[debut..debut + long];
            if bloc.iter().all(|&c| c == b'0') {
                continue;
            }
            let repete = (1..REPETITIONS).all(|k| {
                let d = debut + k * long;
                &s[d..d + long] == bloc
            });
            if repete {
                return Some(Periode {
                    debut,
                    bloc: String::from_utf8_lossy(bloc).into_owned(),
                });
            }
        }
    }
    None
}
