// src/noyau/lecture.rs
//
// Lecture d’un numéral russe -> ValeurExacte.
//
//   "минус двадцать пять тысяч триста и семь сотых"
//     signe   | partie entière            | “и” | fraction
//
// Règles:
// - "ноль" seul => 0
// - "минус" en tête => signe négatif (appliqué en dernier)
// - partie entière : sous-total (unités/dizaines/centaines) ; une échelle (тысяча, миллион)
//   multiplie le sous-total (1 s’il est vide) et le verse dans le résultat
// - fraction : numérateur accumulé pareil, jusqu’au premier mot-dénominateur (десятых…)
// - sans "и", une phrase contenant un dénominateur est une fraction pure ("три десятых")

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::erreur::ErreurCalcul;
use super::lexique::{classer, Mot, MOT_ET, MOT_MOINS, MOT_ZERO};
use super::valeur::ValeurExacte;

/// Accumulateur “lecture longue” : (sous-total × échelle) + … + sous-total.
#[derive(Default)]
struct Accumulateur {
    resultat: BigInt,
    sous_total: BigInt,
    mots_lus: usize,
}

impl Accumulateur {
    fn nombre(&mut self, v: u32) {
        self.sous_total += v;
        self.mots_lus += 1;
    }

    fn echelle(&mut self, e: u32) {
        let base = if self.sous_total.is_zero() {
            BigInt::one()
        } else {
            std::mem::take(&mut self.sous_total)
        };
        self.resultat += base * e;
        self.mots_lus += 1;
    }

    fn total(self) -> BigInt {
        self.resultat + self.sous_total
    }
}

/// Lit une phrase numérale complète.
pub fn lire_nombre(phrase: &str) -> Result<ValeurExacte, ErreurCalcul> {
    let bas = phrase.to_lowercase();
    let mut mots: Vec<&str> = bas.split_whitespace().collect();

    if mots.is_empty() {
        return Err(ErreurCalcul::nombre(phrase.trim()));
    }
    if mots == [MOT_ZERO] {
        return Ok(ValeurExacte::zero());
    }

    let negatif = mots[0] == MOT_MOINS;
    if negatif {
        mots.remove(0);
        if mots.is_empty() {
            return Err(ErreurCalcul::nombre(phrase.trim()));
        }
    }

    let valeur = match mots.iter().position(|m| *m == MOT_ET) {
        Some(i) => {
            let (entier, reste) = mots.split_at(i);
            if entier.is_empty() || reste.len() < 2 {
                return Err(ErreurCalcul::nombre(phrase.trim()));
            }
            let e = lire_entier(entier)?;
            let (n, k) = lire_fraction(&reste[1..])?;
            ValeurExacte::decimal(e, n, k)
        }
        None if mots.iter().any(|m| matches!(classer(m), Some(Mot::Fraction(_)))) => {
            let (n, k) = lire_fraction(&mots)?;
            ValeurExacte::decimal(0, n, k)
        }
        None => ValeurExacte::entier(lire_entier(&mots)?),
    };

    tracing::trace!(phrase, valeur = %valeur, "numéral lu");

    Ok(if negatif { -valeur } else { valeur })
}

/// Partie entière : tous les mots doivent être des nombres ou des échelles.
fn lire_entier(mots: &[&str]) -> Result<BigInt, ErreurCalcul> {
    let mut acc = Accumulateur::default();
    for &mot in mots {
        match classer(mot) {
            Some(Mot::Nombre(v)) => acc.nombre(v),
            Some(Mot::Echelle(e)) => acc.echelle(e),
            Some(Mot::Fraction(_)) | None => return Err(ErreurCalcul::nombre(mot)),
        }
    }
    Ok(acc.total())
}

/// Partie fractionnaire : (numérateur, exposant du dénominateur).
/// S’arrête au premier mot-dénominateur ; ce qui suit est ignoré.
fn lire_fraction(mots: &[&str]) -> Result<(BigInt, u32), ErreurCalcul> {
    let mut acc = Accumulateur::default();
    for &mot in mots {
        match classer(mot) {
            Some(Mot::Nombre(v)) => acc.nombre(v),
            Some(Mot::Echelle(e)) => acc.echelle(e),
            Some(Mot::Fraction(k)) => {
                if acc.mots_lus == 0 {
                    return Err(ErreurCalcul::nombre(mot));
                }
                return Ok((acc.total(), k));
            }
            None => return Err(ErreurCalcul::nombre(mot)),
        }
    }
    // pas de dénominateur : la fraction n’a pas de sens
    Err(ErreurCalcul::nombre(mots.join(" ")))
}
