// src/noyau/valeur.rs
//
// Valeur décimale exacte (rationnel à précision arbitraire).
//
// Contrats :
// - jamais de flottant : tout reste en BigRational jusqu’au rendu texte
// - dénominateur > 0, fraction toujours réduite (garanti par BigRational)
// - ÷ et % par zéro => ErreurCalcul::DivisionParZero (pas de panique)
// - l’arrondi (millionièmes) n’existe qu’ici, explicitement, pour le rendu

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::ErreurCalcul;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValeurExacte(BigRational);

/// Vue “signe / partie entière / fraction” d’une valeur (fraction réduite, num < den).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    pub negatif: bool,
    pub entier: BigInt,
    pub numer: BigInt,
    pub denom: BigInt,
}

/// Valeur arrondie à `chiffres` décimales : |v| ≈ entier + fraction / 10^chiffres.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrondi {
    pub negatif: bool,
    pub entier: BigInt,
    pub fraction: BigInt,
    pub chiffres: u32,
}

impl ValeurExacte {
    pub fn zero() -> Self {
        ValeurExacte(BigRational::zero())
    }

    pub fn entier(n: impl Into<BigInt>) -> Self {
        ValeurExacte(BigRational::from_integer(n.into()))
    }

    /// entier + numer / 10^exposant (magnitudes positives, signe appliqué à part).
    pub fn decimal(entier: impl Into<BigInt>, numer: impl Into<BigInt>, exposant: u32) -> Self {
        let e = BigRational::from_integer(entier.into());
        let f = BigRational::new(numer.into(), pow10(exposant));
        ValeurExacte(e + f)
    }

    /// n / d ; d = 0 => DivisionParZero.
    pub fn fraction(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Result<Self, ErreurCalcul> {
        let d = d.into();
        if d.is_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        Ok(ValeurExacte(BigRational::new(n.into(), d)))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Self {
        ValeurExacte(self.0.abs())
    }

    pub fn diviser(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if autre.is_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        Ok(ValeurExacte(&self.0 / &autre.0))
    }

    /// Modulo “plancher” : a − b·⌊a/b⌋ (le reste prend le signe du diviseur).
    pub fn modulo(&self, autre: &Self) -> Result<Self, ErreurCalcul> {
        if autre.is_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        let q = (&self.0 / &autre.0).floor();
        Ok(ValeurExacte(&self.0 - &autre.0 * q))
    }

    pub fn decomposer(&self) -> Decomposition {
        let m = self.0.abs();
        let (entier, reste) = m.numer().div_rem(m.denom());
        Decomposition {
            negatif: self.is_negative(),
            entier,
            numer: reste,
            denom: m.denom().clone(),
        }
    }

    /// Vrai si la valeur s’écrit exactement avec au plus `chiffres` décimales
    /// (dénominateur réduit divise 10^chiffres).
    pub fn est_decimal_fini(&self, chiffres: u32) -> bool {
        pow10(chiffres).is_multiple_of(self.0.denom())
    }

    /// Arrondi au plus proche (demi vers le haut, sur la magnitude).
    pub fn arrondir(&self, chiffres: u32) -> Arrondi {
        let echelle = pow10(chiffres);
        let m = self.0.abs();
        let deux = BigInt::from(2);
        // round(n·10^c / d) = ⌊(2·n·10^c + d) / (2·d)⌋
        let n = m.numer() * &echelle * &deux + m.denom();
        let scaled = n / (m.denom() * &deux);
        let (entier, fraction) = scaled.div_rem(&echelle);
        Arrondi {
            negatif: self.is_negative() && !(entier.is_zero() && fraction.is_zero()),
            entier,
            fraction,
            chiffres,
        }
    }

    /// Développement décimal TRONQUÉ de la partie fractionnaire de |v|,
    /// sur exactement `chiffres` chiffres (zéros de tête conservés).
    pub fn chiffres_fractionnaires(&self, chiffres: u32) -> String {
        let d = self.decomposer();
        let scaled = (&d.numer * pow10(chiffres)) / &d.denom;
        let mut s = scaled.to_str_radix(10);
        while s.len() < chiffres as usize {
            s.insert(0, '0');
        }
        s
    }
}

impl Add for ValeurExacte {
    type Output = ValeurExacte;
    fn add(self, rhs: Self) -> Self {
        ValeurExacte(self.0 + rhs.0)
    }
}

impl Sub for ValeurExacte {
    type Output = ValeurExacte;
    fn sub(self, rhs: Self) -> Self {
        ValeurExacte(self.0 - rhs.0)
    }
}

impl Mul for ValeurExacte {
    type Output = ValeurExacte;
    fn mul(self, rhs: Self) -> Self {
        ValeurExacte(self.0 * rhs.0)
    }
}

impl Neg for ValeurExacte {
    type Output = ValeurExacte;
    fn neg(self) -> Self {
        ValeurExacte(-self.0)
    }
}

/// Forme brute p/q (démarche / debug).
impl fmt::Display for ValeurExacte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.denom().is_one() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}
