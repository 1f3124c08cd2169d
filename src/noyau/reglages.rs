//! Réglages numériques du noyau.
//!
//! Contrats :
//! - valeurs par défaut = comportement de référence (20 chiffres, période ≤ 4, millionièmes)
//! - setters bornés (garde-fous), jamais d’erreur

use super::lexique::EXPOSANT_MAX;
use super::periode::PERIODE_MAX_DEFAUT;

/// Chiffres du développement utilisé pour chercher une période.
const DEVELOPPEMENT_DEFAUT: u32 = 20;
const DEVELOPPEMENT_MIN: u32 = 6;
const DEVELOPPEMENT_MAX: u32 = 200;

/// Une période plus longue ne peut pas être nommée (dénominateurs jusqu’aux millionièmes).
const PERIODE_MAX_BORNE: usize = EXPOSANT_MAX as usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub chiffres_developpement: u32,
    pub periode_max: usize,
    pub chiffres_affichage: u32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres_developpement: DEVELOPPEMENT_DEFAUT,
            periode_max: PERIODE_MAX_DEFAUT,
            chiffres_affichage: EXPOSANT_MAX,
        }
    }
}

impl Reglages {
    pub fn set_chiffres_developpement(&mut self, chiffres: u32) {
        self.chiffres_developpement = chiffres.clamp(DEVELOPPEMENT_MIN, DEVELOPPEMENT_MAX);
    }

    pub fn set_periode_max(&mut self, longueur: usize) {
        self.periode_max = longueur.clamp(1, PERIODE_MAX_BORNE);
    }

    pub fn set_chiffres_affichage(&mut self, chiffres: u32) {
        self.chiffres_affichage = chiffres.clamp(1, EXPOSANT_MAX);
    }
}
