//! src/app/etat.rs
//!
//! État de la session console (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, réglages)
//! et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Réglages bornés par le noyau (setters de Reglages).

use calculatrice_russe::{Demarche, ErreurCalcul, Reglages};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (jetons, RPN, valeur exacte) ---
    pub demarche: Option<Demarche>,
    pub afficher_demarche: bool,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /// Effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = None;
    }

    /// Une erreur efface le dernier résultat : pas de résultat partiel.
    pub fn set_erreur(&mut self, e: &ErreurCalcul) {
        self.clear_resultats();
        self.erreur = e.to_string();
    }

    pub fn set_resultat(&mut self, d: Demarche) {
        self.erreur.clear();
        self.resultat = d.resultat.clone();
        self.demarche = Some(d);
    }

    pub fn basculer_demarche(&mut self) {
        self.afficher_demarche = !self.afficher_demarche;
    }
}
