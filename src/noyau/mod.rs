//! Noyau exact : numéraux russes
//!
//! Organisation interne :
//! - lexique.rs  : tables mot <-> valeur + synonymes d’opérateurs
//! - valeur.rs   : ValeurExacte (rationnel, jamais de flottant)
//! - lecture.rs  : numéral -> ValeurExacte
//! - jetons.rs   : tokenisation (phrases numérales déjà lues)
//! - rpn.rs      : évaluation deux piles + trace RPN
//! - periode.rs  : détection de période (développement tronqué)
//! - format.rs   : ValeurExacte -> numéral (accords, période)
//! - eval.rs     : pipeline complet
//! - reglages.rs : précisions / bornes
//! - erreur.rs   : ErreurCalcul

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod lexique;
pub mod periode;
pub mod reglages;
pub mod rpn;
pub mod valeur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calculer, calculer_avec, calculer_detaille, Demarche};
pub use reglages::Reglages;
pub use valeur::ValeurExacte;
