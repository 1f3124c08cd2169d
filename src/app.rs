// src/app.rs
//
// Calculatrice de numéraux russes : module App (racine)
// -----------------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
//
// La boucle console vit dans vue.rs ; le noyau ne fait aucune E/S.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;
