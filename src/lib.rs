//! Calculatrice de numéraux russes : expressions “сто двадцать пять и три десятых плюс …”
//! évaluées en rationnels exacts, résultat réécrit en numéral russe.

pub mod noyau;

pub use noyau::{calculer, calculer_avec, calculer_detaille, Demarche, ErreurCalcul, Reglages};
