// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Construites au point de détection, propagées telles quelles jusqu’à l’appelant.
// Aucune reprise : une erreur annule tout le calcul (pas de résultat partiel).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Aucun opérateur reconnu dans l’expression.
    #[error("неизвестная операция")]
    OperationInconnue,

    /// Structure opérandes/opérateurs incohérente (parenthèses, opérande manquant…).
    #[error("некорректное выражение: {0}")]
    ExpressionInvalide(String),

    /// Un mot (ou une suite de mots) ne se lit pas comme un nombre.
    #[error("нераспознанное число: «{0}»")]
    NombreInconnu(String),

    /// Opérande droit nul pour ÷ ou %.
    #[error("деление на ноль")]
    DivisionParZero,
}

impl ErreurCalcul {
    pub(crate) fn invalide(detail: impl Into<String>) -> Self {
        ErreurCalcul::ExpressionInvalide(detail.into())
    }

    pub(crate) fn nombre(fragment: impl Into<String>) -> Self {
        ErreurCalcul::NombreInconnu(fragment.into())
    }
}
