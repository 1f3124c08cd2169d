//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> évaluation deux piles (+ trace RPN) -> ValeurExacte
//!          -> période (si la valeur ne tient pas en millionièmes) -> numéral russe
//!
//! Aucune E/S ici : une expression entre, un texte (ou une erreur) sort.

use super::erreur::ErreurCalcul;
use super::format::ecrire_nombre_avec;
use super::jetons::{format_tokens, tokenize};
use super::periode::{trouver_periode, Periode};
use super::reglages::Reglages;
use super::rpn::evaluer_avec_trace;
use super::valeur::ValeurExacte;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub exact: ValeurExacte,
    pub periode: Option<Periode>,
    pub resultat: String,
}

/// API publique : expression -> numéral russe (réglages par défaut).
pub fn calculer(expression: &str) -> Result<String, ErreurCalcul> {
    calculer_avec(expression, &Reglages::default())
}

pub fn calculer_avec(expression: &str, reglages: &Reglages) -> Result<String, ErreurCalcul> {
    calculer_detaille(expression, reglages).map(|d| d.resultat)
}

/// Comme `calculer_avec`, en gardant chaque étape.
pub fn calculer_detaille(expression: &str, reglages: &Reglages) -> Result<Demarche, ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(expression.trim())?;

    // 2) Évaluation (deux piles) + RPN appliquée
    let (exact, rpn) = evaluer_avec_trace(&jetons)?;
    tracing::debug!(rpn = %format_tokens(&rpn), exact = %exact, "expression évaluée");

    // 3) Période
    let periode = chercher_periode(&exact, reglages);
    if let Some(p) = &periode {
        tracing::debug!(debut = p.debut, bloc = %p.bloc, "période détectée");
    }

    // 4) Rendu
    let resultat = ecrire_nombre_avec(&exact, periode.as_ref(), reglages.chiffres_affichage);

    Ok(Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        exact,
        periode,
        resultat,
    })
}

/// Une valeur qui s’écrit exactement avec les décimales affichées n’a pas de période à montrer.
fn chercher_periode(valeur: &ValeurExacte, reglages: &Reglages) -> Option<Periode> {
    if valeur.est_decimal_fini(reglages.chiffres_affichage) {
        return None;
    }
    let chiffres = valeur.chiffres_fractionnaires(reglages.chiffres_developpement);
    trouver_periode(&chiffres, reglages.periode_max)
}
