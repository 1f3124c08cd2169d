// src/noyau/rpn.rs
//
// Évaluation par précédence d’opérateurs (deux piles : opérateurs / valeurs).
//
// Règles:
// - précédence : * / % = 2, + - = 1, tous associatifs à gauche
// - à chaque opérateur entrant : on applique le sommet tant que sa précédence est >= (hors '(')
// - ')' : applique jusqu’à '(' ; '(' manquante => ExpressionInvalide
// - fin : vide la pile ; une '(' restante => ExpressionInvalide
// - suite vide => 0 (repli défini, pas une erreur)
//
// Chaque opérateur appliqué est aussi noté dans une trace RPN (pour la démarche).

use super::erreur::ErreurCalcul;
use super::jetons::Tok;
use super::valeur::ValeurExacte;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        _ => 0,
    }
}

/// Dépile deux valeurs, applique l’opérateur, empile le résultat.
fn appliquer(
    op: Tok,
    valeurs: &mut Vec<ValeurExacte>,
    trace: &mut Vec<Tok>,
) -> Result<(), ErreurCalcul> {
    let b = valeurs
        .pop()
        .ok_or_else(|| ErreurCalcul::invalide("оператору не хватает числа"))?;
    let a = valeurs
        .pop()
        .ok_or_else(|| ErreurCalcul::invalide("оператору не хватает числа"))?;

    let r = match op {
        Tok::Plus => a + b,
        Tok::Minus => a - b,
        Tok::Star => a * b,
        Tok::Slash => a.diviser(&b)?,
        Tok::Percent => a.modulo(&b)?,
        Tok::Num(_) | Tok::LPar | Tok::RPar => {
            return Err(ErreurCalcul::invalide("неожиданная скобка"));
        }
    };

    trace.push(op);
    valeurs.push(r);
    Ok(())
}

/// Évalue une suite de jetons.
pub fn evaluer(tokens: &[Tok]) -> Result<ValeurExacte, ErreurCalcul> {
    evaluer_avec_trace(tokens).map(|(v, _)| v)
}

/// Évalue et renvoie aussi la RPN effectivement appliquée.
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(2), Star, Num(2)]
///   rpn:    [Num(2), Num(2), Num(2), Star, Plus]  => 6
pub fn evaluer_avec_trace(tokens: &[Tok]) -> Result<(ValeurExacte, Vec<Tok>), ErreurCalcul> {
    if tokens.is_empty() {
        return Ok((ValeurExacte::zero(), Vec::new()));
    }

    let mut valeurs: Vec<ValeurExacte> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();
    let mut trace: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(v) => {
                valeurs.push(v.clone());
                trace.push(Tok::Num(v));
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // applique jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => appliquer(op, &mut valeurs, &mut trace)?,
                        None => return Err(ErreurCalcul::invalide("лишняя «)»")),
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        appliquer(op, &mut valeurs, &mut trace)?;
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::invalide("незакрытая «(»"));
        }
        appliquer(op, &mut valeurs, &mut trace)?;
    }

    let resultat = valeurs.pop().ok_or_else(|| ErreurCalcul::invalide("нет числа"))?;
    if !valeurs.is_empty() {
        return Err(ErreurCalcul::invalide("пропущен оператор между числами"));
    }

    Ok((resultat, trace))
}
