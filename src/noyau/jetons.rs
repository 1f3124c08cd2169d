// src/noyau/jetons.rs
//
// Tokenisation d’une expression “numéraux russes + opérateurs”.
//
//   "(два плюс два) умножить на минус три"
//     => LPar Num(2) Plus Num(2) RPar Star Num(-3)
//
// Étapes:
// 1) minuscules + découpage en unités brutes : mots (lettres, chiffres) / symboles
// 2) synonymes d’opérateurs (plus long d’abord, sur mots entiers) => symbole canonique
// 3) les mots consécutifs entre deux symboles forment UNE phrase => lire_nombre
//
// Moins unaire (là où on attend un opérande) :
// - devant une phrase : la phrase est négativée
// - devant '(' : groupe synthétique ( 0 - ( ... ) ), refermé avec la parenthèse réelle
// Tout autre opérateur à la place d’un opérande => ExpressionInvalide.

use super::erreur::ErreurCalcul;
use super::lecture::lire_nombre;
use super::lexique::synonymes_operateurs;
use super::valeur::ValeurExacte;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(ValeurExacte),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    LPar,
    RPar,
}

/// Unité lexicale avant reconnaissance des nombres.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Brut {
    Mot(String),
    Symbole(char),
}

/// Symbole canonique d’un caractère (variantes typographiques comprises).
fn symbole(c: char) -> Option<char> {
    match c {
        '+' => Some('+'),
        '-' | '−' | '–' => Some('-'),
        '*' | '×' | '·' => Some('*'),
        '/' | '÷' | ':' => Some('/'),
        '%' => Some('%'),
        '(' => Some('('),
        ')' => Some(')'),
        _ => None,
    }
}

fn decouper(s: &str) -> Result<Vec<Brut>, ErreurCalcul> {
    let mut out = Vec::new();
    let mut mot = String::new();

    for c in s.chars() {
        // les chiffres restent collés au mot : "3" devient un nombre inconnu
        if c.is_alphanumeric() {
            mot.push(c);
            continue;
        }
        if !mot.is_empty() {
            out.push(Brut::Mot(std::mem::take(&mut mot)));
        }
        if c.is_whitespace() {
            continue;
        }
        match symbole(c) {
            Some(sym) => out.push(Brut::Symbole(sym)),
            None => {
                return Err(ErreurCalcul::invalide(format!("неожиданный символ «{c}»")));
            }
        }
    }
    if !mot.is_empty() {
        out.push(Brut::Mot(mot));
    }
    Ok(out)
}

/// Remplace les synonymes d’opérateurs (suites de mots entiers) par leur symbole.
fn normaliser_operateurs(brut: Vec<Brut>) -> Vec<Brut> {
    let synonymes = synonymes_operateurs();
    let mut out = Vec::with_capacity(brut.len());
    let mut i = 0;

    'unites: while i < brut.len() {
        for (mots, sym) in synonymes {
            let fin = i + mots.len();
            if fin > brut.len() {
                continue;
            }
            let correspond = brut[i..fin]
                .iter()
                .zip(mots.iter())
                .all(|(b, m)| matches!(b, Brut::Mot(w) if w == m));
            if correspond {
                out.push(Brut::Symbole(*sym));
                i = fin;
                continue 'unites;
            }
        }
        out.push(brut[i].clone());
        i += 1;
    }
    out
}

/// Tokenize une expression en jetons (les phrases numérales sont déjà lues).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let bas = s.to_lowercase();
    let unites = normaliser_operateurs(decouper(&bas)?);

    let mut out: Vec<Tok> = Vec::new();
    let mut phrase: Vec<&str> = Vec::new();

    // “on attend un opérande” : début, après '(' ou après un opérateur
    let mut attend_operande = true;
    let mut operateur_vu = false;
    let mut negation = false;

    // profondeur des parenthèses réelles + groupes synthétiques à refermer
    let mut profondeur: usize = 0;
    let mut fermetures: Vec<usize> = Vec::new();

    let mut i = 0;
    while i < unites.len() {
        let sym = match &unites[i] {
            Brut::Mot(w) => {
                phrase.push(w.as_str());
                i += 1;
                continue;
            }
            Brut::Symbole(c) => *c,
        };

        if !phrase.is_empty() {
            pousser_phrase(&mut out, &mut phrase, &mut negation, attend_operande)?;
            attend_operande = false;
        }

        match sym {
            '(' => {
                if !attend_operande {
                    return Err(ErreurCalcul::invalide("пропущен оператор перед «(»"));
                }
                out.push(Tok::LPar);
                profondeur += 1;
            }
            ')' => {
                if attend_operande {
                    return Err(ErreurCalcul::invalide("пропущено число перед «)»"));
                }
                out.push(Tok::RPar);
                while fermetures.last() == Some(&profondeur) {
                    fermetures.pop();
                    out.push(Tok::RPar);
                }
                profondeur = profondeur.saturating_sub(1);
            }
            '-' if attend_operande => {
                operateur_vu = true;
                match unites.get(i + 1) {
                    Some(Brut::Mot(_)) => negation = true,
                    Some(Brut::Symbole('(')) => {
                        out.push(Tok::LPar);
                        out.push(Tok::Num(ValeurExacte::zero()));
                        out.push(Tok::Minus);
                        fermetures.push(profondeur + 1);
                    }
                    _ => return Err(ErreurCalcul::invalide("два оператора подряд")),
                }
            }
            _ => {
                if attend_operande {
                    return Err(ErreurCalcul::invalide(format!(
                        "оператор «{sym}» без левого операнда"
                    )));
                }
                out.push(match sym {
                    '+' => Tok::Plus,
                    '-' => Tok::Minus,
                    '*' => Tok::Star,
                    '/' => Tok::Slash,
                    _ => Tok::Percent,
                });
                operateur_vu = true;
                attend_operande = true;
            }
        }
        i += 1;
    }

    if !phrase.is_empty() {
        pousser_phrase(&mut out, &mut phrase, &mut negation, attend_operande)?;
        attend_operande = false;
    }

    if !operateur_vu {
        return Err(ErreurCalcul::OperationInconnue);
    }
    if attend_operande {
        return Err(ErreurCalcul::invalide("выражение обрывается на операторе"));
    }

    tracing::debug!(jetons = %format_tokens(&out), "expression tokenisée");
    Ok(out)
}

fn pousser_phrase(
    out: &mut Vec<Tok>,
    phrase: &mut Vec<&str>,
    negation: &mut bool,
    attend_operande: bool,
) -> Result<(), ErreurCalcul> {
    let texte = phrase.join(" ");
    phrase.clear();
    if !attend_operande {
        return Err(ErreurCalcul::invalide(format!(
            "пропущен оператор перед «{texte}»"
        )));
    }
    let v = lire_nombre(&texte)?;
    out.push(Tok::Num(if std::mem::take(negation) { -v } else { v }));
    Ok(())
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => v.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
