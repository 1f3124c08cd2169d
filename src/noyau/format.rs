// src/noyau/format.rs
//
// Rendu ValeurExacte -> numéral russe.
//
// - entier : millions / milliers / reste (0..999), chaque bande via centaines/dizaines/unités
// - échelles et dénominateurs accordés par une petite table (n mod 10, n mod 100, contexte)
// - milliers et numérateurs de fraction au féminin (одна/две)
// - fraction non périodique : arrondie aux millionièmes, zéros de fin retirés
// - fraction périodique : [préfixe + “и”] + bloc + “в периоде”
// - négatif : “минус …” ; zéro : “ноль”

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use super::lexique::{
    mot_centaine, mot_dizaine, mot_unite, mots_fraction, EXPOSANT_MAX, MOT_ET, MOT_MOINS,
    MOT_PERIODE, MOT_ZERO,
};
use super::periode::Periode;
use super::valeur::ValeurExacte;

/* ------------------------ Accord grammatical ------------------------ */

/// Classe d’accord d’un nom compté.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accord {
    /// 1, 21, 31… (pas 11)
    Singulier,
    /// 2–4, 22–24… (pas 12–14)
    Paucal,
    /// tout le reste
    Pluriel,
}

/// Famille de suffixes : “тысяча” a la sienne, les autres noms comptés la générique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contexte {
    Milliers,
    Generique,
}

pub fn accord(n: u32) -> Accord {
    match (n % 10, n % 100) {
        (1, c) if c != 11 => Accord::Singulier,
        (2..=4, c) if !(12..=14).contains(&c) => Accord::Paucal,
        _ => Accord::Pluriel,
    }
}

fn suffixe(contexte: Contexte, a: Accord) -> &'static str {
    match (contexte, a) {
        (_, Accord::Singulier) => "",
        (Contexte::Milliers, Accord::Paucal) => "и",
        (Contexte::Generique, Accord::Paucal) => "а",
        (Contexte::Milliers, Accord::Pluriel) => "",
        (Contexte::Generique, Accord::Pluriel) => "ов",
    }
}

/// Nom d’échelle : forme singulière + racine à suffixer.
struct Echelle {
    singulier: &'static str,
    racine: &'static str,
    contexte: Contexte,
    feminin: bool,
}

const MILLIERS: Echelle = Echelle {
    singulier: "тысяча",
    racine: "тысяч",
    contexte: Contexte::Milliers,
    feminin: true,
};

const MILLIONS: Echelle = Echelle {
    singulier: "миллион",
    racine: "миллион",
    contexte: Contexte::Generique,
    feminin: false,
};

impl Echelle {
    fn forme(&self, compte: u32) -> String {
        match accord(compte) {
            Accord::Singulier => self.singulier.to_string(),
            a => format!("{}{}", self.racine, suffixe(self.contexte, a)),
        }
    }
}

/// Dénominateur 10^k accordé au numérateur (сотая / сотых).
fn mot_denominateur(k: u32, numer: u32) -> Option<&'static str> {
    let (pluriel, singulier) = mots_fraction(k)?;
    Some(match accord(numer) {
        Accord::Singulier => singulier,
        _ => pluriel,
    })
}

/* ------------------------ Entiers ------------------------ */

fn petit(n: &BigInt) -> u32 {
    n.to_u32().unwrap_or(0)
}

/// Bande 1..=999 en mots.
fn ecrire_bande(n: u32, feminin: bool, out: &mut Vec<&'static str>) {
    out.extend(mot_centaine(n / 100 * 100));
    let r = n % 100;
    if r == 0 {
        return;
    }
    if r < 20 {
        out.extend(mot_unite(r, feminin));
        return;
    }
    out.extend(mot_dizaine(r / 10 * 10));
    if r % 10 > 0 {
        out.extend(mot_unite(r % 10, feminin));
    }
}

/// Entier positif en mots. `feminin` : genre des unités finales (numérateurs de fraction).
pub fn ecrire_entier(n: &BigInt, feminin: bool) -> String {
    if n.is_zero() {
        return MOT_ZERO.to_string();
    }

    let mille = BigInt::from(1_000);
    let million = BigInt::from(1_000_000);

    let millions = n / &million;
    let milliers = petit(&((n / &mille) % &mille));
    let reste = petit(&(n % &mille));

    let mut parts: Vec<String> = Vec::new();

    if !millions.is_zero() {
        let compte = petit(&(&millions % 100u32));
        if millions < mille {
            let mut mots = Vec::new();
            ecrire_bande(petit(&millions), MILLIONS.feminin, &mut mots);
            parts.push(mots.join(" "));
        } else {
            // au-delà : “тысяча миллионов”, lisible mais hors du domaine de relecture
            parts.push(ecrire_entier(&millions, MILLIONS.feminin));
        }
        parts.push(MILLIONS.forme(compte));
    }

    if milliers > 0 {
        let mut mots = Vec::new();
        ecrire_bande(milliers, MILLIERS.feminin, &mut mots);
        parts.push(mots.join(" "));
        parts.push(MILLIERS.forme(milliers));
    }

    if reste > 0 {
        let mut mots = Vec::new();
        ecrire_bande(reste, feminin, &mut mots);
        parts.push(mots.join(" "));
    }

    parts.join(" ")
}

/// Fraction numer / 10^k : “двадцать одна сотая”.
fn ecrire_fraction(numer: &BigInt, k: u32) -> String {
    let compte = petit(&(numer % 100u32));
    let n = ecrire_entier(numer, true);
    match mot_denominateur(k, compte) {
        Some(d) => format!("{n} {d}"),
        None => n,
    }
}

/// Retire les zéros de fin : (2500, 4) -> (25, 2).
fn reduire(mut numer: BigInt, mut k: u32) -> (BigInt, u32) {
    let dix = BigInt::from(10);
    while k > 0 && !numer.is_zero() && (&numer % &dix).is_zero() {
        numer /= &dix;
        k -= 1;
    }
    (numer, k)
}

/* ------------------------ API ------------------------ */

/// Rendu aux millionièmes.
pub fn ecrire_nombre(valeur: &ValeurExacte, periode: Option<&Periode>) -> String {
    ecrire_nombre_avec(valeur, periode, EXPOSANT_MAX)
}

/// Rendu avec `chiffres` décimales maximum (borné aux millionièmes).
pub fn ecrire_nombre_avec(
    valeur: &ValeurExacte,
    periode: Option<&Periode>,
    chiffres: u32,
) -> String {
    if valeur.is_zero() {
        return MOT_ZERO.to_string();
    }

    if let Some(p) = periode {
        if let Some(texte) = ecrire_periodique(valeur, p) {
            return texte;
        }
    }

    let a = valeur.arrondir(chiffres.min(EXPOSANT_MAX));
    if a.entier.is_zero() && a.fraction.is_zero() {
        return MOT_ZERO.to_string();
    }

    let mut texte = String::new();
    if a.negatif {
        texte.push_str(MOT_MOINS);
        texte.push(' ');
    }
    texte.push_str(&ecrire_entier(&a.entier, false));

    if !a.fraction.is_zero() {
        let (numer, k) = reduire(a.fraction, a.chiffres);
        texte.push_str(&format!(" {MOT_ET} {}", ecrire_fraction(&numer, k)));
    }
    texte
}

/// None si le bloc (avec son préfixe) dépasse les millionièmes : l’appelant arrondit alors.
fn ecrire_periodique(valeur: &ValeurExacte, p: &Periode) -> Option<String> {
    let longueur = p.debut + p.bloc.len();
    if p.bloc.is_empty() || longueur > EXPOSANT_MAX as usize {
        return None;
    }
    let k_bloc = u32::try_from(longueur).ok()?;
    let k_prefixe = u32::try_from(p.debut).ok()?;

    let d = valeur.decomposer();
    let prefixe = valeur.chiffres_fractionnaires(k_prefixe);
    let prefixe = BigInt::parse_bytes(prefixe.as_bytes(), 10).unwrap_or_default();
    let bloc = BigInt::parse_bytes(p.bloc.as_bytes(), 10)?;

    let mut texte = String::new();
    if d.negatif {
        texte.push_str(MOT_MOINS);
        texte.push(' ');
    }
    texte.push_str(&ecrire_entier(&d.entier, false));
    texte.push_str(&format!(" {MOT_ET} "));

    // un préfixe nul reste écrit (“ноль десятых”) : 0.0(1) n’est pas 0.(01)
    if p.debut > 0 {
        texte.push_str(&ecrire_fraction(&prefixe, k_prefixe));
        texte.push_str(&format!(" {MOT_ET} "));
    }
    texte.push_str(&ecrire_fraction(&bloc, k_bloc));
    texte.push(' ');
    texte.push_str(MOT_PERIODE);
    Some(texte)
}
