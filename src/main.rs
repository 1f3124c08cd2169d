// src/main.rs
//
// Calculatrice de numéraux russes : point d’entrée console
// --------------------------------------------------------
// - journal : tracing sur stderr, filtré par RUST_LOG (défaut : warn)
// - réglages : CALC_PERIODE_MAX, CALC_CHIFFRES (optionnels, bornés par le noyau)
// - stdout ne porte que l’invite, les réponses et les erreurs

use std::io;
use std::process::ExitCode;

use calculatrice_russe::Reglages;
use tracing_subscriber::EnvFilter;

mod app;

use app::AppCalc;

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .try_init();
}

/// Lit une variable d’environnement numérique ; valeur invalide => ignorée (avec avertissement).
fn lire_env<T: std::str::FromStr>(nom: &str) -> Option<T> {
    let brut = std::env::var(nom).ok()?;
    match brut.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(variable = nom, valeur = %brut, "réglage ignoré (nombre attendu)");
            None
        }
    }
}

fn reglages_depuis_env() -> Reglages {
    let mut r = Reglages::default();
    if let Some(n) = lire_env::<usize>("CALC_PERIODE_MAX") {
        r.set_periode_max(n);
    }
    if let Some(n) = lire_env::<u32>("CALC_CHIFFRES") {
        r.set_chiffres_developpement(n);
    }
    tracing::debug!(?r, "réglages");
    r
}

fn main() -> ExitCode {
    installer_journal();

    let mut app = AppCalc::avec_reglages(reglages_depuis_env());
    let stdin = io::stdin();
    let stdout = io::stdout();

    match app.boucle(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(erreur = %e, "E/S console");
            ExitCode::FAILURE
        }
    }
}
