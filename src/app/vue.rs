// src/app/vue.rs
//
// Vue console (lecture ligne à ligne, écriture du résultat)
// ---------------------------------------------------------
// - une ligne = une expression
// - "выход" / "exit" : fin de session ; fin de flux (EOF) aussi
// - ":шаги" / ":steps" : affiche/masque la démarche (jetons, RPN, valeur exacte)
// - résultat : "ответ: …" ; erreur : "ошибка: …" (marqueur explicite)
//
// Générique sur BufRead/Write : la même vue sert au binaire et aux tests.

use std::io::{self, BufRead, Write};

use calculatrice_russe::calculer_detaille;

use super::etat::AppCalc;

const INVITE: &str = "Напишите выражение для вычисления (выход — завершить)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Continuer,
    Quitter,
}

impl AppCalc {
    /// Boucle lecture/écriture jusqu’à EOF ou commande de sortie.
    pub fn boucle<R: BufRead, W: Write>(&mut self, entree: R, mut out: W) -> io::Result<()> {
        writeln!(out, "{INVITE}")?;
        out.flush()?;

        for ligne in entree.lines() {
            if self.traiter_ligne(&ligne?, &mut out)? == Commande::Quitter {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Traite une ligne saisie.
    pub fn traiter_ligne<W: Write>(&mut self, ligne: &str, out: &mut W) -> io::Result<Commande> {
        let s = ligne.trim();
        match s {
            "" => return Ok(Commande::Continuer),
            "выход" | "exit" | "quit" => return Ok(Commande::Quitter),
            ":шаги" | ":steps" => {
                self.basculer_demarche();
                let etat = if self.afficher_demarche { "вкл" } else { "выкл" };
                writeln!(out, "шаги: {etat}")?;
                return Ok(Commande::Continuer);
            }
            _ => {}
        }

        self.entree = s.to_string();
        self.eval_via_noyau();
        self.ecrire_sortie(out)?;
        Ok(Commande::Continuer)
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/démarche (ou erreur) dans l’état.
    fn eval_via_noyau(&mut self) {
        match calculer_detaille(&self.entree, &self.reglages) {
            Ok(d) => self.set_resultat(d),
            Err(e) => {
                tracing::info!(entree = %self.entree, erreur = %e, "évaluation refusée");
                self.set_erreur(&e);
            }
        }
    }

    fn ecrire_sortie<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.erreur.is_empty() {
            return writeln!(out, "ошибка: {}", self.erreur);
        }
        if self.afficher_demarche {
            if let Some(d) = &self.demarche {
                writeln!(out, "  лексемы: {}", d.jetons)?;
                writeln!(out, "  ОПН:     {}", d.rpn)?;
                writeln!(out, "  точно:   {}", d.exact)?;
                if let Some(p) = &d.periode {
                    writeln!(out, "  период:  ({}) с позиции {}", p.bloc, p.debut)?;
                }
            }
        }
        writeln!(out, "ответ: {}", self.resultat)
    }
}
