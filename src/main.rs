// src/main.rs
//
// Calculatrice montant : point d’entrée terminal
// ----------------------------------------------
// Chaque expression passe par un ChampMontant (comme le champ du formulaire) :
// saisir -> valider -> rendu. Code de sortie 1 si au moins une expression échoue.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::info;

use calculatrice_montant::app::options::{init_logger, AIDE};
use calculatrice_montant::app::{ChampMontant, Options};

fn traiter(
    champ: &mut ChampMontant,
    expr: &str,
    demarche: bool,
    out: &mut impl Write,
) -> io::Result<bool> {
    champ.saisir(expr);
    let ok = champ.valider().is_ok();
    writeln!(out, "{}", champ.rendu(demarche))?;
    Ok(ok)
}

/// Évalue toutes les expressions ; renvoie le nombre d’échecs.
fn executer(options: &Options, out: &mut impl Write) -> io::Result<usize> {
    let mut champ = ChampMontant::new();
    let mut echecs = 0usize;

    if options.expressions.is_empty() {
        info!("lecture des expressions sur stdin");
        for ligne in io::stdin().lock().lines() {
            let ligne = ligne?;
            // lignes blanches ignorées en mode flux
            if ligne.trim().is_empty() {
                continue;
            }
            if !traiter(&mut champ, &ligne, options.demarche, out)? {
                echecs += 1;
            }
        }
    } else {
        for expr in &options.expressions {
            if !traiter(&mut champ, expr, options.demarche, out)? {
                echecs += 1;
            }
        }
    }

    Ok(echecs)
}

fn main() -> ExitCode {
    let options = match Options::depuis_args(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(msg) => {
            eprintln!("{msg}\n\n{AIDE}");
            return ExitCode::from(2);
        }
    };

    if options.aide {
        println!("{AIDE}");
        return ExitCode::SUCCESS;
    }

    init_logger(options.niveau_log);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match executer(&options, &mut out) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(echecs) => {
            info!("{echecs} expression(s) en échec");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("erreur d’entrée/sortie: {e}");
            ExitCode::from(2)
        }
    }
}
