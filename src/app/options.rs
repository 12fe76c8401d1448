//! Options de la ligne de commande + initialisation des logs.
//!
//! Analyse à la main (pas de crate dédiée) :
//!   --log-level=off|error|warn|info|debug|trace
//!   --quiet / -q     (logs coupés)
//!   --demarche       (affiche les étapes du pipeline)
//!   --help / -h
//! Le reste : expressions à évaluer. Aucune => lecture ligne à ligne sur stdin.
//!
//! Sans `--log-level`, `RUST_LOG` s’applique (défaut : warn).

use log::LevelFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub niveau_log: Option<LevelFilter>,
    pub demarche: bool,
    pub aide: bool,
    pub expressions: Vec<String>,
}

impl Options {
    /// `args` sans le nom du programme.
    pub fn depuis_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut o = Options::default();

        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "--quiet" | "-q" => o.niveau_log = Some(LevelFilter::Off),
                "--demarche" => o.demarche = true,
                "--help" | "-h" => o.aide = true,
                a if a.starts_with("--log-level=") => {
                    let v = &a["--log-level=".len()..];
                    o.niveau_log = Some(
                        v.parse::<LevelFilter>()
                            .map_err(|_| format!("niveau de log inconnu: {v:?}"))?,
                    );
                }
                // "-50" est une expression, pas une option
                a if a.starts_with("--") => return Err(format!("option inconnue: {a}")),
                _ => o.expressions.push(arg),
            }
        }

        Ok(o)
    }
}

pub const AIDE: &str = "Calculatrice montant

USAGE:
    calculatrice_montant [OPTIONS] [EXPRESSION...]

Sans EXPRESSION, lit une expression par ligne sur l’entrée standard.

OPTIONS:
    --demarche               Affiche jetons, arbre, valeur brute et arrondi
    --quiet, -q              Coupe les logs
    --log-level=LEVEL        off/error/warn/info/debug/trace (sinon RUST_LOG)
    --help, -h               Cette aide";

/// Initialise env_logger une seule fois (appels suivants ignorés).
pub fn init_logger(niveau: Option<LevelFilter>) {
    use env_logger::{Builder, Env};
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
        if let Some(n) = niveau {
            builder.filter_level(n);
        }
        builder.format_timestamp(None).try_init().ok();
    });
}
