// src/app.rs
//
// Calculatrice montant : module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + options.rs)
// - Ré-exporter ChampMontant (pour main.rs: use crate::app::ChampMontant;)
//
// Important:
// - Aucune évaluation ici : tout passe par le noyau.

pub mod etat;
pub mod options;
pub mod vue;

// Ré-export pratique : `use crate::app::ChampMontant;`
pub use etat::{ChampMontant, MontantSaisi};
pub use options::Options;
