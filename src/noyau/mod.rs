//! Noyau exact : expressions de montant
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation (+ prédicats "nombre simple" / "contient opérateurs")
//! - analyse.rs : descente récursive -> Expr
//! - expr.rs    : AST exact + évaluation
//! - montant.rs : arrondi demi-pair, signe, borne ; type Montant
//! - format.rs  : affichage (montant groupé, rationnels, AST)
//! - erreur.rs  : ErreurMontant / ErrorKind
//! - eval.rs    : pipeline complet

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod montant;

#[cfg(test)]
mod tests_montants;


// API publique minimale
pub use erreur::{ErreurMontant, ErrorKind};
pub use eval::{evaluate, evaluate_detaille, expression_matches_amount, Demarche, EvaluationResult};
pub use format::format_amount;
pub use jetons::{contains_operators, is_plain_number};
pub use montant::{Montant, MONTANT_MAX_CENTIMES};
