//! Calculatrice montant
//!
//! Évalue une expression arithmétique tapée dans un champ “montant”
//! (`50+40*2`, `(100+20)/4`, `-50+100`) en un montant exact au centime :
//! priorités, parenthèses, signes unaires, arrondi demi-pair, montant
//! positif et borné (≤ 999,999,999.99).
//!
//! ```
//! use calculatrice_montant::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("50+40*2").unwrap().to_string(), "130.00");
//! assert_eq!(evaluate("100/0").unwrap_err().kind(), ErrorKind::DivisionByZero);
//! ```

pub mod app;
pub mod noyau;

pub use noyau::{
    contains_operators, evaluate, evaluate_detaille, expression_matches_amount, format_amount,
    is_plain_number, Demarche, ErreurMontant, ErrorKind, EvaluationResult, Montant,
};
