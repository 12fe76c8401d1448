//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> analyse (descente récursive) -> Expr -> évaluation exacte
//!        -> normalisation (arrondi demi-pair au centime, signe, borne)
//!
//! Chaque étape rend un `Result` ; le premier échec arrête tout et remonte
//! tel quel. Aucun état partagé : appels concurrents sans risque.

use log::{debug, trace};
use num_rational::BigRational;

use super::analyse::parse;
use super::erreur::ErreurMontant;
use super::format::{format_expr, format_rat_decimal};
use super::jetons::{format_tokens, tokenize};
use super::montant::{normaliser, Montant};

/// Succès (montant validé) ou échec (catégorie + message).
pub type EvaluationResult = Result<Montant, ErreurMontant>;

/// Trace des étapes, pour le panneau “démarche”.
/// Un champ reste vide si l’étape n’a pas été atteinte.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
    pub brut: String,
    pub arrondi: String,
}

/// API publique : évalue une expression de montant.
pub fn evaluate(expression: &str) -> EvaluationResult {
    evaluate_detaille(expression).0
}

/// Même pipeline que `evaluate`, avec la démarche.
pub fn evaluate_detaille(expression: &str) -> (EvaluationResult, Demarche) {
    trace!("evaluate({expression:?})");

    let mut d = Demarche::default();
    let res = pipeline(expression, &mut d);

    match &res {
        Ok(m) => trace!("evaluate({expression:?}) = {m}"),
        Err(e) => trace!("evaluate({expression:?}) échec [{}]: {e}", e.kind()),
    }
    (res, d)
}

fn pipeline(expression: &str, d: &mut Demarche) -> EvaluationResult {
    // 1) Jetons
    let jetons = tokenize(expression)?;
    d.jetons = format_tokens(&jetons);
    debug!("jetons: {}", d.jetons);

    // 2) AST
    let expr = parse(&jetons)?;
    d.arbre = format_expr(&expr);
    debug!("arbre ({} noeuds): {}", expr.taille(), d.arbre);

    // 3) Valeur exacte
    let brut = expr.evaluer()?;
    d.brut = format_rat_decimal(&brut);
    debug!("brut: {}", d.brut);

    // 4) Montant
    let m = normaliser(&brut)?;
    d.arrondi = m.to_string();
    debug!("arrondi: {}", d.arrondi);

    Ok(m)
}

/// Vrai ssi `expression` s’évalue avec succès à exactement `expected`.
/// Sert à garder cohérents un montant et son expression enregistrés.
pub fn expression_matches_amount(expression: &str, expected: &BigRational) -> bool {
    match evaluate(expression) {
        Ok(m) => m.as_rational() == *expected,
        Err(_) => false,
    }
}
