// src/noyau/expr.rs
//
// AST exact (sans flottants).
// - Rat : littéral rationnel exact (toujours >= 0 à la sortie du tokenizer)
// - Pos / Neg : signes unaires (le moins peut rendre un intermédiaire négatif)
// - Add / Sub / Mul / Div : binaires, associatifs à gauche à la construction
//
// L’arbre appartient au seul analyseur qui le construit ; il est jeté après
// évaluation. Pas de partage, pas de cycle.

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurMontant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Rat(BigRational),

    Pos(Box<Expr>),
    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation exacte, de bas en haut.
    /// Parcours en profondeur gauche -> droite : le premier échec court-circuite.
    pub fn evaluer(&self) -> Result<BigRational, ErreurMontant> {
        use Expr::*;

        match self {
            Rat(r) => Ok(r.clone()),

            Pos(x) => x.evaluer(),
            Neg(x) => Ok(-x.evaluer()?),

            Add(a, b) => Ok(a.evaluer()? + b.evaluer()?),
            Sub(a, b) => Ok(a.evaluer()? - b.evaluer()?),
            Mul(a, b) => Ok(a.evaluer()? * b.evaluer()?),
            Div(a, b) => {
                let num = a.evaluer()?;
                let den = b.evaluer()?;
                if den.is_zero() {
                    return Err(ErreurMontant::DivisionParZero);
                }
                Ok(num / den)
            }
        }
    }

    /// Nombre de noeuds (garde-fous / démarche).
    pub fn taille(&self) -> usize {
        use Expr::*;

        match self {
            Rat(_) => 1,
            Pos(x) | Neg(x) => 1 + x.taille(),
            Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) => 1 + a.taille() + b.taille(),
        }
    }
}
