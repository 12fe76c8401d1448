// src/noyau/erreur.rs
//
// Erreurs du pipeline (jetons -> analyse -> évaluation -> montant).
// Aucune étape ne panique : chaque échec est une valeur, la première
// rencontrée est rendue telle quelle à l’appelant.

use std::fmt;

use thiserror::Error;

/// Catégorie d’échec (ensemble fermé), utilisée par l’UI pour choisir le message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidCharacter,
    UnbalancedParenthesis,
    UnexpectedEnd,
    UnexpectedToken,
    DivisionByZero,
    NegativeAmount,
    AmountTooLarge,
}

impl ErrorKind {
    /// Étiquette stable (logs, rendu texte).
    pub fn etiquette(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "entree_vide",
            ErrorKind::InvalidCharacter => "caractere_invalide",
            ErrorKind::UnbalancedParenthesis => "parentheses",
            ErrorKind::UnexpectedEnd => "fin_inattendue",
            ErrorKind::UnexpectedToken => "jeton_inattendu",
            ErrorKind::DivisionByZero => "division_par_zero",
            ErrorKind::NegativeAmount => "montant_negatif",
            ErrorKind::AmountTooLarge => "montant_trop_grand",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.etiquette())
    }
}

/// Échec d’évaluation, avec contexte. Chaque variante relève d’un seul `ErrorKind`.
/// Les positions sont des index de caractères (base 0) dans l’entrée brute.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurMontant {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInvalide { caractere: char, position: usize },

    #[error("parenthèses non équilibrées (position {position})")]
    ParentheseNonEquilibree { position: usize },

    #[error("expression incomplète : une valeur est attendue")]
    FinInattendue,

    #[error("jeton inattendu: '{jeton}' (position {position})")]
    JetonInattendu { jeton: String, position: usize },

    /// Garde-fou d’imbrication : catégorie `UnexpectedToken`, message dédié.
    #[error("expression trop imbriquée (plus de {max} niveaux) (position {position})")]
    TropImbrique { max: usize, position: usize },

    #[error("division par zéro")]
    DivisionParZero,

    #[error("Le montant ne peut pas être négatif")]
    MontantNegatif,

    #[error("Le montant ne peut pas dépasser 999,999,999.99")]
    MontantTropGrand,
}

impl ErreurMontant {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErreurMontant::EntreeVide => ErrorKind::EmptyInput,
            ErreurMontant::CaractereInvalide { .. } => ErrorKind::InvalidCharacter,
            ErreurMontant::ParentheseNonEquilibree { .. } => ErrorKind::UnbalancedParenthesis,
            ErreurMontant::FinInattendue => ErrorKind::UnexpectedEnd,
            ErreurMontant::JetonInattendu { .. } | ErreurMontant::TropImbrique { .. } => {
                ErrorKind::UnexpectedToken
            }
            ErreurMontant::DivisionParZero => ErrorKind::DivisionByZero,
            ErreurMontant::MontantNegatif => ErrorKind::NegativeAmount,
            ErreurMontant::MontantTropGrand => ErrorKind::AmountTooLarge,
        }
    }

    /// Message lisible (équivalent à `to_string()`), pour l’affichage inline.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
