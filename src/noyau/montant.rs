// src/noyau/montant.rs
//
// Normalisation + validation d’un résultat brut (rationnel exact) :
// 1) arrondi au centime, demi-pair (“arrondi bancaire”)
// 2) refus si négatif (après arrondi)
// 3) refus si > 999 999 999.99 (borne incluse)

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurMontant;
use super::format::{format_centimes, scaled_to_decimal};

/// Nombre de décimales d’un montant.
pub const DECIMALES: u32 = 2;

/// Montant maximal, en centimes (999 999 999.99).
pub const MONTANT_MAX_CENTIMES: i64 = 99_999_999_999;

/// Montant maximal, en rationnel exact.
pub fn montant_max() -> BigRational {
    BigRational::new(BigInt::from(MONTANT_MAX_CENTIMES), BigInt::from(100))
}

/// Arrondi demi-pair à `decimales` chiffres ; renvoie l’entier “scalé” (×10^decimales).
///
/// x = r × 10^d ; si la partie fractionnaire de x vaut exactement 1/2, on prend
/// l’entier pair le plus proche, sinon l’entier le plus proche.
/// Exact (rationnels) : 2.345 -> 234, 2.355 -> 236, 2.365 -> 236.
pub fn arrondi_bancaire(r: &BigRational, decimales: u32) -> BigInt {
    let scale = BigRational::from_integer(BigInt::from(10).pow(decimales));
    let x = r * &scale;

    let plancher = x.floor();
    let frac = &x - &plancher;
    let bas = plancher.to_integer();

    let demi = BigRational::new(BigInt::from(1), BigInt::from(2));
    match frac.cmp(&demi) {
        std::cmp::Ordering::Less => bas,
        std::cmp::Ordering::Greater => bas + 1,
        std::cmp::Ordering::Equal => {
            if (&bas % 2u32).is_zero() {
                bas
            } else {
                bas + 1
            }
        }
    }
}

/// Montant validé : au plus 2 décimales, dans [0, 999 999 999.99].
/// Stocké en centimes (entier exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Montant {
    centimes: i64,
}

impl Montant {
    pub fn centimes(&self) -> i64 {
        self.centimes
    }

    /// Valeur exacte (centimes / 100).
    pub fn as_rational(&self) -> BigRational {
        BigRational::new(BigInt::from(self.centimes), BigInt::from(100))
    }

    /// Rendu groupé : "1,234.50".
    pub fn format_groupe(&self) -> String {
        format_centimes(&BigInt::from(self.centimes))
    }
}

/// Rendu non groupé, relisible par `evaluate` : "1234.50".
impl fmt::Display for Montant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&scaled_to_decimal(
            &BigInt::from(self.centimes),
            DECIMALES as usize,
        ))
    }
}

/// Résultat brut -> montant final (arrondi, signe, borne).
pub fn normaliser(brut: &BigRational) -> Result<Montant, ErreurMontant> {
    let centimes = arrondi_bancaire(brut, DECIMALES);

    if centimes.is_negative() {
        return Err(ErreurMontant::MontantNegatif);
    }
    let echelle = BigInt::from(10).pow(DECIMALES);
    if BigRational::new(centimes.clone(), echelle) > montant_max() {
        return Err(ErreurMontant::MontantTropGrand);
    }

    let centimes = centimes.to_i64().ok_or(ErreurMontant::MontantTropGrand)?;
    Ok(Montant { centimes })
}
