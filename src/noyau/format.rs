// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::expr::Expr;
use super::montant::{arrondi_bancaire, DECIMALES};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal exact.
pub fn scaled_to_decimal(scaled: &BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.abs();

    let scale = pow10(digits);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let signe = if neg { "-" } else { "" };
    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// Rationnel -> texte : décimal fini si possible ("1.5", "0.5", "2"),
/// sinon fraction "p/q" (ex: 100/3).
pub fn format_rat_decimal(r: &BigRational) -> String {
    let d = r.denom();

    // décimal fini ssi le dénominateur n’a que des facteurs 2 et 5
    let mut reste = d.clone();
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);
    while (&reste % &deux).is_zero() {
        reste /= &deux;
    }
    while (&reste % &cinq).is_zero() {
        reste /= &cinq;
    }
    if !reste.is_one() {
        return format!("{}/{}", r.numer(), d);
    }

    let mut x = r.clone();
    let mut digits = 0usize;
    let dix = BigRational::from_integer(BigInt::from(10));
    while !x.is_integer() {
        x = &x * &dix;
        digits += 1;
    }
    scaled_to_decimal(&x.to_integer(), digits)
}

/// "1234567" -> "1,234,567"
fn grouper_milliers(entier: &str) -> String {
    let n = entier.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rendu monétaire : séparateur de milliers + exactement 2 décimales.
/// La valeur est d’abord arrondie au centime (demi-pair).
/// Ex: 1000 -> "1,000.00", 1234567.891 -> "1,234,567.89"
pub fn format_amount(value: &BigRational) -> String {
    let centimes = arrondi_bancaire(value, DECIMALES);
    format_centimes(&centimes)
}

/// Centimes (×100) -> "1,000.00"
pub fn format_centimes(centimes: &BigInt) -> String {
    let neg = centimes.is_negative();
    let brut = scaled_to_decimal(&centimes.abs(), DECIMALES as usize);

    let (entier, frac) = brut.split_once('.').unwrap_or((brut.as_str(), ""));
    let signe = if neg { "-" } else { "" };
    format!("{signe}{}.{frac}", grouper_milliers(entier))
}

/* ------------------------ AST -> texte ------------------------ */

/// Affichage de l’AST : binaires entièrement parenthésés, unaires préfixés.
/// Ex: "50+40*2" -> "(50 + (40 * 2))"
pub fn format_expr(e: &Expr) -> String {
    use Expr::*;

    match e {
        Rat(r) => format_rat_decimal(r),

        Pos(x) => format!("+{}", format_expr(x)),
        Neg(x) => format!("-{}", format_expr(x)),

        Add(a, b) => format!("({} + {})", format_expr(a), format_expr(b)),
        Sub(a, b) => format!("({} - {})", format_expr(a), format_expr(b)),
        Mul(a, b) => format!("({} * {})", format_expr(a), format_expr(b)),
        Div(a, b) => format!("({} / {})", format_expr(a), format_expr(b)),
    }
}
