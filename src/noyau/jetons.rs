// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::ErreurMontant;
use super::format::format_rat_decimal;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    Fin,
}

/// Jeton + position (index de caractère, base 0) dans l’entrée.
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

impl Jeton {
    fn new(tok: Tok, pos: usize) -> Self {
        Self { tok, pos }
    }
}

/// Tokenize une chaîne en jetons, terminée par `Tok::Fin`.
/// Supporte:
/// - nombres décimaux : 12, 12.5, 100. (= 100), .5 (= 1/2)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - blancs ignorés partout
///
/// Entrée vide (ou seulement des blancs) => `EntreeVide`, avant toute autre erreur.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurMontant> {
    if s.trim().is_empty() {
        return Err(ErreurMontant::EntreeVide);
    }

    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton::new(tok, i));
            i += 1;
            continue;
        }

        if let Some(fin) = scan_nombre(&chars, i) {
            let val = nombre_vers_rat(&chars[i..fin]).ok_or(ErreurMontant::CaractereInvalide {
                caractere: c,
                position: i,
            })?;
            out.push(Jeton::new(Tok::Num(val), i));
            i = fin;
            continue;
        }

        return Err(ErreurMontant::CaractereInvalide {
            caractere: c,
            position: i,
        });
    }

    out.push(Jeton::new(Tok::Fin, chars.len()));
    Ok(out)
}

/// Reconnaît un NOMBRE qui commence en `debut`; renvoie l’index juste après.
/// Formes : chiffres ['.' chiffres*] | '.' chiffres+
fn scan_nombre(chars: &[char], debut: usize) -> Option<usize> {
    let mut i = debut;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let nb_entiers = i - debut;

    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let debut_frac = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        // "." seul : pas un nombre
        if nb_entiers == 0 && i == debut_frac {
            return None;
        }
        return Some(i);
    }

    if nb_entiers == 0 {
        None
    } else {
        Some(i)
    }
}

/// Valeur exacte d’un littéral déjà reconnu par `scan_nombre`.
/// "12.50" -> 1250/100 ; "100." -> 100 ; ".5" -> 5/10
fn nombre_vers_rat(lexeme: &[char]) -> Option<BigRational> {
    let (entier, frac): (String, String) = match lexeme.iter().position(|&c| c == '.') {
        Some(p) => (
            lexeme[..p].iter().collect(),
            lexeme[p + 1..].iter().collect(),
        ),
        None => (lexeme.iter().collect(), String::new()),
    };

    let chiffres = format!("{entier}{frac}");
    if chiffres.is_empty() {
        return None;
    }
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let d = BigInt::from(10).pow(frac.len() as u32);

    Some(BigRational::new(n, d))
}

/// Vrai ssi la chaîne (blancs de bord ignorés) est exactement un NOMBRE.
pub fn is_plain_number(s: &str) -> bool {
    let chars: Vec<char> = s.trim().chars().collect();
    !chars.is_empty() && scan_nombre(&chars, 0) == Some(chars.len())
}

/// Vrai ssi la chaîne contient un opérateur `+ - * /` qui n’est pas le simple
/// signe de tête d’un nombre ("-50" => false, "50+50" => true, "-(5)" => true).
/// Indépendant de la validité : sert seulement au badge "=" de l’UI.
pub fn contains_operators(s: &str) -> bool {
    let t = s.trim();
    let reste = match t.strip_prefix(['-', '+']) {
        Some(r) if is_plain_number(r) => r,
        _ => t,
    };

    reste.chars().any(|c| matches!(c, '+' | '-' | '*' | '/'))
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match &j.tok {
            Tok::Num(r) => format_rat_decimal(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),

            Tok::Fin => "FIN".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
