// src/noyau/analyse.rs
//
// Descente récursive : jetons -> Expr
//
//   expression := terme (('+' | '-') terme)*
//   terme      := facteur (('*' | '/') facteur)*
//   facteur    := ('+' | '-') facteur | NOMBRE | '(' expression ')'
//
// Règles:
// - Binaires associatifs à gauche.
// - Un '+'/'-' là où un facteur est attendu est un signe unaire, jamais une
//   erreur : "50++50" => 50 + (+50), "--5" => -(-5).
// - FIN alors qu’un facteur est attendu => FinInattendue.
// - '(' jamais fermée => ParentheseNonEquilibree (position de la '(').
// - ')' sans '(' => ParentheseNonEquilibree (position de la ')').
// - Reste des jetons avant FIN => JetonInattendu.

use super::erreur::ErreurMontant;
use super::expr::Expr;
use super::jetons::{Jeton, Tok};

/// Garde-fou : profondeur max, comptée deux fois :
/// - imbrication (parenthèses + signes unaires) pendant l’analyse ;
/// - hauteur de l’arbre (noeuds opérateurs), y compris les chaînes
///   gauches "1+1+1+…" que l’évaluation et l’affichage parcourent récursivement.
/// Au-delà, on refuse plutôt que de risquer un débordement de pile.
pub const PROFONDEUR_MAX: usize = 512;

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    i: usize,
    profondeur: usize,
}

/// Sous-arbre + sa hauteur (nombre de noeuds opérateurs sur la plus longue branche).
type Branche = (Expr, usize);

impl<'a> Analyseur<'a> {
    /// Jeton courant s’il est l’un des opérateurs binaires `ops`.
    fn operateur(&self, ops: [Tok; 2]) -> Option<&'a Jeton> {
        self.jetons.get(self.i).filter(|j| ops.contains(&j.tok))
    }

    fn avancer(&mut self) -> Option<&'a Jeton> {
        let j = self.jetons.get(self.i);
        if j.is_some() {
            self.i += 1;
        }
        j
    }

    fn expression(&mut self) -> Result<Branche, ErreurMontant> {
        let (mut gauche, mut h) = self.terme()?;

        while let Some(op) = self.operateur([Tok::Plus, Tok::Minus]) {
            self.i += 1;
            let (droite, hd) = self.terme()?;
            h = hauteur(h.max(hd) + 1, op)?;
            gauche = match op.tok {
                Tok::Plus => Expr::Add(Box::new(gauche), Box::new(droite)),
                _ => Expr::Sub(Box::new(gauche), Box::new(droite)),
            };
        }

        Ok((gauche, h))
    }

    fn terme(&mut self) -> Result<Branche, ErreurMontant> {
        let (mut gauche, mut h) = self.facteur()?;

        while let Some(op) = self.operateur([Tok::Star, Tok::Slash]) {
            self.i += 1;
            let (droite, hd) = self.facteur()?;
            h = hauteur(h.max(hd) + 1, op)?;
            gauche = match op.tok {
                Tok::Star => Expr::Mul(Box::new(gauche), Box::new(droite)),
                _ => Expr::Div(Box::new(gauche), Box::new(droite)),
            };
        }

        Ok((gauche, h))
    }

    fn facteur(&mut self) -> Result<Branche, ErreurMontant> {
        let jeton = self.avancer().ok_or(ErreurMontant::FinInattendue)?;

        match &jeton.tok {
            Tok::Num(r) => Ok((Expr::Rat(r.clone()), 0)),

            Tok::Plus | Tok::Minus => {
                self.entrer(jeton)?;
                let (x, hx) = self.facteur()?;
                self.profondeur -= 1;

                let h = hauteur(hx + 1, jeton)?;
                let e = if matches!(jeton.tok, Tok::Minus) {
                    Expr::Neg(Box::new(x))
                } else {
                    Expr::Pos(Box::new(x))
                };
                Ok((e, h))
            }

            Tok::LPar => {
                self.entrer(jeton)?;
                let e = self.expression()?;
                self.profondeur -= 1;

                match self.avancer() {
                    Some(Jeton { tok: Tok::RPar, .. }) => Ok(e),
                    Some(Jeton { tok: Tok::Fin, .. }) | None => {
                        Err(ErreurMontant::ParentheseNonEquilibree {
                            position: jeton.pos,
                        })
                    }
                    Some(autre) => Err(inattendu(autre)),
                }
            }

            Tok::RPar => Err(ErreurMontant::ParentheseNonEquilibree {
                position: jeton.pos,
            }),

            Tok::Fin => Err(ErreurMontant::FinInattendue),

            Tok::Star | Tok::Slash => Err(inattendu(jeton)),
        }
    }

    fn entrer(&mut self, jeton: &Jeton) -> Result<(), ErreurMontant> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(trop_imbrique(jeton));
        }
        self.profondeur += 1;
        Ok(())
    }
}

fn hauteur(h: usize, jeton: &Jeton) -> Result<usize, ErreurMontant> {
    if h > PROFONDEUR_MAX {
        return Err(trop_imbrique(jeton));
    }
    Ok(h)
}

fn trop_imbrique(jeton: &Jeton) -> ErreurMontant {
    ErreurMontant::TropImbrique {
        max: PROFONDEUR_MAX,
        position: jeton.pos,
    }
}

fn inattendu(jeton: &Jeton) -> ErreurMontant {
    let texte = match &jeton.tok {
        Tok::Num(r) => super::format::format_rat_decimal(r),
        Tok::Plus => "+".into(),
        Tok::Minus => "-".into(),
        Tok::Star => "*".into(),
        Tok::Slash => "/".into(),
        Tok::LPar => "(".into(),
        Tok::RPar => ")".into(),
        Tok::Fin => "FIN".into(),
    };
    ErreurMontant::JetonInattendu {
        jeton: texte,
        position: jeton.pos,
    }
}

/// Construit l’AST à partir des jetons (terminés par `Tok::Fin`).
/// Tous les jetons doivent être consommés.
pub fn parse(jetons: &[Jeton]) -> Result<Expr, ErreurMontant> {
    let mut a = Analyseur {
        jetons,
        i: 0,
        profondeur: 0,
    };

    let (e, _) = a.expression()?;

    match a.avancer() {
        Some(Jeton { tok: Tok::Fin, .. }) | None => Ok(e),
        Some(j @ Jeton { tok: Tok::RPar, .. }) => {
            Err(ErreurMontant::ParentheseNonEquilibree { position: j.pos })
        }
        Some(j) => Err(inattendu(j)),
    }
}
