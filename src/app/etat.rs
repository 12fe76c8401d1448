//! src/app/etat.rs
//!
//! État du champ “montant” (sans vue).
//!
//! Rôle : contenir la saisie, le dernier aperçu calculé ou la dernière
//! erreur, et décider ce qui doit être enregistré.
//!
//! Contrats :
//! - L’évaluation passe uniquement par le noyau (`evaluate_detaille`).
//! - `saisir` invalide aperçu et erreur : jamais d’aperçu périmé affiché.
//! - `enregistrer` ne rend l’expression d’origine que si elle contenait
//!   des opérateurs (piste d’audit) ; un nombre simple n’est pas conservé.

use log::debug;

use crate::noyau::{contains_operators, evaluate_detaille, Demarche, ErrorKind, Montant};

/// Ce que le formulaire persiste après une saisie réussie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MontantSaisi {
    pub montant: Montant,
    /// Saisie d’origine, seulement si c’était un calcul.
    pub expression: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ChampMontant {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub apercu: Option<Montant>,
    pub erreur: Option<(ErrorKind, String)>,
    pub calcule: bool, // badge "=" : succès sur une expression avec opérateurs

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
}

impl ChampMontant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remplace la saisie ; l’aperçu et l’erreur précédents ne valent plus.
    pub fn saisir(&mut self, texte: impl Into<String>) {
        self.entree = texte.into();
        self.clear_resultats();
    }

    /// Effacer tout (entrée + résultats).
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    fn clear_resultats(&mut self) {
        self.apercu = None;
        self.erreur = None;
        self.calcule = false;
        self.demarche = Demarche::default();
    }

    /// Évaluation “à la perte de focus” : remplit l’aperçu ou l’erreur.
    pub fn valider(&mut self) -> Result<Montant, ErrorKind> {
        let (res, demarche) = evaluate_detaille(&self.entree);
        self.demarche = demarche;

        match res {
            Ok(m) => {
                self.apercu = Some(m);
                self.erreur = None;
                self.calcule = contains_operators(&self.entree);
                Ok(m)
            }
            Err(e) => {
                debug!("champ montant invalide ({}): {e}", e.kind());
                self.apercu = None;
                self.erreur = Some((e.kind(), e.message()));
                self.calcule = false;
                Err(e.kind())
            }
        }
    }

    /// Ce qu’il faut persister ; `None` si la saisie n’est pas valide.
    /// Réévalue toujours : ne dépend pas d’un `valider` préalable.
    pub fn enregistrer(&mut self) -> Option<MontantSaisi> {
        let montant = self.valider().ok()?;
        let expression = if self.calcule {
            Some(self.entree.trim().to_string())
        } else {
            None
        };
        Some(MontantSaisi {
            montant,
            expression,
        })
    }
}
