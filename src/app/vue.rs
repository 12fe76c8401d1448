// src/app/vue.rs
//
// Vue texte du champ montant (terminal).
// - succès : "= 1,234.50", suivi de "[calc]" si la saisie était un calcul
// - échec  : "erreur (<catégorie>): <message>"
// - rien d’évalué : "(vide)"
// La démarche (jetons, arbre, brut, arrondi) est optionnelle.

use super::etat::ChampMontant;

impl ChampMontant {
    /// Ligne principale, sans la démarche.
    pub fn rendu_ligne(&self) -> String {
        if let Some(m) = &self.apercu {
            let badge = if self.calcule { "  [calc]" } else { "" };
            return format!("= {}{badge}", m.format_groupe());
        }
        if let Some((kind, msg)) = &self.erreur {
            return format!("erreur ({kind}): {msg}");
        }
        "(vide)".to_string()
    }

    /// Rendu complet : entrée, ligne principale, démarche éventuelle.
    pub fn rendu(&self, avec_demarche: bool) -> String {
        let mut out = format!("{}\n  {}", self.entree.trim(), self.rendu_ligne());

        if avec_demarche {
            let d = &self.demarche;
            for (titre, val) in [
                ("jetons", &d.jetons),
                ("arbre", &d.arbre),
                ("brut", &d.brut),
                ("arrondi", &d.arrondi),
            ] {
                if !val.is_empty() {
                    out.push_str(&format!("\n    {titre:<8}: {val}"));
                }
            }
        }

        out
    }
}
