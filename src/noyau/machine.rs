//! Noyau — machine à états de la calculatrice
//!
//! Possède l’état (courant, précédent, opération, écrasement) et l’historique.
//! Toute mutation passe par ici ; l’UI ne fait que décoder puis appeler `traiter`.
//!
//! Contrats :
//! - `courant` n’est jamais vide ("0" au minimum)
//! - opération en attente => `precedent` non vide
//! - faute numérique => "Error" affiché + consigné, jamais de panique

use tracing::{debug, info, warn};

use super::arith;
use super::evenement::Evenement;
use super::format::format_affichage;
use super::historique::{EntreeHistorique, Historique};
use super::operation::Operation;
use super::reglages::Reglages;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatCalc {
    pub courant: String,
    pub precedent: String,
    pub operation: Option<Operation>,
    /// true : le prochain chiffre remplace `courant` au lieu de l’allonger
    pub ecraser: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            courant: "0".to_string(),
            precedent: String::new(),
            operation: None,
            ecraser: false,
        }
    }
}

/// Paire émise après chaque événement : (ligne principale, ligne du dessus).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub courant: String,
    /// "<precedent> <symbole>" si une opération attend, sinon vide
    pub precedent: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reaction {
    pub affichage: Affichage,
    /// Entrée créée par cet événement (égal, ou enchaînement dans un opérateur).
    pub entree: Option<EntreeHistorique>,
}

fn horodatage_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    etat: EtatCalc,
    historique: Historique,
    reglages: Reglages,
    horloge: fn() -> i64,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Calculatrice {
    /// Réglages hors bornes : journalisés, puis remplacés par les défauts.
    pub fn new(reglages: Reglages) -> Self {
        let reglages = match reglages.valider() {
            Ok(()) => reglages,
            Err(e) => {
                warn!(error = %e, "réglages refusés, valeurs par défaut");
                Reglages::default()
            }
        };
        Self {
            etat: EtatCalc::default(),
            historique: Historique::new(reglages.capacite_historique),
            reglages,
            horloge: horodatage_ms,
        }
    }

    /// Horloge injectée (tests déterministes).
    #[cfg(test)]
    pub fn avec_horloge(mut self, horloge: fn() -> i64) -> Self {
        self.horloge = horloge;
        self
    }

    /* ------------------------ Lecture ------------------------ */

    #[cfg(test)]
    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn affichage(&self) -> Affichage {
        let precedent = match self.etat.operation {
            Some(op) if !self.etat.precedent.is_empty() => {
                format!("{} {}", self.etat.precedent, op.symbole())
            }
            _ => String::new(),
        };
        Affichage {
            courant: self.etat.courant.clone(),
            precedent,
        }
    }

    /* ------------------------ Point d’entrée unique ------------------------ */

    pub fn traiter(&mut self, ev: Evenement) -> Reaction {
        debug!(?ev, "événement");

        let entree = match ev {
            Evenement::Chiffre(d) => {
                self.ajouter_chiffre(d);
                None
            }
            Evenement::Point => {
                self.ajouter_point();
                None
            }
            Evenement::Operation(op) => self.choisir_operation(op),
            Evenement::Egal => self.egal(),
            Evenement::Effacer => {
                self.effacer_tout();
                None
            }
            Evenement::Supprimer => {
                self.supprimer_un();
                None
            }
            Evenement::Signe => {
                self.basculer_signe();
                None
            }
            Evenement::Pourcentage => {
                self.pourcentage();
                None
            }
        };

        Reaction {
            affichage: self.affichage(),
            entree,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn ajouter_chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.etat.ecraser {
            self.etat.courant = c.to_string();
            self.etat.ecraser = false;
        } else if self.etat.courant == "0" {
            self.etat.courant = c.to_string();
        } else {
            self.etat.courant.push(c);
        }
    }

    pub fn ajouter_point(&mut self) {
        if self.etat.ecraser {
            self.etat.courant = "0.".to_string();
            self.etat.ecraser = false;
        } else if !self.etat.courant.contains('.') {
            self.etat.courant.push('.');
        }
    }

    pub fn supprimer_un(&mut self) {
        if self.etat.ecraser {
            self.etat.courant = "0".to_string();
            self.etat.ecraser = false;
        } else if self.etat.courant.chars().count() > 1 {
            self.etat.courant.pop();
        } else {
            self.etat.courant = "0".to_string();
        }
    }

    pub fn basculer_signe(&mut self) {
        if self.etat.courant == "0" {
            return;
        }
        self.etat.courant = match self.etat.courant.strip_prefix('-') {
            Some(abs) => abs.to_string(),
            None => format!("-{}", self.etat.courant),
        };
    }

    pub fn pourcentage(&mut self) {
        let v = arith::pourcentage(&self.etat.courant);
        self.etat.courant = format_affichage(v, &self.reglages);
        self.etat.ecraser = true;
    }

    /* ------------------------ Opérations ------------------------ */

    /// Enchaînement : "3 + 4 ×" calcule 7 avant de poser ×.
    /// Changer d’opérateur sans nouveau chiffre ("+" puis "-") remplace
    /// simplement l’opération en attente, sans évaluer.
    pub fn choisir_operation(&mut self, op: Operation) -> Option<EntreeHistorique> {
        let entree = if self.etat.operation.is_some() && !self.etat.ecraser {
            self.egal()
        } else {
            None
        };

        self.etat.operation = Some(op);
        self.etat.precedent = self.etat.courant.clone();
        self.etat.ecraser = true;
        entree
    }

    /// Sans opération en attente : no-op (None).
    pub fn egal(&mut self) -> Option<EntreeHistorique> {
        let op = self.etat.operation?;
        if self.etat.precedent.is_empty() {
            return None;
        }

        let a = &self.etat.precedent;
        let b = &self.etat.courant;
        let valeur = arith::operer(a, b, Some(op), self.reglages.precision);
        let resultat = format_affichage(valeur, &self.reglages);
        let expression = format!("{a} {} {b}", op.symbole());

        if valeur.is_finite() {
            info!(%expression, %resultat, "évaluation");
        } else {
            warn!(%expression, "faute numérique (division par zéro ou opérande illisible)");
        }

        let entree = EntreeHistorique {
            expression,
            resultat: resultat.clone(),
            horodatage: (self.horloge)(),
        };
        self.historique.ajouter(entree.clone());

        self.etat.courant = resultat;
        self.etat.precedent.clear();
        self.etat.operation = None;
        self.etat.ecraser = true;
        Some(entree)
    }

    pub fn effacer_tout(&mut self) {
        self.etat = EtatCalc::default();
    }

    /* ------------------------ Historique ------------------------ */

    /// Reprend le résultat de l’entrée `index` (0 = plus récente).
    /// "Error" ou index absent : rien ne change.
    pub fn rappeler(&mut self, index: usize) -> bool {
        let Some(resultat) = self.historique.get(index).map(|e| e.resultat.clone()) else {
            return false;
        };
        if resultat == super::format::ERREUR {
            return false;
        }
        self.etat.courant = resultat;
        self.etat.ecraser = true;
        true
    }

    pub fn vider_historique(&mut self) {
        self.historique.vider();
    }
}
