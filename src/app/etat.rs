//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le noyau (Calculatrice) + ce qui ne concerne que l’écran
//! (thème, panneau d’historique, dernier affichage émis).
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice::traiter`.
//! - Une entrée inconnue est ignorée (journalisée en trace), jamais fatale.

use tracing::trace;

use crate::noyau::{Affichage, Calculatrice, Evenement, Reglages};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- dernière paire émise par le noyau ---
    pub affichage: Affichage,

    // --- UX ---
    pub theme_clair: bool,
    pub historique_visible: bool,
    /// calculs consignés pendant que le panneau était fermé
    pub non_vus: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        let calc = Calculatrice::new(reglages);
        let affichage = calc.affichage();
        Self {
            calc,
            affichage,
            theme_clair: false,
            historique_visible: false,
            non_vus: 0,
        }
    }

    /* ------------------------ Actions (vers le noyau) ------------------------ */

    pub fn traiter(&mut self, ev: Evenement) {
        let r = self.calc.traiter(ev);
        self.affichage = r.affichage;
        if r.entree.is_some() && !self.historique_visible {
            self.non_vus += 1;
        }
    }

    /// Touche brute ("7", "Enter", "sign"…) : décodée puis traitée.
    pub fn traiter_touche(&mut self, touche: &str) {
        match touche.parse::<Evenement>() {
            Ok(ev) => self.traiter(ev),
            Err(e) => trace!(%e, "touche ignorée"),
        }
    }

    /// Caractère tapé au clavier.
    pub fn traiter_char(&mut self, c: char) {
        match Evenement::depuis_char(c) {
            Ok(ev) => self.traiter(ev),
            Err(e) => trace!(%e, "caractère ignoré"),
        }
    }

    /// Clic sur une ligne d’historique.
    pub fn rappeler(&mut self, index: usize) {
        if self.calc.rappeler(index) {
            self.affichage = self.calc.affichage();
        }
    }

    pub fn vider_historique(&mut self) {
        self.calc.vider_historique();
        self.non_vus = 0;
    }

    /* ------------------------ Actions (écran seulement) ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.theme_clair = !self.theme_clair;
    }

    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
        if self.historique_visible {
            self.non_vus = 0;
        }
    }
}
