// src/noyau/reglages.rs
//
// Réglages du noyau (largeur d’écran, précision, capacité d’historique).
//
// Format TOML, tous les champs optionnels :
//
//   largeur_max = 16
//   precision = 12
//   capacite_historique = 50

use serde::Deserialize;

use super::erreur::ErreurReglages;

/// Largeur d’affichage par défaut (caractères).
pub const LARGEUR_DEFAUT: usize = 16;

/// Chiffres fractionnaires : arrondi de la division + notation fixe.
pub const PRECISION_DEFAUT: u32 = 12;

/// Capacité de l’historique (FIFO au-delà).
pub const CAPACITE_DEFAUT: usize = 50;

/// Place minimale pour "-1.234567e-308" (exponentielle de repli).
const LARGEUR_MIN: usize = 14;

/// Au-delà, f64 n’a plus de chiffres significatifs à offrir.
const PRECISION_MAX: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub largeur_max: usize,
    pub precision: u32,
    pub capacite_historique: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            largeur_max: LARGEUR_DEFAUT,
            precision: PRECISION_DEFAUT,
            capacite_historique: CAPACITE_DEFAUT,
        }
    }
}

impl Reglages {
    /// Parse + valide un contenu TOML.
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(texte)?;
        r.valider()?;
        Ok(r)
    }

    /// Lit un fichier de réglages (natif seulement : pas de fs en wasm).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn depuis_fichier(chemin: &std::path::Path) -> Result<Self, ErreurReglages> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.display().to_string(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    pub fn valider(&self) -> Result<(), ErreurReglages> {
        if self.largeur_max < LARGEUR_MIN {
            return Err(ErreurReglages::HorsBornes {
                champ: "largeur_max",
                valeur: u64::try_from(self.largeur_max).unwrap_or(u64::MAX),
                attendu: ">= 14",
            });
        }
        if !(1..=PRECISION_MAX).contains(&self.precision) {
            return Err(ErreurReglages::HorsBornes {
                champ: "precision",
                valeur: u64::from(self.precision),
                attendu: "1..=15",
            });
        }
        if self.capacite_historique == 0 {
            return Err(ErreurReglages::HorsBornes {
                champ: "capacite_historique",
                valeur: 0,
                attendu: ">= 1",
            });
        }
        Ok(())
    }
}
