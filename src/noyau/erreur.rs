// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
//
// Important : une faute NUMÉRIQUE (division par zéro, opérande illisible)
// n’est jamais une Err ; elle reste la sentinelle NaN jusqu’à l’affichage "Error".

use thiserror::Error;

/// Décodage d’une entrée brute (touche clavier / bouton) en événement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEntree {
    #[error("entrée vide")]
    Vide,

    #[error("touche inconnue : {0:?}")]
    ToucheInconnue(String),
}

/// Lecture / validation des réglages (reglages.toml).
#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture impossible de {chemin} : {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("reglages.toml invalide : {0}")]
    Toml(#[from] toml::de::Error),

    #[error("réglage hors bornes : {champ} = {valeur} (attendu {attendu})")]
    HorsBornes {
        champ: &'static str,
        valeur: u64,
        attendu: &'static str,
    },
}
