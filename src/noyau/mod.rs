//! Noyau décimal de la calculatrice
//!
//! Organisation interne :
//! - decimal.rs    : opérande texte -> entier mis à l’échelle (mantisse, echelle)
//! - arith.rs      : + − × ÷ exacts, NaN sur faute numérique
//! - format.rs     : affichage borné (fixe / exponentielle, "Error")
//! - operation.rs  : opérations binaires + symboles
//! - evenement.rs  : décodage touche / action -> événement fermé
//! - historique.rs : historique borné (plus récent en tête)
//! - machine.rs    : machine à états (point d’entrée unique `traiter`)
//! - reglages.rs   : largeur, précision, capacité (TOML)
//! - erreur.rs     : erreurs typées (entrée, réglages)

pub mod arith;
pub mod decimal;
pub mod erreur;
pub mod evenement;
pub mod format;
pub mod historique;
pub mod machine;
pub mod operation;
pub mod reglages;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use evenement::Evenement;
pub use machine::{Affichage, Calculatrice};
pub use reglages::Reglages;
