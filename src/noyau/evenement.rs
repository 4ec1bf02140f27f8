// src/noyau/evenement.rs
//
// Décodage à la frontière : entrée brute (touche clavier OU nom d’action
// du pavé) -> variante fermée. La machine ne voit jamais de vocabulaire UI.

use std::str::FromStr;

use super::erreur::ErreurEntree;
use super::operation::Operation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(u8),
    Point,
    Operation(Operation),
    Egal,
    Effacer,
    Supprimer,
    Signe,
    Pourcentage,
}

impl Evenement {
    /// Décode un caractère tapé (egui::Event::Text).
    pub fn depuis_char(c: char) -> Result<Self, ErreurEntree> {
        if let Some(d) = c.to_digit(10) {
            return Ok(Evenement::Chiffre(d as u8));
        }
        if let Some(op) = Operation::depuis_char(c) {
            return Ok(Evenement::Operation(op));
        }
        match c {
            '.' => Ok(Evenement::Point),
            '=' => Ok(Evenement::Egal),
            '%' => Ok(Evenement::Pourcentage),
            _ => Err(ErreurEntree::ToucheInconnue(c.to_string())),
        }
    }
}

impl FromStr for Evenement {
    type Err = ErreurEntree;

    /// Clavier : "7", ".", "+", "Enter", "=", "Backspace", "Escape", "%".
    /// Pavé    : "dot", "equals", "clear", "delete", "sign", "percent".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ErreurEntree::Vide);
        }

        match s {
            "Enter" | "equals" => return Ok(Evenement::Egal),
            "Backspace" | "delete" => return Ok(Evenement::Supprimer),
            "Escape" | "clear" => return Ok(Evenement::Effacer),
            "dot" => return Ok(Evenement::Point),
            "sign" => return Ok(Evenement::Signe),
            "percent" => return Ok(Evenement::Pourcentage),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Evenement::depuis_char(c),
            _ => Err(ErreurEntree::ToucheInconnue(s.to_string())),
        }
    }
}
