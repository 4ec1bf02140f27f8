// src/noyau/historique.rs
//
// Historique borné : plus récent en tête, éviction FIFO au-delà de la capacité.

use std::collections::VecDeque;

/// Une évaluation terminée (immuable une fois créée).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
    /// ms depuis l’époque Unix
    pub horodatage: i64,
}

#[derive(Clone, Debug)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
    capacite: usize,
}

impl Historique {
    pub fn new(capacite: usize) -> Self {
        let capacite = capacite.max(1);
        Self {
            entrees: VecDeque::with_capacity(capacite),
            capacite,
        }
    }

    /// Ajoute en tête ; la plus ancienne sort si la capacité est dépassée.
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.push_front(entree);
        self.entrees.truncate(self.capacite);
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// 0 = plus récente.
    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }
}
