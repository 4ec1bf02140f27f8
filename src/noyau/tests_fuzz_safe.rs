//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine à états avec des suites d’événements aléatoires.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés APRÈS CHAQUE événement :
//!   * `courant` jamais vide, au plus un point, jamais "00…"
//!   * opération en attente => `precedent` non vide
//!   * ligne du dessus = "<precedent> <symbole>" ou vide
//!   * tout résultat consigné tient dans la largeur (ou vaut "Error")
//!   * historique borné, plus récent en tête

use std::time::{Duration, Instant};

use super::evenement::Evenement;
use super::machine::{Calculatrice, Reaction};
use super::operation::Operation;
use super::reglages::Reglages;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’événements ------------------------ */

/// Chiffres majoritaires (sinon les opérandes restent triviaux).
fn gen_evenement(rng: &mut Rng) -> Evenement {
    match rng.pick(20) {
        0..=9 => Evenement::Chiffre(rng.pick(10) as u8),
        10 => Evenement::Point,
        11..=14 => Evenement::Operation(Operation::TOUTES[rng.pick(4) as usize]),
        15 | 16 => Evenement::Egal,
        17 => Evenement::Supprimer,
        18 => Evenement::Signe,
        _ => {
            // Effacer rarement, pourcentage un peu plus souvent
            if rng.pick(4) == 0 {
                Evenement::Effacer
            } else {
                Evenement::Pourcentage
            }
        }
    }
}

/* ------------------------ Invariants ------------------------ */

fn verifier(c: &Calculatrice, r: &Reaction, ev: Evenement, reglages: &Reglages) {
    let e = c.etat();

    assert!(!e.courant.is_empty(), "courant vide après {ev:?}");
    assert!(
        e.courant.matches('.').count() <= 1,
        "plusieurs points: {:?} après {ev:?}",
        e.courant
    );
    assert!(
        !e.courant.starts_with("00"),
        "zéros de tête: {:?} après {ev:?}",
        e.courant
    );
    if e.operation.is_some() {
        assert!(!e.precedent.is_empty(), "opération sans précédent après {ev:?}");
    }

    // la réaction reflète l’état
    assert_eq!(r.affichage, c.affichage());
    assert_eq!(r.affichage.courant, e.courant);
    match e.operation {
        Some(op) => assert_eq!(r.affichage.precedent, format!("{} {}", e.precedent, op)),
        None => assert!(r.affichage.precedent.is_empty()),
    }

    let h = c.historique();
    assert!(h.len() <= reglages.capacite_historique);

    if let Some(entree) = &r.entree {
        assert!(
            entree.resultat == "Error" || entree.resultat.len() <= reglages.largeur_max,
            "résultat trop large: {:?}",
            entree.resultat
        );
        assert_eq!(h.get(0), Some(entree), "la dernière entrée doit être en tête");
    }

    if matches!(ev, Evenement::Egal) && r.entree.is_some() {
        assert!(e.operation.is_none());
        assert!(e.precedent.is_empty());
        assert!(e.ecraser);
    }
}

fn campagne(seed: u64, pas: usize, reglages: Reglages) {
    let mut rng = Rng::new(seed);
    let mut c = Calculatrice::new(reglages);

    for _ in 0..pas {
        let ev = gen_evenement(&mut rng);
        let r = c.traiter(ev);
        verifier(&c, &r, ev, &reglages);
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_invariants_plusieurs_graines() {
    let start = Instant::now();
    let max = Duration::from_secs(10);

    for seed in 1..=40u64 {
        campagne(seed.wrapping_mul(0x9e37_79b9), 500, Reglages::default());
        budget(start, max);
    }
}

#[test]
fn fuzz_petite_capacite() {
    let start = Instant::now();
    let reglages = Reglages {
        capacite_historique: 3,
        ..Reglages::default()
    };
    for seed in 100..110u64 {
        campagne(seed, 300, reglages);
        budget(start, Duration::from_secs(5));
    }
}

#[test]
fn fuzz_deterministe() {
    // même graine => même historique
    let jouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut c = Calculatrice::default().avec_horloge(|| 0);
        for _ in 0..400 {
            c.traiter(gen_evenement(&mut rng));
        }
        (c.etat().clone(), c.historique().iter().cloned().collect::<Vec<_>>())
    };
    assert_eq!(jouer(7), jouer(7));
}

#[test]
fn fuzz_decodage_ne_panique_pas() {
    let entrees = [
        "", "0", "9", ".", "+", "-", "*", "/", "×", "÷", "=", "%", "Enter", "Backspace",
        "Escape", "dot", "equals", "clear", "delete", "sign", "percent", "theme", "history",
        " ", "é", "10", "enter", "\u{0}",
    ];
    let mut c = Calculatrice::default();
    for s in entrees {
        if let Ok(ev) = s.parse::<Evenement>() {
            let r = c.traiter(ev);
            verifier(&c, &r, ev, &Reglages::default());
        }
    }
}
