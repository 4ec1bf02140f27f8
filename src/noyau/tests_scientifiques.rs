//! Tests scientifiques (campagne) : propriétés du noyau décimal.
//!
//! - aller-retour addition / soustraction sur des décimaux à ≤ 12 chiffres
//! - NaN exactement quand le diviseur est nul
//! - largeur d’affichage bornée pour toute valeur finie
//! - enchaînement, idempotence de "=", éviction de l’historique
//!
//! Générateur déterministe (seed fixe) : pas de hasard entre deux exécutions.

use super::arith::{additionner, operer, soustraire};
use super::evenement::Evenement;
use super::format::format_affichage;
use super::machine::Calculatrice;
use super::operation::Operation;
use super::reglages::Reglages;

const PRECISION: u32 = 12;

/* ------------------------ Générateur de décimaux ------------------------ */

struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn pick(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }

    /// "-1234.000000000125" : ≤ 4 chiffres entiers, ≤ 12 fractionnaires.
    fn decimal(&mut self) -> String {
        let entiere = self.pick(10_000);
        let nb_frac = self.pick(13) as usize;
        let mut s = if self.pick(2) == 0 {
            format!("{entiere}")
        } else {
            format!("-{entiere}")
        };
        if nb_frac > 0 {
            s.push('.');
            for _ in 0..nb_frac {
                s.push(char::from(b'0' + self.pick(10) as u8));
            }
        }
        s
    }
}

fn valeur(s: &str) -> f64 {
    s.parse().unwrap_or_else(|_| panic!("non numérique: {s:?}"))
}

fn taper(c: &mut Calculatrice, touches: &str) {
    for t in touches.chars() {
        c.traiter(Evenement::depuis_char(t).unwrap());
    }
}

/* ------------------------ Moteur arithmétique ------------------------ */

#[test]
fn sci_aller_retour_addition_soustraction() {
    let mut rng = Lcg(0x5eed_0001);
    for _ in 0..2000 {
        let a = rng.decimal();
        let b = rng.decimal();
        let somme = additionner(&a, &b);
        // Display f64 : plus courte écriture exacte, jamais d’exposant
        let retour = soustraire(&somme.to_string(), &b);
        assert!(
            (retour - valeur(&a)).abs() <= 1e-9,
            "a={a} b={b} somme={somme} retour={retour}"
        );
    }
}

#[test]
fn sci_sommes_decimales_classiques() {
    assert_eq!(additionner("0.1", "0.2"), 0.3);
    assert_eq!(additionner("0.7", "0.1"), 0.8);
    assert_eq!(additionner("1.1", "2.2"), 3.3);
    assert_eq!(soustraire("1.2", "1"), 0.2);
    assert_eq!(operer("0.1", "3", Some(Operation::Multiplication), PRECISION), 0.3);
    assert_eq!(operer("4.35", "100", Some(Operation::Multiplication), PRECISION), 435.0);
}

#[test]
fn sci_nan_ssi_diviseur_nul() {
    let mut rng = Lcg(0x5eed_0002);
    for _ in 0..500 {
        let a = rng.decimal();
        let b = rng.decimal();
        let r = operer(&a, &b, Some(Operation::Division), PRECISION);
        assert_eq!(r.is_nan(), valeur(&b) == 0.0, "a={a} b={b} r={r}");
    }
    assert!(operer("5", "0", Some(Operation::Division), PRECISION).is_nan());
    assert!(!operer("5", "0.000000000001", Some(Operation::Division), PRECISION).is_nan());
}

#[test]
fn sci_division_bruit_supprime() {
    let mut rng = Lcg(0x5eed_0003);
    for _ in 0..500 {
        let a = rng.decimal();
        let b = rng.decimal();
        let r = operer(&a, &b, Some(Operation::Division), PRECISION);
        if r.is_nan() {
            continue;
        }
        // au plus 12 chiffres fractionnaires (à l’ulp près)
        let mis_a_l_echelle = r * 1e12;
        if mis_a_l_echelle.abs() < 1e12 {
            assert!(
                (mis_a_l_echelle - mis_a_l_echelle.round()).abs() < 1e-2,
                "a={a} b={b} r={r}"
            );
        }
    }
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_largeur_resultats() {
    let reglages = Reglages::default();
    let mut rng = Lcg(0x5eed_0004);
    for _ in 0..1000 {
        let a = rng.decimal();
        let b = rng.decimal();
        for op in Operation::TOUTES {
            let s = format_affichage(operer(&a, &b, Some(op), PRECISION), &reglages);
            assert!(s == "Error" || s.len() <= 16, "{a} {op} {b} -> {s:?}");
        }
    }
    assert_eq!(format_affichage(f64::NAN, &reglages), "Error");
}

/* ------------------------ Machine à états ------------------------ */

#[test]
fn sci_enchainement_3_plus_4_fois_5() {
    let mut c = Calculatrice::default();
    c.traiter(Evenement::Chiffre(3));
    c.traiter(Evenement::Operation(Operation::Addition));
    c.traiter(Evenement::Chiffre(4));
    c.traiter(Evenement::Operation(Operation::Multiplication));
    c.traiter(Evenement::Chiffre(5));
    let r = c.traiter(Evenement::Egal);

    assert_eq!(r.affichage.courant, "35");
    let h: Vec<(String, String)> = c
        .historique()
        .iter()
        .map(|e| (e.expression.clone(), e.resultat.clone()))
        .collect();
    assert_eq!(
        h,
        [
            ("7 × 5".to_string(), "35".to_string()),
            ("3 + 4".to_string(), "7".to_string())
        ]
    );
}

#[test]
fn sci_egal_deux_fois() {
    let mut c = Calculatrice::default();
    taper(&mut c, "9-4=");
    let apres_premier = (c.etat().clone(), c.historique().len());
    c.traiter(Evenement::Egal);
    assert_eq!((c.etat().clone(), c.historique().len()), apres_premier);
}

#[test]
fn sci_eviction_51_evaluations() {
    let mut c = Calculatrice::default();
    for i in 1..=51u32 {
        c.effacer_tout();
        taper(&mut c, &format!("{i}+0="));
    }
    assert_eq!(c.historique().len(), 50);
    assert_eq!(c.historique().get(0).unwrap().resultat, "51");
    assert_eq!(c.historique().get(49).unwrap().resultat, "2");
}

#[test]
fn sci_signe() {
    let mut c = Calculatrice::default();
    c.traiter(Evenement::Signe);
    assert_eq!(c.etat().courant, "0");
    c.traiter(Evenement::Chiffre(5));
    c.traiter(Evenement::Signe);
    assert_eq!(c.etat().courant, "-5");
    c.traiter(Evenement::Signe);
    assert_eq!(c.etat().courant, "5");
}

#[test]
fn sci_double_point() {
    let mut c = Calculatrice::default();
    taper(&mut c, "7..");
    assert_eq!(c.etat().courant, "7.");
    assert_eq!(c.etat().courant.matches('.').count(), 1);
}

#[test]
fn sci_ligne_du_dessus() {
    let mut c = Calculatrice::default();
    taper(&mut c, "12/");
    assert_eq!(c.affichage().precedent, "12 ÷");
    taper(&mut c, "4");
    assert_eq!(c.affichage().precedent, "12 ÷");
    taper(&mut c, "=");
    assert_eq!(c.affichage().precedent, "");
    assert_eq!(c.affichage().courant, "3");
}

#[test]
fn sci_negatifs_en_chaine() {
    let mut c = Calculatrice::default();
    taper(&mut c, "5");
    c.traiter(Evenement::Signe);
    taper(&mut c, "*2.5=");
    assert_eq!(c.etat().courant, "-12.5");
    taper(&mut c, "-0.5=");
    assert_eq!(c.etat().courant, "-13");
}
