//! Noyau — moteur arithmétique décimal
//!
//! Chaque opérande est relu en entier mis à l’échelle (decimal.rs), l’opération
//! se fait en entiers exacts, puis une seule division par 10^echelle ramène au f64.
//! Ainsi 0.1 + 0.2 donne exactement 0.3 (pas 0.30000000000000004).
//!
//! Échec numérique = NaN (jamais de panique, jamais d’Err) :
//! - division par un opérande nul
//! - opérande illisible ("Error", "-", ...)

use num_rational::BigRational;

use super::decimal::{lire_operande, pow10, rationnel_vers_f64, Decimal};
use super::operation::Operation;

/// Point d’entrée : a (op) b. Sans opération, renvoie b tel quel (identité).
pub fn operer(a: &str, b: &str, op: Option<Operation>, precision: u32) -> f64 {
    match op {
        Some(Operation::Addition) => additionner(a, b),
        Some(Operation::Soustraction) => soustraire(a, b),
        Some(Operation::Multiplication) => multiplier(a, b),
        Some(Operation::Division) => diviser(a, b, precision),
        None => lire_operande(b).map_or(f64::NAN, |d| d.vers_f64()),
    }
}

fn deux_operandes(a: &str, b: &str) -> Option<(Decimal, Decimal)> {
    Some((lire_operande(a)?, lire_operande(b)?))
}

/// Échelle commune = max(da, db), somme en entiers, puis / 10^echelle.
pub fn additionner(a: &str, b: &str) -> f64 {
    let Some((da, db)) = deux_operandes(a, b) else {
        return f64::NAN;
    };
    let echelle = da.echelle.max(db.echelle);
    let somme = da.a_l_echelle(echelle) + db.a_l_echelle(echelle);
    rationnel_vers_f64(&BigRational::new(somme, pow10(echelle)))
}

pub fn soustraire(a: &str, b: &str) -> f64 {
    let Some((da, db)) = deux_operandes(a, b) else {
        return f64::NAN;
    };
    let echelle = da.echelle.max(db.echelle);
    let diff = da.a_l_echelle(echelle) - db.a_l_echelle(echelle);
    rationnel_vers_f64(&BigRational::new(diff, pow10(echelle)))
}

/// Points retirés (produit des mantisses), échelle = da + db.
pub fn multiplier(a: &str, b: &str) -> f64 {
    let Some((da, db)) = deux_operandes(a, b) else {
        return f64::NAN;
    };
    let produit = Decimal {
        mantisse: da.mantisse * db.mantisse,
        echelle: da.echelle + db.echelle,
    };
    produit.vers_f64()
}

/// Quotient exact, arrondi à `precision` chiffres fractionnaires
/// (demi -> loin de zéro). Diviseur nul => NaN.
pub fn diviser(a: &str, b: &str, precision: u32) -> f64 {
    let Some((da, db)) = deux_operandes(a, b) else {
        return f64::NAN;
    };
    if db.est_zero() {
        return f64::NAN;
    }

    let quotient = da.vers_rationnel() / db.vers_rationnel();
    let echelle = BigRational::from_integer(pow10(precision));
    let arrondi = (quotient * &echelle).round() / echelle;
    rationnel_vers_f64(&arrondi)
}

/// a / 100 exact : on décale l’échelle de deux chiffres.
pub fn pourcentage(a: &str) -> f64 {
    match lire_operande(a) {
        Some(d) => Decimal {
            echelle: d.echelle + 2,
            ..d
        }
        .vers_f64(),
        None => f64::NAN,
    }
}
