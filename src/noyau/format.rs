// src/noyau/format.rs
//
// Affichage borné : f64 -> texte d’au plus `largeur_max` caractères.
//
// 1) NaN / infini            -> "Error"
// 2) |v| >= 1e12 ou 0 < |v| < 1e-9 -> exponentielle, 8 chiffres fractionnaires
// 3) sinon                   -> fixe à `precision` chiffres, zéros finaux retirés
// 4) encore trop long        -> exponentielle, 6 chiffres (la largeur prime)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::decimal::pow10;
use super::reglages::Reglages;

/// Texte affiché pour toute faute numérique.
pub const ERREUR: &str = "Error";

/// Seuils fixes de la notation exponentielle (hors réglages).
const SEUIL_HAUT: f64 = 1e12;
const SEUIL_BAS: f64 = 1e-9;

const CHIFFRES_EXP: u32 = 8;
const CHIFFRES_EXP_REPLI: u32 = 6;

/* ------------------------ Arrondi exact ------------------------ */
//
// Le f64 est relu en rationnel EXACT (valeur binaire réelle), puis arrondi
// au demi le plus loin de zéro : 0.0001220703125 -> "0.000122070313",
// 1234567885000 -> "1.23456789e+12". `format!` arrondirait au pair.

/// 10^e exact, e signé.
fn puissance10(e: i32) -> BigRational {
    let p = pow10(e.unsigned_abs());
    if e >= 0 {
        BigRational::from_integer(p)
    } else {
        BigRational::new(BigInt::one(), p)
    }
}

/// n / 10^frac -> "d.ddd" (signe conservé, sauf pour zéro).
fn texte_decimal(n: &BigInt, frac: u32) -> String {
    let frac = frac as usize;
    let chiffres = n.magnitude().to_string();
    let chiffres = format!("{chiffres:0>largeur$}", largeur = frac + 1);
    let (entier, fraction) = chiffres.split_at(chiffres.len() - frac);
    let signe = if n.is_negative() { "-" } else { "" };
    if fraction.is_empty() {
        format!("{signe}{entier}")
    } else {
        format!("{signe}{entier}.{fraction}")
    }
}

/// "d.dddddddde+X" / "d.dddddddde-X" (signe d’exposant explicite).
fn exponentielle(v: f64, chiffres: u32) -> String {
    let Some(q) = BigRational::from_float(v.abs()) else {
        return ERREUR.to_string();
    };
    let signe = if v < 0.0 { "-" } else { "" };
    if q.is_zero() {
        return format!("{}e+0", texte_decimal(&BigInt::zero(), chiffres));
    }

    // estimation de floor(log10 |v|), corrigée en exact
    let mut e: i32 = format!("{:e}", v.abs())
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);
    let dix = BigRational::from_integer(BigInt::from(10));
    let mut m = &q / puissance10(e);
    while m >= dix {
        m /= &dix;
        e += 1;
    }
    while m < BigRational::one() {
        m *= &dix;
        e -= 1;
    }

    let mut n = (m * BigRational::from_integer(pow10(chiffres)))
        .round()
        .to_integer();
    // 9.999999995 -> 10.00000000 : on repasse à 1.00000000 et e + 1
    if n >= pow10(chiffres + 1) {
        n /= 10;
        e += 1;
    }

    let exposant = if e < 0 {
        format!("-{}", e.unsigned_abs())
    } else {
        format!("+{e}")
    };
    format!("{signe}{}e{exposant}", texte_decimal(&n, chiffres))
}

/// "2.500" -> "2.5", "3.000" -> "3" ; sans point : inchangé.
fn retirer_zeros_finaux(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Un petit négatif arrondi à zéro donne "0" (jamais "-0").
fn fixe(v: f64, precision: u32) -> String {
    let Some(q) = BigRational::from_float(v) else {
        return ERREUR.to_string();
    };
    let n = (q * BigRational::from_integer(pow10(precision)))
        .round()
        .to_integer();
    retirer_zeros_finaux(&texte_decimal(&n, precision)).to_string()
}

/* ------------------------ API ------------------------ */

pub fn format_affichage(valeur: f64, reglages: &Reglages) -> String {
    if !valeur.is_finite() {
        return ERREUR.to_string();
    }

    let abs = valeur.abs();

    let s = if abs >= SEUIL_HAUT || (abs != 0.0 && abs < SEUIL_BAS) {
        exponentielle(valeur, CHIFFRES_EXP)
    } else {
        fixe(valeur, reglages.precision)
    };

    if s.len() > reglages.largeur_max {
        exponentielle(valeur, CHIFFRES_EXP_REPLI)
    } else {
        s
    }
}
