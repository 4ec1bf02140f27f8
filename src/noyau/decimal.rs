// src/noyau/decimal.rs
//
// Lecture d’un opérande (texte) en décimal exact mis à l’échelle :
//   valeur = mantisse / 10^echelle
//
// `echelle` = nombre de chiffres après le point (0 si aucun).
// Formes acceptées (tout ce que la machine peut placer dans `courant`) :
// - "-12.5", "0.", "12." (point final nu), ".5"
// - l’exponentielle produite par l’affichage : "1.23456789e+12", "5e-10"
// Tout le reste ("Error", "-Error", "-", "") est illisible => None.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Garde-fou : au-delà, f64 vaut de toute façon 0 ou l’infini.
const EXPOSANT_MAX: u32 = 1000;

pub fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    pub mantisse: BigInt,
    pub echelle: u32,
}

impl Decimal {
    pub fn est_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    /// Mantisse réécrite à une échelle plus grande (exacte).
    pub fn a_l_echelle(&self, echelle: u32) -> BigInt {
        debug_assert!(echelle >= self.echelle);
        &self.mantisse * pow10(echelle - self.echelle)
    }

    pub fn vers_rationnel(&self) -> BigRational {
        BigRational::new(self.mantisse.clone(), pow10(self.echelle))
    }

    /// Une seule conversion, arrondie au plus proche.
    pub fn vers_f64(&self) -> f64 {
        rationnel_vers_f64(&self.vers_rationnel())
    }
}

pub fn rationnel_vers_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Texte -> décimal exact. None si l’opérande est illisible.
pub fn lire_operande(s: &str) -> Option<Decimal> {
    let s = s.trim();

    let (negatif, reste) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (corps, exposant) = match reste.find(['e', 'E']) {
        Some(i) => (&reste[..i], Some(lire_exposant(&reste[i + 1..])?)),
        None => (reste, None),
    };

    let (entiere, fraction) = match corps.split_once('.') {
        Some((a, b)) => (a, b),
        None => (corps, ""),
    };

    let chiffres_ok = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
    if !chiffres_ok(entiere) || !chiffres_ok(fraction) {
        return None;
    }
    if entiere.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut chiffres = String::with_capacity(entiere.len() + fraction.len());
    chiffres.push_str(entiere);
    chiffres.push_str(fraction);

    let mut mantisse = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    if negatif {
        mantisse = -mantisse;
    }

    let mut echelle = u32::try_from(fraction.len()).ok()?;

    match exposant {
        None | Some(0) => {}
        Some(e) if e > 0 => {
            let e = e.unsigned_abs();
            if e <= echelle {
                echelle -= e;
            } else {
                mantisse *= pow10(e - echelle);
                echelle = 0;
            }
        }
        Some(e) => echelle += e.unsigned_abs(),
    }

    Some(Decimal { mantisse, echelle })
}

fn lire_exposant(t: &str) -> Option<i32> {
    let (negatif, chiffres) = match t.as_bytes().first()? {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };
    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let v: u32 = chiffres.parse().ok()?;
    if v > EXPOSANT_MAX {
        return None;
    }
    let v = v as i32;
    Some(if negatif { -v } else { v })
}
