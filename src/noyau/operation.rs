// src/noyau/operation.rs
//
// Opérations numériques du moteur
// -------------------------------
// - Operateur      : binaires + − × ÷ ^ (chaînage gauche -> droite)
// - FonctionUnaire : √, x², 1/x, sin/cos/tan, log, ln, n!
// - UniteAngle     : radians / degrés (trig seulement)
// - Mode           : sélecteur de pavé (aucun effet arithmétique)
//
// Politique “jamais d’erreur” :
// - division par zéro et 1/0 => 0
// - domaines invalides (log, ln, n!) => NaN, propagé tel quel (^ compris)

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurSaisie;

/* ------------------------ Opérateurs binaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    /// Symbole affiché (historique, ligne “opérande précédent”).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
            Operateur::Puissance => "^",
        }
    }

    /// a op b, sans jamais échouer.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => {
                // b == -0.0 compte aussi comme zéro
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
            Operateur::Puissance => puissance(a, b),
        }
    }
}

/// a^b ; NaN en exposant reste NaN, et (±1)^(±inf) est NaN.
fn puissance(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        return f64::NAN;
    }
    a.powf(b)
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = ErreurSaisie;

    /// Accepte les symboles “jolis” et ceux du clavier (`-`, `*`, `/`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operateur::Plus),
            "-" | "−" => Ok(Operateur::Moins),
            "*" | "×" => Ok(Operateur::Fois),
            "/" | "÷" => Ok(Operateur::Divise),
            "^" => Ok(Operateur::Puissance),
            autre => Err(ErreurSaisie::OperateurInconnu(autre.to_string())),
        }
    }
}

/* ------------------------ Unité d’angle ------------------------ */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniteAngle {
    #[default]
    Radians,
    Degres,
}

impl UniteAngle {
    pub fn basculee(self) -> Self {
        match self {
            UniteAngle::Radians => UniteAngle::Degres,
            UniteAngle::Degres => UniteAngle::Radians,
        }
    }

    /// Angle saisi -> radians.
    pub fn en_radians(self, x: f64) -> f64 {
        match self {
            UniteAngle::Radians => x,
            UniteAngle::Degres => x * (PI / 180.0),
        }
    }

    /// Libellé court du badge (RAD / DEG).
    pub fn libelle(self) -> &'static str {
        match self {
            UniteAngle::Radians => "RAD",
            UniteAngle::Degres => "DEG",
        }
    }
}

impl FromStr for UniteAngle {
    type Err = ErreurSaisie;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rad" | "radians" => Ok(UniteAngle::Radians),
            "deg" | "degres" | "degrés" | "degrees" => Ok(UniteAngle::Degres),
            _ => Err(ErreurSaisie::UniteInconnue(s.to_string())),
        }
    }
}

/* ------------------------ Mode (pavé affiché) ------------------------ */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Standard,
    Scientifique,
}

impl Mode {
    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Scientifique => "Scientifique",
        }
    }
}

impl FromStr for Mode {
    type Err = ErreurSaisie;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Mode::Standard),
            "scientifique" | "scientific" => Ok(Mode::Scientifique),
            _ => Err(ErreurSaisie::ModeInconnu(s.to_string())),
        }
    }
}

/* ------------------------ Fonctions unaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionUnaire {
    Racine,
    Carre,
    Inverse,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Factorielle,
}

impl FonctionUnaire {
    /// Calcule f(x). `unite` n’est consultée que par sin/cos/tan.
    pub fn appliquer(self, x: f64, unite: UniteAngle) -> f64 {
        match self {
            FonctionUnaire::Racine => x.sqrt(),
            FonctionUnaire::Carre => x * x,
            FonctionUnaire::Inverse => {
                if x != 0.0 {
                    1.0 / x
                } else {
                    0.0
                }
            }
            FonctionUnaire::Sin => unite.en_radians(x).sin(),
            FonctionUnaire::Cos => unite.en_radians(x).cos(),
            FonctionUnaire::Tan => unite.en_radians(x).tan(),
            // log10/ln d’un négatif => NaN ; de 0 => -inf
            FonctionUnaire::Log => x.log10(),
            FonctionUnaire::Ln => x.ln(),
            FonctionUnaire::Factorielle => factorielle(x),
        }
    }

    /// Notation d’historique à partir du texte affiché (pas du nombre relu).
    pub fn notation(self, affichage: &str) -> String {
        match self {
            FonctionUnaire::Racine => format!("√({affichage})"),
            FonctionUnaire::Carre => format!("{affichage}²"),
            FonctionUnaire::Inverse => format!("1/({affichage})"),
            FonctionUnaire::Sin => format!("sin({affichage})"),
            FonctionUnaire::Cos => format!("cos({affichage})"),
            FonctionUnaire::Tan => format!("tan({affichage})"),
            FonctionUnaire::Log => format!("log({affichage})"),
            FonctionUnaire::Ln => format!("ln({affichage})"),
            FonctionUnaire::Factorielle => format!("{affichage}!"),
        }
    }
}

/// n! pour n entier ≥ 0, NaN sinon.
///
/// Produit itératif ; s’arrête dès que le produit déborde (171! = inf).
pub fn factorielle(n: f64) -> f64 {
    // fract() de ±inf est NaN : rejeté ici aussi
    if n < 0.0 || n.fract() != 0.0 || n.is_nan() {
        return f64::NAN;
    }

    let mut produit = 1.0;
    let mut i = 2.0;
    while i <= n {
        produit *= i;
        if produit.is_infinite() {
            break;
        }
        i += 1.0;
    }
    produit
}
