// src/noyau/nombre.rs
//
// Texte <-> nombre pour le tampon d’affichage
// -------------------------------------------
// - lire_nombre   : lit le plus long préfixe numérique (le reste est ignoré)
// - formater_nombre : écriture décimale la plus courte qui relit la même valeur
//
// Le tampon peut contenir des caractères “décoratifs” (parenthèses) :
// la lecture s’arrête au premier caractère non numérique, et renvoie NaN
// si aucun chiffre n’a été lu.

/// Seuils d’écriture exponentielle (mêmes bornes qu’une calculatrice web).
const SEUIL_EXP_HAUT: f64 = 1e21;
const SEUIL_EXP_BAS: f64 = 1e-6;

/// Lit le plus long préfixe numérique de `s`.
///
/// Forme acceptée : espaces, signe optionnel, puis `Infinity`, ou
/// chiffres [`.` chiffres] [`e` signe? chiffres]. Sans chiffre : NaN.
pub fn lire_nombre(s: &str) -> f64 {
    let s = s.trim_start();
    let (neg, reste) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if reste.starts_with("Infinity") {
        return if neg { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let octets = reste.as_bytes();
    let mut i = 0;

    let debut_entier = i;
    while i < octets.len() && octets[i].is_ascii_digit() {
        i += 1;
    }
    let entier = &reste[debut_entier..i];

    let mut fraction = "";
    if i < octets.len() && octets[i] == b'.' {
        let debut = i + 1;
        let mut j = debut;
        while j < octets.len() && octets[j].is_ascii_digit() {
            j += 1;
        }
        fraction = &reste[debut..j];
        i = j;
    }

    if entier.is_empty() && fraction.is_empty() {
        return f64::NAN;
    }

    // Exposant : seulement s’il est suivi d’au moins un chiffre.
    let mut exposant = "";
    if i < octets.len() && (octets[i] == b'e' || octets[i] == b'E') {
        let mut j = i + 1;
        if j < octets.len() && (octets[j] == b'+' || octets[j] == b'-') {
            j += 1;
        }
        let debut_chiffres = j;
        while j < octets.len() && octets[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_chiffres {
            exposant = &reste[i..j];
        }
    }

    // Forme normalisée (jamais "" ni "." pour la partie entière).
    let mut normal = String::with_capacity(entier.len() + fraction.len() + exposant.len() + 3);
    if neg {
        normal.push('-');
    }
    if entier.is_empty() {
        normal.push('0');
    } else {
        normal.push_str(entier);
    }
    if !fraction.is_empty() {
        normal.push('.');
        normal.push_str(fraction);
    }
    normal.push_str(exposant);

    normal.parse::<f64>().unwrap_or(f64::NAN)
}

/// Écrit `x` sous sa forme décimale la plus courte.
///
/// - entiers sans partie fractionnaire ("20", pas "20.0")
/// - `NaN`, `Infinity`, `-Infinity`
/// - `-0` s’écrit "0"
/// - |x| ≥ 1e21 ou |x| < 1e-6 : forme exponentielle signée ("1e+21", "1.5e-7")
pub fn formater_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if abs >= SEUIL_EXP_HAUT || abs < SEUIL_EXP_BAS {
        let brut = format!("{x:e}");
        return match brut.split_once('e') {
            Some((mantisse, exp)) if exp.starts_with('-') => format!("{mantisse}e{exp}"),
            Some((mantisse, exp)) => format!("{mantisse}e+{exp}"),
            None => brut,
        };
    }

    format!("{x}")
}
