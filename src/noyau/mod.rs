//! Noyau de la calculatrice (sans vue)
//!
//! Organisation interne :
//! - moteur.rs     : machine à états (saisie, chaînage, fonctions, mémoire)
//! - operation.rs  : opérateurs binaires, fonctions unaires, unité d’angle, mode
//! - nombre.rs     : lecture / écriture du tampon d’affichage
//! - historique.rs : historique borné (le plus récent en tête)
//! - erreur.rs     : erreurs de saisie texte -> symbole

pub mod erreur;
pub mod historique;
pub mod moteur;
pub mod nombre;
pub mod operation;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurSaisie;
pub use historique::{EntreeHistorique, CAPACITE_HISTORIQUE};
pub use moteur::Moteur;
pub use operation::{FonctionUnaire, Mode, Operateur, UniteAngle};
