//! Calculatrice standard / scientifique.
//!
//! - `noyau` : moteur à états (saisie, chaînage, fonctions, mémoire, historique)
//! - `app`   : état UI + vue egui (natif + web), propriétaire du moteur
//! - `options` : options de démarrage en ligne de commande (natif)

pub mod app;
pub mod noyau;

#[cfg(not(target_arch = "wasm32"))]
pub mod options;
