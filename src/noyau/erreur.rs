// src/noyau/erreur.rs
//
// Erreurs de saisie (texte -> symbole)
// ------------------------------------
// Le moteur lui-même ne renvoie jamais d’erreur : seules les bordures
// (clavier, options de démarrage) peuvent fournir un symbole inconnu.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSaisie {
    #[error("opérateur inconnu : {0:?} (attendu : + - − × ÷ * / ^)")]
    OperateurInconnu(String),

    #[error("mode inconnu : {0:?} (attendu : standard, scientifique)")]
    ModeInconnu(String),

    #[error("unité d’angle inconnue : {0:?} (attendu : rad, deg)")]
    UniteInconnue(String),
}
