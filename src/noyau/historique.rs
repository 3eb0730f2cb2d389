//! Historique des calculs (le plus récent en tête, borné).
//!
//! Contrats :
//! - une entrée n’est jamais modifiée après création
//! - ajout en tête ; au-delà de `CAPACITE_HISTORIQUE`, la plus ancienne sort
//! - seul `vider()` retire des entrées en dehors de l’éviction

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Nombre maximal d’entrées conservées.
pub const CAPACITE_HISTORIQUE: usize = 50;

#[derive(Clone, Debug)]
pub struct EntreeHistorique {
    id: String,
    expression: String,
    resultat: String,
    horodatage: DateTime<Local>,
}

impl EntreeHistorique {
    fn nouvelle(expression: String, resultat: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            expression,
            resultat,
            horodatage: Local::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }

    pub fn horodatage(&self) -> DateTime<Local> {
        self.horodatage
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Ajoute en tête, puis tronque à `CAPACITE_HISTORIQUE`.
    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.entrees
            .push_front(EntreeHistorique::nouvelle(expression.into(), resultat.into()));
        self.entrees.truncate(CAPACITE_HISTORIQUE);
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Entrées du plus récent au plus ancien.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    #[cfg(test)]
    pub(crate) fn plus_recente(&self) -> Option<&EntreeHistorique> {
        self.entrees.front()
    }
}
