//! Moteur de la calculatrice : machine à états d’entrée / évaluation.
//!
//! État :
//! - `affichage`         : tampon d’entrée (texte), "0" au repos
//! - chaîne en attente   : (opérande précédent, opérateur) — tout ou rien
//! - `attente`           : le prochain chiffre démarre un nouveau nombre
//! - mémoire, unité d’angle, mode, historique
//!
//! Contrats :
//! - Aucune opération n’échoue : 1/0 et x÷0 donnent 0, les domaines invalides
//!   donnent NaN (propagé tel quel dans l’affichage).
//! - Chaînage gauche -> droite sans priorité : `2 + 3 ×` replie `2+3` avant `×`.
//! - `clear()` ne touche ni la mémoire, ni l’unité d’angle, ni l’historique.

use tracing::{debug, info, trace};

use super::historique::Historique;
use super::nombre::{formater_nombre, lire_nombre};
use super::operation::{FonctionUnaire, Mode, Operateur, UniteAngle};

const AFFICHAGE_REPOS: &str = "0";

/// Opération binaire en attente de son second opérande.
#[derive(Clone, Debug, PartialEq)]
struct Chaine {
    operande: String,
    operateur: Operateur,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    affichage: String,
    chaine: Option<Chaine>,
    attente: bool,
    memoire: f64,
    unite_angle: UniteAngle,
    mode: Mode,
    historique: Historique,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::avec(Mode::default(), UniteAngle::default())
    }
}

impl Moteur {
    /// Moteur au repos, avec mode et unité d’angle initiaux.
    pub fn avec(mode: Mode, unite_angle: UniteAngle) -> Self {
        Self {
            affichage: AFFICHAGE_REPOS.to_string(),
            chaine: None,
            attente: false,
            memoire: 0.0,
            unite_angle,
            mode,
            historique: Historique::default(),
        }
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    pub fn display(&self) -> &str {
        &self.affichage
    }

    /// Opérande capturé avant l’opérateur en attente ("" si aucune chaîne).
    pub fn previous_operand(&self) -> &str {
        self.chaine.as_ref().map_or("", |c| c.operande.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operateur> {
        self.chaine.as_ref().map(|c| c.operateur)
    }

    pub fn awaiting_new_operand(&self) -> bool {
        self.attente
    }

    pub fn memory(&self) -> f64 {
        self.memoire
    }

    pub fn angle_unit(&self) -> UniteAngle {
        self.unite_angle
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn history(&self) -> &Historique {
        &self.historique
    }

    /// Valeur numérique du tampon.
    fn valeur(&self) -> f64 {
        lire_nombre(&self.affichage)
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre (ou littéral : "(", ")", décimales de π / e).
    pub fn input_digit(&mut self, d: &str) {
        if self.attente {
            self.affichage = d.to_string();
            self.attente = false;
        } else if self.affichage == AFFICHAGE_REPOS {
            self.affichage = d.to_string();
        } else {
            self.affichage.push_str(d);
        }
        trace!(affichage = %self.affichage, "saisie");
    }

    pub fn input_decimal(&mut self) {
        if self.attente {
            self.affichage = "0.".to_string();
            self.attente = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Opérateur binaire : capture, ou repli immédiat de la chaîne en cours.
    pub fn input_operation(&mut self, op: Operateur) {
        match self.chaine.take() {
            None => {
                debug!(operande = %self.affichage, operateur = %op, "capture");
                self.chaine = Some(Chaine {
                    operande: self.affichage.clone(),
                    operateur: op,
                });
            }
            Some(c) if !self.attente => {
                let r = c.operateur.appliquer(lire_nombre(&c.operande), self.valeur());
                let texte = formater_nombre(r);
                let expression = format!("{} {} {}", c.operande, c.operateur, self.affichage);
                debug!(%expression, resultat = %texte, operateur = %op, "repli");
                self.affichage = texte.clone();
                self.chaine = Some(Chaine {
                    operande: texte,
                    operateur: op,
                });
            }
            // opérateur changé avant tout nouvel opérande
            Some(c) => {
                self.chaine = Some(Chaine {
                    operande: c.operande,
                    operateur: op,
                });
            }
        }
        self.attente = true;
    }

    /// `=` : termine la chaîne en cours (sans effet s’il n’y en a pas).
    pub fn calculate(&mut self) {
        let Some(c) = self.chaine.take() else {
            return;
        };

        let r = c.operateur.appliquer(lire_nombre(&c.operande), self.valeur());
        let texte = formater_nombre(r);
        let expression = format!("{} {} {}", c.operande, c.operateur, self.affichage);
        debug!(%expression, resultat = %texte, "calcul");

        self.historique.ajouter(expression, texte.clone());
        self.affichage = texte;
        self.attente = true;
    }

    /// `x^y` : passe par le chaînage binaire (historique au `=`).
    pub fn power(&mut self) {
        self.input_operation(Operateur::Puissance);
    }

    /* ------------------------ Effacements ------------------------ */

    /// C : remise à zéro de la saisie et de la chaîne.
    pub fn clear(&mut self) {
        self.affichage = AFFICHAGE_REPOS.to_string();
        self.chaine = None;
        self.attente = false;
        debug!("clear");
    }

    /// CE : efface seulement le tampon.
    pub fn clear_entry(&mut self) {
        self.affichage = AFFICHAGE_REPOS.to_string();
    }

    /* ------------------------ Édition du tampon ------------------------ */

    pub fn toggle_sign(&mut self) {
        if self.affichage == AFFICHAGE_REPOS {
            return;
        }
        if self.affichage.starts_with('-') {
            self.affichage.remove(0);
        } else {
            self.affichage.insert(0, '-');
        }
    }

    /// % : divise le tampon par 100. Ne positionne PAS `attente`.
    pub fn percentage(&mut self) {
        self.affichage = formater_nombre(self.valeur() / 100.0);
    }

    /* ------------------------ Fonctions unaires ------------------------ */

    /// Applique f au tampon, enregistre l’historique, attend un nouvel opérande.
    pub fn appliquer_fonction(&mut self, f: FonctionUnaire) {
        let r = f.appliquer(self.valeur(), self.unite_angle);
        let texte = formater_nombre(r);
        let expression = f.notation(&self.affichage);
        debug!(%expression, resultat = %texte, "fonction");

        self.historique.ajouter(expression, texte.clone());
        self.affichage = texte;
        self.attente = true;
    }

    pub fn sqrt(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Racine);
    }

    pub fn square(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Carre);
    }

    pub fn reciprocal(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Inverse);
    }

    pub fn sin(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Sin);
    }

    pub fn cos(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Cos);
    }

    pub fn tan(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Tan);
    }

    pub fn log(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Log);
    }

    pub fn ln(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Ln);
    }

    pub fn factorial(&mut self) {
        self.appliquer_fonction(FonctionUnaire::Factorielle);
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memory_store(&mut self) {
        self.memoire = self.valeur();
    }

    pub fn memory_recall(&mut self) {
        self.affichage = formater_nombre(self.memoire);
        self.attente = true;
    }

    pub fn memory_clear(&mut self) {
        self.memoire = 0.0;
    }

    pub fn memory_add(&mut self) {
        self.memoire += self.valeur();
    }

    pub fn memory_subtract(&mut self) {
        self.memoire -= self.valeur();
    }

    /* ------------------------ Mode / unité ------------------------ */

    /// Sélecteur de pavé : aucun effet sur l’arithmétique.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_angle_unit(&mut self) {
        self.unite_angle = self.unite_angle.basculee();
        debug!(unite = self.unite_angle.libelle(), "unité d’angle");
    }

    /* ------------------------ Historique ------------------------ */

    pub fn add_to_history(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.historique.ajouter(expression, resultat);
    }

    pub fn clear_history(&mut self) {
        info!(entrees = self.historique.len(), "historique vidé");
        self.historique.vider();
    }
}
