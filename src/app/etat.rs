//! src/app/etat.rs
//!
//! État UI : possède le moteur + quelques drapeaux d’affichage.
//!
//! Rôle : être le conteneur unique de l’état de la calculatrice pour la vue.
//! Le moteur n’est pas global : la vue le reçoit via `&mut AppCalc`.
//!
//! Contrats :
//! - Aucune arithmétique ici (tout passe par `Moteur`).
//! - Une action utilisateur = exactement une opération du moteur.

use crate::noyau::{FonctionUnaire, Mode, Moteur, Operateur, UniteAngle};

/// Action déclenchée par un bouton ou une touche clavier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Chiffre(char),
    Litteral(&'static str),
    Decimale,
    Operation(Operateur),
    Egal,
    Clear,
    ClearEntree,
    Signe,
    Pourcentage,
    Fonction(FonctionUnaire),
    Puissance,
    MemoireStocke,
    MemoireRappel,
    MemoireEfface,
    MemoireAjout,
    MemoireRetrait,
    BasculeAngle,
    ViderHistorique,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- UX ---
    pub historique_ouvert: bool,
}

impl AppCalc {
    pub fn new(mode: Mode, angle: UniteAngle) -> Self {
        Self {
            moteur: Moteur::avec(mode, angle),
            historique_ouvert: false,
        }
    }

    /// Aiguille une action vers l’opération correspondante du moteur.
    pub fn executer(&mut self, action: Action) {
        let m = &mut self.moteur;
        match action {
            Action::Chiffre(c) => {
                let mut tampon = [0u8; 4];
                m.input_digit(c.encode_utf8(&mut tampon));
            }
            Action::Litteral(s) => m.input_digit(s),
            Action::Decimale => m.input_decimal(),
            Action::Operation(op) => m.input_operation(op),
            Action::Egal => m.calculate(),
            Action::Clear => m.clear(),
            Action::ClearEntree => m.clear_entry(),
            Action::Signe => m.toggle_sign(),
            Action::Pourcentage => m.percentage(),
            Action::Fonction(f) => m.appliquer_fonction(f),
            Action::Puissance => m.power(),
            Action::MemoireStocke => m.memory_store(),
            Action::MemoireRappel => m.memory_recall(),
            Action::MemoireEfface => m.memory_clear(),
            Action::MemoireAjout => m.memory_add(),
            Action::MemoireRetrait => m.memory_subtract(),
            Action::BasculeAngle => m.toggle_angle_unit(),
            Action::ViderHistorique => m.clear_history(),
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.moteur.set_mode(mode);
    }
}
