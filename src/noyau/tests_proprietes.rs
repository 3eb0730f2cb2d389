//! Tests de propriétés (proptest) : invariants du moteur sur des séquences
//! de touches aléatoires.
//!
//! - clear() remet toujours à zéro la saisie et la chaîne, sans toucher
//!   mémoire ni historique
//! - le tampon relu puis réécrit garde la même valeur
//! - un second `=` est sans effet
//! - l’historique ne dépasse jamais sa capacité

use proptest::prelude::*;

use super::nombre::{formater_nombre, lire_nombre};
use super::{Moteur, Operateur, CAPACITE_HISTORIQUE};

#[derive(Clone, Debug)]
enum Touche {
    Chiffre(u8),
    Point,
    Op(Operateur),
    Egal,
    Signe,
    Pourcent,
    Racine,
    Carre,
    Inverse,
    Sin,
    Log,
    Factorielle,
    MemoireAjout,
    MemoireRappel,
    Ce,
}

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
        Just(Operateur::Puissance),
    ]
}

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        4 => (0u8..10).prop_map(Touche::Chiffre),
        1 => Just(Touche::Point),
        2 => operateur().prop_map(Touche::Op),
        1 => Just(Touche::Egal),
        1 => Just(Touche::Signe),
        1 => Just(Touche::Pourcent),
        1 => Just(Touche::Racine),
        1 => Just(Touche::Carre),
        1 => Just(Touche::Inverse),
        1 => Just(Touche::Sin),
        1 => Just(Touche::Log),
        1 => Just(Touche::Factorielle),
        1 => Just(Touche::MemoireAjout),
        1 => Just(Touche::MemoireRappel),
        1 => Just(Touche::Ce),
    ]
}

fn rejouer(m: &mut Moteur, touches: &[Touche]) {
    for t in touches {
        match t {
            Touche::Chiffre(d) => m.input_digit(&d.to_string()),
            Touche::Point => m.input_decimal(),
            Touche::Op(op) => m.input_operation(*op),
            Touche::Egal => m.calculate(),
            Touche::Signe => m.toggle_sign(),
            Touche::Pourcent => m.percentage(),
            Touche::Racine => m.sqrt(),
            Touche::Carre => m.square(),
            Touche::Inverse => m.reciprocal(),
            Touche::Sin => m.sin(),
            Touche::Log => m.log(),
            Touche::Factorielle => m.factorial(),
            Touche::MemoireAjout => m.memory_add(),
            Touche::MemoireRappel => m.memory_recall(),
            Touche::Ce => m.clear_entry(),
        }
    }
}

/// Même valeur numérique (NaN == NaN ici).
fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

proptest! {
    #[test]
    fn clear_remet_a_zero(touches in prop::collection::vec(touche(), 0..60)) {
        let mut m = Moteur::default();
        rejouer(&mut m, &touches);

        let memoire = m.memory();
        let historique = m.history().len();
        m.clear();

        prop_assert_eq!(m.display(), "0");
        prop_assert_eq!(m.previous_operand(), "");
        prop_assert_eq!(m.pending_operator(), None);
        prop_assert!(!m.awaiting_new_operand());
        prop_assert!(meme_valeur(m.memory(), memoire));
        prop_assert_eq!(m.history().len(), historique);
    }

    #[test]
    fn chaine_tout_ou_rien(touches in prop::collection::vec(touche(), 0..60)) {
        let mut m = Moteur::default();
        for t in &touches {
            rejouer(&mut m, std::slice::from_ref(t));
            prop_assert_eq!(m.previous_operand().is_empty(), m.pending_operator().is_none());
        }
    }

    #[test]
    fn aller_retour_du_tampon(touches in prop::collection::vec(touche(), 0..60)) {
        let mut m = Moteur::default();
        rejouer(&mut m, &touches);

        let v = lire_nombre(m.display());
        prop_assert!(meme_valeur(lire_nombre(&formater_nombre(v)), v), "display={:?}", m.display());
    }

    #[test]
    fn second_egal_sans_effet(
        touches in prop::collection::vec(touche(), 0..40),
        op in operateur(),
        d in 0u8..10,
    ) {
        let mut m = Moteur::default();
        rejouer(&mut m, &touches);
        m.input_operation(op);
        m.input_digit(&d.to_string());
        m.calculate();

        let display = m.display().to_string();
        let historique = m.history().len();
        m.calculate();

        prop_assert_eq!(m.display(), display.as_str());
        prop_assert_eq!(m.history().len(), historique);
        prop_assert_eq!(m.previous_operand(), "");
    }

    #[test]
    fn historique_borne(n in 0usize..120) {
        let mut m = Moteur::default();
        for _ in 0..n {
            m.square();
        }
        prop_assert_eq!(m.history().len(), n.min(CAPACITE_HISTORIQUE));
    }
}
