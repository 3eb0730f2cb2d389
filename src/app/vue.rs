// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Lire l’état du moteur, jamais le modifier directement : chaque bouton
//   passe par AppCalc::executer (une action = une opération)
// - Pavé standard / pavé scientifique selon le mode
// - Historique repliable (le plus récent en haut)
// - Clavier : chiffres, . + - * / ^, Enter/= calcule, Escape = C, Delete = CE

use eframe::egui;

use super::etat::{Action, AppCalc};
use crate::noyau::nombre::formater_nombre;
use crate::noyau::{FonctionUnaire, Mode, Operateur};

/// Au-delà, l’affichage passe en petite police (le texte n’est jamais tronqué).
const LONGUEUR_AFFICHAGE_COMPACT: usize = 12;

const TAILLE_BOUTON: [f32; 2] = [56.0, 36.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                match self.moteur.mode() {
                    Mode::Standard => self.ui_pave_standard(ui),
                    Mode::Scientifique => self.ui_pave_scientifique(ui),
                }

                if self.historique_ouvert {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.ui_historique(ui);
                }
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut mode = self.moteur.mode();
            for m in [Mode::Standard, Mode::Scientifique] {
                if ui.selectable_value(&mut mode, m, m.libelle()).changed() {
                    self.set_mode(mode);
                }
            }

            ui.separator();

            let libelle = if self.historique_ouvert {
                "Masquer l’historique"
            } else {
                "Historique"
            };
            if ui.button(libelle).clicked() {
                self.historique_ouvert = !self.historique_ouvert;
            }
        });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let m = &self.moteur;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne “opérande précédent + opérateur”
                    match m.pending_operator() {
                        Some(op) => {
                            ui.weak(format!("{} {}", m.previous_operand(), op));
                        }
                        None => {
                            ui.weak(" ");
                        }
                    }

                    let taille = if m.display().chars().count() > LONGUEUR_AFFICHAGE_COMPACT {
                        24.0
                    } else {
                        40.0
                    };
                    ui.label(egui::RichText::new(m.display()).monospace().size(taille));
                });
            });
    }

    fn ui_pave_standard(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "CE", Action::ClearEntree);
                self.bouton(ui, "C", Action::Clear);
                self.bouton(ui, "%", Action::Pourcentage);
                self.bouton(ui, "÷", Action::Operation(Operateur::Divise));
                ui.end_row();

                self.chiffres(ui, ['7', '8', '9']);
                self.bouton(ui, "×", Action::Operation(Operateur::Fois));
                ui.end_row();

                self.chiffres(ui, ['4', '5', '6']);
                self.bouton(ui, "−", Action::Operation(Operateur::Moins));
                ui.end_row();

                self.chiffres(ui, ['1', '2', '3']);
                self.bouton(ui, "+", Action::Operation(Operateur::Plus));
                ui.end_row();

                self.bouton(ui, "±", Action::Signe);
                self.bouton(ui, "0", Action::Chiffre('0'));
                self.bouton(ui, ".", Action::Decimale);
                self.bouton(ui, "=", Action::Egal);
                ui.end_row();
            });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        // Badges : mémoire (si non nulle) + unité d’angle
        ui.horizontal(|ui| {
            let memoire = self.moteur.memory();
            if memoire != 0.0 {
                ui.label(egui::RichText::new(format!("M: {}", formater_nombre(memoire))).strong());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(self.moteur.angle_unit().libelle()).strong());
            });
        });

        ui.add_space(4.0);

        let angle = self.moteur.angle_unit().libelle();

        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                // Fonctions
                self.bouton(ui, angle, Action::BasculeAngle);
                self.fonction(ui, "sin", FonctionUnaire::Sin);
                self.fonction(ui, "cos", FonctionUnaire::Cos);
                self.fonction(ui, "tan", FonctionUnaire::Tan);
                self.fonction(ui, "n!", FonctionUnaire::Factorielle);
                ui.end_row();

                self.bouton(ui, "π", Action::Litteral(PI_TEXTE));
                self.fonction(ui, "log", FonctionUnaire::Log);
                self.fonction(ui, "ln", FonctionUnaire::Ln);
                self.bouton(ui, "x^y", Action::Puissance);
                self.bouton(ui, "e", Action::Litteral(E_TEXTE));
                ui.end_row();

                // Mémoire
                self.bouton(ui, "MC", Action::MemoireEfface);
                self.bouton(ui, "MR", Action::MemoireRappel);
                self.bouton(ui, "MS", Action::MemoireStocke);
                self.bouton(ui, "M+", Action::MemoireAjout);
                self.bouton(ui, "M−", Action::MemoireRetrait);
                ui.end_row();

                // Pavé principal
                self.fonction(ui, "x²", FonctionUnaire::Carre);
                self.fonction(ui, "√x", FonctionUnaire::Racine);
                self.fonction(ui, "1/x", FonctionUnaire::Inverse);
                self.bouton(ui, "CE", Action::ClearEntree);
                self.bouton(ui, "C", Action::Clear);
                ui.end_row();

                self.bouton(ui, "%", Action::Pourcentage);
                self.chiffres(ui, ['7', '8', '9']);
                self.bouton(ui, "÷", Action::Operation(Operateur::Divise));
                ui.end_row();

                self.bouton(ui, "±", Action::Signe);
                self.chiffres(ui, ['4', '5', '6']);
                self.bouton(ui, "×", Action::Operation(Operateur::Fois));
                ui.end_row();

                self.bouton(ui, "(", Action::Litteral("("));
                self.chiffres(ui, ['1', '2', '3']);
                self.bouton(ui, "−", Action::Operation(Operateur::Moins));
                ui.end_row();

                self.bouton(ui, ")", Action::Litteral(")"));
                self.bouton(ui, "0", Action::Chiffre('0'));
                self.bouton(ui, ".", Action::Decimale);
                self.bouton(ui, "+", Action::Operation(Operateur::Plus));
                self.bouton(ui, "=", Action::Egal);
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut vider = false;

        ui.horizontal(|ui| {
            ui.heading("Historique");
            if !self.moteur.history().is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    vider = ui.button("Effacer").clicked();
                });
            }
        });

        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_salt("historique_defilement")
            .max_height(256.0)
            .show(ui, |ui| {
                if self.moteur.history().is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.weak("Aucun calcul pour l’instant");
                        ui.weak("Vos calculs apparaîtront ici");
                    });
                    return;
                }

                for e in self.moteur.history().iter() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.weak(e.expression());
                                ui.strong(format!("= {}", e.resultat()));
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                                ui.small(e.horodatage().format("%H:%M").to_string());
                            });
                        });
                    });
                }
            });

        if vider {
            self.executer(Action::ViderHistorique);
        }
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, action: Action) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.executer(action);
        }
    }

    fn fonction(&mut self, ui: &mut egui::Ui, label: &str, f: FonctionUnaire) {
        self.bouton(ui, label, Action::Fonction(f));
    }

    fn chiffres(&mut self, ui: &mut egui::Ui, ligne: [char; 3]) {
        for c in ligne {
            let mut tampon = [0u8; 4];
            let label: &str = c.encode_utf8(&mut tampon);
            self.bouton(ui, label, Action::Chiffre(c));
        }
    }

    /* ------------------------ Clavier ------------------------ */

    /// Traduit les évènements clavier de la frame en actions.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let actions: Vec<Action> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => action_texte(t),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => action_touche(*key),
                    _ => None,
                })
                .collect()
        });

        for a in actions {
            self.executer(a);
        }
    }
}

const PI_TEXTE: &str = "3.141592653589793";
const E_TEXTE: &str = "2.718281828459045";

fn action_texte(t: &str) -> Option<Action> {
    let mut chars = t.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    match c {
        '0'..='9' => Some(Action::Chiffre(c)),
        '.' | ',' => Some(Action::Decimale),
        '%' => Some(Action::Pourcentage),
        '=' => Some(Action::Egal),
        '(' => Some(Action::Litteral("(")),
        ')' => Some(Action::Litteral(")")),
        _ => t.parse::<Operateur>().ok().map(Action::Operation),
    }
}

fn action_touche(key: egui::Key) -> Option<Action> {
    match key {
        egui::Key::Enter => Some(Action::Egal),
        egui::Key::Escape => Some(Action::Clear),
        egui::Key::Delete => Some(Action::ClearEntree),
        _ => None,
    }
}
