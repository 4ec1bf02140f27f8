// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran deux lignes : "<precedent> <op>" au-dessus, opérande courant dessous
// - Pavé tactile : chaque bouton envoie son nom de touche au décodeur du noyau
// - Panneau historique (optionnel) : clic = rappel du résultat
//
// Note :
// - Le clavier est géré dans app.rs (global, pas de champ texte à focaliser).

use eframe::egui;

use super::etat::AppCalc;

/// (libellé, touche envoyée au décodeur), ligne par ligne.
const PAVE: [[(&str, &str); 4]; 5] = [
    [("C", "clear"), ("DEL", "delete"), ("%", "percent"), ("÷", "/")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("×", "*")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("−", "-")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("+", "+")],
    [("±", "sign"), ("0", "0"), (".", "dot"), ("=", "equals")],
];

const TAILLE_BOUTON: [f32; 2] = [72.0, 52.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme = if self.theme_clair { "Sombre" } else { "Clair" };
                if ui.button(theme).clicked() {
                    self.basculer_theme();
                }
                let historique = match self.non_vus {
                    0 => "Historique".to_string(),
                    n => format!("Historique ({n})"),
                };
                if ui.button(historique).clicked() {
                    self.basculer_historique();
                }
            });
        });

        ui.add_space(8.0);
        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage.precedent)
                            .monospace()
                            .size(16.0)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(&self.affichage.courant)
                            .monospace()
                            .size(34.0)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (libelle, touche) in ligne {
                        self.bouton(ui, libelle, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: &str) {
        let texte = egui::RichText::new(libelle).size(20.0);
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte));
        if resp.clicked() {
            self.traiter_touche(touche);
        }
    }

    /// Panneau latéral : plus récent en tête.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(format!("Historique ({})", self.calc.historique().len()));
            if ui.button("Vider").clicked() {
                self.vider_historique();
            }
        });
        ui.separator();

        if self.calc.historique().is_empty() {
            ui.weak("Aucun calcul pour l’instant");
            return;
        }

        // rappel après la boucle : on ne mute pas l’historique en l’itérant
        let mut rappel = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, e) in self.calc.historique().iter().enumerate() {
                    let texte = format!("{}\n= {}", e.expression, e.resultat);
                    let resp = ui
                        .add(egui::Button::new(egui::RichText::new(texte).monospace()))
                        .on_hover_text("Reprendre ce résultat");
                    if resp.clicked() {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.rappeler(i);
        }
    }
}
