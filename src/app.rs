// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est lu ici, une fois par frame, puis envoyé au décodeur du noyau
//   (mêmes noms de touches que le pavé : "Enter", "Backspace", "Escape", caractères).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl AppCalc {
    fn lire_clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.traiter_char(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.traiter_touche("Enter"),
                    egui::Key::Backspace => self.traiter_touche("Backspace"),
                    egui::Key::Escape => self.traiter_touche("Escape"),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        ctx.set_visuals(if self.theme_clair {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        });

        if self.historique_visible {
            egui::SidePanel::right("panneau_historique")
                .resizable(true)
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.ui_historique(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
