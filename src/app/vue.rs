// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran en lecture seule : on n’écrit JAMAIS le tampon directement
// - Tactile : gros boutons, une touche = un Symbol

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Operator, Symbol};

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.en_erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.ecran)
                            .monospace()
                            .size(28.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Operator::*;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Symbol::Digit(7));
                self.bouton(ui, "8", Symbol::Digit(8));
                self.bouton(ui, "9", Symbol::Digit(9));
                self.bouton(ui, "÷", Symbol::Operator(Slash));
                ui.end_row();

                self.bouton(ui, "4", Symbol::Digit(4));
                self.bouton(ui, "5", Symbol::Digit(5));
                self.bouton(ui, "6", Symbol::Digit(6));
                self.bouton(ui, "×", Symbol::Operator(Star));
                ui.end_row();

                self.bouton(ui, "1", Symbol::Digit(1));
                self.bouton(ui, "2", Symbol::Digit(2));
                self.bouton(ui, "3", Symbol::Digit(3));
                self.bouton(ui, "-", Symbol::Operator(Minus));
                ui.end_row();

                self.bouton(ui, "C", Symbol::Clear);
                self.bouton(ui, "0", Symbol::Digit(0));
                self.bouton(ui, ".", Symbol::DecimalPoint);
                self.bouton(ui, "+", Symbol::Operator(Plus));
                ui.end_row();

                ui.label("");
                ui.label("");
                ui.label("");
                self.bouton(ui, "=", Symbol::Evaluate);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, symbol: Symbol) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(symbol);
        }
    }
}
