// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Présentation seulement : lit les observables (et l’état en lecture), envoie des libellés
// - "Error" en couleur d’erreur
// - Pavé 4×5 : DEL ( ) ÷ / 7 8 9 * / 4 5 6 + / 1 2 3 - / AC 0 . =
// - Clavier : chiffres/opérateurs tapés, Enter = "=", Backspace = "⌫"
//
// Note :
// - "⌫" n’est pas dans les polices par défaut d’egui : le bouton affiche "DEL"
//   mais envoie bien "⌫" au noyau.

use eframe::egui;

use super::etat::AppCalc;

/// (texte affiché, libellé envoyé), ligne par ligne.
const PAVE: [[(&str, &str); 4]; 5] = [
    [("DEL", "⌫"), ("(", "("), (")", ")"), ("÷", "÷")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("*", "*")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("+", "+")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("-", "-")],
    [("AC", "AC"), ("0", "0"), (".", "."), ("=", "=")],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            ui.label(egui::RichText::new(self.equation.valeur().as_str()).size(26.0));
            ui.add_space(10.0);
            let mut resultat = egui::RichText::new(self.resultat.valeur().as_str())
                .size(40.0)
                .strong();
            if self.saisie().est_en_erreur() {
                resultat = resultat.color(ui.visuals().error_fg_color);
            }
            ui.label(resultat);
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (texte, libelle) in ligne {
                        let resp = ui.add_sized([72.0, 56.0], egui::Button::new(texte));
                        if resp.clicked() {
                            self.sur_touche(libelle);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                match &self.demarche {
                    Some(d) => {
                        ui.monospace(format!("Jetons : {}", d.jetons));
                        ui.monospace(format!("RPN    : {}", d.rpn));
                        ui.monospace(format!("Arbre  : {}", d.arbre));
                    }
                    None => {
                        ui.monospace("indisponible");
                    }
                }
                ui.monospace(format!("Dernier valide : {}", self.saisie().dernier_valide()));
            });
    }

    /// Clavier physique : texte tapé + Enter/Backspace.
    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let (textes, enter, backspace) = ui.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        for t in textes {
            for c in t.chars().filter(|c| !c.is_whitespace()) {
                self.sur_touche(&c.to_string());
            }
        }
        if backspace {
            self.sur_touche("⌫");
        }
        if enter {
            self.sur_touche("=");
        }
    }
}
