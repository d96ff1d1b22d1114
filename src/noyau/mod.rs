//! Noyau calculatrice (touches -> équation -> aperçu)
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (÷ × − normalisés)
//! - rpn.rs      : shunting-yard + repli RPN à pile explicite
//! - expr.rs     : valeur f64 et arbre parenthésé (division par zéro = erreur)
//! - validite.rs : test “contient a op b” (aperçu pendant la frappe)
//! - format.rs   : affichage du résultat (entier / 9 décimales / scientifique)
//! - eval.rs     : pipeline complet
//! - saisie.rs   : machine à états des touches (équation, résultat, dernier valide)

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;
pub mod validite;

#[cfg(test)]
mod tests_scenarios;


// API utilisée par l’app
pub use eval::{evaluer_detail, Demarche};
pub use saisie::{transition, EtatSaisie, Reglages, Touche};
