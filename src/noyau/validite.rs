//! Test de validité (aperçu en direct).
//!
//! Détermine si le texte saisi contient au moins une opération binaire
//! complète `nombre op nombre`. C’est un test de CONTENANCE, volontairement
//! lâche : "2+3*" passe (il contient "2+3"), ce qui permet l’aperçu pendant
//! la frappe. L’évaluation réelle (eval.rs) tranche ensuite.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// nombre (décimales optionnelles), opérateur binaire, nombre ; espaces tolérés.
    static ref OPERATION_BINAIRE: Regex = Regex::new(
        r"\d+(\.\d+)?\s*[-+*/÷×−]\s*\d+(\.\d+)?"
    ).unwrap();
}

/// Vrai si `texte` contient au moins un motif `a op b`.
pub fn contient_operation_binaire(texte: &str) -> bool {
    OPERATION_BINAIRE.is_match(texte)
}
