// src/noyau/erreur.rs
//
// Erreurs du noyau (évaluateur).
// La politique de repli (dernier résultat valide, "Error") vit dans saisie.rs :
// ici on ne fait que nommer ce qui a échoué.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    Vide,

    /// Le texte ne contient aucun motif `nombre op nombre`.
    #[error("aucune opération binaire complète")]
    SansOperation,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseNonOuverte,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    NonFini,

    #[error("expression trop longue ({0} jetons)")]
    TropDeJetons(usize),
}

impl ErreurEval {
    /// Vrai si l’expression est malformée ou pas encore complète
    /// (par opposition à un échec arithmétique sur une expression bien formée).
    pub fn est_incomplete(&self) -> bool {
        !matches!(self, ErreurEval::DivisionParZero | ErreurEval::NonFini)
    }
}
