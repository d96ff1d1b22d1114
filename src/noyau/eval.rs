//! Noyau — évaluation (pipeline réel)
//!
//! validité -> jetons -> RPN -> valeur f64 (repli sans récursion) -> affichage
//!
//! Fonction pure : aucun état entre deux appels, donc appelable à chaque touche.
//! Aucun repli ici : toute défaillance remonte en `ErreurEval`.

use log::trace;

use super::erreur::ErreurEval;
use super::expr::{arbre, valeur};
use super::format::formater_resultat;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;
use super::validite::contient_operation_binaire;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// API publique : évalue `texte` et renvoie le résultat formaté.
pub fn evaluer(texte: &str) -> Result<String, ErreurEval> {
    let (_, rpn) = preparer(texte)?;
    resultat(&rpn)
}

/// Comme `evaluer`, avec la démarche (jetons, RPN, arbre) pour l’affichage.
pub fn evaluer_detail(texte: &str) -> Result<(String, Demarche), ErreurEval> {
    let (jetons, rpn) = preparer(texte)?;
    let r = resultat(&rpn)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        arbre: arbre(&rpn)?,
    };
    Ok((r, d))
}

/// Validité, jetons, RPN.
fn preparer(texte: &str) -> Result<(Vec<Tok>, Vec<Tok>), ErreurEval> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurEval::Vide);
    }

    // 1) Validité (contenance lâche, voir validite.rs)
    if !contient_operation_binaire(s) {
        return Err(ErreurEval::SansOperation);
    }

    // 2) Jetons (÷ et × normalisés ici)
    let jetons = tokenize(s)?;
    trace!("jetons: {}", format_tokens(&jetons));

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    trace!("rpn: {}", format_tokens(&rpn));

    Ok((jetons, rpn))
}

/// Valeur (repli sans récursion) + affichage.
fn resultat(rpn: &[Tok]) -> Result<String, ErreurEval> {
    let v = valeur(rpn)?;
    let r = formater_resultat(v)?;
    trace!("= {v} => {r:?}");
    Ok(r)
}
