// src/noyau/expr.rs
//
// Expression en RPN : valeur f64 (double précision) + affichage parenthésé.
// Les deux passent par rpn::replier (pile explicite) : une chaîne
// "1*1*…*1" ou "---…-1" de plusieurs milliers de jetons ne fait pas
// déborder la pile d’appels.
//
// IMPORTANT (SAFE):
// - valeur() ne renvoie jamais ±∞ ni NaN : division par zéro et dépassement
//   sont des erreurs, pas des valeurs (y compris un littéral comme 1e999).

use super::erreur::ErreurEval;
use super::jetons::Tok;
use super::rpn::replier;

fn fini(v: f64) -> Result<f64, ErreurEval> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurEval::NonFini)
    }
}

/// Évalue une RPN en f64.
pub fn valeur(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    replier(
        rpn,
        fini,
        |op, x| fini(if *op == Tok::Neg { -x } else { x }),
        |op, a, b| {
            let v = match op {
                Tok::Plus => a + b,
                Tok::Minus => a - b,
                Tok::Star => a * b,
                _ => {
                    // -0 est aussi un zéro
                    if b == 0.0 {
                        return Err(ErreurEval::DivisionParZero);
                    }
                    a / b
                }
            };
            fini(v)
        },
    )
}

/// Affichage parenthésé de l’arbre ("(2+(3*4))"), pour la démarche.
pub fn arbre(rpn: &[Tok]) -> Result<String, ErreurEval> {
    replier(
        rpn,
        |n| Ok(format!("{n}")),
        |op, x| Ok(if *op == Tok::Neg { format!("-{x}") } else { x }),
        |op, a, b| {
            let s = match op {
                Tok::Plus => '+',
                Tok::Minus => '-',
                Tok::Star => '*',
                _ => '/',
            };
            Ok(format!("({a}{s}{b})"))
        },
    )
}
