// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> repli (pile explicite)
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis la replier (valeur, affichage) sans récursion : voir expr.rs
//
// Règles:
// - Moins/plus unaire : si '-' ou '+' arrive quand on n’attend PAS une valeur,
//   il devient Neg/Pos (préfixe, priorité maximale, associatif à droite).
//   "2*-3" => "2 3 neg *"
// - * et / avant + et -, tous associatifs à gauche.
// - Pas de multiplication implicite : "2(3)" est refusé.

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire et les juxtapositions.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurEval::ParentheseNonOuverte);
                }
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // préfixe : rien à dépiler, il s’applique à ce qui suit
                ops.push(if tok == Tok::Minus { Tok::Neg } else { Tok::Pos });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }

                let p_tok = precedence(&tok);
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < p_tok {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            // jamais produits par le tokenizer
            Tok::Neg | Tok::Pos => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    // opérateur final sans opérande ("2+", "-")
    if !tokens.is_empty() && !prev_was_value {
        return Err(ErreurEval::ExpressionInvalide);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Replie une RPN avec une pile explicite (aucune récursion : la profondeur
/// de l’expression ne consomme pas la pile d’appels).
///
/// - `nombre`  : feuille
/// - `unaire`  : Neg / Pos appliqué à une valeur
/// - `binaire` : + - * / appliqué à (gauche, droite)
pub fn replier<T>(
    rpn: &[Tok],
    mut nombre: impl FnMut(f64) -> Result<T, ErreurEval>,
    mut unaire: impl FnMut(&Tok, T) -> Result<T, ErreurEval>,
    mut binaire: impl FnMut(&Tok, T, T) -> Result<T, ErreurEval>,
) -> Result<T, ErreurEval> {
    let mut st: Vec<T> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(n) => st.push(nombre(*n)?),

            Tok::Neg | Tok::Pos => {
                let x = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(unaire(tok, x)?);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(binaire(tok, a, b)?);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
