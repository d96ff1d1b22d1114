// src/noyau/jetons.rs

use super::erreur::ErreurEval;

/// Garde-fou : au-delà, on refuse (anti-gel sur entrée “collée”).
pub const MAX_JETONS: usize = 4096;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Produits par rpn.rs seulement (le tokenizer ne sait pas distinguer).
    Neg,
    Pos,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux : 12, 2.5, .5, 2.
/// - exposant : 1.5e20, 1e-7 (résultats en notation scientifique réutilisés)
/// - opérateurs + - * / (et leurs glyphes × ÷ −, normalisés ici)
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let op = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' | '−' => Some(Tok::Minus),
            '*' | '×' => Some(Tok::Star),
            '/' | '÷' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = op {
            out.push(t);
            i += 1;
        } else if c.is_ascii_digit() || c == '.' {
            let (n, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(n));
            i = fin;
        } else {
            return Err(ErreurEval::CaractereInattendu(c));
        }

        if out.len() > MAX_JETONS {
            return Err(ErreurEval::TropDeJetons(out.len()));
        }
    }

    Ok(out)
}

/// Lit un littéral à partir de `debut`; renvoie (valeur, indice suivant).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), ErreurEval> {
    let mut i = debut;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }

    // exposant seulement si un chiffre suit (sinon 'e' reste un caractère inattendu)
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    let texte: String = chars[debut..i].iter().collect();
    let n = texte
        .parse::<f64>()
        .map_err(|_| ErreurEval::NombreInvalide(texte.clone()))?;
    Ok((n, i))
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
