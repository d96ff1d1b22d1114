//! Saisie : machine à états des touches.
//!
//! Trois champs seulement (équation, résultat affiché, dernier résultat valide)
//! et une transition pure `transition(état, touche) -> état`.
//!
//! Contrats :
//! - Transition totale : toute touche, dans tout état, donne un état.
//! - Aucune erreur ne sort d’ici : les échecs du noyau deviennent
//!   soit le dernier résultat valide (aperçu), soit "Error" (sur "=").
//! - Le résultat n’est PAS recalculé sur ⌫ (aperçu possiblement périmé).

use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use super::eval::evaluer;

/// Longueur maximale de l’équation par défaut (en caractères).
pub const LONGUEUR_MAX_DEFAUT: usize = 25;

/// Garde-fou : on borne la longueur configurable.
pub const LONGUEUR_MAX_PLAFOND: usize = 1000;

/// Seul état d’erreur visible, après "=" sur une expression inévaluable.
pub const MARQUEUR_ERREUR: &str = "Error";

pub const RESULTAT_INITIAL: &str = "0";

/* ------------------------ Réglages ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    longueur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    /// Borne `1..=LONGUEUR_MAX_PLAFOND` (0 rendrait la saisie impossible).
    pub fn avec_longueur_max(longueur_max: usize) -> Self {
        Self {
            longueur_max: longueur_max.clamp(1, LONGUEUR_MAX_PLAFOND),
        }
    }

    pub fn longueur_max(&self) -> usize {
        self.longueur_max
    }
}

/* ------------------------ Touches ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '÷',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    ParOuvrante,
    ParFermante,
    Effacer,     // ⌫
    ToutEffacer, // AC
    Egal,
}

impl Touche {
    /// Caractère ajouté à l’équation ; None pour les touches de commande
    /// (et pour un chiffre hors 0..=9).
    pub fn symbole(self) -> Option<char> {
        match self {
            Touche::Chiffre(d) => char::from_digit(u32::from(d), 10),
            Touche::Point => Some('.'),
            Touche::Operateur(op) => Some(op.symbole()),
            Touche::ParOuvrante => Some('('),
            Touche::ParFermante => Some(')'),
            Touche::Effacer | Touche::ToutEffacer | Touche::Egal => None,
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Effacer => f.write_str("⌫"),
            Touche::ToutEffacer => f.write_str("AC"),
            Touche::Egal => f.write_str("="),
            t => match t.symbole() {
                Some(c) => write!(f, "{c}"),
                None => write!(f, "{t:?}"),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    #[error("touche inconnue: {0:?}")]
    Inconnue(String),
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    /// Libellés du pavé : 0-9 . + - * ÷ ( ) ⌫ AC =
    /// (alias tolérés : × / − pour la saisie clavier)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s {
            "." => Touche::Point,
            "+" => Touche::Operateur(Operateur::Plus),
            "-" | "−" => Touche::Operateur(Operateur::Moins),
            "*" | "×" => Touche::Operateur(Operateur::Fois),
            "÷" | "/" => Touche::Operateur(Operateur::Divise),
            "(" => Touche::ParOuvrante,
            ")" => Touche::ParFermante,
            "⌫" => Touche::Effacer,
            "AC" => Touche::ToutEffacer,
            "=" => Touche::Egal,
            _ => {
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Touche::Chiffre(c as u8 - b'0'),
                    _ => return Err(ErreurTouche::Inconnue(s.to_string())),
                }
            }
        };
        Ok(t)
    }
}

/* ------------------------ État ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatSaisie {
    equation: String,
    resultat: String,
    dernier_valide: String,
}

impl Default for EtatSaisie {
    fn default() -> Self {
        Self {
            equation: String::new(),
            resultat: RESULTAT_INITIAL.to_string(),
            dernier_valide: RESULTAT_INITIAL.to_string(),
        }
    }
}

impl EtatSaisie {
    /// Équation telle que tapée (ou dernier résultat après "=").
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Aperçu, dernier résultat valide, "Error" ou résultat final.
    pub fn resultat(&self) -> &str {
        &self.resultat
    }

    pub fn dernier_valide(&self) -> &str {
        &self.dernier_valide
    }

    pub fn est_en_erreur(&self) -> bool {
        self.resultat == MARQUEUR_ERREUR
    }
}

/* ------------------------ Transition ------------------------ */

/// Transition pure : applique une touche à un état.
///
/// Priorité : AC, puis ⌫, puis "=", puis ajout d’un symbole.
pub fn transition(etat: &EtatSaisie, touche: Touche, reglages: &Reglages) -> EtatSaisie {
    match touche {
        Touche::ToutEffacer => EtatSaisie::default(),

        Touche::Effacer => {
            let mut suivant = etat.clone();
            suivant.equation.pop();
            // Seul cas où ⌫ touche au résultat : on quitte l’état "Error".
            if suivant.est_en_erreur() {
                suivant.resultat = suivant.dernier_valide.clone();
            }
            suivant
        }

        Touche::Egal => {
            let mut suivant = etat.clone();
            match evaluer(&etat.equation) {
                Ok(r) => {
                    suivant.resultat = r.clone();
                    suivant.dernier_valide = r.clone();
                    suivant.equation = r;
                }
                Err(e) => {
                    // incomplète ou échec arithmétique : même affichage
                    debug!(
                        "\"=\" refusé sur {:?} (incomplète: {}) : {e}",
                        etat.equation,
                        e.est_incomplete()
                    );
                    suivant.resultat = MARQUEUR_ERREUR.to_string();
                }
            }
            suivant
        }

        _ => {
            let Some(c) = touche.symbole() else {
                return etat.clone();
            };

            // Trop long : touche ignorée, rien ne change.
            if etat.equation.chars().count() >= reglages.longueur_max() {
                return etat.clone();
            }

            let mut suivant = etat.clone();
            suivant.equation.push(c);

            match evaluer(&suivant.equation) {
                Ok(r) => {
                    suivant.resultat = r.clone();
                    suivant.dernier_valide = r;
                }
                Err(e) => {
                    debug!("aperçu indisponible pour {:?} : {e}", suivant.equation);
                    suivant.resultat = suivant.dernier_valide.clone();
                }
            }
            suivant
        }
    }
}
