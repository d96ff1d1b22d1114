//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : le collaborateur du noyau. Il possède l’état de saisie, reçoit les
//! libellés des touches (point d’entrée unique `sur_touche`) et publie les deux
//! textes observables (équation, résultat).
//!
//! Contrats :
//! - Une touche est traitée jusqu’au bout avant la suivante (`&mut self`).
//! - Libellé inconnu => ignoré (journalisé), jamais d’erreur vers la vue.
//! - Les abonnés ne sont notifiés que si le texte change.

use std::fmt;

use log::{debug, info, warn};

use crate::noyau::{evaluer_detail, transition, Demarche, EtatSaisie, Reglages, Touche};

/// Variable d’environnement (natif) pour la longueur maximale de l’équation.
pub const VAR_LONGUEUR_MAX: &str = "CALC_LONGUEUR_MAX";

/* ------------------------ Observable ------------------------ */

type Abonne<T> = Box<dyn FnMut(&T)>;

/// Valeur observable : abonnés notifiés à chaque changement.
pub struct Observable<T> {
    valeur: T,
    abonnes: Vec<Abonne<T>>,
}

impl<T: PartialEq> Observable<T> {
    pub fn new(valeur: T) -> Self {
        Self {
            valeur,
            abonnes: Vec::new(),
        }
    }

    pub fn valeur(&self) -> &T {
        &self.valeur
    }

    pub fn abonner(&mut self, f: impl FnMut(&T) + 'static) {
        self.abonnes.push(Box::new(f));
    }

    /// Remplace la valeur ; renvoie true (et notifie) seulement si elle change.
    pub fn publier(&mut self, valeur: T) -> bool {
        if self.valeur == valeur {
            return false;
        }
        self.valeur = valeur;
        for f in self.abonnes.iter_mut() {
            f(&self.valeur);
        }
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("valeur", &self.valeur)
            .field("abonnes", &self.abonnes.len())
            .finish()
    }
}

/* ------------------------ Réglages ------------------------ */

/// Lit la longueur maximale depuis un texte optionnel (ex: variable d’env).
/// Valeur absente ou illisible => réglages par défaut.
pub fn lire_reglages(longueur_max: Option<&str>) -> Reglages {
    match longueur_max.map(|s| s.trim().parse::<usize>()) {
        None => Reglages::default(),
        Some(Ok(n)) => {
            let r = Reglages::avec_longueur_max(n);
            if r.longueur_max() != n {
                warn!("{VAR_LONGUEUR_MAX}={n} hors bornes, ramené à {}", r.longueur_max());
            }
            r
        }
        Some(Err(e)) => {
            warn!("{VAR_LONGUEUR_MAX} illisible ({e}), valeur par défaut");
            Reglages::default()
        }
    }
}

/* ------------------------ App ------------------------ */

#[derive(Debug)]
pub struct AppCalc {
    saisie: EtatSaisie,
    reglages: Reglages,

    // --- sorties observables ---
    pub equation: Observable<String>,
    pub resultat: Observable<String>,

    // --- démarche (panneau d’explication), None si l’équation n’est pas évaluable ---
    pub demarche: Option<Demarche>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        let saisie = EtatSaisie::default();
        let mut equation = Observable::new(saisie.equation().to_string());
        let mut resultat = Observable::new(saisie.resultat().to_string());

        // journal des sorties publiées
        equation.abonner(|s: &String| debug!("équation => {s:?}"));
        resultat.abonner(|s: &String| debug!("résultat => {s:?}"));

        Self {
            equation,
            resultat,
            saisie,
            reglages,
            demarche: None,
        }
    }

    /// État de saisie courant (lecture seule, pour la vue).
    pub fn saisie(&self) -> &EtatSaisie {
        &self.saisie
    }

    /* ------------------------ Point d’entrée ------------------------ */

    /// Reçoit le libellé d’une touche du pavé ("7", "÷", "⌫", "AC", "=", ...).
    /// Renvoie true si l’état a changé.
    pub fn sur_touche(&mut self, libelle: &str) -> bool {
        info!("Touche pressée: {libelle}");

        match libelle.parse::<Touche>() {
            Ok(t) => self.appliquer(t),
            Err(e) => {
                warn!("{e} (ignorée)");
                false
            }
        }
    }

    /// Applique une touche déjà décodée, puis publie les sorties.
    pub fn appliquer(&mut self, touche: Touche) -> bool {
        let suivant = transition(&self.saisie, touche, &self.reglages);

        if suivant == self.saisie {
            if touche.symbole().is_some()
                && self.saisie.equation().chars().count() >= self.reglages.longueur_max()
            {
                warn!(
                    "touche {touche} ignorée : longueur max ({}) atteinte",
                    self.reglages.longueur_max()
                );
            }
            return false;
        }

        self.saisie = suivant;
        self.demarche = evaluer_detail(self.saisie.equation()).ok().map(|(_, d)| d);
        self.publier();
        true
    }

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.appliquer(Touche::ToutEffacer);
    }

    fn publier(&mut self) {
        self.equation.publier(self.saisie.equation().to_string());
        self.resultat.publier(self.saisie.resultat().to_string());
    }
}
