//! Scénarios de frappe (bout en bout) : propriétés observables de la saisie.
//!
//! Chaque scénario part de l’état initial et tape une suite de libellés,
//! exactement comme le ferait le pavé.

use super::saisie::{transition, EtatSaisie, Reglages, Touche, MARQUEUR_ERREUR};
use super::erreur::ErreurEval;
use super::eval::evaluer;

fn touche(l: &str) -> Touche {
    l.parse()
        .unwrap_or_else(|e| panic!("libellé {l:?} refusé: {e}"))
}

/// Découpe "12+3=" en touches ; "AC" et "⌫" sont reconnus comme des touches entières.
fn libelles(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut reste = s;
    while !reste.is_empty() {
        if let Some(r) = reste.strip_prefix("AC") {
            out.push("AC".to_string());
            reste = r;
            continue;
        }
        let mut it = reste.chars();
        if let Some(c) = it.next() {
            out.push(c.to_string());
        }
        reste = it.as_str();
    }
    out
}

fn taper_depuis(etat: EtatSaisie, s: &str, r: &Reglages) -> EtatSaisie {
    libelles(s)
        .iter()
        .fold(etat, |e, l| transition(&e, touche(l), r))
}

fn taper(s: &str) -> EtatSaisie {
    taper_depuis(EtatSaisie::default(), s, &Reglages::default())
}

fn assert_etat(e: &EtatSaisie, equation: &str, resultat: &str) {
    assert_eq!(e.equation(), equation, "équation (état: {e:?})");
    assert_eq!(e.resultat(), resultat, "résultat (état: {e:?})");
}

/* ------------------------ Évaluateur ------------------------ */

#[test]
fn eval_priorite_fois() {
    assert_eq!(evaluer("2+3×4").as_deref(), Ok("14"));
}

#[test]
fn eval_division_decimale() {
    assert_eq!(evaluer("10÷4").as_deref(), Ok("2.5"));
}

#[test]
fn eval_decimal_periodique() {
    assert_eq!(evaluer("1÷3").as_deref(), Ok("0.333333333"));
}

#[test]
fn eval_nombre_reduit_refuse() {
    // un résultat déjà réduit ne contient pas d’opération binaire
    assert_eq!(evaluer("4"), Err(ErreurEval::SansOperation));
    assert_eq!(evaluer("2.5"), Err(ErreurEval::SansOperation));
}

/* ------------------------ Aperçu pendant la frappe ------------------------ */

#[test]
fn apercu_en_direct() {
    let e = taper("2");
    assert_etat(&e, "2", "0");
    let e = taper("2+");
    assert_etat(&e, "2+", "0");
    let e = taper("2+3");
    assert_etat(&e, "2+3", "5");
    assert_eq!(e.dernier_valide(), "5");
}

#[test]
fn apercu_garde_dernier_valide() {
    // "2+3*" passe la validité mais n’est pas évaluable : 5 reste affiché
    let e = taper("2+3*");
    assert_etat(&e, "2+3*", "5");
    let e = taper("2+3*4");
    assert_etat(&e, "2+3*4", "14");
}

#[test]
fn apercu_division_par_zero_silencieuse() {
    let e = taper("8÷2");
    assert_etat(&e, "8÷2", "4");
    let e = taper("8÷2-2÷0");
    assert_etat(&e, "8÷2-2÷0", "2");
    assert_eq!(e.dernier_valide(), "2");
}

#[test]
fn apercu_parentheses() {
    let e = taper("(2+3");
    assert_etat(&e, "(2+3", "0");
    let e = taper("(2+3)");
    assert_etat(&e, "(2+3)", "5");
    let e = taper("(2+3)*2");
    assert_etat(&e, "(2+3)*2", "10");
}

/* ------------------------ "=" ------------------------ */

#[test]
fn egal_sans_operation_donne_error() {
    let e = taper("5=");
    assert_etat(&e, "5", MARQUEUR_ERREUR);
    assert_eq!(e.dernier_valide(), "0");

    let e = taper("=");
    assert_etat(&e, "", MARQUEUR_ERREUR);
}

#[test]
fn egal_division_par_zero_donne_error() {
    let e = taper("5÷0=");
    assert_etat(&e, "5÷0", MARQUEUR_ERREUR);
    assert_eq!(e.dernier_valide(), "0");
}

#[test]
fn egal_valide_mais_incomplet_donne_error() {
    let e = taper("2+3*=");
    assert_etat(&e, "2+3*", MARQUEUR_ERREUR);
    assert_eq!(e.dernier_valide(), "5");
}

#[test]
fn egal_puis_enchainement() {
    let e = taper("2+2=");
    assert_etat(&e, "4", "4");
    assert_eq!(e.dernier_valide(), "4");

    let e = taper("2+2=+3=");
    assert_etat(&e, "7", "7");
}

#[test]
fn egal_deux_fois_refuse_le_resultat_seul() {
    // "4" seul ne contient plus d’opération
    let e = taper("2+2==");
    assert_etat(&e, "4", MARQUEUR_ERREUR);
    assert_eq!(e.dernier_valide(), "4");
}

#[test]
fn error_efface_par_la_touche_suivante() {
    let e = taper("5=");
    assert!(e.est_en_erreur());

    // un chiffre : aperçu ou dernier valide, plus jamais "Error"
    let e2 = taper_depuis(e.clone(), "+1", &Reglages::default());
    assert_etat(&e2, "5+1", "6");

    let e3 = taper_depuis(e, "⌫", &Reglages::default());
    assert_etat(&e3, "", "0");
}

/* ------------------------ ⌫ et AC ------------------------ */

#[test]
fn effacer_ne_recalcule_pas() {
    let e = taper("2+3⌫");
    assert_etat(&e, "2+", "5");
    let e = taper("12+3⌫⌫⌫");
    assert_etat(&e, "1", "15");
}

#[test]
fn effacer_sur_vide() {
    let e = taper("⌫");
    assert_eq!(e, EtatSaisie::default());
}

#[test]
fn ac_depuis_tout_etat() {
    for s in ["", "2+3", "5=", "2+2=", "5÷0=", "(((", "9⌫⌫"] {
        let e = taper(&format!("{s}AC"));
        assert_eq!(e, EtatSaisie::default(), "après {s:?} puis AC");
        assert_eq!(e.dernier_valide(), "0");
    }
}

/* ------------------------ Longueur maximale ------------------------ */

#[test]
fn longueur_max_par_defaut() {
    let plein = "1".repeat(25);
    let e = taper(&plein);
    assert_eq!(e.equation(), plein);

    let apres = transition(&e, touche("+"), &Reglages::default());
    assert_eq!(apres, e);
}

#[test]
fn longueur_max_configurable() {
    let r = Reglages::avec_longueur_max(5);
    let e = taper_depuis(EtatSaisie::default(), "1+2+3+4", &r);
    assert_etat(&e, "1+2+3", "6");

    // ⌫, "=" et AC restent actifs à la limite
    let e = taper_depuis(e, "⌫", &r);
    assert_eq!(e.equation(), "1+2+");
    let e = taper_depuis(e, "4=", &r);
    assert_etat(&e, "7", "7");
}

#[test]
fn longueur_comptee_en_caracteres() {
    // ÷ compte pour un seul caractère
    let r = Reglages::avec_longueur_max(3);
    let e = taper_depuis(EtatSaisie::default(), "8÷2", &r);
    assert_etat(&e, "8÷2", "4");
}

#[test]
fn ajout_allonge_d_un_seul_caractere() {
    let r = Reglages::default();
    let mut e = EtatSaisie::default();
    for l in libelles("(1.5+2)*3-4÷(2-1)") {
        let avant = e.equation().chars().count();
        e = transition(&e, touche(&l), &r);
        assert_eq!(e.equation().chars().count(), avant + 1, "touche {l:?}");
    }
    assert_eq!(e.resultat(), "6.5");
}
