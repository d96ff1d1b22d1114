// src/noyau/format.rs

use super::erreur::ErreurEval;

/// Au-delà de cette longueur, on passe en notation scientifique.
pub const LARGEUR_MAX_AFFICHAGE: usize = 16;

/// Formate une valeur pour l’affichage :
/// - entier mathématique => sans virgule ("14")
/// - sinon 9 décimales, zéros finaux et point final retirés ("2.5", "0.333333333")
/// - trop large (> 16 caractères) => scientifique à 9 décimales ("1.000000000e20")
pub fn formater_resultat(v: f64) -> Result<String, ErreurEval> {
    if !v.is_finite() {
        return Err(ErreurEval::NonFini);
    }

    let mut s = if v.fract() == 0.0 {
        // saturant : les très grands entiers finissent en scientifique
        format!("{}", v as i64)
    } else {
        let brut = format!("{v:.9}");
        brut.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    // -0.000000000 => "-0"
    if s == "-0" {
        s = "0".to_string();
    }

    if s.chars().count() > LARGEUR_MAX_AFFICHAGE {
        s = format!("{v:.9e}");
    }
    Ok(s)
}
