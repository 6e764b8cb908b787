//! Noyau — évaluation (pipeline complet)
//!
//! valider -> tokenize -> RPN -> pile f64 -> arrondi final
//!
//! Chaque étape refuse avec un [`ErreurCalc`] précis ; aucune étape ne
//! panique, quelle que soit l'entrée.

use tracing::debug;

use super::erreurs::ErreurCalc;
use super::jetons::{format_jetons, tokenize};
use super::rpn::{evaluer_rpn, to_rpn};
use super::validation::valider;

/// API publique : évalue une expression arithmétique et retourne sa
/// valeur numérique arrondie.
///
/// Pipeline : validation, tokenisation, conversion RPN, évaluation.
pub fn evaluer(expression: &str) -> Result<f64, ErreurCalc> {
    // 1) Garde-fous d'entrée
    valider(expression)?;

    // 2) Jetons
    let jetons = tokenize(expression)?;
    debug!(jetons = %format_jetons(&jetons), "tokenisation");

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    debug!(rpn = %format_jetons(&rpn), "conversion RPN");

    // 4) Pile f64
    let valeur = evaluer_rpn(&rpn)?;
    debug!(valeur = %valeur, "résultat");

    Ok(valeur)
}
