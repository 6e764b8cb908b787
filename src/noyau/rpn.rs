// src/noyau/rpn.rs
//
// Shunting-yard -> RPN, puis évaluation par machine à pile.
//
// Règle de dépilement :
// - un opérateur ne dépile que les opérateurs de précédence STRICTEMENT
//   supérieure ; à précédence égale on empile par-dessus, et les chaînes
//   de même précédence s'associent donc à droite : "1-2-3" vaut 2, pas -4.
//   Comportement assumé, verrouillé par des tests de non-régression ;
//   ne pas resserrer la comparaison sans revoir ces tests.
// - pas de moins unaire : '-' est toujours binaire ici.

use super::erreurs::ErreurCalc;
use super::jetons::Jeton;
use super::operations::{precedence, resoudre};

/// En deçà, le résultat final est considéré comme un zéro d'arrondi.
pub const SEUIL_ZERO: f64 = 1e-10;

/// 10 décimales conservées sur le résultat final.
const ECHELLE_ARRONDI: f64 = 1e10;

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple :
///   jetons : [3, +, 4, *, 2]
///   rpn    : [3, 4, 2, *, +]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurCalc> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => out.push(jeton),

            Jeton::Op(c) => {
                // Dépile sur précédence strictement supérieure seulement.
                // Le motif s'arrête de lui-même sur une '(' en sommet.
                while let Some(Jeton::Op(haut)) = ops.last() {
                    if precedence(*haut) > precedence(c) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(jeton);
            }

            Jeton::ParG => ops.push(jeton),

            Jeton::ParD => {
                // dépile jusqu'à '('
                let mut ouverte = false;
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::ParG) {
                        ouverte = true;
                        break;
                    }
                    out.push(haut);
                }
                if !ouverte {
                    return Err(ErreurCalc::ErreurSyntaxe(
                        "parenthèse fermante en trop".into(),
                    ));
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG) {
            return Err(ErreurCalc::ErreurSyntaxe("parenthèses non fermées".into()));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de f64.
///
/// Chaque opérateur dépile b puis a et calcule `a OP b`. Après chaque
/// opération : infini -> Depassement, NaN -> ErreurSyntaxe. La pile doit
/// contenir exactement une valeur à la fin, arrondie par [`arrondir`].
pub fn evaluer_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(n) => pile.push(*n),

            Jeton::Op(c) => {
                let b = pile.pop().ok_or_else(manque_operandes)?;
                let a = pile.pop().ok_or_else(manque_operandes)?;

                let v = (resoudre(*c)?.appliquer)(a, b)?;
                if v.is_infinite() {
                    return Err(ErreurCalc::Depassement);
                }
                if v.is_nan() {
                    return Err(ErreurCalc::ErreurSyntaxe("résultat indéfini".into()));
                }
                pile.push(v);
            }

            Jeton::ParG | Jeton::ParD => {
                return Err(ErreurCalc::ErreurSyntaxe(
                    "parenthèse inattendue en RPN".into(),
                ))
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalc::ErreurSyntaxe("expression invalide".into()));
    }

    // Mêmes contrôles sur la valeur finale que sur chaque opération :
    // un littéral isolé n'est jamais passé par un opérateur.
    let brut = pile.pop().unwrap();
    if brut.is_nan() {
        return Err(ErreurCalc::ErreurSyntaxe("résultat indéfini".into()));
    }
    let v = arrondir(brut);
    // L'arrondi par changement d'échelle peut déborder sur un résultat
    // fini mais énorme.
    if !v.is_finite() {
        return Err(ErreurCalc::Depassement);
    }
    Ok(v)
}

fn manque_operandes() -> ErreurCalc {
    ErreurCalc::ErreurSyntaxe("opérandes insuffisantes".into())
}

/// Arrondi final : écrase les résidus flottants sous [`SEUIL_ZERO`],
/// sinon conserve 10 décimales.
fn arrondir(v: f64) -> f64 {
    if v.abs() < SEUIL_ZERO {
        0.0
    } else {
        (v * ECHELLE_ARRONDI).round() / ECHELLE_ARRONDI
    }
}
