// src/noyau/operations.rs
//
// Registre des opérations binaires.
//
// L'ensemble est FERMÉ et connu à la compilation : { + - * / % }.
// Une table fixe (symbole -> précédence + fonction d'application) remplace
// tout dispatch dynamique; aucune mutation à l'exécution.
//
// Précédences :
// - { + - }   = 1
// - { * / % } = 2

use super::erreurs::ErreurCalc;

/// Une opération binaire du registre.
///
/// `appliquer` reçoit (gauche, droite) et rend le résultat brut —
/// les contrôles de finitude (±∞, NaN) sont faits par l'évaluateur RPN.
#[derive(Debug)]
pub struct Operation {
    pub symbole: char,
    pub precedence: u8,
    pub appliquer: fn(f64, f64) -> Result<f64, ErreurCalc>,
}

/* ------------------------ Applications ------------------------ */

fn addition(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    Ok(a + b)
}

fn soustraction(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    Ok(a - b)
}

fn multiplication(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    Ok(a * b)
}

fn division(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    // `== 0.0` couvre aussi -0.0.
    if b == 0.0 {
        return Err(ErreurCalc::DivisionParZero);
    }
    Ok(a / b)
}

/// Reste tronqué (signe du dividende), comme `%` de f64.
fn modulo(a: f64, b: f64) -> Result<f64, ErreurCalc> {
    if b == 0.0 {
        return Err(ErreurCalc::DivisionParZero);
    }
    Ok(a % b)
}

/* ------------------------ Table fixe ------------------------ */

static TABLE_OPERATIONS: [Operation; 5] = [
    Operation {
        symbole: '+',
        precedence: 1,
        appliquer: addition,
    },
    Operation {
        symbole: '-',
        precedence: 1,
        appliquer: soustraction,
    },
    Operation {
        symbole: '*',
        precedence: 2,
        appliquer: multiplication,
    },
    Operation {
        symbole: '/',
        precedence: 2,
        appliquer: division,
    },
    Operation {
        symbole: '%',
        precedence: 2,
        appliquer: modulo,
    },
];

/// Résout un symbole vers son opération. Total sur { + - * / % },
/// tout autre symbole est une entrée invalide.
pub fn resoudre(symbole: char) -> Result<&'static Operation, ErreurCalc> {
    TABLE_OPERATIONS
        .iter()
        .find(|op| op.symbole == symbole)
        .ok_or_else(|| ErreurCalc::EntreeInvalide(format!("opérateur inconnu : '{symbole}'")))
}

/// Précédence d'un symbole (0 si ce n'est pas un opérateur du registre).
pub fn precedence(symbole: char) -> u8 {
    TABLE_OPERATIONS
        .iter()
        .find(|op| op.symbole == symbole)
        .map(|op| op.precedence)
        .unwrap_or(0)
}

/// Vrai si le symbole appartient au registre.
pub fn is_operateur(symbole: char) -> bool {
    TABLE_OPERATIONS.iter().any(|op| op.symbole == symbole)
}
