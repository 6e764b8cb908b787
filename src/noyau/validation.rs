// src/noyau/validation.rs
//
// Garde-fous d'entrée, AVANT toute tokenisation.
//
// Ordre des contrôles :
// 1. entrée vide (après trim)            -> EntreeInvalide
// 2. motifs interdits (insensible casse) -> EntreeInvalide
// 3. alphabet autorisé                   -> EntreeInvalide
// 4. équilibre des parenthèses           -> ErreurSyntaxe
//
// La conversion RPN ne voit donc JAMAIS d'entrée déséquilibrée.

use super::erreurs::ErreurCalc;

/// Motifs refusés par contrat, comparés en minuscules.
/// Défense en profondeur : le noyau n'exécute jamais de code, mais une
/// expression contenant l'un de ces motifs est rejetée d'office.
const MOTIFS_INTERDITS: [&str; 8] = [
    "eval(",
    "function(",
    "new function",
    ".constructor",
    "__proto__",
    "process.",
    "require(",
    "import(",
];

/// Alphabet accepté : chiffres, les 5 opérateurs, point, parenthèses,
/// espaces (ignorés ensuite par la tokenisation).
fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '+' | '-' | '*' | '/' | '%' | '.' | '(' | ')')
}

/// Valide une expression brute. Ne produit aucun jeton : uniquement
/// accepter ou refuser, avec le genre d'erreur adapté.
pub fn valider(entree: &str) -> Result<(), ErreurCalc> {
    if entree.trim().is_empty() {
        return Err(ErreurCalc::EntreeInvalide("entrée vide".into()));
    }

    let minuscule = entree.to_lowercase();
    for motif in MOTIFS_INTERDITS {
        if minuscule.contains(motif) {
            return Err(ErreurCalc::EntreeInvalide(format!(
                "motif interdit : {motif}"
            )));
        }
    }

    if let Some(c) = entree.chars().find(|c| !caractere_autorise(*c)) {
        return Err(ErreurCalc::EntreeInvalide(format!(
            "caractère inattendu : '{c}'"
        )));
    }

    verifier_parentheses(entree)
}

/// Équilibre des parenthèses : le solde courant ne descend jamais sous
/// zéro et finit exactement à zéro.
fn verifier_parentheses(entree: &str) -> Result<(), ErreurCalc> {
    let mut solde: i32 = 0;

    for c in entree.chars() {
        match c {
            '(' => solde += 1,
            ')' => {
                solde -= 1;
                if solde < 0 {
                    return Err(ErreurCalc::ErreurSyntaxe(
                        "parenthèse fermante en trop".into(),
                    ));
                }
            }
            _ => {}
        }
    }

    if solde != 0 {
        return Err(ErreurCalc::ErreurSyntaxe("parenthèses non fermées".into()));
    }
    Ok(())
}
