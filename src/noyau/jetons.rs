// src/noyau/jetons.rs
//
// Tokenisation : texte brut -> suite de jetons.
//
// Appelée après validation::valider, mais totale malgré tout : jamais de
// panique, tout ce qui n'est pas lisible est refusé avec un genre d'erreur.

use super::erreurs::ErreurCalc;
use super::operations::is_operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral numérique, déjà converti en f64.
    Nombre(f64),
    /// Opérateur binaire parmi + - * / %.
    Op(char),
    ParG,
    ParD,
}

/// Tokenize une chaîne en jetons.
/// Supporte :
/// - nombres décimaux : plus longue suite de chiffres et de points,
///   tranchée ensuite par `f64::from_str` (".5" et "1." passent,
///   "1.2.3" est UNE suite qui échoue au parse)
/// - opérateurs + - * / %
/// - parenthèses ( )
/// - les espaces sont ignorés
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        if is_operateur(c) {
            out.push(Jeton::Op(c));
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres et de points.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lexeme: String = chars[start..i].iter().collect();
            let valeur: f64 = lexeme
                .parse()
                .map_err(|_| ErreurCalc::ErreurSyntaxe(format!("nombre invalide : {lexeme}")))?;
            out.push(Jeton::Nombre(valeur));
            continue;
        }

        return Err(ErreurCalc::EntreeInvalide(format!(
            "caractère inattendu : '{c}'"
        )));
    }

    Ok(out)
}

/// Format utilitaire (logs/tests) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Nombre(n) => format!("{n}"),
            Jeton::Op(c) => c.to_string(),
            Jeton::ParG => "(".to_string(),
            Jeton::ParD => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
