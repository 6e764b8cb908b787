//! Noyau d'évaluation arithmétique
//!
//! Organisation interne :
//! - erreurs.rs    : taxonomie des refus (4 genres)
//! - operations.rs : table fermée des 5 opérateurs binaires
//! - validation.rs : garde-fous d'entrée (vide, motifs, alphabet, parenthèses)
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + machine à pile f64
//! - format.rs     : rendu texte des résultats
//! - eval.rs       : pipeline complet

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operations;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::evaluer;
pub use format::format_valeur;
