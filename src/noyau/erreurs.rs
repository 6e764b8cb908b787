//! src/noyau/erreurs.rs
//!
//! Taxonomie d'erreurs du noyau — 4 genres, pas un de plus.
//!
//! Contrats :
//! - Chaque point de détection choisit UN genre; on ne fusionne jamais
//!   deux genres dans un fourre-tout générique.
//! - Détection synchrone : l'erreur remonte immédiatement à l'appelant
//!   (`Result` + `?`), jamais de résultat partiel.
//! - Les messages portent le détail (quel caractère, quel motif, quelle
//!   étape) pour les traces; les tests s'appuient sur le genre, pas sur
//!   le texte.

use thiserror::Error;

/// Erreur d'évaluation, par genre.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    /// Entrée refusée avant toute évaluation : vide, caractère hors
    /// alphabet, motif interdit, ou symbole d'opérateur inconnu.
    #[error("entrée invalide : {0}")]
    EntreeInvalide(String),

    /// Structure d'expression cassée : parenthèses déséquilibrées,
    /// nombre mal formé, opérandes insuffisantes, pile finale != 1.
    #[error("erreur de syntaxe : {0}")]
    ErreurSyntaxe(String),

    /// Opérande droite exactement 0 pour `/` ou `%`.
    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat infini (dépassement de capacité du flottant).
    #[error("dépassement : résultat infini")]
    Depassement,
}
