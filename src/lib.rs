//! Calculatrice web — cœur de calcul et machine à états de session.
//!
//! Deux couches, sans état partagé entre elles :
//! - [`noyau`] : évaluation d'expressions arithmétiques (validation,
//!   tokenisation, RPN, pile f64). Sans état, une fonction pure.
//! - [`app`]   : machine à états d'une session (saisie, enchaînement
//!   gauche-droite, historique borné). Possède tout l'état mutable.
//!
//! L'appelant (couche UI, hors de ce crate) construit un
//! [`app::EtatCalc`] par session et lui transmet les frappes ; le rendu
//! se fait à partir de [`app::EtatCalc::affichage`].

pub mod app;
pub mod noyau;

// Surface publique usuelle.
pub use app::{EntreeHistorique, EtatCalc, Historique};
pub use noyau::{evaluer, ErreurCalc};
