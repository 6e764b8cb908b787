// src/app.rs
//
// Couche interaction (racine)
// ---------------------------
// Rôle :
// - Déclarer les sous-modules (etat.rs + historique.rs)
// - Ré-exporter les types de session (pour l'appelant : use calculatrice_web::app::EtatCalc;)
//
// Important :
// - Aucune arithmétique ici : le noyau reste la seule source de calcul.
// - Pas d'instance globale : l'appelant construit et possède son EtatCalc.

pub mod etat;
pub mod historique;

// Ré-export pratique.
pub use etat::{DernierCalcul, EtatCalc, AFFICHAGE_DEFAUT, AFFICHAGE_ERREUR};
pub use historique::{EntreeHistorique, Historique, CAPACITE_HISTORIQUE};
