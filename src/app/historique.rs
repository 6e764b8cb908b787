//! src/app/historique.rs
//!
//! Historique borné des calculs réussis.
//!
//! Contrats :
//! - Seuls les calculs ABOUTIS entrent ici, jamais les erreurs.
//! - Capacité fixe : au-delà, la plus ancienne entrée sort.
//! - Ordre interne : de la plus ancienne à la plus récente.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nombre maximal d'entrées conservées.
pub const CAPACITE_HISTORIQUE: usize = 10;

/// Un calcul abouti : expression, résultat déjà rendu en texte, instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
    pub horodatage: DateTime<Utc>,
}

impl EntreeHistorique {
    pub fn nouvelle(expression: impl Into<String>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resultat: resultat.into(),
            horodatage: Utc::now(),
        }
    }
}

impl fmt::Display for EntreeHistorique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.resultat)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    /// Ajoute une entrée ; la plus ancienne sort si la capacité est atteinte.
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.push(entree);
        if self.entrees.len() > CAPACITE_HISTORIQUE {
            self.entrees.remove(0);
        }
    }

    /// Entrées de la plus ancienne à la plus récente.
    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    /// Dernier calcul abouti, s'il existe.
    pub fn derniere(&self) -> Option<&EntreeHistorique> {
        self.entrees.last()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
