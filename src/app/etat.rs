//! src/app/etat.rs
//!
//! Machine à états de la calculatrice (saisie, enchaînement, historique).
//!
//! Rôle : accumuler les frappes en une expression à deux opérandes,
//! soumettre cette expression au noyau sur « = » ou lors d'un enchaînement
//! d'opérateurs, et tenir l'historique borné des calculs aboutis.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout calcul passe par noyau::evaluer.
//! - Les enchaînements se résolvent immédiatement, de gauche à droite,
//!   une paire d'opérandes à la fois (sémantique calculatrice classique,
//!   PAS la précédence complète du noyau).
//! - L'affichage est toujours un littéral numérique, "0" ou "Error".
//! - Une instance = une session ; aucune instance globale implicite.

use tracing::{debug, warn};

use crate::app::historique::{EntreeHistorique, Historique};
use crate::noyau::{evaluer, format_valeur, ErreurCalc};

/// Valeur d'affichage au repos.
pub const AFFICHAGE_DEFAUT: &str = "0";

/// Sentinelle affichée après un calcul refusé, jusqu'à effacement ou
/// nouveau calcul abouti.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Largeur de saisie : au-delà, les frappes sont ignorées.
const LONGUEUR_AFFICHAGE_MAX: usize = 15;

/// Dernier calcul abouti, sans horodatage.
#[derive(Clone, Debug, PartialEq)]
pub struct DernierCalcul {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct EtatCalc {
    // --- saisie courante ---
    courante: String,
    precedente: String,
    operateur_en_attente: Option<char>,
    // Vrai quand la prochaine frappe de chiffre REMPLACE l'affichage
    // (après un opérateur, un résultat ou une erreur).
    reinitialiser_affichage: bool,

    // --- mémoire de session ---
    historique: Historique,
    dernier_calcul: Option<DernierCalcul>,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            courante: AFFICHAGE_DEFAUT.to_string(),
            precedente: String::new(),
            operateur_en_attente: None,
            reinitialiser_affichage: false,
            historique: Historique::default(),
            dernier_calcul: None,
        }
    }
}

impl EtatCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ saisie ------------------------ */

    /// Frappe d'un chiffre ou du point décimal.
    ///
    /// - un second point dans la même saisie est ignoré ;
    /// - sur l'affichage au repos ou marqué à réinitialiser, la frappe
    ///   REMPLACE l'affichage ;
    /// - sinon elle s'ajoute, dans la limite de la largeur de saisie.
    pub fn maj_entree(&mut self, valeur: &str) {
        if valeur == "." && self.courante.contains('.') {
            return;
        }

        if self.courante == AFFICHAGE_DEFAUT || self.reinitialiser_affichage {
            self.courante = valeur.to_string();
            self.reinitialiser_affichage = false;
            return;
        }

        if self.courante.len() < LONGUEUR_AFFICHAGE_MAX {
            self.courante.push_str(valeur);
        }
    }

    /// Frappe d'un opérateur.
    ///
    /// Si un opérateur attend déjà ET qu'un nouvel opérande a été saisi,
    /// le calcul en attente est résolu d'abord (enchaînement immédiat).
    /// L'opérande gauche devient l'affichage courant et la prochaine
    /// frappe de chiffre repartira de zéro.
    pub fn appliquer_operateur(&mut self, op: char) -> Result<(), ErreurCalc> {
        if self.operateur_en_attente.is_some() && !self.reinitialiser_affichage {
            self.calculer()?;
        }

        self.precedente = self.courante.clone();
        self.operateur_en_attente = Some(op);
        self.reinitialiser_affichage = true;
        Ok(())
    }

    /* ------------------------ calcul ------------------------ */

    /// Résout l'expression à deux opérandes en attente. Sans opérateur en
    /// attente (ou sans opérande gauche), ne fait rien.
    ///
    /// Abouti : le résultat devient l'affichage et entre dans
    /// l'historique. Refusé : l'affichage passe à la sentinelle, l'état
    /// opérateur est purgé et l'erreur remonte au appelant.
    pub fn calculer(&mut self) -> Result<(), ErreurCalc> {
        let Some(op) = self.operateur_en_attente else {
            return Ok(());
        };
        if self.precedente.is_empty() {
            return Ok(());
        }

        let expression = format!("{}{}{}", self.precedente, op, self.courante);

        match evaluer(&expression) {
            Ok(valeur) => {
                let resultat = format_valeur(valeur);
                debug!(expression = %expression, resultat = %resultat, "calcul abouti");

                self.historique
                    .ajouter(EntreeHistorique::nouvelle(&expression, &resultat));
                self.dernier_calcul = Some(DernierCalcul {
                    expression,
                    resultat: resultat.clone(),
                });

                self.courante = resultat;
                self.precedente.clear();
                self.operateur_en_attente = None;
                self.reinitialiser_affichage = true;
                Ok(())
            }
            Err(e) => {
                warn!(expression = %expression, erreur = %e, "calcul refusé");

                self.courante = AFFICHAGE_ERREUR.to_string();
                self.precedente.clear();
                self.operateur_en_attente = None;
                self.reinitialiser_affichage = true;
                Err(e)
            }
        }
    }

    /* ------------------------ corrections ------------------------ */

    /// Efface la dernière frappe. Sur un seul caractère, retour à
    /// l'affichage au repos. Sur la sentinelle d'erreur, ne fait rien :
    /// seule une remise à zéro ou un calcul abouti la remplace.
    pub fn retour_arriere(&mut self) {
        if self.courante == AFFICHAGE_ERREUR {
            return;
        }
        if self.courante.len() > 1 {
            self.courante.pop();
        } else {
            self.courante = AFFICHAGE_DEFAUT.to_string();
        }
    }

    /// Remise à zéro totale, historique compris. Équivaut à repartir
    /// d'une instance neuve.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /* ------------------------ lectures ------------------------ */

    /// Valeur affichée : littéral numérique, "0" ou "Error".
    pub fn affichage(&self) -> &str {
        &self.courante
    }

    /// Calculs aboutis, du plus ancien au plus récent.
    pub fn historique(&self) -> &[EntreeHistorique] {
        self.historique.entrees()
    }

    /// Dernier calcul abouti, s'il existe.
    pub fn dernier_calcul(&self) -> Option<&DernierCalcul> {
        self.dernier_calcul.as_ref()
    }
}
