//! Tests moteur (campagne) : conformité arithmétique + taxonomie des refus.
//!
//! But : verrouiller le comportement observable du pipeline complet.
//! - valeurs de référence vérifiées à la main
//! - chaque genre d'erreur exercé par le chemin public
//! - associativité à droite des chaînes de même précédence ASSUMÉE
//!   (voir rpn.rs) : on la fige ici, on ne la « corrige » pas
//! - stress borné par budget temps

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval::evaluer;
use super::format::format_valeur;

fn ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn refus(expr: &str) -> ErreurCalc {
    evaluer(expr).expect_err(&format!("expr={expr:?} aurait dû être refusée"))
}

fn affiche(expr: &str) -> String {
    format_valeur(ok(expr))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ conformité de base ------------------------ */

#[test]
fn moteur_valeurs_de_reference() {
    let table: &[(&str, f64)] = &[
        ("2+2", 4.0),
        ("10-4", 6.0),
        ("6*7", 42.0),
        ("7/2", 3.5),
        ("10%3", 1.0),
        ("3+4*2", 11.0),
        ("(3+4)*2", 14.0),
        ("2.5*4", 10.0),
        ("1.5+2.25", 3.75),
        ("((2+3)*(4-1))", 15.0),
        ("100/4/5", 125.0), // 100/(4/5), voir associativité ci-dessous
    ];

    for (expr, attendu) in table {
        assert_eq!(ok(expr), *attendu, "expr={expr:?}");
    }
}

#[test]
fn moteur_arrondi_decimal() {
    // Résidus binaires effacés par l'arrondi à 10 décimales.
    assert_eq!(ok("3.14+2.86"), 6.0);
    assert_eq!(affiche("3.14+2.86"), "6");

    assert_eq!(ok("0.1+0.2"), 0.3);
    assert_eq!(affiche("0.1+0.2"), "0.3");

    assert_eq!(ok("1/3"), 0.3333333333);
    assert_eq!(affiche("1/3"), "0.3333333333");
}

#[test]
fn moteur_seuil_zero() {
    // 1e-8 : au-dessus du seuil, conservé.
    assert_eq!(ok("0.0001*0.0001"), 1e-8);
    // 1e-12 : sous le seuil, écrasé à zéro.
    assert_eq!(ok("0.00001*0.0000001"), 0.0);
}

#[test]
fn moteur_associativite_droite_assumee() {
    // Le pivot : dépilement strict, les chaînes de même précédence
    // partent à droite.
    assert_eq!(ok("1-2-3"), 2.0);

    assert_eq!(ok("1-2+3"), -4.0); // 1-(2+3)
    assert_eq!(ok("10-5-2"), 7.0); // 10-(5-2)
    assert_eq!(ok("8/4/2"), 4.0); // 8/(4/2)
    assert_eq!(ok("8/4*2"), 1.0); // 8/(4*2)
    assert_eq!(ok("100-10-10-10"), 90.0); // 100-(10-(10-10))

    // Insensibles à l'associativité.
    assert_eq!(ok("2*3*4"), 24.0);
    assert_eq!(ok("1+2+3"), 6.0);

    // Les parenthèses rendent la lecture gauche-droite explicite.
    assert_eq!(ok("(1-2)-3"), -4.0);
    assert_eq!(ok("(8/4)/2"), 1.0);
}

#[test]
fn moteur_signes_par_soustraction() {
    // Pas de moins unaire : les négatifs naissent d'une soustraction.
    assert_eq!(ok("(2-5)/2"), -1.5);
    // Reste à virgule : signe du dividende.
    assert_eq!(ok("(2-5)%2"), -1.0);
    assert_eq!(ok("7.5%2"), 1.5);
}

/* ------------------------ taxonomie des refus ------------------------ */

#[test]
fn moteur_refus_entree_invalide() {
    for expr in ["", "   ", "abc", "2^3", "1$2", "eval(1)", "require(x)"] {
        assert!(
            matches!(refus(expr), ErreurCalc::EntreeInvalide(_)),
            "expr={expr:?}"
        );
    }
}

#[test]
fn moteur_refus_syntaxe() {
    for expr in ["2+", "+2", "*5", "1++2", "()", "(1+2", "1+2)", "1.2.3", ".", "1 2"] {
        assert!(
            matches!(refus(expr), ErreurCalc::ErreurSyntaxe(_)),
            "expr={expr:?}"
        );
    }
}

#[test]
fn moteur_refus_division_par_zero() {
    for expr in ["1/0", "5%0", "3/(2-2)", "10%(5-5)"] {
        assert_eq!(refus(expr), ErreurCalc::DivisionParZero, "expr={expr:?}");
    }
}

#[test]
fn moteur_refus_depassement() {
    let enorme = "9".repeat(320);
    assert_eq!(refus(&enorme), ErreurCalc::Depassement);

    let produit = format!("{}*{}", "9".repeat(200), "9".repeat(200));
    assert_eq!(refus(&produit), ErreurCalc::Depassement);
}

#[test]
fn moteur_determinisme() {
    // Aucun état caché : deux appels identiques, deux sorties identiques.
    let exprs = [
        "2+2",
        "1-2-3",
        "(3+4)*2",
        "1/0",
        "0.1+0.2",
        "2+",
        "7.5%2",
    ];
    for expr in exprs {
        assert_eq!(evaluer(expr), evaluer(expr), "expr={expr:?}");
    }
}

/* ------------------------ stress contrôlé ------------------------ */

#[test]
fn moteur_stress_chaine_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // 1500 termes : la conversion et la pile restent itératives.
    let expr = vec!["1"; 1500].join("+");
    budget(t0, max);

    assert_eq!(ok(&expr), 1500.0);
    budget(t0, max);
}

#[test]
fn moteur_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let profondeur = 300;
    let expr = format!("{}7{}", "(".repeat(profondeur), ")".repeat(profondeur));
    assert_eq!(ok(&expr), 7.0);
    budget(t0, max);
}

#[test]
fn moteur_stress_grands_nombres_finis() {
    // Sous f64::MAX : fini, rendu exact sans notation scientifique.
    assert_eq!(ok("999999999999999*2"), 1999999999999998.0);
    assert_eq!(affiche("999999999999999*2"), "1999999999999998");
}
