// src/noyau/format.rs

/* ------------------------ rendu d'une valeur ------------------------ */

/// Rendu texte d'un résultat :
/// - valeur entière (et < 1e15, donc exacte en f64) -> sans décimales
/// - sinon 10 décimales, zéros finaux puis point final élagués
pub fn format_valeur(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let texte = format!("{v:.10}");
    texte.trim_end_matches('0').trim_end_matches('.').to_string()
}
