// src/main.rs
//
// Calculatrice Z-exact — point d'entrée CLI
// -----------------------------------------
// But:
// - `calculatrice_zexact "<expression>"`     : calcule l'expression
// - `calculatrice_zexact --fichier <chemin>` : expression lue ligne à ligne
//   (un `evaluer` par ligne, un seul `finaliser` à la fin)
// - sans argument, ou --help                 : aide (code retour 0)
//
// Codes retour : 0 si calcul réussi (ou aide), 1 sinon.
//
// IMPORTANT (structure projet):
// - Ici : arguments + affichage seulement. Aucune grammaire, aucun calcul.
// - Tout le noyau vit dans la bibliothèque (src/noyau/).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use num_bigint::BigInt;

use calculatrice_zexact::{calculer, Calculatrice};

/// Calculatrice exacte sur les entiers : additions et multiplications,
/// résultat en précision arbitraire.
#[derive(Parser, Debug)]
#[command(name = "calculatrice_zexact", version, about)]
struct Cli {
    /// Expression à calculer (ex: "77 + 34 * 45")
    #[arg(conflicts_with = "fichier")]
    expression: Option<String>,

    /// Fichier texte : une expression répartie sur plusieurs lignes,
    /// évaluées bout à bout avant un résultat unique
    #[arg(long, value_name = "CHEMIN")]
    fichier: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let resultat = if let Some(chemin) = &cli.fichier {
        calculer_fichier(chemin)
    } else if let Some(expression) = &cli.expression {
        calculer(expression).map_err(|e| e.to_string())
    } else {
        // Pas d'argument : aide, et ce n'est pas une erreur.
        let _ = Cli::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    };

    match resultat {
        Ok(valeur) => {
            println!("Résultat du calcul : {valeur}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("erreur : {message}");
            ExitCode::FAILURE
        }
    }
}

/// Lit le fichier ligne à ligne : un `evaluer` par ligne, un seul
/// `finaliser`. Les lignes sont concaténées SANS séparateur implicite :
/// une frontière de ligne doit tomber entre deux jetons (en pratique la
/// fin de ligne suit un blanc ou un jeton complet).
fn calculer_fichier(chemin: &Path) -> Result<BigInt, String> {
    let fichier =
        File::open(chemin).map_err(|e| format!("lecture de {}: {e}", chemin.display()))?;

    let mut calc = Calculatrice::new();
    for ligne in BufReader::new(fichier).lines() {
        let ligne = ligne.map_err(|e| format!("lecture de {}: {e}", chemin.display()))?;
        calc.evaluer(&ligne).map_err(|e| e.to_string())?;
    }
    calc.finaliser().map_err(|e| e.to_string())
}
