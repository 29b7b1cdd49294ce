//! Noyau exact Z-exact
//!
//! Organisation interne :
//! - accumulateur.rs : BigInt précis + tampon i32 (chemin rapide)
//! - jetons.rs       : découpage en jetons (blancs comptés)
//! - erreurs.rs      : taxonomie d'erreurs, position 1-based
//! - eval.rs         : machine à deux états (somme / produit)

pub mod accumulateur;
pub mod erreurs;
pub mod eval;
pub mod jetons;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalcul;
pub use eval::{calculer, Calculatrice};
