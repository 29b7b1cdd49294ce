//! Calculatrice Z-exact — bibliothèque d'évaluation.
//!
//! Expressions d'additions et de multiplications sur entiers signés de
//! taille arbitraire, résultat exact en [`num_bigint::BigInt`].
//!
//! Deux façons de s'en servir :
//! - [`calculer`] : une expression complète, un résultat
//! - [`Calculatrice`] : évaluation incrémentale, fragment par fragment
//!   (typiquement une ligne de fichier par fragment), puis
//!   [`Calculatrice::finaliser`] une seule fois
//!
//! ```
//! use calculatrice_zexact::calculer;
//! use num_bigint::BigInt;
//!
//! assert_eq!(calculer("77 + 34 * 45").unwrap(), BigInt::from(1607));
//! ```

pub mod noyau;

pub use noyau::{calculer, Calculatrice, ErreurCalcul};
