// src/noyau/erreurs.rs
//
// Erreurs du noyau. Chaque variante transporte la position (1-based) du
// jeton fautif, blancs compris, cumulée sur tous les fragments déjà lus.
//
// Aucune récupération silencieuse : sur erreur, l'état partiel de la
// calculatrice n'est pas fiable et aucun résultat n'existe.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Opérateur vu là où un nombre était attendu.
    #[error("nombre attendu mais opérateur '{operateur}' trouvé (jeton {position})")]
    OperateurInattendu { operateur: char, position: usize },

    /// Nombre vu là où un opérateur était attendu.
    #[error("opérateur '+' ou '*' attendu mais nombre {litteral} trouvé (jeton {position})")]
    NombreInattendu { litteral: String, position: usize },

    /// `finaliser` appelé alors qu'un nombre manque encore
    /// (flux terminé en pleine chaîne, ou entrée vide).
    #[error("expression incomplète : un nombre est attendu comme dernier jeton (jeton {position})")]
    ExpressionIncomplete { position: usize },

    /// Littéral imparsable dans le mot machine du chemin rapide (i32).
    /// Erreur de parsing, pas de grammaire.
    #[error("littéral numérique invalide {litteral:?} (jeton {position})")]
    LitteralInvalide { litteral: String, position: usize },
}

impl ErreurCalcul {
    /// Position (1-based) du jeton fautif, blancs compris.
    pub fn position(&self) -> usize {
        match self {
            Self::OperateurInattendu { position, .. }
            | Self::NombreInattendu { position, .. }
            | Self::ExpressionIncomplete { position, .. }
            | Self::LitteralInvalide { position, .. } => *position,
        }
    }
}
