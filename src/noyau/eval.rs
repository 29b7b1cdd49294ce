// src/noyau/eval.rs
//
// Machine à deux états, jeton par jeton (pas d'arbre de syntaxe).
//
// Deux accumulateurs :
// - `somme`   : total des chaînes de multiplication déjà fermées par un '+'
// - `produit` : valeur de la chaîne de multiplication en cours
//
// Grammaire (stricte, gauche à droite, sans précédence au-delà de
// “les chaînes de × se replient avant d'être additionnées”) :
// - AttenteNombre   + nombre  -> le nombre entre dans `produit`
// - AttenteOperateur + '+'    -> `produit` se replie dans `somme`
// - AttenteOperateur + '*'    -> la chaîne continue, rien à replier
// - tout autre couple état/jeton est une erreur positionnée
//
// L'état vit entièrement dans l'instance : plusieurs fragments peuvent être
// évalués bout à bout (une ligne de fichier = un fragment) avant un unique
// `finaliser`.

use num_bigint::BigInt;

use super::accumulateur::Accumulateur;
use super::erreurs::ErreurCalcul;
use super::jetons::{decouper, Jeton};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Etat {
    AttenteNombre,
    AttenteOperateur,
}

#[derive(Debug)]
pub struct Calculatrice {
    etat: Etat,
    /// Jetons consommés (blancs compris), cumulés sur tous les fragments.
    /// Sert de position 1-based dans les erreurs.
    compteur: usize,
    somme: Accumulateur,
    produit: Accumulateur,
    /// La chaîne courante a-t-elle déjà consommé son premier nombre ?
    /// Distinct de `produit.est_zero()` : une chaîne OUVERTE par un 0
    /// littéral vaut 0 mais n'est pas vide ("0 * 5" doit valoir 0).
    chaine_entamee: bool,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            etat: Etat::AttenteNombre,
            compteur: 0,
            somme: Accumulateur::new(),
            produit: Accumulateur::new(),
            chaine_entamee: false,
        }
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consomme un fragment d'expression, jeton par jeton.
    ///
    /// Retourne `&mut Self` pour permettre l'enchaînement
    /// `calc.evaluer(..)?.finaliser()`. Les fragments successifs sont
    /// évalués comme s'ils étaient concaténés SANS séparateur implicite :
    /// à l'appelant de couper sur une frontière de jeton (un blanc,
    /// typiquement une fin de ligne).
    pub fn evaluer(&mut self, fragment: &str) -> Result<&mut Self, ErreurCalcul> {
        for jeton in decouper(fragment) {
            self.compteur += 1;

            match jeton {
                Jeton::Blanc => continue,

                Jeton::Plus => {
                    if self.etat != Etat::AttenteOperateur {
                        return Err(ErreurCalcul::OperateurInattendu {
                            operateur: '+',
                            position: self.compteur,
                        });
                    }
                    self.fermer_chaine();
                }

                Jeton::Fois => {
                    if self.etat != Etat::AttenteOperateur {
                        return Err(ErreurCalcul::OperateurInattendu {
                            operateur: '*',
                            position: self.compteur,
                        });
                    }
                    // la chaîne continue : rien à replier
                    self.etat = Etat::AttenteNombre;
                }

                Jeton::Litteral(texte) => {
                    // grammaire d'abord, parsing ensuite : "77 abc" est un
                    // NombreInattendu, pas un LitteralInvalide
                    if self.etat != Etat::AttenteNombre {
                        return Err(ErreurCalcul::NombreInattendu {
                            litteral: texte.to_string(),
                            position: self.compteur,
                        });
                    }
                    let nombre: i32 =
                        texte.parse().map_err(|_| ErreurCalcul::LitteralInvalide {
                            litteral: texte.to_string(),
                            position: self.compteur,
                        })?;
                    self.empiler_nombre(nombre);
                }
            }
        }

        Ok(self)
    }

    /// Termine l'évaluation : referme la chaîne courante dans `somme` et
    /// en extrait la valeur exacte.
    ///
    /// Échoue si le flux s'est arrêté en pleine chaîne (ou sans aucun
    /// jeton). Conceptuellement destructif : `somme` garde le repli, donc
    /// réutiliser l'instance ensuite cumule sur ce résultat.
    pub fn finaliser(&mut self) -> Result<BigInt, ErreurCalcul> {
        if self.etat != Etat::AttenteOperateur {
            return Err(ErreurCalcul::ExpressionIncomplete {
                position: self.compteur,
            });
        }

        self.fermer_chaine();
        Ok(self.somme.valeur())
    }

    /// Replie `produit` dans `somme` et rouvre une chaîne vide.
    /// (Même geste pour '+' et pour la finalisation.)
    fn fermer_chaine(&mut self) {
        if !self.produit.est_zero() {
            self.somme.ajouter_acc(&self.produit);
            self.produit.remise_a_zero();
        }
        self.chaine_entamee = false;
        self.etat = Etat::AttenteNombre;
    }

    /// Fait entrer un nombre dans la chaîne courante : le premier par
    /// addition (le produit part de zéro), les suivants par multiplication.
    /// Pas de cas spécial “multiplier par soi-même” pour le premier facteur.
    fn empiler_nombre(&mut self, nombre: i32) {
        if self.chaine_entamee {
            self.produit.multiplier(nombre);
        } else {
            self.produit.ajouter(nombre);
            self.chaine_entamee = true;
        }
        self.etat = Etat::AttenteOperateur;
    }
}

/// Raccourci : état neuf, un seul fragment, finalisation.
pub fn calculer(expression: &str) -> Result<BigInt, ErreurCalcul> {
    let mut calc = Calculatrice::new();
    calc.evaluer(expression)?.finaliser()
}
