// src/noyau/accumulateur.rs
//
// Accumulateur exact optimisé.
//
// BigInt est coûteux à manipuler opération par opération (allocation à
// chaque +/×). On garde donc un tampon i32 “en attente” et on ne touche à
// la partie multi-précision que lorsque le tampon déborde, ou à la lecture.
//
// Invariants :
// - valeur vraie = precis + tampon (usage additif)
// - le tampon est replié dans `precis` dès qu'une opération le ferait
//   sortir de [i32::MIN, i32::MAX], ou quand `valeur()` est appelée
//
// Les intermédiaires se calculent en i64 (double largeur) : toute somme et
// tout produit de deux i32 y tiennent, le test de débordement est exact.

use num_bigint::BigInt;
use num_traits::Zero;

fn deborde_i32(x: i64) -> bool {
    x > i64::from(i32::MAX) || x < i64::from(i32::MIN)
}

#[derive(Clone, Debug, Default)]
pub struct Accumulateur {
    precis: BigInt,
    tampon: i32,
}

impl Accumulateur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remise à zéro totale (élément neutre de l'addition).
    pub fn remise_a_zero(&mut self) {
        self.precis = BigInt::zero();
        self.tampon = 0;
    }

    /// Vrai ssi la valeur vraie est nulle (tampon ET partie précise).
    pub fn est_zero(&self) -> bool {
        self.tampon == 0 && self.precis.is_zero()
    }

    /// Replie le tampon dans la partie précise.
    fn normaliser(&mut self) {
        if self.tampon != 0 {
            self.precis += self.tampon;
            self.tampon = 0;
        }
    }

    /// Valeur exacte (normalise d'abord). Idempotent.
    pub fn valeur(&mut self) -> BigInt {
        self.normaliser();
        self.precis.clone()
    }

    /// Ajoute un petit entier ; la multi-précision n'est touchée qu'en cas
    /// de débordement du tampon.
    pub fn ajouter(&mut self, delta: i32) {
        let somme = i64::from(self.tampon) + i64::from(delta);
        if deborde_i32(somme) {
            self.precis += somme;
            self.tampon = 0;
        } else {
            self.tampon = somme as i32;
        }
    }

    /// Ajoute un autre accumulateur, sans le normaliser : ses deux champs
    /// sont absorbés séparément.
    pub fn ajouter_acc(&mut self, autre: &Accumulateur) {
        if !autre.precis.is_zero() {
            self.precis += &autre.precis;
        }
        self.ajouter(autre.tampon);
    }

    /// Multiplie par un petit entier.
    ///
    /// facteur == 0 : remise à zéro directe (un produit contenant 0 vaut 0,
    /// inutile de multiplier quoi que ce soit).
    ///
    /// Sinon : (precis + tampon) × f == precis×f + tampon×f, les deux
    /// champs se multiplient donc séparément.
    pub fn multiplier(&mut self, facteur: i32) {
        if facteur == 0 {
            self.remise_a_zero();
            return;
        }

        if !self.precis.is_zero() {
            self.precis *= facteur;
        }

        let produit = i64::from(self.tampon) * i64::from(facteur);
        if deborde_i32(produit) {
            self.precis += produit;
            self.tampon = 0;
        } else {
            self.tampon = produit as i32;
        }
    }
}
